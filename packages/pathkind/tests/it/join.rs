use pathkind::{
    error::PathError,
    mk_file_name, mk_rel_dir, mk_rel_file,
    path::{
        AnyDirectoryPath, AnyFilePath, DirectoryPath, FilePath, JoinWith, RelativeDirectoryPath,
        RelativeFilePath, TryJoinWith,
    },
};
use pretty_assertions::assert_eq as pretty_assert_eq;
use simple_test_case::test_case;

use crate::{dir, file, rel_dir, rel_file};

#[test]
fn output_kind_follows_the_operand() {
    let base = dir(r"C:\data");

    let nested: DirectoryPath = base.join(mk_rel_dir!("nested"));
    let report: FilePath = base.join(mk_rel_file!(r"reports\q1.csv"));
    let named: FilePath = base.join(mk_file_name!("notes.txt"));
    pretty_assert_eq!(nested, dir(r"C:\data\nested"));
    pretty_assert_eq!(report, file(r"C:\data\reports\q1.csv"));
    pretty_assert_eq!(named, file(r"C:\data\notes.txt"));
}

#[test]
fn output_base_follows_the_directory() {
    let relative = rel_dir(r"work\project");
    let joined: RelativeFilePath = relative.join(&rel_file(r"src\lib.rs"));
    pretty_assert_eq!(joined, rel_file(r"work\project\src\lib.rs"));
    let joined: RelativeDirectoryPath = relative.join(&rel_dir("target"));
    pretty_assert_eq!(joined, rel_dir(r"work\project\target"));

    let any = AnyDirectoryPath::try_from(r"C:\data").expect("any dir");
    let joined: AnyFilePath = any.join(mk_file_name!("a.txt"));
    pretty_assert_eq!(joined.as_str(), r"C:\data\a.txt");
    assert!(joined.is_absolute());
}

#[test]
fn division_is_join() {
    let base = dir(r"C:\data");
    pretty_assert_eq!(
        &base / mk_rel_dir!("a") / mk_file_name!("b.txt"),
        file(r"C:\data\a\b.txt")
    );
    pretty_assert_eq!(&base / &rel_file("c.txt"), base.join(rel_file("c.txt")));
}

#[test_case(r"C:\data", r"..\other", r"C:\other"; "parent segment")]
#[test_case(r"C:\data", r"..\..\..\x", r"C:\x"; "clamped at root")]
#[test_case(r"C:\data", r".\x\.\y", r"C:\data\x\y"; "current segments")]
#[test_case(r"C:\data\", "x", r"C:\data\x"; "trailing separator on base")]
#[test_case(r"C:\", "x", r"C:\x"; "drive root")]
#[test_case("C:", "x", "C:x"; "bare drive")]
#[test_case(r"\\server\share", r"x\..\y", r"\\server\share\y"; "unc")]
#[test_case(r"\\server", r"..\x", r"\\server\x"; "parent after unc server")]
#[test_case(r"\\server", r".\x", r"\\server\x"; "current after unc server")]
#[test_case(r"\\", r"x\..\y", r"\\x\y"; "bare unc prefix")]
#[test_case("/tmp/data", "../x", "/tmp/x"; "posix")]
#[test_case("C:/data", r"x\y", "C:/data/x/y"; "base separator wins")]
#[test_case(r"C:\data", "", r"C:\data"; "empty operand")]
#[test]
fn rooted_joins_are_canonical(base: &str, relative: &str, expected: &str) {
    let joined = dir(base).join(rel_dir(relative));
    pretty_assert_eq!(joined.as_str(), expected);
    assert!(
        !joined.as_str().split(['\\', '/']).any(|segment| segment == "." || segment == ".."),
        "{joined}"
    );
}

#[test]
fn relative_joins_are_not_canonicalized() {
    let joined = rel_dir(r"a\b").join(rel_dir(r"..\c"));
    pretty_assert_eq!(joined.as_str(), r"a\b\..\c");

    let joined = rel_dir("").join(rel_file("x.txt"));
    pretty_assert_eq!(joined.as_str(), "x.txt");
}

#[test]
fn try_join_validates_segments() {
    let base = dir(r"C:\data");
    pretty_assert_eq!(base.try_join_dir("a"), Ok(dir(r"C:\data\a")));
    pretty_assert_eq!(base.try_join_file("a.txt"), Ok(file(r"C:\data\a.txt")));
    pretty_assert_eq!(base.try_join_dirs(["a", "b", ".."]), Ok(dir(r"C:\data\a")));
    pretty_assert_eq!(
        base.try_join_combined(["a", "b"], "c.txt"),
        Ok(file(r"C:\data\a\b\c.txt"))
    );

    let err = base.try_join_file(r"a\").expect_err("directory shape");
    assert!(err.is_structural_mismatch());
    let err = base.try_join_dir(r"D:\elsewhere").expect_err("rooted segment");
    pretty_assert_eq!(err.argument(), "directory_path");
    let err = base.try_join_dirs(["a", "b|c"]).expect_err("invalid character");
    assert!(matches!(err, PathError::InvalidCharacter(_)), "{err}");
}
