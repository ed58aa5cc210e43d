use std::{collections::BTreeSet, io::ErrorKind};

use color_eyre::{Result, eyre::Context};
use futures::{StreamExt, TryStreamExt};
use jiff::Timestamp;
use pathkind::{
    fs::{self, EntryKind, Metadata, TemporaryDirectory, TemporaryFile},
    mk_file_name, mk_rel_dir, mk_rel_file,
    path::{DirectoryPath, JoinWith, TryJoinWith},
};
use pretty_assertions::assert_eq as pretty_assert_eq;

fn io_kind(err: &color_eyre::Report) -> Option<ErrorKind> {
    err.downcast_ref::<std::io::Error>().map(|err| err.kind())
}

#[test_log::test(tokio::test)]
async fn write_then_read() -> Result<()> {
    let temp = TemporaryDirectory::new().await?;
    let path = temp.path().join(mk_file_name!("a.txt"));

    fs::write(&path, "hello").await?;
    pretty_assert_eq!(fs::read(&path).await?, b"hello".to_vec());
    pretty_assert_eq!(fs::read_to_string(&path).await?, "hello");
    assert!(path.exists().await);

    fs::remove_file(&path).await?;
    assert!(!path.exists().await);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn write_does_not_create_parents() -> Result<()> {
    let temp = TemporaryDirectory::new().await?;
    let path = temp.path().join(mk_rel_file!("missing/a.txt"));

    let err = fs::write(&path, "hello").await.expect_err("missing parent");
    pretty_assert_eq!(io_kind(&err), Some(ErrorKind::NotFound));
    Ok(())
}

#[test_log::test(tokio::test)]
async fn missing_entries_are_errors() -> Result<()> {
    let temp = TemporaryDirectory::new().await?;
    let file = temp.path().join(mk_file_name!("missing.txt"));
    let dir = temp.path().join(mk_rel_dir!("missing"));

    let err = fs::read(&file).await.expect_err("missing file");
    pretty_assert_eq!(io_kind(&err), Some(ErrorKind::NotFound));
    let err = fs::remove_file(&file).await.expect_err("missing file");
    pretty_assert_eq!(io_kind(&err), Some(ErrorKind::NotFound));
    let err = fs::remove_dir(&dir).await.expect_err("missing dir");
    pretty_assert_eq!(io_kind(&err), Some(ErrorKind::NotFound));
    let err = Metadata::from_path(&file).await.expect_err("missing file");
    pretty_assert_eq!(io_kind(&err), Some(ErrorKind::NotFound));
    Ok(())
}

#[test_log::test(tokio::test)]
async fn directories() -> Result<()> {
    let temp = TemporaryDirectory::new().await?;
    let nested = temp.path().join(mk_rel_dir!("a/b/c"));

    fs::create_dir_all(&nested).await?;
    fs::create_dir_all(&nested).await?;
    assert!(nested.exists().await);
    assert!(fs::is_dir(nested.as_std_path()).await);
    assert!(!fs::is_file(nested.as_std_path()).await);

    fs::remove_dir(&nested).await?;
    assert!(!nested.exists().await);

    let top = temp.path().join(mk_rel_dir!("a"));
    fs::remove_dir_all(&top).await?;
    assert!(!fs::exists(top.as_std_path()).await);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn enumeration_is_typed() -> Result<()> {
    let temp = TemporaryDirectory::new().await?;
    let root = temp.path();
    for name in ["one.txt", "two.txt"] {
        let path = root.try_join_file(name)?;
        fs::write(&path, name).await?;
    }
    fs::create_dir_all(&root.join(mk_rel_dir!("nested"))).await?;
    fs::write(&root.join(mk_rel_file!("nested/inner.txt")), "inner").await?;

    let files = fs::read_dir_files(root)
        .try_collect::<BTreeSet<_>>()
        .await?;
    let expected = BTreeSet::from([
        root.join(mk_file_name!("one.txt")),
        root.join(mk_file_name!("two.txt")),
    ]);
    pretty_assert_eq!(files, expected);

    let dirs = fs::read_dir_dirs(root).try_collect::<Vec<_>>().await?;
    pretty_assert_eq!(dirs, vec![root.join(mk_rel_dir!("nested"))]);
    Ok(())
}

#[cfg(unix)]
#[test_log::test(tokio::test)]
async fn invalid_entry_names_do_not_end_enumeration() -> Result<()> {
    let temp = TemporaryDirectory::new().await?;
    let root = temp.path();
    let mut expected = BTreeSet::new();
    for index in 0..40 {
        let path = root.try_join_file(format!("file{index:02}.txt"))?;
        fs::write(&path, "valid").await?;
        expected.insert(path);
    }
    tokio::fs::write(root.as_std_path().join("b|c.txt"), "invalid").await?;

    let (listed, errors): (Vec<_>, Vec<_>) = fs::read_dir_files(root)
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .partition(|entry| entry.is_ok());
    let listed = listed
        .into_iter()
        .collect::<Result<BTreeSet<_>>>()?;

    pretty_assert_eq!(errors.len(), 1);
    pretty_assert_eq!(listed, expected);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn hard_links_do_not_replace() -> Result<()> {
    let temp = TemporaryDirectory::new().await?;
    let original = temp.path().join(mk_file_name!("original.txt"));
    let link = temp.path().join(mk_file_name!("link.txt"));
    fs::write(&original, "content").await?;

    fs::hard_link(&original, &link).await?;
    pretty_assert_eq!(fs::read_to_string(&link).await?, "content");

    let err = fs::hard_link(&original, &link).await.expect_err("link exists");
    pretty_assert_eq!(io_kind(&err), Some(ErrorKind::AlreadyExists));
    Ok(())
}

#[test_log::test(tokio::test)]
async fn touch_creates_then_updates() -> Result<()> {
    let temp = TemporaryDirectory::new().await?;
    let path = temp.path().join(mk_file_name!("touched"));

    fs::touch(&path).await?;
    pretty_assert_eq!(fs::read(&path).await?, Vec::<u8>::new());

    let past = Timestamp::from_second(1_000_000_000).context("timestamp")?;
    fs::set_modified(&path, past).await?;
    pretty_assert_eq!(Metadata::from_path(&path).await?.modified, past);

    fs::touch(&path).await?;
    let modified = Metadata::from_path(&path).await?.modified;
    assert!(modified > past, "touch should update mtime: {modified}");
    Ok(())
}

#[test_log::test(tokio::test)]
async fn metadata() -> Result<()> {
    let temp = TemporaryDirectory::new().await?;
    let path = temp.path().join(mk_file_name!("data.bin"));
    fs::write(&path, [1u8, 2, 3]).await?;

    let metadata = Metadata::from_path(&path).await?;
    pretty_assert_eq!(metadata.kind, EntryKind::File);
    pretty_assert_eq!(metadata.len, 3);
    assert!(!metadata.readonly);

    fs::set_readonly(&path, true).await?;
    assert!(Metadata::from_path(&path).await?.readonly);
    fs::set_readonly(&path, false).await?;
    assert!(!Metadata::from_path(&path).await?.readonly);

    let metadata = Metadata::from_path(temp.path()).await?;
    pretty_assert_eq!(metadata.kind, EntryKind::Dir);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn temporary_guards() -> Result<()> {
    let temp = TemporaryFile::new().await?;
    let path = temp.path().clone();
    assert!(path.exists().await);
    temp.close().await?;
    assert!(!path.exists().await);

    let dir = TemporaryDirectory::new().await?;
    let inside = TemporaryFile::new_in(dir.path()).await?;
    pretty_assert_eq!(inside.path().parent().as_ref(), Some(dir.path()));
    drop(inside);
    dir.close().await?;
    Ok(())
}

#[test]
fn current_directory() -> Result<()> {
    let current = DirectoryPath::current()?;
    assert!(current.is_absolute());
    pretty_assert_eq!(
        current.as_std_path(),
        std::env::current_dir()?.as_path()
    );
    Ok(())
}
