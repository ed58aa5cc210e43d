use pathkind::{error::FormatError, format::ELLIPSIS};
use pretty_assertions::assert_eq as pretty_assert_eq;
use simple_test_case::test_case;

use crate::{dir, file};

const SAMPLE: &str = r"C:\path\to\a\file.txt";

#[test_case(21, SAMPLE; "fits exactly")]
#[test_case(20, r"C:\path\...\file.txt"; "keeps the anchor")]
#[test_case(16, r"C:\p...\file.txt"; "short anchor")]
#[test_case(12, r"...\file.txt"; "only the tail")]
#[test_case(6, r"...\fi"; "truncated tail")]
#[test_case(1, "."; "single character")]
#[test]
fn display_width(width: i32, expected: &str) {
    let path = file(SAMPLE);
    let rendered = path.display_width(width).expect("render");
    pretty_assert_eq!(rendered, expected);
    assert!(rendered.chars().count() <= usize::try_from(width).expect("positive width"));
}

#[test_case(0; "zero")]
#[test_case(-5; "negative")]
#[test_case(i32::MAX; "maximum")]
#[test]
fn display_width_range(width: i32) {
    let err = file(SAMPLE).display_width(width).expect_err("out of range");
    pretty_assert_eq!(
        err,
        FormatError::Range {
            width: width.into()
        }
    );
}

#[test]
fn display_is_raw() {
    pretty_assert_eq!(file(SAMPLE).to_string(), SAMPLE);
    pretty_assert_eq!(format!("{}", dir(r"C:\path\")), r"C:\path\");
}

#[test]
fn format_spec() {
    let path = file(SAMPLE);
    pretty_assert_eq!(path.format_spec("").expect("blank"), SAMPLE);
    pretty_assert_eq!(path.format_spec("20").expect("width"), r"C:\path\...\file.txt");
    pretty_assert_eq!(
        path.format_spec("wide"),
        Err(FormatError::Parse {
            spec: String::from("wide")
        })
    );
    pretty_assert_eq!(
        path.format_spec("0"),
        Err(FormatError::Range { width: 0 })
    );
}

#[test]
fn trailing_separator_stays_with_the_tail() {
    let path = dir(r"C:\some\long\directory\");
    let rendered = path.display_width(15).expect("render");
    pretty_assert_eq!(rendered, format!("C{ELLIPSIS}\\directory\\"));
}
