use std::{
    cmp::Ordering,
    collections::{BTreeSet, HashSet},
};

use pathkind::{
    compare::PathComparer,
    path::{FileName, FilePath},
};
use pretty_assertions::assert_eq as pretty_assert_eq;
use simple_test_case::test_case;

use crate::file;

fn name(raw: &str) -> FileName {
    FileName::try_from(raw).unwrap_or_else(|err| panic!("parse {raw:?} as file name: {err}"))
}

#[test_case(r"C:\a.txt", r"c:\A.TXT", Ordering::Equal; "case")]
#[test_case(r"C:\a.txt", r"C:\b.txt", Ordering::Less; "ordinal")]
#[test_case(r"C:\file10.txt", r"C:\file2.txt", Ordering::Less; "digits compare ordinally")]
#[test_case(r"C:\z.txt", r"D:\a.txt", Ordering::Less; "drive first")]
#[test]
fn default_order(a: &str, b: &str, expected: Ordering) {
    let (a, b) = (file(a), file(b));
    pretty_assert_eq!(a.cmp(&b), expected);
    pretty_assert_eq!(b.cmp(&a), expected.reverse());
    pretty_assert_eq!(a == b, expected == Ordering::Equal);
    pretty_assert_eq!(PathComparer::Default.compare(&a, &b), expected);
}

#[test]
fn equal_paths_hash_equally() {
    let set = HashSet::from([file(r"C:\Data\A.txt"), file(r"c:\data\a.TXT")]);
    pretty_assert_eq!(set.len(), 1);

    let set = BTreeSet::from([name("B"), name("a"), name("b"), name("A")]);
    pretty_assert_eq!(set.len(), 2);
}

#[test]
fn absence_sorts_first() {
    let present = Some(file(r"C:\a.txt"));
    let absent: Option<FilePath> = None;
    assert!(absent < present);
    assert!(present > absent);
    pretty_assert_eq!(absent.cmp(&None), Ordering::Equal);
    pretty_assert_eq!(
        PathComparer::Logical.compare_option(absent.as_ref(), present.as_ref()),
        Ordering::Less
    );
    pretty_assert_eq!(
        PathComparer::Logical.compare_option(present.as_ref(), absent.as_ref()),
        Ordering::Greater
    );
}

#[test]
fn logical_sort() {
    let mut names = ["file10.txt", "File2.txt", "file1.txt", "file02.txt", "a.txt"]
        .map(name)
        .to_vec();
    names.sort_by(|a, b| PathComparer::Logical.compare(a, b));
    pretty_assert_eq!(
        names.iter().map(|name| name.as_str()).collect::<Vec<_>>(),
        vec!["a.txt", "file1.txt", "File2.txt", "file02.txt", "file10.txt"]
    );

    pretty_assert_eq!(name("a01").cmp_logical(&name("a1")), Ordering::Equal);
    pretty_assert_eq!(name("file2").cmp_logical(&name("file10")), Ordering::Less);
}

#[test]
fn numbered_names() {
    let sorted = |comparer: PathComparer| {
        let mut names = ["20", "2", "1", "10"].map(name).to_vec();
        names.sort_by(|a, b| comparer.compare(a, b));
        names.iter().map(|name| name.to_string()).collect::<Vec<_>>()
    };

    pretty_assert_eq!(sorted(PathComparer::Logical), vec!["1", "2", "10", "20"]);
    pretty_assert_eq!(sorted(PathComparer::Default), vec!["1", "10", "2", "20"]);
}

#[test]
fn case_duplicates_sort_together() {
    let mut names = ["c", "B", "a", "b"].map(name).to_vec();
    names.sort();

    pretty_assert_eq!(names[0], name("a"));
    pretty_assert_eq!(names[1], name("b"));
    pretty_assert_eq!(names[2], name("B"));
    pretty_assert_eq!(names[3], name("c"));
    assert!(names[0] < names[1]);
    pretty_assert_eq!(names[1].cmp(&names[2]), Ordering::Equal);
    assert!(names[2] < names[3]);
}
