//! Path types that carry what they are in their type.
//!
//! ## Rationale
//!
//! A plain string (or `PathBuf`) says nothing about what it points at.
//! Code that handles many paths ends up with a pile of easy mistakes:
//! - Joining a file onto a file, or a directory onto a file.
//! - Treating a relative path as absolute, or the other way around.
//! - Passing a whole path where only a name was expected.
//!
//! [`TypedPath`] moves these distinctions into the type system. Each value is
//! validated once, when it is created, and from then on the operations
//! available on it (and the types they return) follow from its type. Joining
//! a file onto a file doesn't compile.
//!
//! ## The lattice
//!
//! A [`TypedPath`] is parameterized over two independent axes:
//! - Its base: [`Abs`] (rooted), [`Rel`] (not rooted), or [`SomeBase`].
//! - Its type: [`File`], [`Dir`], [`Name`] (a bare file name), or
//!   [`SomeType`].
//!
//! The named aliases ([`FilePath`], [`RelativeDirectoryPath`], [`FileName`],
//! ...) are the points of this lattice that the rest of the crate works
//! with. More constrained paths widen into less constrained ones with
//! [`From`]; the reverse goes through the fallible `try_as_*` methods.
//!
//! ## Syntax
//!
//! Validation is purely syntactic and follows Windows path rules on every
//! host; see [`crate::rules`] for the details. Nothing here touches the
//! filesystem, so a path can describe something that doesn't exist yet.
//! Use [`crate::fs`] to do anything with the path on disk.

use std::{
    any::type_name,
    borrow::Cow,
    cmp::Ordering,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::Div,
    path::{Path, PathBuf},
    str::FromStr,
};

use derive_more::Display;
use duplicate::{duplicate, duplicate_item};
use paste::paste;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tap::Pipe;

use crate::{
    compare,
    error::{FormatError, PathError},
    format,
    rules::{self, Rules},
};

pub use crate::{mk_file_name, mk_rel_dir, mk_rel_file};

/// Any path at all.
pub type AnyPath = TypedPath<SomeBase, SomeType>;

/// A file path that may or may not be rooted.
pub type AnyFilePath = TypedPath<SomeBase, File>;

/// A directory path that may or may not be rooted.
pub type AnyDirectoryPath = TypedPath<SomeBase, Dir>;

/// A rooted file path.
pub type FilePath = TypedPath<Abs, File>;

/// A rooted directory path.
pub type DirectoryPath = TypedPath<Abs, Dir>;

/// A file path relative to some directory.
pub type RelativeFilePath = TypedPath<Rel, File>;

/// A directory path relative to some directory.
pub type RelativeDirectoryPath = TypedPath<Rel, Dir>;

/// A bare file name, without any directory part.
pub type FileName = TypedPath<Rel, Name>;

/// Make an instance of a [`RelativeFilePath`] with compile-time validation
/// of its rootedness.
///
/// ```
/// use pathkind::path::mk_rel_file;
///
/// let file = mk_rel_file!("src/main.rs");
/// assert_eq!(file.as_str(), "src/main.rs");
/// ```
#[macro_export]
macro_rules! mk_rel_file {
    ($path:literal) => {{
        $crate::assert_relative!($path);
        $crate::path::RelativeFilePath::try_from($path)
            .unwrap_or_else(|err| panic!("invalid file path literal {:?}: {err}", $path))
    }};
}

/// Make an instance of a [`RelativeDirectoryPath`] with compile-time
/// validation of its rootedness.
///
/// ```
/// use pathkind::path::mk_rel_dir;
///
/// let dir = mk_rel_dir!("src");
/// assert_eq!(dir.as_str(), "src");
/// ```
#[macro_export]
macro_rules! mk_rel_dir {
    ($path:literal) => {{
        $crate::assert_relative!($path);
        $crate::path::RelativeDirectoryPath::try_from($path)
            .unwrap_or_else(|err| panic!("invalid directory path literal {:?}: {err}", $path))
    }};
}

/// Make an instance of a [`FileName`] with compile-time validation
/// that it has no directory part.
///
/// ```
/// use pathkind::path::mk_file_name;
///
/// let name = mk_file_name!("Cargo.toml");
/// assert_eq!(name.extension(), Some("toml"));
/// ```
#[macro_export]
macro_rules! mk_file_name {
    ($path:literal) => {{
        $crate::assert_relative!($path);
        $crate::assert_file_name!($path);
        $crate::path::FileName::try_from($path)
            .unwrap_or_else(|err| panic!("invalid file name literal {:?}: {err}", $path))
    }};
}

/// Assert that the string provided indicates a relative path.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_relative {
    ($path:literal) => {{
        const _: () = {
            // Reject drive letters: C:, D:, etc.
            assert!(
                !($path.len() >= 2
                    && $path.as_bytes()[0].is_ascii_alphabetic()
                    && $path.as_bytes()[1] == b':'),
                "path has drive letter"
            );

            // Covers UNC paths (\\server, //server) as well.
            assert!(
                !$crate::const_str::starts_with!($path, "/")
                    && !$crate::const_str::starts_with!($path, "\\"),
                "path starts with separator"
            );
        };
    }};
}

/// Assert that the string provided has no directory part.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_file_name {
    ($path:literal) => {{
        const _: () = {
            assert!(
                !$crate::const_str::contains!($path, "/")
                    && !$crate::const_str::contains!($path, "\\")
                    && !$crate::const_str::contains!($path, ":"),
                "file name has directory part"
            );
        };
    }};
}

/// Indicates an unknown value for this path base.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct SomeBase;

/// Indicates an unknown value for this type of path.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct SomeType;

/// An absolute path is rooted: it starts at a drive (`C:\`), a share
/// (`\\server\share`), or a leading separator (`\`, `/`).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Abs;

/// A relative path is a "partial" path; it describes a path starting from
/// an undefined point. Once the "starting location" is given, the relative
/// path can take over, describing where to go from that location.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Rel;

/// A directory contains other file system entities,
/// such as files or other directories.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Dir;

/// A file contains data.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct File;

/// The name of a file, without any directory part.
///
/// Every name is also a file; [`FileName`] widens into [`RelativeFilePath`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Name;

/// A location on the file system according to the type modifiers.
///
/// This type is about _intent_ within the working program;
/// it does not validate that given resources on disk exist
/// or are the correct type. Validation is syntactic only, and happens
/// exactly once, when the value is created.
///
/// ## Path manipulation
///
/// Joining uses strong types: a directory joined with a relative file is a
/// file, and the result has the base of the directory:
///
/// ```
/// use pathkind::path::{DirectoryPath, FilePath, JoinWith, mk_rel_file};
///
/// let dir = DirectoryPath::try_from(r"C:\data").unwrap();
/// let file: FilePath = dir.join(mk_rel_file!("reports/q1.csv"));
/// assert_eq!(file.as_str(), r"C:\data\reports\q1.csv");
/// ```
///
/// Prefer [`JoinWith`] (or `/`) with typed operands; [`TryJoinWith`]
/// validates string segments at runtime instead.
///
/// ## Comparison
///
/// Equality, hashing, and ordering are ordinal and case-insensitive, and
/// only defined between paths of the same type. Rooted paths are
/// canonicalized when they are joined, but not when they are created:
/// `C:\a\..\b` and `C:\b` are different values.
#[derive(Display)]
#[display("{raw}")]
pub struct TypedPath<Base, Type> {
    /// The base of the path.
    base: PhantomData<Base>,

    /// The type of the path.
    ty: PhantomData<Type>,

    /// The validated path string.
    raw: String,
}

/// Rules contributed by a marker on either axis of the lattice.
///
/// A path is valid for `TypedPath<B, T>` when it passes the union of
/// `B::RULES` and `T::RULES`.
pub trait Validator {
    /// The rules this marker requires.
    const RULES: Rules;
}

/// A marker for the type axis of the lattice.
pub trait Kind: Validator {
    /// The argument name reported when validation for this kind fails.
    const ARGUMENT: &'static str;
}

impl Validator for SomeBase {
    const RULES: Rules = Rules::NONE;
}

impl Validator for Abs {
    const RULES: Rules = Rules::ROOTED;
}

impl Validator for Rel {
    const RULES: Rules = Rules::NOT_ROOTED;
}

duplicate! {
    [
        ty_self ty_rules ty_argument;
        [ SomeType ] [ Rules::NONE ] [ "path" ];
        [ File ] [ Rules::FILE ] [ "file_path" ];
        [ Dir ] [ Rules::NONE ] [ "directory_path" ];
        [ Name ] [ Rules::FILE_NAME.union(Rules::FILE) ] [ "file_name" ];
    ]
    impl Validator for ty_self {
        const RULES: Rules = ty_rules;
    }

    impl Kind for ty_self {
        const ARGUMENT: &'static str = ty_argument;
    }
}

impl<B: Validator, T: Kind> TypedPath<B, T> {
    /// The rules a raw string must pass to become this type.
    pub const RULES: Rules = B::RULES.union(T::RULES);

    /// Validate a possibly absent raw string as this type.
    ///
    /// Absence is reported as [`PathError::MissingArgument`].
    pub fn from_option(path: Option<impl AsRef<str>>) -> Result<Self, PathError> {
        let path: Option<&str> = path.as_ref().map(|path| path.as_ref());
        rules::check(path, T::ARGUMENT, Self::RULES)?;
        Ok(Self::new_unchecked(path.unwrap_or_default()))
    }

    /// Try to convert into another point of the lattice,
    /// re-validating the raw string for the target type.
    pub fn try_as<B2: Validator, T2: Kind>(&self) -> Result<TypedPath<B2, T2>, PathError> {
        TypedPath::try_from(self.as_str())
    }
}

impl<B, T> TypedPath<B, T> {
    /// View the path as a string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// View the path as a standard path.
    pub fn as_std_path(&self) -> &Path {
        Path::new(&self.raw)
    }

    /// Whether the path is rooted.
    ///
    /// Always true for [`Abs`] paths and always false for [`Rel`] paths.
    pub fn is_absolute(&self) -> bool {
        rules::is_rooted(&self.raw)
    }

    /// Whether the path is not rooted.
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// Get the parent of the provided path, if one exists.
    ///
    /// Unlike the standard library, this method returns `None`
    /// if you request the parent of a relative path with one component.
    /// The parent of a rooted path with one component is its root.
    pub fn parent(&self) -> Option<TypedPath<B, Dir>> {
        rules::parent(&self.raw).map(TypedPath::new_unchecked)
    }

    /// The extension of the final component, without the leading dot.
    ///
    /// Names that start with a dot and have no other dot (`.bashrc`)
    /// have no extension.
    pub fn extension(&self) -> Option<&str> {
        rules::extension_dot(&self.raw)
            .map(|dot| &self.raw[dot + 1..])
            .filter(|extension| !extension.is_empty())
    }

    /// Compare with another path of the same type in natural order.
    ///
    /// See [`compare::logical`].
    pub fn cmp_logical(&self, other: &Self) -> Ordering {
        compare::logical(&self.raw, &other.raw)
    }

    /// Render the path in at most `width` characters.
    ///
    /// See [`format::compact`].
    pub fn display_width(&self, width: i32) -> Result<Cow<'_, str>, FormatError> {
        format::compact(&self.raw, width)
    }

    /// Render the path according to a format string:
    /// blank renders the path unchanged, otherwise it is a width.
    ///
    /// See [`format::format_spec`].
    pub fn format_spec(&self, spec: &str) -> Result<Cow<'_, str>, FormatError> {
        format::format_spec(&self.raw, spec)
    }

    /// Convert the type to a generic path.
    pub fn as_generic(&self) -> AnyPath {
        TypedPath::new_unchecked(self.raw.clone())
    }

    pub(crate) fn new_unchecked(raw: impl Into<String>) -> Self {
        Self {
            base: PhantomData,
            ty: PhantomData,
            raw: raw.into(),
        }
    }
}

impl<B> TypedPath<B, Dir> {
    /// The last component of the directory, if it has one.
    ///
    /// A root (`C:\`, `\\server\share`) has no name.
    pub fn name(&self) -> Option<RelativeDirectoryPath> {
        match rules::final_component(&self.raw) {
            "" => None,
            name => Some(TypedPath::new_unchecked(name)),
        }
    }

    /// Join a relative string onto this directory without validating it.
    ///
    /// Callers must only pass strings that are valid relative paths
    /// of kind `T`.
    pub(crate) fn join_raw<T>(&self, relative: &str) -> TypedPath<B, T> {
        rules::join(&self.raw, relative).pipe(TypedPath::new_unchecked)
    }
}

#[duplicate_item(
    ty_kind;
    [ File ];
    [ Name ];
)]
impl<B> TypedPath<B, ty_kind> {
    /// The name of the file, without its directory part.
    pub fn file_name(&self) -> FileName {
        rules::final_component(&self.raw).pipe(TypedPath::new_unchecked)
    }

    /// The same path with the extension of its name removed.
    pub fn without_extension(&self) -> Self {
        match rules::extension_dot(&self.raw) {
            Some(dot) => TypedPath::new_unchecked(&self.raw[..dot]),
            None => self.clone(),
        }
    }

    /// The same path with the extension of its name replaced.
    ///
    /// A single leading dot on `extension` is ignored, and an empty
    /// extension removes the current one. Only `extension` is validated:
    /// it must not contain invalid characters or a directory part.
    pub fn with_extension(&self, extension: &str) -> Result<Self, PathError> {
        rules::check(Some(extension), "extension", Rules::FILE_NAME)?;
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        let stem = self.without_extension();
        if extension.is_empty() {
            return Ok(stem);
        }
        Ok(TypedPath::new_unchecked(format!("{}.{extension}", stem.raw)))
    }
}

impl<B: Validator, T: Kind> TryFrom<&str> for TypedPath<B, T> {
    type Error = PathError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        rules::check(Some(value), T::ARGUMENT, Self::RULES)?;
        Ok(Self::new_unchecked(value))
    }
}

impl<B: Validator, T: Kind> TryFrom<String> for TypedPath<B, T> {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        rules::check(Some(&value), T::ARGUMENT, Self::RULES)?;
        Ok(Self::new_unchecked(value))
    }
}

impl<B: Validator, T: Kind> TryFrom<&String> for TypedPath<B, T> {
    type Error = PathError;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl<B: Validator, T: Kind> FromStr for TypedPath<B, T> {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl<B, T> Clone for TypedPath<B, T> {
    fn clone(&self) -> Self {
        Self::new_unchecked(self.raw.clone())
    }
}

impl<B, T> PartialEq for TypedPath<B, T> {
    fn eq(&self, other: &Self) -> bool {
        compare::eq_ignore_case(&self.raw, &other.raw)
    }
}

impl<B, T> Eq for TypedPath<B, T> {}

impl<B, T> PartialOrd for TypedPath<B, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<B, T> Ord for TypedPath<B, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare::ordinal_ignore_case(&self.raw, &other.raw)
    }
}

impl<B, T> Hash for TypedPath<B, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        compare::hash_ignore_case(&self.raw, state);
    }
}

impl<B, T> std::fmt::Debug for TypedPath<B, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TypedPath::<{}, {}>({:?})",
            short_type_name::<B>(),
            short_type_name::<T>(),
            self.raw
        )
    }
}

fn short_type_name<T>() -> &'static str {
    let name = type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

impl<B, T> AsRef<TypedPath<B, T>> for TypedPath<B, T> {
    fn as_ref(&self) -> &TypedPath<B, T> {
        self
    }
}

impl<B, T> From<&TypedPath<B, T>> for TypedPath<B, T> {
    fn from(value: &TypedPath<B, T>) -> Self {
        value.clone()
    }
}

impl<B, T> From<TypedPath<B, T>> for PathBuf {
    fn from(value: TypedPath<B, T>) -> Self {
        PathBuf::from(value.raw)
    }
}

impl<B, T> From<&TypedPath<B, T>> for PathBuf {
    fn from(value: &TypedPath<B, T>) -> Self {
        PathBuf::from(&value.raw)
    }
}

impl<B, T> From<TypedPath<B, T>> for String {
    fn from(value: TypedPath<B, T>) -> Self {
        value.raw
    }
}

impl<'de, B: Validator, T: Kind> Deserialize<'de> for TypedPath<B, T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl<B, T> Serialize for TypedPath<B, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

// More constrained paths widen into less constrained paths infallibly.
#[duplicate_item(
    from_base from_ty to_base to_ty;
    [ Abs ] [ File ] [ Abs ] [ SomeType ];
    [ Abs ] [ File ] [ SomeBase ] [ File ];
    [ Abs ] [ File ] [ SomeBase ] [ SomeType ];
    [ Abs ] [ Dir ] [ Abs ] [ SomeType ];
    [ Abs ] [ Dir ] [ SomeBase ] [ Dir ];
    [ Abs ] [ Dir ] [ SomeBase ] [ SomeType ];
    [ Abs ] [ SomeType ] [ SomeBase ] [ SomeType ];
    [ Rel ] [ File ] [ Rel ] [ SomeType ];
    [ Rel ] [ File ] [ SomeBase ] [ File ];
    [ Rel ] [ File ] [ SomeBase ] [ SomeType ];
    [ Rel ] [ Dir ] [ Rel ] [ SomeType ];
    [ Rel ] [ Dir ] [ SomeBase ] [ Dir ];
    [ Rel ] [ Dir ] [ SomeBase ] [ SomeType ];
    [ Rel ] [ SomeType ] [ SomeBase ] [ SomeType ];
    [ Rel ] [ Name ] [ Rel ] [ File ];
    [ Rel ] [ Name ] [ Rel ] [ SomeType ];
    [ Rel ] [ Name ] [ SomeBase ] [ File ];
    [ Rel ] [ Name ] [ SomeBase ] [ SomeType ];
    [ SomeBase ] [ File ] [ SomeBase ] [ SomeType ];
    [ SomeBase ] [ Dir ] [ SomeBase ] [ SomeType ];
)]
impl From<TypedPath<from_base, from_ty>> for TypedPath<to_base, to_ty> {
    fn from(value: TypedPath<from_base, from_ty>) -> Self {
        TypedPath::new_unchecked(value.raw)
    }
}

// Any path can _fallibly_ be converted into any base of `Dir`/`File` type,
// or into a file name.
duplicate! {
    [
        to_base to_base_name;
        [ Abs ] [ abs ];
        [ Rel ] [ rel ];
        [ SomeBase ] [ any ];
    ]
    duplicate! {
        [
            to_ty to_ty_name;
            [ Dir ] [ dir ];
            [ File ] [ file ];
        ]
        impl<B: Validator, T: Kind> TypedPath<B, T> {
            paste! {
                /// Try to convert into the specified type.
                pub fn [<try_as_ to_base_name _ to_ty_name>](&self) -> Result<TypedPath<to_base, to_ty>, PathError> {
                    self.try_as()
                }
            }
        }
    }
}

impl<B: Validator, T: Kind> TypedPath<B, T> {
    /// Try to convert into a bare file name.
    pub fn try_as_file_name(&self) -> Result<FileName, PathError> {
        self.try_as()
    }
}

/// Infallibly joins known valid paths together.
///
/// The kind of the output is the kind of `other`, and its base is the base
/// of `self`. Joining onto a rooted directory canonicalizes the result
/// (`.` and `..` are resolved, separators normalized); joining onto a
/// relative directory only concatenates.
pub trait JoinWith<Other> {
    type Output;

    /// Join `other` to `self`.
    fn join(&self, other: Other) -> Self::Output;
}

// Any directory can be joined with typed relative paths; the output keeps
// the base of the directory and takes the kind of the relative path.
// `/` is sugar for the same operation.
duplicate! {
    [
        join_base;
        [ Abs ];
        [ Rel ];
        [ SomeBase ];
    ]
    duplicate! {
        [
            ty_other ty_output;
            [ TypedPath<Rel, Dir> ] [ TypedPath<join_base, Dir> ];
            [ &TypedPath<Rel, Dir> ] [ TypedPath<join_base, Dir> ];
            [ TypedPath<Rel, File> ] [ TypedPath<join_base, File> ];
            [ &TypedPath<Rel, File> ] [ TypedPath<join_base, File> ];
            [ TypedPath<Rel, Name> ] [ TypedPath<join_base, File> ];
            [ &TypedPath<Rel, Name> ] [ TypedPath<join_base, File> ];
        ]
        impl JoinWith<ty_other> for TypedPath<join_base, Dir> {
            type Output = ty_output;

            fn join(&self, other: ty_other) -> Self::Output {
                self.join_raw(other.as_str())
            }
        }

        impl Div<ty_other> for &TypedPath<join_base, Dir> {
            type Output = ty_output;

            fn div(self, rhs: ty_other) -> Self::Output {
                self.join(rhs)
            }
        }

        impl Div<ty_other> for TypedPath<join_base, Dir> {
            type Output = ty_output;

            fn div(self, rhs: ty_other) -> Self::Output {
                self.join(rhs)
            }
        }
    }
}

/// Creates and joins a path from the input.
///
/// ## Fallibility
///
/// This trait takes strings for path segments; this means we don't know
/// whether the inputs are actually valid for the path being joined.
///
/// These methods are fallible to reflect this fact: every segment is
/// validated as a relative path of the right kind before it is joined.
pub trait TryJoinWith {
    /// The type of joined directories.
    type DirOutput;

    /// The type of joined files.
    type FileOutput;

    /// Join `dir` to `self` as a directory.
    ///
    /// If joining multiple items, consider [`TryJoinWith::try_join_dirs`]
    /// or [`TryJoinWith::try_join_combined`].
    fn try_join_dir(&self, dir: impl AsRef<str>) -> Result<Self::DirOutput, PathError>;

    /// Join `file` to `self` as a file.
    fn try_join_file(&self, file: impl AsRef<str>) -> Result<Self::FileOutput, PathError>;

    /// Join multiple directories to `self`.
    fn try_join_dirs(
        &self,
        dirs: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self::DirOutput, PathError>;

    /// Join multiple directories, followed by a file, to `self`.
    fn try_join_combined(
        &self,
        dirs: impl IntoIterator<Item = impl AsRef<str>>,
        file: impl AsRef<str>,
    ) -> Result<Self::FileOutput, PathError>;
}

impl<B> TryJoinWith for TypedPath<B, Dir> {
    type DirOutput = TypedPath<B, Dir>;
    type FileOutput = TypedPath<B, File>;

    fn try_join_dir(&self, dir: impl AsRef<str>) -> Result<Self::DirOutput, PathError> {
        let dir = RelativeDirectoryPath::try_from(dir.as_ref())?;
        Ok(self.join_raw(dir.as_str()))
    }

    fn try_join_file(&self, file: impl AsRef<str>) -> Result<Self::FileOutput, PathError> {
        let file = RelativeFilePath::try_from(file.as_ref())?;
        Ok(self.join_raw(file.as_str()))
    }

    fn try_join_dirs(
        &self,
        dirs: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self::DirOutput, PathError> {
        dirs.into_iter()
            .try_fold(self.clone(), |joined, dir| joined.try_join_dir(dir))
    }

    fn try_join_combined(
        &self,
        dirs: impl IntoIterator<Item = impl AsRef<str>>,
        file: impl AsRef<str>,
    ) -> Result<Self::FileOutput, PathError> {
        self.try_join_dirs(dirs)?.try_join_file(file)
    }
}
