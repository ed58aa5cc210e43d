//! Errors raised while constructing, composing, or formatting paths.
//!
//! These are the only failures the path core produces. Filesystem failures
//! belong to [`crate::fs`] and are reported there with context, never
//! reinterpreted as one of these.

use derive_more::{Display, Error, From, IsVariant};

/// The raw string could not become the requested path type.
#[derive(Clone, Eq, PartialEq, Debug, Display, Error, From, IsVariant)]
pub enum PathError {
    /// A required path was absent.
    #[display("missing argument: {argument}")]
    #[from(ignore)]
    MissingArgument {
        /// The parameter that was absent.
        argument: &'static str,
    },

    /// The raw string contains a character that is never valid in a path.
    InvalidCharacter(InvalidCharacterError),

    /// The raw string is valid, but has the wrong shape for the requested type.
    StructuralMismatch(StructuralMismatchError),
}

impl PathError {
    /// The name of the parameter that failed validation.
    pub fn argument(&self) -> &'static str {
        match self {
            PathError::MissingArgument { argument } => argument,
            PathError::InvalidCharacter(err) => err.argument,
            PathError::StructuralMismatch(err) => err.argument,
        }
    }

    pub(crate) fn mismatch(reason: Mismatch, argument: &'static str) -> Self {
        StructuralMismatchError { reason, argument }.into()
    }
}

/// The first invalid character found in a raw path string.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, Error)]
#[display(
    "path contains invalid character: {:?} (U+{:04X}) in {}",
    self.character,
    self.code_point(),
    self.argument
)]
pub struct InvalidCharacterError {
    /// The offending character.
    pub character: char,

    /// The parameter holding the raw string.
    pub argument: &'static str,
}

impl InvalidCharacterError {
    /// The Unicode scalar value of the offending character.
    pub fn code_point(&self) -> u32 {
        u32::from(self.character)
    }
}

/// The raw string's rootedness or file/directory shape contradicts
/// the requested type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, Error)]
#[display("{reason}: {argument}")]
pub struct StructuralMismatchError {
    /// What was wrong with the shape.
    pub reason: Mismatch,

    /// The parameter holding the raw string.
    pub argument: &'static str,
}

/// The ways a raw string can have the wrong shape.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, IsVariant)]
pub enum Mismatch {
    /// An absolute path was required, but the string is not rooted.
    #[display("path is relative")]
    ExpectedAbsolute,

    /// A relative path was required, but the string is rooted.
    #[display("path is absolute")]
    ExpectedRelative,

    /// A file path was required, but the string looks like a directory.
    #[display("file path expected")]
    ExpectedFile,

    /// A bare file name was required, but the string has directory parts.
    #[display("file name expected")]
    ExpectedFileName,
}

/// A display width could not be honoured.
#[derive(Clone, Eq, PartialEq, Debug, Display, Error, IsVariant)]
pub enum FormatError {
    /// The width is zero, negative, or at the representable maximum.
    #[display("width must be between 1 and {} (exclusive), got {width}", i32::MAX)]
    Range {
        /// The width that was requested.
        width: i64,
    },

    /// The format string is not a width.
    #[display("unable to parse width from format {spec:?}")]
    Parse {
        /// The format string that was provided.
        spec: String,
    },
}
