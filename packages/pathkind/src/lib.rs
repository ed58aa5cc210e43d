//! Filesystem path types that know what they point at.
//!
//! The core of this crate is [`path::TypedPath`], a validated path string
//! tagged with its base (rooted or not) and its type (file, directory, or
//! bare file name). Operations that would mix these up don't compile.
//!
//! - [`rules`] holds the syntactic rules paths are validated against.
//! - [`compare`] and [`format`] implement comparison and width-limited
//!   display of raw path strings.
//! - [`fs`] and [`builder`] (behind the default `fs` feature) perform
//!   filesystem operations keyed by typed paths.

pub mod compare;
pub mod error;
pub mod format;
pub mod path;
pub mod rules;

#[cfg(feature = "fs")]
pub mod builder;
#[cfg(feature = "fs")]
pub mod fs;

#[doc(hidden)]
pub use const_str;
