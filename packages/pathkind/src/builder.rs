//! Declarative creation of files and directory trees.
//!
//! ```no_run
//! # async fn example() -> color_eyre::Result<()> {
//! use pathkind::{
//!     builder::DirBuilder,
//!     path::{mk_file_name, mk_rel_dir, mk_rel_file},
//! };
//!
//! let temp = DirBuilder::new()
//!     .file(mk_file_name!("Cargo.toml"), "[workspace]")
//!     .file(mk_rel_file!("src/lib.rs"), "")
//!     .dir(mk_rel_dir!("target"), DirBuilder::new())
//!     .build_temporary()
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;

use color_eyre::{Result, eyre::Context};
use derive_more::From;
use tracing::{instrument, trace};

use crate::{
    fs::{self, TemporaryDirectory, TemporaryFile},
    path::{Dir, File, Rel, RelativeDirectoryPath, RelativeFilePath, SomeType, TypedPath},
};

/// An entry in a [`DirBuilder`].
#[derive(Clone, Eq, PartialEq, Debug, From)]
pub enum Builder {
    /// A file with content.
    File(FileBuilder),

    /// A directory with entries of its own.
    Dir(DirBuilder),
}

/// The content of a file to create.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct FileBuilder {
    content: Vec<u8>,
}

impl FileBuilder {
    /// A file with the provided content.
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// The content the file is created with.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Write the file at `path`, replacing any existing file.
    ///
    /// The parent directory must already exist.
    #[instrument(skip(self))]
    pub async fn build<B>(&self, path: &TypedPath<B, File>) -> Result<()> {
        fs::write(path, &self.content).await
    }

    /// Write the content to a new temporary file.
    #[instrument(skip(self))]
    pub async fn build_temporary(&self) -> Result<TemporaryFile> {
        let file = TemporaryFile::new().await?;
        self.build(file.path())
            .await
            .context("write temporary file")?;
        Ok(file)
    }
}

impl From<&str> for FileBuilder {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for FileBuilder {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

impl From<&[u8]> for FileBuilder {
    fn from(content: &[u8]) -> Self {
        Self::new(content)
    }
}

impl From<Vec<u8>> for FileBuilder {
    fn from(content: Vec<u8>) -> Self {
        Self::new(content)
    }
}

/// A tree of files and directories to create.
///
/// Entries are keyed by their path relative to the directory; like all
/// paths in this crate, keys compare case-insensitively, so adding `A.txt`
/// after `a.txt` replaces it, spelling included.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct DirBuilder {
    entries: BTreeMap<TypedPath<Rel, SomeType>, Builder>,
}

impl DirBuilder {
    /// An empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file.
    ///
    /// Directories in `path` are created as needed when the tree is built.
    pub fn file(mut self, path: impl Into<RelativeFilePath>, file: impl Into<FileBuilder>) -> Self {
        let path: RelativeFilePath = path.into();
        self.insert(path.into(), Builder::File(file.into()));
        self
    }

    /// Add a directory with its own entries.
    pub fn dir(mut self, path: impl Into<RelativeDirectoryPath>, dir: DirBuilder) -> Self {
        let path: RelativeDirectoryPath = path.into();
        self.insert(path.into(), Builder::Dir(dir));
        self
    }

    /// Insert an entry, replacing any entry whose path differs only in case
    /// along with its spelling.
    fn insert(&mut self, path: TypedPath<Rel, SomeType>, entry: Builder) {
        self.entries.remove(&path);
        self.entries.insert(path, entry);
    }

    /// The entries directly in this directory, in path order.
    pub fn entries(&self) -> impl Iterator<Item = (&TypedPath<Rel, SomeType>, &Builder)> {
        self.entries.iter()
    }

    /// Create the tree inside `root`, creating `root` if needed.
    ///
    /// Existing files in the way are replaced; other existing entries
    /// are left alone.
    #[instrument(skip(self))]
    pub async fn build<B>(&self, root: &TypedPath<B, Dir>) -> Result<()> {
        fs::create_dir_all(root).await?;

        let mut pending = vec![(root.clone(), self)];
        while let Some((dir, builder)) = pending.pop() {
            for (relative, entry) in &builder.entries {
                match entry {
                    Builder::File(file) => {
                        let path = dir.join_raw::<File>(relative.as_str());
                        if let Some(parent) = path.parent() {
                            fs::create_dir_all(&parent).await?;
                        }
                        file.build(&path)
                            .await
                            .with_context(|| format!("build file {relative} in {dir}"))?;
                    }
                    Builder::Dir(nested) => {
                        let path = dir.join_raw::<Dir>(relative.as_str());
                        fs::create_dir_all(&path).await?;
                        pending.push((path, nested));
                    }
                }
            }
        }

        trace!(?root, "build directory tree");
        Ok(())
    }

    /// Create the tree inside a new temporary directory.
    #[instrument(skip(self))]
    pub async fn build_temporary(&self) -> Result<TemporaryDirectory> {
        let temp = TemporaryDirectory::new().await?;
        self.build(temp.path())
            .await
            .context("build temporary directory")?;
        Ok(temp)
    }
}
