//! Filesystem operations keyed by typed paths.
//!
//! Inside this module, we refer to `std::fs` or `tokio::fs` by its fully
//! qualified path to make it maximally clear what we are using.
//!
//! Everything here is a thin pass-through to the OS: failures are reported
//! with context, and the underlying [`std::io::Error`] stays reachable
//! through [`color_eyre::Report::downcast_ref`]. Nothing is retried, and
//! missing files or directories are errors rather than silently ignored.
//! Paths with a relative base resolve against the working directory of the
//! process, as they do for the OS.

use std::{convert::identity, path::Path, time::SystemTime};

use bon::Builder;
use color_eyre::{
    Result,
    eyre::{Context, OptionExt, eyre},
};
use derive_more::{Debug, Display};
use filetime::FileTime;
use futures::{Stream, stream};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tap::{Pipe, Tap, TapFallible};
use tokio::{fs::ReadDir, task::spawn_blocking};
use tracing::{debug, instrument, trace};

use crate::{
    path::{Dir, DirectoryPath, File, FilePath, Kind, Name, SomeType, TypedPath},
    rules::{self, Rules},
};

impl DirectoryPath {
    /// Get the current working directory for the process.
    pub fn current() -> Result<DirectoryPath> {
        let cwd = std::env::current_dir().context("get current dir")?;
        cwd.to_str()
            .ok_or_eyre("current dir is not UTF-8")?
            .pipe(Self::try_from)
            .context("convert")
    }
}

#[duplicate::duplicate_item(
    ty method;
    [ File ] [ is_file ];
    [ Name ] [ is_file ];
    [ Dir ] [ is_dir ];
    [ SomeType ] [ exists ];
)]
impl<B> TypedPath<B, ty> {
    /// Validate that the item exists on disk and is the correct type.
    ///
    /// Returns false if the item does not exist, or if there is an error
    /// checking whether the item exists. To disambiguate this case,
    /// use [`Metadata::from_path`].
    ///
    /// Note that this method, like any similar method, is very susceptible to
    /// TOCTOU (time-of-check/time-of-use) bugs.
    pub async fn exists(&self) -> bool {
        method(self.as_std_path()).await
    }
}

/// Create the directory and all its parents, if they don't already exist.
#[instrument]
pub async fn create_dir_all<B>(dir: &TypedPath<B, Dir>) -> Result<()> {
    tokio::fs::create_dir_all(dir.as_std_path())
        .await
        .with_context(|| format!("create dir: {dir:?}"))
        .tap_ok(|_| trace!(?dir, "create directory"))
}

/// Remove an empty directory.
#[instrument]
pub async fn remove_dir<B>(dir: &TypedPath<B, Dir>) -> Result<()> {
    tokio::fs::remove_dir(dir.as_std_path())
        .await
        .with_context(|| format!("remove directory: {dir:?}"))
        .tap_ok(|_| trace!(?dir, "remove directory"))
}

/// Remove the directory and all its contents.
#[instrument]
pub async fn remove_dir_all<B>(dir: &TypedPath<B, Dir>) -> Result<()> {
    tokio::fs::remove_dir_all(dir.as_std_path())
        .await
        .with_context(|| format!("remove directory: {dir:?}"))
        .tap_ok(|_| trace!(?dir, "remove directory recursively"))
}

/// Enumerate the regular files directly inside `dir`.
///
/// The directory is opened when the stream is first polled. Entries come in
/// the order the OS reports them; symbolic links and directories are not
/// emitted in the stream.
///
/// An entry whose name is not a valid file name (for example `a|b.txt` on a
/// POSIX host) is reported as an error item and enumeration continues with
/// the next entry. Failing to open or read the directory itself is the last
/// item of the stream.
#[instrument]
pub fn read_dir_files<B>(
    dir: &TypedPath<B, Dir>,
) -> impl Stream<Item = Result<TypedPath<B, File>>> + Unpin {
    read_dir_entries(dir, |ty| ty.is_file())
}

/// Enumerate the directories directly inside `dir`.
///
/// The directory is opened when the stream is first polled. Entries come in
/// the order the OS reports them; symbolic links and files are not
/// emitted in the stream.
///
/// An entry whose name is not a valid directory name is reported as an
/// error item and enumeration continues with the next entry. Failing to
/// open or read the directory itself is the last item of the stream.
#[instrument]
pub fn read_dir_dirs<B>(
    dir: &TypedPath<B, Dir>,
) -> impl Stream<Item = Result<TypedPath<B, Dir>>> + Unpin {
    read_dir_entries(dir, |ty| ty.is_dir())
}

/// Progress of a directory enumeration stream.
enum Listing {
    Unopened,
    Open(ReadDir),
    Done,
}

fn read_dir_entries<B, T: Kind>(
    dir: &TypedPath<B, Dir>,
    keep: fn(&std::fs::FileType) -> bool,
) -> impl Stream<Item = Result<TypedPath<B, T>>> + Unpin {
    let root = dir.clone();
    stream::unfold(Listing::Unopened, move |listing| {
        let root = root.clone();
        async move {
            let mut entries = match listing {
                Listing::Done => return None,
                Listing::Open(entries) => entries,
                Listing::Unopened => match tokio::fs::read_dir(root.as_std_path())
                    .await
                    .with_context(|| format!("read directory: {root:?}"))
                    .tap_ok(|_| trace!(?root, "read directory"))
                {
                    Ok(entries) => entries,
                    Err(err) => return Some((Err(err), Listing::Done)),
                },
            };

            loop {
                let entry = match entries
                    .next_entry()
                    .await
                    .with_context(|| format!("read directory entry: {root:?}"))
                {
                    Ok(Some(entry)) => entry,
                    Ok(None) => return None,
                    Err(err) => return Some((Err(err), Listing::Done)),
                };

                match typed_entry::<B, T>(&root, &entry, keep).await {
                    Ok(None) => continue,
                    Ok(Some(path)) => return Some((Ok(path), Listing::Open(entries))),
                    Err(err) => return Some((Err(err), Listing::Open(entries))),
                }
            }
        }
    })
    .pipe(Box::pin)
}

/// The typed path of `entry` inside `root`, or `None` if `keep` rejects
/// its file type.
async fn typed_entry<B, T: Kind>(
    root: &TypedPath<B, Dir>,
    entry: &tokio::fs::DirEntry,
    keep: fn(&std::fs::FileType) -> bool,
) -> Result<Option<TypedPath<B, T>>> {
    let file_type = entry
        .file_type()
        .await
        .with_context(|| format!("read file type: {:?}", entry.path()))?;
    if !keep(&file_type) {
        return Ok(None);
    }

    let name = entry
        .file_name()
        .into_string()
        .map_err(|name| eyre!("entry name is not UTF-8: {name:?}"))?;
    rules::check(
        Some(&name),
        T::ARGUMENT,
        Rules::NOT_ROOTED | Rules::FILE_NAME | T::RULES,
    )
    .with_context(|| format!("read directory entry {name:?} in {root:?}"))?;

    Ok(Some(root.join_raw::<T>(&name)))
}

/// Buffer the file content from disk.
#[instrument]
pub async fn read<B>(path: &TypedPath<B, File>) -> Result<Vec<u8>> {
    tokio::fs::read(path.as_std_path())
        .await
        .with_context(|| format!("read file: {path:?}"))
        .tap_ok(|buf| trace!(?path, bytes = buf.len(), "read file"))
}

/// Buffer the file content from disk and parse it as UTF8.
#[instrument]
pub async fn read_to_string<B>(path: &TypedPath<B, File>) -> Result<String> {
    tokio::fs::read_to_string(path.as_std_path())
        .await
        .with_context(|| format!("read file: {path:?}"))
        .tap_ok(|buf| trace!(?path, bytes = buf.len(), "read file as string"))
}

/// Write the provided file content to disk.
///
/// The parent directory must already exist.
#[instrument(skip(content))]
pub async fn write<B>(path: &TypedPath<B, File>, content: impl AsRef<[u8]>) -> Result<()> {
    let content = content.as_ref();
    tokio::fs::write(path.as_std_path(), content)
        .await
        .with_context(|| format!("write file: {path:?}"))
        .tap_ok(|_| trace!(?path, bytes = content.len(), "write file"))
}

/// Remove a file.
#[instrument]
pub async fn remove_file<B>(path: &TypedPath<B, File>) -> Result<()> {
    tokio::fs::remove_file(path.as_std_path())
        .await
        .with_context(|| format!("remove file: {path:?}"))
        .tap_ok(|_| trace!(?path, "remove file"))
}

/// Create a hard link at `link` to the file at `original`.
///
/// Fails if `link` already exists.
#[instrument]
pub async fn hard_link<B1, B2>(
    original: &TypedPath<B1, File>,
    link: &TypedPath<B2, File>,
) -> Result<()> {
    tokio::fs::hard_link(original.as_std_path(), link.as_std_path())
        .await
        .with_context(|| format!("hard link {original:?} -> {link:?}"))
        .tap_ok(|_| trace!(?original, ?link, "hard link"))
}

/// Set the modification time of the file to now,
/// creating the file if it doesn't exist.
#[instrument]
pub async fn touch<B>(path: &TypedPath<B, File>) -> Result<()> {
    let target = path.as_std_path().to_path_buf();
    let touched = spawn_blocking(move || filetime::set_file_mtime(&target, FileTime::now()))
        .await
        .context("join task")?;

    match touched {
        Ok(()) => {
            trace!(?path, "update mtime");
            Ok(())
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_std_path())
            .await
            .map(drop)
            .with_context(|| format!("create file: {path:?}"))
            .tap_ok(|_| trace!(?path, "create file")),
        Err(err) => Err(err).context(format!("update mtime: {path:?}")),
    }
}

/// Set the modification time of the file.
#[instrument]
pub async fn set_modified<B>(path: &TypedPath<B, File>, modified: Timestamp) -> Result<()> {
    let target = path.as_std_path().to_path_buf();
    let mtime = FileTime::from_system_time(SystemTime::from(modified));
    spawn_blocking(move || filetime::set_file_mtime(&target, mtime))
        .await
        .context("join task")?
        .with_context(|| format!("update mtime: {path:?}"))
        .tap_ok(|_| trace!(?path, %modified, "update mtime"))
}

/// Set or clear the read-only flag of the file.
#[instrument]
pub async fn set_readonly<B>(path: &TypedPath<B, File>, readonly: bool) -> Result<()> {
    let metadata = tokio::fs::metadata(path.as_std_path())
        .await
        .with_context(|| format!("stat metadata: {path:?}"))?;
    let mut permissions = metadata.permissions();
    permissions.set_readonly(readonly);
    tokio::fs::set_permissions(path.as_std_path(), permissions)
        .await
        .with_context(|| format!("set permissions: {path:?}"))
        .tap_ok(|_| trace!(?path, readonly, "set permissions"))
}

/// Check whether anything exists at the path.
///
/// Returns `false` if there is an error checking whether the path exists.
/// Note that this sort of check is prone to race conditions - if you plan
/// to do anything with the file after checking, you should probably
/// just try to do the operation and handle the case of the file not existing.
#[instrument]
pub async fn exists(path: impl AsRef<Path> + std::fmt::Debug) -> bool {
    tokio::fs::try_exists(path).await.is_ok_and(identity)
}

/// Return whether the path represents a directory.
///
/// Returns `false` if the directory doesn't exist
/// or if there is an error checking the metadata.
#[instrument]
pub async fn is_dir(path: impl AsRef<Path> + std::fmt::Debug) -> bool {
    tokio::fs::metadata(path).await.is_ok_and(|m| m.is_dir())
}

/// Return whether the path represents a normal file.
///
/// Returns `false` if the file doesn't exist
/// or if there is an error checking the metadata.
#[instrument]
pub async fn is_file(path: impl AsRef<Path> + std::fmt::Debug) -> bool {
    tokio::fs::metadata(path).await.is_ok_and(|m| m.is_file())
}

/// What kind of entity a path refers to on disk.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, Serialize, Deserialize)]
pub enum EntryKind {
    /// A regular file.
    #[display("file")]
    File,

    /// A directory.
    #[display("directory")]
    Dir,

    /// Anything else: devices, sockets, pipes.
    #[display("other")]
    Other,
}

/// The set of metadata this crate reports for a path.
///
/// Symbolic links are followed. Timestamps the platform doesn't record
/// are `None`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize, Builder)]
pub struct Metadata {
    /// What the path refers to.
    pub kind: EntryKind,

    /// The size in bytes.
    pub len: u64,

    /// Whether the read-only flag is set.
    pub readonly: bool,

    /// Whether the file is executable.
    pub executable: bool,

    /// The last time the content was modified.
    pub modified: Timestamp,

    /// The last time the content was accessed.
    pub accessed: Option<Timestamp>,

    /// When the entry was created.
    pub created: Option<Timestamp>,
}

impl Metadata {
    /// Read the metadata for the provided path.
    #[instrument(name = "Metadata::from_path")]
    pub async fn from_path<B, T>(path: &TypedPath<B, T>) -> Result<Self> {
        let target = path.as_std_path().to_path_buf();
        let (metadata, executable) = tokio::join!(
            tokio::fs::metadata(path.as_std_path()),
            spawn_blocking(move || is_executable::is_executable(target)),
        );
        let metadata = metadata.with_context(|| format!("stat metadata: {path:?}"))?;
        let executable = executable.context("join task")?;

        let kind = if metadata.is_file() {
            EntryKind::File
        } else if metadata.is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::Other
        };
        let modified = metadata
            .modified()
            .context("read mtime")
            .and_then(|mtime| Timestamp::try_from(mtime).context("convert mtime"))
            .with_context(|| format!("read modified time: {path:?}"))?;
        let optional = |time: std::io::Result<SystemTime>| {
            time.ok().and_then(|time| Timestamp::try_from(time).ok())
        };

        Metadata::builder()
            .kind(kind)
            .len(metadata.len())
            .readonly(metadata.permissions().readonly())
            .executable(executable)
            .modified(modified)
            .maybe_accessed(optional(metadata.accessed()))
            .maybe_created(optional(metadata.created()))
            .build()
            .tap(|metadata| debug!(?path, ?metadata, "stat metadata"))
            .pipe(Ok)
    }
}

/// A directory that is deleted, with its contents, when this is dropped.
#[derive(Debug, Display)]
#[display("{path}")]
pub struct TemporaryDirectory {
    path: DirectoryPath,
    #[debug(skip)]
    inner: tempfile::TempDir,
}

impl TemporaryDirectory {
    /// Create a new, empty directory in the system temporary directory.
    #[instrument(name = "TemporaryDirectory::new")]
    pub async fn new() -> Result<Self> {
        let inner = spawn_blocking(tempfile::TempDir::new)
            .await
            .context("join task")?
            .context("create temporary directory")?;
        let path = inner
            .path()
            .to_str()
            .ok_or_eyre("temporary directory is not UTF-8")?
            .pipe(DirectoryPath::try_from)
            .context("convert temporary directory")?;
        trace!(?path, "create temporary directory");
        Ok(Self { path, inner })
    }

    /// The path of the directory.
    pub fn path(&self) -> &DirectoryPath {
        &self.path
    }

    /// Delete the directory now, reporting any failure to do so.
    #[instrument(name = "TemporaryDirectory::close")]
    pub async fn close(self) -> Result<()> {
        let Self { path, inner } = self;
        spawn_blocking(move || inner.close())
            .await
            .context("join task")?
            .with_context(|| format!("remove temporary directory: {path:?}"))
            .tap_ok(|_| trace!(?path, "remove temporary directory"))
    }
}

/// A file that is deleted when this is dropped.
#[derive(Debug, Display)]
#[display("{path}")]
pub struct TemporaryFile {
    path: FilePath,
    #[debug(skip)]
    inner: tempfile::TempPath,
}

impl TemporaryFile {
    /// Create a new, empty file in the system temporary directory.
    #[instrument(name = "TemporaryFile::new")]
    pub async fn new() -> Result<Self> {
        spawn_blocking(tempfile::NamedTempFile::new)
            .await
            .context("join task")?
            .context("create temporary file")?
            .pipe(Self::from_named)
    }

    /// Create a new, empty file in the provided directory.
    #[instrument(name = "TemporaryFile::new_in")]
    pub async fn new_in<B>(dir: &TypedPath<B, Dir>) -> Result<Self> {
        let dir = dir.as_std_path().to_path_buf();
        spawn_blocking(move || tempfile::NamedTempFile::new_in(dir))
            .await
            .context("join task")?
            .context("create temporary file")?
            .pipe(Self::from_named)
    }

    fn from_named(file: tempfile::NamedTempFile) -> Result<Self> {
        let inner = file.into_temp_path();
        let path = inner
            .to_str()
            .ok_or_eyre("temporary file is not UTF-8")?
            .pipe(FilePath::try_from)
            .context("convert temporary file")?;
        trace!(?path, "create temporary file");
        Ok(Self { path, inner })
    }

    /// The path of the file.
    pub fn path(&self) -> &FilePath {
        &self.path
    }

    /// Delete the file now, reporting any failure to do so.
    #[instrument(name = "TemporaryFile::close")]
    pub async fn close(self) -> Result<()> {
        let Self { path, inner } = self;
        spawn_blocking(move || inner.close())
            .await
            .context("join task")?
            .with_context(|| format!("remove temporary file: {path:?}"))
            .tap_ok(|_| trace!(?path, "remove temporary file"))
    }
}
