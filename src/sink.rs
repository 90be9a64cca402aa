// SPDX-License-Identifier: MIT OR Apache-2.0

//! Output destinations.
//!
//! A [`Destination`] is what the application configures: standard error or a
//! named file. The crate-private [`Sink`] is the open writer behind it. A file
//! sink checks that its path still exists before every line and recreates the
//! file if something removed it, so external cleanup or rotation does not
//! silently swallow the log.

use crate::error::Error;
use std::fmt::Debug;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Where a logger writes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Destination {
    /// Standard error.
    #[default]
    Stderr,
    /// A file, opened for append and created if absent.
    File(PathBuf),
}

impl Destination {
    /// `None` means standard error.
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Destination::File(path.to_path_buf()),
            None => Destination::Stderr,
        }
    }
}

pub(crate) enum Sink {
    Stderr,
    File { path: PathBuf, file: File },
    Writer(Box<dyn Write + Send>),
}

impl Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sink::Stderr => f.write_str("Stderr"),
            Sink::File { path, .. } => f.debug_tuple("File").field(path).finish(),
            Sink::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    options.open(path)
}

impl Sink {
    pub(crate) fn open(destination: &Destination) -> Result<Self, Error> {
        match destination {
            Destination::Stderr => Ok(Sink::Stderr),
            Destination::File(path) => {
                let file = open_append(path).map_err(|source| Error::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Sink::File {
                    path: path.clone(),
                    file,
                })
            }
        }
    }

    pub(crate) fn writer(writer: Box<dyn Write + Send>) -> Self {
        Sink::Writer(writer)
    }

    /// Recreates a named file that no longer exists.
    ///
    /// A path whose existence cannot be determined is left alone; the
    /// following write reports whatever is wrong with it.
    pub(crate) fn ensure_open(&mut self) -> Result<(), Error> {
        let Sink::File { path, file } = self else {
            return Ok(());
        };
        if !matches!(path.try_exists(), Ok(false)) {
            return Ok(());
        }
        *file = open_append(path).map_err(|source| Error::Reopen {
            path: path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Writes one complete line.
    pub(crate) fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        match self {
            Sink::Stderr => io::stderr().lock().write_all(bytes)?,
            Sink::File { file, .. } => file.write_all(bytes)?,
            Sink::Writer(writer) => writer.write_all(bytes)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_writer::MemoryWriter;
    use std::fs;

    #[test]
    fn file_sink_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, "existing\n").unwrap();

        let mut sink = Sink::open(&Destination::File(path.clone())).unwrap();
        sink.write(b"appended\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "existing\nappended\n");
    }

    #[test]
    fn open_missing_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("app.log");
        let err = Sink::open(&Destination::File(path)).unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn ensure_open_recreates_removed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let mut sink = Sink::open(&Destination::File(path.clone())).unwrap();
        sink.write(b"first\n").unwrap();

        fs::remove_file(&path).unwrap();
        sink.ensure_open().unwrap();
        sink.write(b"second\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn ensure_open_failure_is_reopen_error() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        let path = sub.join("app.log");
        let mut sink = Sink::open(&Destination::File(path)).unwrap();

        fs::remove_dir_all(&sub).unwrap();
        let err = sink.ensure_open().unwrap_err();
        assert!(matches!(err, Error::Reopen { .. }), "{err:?}");
    }

    #[cfg(unix)]
    #[test]
    fn new_files_are_not_group_writable() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        Sink::open(&Destination::File(path.clone())).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        // the process umask can only remove bits
        assert_eq!(mode & !0o644, 0);
        assert_ne!(mode & 0o600, 0);
    }

    #[test]
    fn stderr_and_writer_sinks_ignore_ensure_open() {
        let memory = MemoryWriter::new();
        let mut sink = Sink::writer(Box::new(memory.clone()));
        sink.ensure_open().unwrap();
        sink.write(b"line\n").unwrap();
        assert_eq!(memory.contents(), "line\n");
        Sink::Stderr.ensure_open().unwrap();
    }

    #[test]
    fn destination_from_path() {
        assert_eq!(Destination::from_path(None), Destination::Stderr);
        assert_eq!(
            Destination::from_path(Some(Path::new("/tmp/x.log"))),
            Destination::File(PathBuf::from("/tmp/x.log"))
        );
    }
}
