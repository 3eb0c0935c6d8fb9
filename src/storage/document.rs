//! Whole-document JSON persistence.
//!
//! The document is always read and written in full. There are no partial
//! updates, so every save replaces the file contents.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::domain::University;

/// Reads and parses the document at `path`.
///
/// # Errors
///
/// Returns [`ReadError::Io`] if the file cannot be opened or read, and
/// [`ReadError::Parse`] if its contents are not a valid document.
pub fn load_document(path: &Path) -> Result<University, ReadError> {
    let file = File::open(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        if source.is_io() {
            ReadError::Io {
                path: path.to_path_buf(),
                source: source.into(),
            }
        } else {
            ReadError::Parse {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Serializes `university` with two-space indentation and overwrites `path`.
///
/// # Errors
///
/// Returns [`WriteError`] if the document cannot be serialized or the file
/// cannot be written.
pub fn save_document(path: &Path, university: &University) -> Result<(), WriteError> {
    let content = serde_json::to_string_pretty(university)?;

    let io_error = |source: io::Error| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes()).map_err(io_error)?;
    writer.flush().map_err(io_error)
}

/// Copies the on-disk bytes of `source` verbatim to `backup`, replacing any
/// previous backup.
///
/// Returns the number of bytes copied.
///
/// # Errors
///
/// Returns [`BackupError::Read`] if `source` cannot be read (for example
/// because it does not exist yet) and [`BackupError::Write`] if `backup`
/// cannot be written.
pub fn backup_document(source: &Path, backup: &Path) -> Result<u64, BackupError> {
    let bytes = std::fs::read(source).map_err(|e| BackupError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;

    std::fs::write(backup, &bytes).map_err(|e| BackupError::Write {
        path: backup.to_path_buf(),
        source: e,
    })?;

    Ok(bytes.len() as u64)
}

/// The document could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// The file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// The file contents are not a valid document.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// The file that was being parsed.
        path: PathBuf,
        /// The underlying error.
        source: serde_json::Error,
    },
}

/// The document could not be saved.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The document could not be serialized.
    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        /// The file that was being written.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
}

/// The backup snapshot could not be taken.
#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    /// The current document could not be read.
    #[error("failed to read {} for backup: {source}", .path.display())]
    Read {
        /// The document that was being backed up.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// The backup file could not be written.
    #[error("failed to write backup {}: {source}", .path.display())]
    Write {
        /// The backup file.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::domain::{Id, Student};

    #[test]
    fn save_then_load_reproduces_document() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("university.json");
        let mut university = University::seed();
        university.departments[1].professors[0]
            .students
            .push(Student::new("Zoë", Id::new(1_700_000_000_000)));

        save_document(&path, &university).unwrap();

        assert_eq!(load_document(&path).unwrap(), university);
    }

    #[test]
    fn save_uses_two_space_indentation() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("university.json");

        save_document(&path, &University::default()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\n  \"departments\": []\n}");
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("university.json");
        std::fs::write(&path, "x".repeat(4096)).unwrap();

        save_document(&path, &University::default()).unwrap();

        assert_eq!(load_document(&path).unwrap(), University::default());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let error = load_document(&tmp.path().join("missing.json")).unwrap_err();
        assert!(matches!(error, ReadError::Io { .. }));
    }

    #[test]
    fn load_malformed_file_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("university.json");
        std::fs::write(&path, "{ \"departments\": [ { \"name\": 3 } ] }").unwrap();

        let error = load_document(&path).unwrap_err();
        assert!(matches!(error, ReadError::Parse { .. }));
    }

    #[test]
    fn save_into_missing_directory_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("no/such/dir/university.json");

        let error = save_document(&path, &University::seed()).unwrap_err();
        assert!(matches!(error, WriteError::Io { .. }));
    }

    #[test]
    fn backup_copies_bytes_verbatim() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("university.json");
        let backup = tmp.path().join("university_backup.json");
        let raw = "{\"departments\":[]}   \n// not re-serialized";
        std::fs::write(&source, raw).unwrap();
        std::fs::write(&backup, "stale").unwrap();

        let copied = backup_document(&source, &backup).unwrap();

        assert_eq!(copied, raw.len() as u64);
        assert_eq!(std::fs::read_to_string(&backup).unwrap(), raw);
    }

    #[test]
    fn backup_without_source_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let backup = tmp.path().join("university_backup.json");

        let error = backup_document(&tmp.path().join("university.json"), &backup).unwrap_err();

        assert!(matches!(error, BackupError::Read { .. }));
        assert!(!backup.exists());
    }
}
