//! JSON persistence for the applicant book.
//!
//! [`ApplicantRecord`] is the only way untrusted file contents become applicants; every
//! field passes through its validator before an [`Applicant`](crate::applicants::Applicant)
//! exists.

mod book;
mod record;

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use crate::applicants::ApplicantBook;

pub use book::{ApplicantBookRecord, MESSAGE_DUPLICATE_APPLICANT};
pub use record::{ApplicantRecord, RecordError};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access applicant data: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid applicant data file: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error("{}", MESSAGE_DUPLICATE_APPLICANT)]
    DuplicateApplicant,
}

/// Applicant book backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonApplicantStorage {
    path: PathBuf,
}

impl JsonApplicantStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the book, or `None` when the file does not exist yet.
    pub fn read(&self) -> Result<Option<ApplicantBook>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "applicant data file not found");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };
        let book = Self::from_reader(BufReader::new(file))?;
        info!(path = %self.path.display(), applicants = book.len(), "loaded applicant data");
        Ok(Some(book))
    }

    /// Load the book, starting empty when the file does not exist yet.
    pub fn read_or_default(&self) -> Result<ApplicantBook, StorageError> {
        Ok(self.read()?.unwrap_or_default())
    }

    /// Replace the data file with `book`.
    ///
    /// The previous file stays untouched until the new contents are fully written.
    pub fn save(&self, book: &ApplicantBook) -> Result<(), StorageError> {
        self.replace_with(|writer| Self::to_writer(writer, book))?;
        info!(path = %self.path.display(), applicants = book.len(), "saved applicant data");
        Ok(())
    }

    fn replace_with<F>(&self, write: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut dyn Write) -> Result<(), StorageError>,
    {
        let dir = match self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            Some(dir) => {
                fs::create_dir_all(dir)?;
                dir
            }
            None => Path::new("."),
        };

        let mut staged = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(&mut staged);
            write(&mut writer)?;
            writer.flush()?;
        }
        staged.as_file().sync_all()?;
        staged.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ApplicantBook, StorageError> {
        let document: ApplicantBookRecord = serde_json::from_reader(reader)?;
        document.to_book()
    }

    pub fn to_writer<W: Write>(writer: W, book: &ApplicantBook) -> Result<(), StorageError> {
        serde_json::to_writer_pretty(writer, &ApplicantBookRecord::from(book))?;
        Ok(())
    }
}
