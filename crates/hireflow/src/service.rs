use std::sync::Mutex;

use tracing::info;

use crate::applicants::ApplicantBook;
use crate::commands::{AddCommand, CommandError, CommandResult};
use crate::error::AppError;
use crate::storage::{ApplicantRecord, JsonApplicantStorage, StorageError};

/// Shared applicant book, optionally mirrored to a JSON data file after every change.
#[derive(Debug)]
pub struct ApplicantDirectory {
    book: Mutex<ApplicantBook>,
    storage: Option<JsonApplicantStorage>,
}

impl ApplicantDirectory {
    pub fn in_memory(book: ApplicantBook) -> Self {
        Self {
            book: Mutex::new(book),
            storage: None,
        }
    }

    /// Load the book from `storage`, starting empty when the file does not exist.
    pub fn open(storage: JsonApplicantStorage) -> Result<Self, StorageError> {
        let book = storage.read_or_default()?;
        Ok(Self {
            book: Mutex::new(book),
            storage: Some(storage),
        })
    }

    /// Run `command` and persist the result.
    ///
    /// The book only changes once the data file has been written.
    pub fn add(
        &self,
        command: &AddCommand,
    ) -> Result<(CommandResult, ApplicantRecord), DirectoryError> {
        let mut guard = self.book.lock().expect("applicant book mutex poisoned");
        let mut updated = guard.clone();
        let result = command.execute(&mut updated)?;

        if let Some(storage) = &self.storage {
            storage.save(&updated)?;
        }
        *guard = updated;

        let record = ApplicantRecord::from(command.applicant());
        info!(applicants = guard.len(), "applicant added");
        Ok((result, record))
    }

    pub fn records(&self) -> Vec<ApplicantRecord> {
        let guard = self.book.lock().expect("applicant book mutex poisoned");
        guard.iter().map(ApplicantRecord::from).collect()
    }

    pub fn len(&self) -> usize {
        self.book.lock().expect("applicant book mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn snapshot(&self) -> ApplicantBook {
        self.book
            .lock()
            .expect("applicant book mutex poisoned")
            .clone()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<DirectoryError> for AppError {
    fn from(value: DirectoryError) -> Self {
        match value {
            DirectoryError::Command(err) => AppError::Command(err),
            DirectoryError::Storage(err) => AppError::Storage(err),
        }
    }
}
