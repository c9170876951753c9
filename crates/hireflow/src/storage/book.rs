use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::applicants::ApplicantBook;

use super::record::ApplicantRecord;
use super::StorageError;

pub const MESSAGE_DUPLICATE_APPLICANT: &str = "Applicants list contains duplicate applicant(s).";

/// Whole-file shape of the applicant data file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantBookRecord {
    #[serde(default)]
    pub applicants: Vec<ApplicantRecord>,
}

impl ApplicantBookRecord {
    /// Convert every record, in file order, into a book.
    pub fn to_book(&self) -> Result<ApplicantBook, StorageError> {
        let mut book = ApplicantBook::new();

        for (index, record) in self.applicants.iter().enumerate() {
            let applicant = record.to_applicant().map_err(|error| {
                warn!(index, %error, "rejected stored applicant");
                StorageError::Record(error)
            })?;

            if book.add(applicant).is_err() {
                warn!(index, "stored applicant duplicates an earlier entry");
                return Err(StorageError::DuplicateApplicant);
            }
        }

        Ok(book)
    }
}

impl From<&ApplicantBook> for ApplicantBookRecord {
    fn from(book: &ApplicantBook) -> Self {
        Self {
            applicants: book.iter().map(ApplicantRecord::from).collect(),
        }
    }
}
