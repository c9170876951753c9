use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::applicants::{
    Address, Applicant, ApplicantDetails, Email, FieldError, FieldKind, FieldValue, JobPosition,
    Name, Phone, Status, Tag,
};

/// Why a persisted record could not become an [`Applicant`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("Applicant's {} field is missing!", .0.type_name())]
    MissingField(FieldKind),
    #[error(transparent)]
    InvalidFormat(#[from] FieldError),
}

/// Flat, unvalidated shape of an applicant as stored on disk.
///
/// Compulsory fields are optional here so that an absent field can be told apart from
/// one holding an invalid value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub job_position: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub added_time: NaiveDateTime,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ApplicantRecord {
    /// Validate every field and rebuild the applicant.
    ///
    /// Fields are checked name, phone, email, job position, status, address, then tags;
    /// the first absent or malformed value aborts the conversion.
    pub fn to_applicant(&self) -> Result<Applicant, RecordError> {
        let details = ApplicantDetails {
            name: required::<Name>(self.name.as_deref())?,
            phone: required::<Phone>(self.phone.as_deref())?,
            email: required::<Email>(self.email.as_deref())?,
            job_position: required::<JobPosition>(self.job_position.as_deref())?,
            status: required::<Status>(self.status.as_deref())?,
            address: required::<Address>(self.address.as_deref())?,
        };
        let tags = self
            .tags
            .iter()
            .map(|raw| Tag::parse(raw))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Applicant::new(details, self.added_time, tags))
    }
}

fn required<T: FieldValue>(raw: Option<&str>) -> Result<T, RecordError> {
    let raw = raw.ok_or(RecordError::MissingField(T::KIND))?;
    Ok(T::parse(raw)?)
}

impl From<&Applicant> for ApplicantRecord {
    fn from(applicant: &Applicant) -> Self {
        Self {
            name: Some(applicant.name().to_string()),
            phone: Some(applicant.phone().to_string()),
            email: Some(applicant.email().to_string()),
            job_position: Some(applicant.job_position().to_string()),
            status: Some(applicant.status().to_string()),
            address: Some(applicant.address().to_string()),
            added_time: applicant.added_time(),
            tags: applicant.tags().iter().map(ToString::to_string).collect(),
        }
    }
}
