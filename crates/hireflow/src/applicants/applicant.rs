use std::collections::BTreeSet;
use std::fmt;

use chrono::{Local, NaiveDateTime, SubsecRound};

use super::fields::{Address, Email, JobPosition, Name, Phone, Status, Tag};

/// The six compulsory fields, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantDetails {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub job_position: JobPosition,
    pub status: Status,
    pub address: Address,
}

/// A job applicant tracked by the tool.
///
/// Built only from validated fields and never mutated afterwards. Two applicants are
/// equal when every field, the timestamp and the tag set match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applicant {
    name: Name,
    phone: Phone,
    email: Email,
    job_position: JobPosition,
    status: Status,
    address: Address,
    added_time: NaiveDateTime,
    tags: BTreeSet<Tag>,
}

impl Applicant {
    pub fn new(
        details: ApplicantDetails,
        added_time: NaiveDateTime,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        let ApplicantDetails {
            name,
            phone,
            email,
            job_position,
            status,
            address,
        } = details;

        Self {
            name,
            phone,
            email,
            job_position,
            status,
            address,
            added_time,
            tags: tags.into_iter().collect(),
        }
    }

    /// Create a fresh applicant stamped with the current local time (whole seconds).
    pub fn added_now(details: ApplicantDetails, tags: impl IntoIterator<Item = Tag>) -> Self {
        let added_time = Local::now().naive_local().trunc_subsecs(0);
        Self::new(details, added_time, tags)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn job_position(&self) -> &JobPosition {
        &self.job_position
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn added_time(&self) -> NaiveDateTime {
        self.added_time
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Weaker notion of identity used to keep the book free of repeat applications:
    /// same person applying for the same position.
    pub fn is_same_applicant(&self, other: &Applicant) -> bool {
        self.name == other.name && self.job_position == other.job_position
    }
}

impl fmt::Display for Applicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Job Position: {}; Status: {}; Address: {}; Added: {}; Tags: ",
            self.name,
            self.phone,
            self.email,
            self.job_position,
            self.status,
            self.address,
            self.added_time.format("%Y-%m-%d %H:%M"),
        )?;
        for tag in &self.tags {
            write!(f, "[{tag}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applicants::fields::FieldValue;
    use chrono::NaiveDate;

    fn details(name: &str, job_position: &str) -> ApplicantDetails {
        ApplicantDetails {
            name: Name::parse(name).expect("valid name"),
            phone: Phone::parse("94351253").expect("valid phone"),
            email: Email::parse("alice@example.com").expect("valid email"),
            job_position: JobPosition::parse(job_position).expect("valid job position"),
            status: Status::parse("Pending").expect("valid status"),
            address: Address::parse("123, Jurong West Ave 6, #08-111").expect("valid address"),
        }
    }

    fn added_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|date| date.and_hms_opt(9, 30, 0))
            .expect("valid timestamp")
    }

    fn tag(raw: &str) -> Tag {
        Tag::parse(raw).expect("valid tag")
    }

    #[test]
    fn duplicate_tags_collapse() {
        let applicant = Applicant::new(
            details("Alice Pauline", "Software Engineer"),
            added_time(),
            vec![tag("friends"), tag("friends"), tag("remote")],
        );
        assert_eq!(applicant.tags().len(), 2);
    }

    #[test]
    fn equality_ignores_tag_insertion_order() {
        let first = Applicant::new(
            details("Alice Pauline", "Software Engineer"),
            added_time(),
            vec![tag("a"), tag("b")],
        );
        let second = Applicant::new(
            details("Alice Pauline", "Software Engineer"),
            added_time(),
            vec![tag("b"), tag("a")],
        );
        assert_eq!(first, second);
    }

    #[test]
    fn same_applicant_requires_name_and_position() {
        let base = Applicant::new(details("Alice Pauline", "Designer"), added_time(), []);
        let other_status = Applicant::new(
            ApplicantDetails {
                status: Status::parse("Rejected").expect("valid"),
                ..details("Alice Pauline", "Designer")
            },
            added_time(),
            [],
        );
        let other_role = Applicant::new(details("Alice Pauline", "Engineer"), added_time(), []);

        assert!(base.is_same_applicant(&other_status));
        assert_ne!(base, other_status);
        assert!(!base.is_same_applicant(&other_role));
    }

    #[test]
    fn display_lists_fields_and_bracketed_tags() {
        let applicant = Applicant::new(
            details("Alice Pauline", "Designer"),
            added_time(),
            vec![tag("remote"), tag("friends")],
        );
        assert_eq!(
            applicant.to_string(),
            "Alice Pauline; Phone: 94351253; Email: alice@example.com; Job Position: Designer; \
Status: Pending; Address: 123, Jurong West Ave 6, #08-111; Added: 2024-03-01 09:30; \
Tags: [friends][remote]"
        );
    }
}
