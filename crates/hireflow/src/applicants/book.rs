use super::applicant::Applicant;

/// Raised when an applicant clashes with one already in the book.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookError {
    #[error("applicant '{0}' already exists in the book")]
    DuplicateApplicant(String),
}

/// Ordered collection of applicants with no two entries describing the same applicant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicantBook {
    applicants: Vec<Applicant>,
}

impl ApplicantBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, applicant: &Applicant) -> bool {
        self.applicants
            .iter()
            .any(|existing| existing.is_same_applicant(applicant))
    }

    pub fn add(&mut self, applicant: Applicant) -> Result<(), BookError> {
        if self.contains(&applicant) {
            return Err(BookError::DuplicateApplicant(
                applicant.name().to_string(),
            ));
        }

        self.applicants.push(applicant);
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Applicant> {
        self.applicants.iter()
    }

    pub fn len(&self) -> usize {
        self.applicants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applicants.is_empty()
    }
}

impl<'a> IntoIterator for &'a ApplicantBook {
    type Item = &'a Applicant;
    type IntoIter = std::slice::Iter<'a, Applicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applicants::applicant::ApplicantDetails;
    use crate::applicants::fields::{
        Address, Email, FieldValue, JobPosition, Name, Phone, Status,
    };

    fn applicant(name: &str, phone: &str) -> Applicant {
        Applicant::added_now(
            ApplicantDetails {
                name: Name::parse(name).expect("valid"),
                phone: Phone::parse(phone).expect("valid"),
                email: Email::parse("someone@example.com").expect("valid"),
                job_position: JobPosition::parse("Data Analyst").expect("valid"),
                status: Status::parse("Pending").expect("valid"),
                address: Address::parse("Little India").expect("valid"),
            },
            [],
        )
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut book = ApplicantBook::new();
        book.add(applicant("Carl Kurz", "95352563")).expect("added");
        book.add(applicant("Benson Meier", "98765432")).expect("added");

        let names: Vec<_> = book.iter().map(|a| a.name().as_str()).collect();
        assert_eq!(names, vec!["Carl Kurz", "Benson Meier"]);
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn add_rejects_same_applicant_with_different_phone() {
        let mut book = ApplicantBook::new();
        book.add(applicant("Carl Kurz", "95352563")).expect("added");

        let error = book
            .add(applicant("Carl Kurz", "11111111"))
            .expect_err("duplicate rejected");
        assert_eq!(error, BookError::DuplicateApplicant("Carl Kurz".to_string()));
        assert_eq!(book.len(), 1);
    }
}
