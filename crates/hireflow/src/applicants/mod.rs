//! Applicant domain: validated field values, the applicant aggregate and the book
//! holding every tracked applicant.

pub mod applicant;
pub mod book;
pub mod fields;

pub use applicant::{Applicant, ApplicantDetails};
pub use book::{ApplicantBook, BookError};
pub use fields::{
    Address, Email, FieldError, FieldKind, FieldValue, JobPosition, Name, Phone, Status, Tag,
};
