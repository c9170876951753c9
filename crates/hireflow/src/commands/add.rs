use std::collections::BTreeSet;

use tracing::debug;

use crate::applicants::{
    Address, Applicant, ApplicantBook, ApplicantDetails, Email, FieldKind, FieldValue,
    JobPosition, Name, Phone, Status, Tag,
};

use super::duplicates::verify_no_duplicate_prefixes;
use super::error::{CommandError, ParseError};
use super::syntax::{
    prefix_for, Prefix, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_JOB_POSITION, PREFIX_NAME, PREFIX_PHONE,
    PREFIX_STATUS, PREFIX_TAG,
};
use super::tokenizer::{tokenize, ArgumentMultimap};
use super::{CommandParser, CommandResult};

pub const MESSAGE_SUCCESS: &str = "New applicant added: ";

const ADD_PREFIXES: [Prefix; 7] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_JOB_POSITION,
    PREFIX_STATUS,
    PREFIX_ADDRESS,
    PREFIX_TAG,
];

// Duplicate reports use this order; validation uses ADD_PREFIXES order.
const SINGLE_VALUED: [Prefix; 6] = [
    PREFIX_NAME,
    PREFIX_ADDRESS,
    PREFIX_EMAIL,
    PREFIX_PHONE,
    PREFIX_JOB_POSITION,
    PREFIX_STATUS,
];

/// Adds one applicant to the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    applicant: Applicant,
}

impl AddCommand {
    pub const USAGE: &'static str = "add: Adds an applicant to the tracker. Parameters: \
n/NAME p/PHONE e/EMAIL j/JOB_POSITION s/STATUS a/ADDRESS [t/TAG]...\n\
Example: add n/John Doe p/98765432 e/johnd@example.com j/Software Engineer s/Pending \
a/311, Clementi Ave 2, #02-25 t/referral t/remote";

    pub fn new(applicant: Applicant) -> Self {
        Self { applicant }
    }

    pub fn applicant(&self) -> &Applicant {
        &self.applicant
    }

    pub fn execute(&self, book: &mut ApplicantBook) -> Result<CommandResult, CommandError> {
        book.add(self.applicant.clone())?;
        Ok(CommandResult::new(format!(
            "{MESSAGE_SUCCESS}{}",
            self.applicant
        )))
    }
}

/// Parses the tail of an `add` command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddCommandParser;

impl CommandParser for AddCommandParser {
    type Command = AddCommand;

    fn parse(&self, args: &str) -> Result<AddCommand, ParseError> {
        parse_applicant(args)
            .map(AddCommand::new)
            .inspect_err(|error| debug!(%error, "rejected add command"))
    }
}

fn parse_applicant(args: &str) -> Result<Applicant, ParseError> {
    let multimap = tokenize(args, &ADD_PREFIXES);

    verify_no_duplicate_prefixes(&multimap, &SINGLE_VALUED)?;

    let compulsory_present = FieldKind::COMPULSORY
        .iter()
        .all(|kind| multimap.is_present(prefix_for(*kind)));
    if !compulsory_present || !multimap.preamble().trim().is_empty() {
        return Err(malformed());
    }

    let details = ApplicantDetails {
        name: required::<Name>(&multimap, PREFIX_NAME)?,
        phone: required::<Phone>(&multimap, PREFIX_PHONE)?,
        email: required::<Email>(&multimap, PREFIX_EMAIL)?,
        job_position: required::<JobPosition>(&multimap, PREFIX_JOB_POSITION)?,
        status: required::<Status>(&multimap, PREFIX_STATUS)?,
        address: required::<Address>(&multimap, PREFIX_ADDRESS)?,
    };
    let tags = multimap
        .all_values(PREFIX_TAG)
        .iter()
        .map(|raw| Tag::parse(raw.trim()))
        .collect::<Result<BTreeSet<_>, _>>()?;

    Ok(Applicant::added_now(details, tags))
}

fn required<T: FieldValue>(multimap: &ArgumentMultimap, prefix: Prefix) -> Result<T, ParseError> {
    let raw = multimap.value(prefix).ok_or_else(malformed)?;
    Ok(T::parse(raw.trim())?)
}

fn malformed() -> ParseError {
    ParseError::MalformedCommand {
        usage: AddCommand::USAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_command_has_no_tags() {
        let command = AddCommandParser
            .parse(" n/Amy Bee p/11111111 e/amy@example.com j/Designer s/Pending a/Block 312")
            .expect("valid command");
        assert!(command.applicant().tags().is_empty());
        assert_eq!(command.applicant().address().as_str(), "Block 312");
    }

    #[test]
    fn empty_tag_value_is_rejected() {
        let error = AddCommandParser
            .parse(" n/Amy p/111 e/amy@example.com j/Designer s/Pending a/Block 312 t/")
            .expect_err("empty tag");
        assert_eq!(error.to_string(), "Tags names should be alphanumeric");
    }

    #[test]
    fn execute_reports_added_applicant() {
        let command = AddCommandParser
            .parse(" n/Amy p/111 e/amy@example.com j/Designer s/Pending a/Block 312 t/remote")
            .expect("valid command");
        let mut book = ApplicantBook::new();

        let result = command.execute(&mut book).expect("added");
        assert!(result.feedback().starts_with("New applicant added: Amy; Phone: 111;"));
        assert!(result.feedback().ends_with("Tags: [remote]"));
        assert_eq!(book.len(), 1);

        assert_eq!(
            command.execute(&mut book),
            Err(CommandError::DuplicateApplicant)
        );
    }
}
