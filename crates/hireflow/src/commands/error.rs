use std::fmt;

use crate::applicants::{BookError, FieldError};

use super::syntax::Prefix;

pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format! \n";
pub const MESSAGE_DUPLICATE_FIELDS: &str =
    "Multiple values specified for the following single-valued field(s): ";
pub const MESSAGE_DUPLICATE_APPLICANT: &str = "This applicant already exists in the tracker";

/// Non-repeatable prefixes found more than once, kept in the order they were checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicatedPrefixes(pub Vec<Prefix>);

impl fmt::Display for DuplicatedPrefixes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let literals: Vec<&str> = self.0.iter().map(|prefix| prefix.as_str()).collect();
        f.write_str(&literals.join(" "))
    }
}

/// Why a command line could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("{}{}", MESSAGE_INVALID_COMMAND_FORMAT, .usage)]
    MalformedCommand { usage: &'static str },
    #[error("{}{}", MESSAGE_DUPLICATE_FIELDS, .0)]
    DuplicatePrefixes(DuplicatedPrefixes),
    #[error(transparent)]
    InvalidFormat(#[from] FieldError),
}

impl ParseError {
    pub fn duplicate_prefixes(prefixes: Vec<Prefix>) -> Self {
        Self::DuplicatePrefixes(DuplicatedPrefixes(prefixes))
    }
}

/// Failure while running an already parsed command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("{}", MESSAGE_DUPLICATE_APPLICANT)]
    DuplicateApplicant,
}

impl From<BookError> for CommandError {
    fn from(value: BookError) -> Self {
        match value {
            BookError::DuplicateApplicant(_) => Self::DuplicateApplicant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::syntax::{PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE};

    #[test]
    fn duplicate_message_joins_prefixes_with_spaces() {
        let error = ParseError::duplicate_prefixes(vec![PREFIX_NAME, PREFIX_EMAIL, PREFIX_PHONE]);
        assert_eq!(
            error.to_string(),
            "Multiple values specified for the following single-valued field(s): n/ e/ p/"
        );
    }

    #[test]
    fn malformed_command_message_embeds_usage() {
        let error = ParseError::MalformedCommand { usage: "add: usage" };
        assert_eq!(error.to_string(), "Invalid command format! \nadd: usage");
    }
}
