//! Command-line parsing for tracker commands.
//!
//! A command tail such as `n/Amy p/9123 ...` is tokenized into prefixed values, checked for
//! repeated single-valued prefixes and missing compulsory ones, then validated field by
//! field into a command object.

pub mod add;
pub mod duplicates;
pub mod error;
pub mod syntax;
pub mod tokenizer;

pub use add::{AddCommand, AddCommandParser};
pub use error::{CommandError, DuplicatedPrefixes, ParseError};
pub use syntax::Prefix;
pub use tokenizer::{tokenize, ArgumentMultimap};

/// Turns the text after a command word into a typed command.
pub trait CommandParser {
    type Command;

    fn parse(&self, args: &str) -> Result<Self::Command, ParseError>;
}

/// Outcome shown to the user after a command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback: String,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
        }
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}
