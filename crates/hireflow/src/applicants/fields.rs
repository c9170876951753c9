//! Validated value objects for every applicant field.
//!
//! Each field kind owns one format rule and one constraint message. The message is
//! returned verbatim on failure so callers can show it to users unchanged.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

const NAME_CONSTRAINT: &str = "Names should only contain alphanumeric characters, spaces, \
apostrophes, hyphens and periods, and it should not be blank";
const PHONE_CONSTRAINT: &str =
    "Phone numbers should only contain numbers, and it should be at least 3 digits long";
const EMAIL_CONSTRAINT: &str = "Emails should be of the format local-part@domain and adhere \
to the following constraints:\n\
1. The local-part should only contain alphanumeric characters and these special characters, \
excluding the parentheses, (+_.-). The local-part may not start or end with any special \
characters.\n\
2. This is followed by a '@' and then a domain name. The domain name is made up of domain \
labels separated by periods.\n\
The domain name must:\n    \
- end with a domain label at least 2 characters long\n    \
- have each domain label start and end with alphanumeric characters\n    \
- have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";
const JOB_POSITION_CONSTRAINT: &str = "Job positions should only contain alphanumeric \
characters, spaces, hyphens, slashes and periods, and it should not be blank";
const STATUS_CONSTRAINT: &str =
    "Statuses should only contain alphanumeric characters and spaces, and it should not be blank";
const ADDRESS_CONSTRAINT: &str = "Addresses can take any values, and it should not be blank";
const TAG_CONSTRAINT: &str = "Tags names should be alphanumeric";

const NAME_PATTERN: &str = r"^[A-Za-z0-9][A-Za-z0-9 '.\-]*$";
const PHONE_PATTERN: &str = r"^[0-9]{3,}$";
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9]+(?:[+_.\-][A-Za-z0-9]+)*@(?:[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*\.)*(?:[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*){2,}$";
const JOB_POSITION_PATTERN: &str = r"^[A-Za-z0-9][A-Za-z0-9 /.\-]*$";
const STATUS_PATTERN: &str = r"^[A-Za-z0-9][A-Za-z0-9 ]*$";
const ADDRESS_PATTERN: &str = r"^[^\s].*$";
const TAG_PATTERN: &str = r"^[A-Za-z0-9]+$";

/// Every semantic field an applicant record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    Name,
    Phone,
    Email,
    JobPosition,
    Status,
    Address,
    Tag,
}

impl FieldKind {
    /// Compulsory fields in validation order.
    pub const COMPULSORY: [FieldKind; 6] = [
        FieldKind::Name,
        FieldKind::Phone,
        FieldKind::Email,
        FieldKind::JobPosition,
        FieldKind::Status,
        FieldKind::Address,
    ];

    /// Type name used in user-facing messages such as missing-field reports.
    pub const fn type_name(self) -> &'static str {
        match self {
            FieldKind::Name => "Name",
            FieldKind::Phone => "Phone",
            FieldKind::Email => "Email",
            FieldKind::JobPosition => "JobPosition",
            FieldKind::Status => "Status",
            FieldKind::Address => "Address",
            FieldKind::Tag => "Tag",
        }
    }

    pub const fn constraint(self) -> &'static str {
        match self {
            FieldKind::Name => NAME_CONSTRAINT,
            FieldKind::Phone => PHONE_CONSTRAINT,
            FieldKind::Email => EMAIL_CONSTRAINT,
            FieldKind::JobPosition => JOB_POSITION_CONSTRAINT,
            FieldKind::Status => STATUS_CONSTRAINT,
            FieldKind::Address => ADDRESS_CONSTRAINT,
            FieldKind::Tag => TAG_CONSTRAINT,
        }
    }

    const fn pattern(self) -> &'static str {
        match self {
            FieldKind::Name => NAME_PATTERN,
            FieldKind::Phone => PHONE_PATTERN,
            FieldKind::Email => EMAIL_PATTERN,
            FieldKind::JobPosition => JOB_POSITION_PATTERN,
            FieldKind::Status => STATUS_PATTERN,
            FieldKind::Address => ADDRESS_PATTERN,
            FieldKind::Tag => TAG_PATTERN,
        }
    }

    fn regex(self) -> &'static Regex {
        static NAME: OnceLock<Regex> = OnceLock::new();
        static PHONE: OnceLock<Regex> = OnceLock::new();
        static EMAIL: OnceLock<Regex> = OnceLock::new();
        static JOB_POSITION: OnceLock<Regex> = OnceLock::new();
        static STATUS: OnceLock<Regex> = OnceLock::new();
        static ADDRESS: OnceLock<Regex> = OnceLock::new();
        static TAG: OnceLock<Regex> = OnceLock::new();

        let cell = match self {
            FieldKind::Name => &NAME,
            FieldKind::Phone => &PHONE,
            FieldKind::Email => &EMAIL,
            FieldKind::JobPosition => &JOB_POSITION,
            FieldKind::Status => &STATUS,
            FieldKind::Address => &ADDRESS,
            FieldKind::Tag => &TAG,
        };
        cell.get_or_init(|| Regex::new(self.pattern()).expect("field pattern compiles"))
    }

    /// Whether `raw` satisfies this field's format rule.
    pub fn accepts(self, raw: &str) -> bool {
        self.regex().is_match(raw)
    }

    /// Check `raw` against the rule, returning the constraint violation on failure.
    pub fn validate(self, raw: &str) -> Result<(), FieldError> {
        if self.accepts(raw) {
            Ok(())
        } else {
            Err(FieldError::InvalidFormat {
                kind: self,
                message: self.constraint(),
            })
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Raised when a raw value breaks its field's format rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{message}")]
    InvalidFormat {
        kind: FieldKind,
        message: &'static str,
    },
}

impl FieldError {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldError::InvalidFormat { kind, .. } => *kind,
        }
    }
}

/// Shared behavior of the validated string wrappers.
pub trait FieldValue: Sized {
    const KIND: FieldKind;

    /// Validate `raw` and wrap it.
    fn parse(raw: &str) -> Result<Self, FieldError>;

    fn as_str(&self) -> &str;
}

macro_rules! field_value {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl FieldValue for $name {
            const KIND: FieldKind = $kind;

            fn parse(raw: &str) -> Result<Self, FieldError> {
                Self::KIND.validate(raw)?;
                Ok(Self(raw.to_string()))
            }

            fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = FieldError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                <Self as FieldValue>::parse(raw)
            }
        }

        impl TryFrom<String> for $name {
            type Error = FieldError;

            fn try_from(raw: String) -> Result<Self, Self::Error> {
                Self::KIND.validate(&raw)?;
                Ok(Self(raw))
            }
        }
    };
}

field_value! {
    /// Applicant's full name.
    Name => FieldKind::Name
}

field_value! {
    /// Contact number, digits only.
    Phone => FieldKind::Phone
}

field_value! {
    Email => FieldKind::Email
}

field_value! {
    /// Role the applicant applied for.
    JobPosition => FieldKind::JobPosition
}

field_value! {
    /// Free-form pipeline stage such as `Pending` or `Interviewed`.
    Status => FieldKind::Status
}

field_value! {
    Address => FieldKind::Address
}

field_value! {
    /// Single-word label attached to an applicant.
    Tag => FieldKind::Tag
}
