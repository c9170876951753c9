use std::fmt;

use crate::applicants::FieldKind;

/// Literal marker introducing one field's value in a command line, e.g. `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(literal: &'static str) -> Self {
        Self(literal)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }

    pub const fn len(self) -> usize {
        self.0.len()
    }

    pub const fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_JOB_POSITION: Prefix = Prefix::new("j/");
pub const PREFIX_STATUS: Prefix = Prefix::new("s/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");

/// Prefix that introduces values of the given field kind.
pub const fn prefix_for(kind: FieldKind) -> Prefix {
    match kind {
        FieldKind::Name => PREFIX_NAME,
        FieldKind::Phone => PREFIX_PHONE,
        FieldKind::Email => PREFIX_EMAIL,
        FieldKind::JobPosition => PREFIX_JOB_POSITION,
        FieldKind::Status => PREFIX_STATUS,
        FieldKind::Address => PREFIX_ADDRESS,
        FieldKind::Tag => PREFIX_TAG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_kind_has_a_distinct_prefix() {
        let mut literals: Vec<_> = FieldKind::COMPULSORY
            .iter()
            .chain([FieldKind::Tag].iter())
            .map(|kind| prefix_for(*kind).as_str())
            .collect();
        literals.sort_unstable();
        literals.dedup();
        assert_eq!(literals.len(), 7);
    }
}
