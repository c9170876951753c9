use super::error::ParseError;
use super::syntax::Prefix;
use super::tokenizer::ArgumentMultimap;

/// Fail when any prefix in `non_repeatable` holds more than one value.
///
/// Offenders are reported in the order of `non_repeatable`, never in input order.
pub fn verify_no_duplicate_prefixes(
    multimap: &ArgumentMultimap,
    non_repeatable: &[Prefix],
) -> Result<(), ParseError> {
    let duplicated: Vec<Prefix> = non_repeatable
        .iter()
        .copied()
        .filter(|prefix| multimap.all_values(*prefix).len() > 1)
        .collect();

    if duplicated.is_empty() {
        Ok(())
    } else {
        Err(ParseError::duplicate_prefixes(duplicated))
    }
}
