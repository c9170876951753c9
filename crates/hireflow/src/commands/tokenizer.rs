//! Lexical split of a command tail into prefixed values.
//!
//! A prefix only counts when it starts the string or follows whitespace, so `n/` inside
//! `a/Block n/a` is a new name value while `https://x.io/n/` is left alone. Nothing is
//! validated here.

use std::collections::HashMap;

use super::syntax::Prefix;

/// Values captured for each recognized prefix, in order of appearance, plus the text
/// preceding the first prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    values: HashMap<Prefix, Vec<String>>,
    preamble: String,
}

impl ArgumentMultimap {
    /// Last value supplied for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values
            .get(&prefix)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        !self.all_values(prefix).is_empty()
    }

    /// Raw text before the first prefix, untrimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    fn push(&mut self, prefix: Prefix, value: &str) {
        self.values
            .entry(prefix)
            .or_default()
            .push(value.to_string());
    }
}

/// Split `args` at every boundary occurrence of `prefixes`.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut found: Vec<(usize, Prefix)> = prefixes
        .iter()
        .filter(|prefix| !prefix.is_empty())
        .flat_map(|prefix| prefix_positions(args, *prefix))
        .collect();
    found.sort_by_key(|(start, _)| *start);

    // A match starting inside an accepted prefix belongs to that prefix's text.
    let mut positions: Vec<(usize, Prefix)> = Vec::with_capacity(found.len());
    for (start, prefix) in found {
        let clear = positions
            .last()
            .map_or(true, |(previous, accepted)| start >= previous + accepted.len());
        if clear {
            positions.push((start, prefix));
        }
    }

    let preamble_end = positions.first().map_or(args.len(), |(start, _)| *start);
    let mut multimap = ArgumentMultimap {
        values: HashMap::new(),
        preamble: args[..preamble_end].to_string(),
    };

    for (index, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.len();
        let value_end = positions
            .get(index + 1)
            .map_or(args.len(), |(next, _)| *next);
        multimap.push(*prefix, args[value_start..value_end].trim());
    }

    multimap
}

fn prefix_positions(args: &str, prefix: Prefix) -> impl Iterator<Item = (usize, Prefix)> + '_ {
    args.match_indices(prefix.as_str())
        .filter(move |(start, _)| at_token_boundary(args, *start))
        .map(move |(start, _)| (start, prefix))
}

fn at_token_boundary(args: &str, start: usize) -> bool {
    args[..start]
        .chars()
        .next_back()
        .map_or(true, char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLASH_T: Prefix = Prefix::new("t/");
    const DASH_T: Prefix = Prefix::new("-t");
    const HAT_Q: Prefix = Prefix::new("^Q");
    const PSEUDO: Prefix = Prefix::new("p/");

    #[test]
    fn empty_input_has_empty_preamble_and_no_values() {
        let multimap = tokenize("  ", &[SLASH_T]);
        assert_eq!(multimap.preamble().trim(), "");
        assert!(!multimap.is_present(SLASH_T));
        assert_eq!(multimap.value(SLASH_T), None);
    }

    #[test]
    fn no_prefixes_keeps_everything_in_preamble() {
        let args = "  some random string /t tag with leading and trailing spaces ";
        let multimap = tokenize(args, &[]);
        assert_eq!(multimap.preamble(), args);
    }

    #[test]
    fn single_prefix_captures_trimmed_value() {
        let multimap = tokenize(" Some preamble string t/ Argument value ", &[SLASH_T]);
        assert_eq!(multimap.preamble().trim(), "Some preamble string");
        assert_eq!(multimap.value(SLASH_T), Some("Argument value"));

        let multimap = tokenize(" t/   ", &[SLASH_T]);
        assert_eq!(multimap.preamble().trim(), "");
        assert_eq!(multimap.value(SLASH_T), Some(""));
    }

    #[test]
    fn prefix_at_string_start_counts() {
        let multimap = tokenize("t/alpha", &[SLASH_T]);
        assert_eq!(multimap.preamble(), "");
        assert_eq!(multimap.value(SLASH_T), Some("alpha"));
    }

    #[test]
    fn multiple_prefixes_split_in_order() {
        let multimap = tokenize(
            "SomePreambleString -t dashT-Value ^Q hatQ-Value t/ slashT value",
            &[SLASH_T, DASH_T, HAT_Q],
        );
        assert_eq!(multimap.preamble(), "SomePreambleString ");
        assert_eq!(multimap.value(SLASH_T), Some("slashT value"));
        assert_eq!(multimap.value(DASH_T), Some("dashT-Value"));
        assert_eq!(multimap.value(HAT_Q), Some("hatQ-Value"));
    }

    #[test]
    fn repeated_prefix_keeps_every_value_in_order() {
        let multimap = tokenize(
            "SomePreambleString t/ first -t second ^Q third t/ fourth t/fifth",
            &[SLASH_T, DASH_T, HAT_Q],
        );
        assert_eq!(
            multimap.all_values(SLASH_T),
            &["first".to_string(), "fourth".to_string(), "fifth".to_string()]
        );
        assert_eq!(multimap.value(SLASH_T), Some("fifth"));
        assert_eq!(multimap.all_values(DASH_T), &["second".to_string()]);
    }

    #[test]
    fn prefix_without_leading_whitespace_is_part_of_value() {
        let multimap = tokenize(
            "SomePreambleStringt/ not joined^Qjoined -t not joined^Qjoined",
            &[SLASH_T, DASH_T, HAT_Q],
        );
        assert_eq!(
            multimap.preamble(),
            "SomePreambleStringt/ not joined^Qjoined "
        );
        assert_eq!(multimap.value(DASH_T), Some("not joined^Qjoined"));
        assert!(!multimap.is_present(SLASH_T));
        assert!(!multimap.is_present(HAT_Q));
    }

    #[test]
    fn tabs_and_newlines_count_as_boundaries() {
        let multimap = tokenize("\tt/tabbed\np/lined", &[SLASH_T, PSEUDO]);
        assert_eq!(multimap.value(SLASH_T), Some("tabbed"));
        assert_eq!(multimap.value(PSEUDO), Some("lined"));
    }

    #[test]
    fn match_inside_a_longer_prefix_is_ignored() {
        let spaced = Prefix::new("x y");
        let short = Prefix::new("y");
        let multimap = tokenize("x y1", &[spaced, short]);
        assert_eq!(multimap.preamble(), "");
        assert_eq!(multimap.value(spaced), Some("1"));
        assert!(!multimap.is_present(short));

        let multimap = tokenize("x y1 y2", &[short, spaced]);
        assert_eq!(multimap.value(spaced), Some("1"));
        assert_eq!(multimap.value(short), Some("2"));
    }

    #[test]
    fn unrecognized_prefix_stays_in_value() {
        let multimap = tokenize("t/ value x/ other", &[SLASH_T]);
        assert_eq!(multimap.value(SLASH_T), Some("value x/ other"));
    }
}
