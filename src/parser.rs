//! Address parsing functionality.
//!
//! Two extraction strategies coexist and give different answers for the
//! same input, so both are kept:
//!
//! - [`ParseStrategy::Regex`] matches one capturing pattern anywhere in the
//!   text. Anything the pattern cannot capture makes the whole parse fail.
//! - [`ParseStrategy::Prefix`] looks the road type up in an ordered prefix
//!   table and scans the rest for numbers, defaulting missing ones to zero.
//!   It never fails; unmatched road types come back as [`RoadType::Unknown`].

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::normalizer::AddressNormalizer;
use crate::types::{NormalizationLevel, ParseStrategy, RoadType, UnknownRoadPolicy};

/// Capturing pattern for `<road> <n>[letters] # <m>[letters] - <door>`.
///
/// Numbers are ASCII digits only, matching what `u32::from_str` accepts.
pub(crate) static ADDRESS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(Calle|Cl|Cll|Carrera|Cra|Cr|Diagonal|Dg|Transversal|Tv)\s*([0-9]+)\s*([A-Z]{0,3})?\s*#\s*([0-9]+)\s*([A-Z]{0,3})?\s*-?\s*([0-9]+)",
    )
    .expect("address pattern is a valid regex")
});

/// Road-type prefixes in match priority order; the first prefix of the
/// normalized text wins.
const PREFIX_TABLE: &[(&str, RoadType)] = &[
    ("avenida", RoadType::Avenue),
    ("av", RoadType::Avenue),
    ("carrera", RoadType::Road),
    ("cra", RoadType::Road),
    ("calle", RoadType::Street),
    ("cl", RoadType::Street),
    ("diagonal", RoadType::Diagonal),
    ("dg", RoadType::Diagonal),
    ("transversal", RoadType::Transversal),
    ("tv", RoadType::Transversal),
    ("circular", RoadType::Circular),
    ("cir", RoadType::Circular),
];

const MAX_LETTER_SUFFIX: usize = 3;

/// High-level address parser with idiomatic Rust API.
#[derive(Debug, Clone)]
pub struct AddressParser {
    strategy: ParseStrategy,
    unknown_road: UnknownRoadPolicy,
    normalizer: AddressNormalizer,
}

impl AddressParser {
    /// Create a new parser using the regex strategy.
    pub fn new() -> Self {
        Self {
            strategy: ParseStrategy::default(),
            unknown_road: UnknownRoadPolicy::default(),
            normalizer: AddressNormalizer::new().with_level(NormalizationLevel::Aggressive),
        }
    }

    /// Set the extraction strategy.
    pub fn with_strategy(mut self, strategy: ParseStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set how prefix-parsed addresses with an unknown road type are treated.
    pub fn with_unknown_road(mut self, policy: UnknownRoadPolicy) -> Self {
        self.unknown_road = policy;
        self
    }

    /// The extraction strategy in use.
    pub fn strategy(&self) -> ParseStrategy {
        self.strategy
    }

    /// The unknown road-type policy in use.
    pub fn unknown_road(&self) -> UnknownRoadPolicy {
        self.unknown_road
    }

    /// Parse an address string into structured components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotParsed`] when the regex strategy cannot match the
    /// input. The prefix strategy never fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mensajero_rs::{AddressParser, RoadType};
    ///
    /// let parser = AddressParser::new();
    /// let parsed = parser.parse("Calle 10 # 5-23")?;
    /// assert_eq!(parsed.road_type, RoadType::Street);
    /// assert_eq!(parsed.door_number, 23);
    /// # Ok::<(), mensajero_rs::Error>(())
    /// ```
    pub fn parse(&self, address: &str) -> Result<ParsedAddress> {
        let result = match self.strategy {
            ParseStrategy::Regex => self.parse_regex(address),
            ParseStrategy::Prefix => Ok(self.parse_prefix(address)),
        };

        match &result {
            Ok(parsed) => debug!(address, road_type = %parsed.road_type, "parsed address"),
            Err(_) => debug!(address, "address not parsed"),
        }
        result
    }

    /// Parse an address and keep it only if it can take part in sorting.
    ///
    /// Parse failures are never sortable. A prefix-parsed address with an
    /// unknown road type is sortable only under
    /// [`UnknownRoadPolicy::SortLast`].
    pub fn parse_sortable(&self, address: &str) -> Option<ParsedAddress> {
        let parsed = self.parse(address).ok()?;
        if parsed.road_type.is_unknown() && self.unknown_road != UnknownRoadPolicy::SortLast {
            return None;
        }
        Some(parsed)
    }

    /// Parse multiple addresses in batch, stopping at the first failure.
    pub fn parse_batch(&self, addresses: &[&str]) -> Result<Vec<ParsedAddress>> {
        addresses.iter().map(|addr| self.parse(addr)).collect()
    }

    /// Parse multiple addresses in parallel using multiple threads.
    ///
    /// Results come back in input order; failures stay in place as errors.
    #[cfg(feature = "parallel")]
    pub fn parse_batch_parallel(&self, addresses: &[&str]) -> Vec<Result<ParsedAddress>> {
        use rayon::prelude::*;

        addresses.par_iter().map(|addr| self.parse(addr)).collect()
    }

    /// Parse multiple addresses in parallel and return only successful results.
    #[cfg(feature = "parallel")]
    pub fn parse_batch_parallel_ok(&self, addresses: &[&str]) -> Vec<ParsedAddress> {
        self.parse_batch_parallel(addresses)
            .into_iter()
            .filter_map(|result| result.ok())
            .collect()
    }

    fn parse_regex(&self, address: &str) -> Result<ParsedAddress> {
        let captures = ADDRESS_PATTERN
            .captures(address.trim())
            .ok_or_else(|| Error::not_parsed(address))?;

        let number = |group: usize| -> Result<u32> {
            captures
                .get(group)
                .and_then(|m| m.as_str().parse().ok())
                .ok_or_else(|| Error::not_parsed(address))
        };
        let letters = |group: usize| -> String {
            captures
                .get(group)
                .map(|m| m.as_str().to_uppercase())
                .unwrap_or_default()
        };

        let mut parsed = ParsedAddress {
            road_type: RoadType::from_token(&captures[1]),
            road_number: number(2)?,
            road_letter: letters(3),
            cross_number: number(4)?,
            cross_letter: letters(5),
            door_number: number(6)?,
            street: None,
            avenue: None,
        };
        parsed.assign_cross_axes();
        Ok(parsed)
    }

    fn parse_prefix(&self, address: &str) -> ParsedAddress {
        let normalized = self.normalizer.normalize(address);
        let (road_type, rest) = self.match_road_type(normalized.as_str());

        let mut scanner = Scanner::new(rest);
        let road_number = scanner.next_number();
        let road_letter = scanner.letter_suffix();
        let cross_number = scanner.next_number();
        let cross_letter = scanner.letter_suffix();
        let door_number = scanner.next_number();

        ParsedAddress {
            road_type,
            road_number,
            road_letter,
            cross_number,
            cross_letter,
            door_number,
            street: None,
            avenue: None,
        }
    }

    fn match_road_type<'a>(&self, text: &'a str) -> (RoadType, &'a str) {
        for (token, road_type) in PREFIX_TABLE {
            if let Some(rest) = text.strip_prefix(token) {
                return (*road_type, rest);
            }
        }

        if self.unknown_road == UnknownRoadPolicy::Nearest {
            let word_len: usize = text
                .chars()
                .take_while(|c| c.is_alphabetic())
                .map(char::len_utf8)
                .sum();
            if word_len > 0 {
                let (word, rest) = text.split_at(word_len);
                return (nearest_road_type(word), rest);
            }
        }

        (RoadType::Unknown, text)
    }
}

impl Default for AddressParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Structured representation of a parsed address.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedAddress {
    /// Road classification
    pub road_type: RoadType,
    /// Number of the road the address is on
    pub road_number: u32,
    /// Upper-case letter suffix of the road number, empty if absent
    pub road_letter: String,
    /// Number of the crossing road, after `#`
    pub cross_number: u32,
    /// Upper-case letter suffix of the cross number, empty if absent
    pub cross_letter: String,
    /// Door number, after `-`
    pub door_number: u32,
    /// Calle number of the intersection, when the road type tells which axis is which
    pub street: Option<u32>,
    /// Carrera number of the intersection, when the road type tells which axis is which
    pub avenue: Option<u32>,
}

impl ParsedAddress {
    /// Check if every field came from a recognized address.
    pub fn is_complete(&self) -> bool {
        !self.road_type.is_unknown()
    }

    // Calle runs one way and Carrera the other, so the same intersection can
    // be written from either axis.
    fn assign_cross_axes(&mut self) {
        match self.road_type {
            RoadType::Street => {
                self.street = Some(self.road_number);
                self.avenue = Some(self.cross_number);
            }
            RoadType::Road => {
                self.street = Some(self.cross_number);
                self.avenue = Some(self.road_number);
            }
            _ => {}
        }
    }
}

impl fmt::Display for ParsedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}{} # {}{}-{}",
            self.road_type,
            self.road_number,
            self.road_letter,
            self.cross_number,
            self.cross_letter,
            self.door_number
        )
    }
}

/// Forward-only scanner over the text that follows the road-type token.
struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    /// Skip to the next run of ASCII digits and consume it; 0 if none is left.
    fn next_number(&mut self) -> u32 {
        let start = self
            .rest
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        let tail = &self.rest[start..];
        let len = tail
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(tail.len());
        let (digits, rest) = tail.split_at(len);
        self.rest = rest;

        digits.bytes().fold(0u32, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(u32::from(digit - b'0'))
        })
    }

    /// Consume a short alphabetic suffix (after optional spaces) if one
    /// follows; longer words are left for the next number search to skip.
    fn letter_suffix(&mut self) -> String {
        let trimmed = self.rest.trim_start();
        let len = trimmed
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(trimmed.len());
        if len == 0 || len > MAX_LETTER_SUFFIX {
            return String::new();
        }
        let (letters, rest) = trimmed.split_at(len);
        self.rest = rest;
        letters.to_ascii_uppercase()
    }
}

/// Road type whose prefix-table token is closest to `word` by edit
/// distance; ties go to the earlier table entry.
fn nearest_road_type(word: &str) -> RoadType {
    PREFIX_TABLE
        .iter()
        .min_by_key(|(token, _)| edit_distance(word, token))
        .map(|(_, road_type)| *road_type)
        .unwrap_or(RoadType::Unknown)
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != *cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}
