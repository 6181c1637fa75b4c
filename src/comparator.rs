//! Total orders over parsed addresses.
//!
//! Both orders compare the same fields in the same sequence (road type,
//! road number, road letter, cross number, cross letter, door number) and
//! differ only in how road types rank against each other:
//!
//! - [`PreciseOrder`] sorts road types by canonical name (Avenida, Calle,
//!   Carrera, Circular, Diagonal, Transversal).
//! - [`LooseOrder`] sorts them by their position in
//!   [`RoadType::LOOSE_ORDER`](crate::types::RoadType::LOOSE_ORDER)
//!   (Avenida, Carrera, Calle, ...).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::parser::ParsedAddress;
use crate::types::SortDirection;

/// A total order on parsed addresses.
pub trait AddressOrder {
    /// Ascending comparison.
    fn compare_ascending(&self, a: &ParsedAddress, b: &ParsedAddress) -> Ordering;

    /// Comparison in the given direction; descending inverts every field.
    fn compare(&self, a: &ParsedAddress, b: &ParsedAddress, direction: SortDirection) -> Ordering {
        direction.apply(self.compare_ascending(a, b))
    }
}

/// Road types ranked by canonical name.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreciseOrder;

impl AddressOrder for PreciseOrder {
    fn compare_ascending(&self, a: &ParsedAddress, b: &ParsedAddress) -> Ordering {
        a.road_type
            .cmp_canonical(&b.road_type)
            .then_with(|| compare_numbers(a, b))
    }
}

/// Road types ranked by fixed enumeration index.
#[derive(Debug, Clone, Copy, Default)]
pub struct LooseOrder;

impl AddressOrder for LooseOrder {
    fn compare_ascending(&self, a: &ParsedAddress, b: &ParsedAddress) -> Ordering {
        a.road_type
            .loose_rank()
            .cmp(&b.road_type.loose_rank())
            .then_with(|| compare_numbers(a, b))
    }
}

fn compare_numbers(a: &ParsedAddress, b: &ParsedAddress) -> Ordering {
    a.road_number
        .cmp(&b.road_number)
        .then_with(|| a.road_letter.cmp(&b.road_letter))
        .then_with(|| a.cross_number.cmp(&b.cross_number))
        .then_with(|| a.cross_letter.cmp(&b.cross_letter))
        .then_with(|| a.door_number.cmp(&b.door_number))
}

/// Configuration selector for the two address orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortStrategy {
    /// [`PreciseOrder`]
    #[default]
    Precise,
    /// [`LooseOrder`]
    Loose,
}

impl SortStrategy {
    /// Compare returning `-1`, `0` or `1`.
    pub fn compare_signum(
        &self,
        a: &ParsedAddress,
        b: &ParsedAddress,
        direction: SortDirection,
    ) -> i8 {
        match self.compare(a, b, direction) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

impl AddressOrder for SortStrategy {
    fn compare_ascending(&self, a: &ParsedAddress, b: &ParsedAddress) -> Ordering {
        match self {
            SortStrategy::Precise => PreciseOrder.compare_ascending(a, b),
            SortStrategy::Loose => LooseOrder.compare_ascending(a, b),
        }
    }
}

impl FromStr for SortStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "precise" => Ok(SortStrategy::Precise),
            "loose" => Ok(SortStrategy::Loose),
            other => Err(Error::config_error(format!(
                "unknown sort strategy '{other}', expected 'precise' or 'loose'"
            ))),
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortStrategy::Precise => f.write_str("precise"),
            SortStrategy::Loose => f.write_str("loose"),
        }
    }
}
