//! Common types and enums for mensajero-rs.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// City suffix used by the Medellín variant of the deep links.
pub const MEDELLIN: &str = "Medellín";

/// City suffix used by the metropolitan-area variant of the deep links.
pub const VALLE_DE_ABURRA: &str = "Valle de Aburrá";

/// Country appended to every map query.
pub const COUNTRY: &str = "Colombia";

/// Colombian urban road classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoadType {
    /// Calle
    Street,
    /// Avenida
    Avenue,
    /// Carrera
    Road,
    /// Diagonal
    Diagonal,
    /// Transversal
    Transversal,
    /// Circular
    Circular,
    /// Anything the abbreviation table does not know
    Unknown,
}

impl RoadType {
    /// Every known road type, in the order used by the loose comparator.
    pub const LOOSE_ORDER: [RoadType; 7] = [
        RoadType::Avenue,
        RoadType::Road,
        RoadType::Street,
        RoadType::Diagonal,
        RoadType::Transversal,
        RoadType::Circular,
        RoadType::Unknown,
    ];

    /// Canonical Spanish name, used by the precise comparator.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            RoadType::Street => "Calle",
            RoadType::Avenue => "Avenida",
            RoadType::Road => "Carrera",
            RoadType::Diagonal => "Diagonal",
            RoadType::Transversal => "Transversal",
            RoadType::Circular => "Circular",
            RoadType::Unknown => "Desconocida",
        }
    }

    /// Normalize an abbreviation or full name (case-insensitive, trailing
    /// period ignored).
    pub fn from_token(token: &str) -> Self {
        let token = token.trim().trim_end_matches('.').to_lowercase();
        match token.as_str() {
            "cl" | "cll" | "calle" => RoadType::Street,
            "cra" | "cr" | "carrera" => RoadType::Road,
            "dg" | "diagonal" => RoadType::Diagonal,
            "tv" | "transversal" => RoadType::Transversal,
            "av" | "avenida" => RoadType::Avenue,
            "cir" | "circular" => RoadType::Circular,
            _ => RoadType::Unknown,
        }
    }

    /// Position in [`RoadType::LOOSE_ORDER`]; `Unknown` is always last.
    pub fn loose_rank(&self) -> usize {
        Self::LOOSE_ORDER
            .iter()
            .position(|road| road == self)
            .unwrap_or(Self::LOOSE_ORDER.len())
    }

    /// Lexical order on canonical names with `Unknown` after every known type.
    pub fn cmp_canonical(&self, other: &Self) -> Ordering {
        (self.is_unknown(), self.canonical_name())
            .cmp(&(other.is_unknown(), other.canonical_name()))
    }

    /// Check if the road type was not recognized.
    pub fn is_unknown(&self) -> bool {
        matches!(self, RoadType::Unknown)
    }
}

impl fmt::Display for RoadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Sort direction shared by every comparison of one sort pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortDirection {
    /// Smallest first
    #[default]
    Ascending,
    /// Largest first
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Apply the direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("ascending"),
            SortDirection::Descending => f.write_str("descending"),
        }
    }
}

/// How the road type and numbers are extracted from raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseStrategy {
    /// Ordered prefix table, missing numbers default to zero
    Prefix,
    /// Single capturing pattern, anything missing is a parse failure
    #[default]
    Regex,
}

impl FromStr for ParseStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "prefix" | "loose" => Ok(ParseStrategy::Prefix),
            "regex" | "strict" => Ok(ParseStrategy::Regex),
            other => Err(Error::config_error(format!(
                "unknown parse strategy '{other}', expected 'prefix' or 'regex'"
            ))),
        }
    }
}

/// What to do with a loosely parsed address whose road type is not known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnknownRoadPolicy {
    /// Treat it like a parse failure: partitioned after every sorted entry
    #[default]
    Unparsed,
    /// Keep it in the sort with `Unknown` ranked after every known type
    SortLast,
    /// Merge it into the closest road-type abbreviation
    Nearest,
}

impl FromStr for UnknownRoadPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "unparsed" => Ok(UnknownRoadPolicy::Unparsed),
            "sort-last" | "sort_last" | "last" => Ok(UnknownRoadPolicy::SortLast),
            "nearest" => Ok(UnknownRoadPolicy::Nearest),
            other => Err(Error::config_error(format!(
                "unknown road policy '{other}', expected 'unparsed', 'sort-last' or 'nearest'"
            ))),
        }
    }
}

/// Normalization levels for address text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NormalizationLevel {
    /// Trim and lower-case; the key used for duplicate detection
    Light,
    /// Light plus period removal; the working copy for token matching
    #[default]
    Medium,
    /// Medium plus collapsing runs of whitespace into one space
    Aggressive,
}

/// External navigation application targeted by a deep link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapApp {
    /// Google Maps search
    Google,
    /// Waze universal link
    Waze,
}

impl MapApp {
    /// Selector string for this application.
    pub fn as_str(&self) -> &'static str {
        match self {
            MapApp::Google => "google",
            MapApp::Waze => "waze",
        }
    }
}

impl FromStr for MapApp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "google" => Ok(MapApp::Google),
            "waze" => Ok(MapApp::Waze),
            _ => Err(Error::unknown_map_app(s)),
        }
    }
}

impl fmt::Display for MapApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_road_type_tokens() {
        assert_eq!(RoadType::from_token("Cl."), RoadType::Street);
        assert_eq!(RoadType::from_token("CLL"), RoadType::Street);
        assert_eq!(RoadType::from_token("cr"), RoadType::Road);
        assert_eq!(RoadType::from_token("Carrera"), RoadType::Road);
        assert_eq!(RoadType::from_token("Dg"), RoadType::Diagonal);
        assert_eq!(RoadType::from_token("tv"), RoadType::Transversal);
        assert_eq!(RoadType::from_token("Av"), RoadType::Avenue);
        assert_eq!(RoadType::from_token("cir"), RoadType::Circular);
        assert_eq!(RoadType::from_token("autopista"), RoadType::Unknown);
    }

    #[test]
    fn test_loose_rank_puts_unknown_last() {
        assert_eq!(RoadType::Avenue.loose_rank(), 0);
        assert!(RoadType::Road.loose_rank() < RoadType::Street.loose_rank());
        assert_eq!(RoadType::Unknown.loose_rank(), 6);
    }

    #[test]
    fn test_canonical_order() {
        assert_eq!(RoadType::Street.cmp_canonical(&RoadType::Road), Ordering::Less);
        assert_eq!(RoadType::Avenue.cmp_canonical(&RoadType::Street), Ordering::Less);
        assert_eq!(
            RoadType::Unknown.cmp_canonical(&RoadType::Transversal),
            Ordering::Greater
        );
    }

    #[test]
    fn test_sort_direction() {
        assert_eq!(SortDirection::default(), SortDirection::Ascending);
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(
            SortDirection::Descending.apply(Ordering::Less),
            Ordering::Greater
        );
        assert_eq!(SortDirection::Descending.to_string(), "descending");
    }

    #[test]
    fn test_config_enums_from_str() {
        assert_eq!(
            "Prefix".parse::<ParseStrategy>().unwrap(),
            ParseStrategy::Prefix
        );
        assert_eq!(
            "sort-last".parse::<UnknownRoadPolicy>().unwrap(),
            UnknownRoadPolicy::SortLast
        );
        assert_matches!(
            "fuzzy".parse::<ParseStrategy>(),
            Err(Error::ConfigError { .. })
        );
    }

    #[test]
    fn test_map_app_from_str() {
        assert_eq!("Google".parse::<MapApp>().unwrap(), MapApp::Google);
        assert_eq!("waze".parse::<MapApp>().unwrap(), MapApp::Waze);
        assert_matches!("bing".parse::<MapApp>(), Err(Error::UnknownMapApp { name }) if name == "bing");
    }
}
