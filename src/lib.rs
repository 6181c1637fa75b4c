//! # mensajero-rs
//!
//! Address handling for courier route lists in Colombian cities.
//!
//! Couriers keep a list of free-text addresses such as `"Calle 10 # 5-23"`
//! and want them in a predictable order before heading out. This library
//! parses those addresses into their parts (road type, road number and
//! letter, cross number and letter, door number), sorts lists of them, and
//! builds the Google Maps / Waze links used to navigate to each one.
//!
//! ## Features
//!
//! - **Two parsing strategies**: a strict capturing pattern and a loose
//!   prefix-table scanner, selectable per parser
//! - **Two orders**: road types ranked by canonical name or by a fixed
//!   enumeration, with a direction that flips on every list sort
//! - **Stable partitioning**: entries that do not parse keep their relative
//!   order after every sorted entry
//! - **Deep links**: Google Maps and Waze URLs for a configurable city
//! - **OCR helpers**: pick an address out of recognized text
//! - **Proximity routing**: greedy nearest-neighbour ordering over any
//!   geocoder
//!
//! ## Quick Start
//!
//! ```rust
//! use mensajero_rs::Mensajero;
//!
//! let mensajero = Mensajero::new();
//!
//! let mut list = mensajero.address_list();
//! list.add("Carrera 5 # 10-20");
//! list.add("Calle 3 # 1-5");
//! list.add("no-es-direccion");
//! list.sort();
//!
//! assert_eq!(list.as_slice(), ["Calle 3 # 1-5", "Carrera 5 # 10-20", "no-es-direccion"]);
//! ```

#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod comparator;
pub mod detect;
pub mod error;
pub mod list;
pub mod navigation;
pub mod normalizer;
pub mod parser;
pub mod route;
pub mod sorter;
pub mod types;

use tracing::info;

// Re-export main API
pub use comparator::{AddressOrder, LooseOrder, PreciseOrder, SortStrategy};
pub use detect::{detect_address, find_address};
pub use error::{Error, Result};
pub use list::{AddressList, Confirmation};
pub use navigation::{LinkOpener, Navigator, map_url};
pub use normalizer::{AddressNormalizer, NormalizedAddress};
pub use parser::{AddressParser, ParsedAddress};
pub use route::{Coordinates, Geocoder, order_by_proximity};
pub use sorter::{AddressSorter, Partition};
pub use types::*;

/// Environment variable overriding the city appended to map queries.
pub const ENV_CITY: &str = "MENSAJERO_CITY";
/// Environment variable selecting the parse strategy (`prefix` | `regex`).
pub const ENV_PARSE_STRATEGY: &str = "MENSAJERO_PARSE_STRATEGY";
/// Environment variable selecting the sort strategy (`precise` | `loose`).
pub const ENV_SORT_STRATEGY: &str = "MENSAJERO_SORT_STRATEGY";
/// Environment variable selecting the unknown road-type policy
/// (`unparsed` | `sort-last` | `nearest`).
pub const ENV_UNKNOWN_ROAD: &str = "MENSAJERO_UNKNOWN_ROAD";

/// Main entry point for mensajero functionality.
///
/// Holds a [`MensajeroConfig`] and hands out parsers, sorters, lists and
/// navigators configured from it.
///
/// # Examples
///
/// ```rust
/// use mensajero_rs::{MapApp, Mensajero, MensajeroConfig, SortStrategy};
///
/// let config = MensajeroConfig::builder()
///     .city("Valle de Aburrá")
///     .sort_strategy(SortStrategy::Loose)
///     .build();
/// let mensajero = Mensajero::with_config(config);
///
/// let url = mensajero.map_url("Calle 10 # 5-23", MapApp::Google);
/// assert!(url.ends_with("Valle%20de%20Aburr%C3%A1%2C%20Colombia"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mensajero {
    config: MensajeroConfig,
}

impl Mensajero {
    /// Create an instance with the default configuration.
    pub fn new() -> Self {
        Self::with_config(MensajeroConfig::default())
    }

    /// Create an instance with a custom configuration.
    pub fn with_config(config: MensajeroConfig) -> Self {
        Self { config }
    }

    /// Create an instance configured from the `MENSAJERO_*` environment
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if a variable holds an unknown value.
    pub fn from_env() -> Result<Self> {
        Ok(Self::with_config(MensajeroConfig::from_env()?))
    }

    /// Create a parser configured from this instance.
    pub fn parser(&self) -> AddressParser {
        AddressParser::new()
            .with_strategy(self.config.parse_strategy)
            .with_unknown_road(self.config.unknown_road)
    }

    /// Create a sorter configured from this instance.
    pub fn sorter(&self) -> AddressSorter {
        AddressSorter::new()
            .with_parser(self.parser())
            .with_strategy(self.config.sort_strategy)
    }

    /// Create an empty address list using this instance's sorter.
    pub fn address_list(&self) -> AddressList {
        AddressList::with_sorter(self.sorter())
    }

    /// Parse an address string into structured components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotParsed`] if the configured strategy cannot parse
    /// the input.
    pub fn parse_address(&self, address: &str) -> Result<ParsedAddress> {
        self.parser().parse(address)
    }

    /// Sort raw addresses; unparsed entries go last in their original order.
    pub fn sort_addresses<S: AsRef<str> + Clone>(
        &self,
        entries: &[S],
        direction: SortDirection,
    ) -> Vec<S> {
        self.sorter().sort(entries, direction)
    }

    /// Deep link for `address` in `app`, using the configured city.
    pub fn map_url(&self, address: &str, app: MapApp) -> String {
        map_url(address, app, &self.config.city)
    }

    /// Create a navigator that opens links through `opener`.
    pub fn navigator<O: LinkOpener>(&self, opener: O) -> Navigator<O> {
        Navigator::new(opener, self.config.city.clone())
    }

    /// Get the configuration used by this instance.
    pub fn config(&self) -> &MensajeroConfig {
        &self.config
    }
}

/// Configuration for parsing, ordering and navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MensajeroConfig {
    /// City appended to map queries
    pub city: String,

    /// How addresses are parsed
    pub parse_strategy: ParseStrategy,

    /// How parsed addresses are ordered
    pub sort_strategy: SortStrategy,

    /// What happens to prefix-parsed addresses with an unknown road type
    pub unknown_road: UnknownRoadPolicy,
}

impl Default for MensajeroConfig {
    fn default() -> Self {
        Self {
            city: MEDELLIN.to_string(),
            parse_strategy: ParseStrategy::default(),
            sort_strategy: SortStrategy::default(),
            unknown_road: UnknownRoadPolicy::default(),
        }
    }
}

impl MensajeroConfig {
    /// Create a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mensajero_rs::{MensajeroConfig, ParseStrategy};
    ///
    /// let config = MensajeroConfig::builder()
    ///     .parse_strategy(ParseStrategy::Prefix)
    ///     .build();
    /// assert_eq!(config.city, "Medellín");
    /// ```
    pub fn builder() -> MensajeroConfigBuilder {
        MensajeroConfigBuilder::new()
    }

    /// Defaults overlaid with the `MENSAJERO_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if a variable holds an unknown value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name: &str| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut builder = Self::builder();
        if let Some(city) = lookup(ENV_CITY).filter(|c| !c.trim().is_empty()) {
            builder = builder.city(city.trim());
        }
        if let Some(value) = lookup(ENV_PARSE_STRATEGY) {
            builder = builder.parse_strategy(value.parse()?);
        }
        if let Some(value) = lookup(ENV_SORT_STRATEGY) {
            builder = builder.sort_strategy(value.parse()?);
        }
        if let Some(value) = lookup(ENV_UNKNOWN_ROAD) {
            builder = builder.unknown_road(value.parse()?);
        }

        let config = builder.build();
        info!(
            city = %config.city,
            parse_strategy = ?config.parse_strategy,
            sort_strategy = ?config.sort_strategy,
            unknown_road = ?config.unknown_road,
            "loaded configuration from environment"
        );
        Ok(config)
    }
}

/// Builder for MensajeroConfig.
#[derive(Debug, Clone)]
pub struct MensajeroConfigBuilder {
    city: String,
    parse_strategy: ParseStrategy,
    sort_strategy: SortStrategy,
    unknown_road: UnknownRoadPolicy,
}

impl MensajeroConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        let defaults = MensajeroConfig::default();
        Self {
            city: defaults.city,
            parse_strategy: defaults.parse_strategy,
            sort_strategy: defaults.sort_strategy,
            unknown_road: defaults.unknown_road,
        }
    }

    /// Set the city appended to map queries.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Set the parse strategy.
    pub fn parse_strategy(mut self, strategy: ParseStrategy) -> Self {
        self.parse_strategy = strategy;
        self
    }

    /// Set the sort strategy.
    pub fn sort_strategy(mut self, strategy: SortStrategy) -> Self {
        self.sort_strategy = strategy;
        self
    }

    /// Set the unknown road-type policy.
    pub fn unknown_road(mut self, policy: UnknownRoadPolicy) -> Self {
        self.unknown_road = policy;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> MensajeroConfig {
        MensajeroConfig {
            city: self.city,
            parse_strategy: self.parse_strategy,
            sort_strategy: self.sort_strategy,
            unknown_road: self.unknown_road,
        }
    }
}

impl Default for MensajeroConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
