//! Error types and handling for mensajero-rs.

/// Result type alias for mensajero operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for mensajero operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input does not look like a Colombian urban address
    #[error("Not a recognizable address: {input:?}")]
    NotParsed {
        /// Raw input that failed to parse
        input: String,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Error message
        message: String,
    },

    /// Map application selector other than `google` or `waze`
    #[error("Unknown map application: {name}")]
    UnknownMapApp {
        /// Selector as given by the caller
        name: String,
    },

    /// OCR text did not contain an address
    #[error("No valid address detected")]
    NoAddressDetected,

    /// The platform link opener refused the URL
    #[error("Could not open link: {message}")]
    LinkOpenFailed {
        /// Error message
        message: String,
    },

    /// Geocoding of a single address failed
    #[error("Geocoding failed for {address:?}: {message}")]
    GeocodingFailed {
        /// Address that could not be located
        address: String,
        /// Error message
        message: String,
    },
}

impl Error {
    /// Create a new parse failure for the given input
    pub fn not_parsed(input: impl Into<String>) -> Self {
        Self::NotParsed {
            input: input.into(),
        }
    }

    /// Create a new configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a new unknown map application error
    pub fn unknown_map_app(name: impl Into<String>) -> Self {
        Self::UnknownMapApp { name: name.into() }
    }

    /// Create a new link opening error
    pub fn link_open_failed(message: impl Into<String>) -> Self {
        Self::LinkOpenFailed {
            message: message.into(),
        }
    }

    /// Create a new geocoding error
    pub fn geocoding_failed(address: impl Into<String>, message: impl Into<String>) -> Self {
        Self::GeocodingFailed {
            address: address.into(),
            message: message.into(),
        }
    }

    /// Whether this error only classifies the input as unsortable.
    pub fn is_not_parsed(&self) -> bool {
        matches!(self, Self::NotParsed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::not_parsed("xyz").to_string(),
            "Not a recognizable address: \"xyz\""
        );
        assert_eq!(
            Error::unknown_map_app("bing").to_string(),
            "Unknown map application: bing"
        );
        assert_eq!(
            Error::NoAddressDetected.to_string(),
            "No valid address detected"
        );
    }

    #[test]
    fn test_is_not_parsed() {
        assert!(Error::not_parsed("xyz").is_not_parsed());
        assert!(!Error::config_error("bad").is_not_parsed());
    }
}
