//! Address text normalization.
//!
//! Normalization never changes what is stored in an address list; it
//! only produces working copies for token matching and duplicate
//! detection.

use crate::types::NormalizationLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NormalizeOptions {
    trim_string: bool,
    lowercase: bool,
    delete_periods: bool,
    collapse_whitespace: bool,
}

/// High-level address normalizer with builder pattern.
#[derive(Debug, Clone)]
pub struct AddressNormalizer {
    options: NormalizeOptions,
}

impl AddressNormalizer {
    /// Create a new normalizer with default (medium) options.
    pub fn new() -> Self {
        Self {
            options: NormalizeOptions {
                trim_string: true,
                lowercase: true,
                delete_periods: true,
                collapse_whitespace: false,
            },
        }
    }

    /// Set normalization level (controls which transformations are applied).
    pub fn with_level(mut self, level: NormalizationLevel) -> Self {
        match level {
            NormalizationLevel::Light => {
                self.options.trim_string = true;
                self.options.lowercase = true;
                self.options.delete_periods = false;
                self.options.collapse_whitespace = false;
            }
            NormalizationLevel::Medium => {
                self.options.trim_string = true;
                self.options.lowercase = true;
                self.options.delete_periods = true;
                self.options.collapse_whitespace = false;
            }
            NormalizationLevel::Aggressive => {
                self.options.trim_string = true;
                self.options.lowercase = true;
                self.options.delete_periods = true;
                self.options.collapse_whitespace = true;
            }
        }
        self
    }

    /// Normalize an address string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mensajero_rs::AddressNormalizer;
    ///
    /// let normalizer = AddressNormalizer::new();
    /// let normalized = normalizer.normalize("  Cl. 10 # 5-23 ");
    /// assert_eq!(normalized.as_str(), "cl 10 # 5-23");
    /// ```
    pub fn normalize(&self, input: &str) -> NormalizedAddress {
        let mut text = if self.options.trim_string {
            input.trim().to_string()
        } else {
            input.to_string()
        };

        if self.options.delete_periods {
            text.retain(|c| c != '.');
        }
        if self.options.lowercase {
            text = text.to_lowercase();
        }
        if self.options.collapse_whitespace {
            text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        }

        NormalizedAddress {
            original: input.to_string(),
            normalized: text,
        }
    }
}

impl Default for AddressNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of address normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedAddress {
    /// Original input string
    pub original: String,
    /// Normalized working copy
    pub normalized: String,
}

impl NormalizedAddress {
    /// Get the normalized text.
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Check if normalization left nothing behind.
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Key under which two raw addresses count as duplicates: trimmed and
/// case-insensitive.
pub fn duplicate_key(address: &str) -> String {
    AddressNormalizer::new()
        .with_level(NormalizationLevel::Light)
        .normalize(address)
        .normalized
}
