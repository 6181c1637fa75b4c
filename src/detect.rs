//! Picking an address out of OCR output.

use tracing::debug;

use crate::error::{Error, Result};
use crate::parser::ADDRESS_PATTERN;

/// Find the first address-shaped substring of `text`.
pub fn find_address(text: &str) -> Option<&str> {
    ADDRESS_PATTERN.find(text).map(|m| m.as_str())
}

/// Join recognized text fragments with single spaces and extract the
/// first address found in them.
///
/// # Errors
///
/// Returns [`Error::NoAddressDetected`] when no fragment combination
/// contains an address; the caller should discard the capture.
///
/// # Example
///
/// ```rust
/// use mensajero_rs::detect_address;
///
/// let found = detect_address(&["ENVIO 4471", "Cra 43A # 1", "-50 El Poblado"])?;
/// assert_eq!(found, "Cra 43A # 1 -50");
/// # Ok::<(), mensajero_rs::Error>(())
/// ```
pub fn detect_address<S: AsRef<str>>(fragments: &[S]) -> Result<String> {
    let text = fragments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");

    match find_address(&text) {
        Some(address) => {
            debug!(address, "address detected in recognized text");
            Ok(address.to_string())
        }
        None => Err(Error::NoAddressDetected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_find_address() {
        assert_eq!(
            find_address("Destinatario: Juan, Calle 10 # 5-23 Int 201"),
            Some("Calle 10 # 5-23")
        );
        assert_eq!(find_address("sin direccion"), None);
    }

    #[test]
    fn test_detect_address_failure() {
        assert_matches!(
            detect_address(&["FACTURA", "TOTAL 25000"]),
            Err(Error::NoAddressDetected)
        );
        let empty: [&str; 0] = [];
        assert_matches!(detect_address(&empty), Err(Error::NoAddressDetected));
    }

    #[test]
    fn test_detected_address_always_parses() {
        assert_eq!(
            find_address("Calle １０ # 5-23 / Calle 11 # 2-3"),
            Some("Calle 11 # 2-3")
        );
        assert_matches!(
            detect_address(&["Cra ４３ # 1-50"]),
            Err(Error::NoAddressDetected)
        );

        let found = detect_address(&["Cra 43 # 1-50"]).unwrap();
        assert!(crate::AddressParser::new().parse(&found).is_ok());
    }

    #[test]
    fn test_detect_address_from_owned_fragments() {
        let fragments = vec!["tv 39b".to_string(), "# 74 - 12".to_string()];
        assert_eq!(detect_address(&fragments).unwrap(), "tv 39b # 74 - 12");
    }
}
