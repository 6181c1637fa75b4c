//! Deep links into external map applications.

use tracing::{debug, warn};

use crate::error::Result;
use crate::types::{COUNTRY, MapApp};

/// Build the deep link that searches `address` in `app`.
///
/// The query is `"<address>, <city>, Colombia"`, percent-encoded.
///
/// # Example
///
/// ```rust
/// use mensajero_rs::{map_url, MapApp};
///
/// let url = map_url("Calle 10 # 5-23", MapApp::Waze, "Medellín");
/// assert_eq!(
///     url,
///     "https://waze.com/ul?q=Calle%2010%20%23%205-23%2C%20Medell%C3%ADn%2C%20Colombia"
/// );
/// ```
pub fn map_url(address: &str, app: MapApp, city: &str) -> String {
    let query = format!("{address}, {city}, {COUNTRY}");
    let encoded = urlencoding::encode(&query);
    match app {
        MapApp::Google => format!("https://www.google.com/maps/search/?api=1&query={encoded}"),
        MapApp::Waze => format!("https://waze.com/ul?q={encoded}"),
    }
}

/// Hands a URL to whatever opens links on the platform.
pub trait LinkOpener {
    /// Open the URL.
    ///
    /// # Errors
    ///
    /// Implementations should return [`crate::Error::LinkOpenFailed`] when
    /// the platform refuses the link.
    fn open(&self, url: &str) -> Result<()>;
}

impl<F> LinkOpener for F
where
    F: Fn(&str) -> Result<()>,
{
    fn open(&self, url: &str) -> Result<()> {
        self(url)
    }
}

/// Opens stored addresses in a map application.
#[derive(Debug, Clone)]
pub struct Navigator<O> {
    opener: O,
    city: String,
}

impl<O: LinkOpener> Navigator<O> {
    /// Create a navigator appending `city` to every query.
    pub fn new(opener: O, city: impl Into<String>) -> Self {
        Self {
            opener,
            city: city.into(),
        }
    }

    /// The city appended to every query.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Deep link for `address` without opening it.
    pub fn url_for(&self, address: &str, app: MapApp) -> String {
        map_url(address, app, &self.city)
    }

    /// Open `address` in `app` and return the URL that was opened.
    ///
    /// # Errors
    ///
    /// Propagates the opener's error unchanged.
    pub fn open(&self, address: &str, app: MapApp) -> Result<String> {
        let url = self.url_for(address, app);
        debug!(%app, url = %url, "opening map link");
        self.opener
            .open(&url)
            .inspect_err(|e| warn!(%app, error = %e, "could not open map link"))?;
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::VALLE_DE_ABURRA;
    use assert_matches::assert_matches;
    use std::cell::RefCell;

    #[test]
    fn test_google_url() {
        assert_eq!(
            map_url("Cra 43A # 1-50", MapApp::Google, "Medellín"),
            "https://www.google.com/maps/search/?api=1&query=Cra%2043A%20%23%201-50%2C%20Medell%C3%ADn%2C%20Colombia"
        );
    }

    #[test]
    fn test_city_is_configurable() {
        let url = map_url("Calle 1", MapApp::Waze, VALLE_DE_ABURRA);
        assert_eq!(
            url,
            "https://waze.com/ul?q=Calle%201%2C%20Valle%20de%20Aburr%C3%A1%2C%20Colombia"
        );
    }

    #[test]
    fn test_navigator_opens_url() {
        let opened = RefCell::new(Vec::new());
        let navigator = Navigator::new(
            |url: &str| -> Result<()> {
                opened.borrow_mut().push(url.to_string());
                Ok(())
            },
            "Medellín",
        );

        let url = navigator.open("Calle 10 # 5-23", MapApp::Google).unwrap();
        assert_eq!(opened.borrow().as_slice(), [url]);
    }

    #[test]
    fn test_navigator_propagates_failure() {
        let navigator = Navigator::new(
            |_: &str| -> Result<()> { Err(Error::link_open_failed("no browser")) },
            "Medellín",
        );
        assert_matches!(
            navigator.open("Calle 10 # 5-23", MapApp::Waze),
            Err(Error::LinkOpenFailed { message }) if message == "no browser"
        );
    }
}
