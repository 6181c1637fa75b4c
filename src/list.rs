//! The courier's address list.
//!
//! [`AddressList`] is the only mutable state: the stored raw strings and
//! the direction the next sort will use. Everything it delegates to
//! (parsing, comparing, URL building) is side-effect free.

use std::slice;

use tracing::{debug, info};

use crate::normalizer::duplicate_key;
use crate::route::{self, Coordinates, Geocoder};
use crate::sorter::AddressSorter;
use crate::types::SortDirection;

/// Prompt shown before the whole list is cleared.
pub const CLEAR_PROMPT: &str = "¿Borrar todas las direcciones?";

/// Asks the user to confirm a destructive action.
pub trait Confirmation {
    /// Return `true` if the user accepted `prompt`.
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// In-memory list of raw address strings.
#[derive(Debug, Clone, Default)]
pub struct AddressList {
    entries: Vec<String>,
    direction: SortDirection,
    sorter: AddressSorter,
}

impl AddressList {
    /// Create an empty list with the default sorter; the first sort is
    /// ascending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list sorting with `sorter`.
    pub fn with_sorter(sorter: AddressSorter) -> Self {
        Self {
            sorter,
            ..Self::default()
        }
    }

    /// Append an address.
    ///
    /// The value is trimmed first. Empty values and case-insensitive
    /// duplicates of a stored entry are ignored. Returns whether the list
    /// changed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mensajero_rs::AddressList;
    ///
    /// let mut list = AddressList::new();
    /// assert!(list.add("Calle 1 # 2-3"));
    /// assert!(!list.add(" calle 1 # 2-3 "));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn add(&mut self, address: &str) -> bool {
        let address = address.trim();
        if address.is_empty() {
            return false;
        }
        if self.contains(address) {
            debug!(address, "ignoring duplicate address");
            return false;
        }
        self.entries.push(address.to_string());
        debug!(address, len = self.entries.len(), "address added");
        true
    }

    /// Check for a stored entry equal to `address` after trimming, ignoring case.
    pub fn contains(&self, address: &str) -> bool {
        let key = duplicate_key(address);
        self.entries.iter().any(|entry| duplicate_key(entry) == key)
    }

    /// Remove the entry at `index`, keeping the order of the rest.
    ///
    /// Out-of-range indexes leave the list untouched and return `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index >= self.entries.len() {
            debug!(index, len = self.entries.len(), "remove index out of range");
            return None;
        }
        let removed = self.entries.remove(index);
        debug!(index, address = %removed, "address removed");
        Some(removed)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        debug!(len = self.entries.len(), "clearing address list");
        self.entries.clear();
    }

    /// Remove every entry if the user confirms [`CLEAR_PROMPT`]. Returns
    /// whether the list was cleared.
    pub fn clear_confirmed<C: Confirmation + ?Sized>(&mut self, confirmation: &C) -> bool {
        if !confirmation.confirm(CLEAR_PROMPT) {
            return false;
        }
        self.clear();
        true
    }

    /// Sort the list in the current direction, then flip the direction for
    /// the next call. Returns the direction that was applied.
    pub fn sort(&mut self) -> SortDirection {
        let applied = self.direction;
        self.entries = self.sorter.sort(&self.entries, applied);
        self.direction = applied.toggled();
        info!(direction = %applied, len = self.entries.len(), "address list sorted");
        applied
    }

    /// Reorder the list as a greedy route from `origin`. Does not touch the
    /// sort direction.
    pub fn order_by_proximity<G: Geocoder + ?Sized>(&mut self, geocoder: &G, origin: Coordinates) {
        self.entries = route::order_by_proximity(geocoder, origin, &self.entries);
    }

    /// Direction the next [`AddressList::sort`] will use.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// The sorter in use.
    pub fn sorter(&self) -> &AddressSorter {
        &self.sorter
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Iterate over the entries in list order.
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.entries.iter()
    }

    /// The entries as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a AddressList {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
