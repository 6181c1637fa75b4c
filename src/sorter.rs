//! Sorting raw address lists.

use tracing::debug;

use crate::comparator::{AddressOrder, SortStrategy};
use crate::parser::{AddressParser, ParsedAddress};
use crate::types::SortDirection;

/// Raw entries split into the ones that can be sorted and the ones that
/// cannot, both in input order.
#[derive(Debug)]
pub struct Partition<'a, S> {
    /// Entries that parsed, with their parse
    pub sortable: Vec<(ParsedAddress, &'a S)>,
    /// Entries that did not parse
    pub unsortable: Vec<&'a S>,
}

/// Sorts raw address strings by their parse.
#[derive(Debug, Clone, Default)]
pub struct AddressSorter {
    parser: AddressParser,
    strategy: SortStrategy,
}

impl AddressSorter {
    /// Create a sorter with the regex parser and the precise order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parser used to classify entries.
    pub fn with_parser(mut self, parser: AddressParser) -> Self {
        self.parser = parser;
        self
    }

    /// Set the order applied to parsed entries.
    pub fn with_strategy(mut self, strategy: SortStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The parser in use.
    pub fn parser(&self) -> &AddressParser {
        &self.parser
    }

    /// The order in use.
    pub fn strategy(&self) -> SortStrategy {
        self.strategy
    }

    /// Split entries into sortable and unsortable, keeping input order.
    pub fn partition<'a, S: AsRef<str>>(&self, entries: &'a [S]) -> Partition<'a, S> {
        let mut partition = Partition {
            sortable: Vec::with_capacity(entries.len()),
            unsortable: Vec::new(),
        };
        for entry in entries {
            match self.parser.parse_sortable(entry.as_ref()) {
                Some(parsed) => partition.sortable.push((parsed, entry)),
                None => partition.unsortable.push(entry),
            }
        }
        partition
    }

    /// Sort entries in the given direction.
    ///
    /// Entries that do not parse go after every sorted entry, in their
    /// original relative order, whatever the direction. The sort is stable,
    /// so entries that compare equal also keep their order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mensajero_rs::{AddressSorter, SortDirection};
    ///
    /// let sorter = AddressSorter::new();
    /// let sorted = sorter.sort(
    ///     &["Carrera 5 # 10-20", "Calle 3 # 1-5", "no-es-direccion"],
    ///     SortDirection::Ascending,
    /// );
    /// assert_eq!(sorted, ["Calle 3 # 1-5", "Carrera 5 # 10-20", "no-es-direccion"]);
    /// ```
    pub fn sort<S: AsRef<str> + Clone>(&self, entries: &[S], direction: SortDirection) -> Vec<S> {
        let Partition {
            mut sortable,
            unsortable,
        } = self.partition(entries);

        debug!(
            sortable = sortable.len(),
            unsortable = unsortable.len(),
            strategy = %self.strategy,
            %direction,
            "sorting addresses"
        );

        sortable.sort_by(|(a, _), (b, _)| self.strategy.compare(a, b, direction));

        sortable
            .into_iter()
            .map(|(_, entry)| entry.clone())
            .chain(unsortable.into_iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ParseStrategy, UnknownRoadPolicy};

    #[test]
    fn test_unparsed_entries_stay_last_in_order() {
        let entries = ["zz", "Calle 2 # 1-1", "aa", "Calle 1 # 1-1", "mm"];
        let sorter = AddressSorter::new();

        assert_eq!(
            sorter.sort(&entries, SortDirection::Ascending),
            ["Calle 1 # 1-1", "Calle 2 # 1-1", "zz", "aa", "mm"]
        );
        assert_eq!(
            sorter.sort(&entries, SortDirection::Descending),
            ["Calle 2 # 1-1", "Calle 1 # 1-1", "zz", "aa", "mm"]
        );
    }

    #[test]
    fn test_loose_strategy_order() {
        let sorter = AddressSorter::new()
            .with_parser(AddressParser::new().with_strategy(ParseStrategy::Prefix))
            .with_strategy(SortStrategy::Loose);
        let entries = [
            "Diagonal 1 # 1-1",
            "Calle 3 # 1-5",
            "Carrera 5 # 10-20",
            "Av. 80 # 30-1",
        ];

        assert_eq!(
            sorter.sort(&entries, SortDirection::Ascending),
            [
                "Av. 80 # 30-1",
                "Carrera 5 # 10-20",
                "Calle 3 # 1-5",
                "Diagonal 1 # 1-1"
            ]
        );
    }

    #[test]
    fn test_sort_last_policy_keeps_unknown_in_sort() {
        let parser = AddressParser::new()
            .with_strategy(ParseStrategy::Prefix)
            .with_unknown_road(UnknownRoadPolicy::SortLast);
        let sorter = AddressSorter::new()
            .with_parser(parser)
            .with_strategy(SortStrategy::Loose);
        let entries = ["autopista 2", "Calle 1 # 1-1"];

        assert_eq!(
            sorter.sort(&entries, SortDirection::Ascending),
            ["Calle 1 # 1-1", "autopista 2"]
        );
        assert_eq!(
            sorter.sort(&entries, SortDirection::Descending),
            ["autopista 2", "Calle 1 # 1-1"]
        );
    }

    #[test]
    fn test_equal_addresses_keep_list_order_in_both_directions() {
        let entries = ["Calle 1 # 2-3", "Carrera 9 # 9-9", "Cl 1 # 2-3"];
        let sorter = AddressSorter::new();

        assert_eq!(
            sorter.sort(&entries, SortDirection::Ascending),
            ["Calle 1 # 2-3", "Cl 1 # 2-3", "Carrera 9 # 9-9"]
        );
        assert_eq!(
            sorter.sort(&entries, SortDirection::Descending),
            ["Carrera 9 # 9-9", "Calle 1 # 2-3", "Cl 1 # 2-3"]
        );
    }

    #[test]
    fn test_partition() {
        let entries = vec!["Calle 1 # 1-1".to_string(), "xyz".to_string()];
        let partition = AddressSorter::new().partition(&entries);
        assert_eq!(partition.sortable.len(), 1);
        assert_eq!(partition.sortable[0].1, "Calle 1 # 1-1");
        assert_eq!(partition.unsortable, [&"xyz".to_string()]);
    }

    #[test]
    fn test_empty_input() {
        let entries: [&str; 0] = [];
        assert!(AddressSorter::new().sort(&entries, SortDirection::Ascending).is_empty());
    }
}
