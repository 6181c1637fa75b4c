//! End-to-end behaviour of the address list as the app drives it.

use mensajero_rs::{
    AddressList, AddressParser, AddressSorter, MapApp, Mensajero, MensajeroConfig,
    ParseStrategy, SortDirection, SortStrategy, UnknownRoadPolicy,
};

#[test]
fn duplicate_rejection_is_case_insensitive_and_trimmed() {
    let mut list = AddressList::new();
    list.add("Calle 1 # 2-3");
    list.add(" calle 1 # 2-3 ");
    assert_eq!(list.as_slice(), ["Calle 1 # 2-3"]);
}

#[test]
fn precise_sort_puts_calle_before_carrera_and_unparsed_last() {
    let mut list = Mensajero::new().address_list();
    for address in ["Carrera 5 # 10-20", "Calle 3 # 1-5", "no-es-direccion"] {
        list.add(address);
    }

    assert_eq!(list.sort(), SortDirection::Ascending);
    assert_eq!(
        list.as_slice(),
        ["Calle 3 # 1-5", "Carrera 5 # 10-20", "no-es-direccion"]
    );
}

#[test]
fn loose_sort_puts_carrera_before_calle() {
    let sorter = AddressSorter::new()
        .with_parser(AddressParser::new().with_strategy(ParseStrategy::Prefix))
        .with_strategy(SortStrategy::Loose);
    let mut list = AddressList::with_sorter(sorter);
    for address in ["Carrera 5 # 10-20", "Calle 3 # 1-5", "no-es-direccion"] {
        list.add(address);
    }

    list.sort();
    assert_eq!(
        list.as_slice(),
        ["Carrera 5 # 10-20", "Calle 3 # 1-5", "no-es-direccion"]
    );
}

#[test]
fn removing_middle_entry_keeps_order() {
    let mut list = AddressList::new();
    for address in ["Calle 1 # 1-1", "Calle 2 # 2-2", "Calle 3 # 3-3"] {
        list.add(address);
    }

    assert_eq!(list.remove_at(1).as_deref(), Some("Calle 2 # 2-2"));
    assert_eq!(list.as_slice(), ["Calle 1 # 1-1", "Calle 3 # 3-3"]);
    assert_eq!(list.remove_at(2), None);
}

#[test]
fn repeated_sorts_alternate_direction() {
    let mut list = AddressList::new();
    for address in [
        "Calle 10 # 5-23",
        "sin numero",
        "Diagonal 2 # 1-1",
        "Carrera 80 # 1-1",
        "otra cosa",
    ] {
        list.add(address);
    }

    assert_eq!(list.sort(), SortDirection::Ascending);
    assert_eq!(
        list.as_slice(),
        [
            "Calle 10 # 5-23",
            "Carrera 80 # 1-1",
            "Diagonal 2 # 1-1",
            "sin numero",
            "otra cosa"
        ]
    );

    assert_eq!(list.sort(), SortDirection::Descending);
    assert_eq!(
        list.as_slice(),
        [
            "Diagonal 2 # 1-1",
            "Carrera 80 # 1-1",
            "Calle 10 # 5-23",
            "sin numero",
            "otra cosa"
        ]
    );

    assert_eq!(list.sort(), SortDirection::Ascending);
}

#[test]
fn nearest_policy_sorts_misspelled_road_types() {
    let config = MensajeroConfig::builder()
        .parse_strategy(ParseStrategy::Prefix)
        .sort_strategy(SortStrategy::Loose)
        .unknown_road(UnknownRoadPolicy::Nearest)
        .build();
    let sorted = Mensajero::with_config(config).sort_addresses(
        &["Calel 9 # 1-1", "Carrera 1 # 1-1", "12 # 3-4"],
        SortDirection::Ascending,
    );

    assert_eq!(sorted, ["Carrera 1 # 1-1", "Calel 9 # 1-1", "12 # 3-4"]);
}

#[test]
fn stored_entries_open_in_maps() {
    let mensajero = Mensajero::new();
    let mut list = mensajero.address_list();
    list.add("Cra 43A # 1-50");

    let address = list.get(0).unwrap();
    assert_eq!(
        mensajero.map_url(address, MapApp::Google),
        "https://www.google.com/maps/search/?api=1&query=Cra%2043A%20%23%201-50%2C%20Medell%C3%ADn%2C%20Colombia"
    );
}
