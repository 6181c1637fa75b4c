//! Basic usage example for mensajero-rs.
//!
//! This example walks through a courier's day:
//! - Building an address list (duplicates are ignored)
//! - Sorting it twice to see the direction flip
//! - Parsing individual addresses with both strategies
//! - Building map links
//!
//! Run with: cargo run --example basic_usage

use mensajero_rs::{AddressParser, Error, MapApp, Mensajero, ParseStrategy, detect_address};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("mensajero-rs Basic Usage Example");
    println!("================================\n");

    let mensajero = Mensajero::from_env()?;
    println!("Configuration: {:?}\n", mensajero.config());

    // Example 1: Building the list
    println!("1. Address List");
    println!("---------------");

    let mut list = mensajero.address_list();
    for address in [
        "Carrera 5 # 10-20",
        "Calle 3 # 1-5",
        " calle 3 # 1-5 ",
        "Dg 75B # 2A-80",
        "no-es-direccion",
    ] {
        let added = list.add(address);
        println!("  add({address:?}) -> {added}");
    }
    println!();

    // Example 2: Sorting flips direction every time
    println!("2. Sorting");
    println!("----------");

    for _ in 0..2 {
        let direction = list.sort();
        println!("  {direction}:");
        for (i, address) in list.iter().enumerate() {
            println!("    {i}. {address}");
        }
    }
    println!();

    // Example 3: Parsing with both strategies
    println!("3. Parsing Strategies");
    println!("---------------------");

    let strict = AddressParser::new();
    let loose = AddressParser::new().with_strategy(ParseStrategy::Prefix);
    for input in ["Cra 43A # 1-50", "Cl. 10 sur 5", "xyz"] {
        match strict.parse(input) {
            Ok(parsed) => println!("  regex  {input:?} -> {parsed}"),
            Err(e) => println!("  regex  {input:?} -> {e}"),
        }
        let parsed = loose.parse(input)?;
        println!("  prefix {input:?} -> {parsed}");
    }
    println!();

    // Example 4: Scanned text and map links
    println!("4. Navigation");
    println!("-------------");

    let scanned = detect_address(&["GUIA 0045", "Tv 39B # 74 - 12", "Laureles"])?;
    println!("  Detected: {scanned}");
    println!("  Google: {}", mensajero.map_url(&scanned, MapApp::Google));
    println!("  Waze:   {}", mensajero.map_url(&scanned, MapApp::Waze));

    Ok(())
}
