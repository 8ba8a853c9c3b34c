//! Basic usage example for citydb-rs
//!
//! This example demonstrates how to:
//! - Load the gazetteer
//! - Resolve free-text input to a city
//! - Measure the distance between two cities
//! - Compare per-mode route emissions

use citydb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== CityDB-RS Basic Usage Example ===\n");

    println!("Loading gazetteer...");
    let db = Gazetteer::load()?;
    let stats = db.stats();
    println!(
        "✓ {} cities in {} states ({} duplicate ids resolved)\n",
        stats.cities, stats.states, stats.duplicates_resolved
    );

    // Example 1: Fuzzy search
    println!("--- Example 1: Search for 'bombay' ---");
    let ranker = Ranker::new(&db);
    for hit in ranker.search_scored("bombay", 5) {
        println!("{:>4}  {} ({})", hit.score, hit.city.name(), hit.city.state());
    }
    println!();

    // Example 2: Lookup by id
    println!("--- Example 2: Lookup by id ---");
    if let Some(city) = db.get_by_id("bangalore") {
        println!("{} — {}, {}", city.name(), city.state(), city.region);
        println!("Aliases: {}", city.aliases().join(", "));
    }
    println!();

    // Example 3: Distance
    println!("--- Example 3: Great-circle distance ---");
    let calc = DistanceCalculator::new(&db);
    if let Some(km) = calc.distance("mumbai", "delhi") {
        println!("Mumbai → New Delhi: {km:.1} km");
    }
    println!();

    // Example 4: Route options
    println!("--- Example 4: Route options Pune → Mumbai ---");
    if let Some(routes) = RoutePlanner::new(&db).plan("pune", "mumbai") {
        for r in routes {
            println!(
                "{:<17} {:>6.1} km {:>6.0} min {:>6.1} kg CO2",
                r.mode.label(),
                r.distance_km,
                r.duration_min,
                r.emissions_kg
            );
        }
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
