//! Error handling example for citydb-rs
//!
//! This example demonstrates load-time failures and total lookups.

use citydb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== CityDB-RS Error Handling Example ===\n");

    // Example 1: Strict loading surfaces the duplicate ids in the dataset
    println!("--- Example 1: Loading with DuplicatePolicy::Reject ---");
    let strict = LoadOptions::default().with_duplicate_policy(DuplicatePolicy::Reject);
    match Gazetteer::load_with(&strict) {
        Ok(db) => println!("✓ Loaded {} cities", db.len()),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 2: Missing dataset file
    println!("--- Example 2: Missing dataset ---");
    if let Err(e) = Gazetteer::load_from_path("no/such/cities.json", &LoadOptions::default()) {
        println!("✗ {e}");
    }
    println!();

    let db = Gazetteer::load()?;

    // Example 3: Unknown ids are absent, not errors
    println!("--- Example 3: Unknown ids ---");
    for id in ["mumbai", "atlantis", ""] {
        match db.get_by_id(id) {
            Some(c) => println!("  Found: {} ({})", c.name(), c.id()),
            None => println!("  Not found: {id:?}"),
        }
    }
    let calc = DistanceCalculator::new(&db);
    println!("  distance(mumbai, atlantis) = {:?}", calc.distance("mumbai", "atlantis"));
    if let Err(e) = calc.try_distance("mumbai", "atlantis") {
        println!("  try_distance: {e}");
    }
    println!();

    // Example 4: Degenerate queries fall back to gazetteer order
    println!("--- Example 4: Short queries ---");
    for q in ["", " ", "m"] {
        let names: Vec<_> = Ranker::new(&db).search(q, 3).into_iter().map(|c| c.name()).collect();
        println!("  {q:?} -> {}", names.join(", "));
    }

    Ok(())
}
