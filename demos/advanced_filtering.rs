//! Advanced filtering example for citydb-rs
//!
//! This example demonstrates category views, keyword suggestions and custom
//! ranking weights.

use citydb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== CityDB-RS Advanced Filtering Example ===\n");

    let db = Gazetteer::load()?;
    let q = CityQuery::new(&db);

    // Example 1: Tier 1 cities
    println!("--- Example 1: Tier 1 cities ---");
    for c in q.by_tier(Tier::ONE) {
        println!("- {} ({})", c.name(), c.population);
    }
    println!();

    // Example 2: Capitals in the South that are not metros
    println!("--- Example 2: Southern non-metro capitals ---");
    let filter = CityFilter::new()
        .region(Region::South)
        .capital(true)
        .metro(false);
    for c in q.filter(&filter) {
        println!("- {}, {}", c.name(), c.state());
    }
    println!();

    // Example 3: Related vs. nearest
    println!("--- Example 3: Related vs. nearest to Bhopal ---");
    for c in q.related("bhopal", 5) {
        println!("related: {}", c.name());
    }
    for (c, km) in q.nearest("bhopal", 5) {
        println!("nearest: {} ({km:.0} km)", c.name());
    }
    println!();

    // Example 4: Smart suggestions
    println!("--- Example 4: Suggestions for 'tech hubs in the south' ---");
    let s = q.suggest("tech hubs in the south");
    for hint in &s.hints {
        println!("hint: {hint}");
    }
    for cat in &s.categories {
        let names: Vec<_> = cat.cities.iter().map(|c| c.name()).collect();
        println!("{}: {}", cat.label, names.join(", "));
    }
    println!();

    // Example 5: Ranking without importance bonuses
    println!("--- Example 5: Text-only ranking for 'nagar' ---");
    let weights = ScoreWeights {
        tier_bonus: [0; 4],
        capital_bonus: 0,
        metro_bonus: 0,
        ..ScoreWeights::default()
    };
    let plain = CityQuery::with_ranker(Ranker::with_weights(&db, weights));
    for hit in plain.search_scored("nagar", 5) {
        println!("{:>4}  {}", hit.score, hit.city.name());
    }

    Ok(())
}
