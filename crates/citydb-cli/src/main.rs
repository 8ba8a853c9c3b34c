//! citydb — Command-line interface for citydb-core
//!
//! This binary provides a simple way to query the city gazetteer from your
//! terminal: fuzzy search, category listings, distances and per-mode route
//! estimates.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ citydb stats
//!
//! - Search by name, alias ("Bombay"), state or district
//!   $ citydb search bombay --limit 5 --scores
//!
//! - Distance and route options between two cities (by id)
//!   $ citydb distance mumbai delhi
//!   $ citydb routes pune mumbai
//!
//! Data source
//! -----------
//!
//! By default the dataset embedded in `citydb-core` is used. Point
//! `--input <path>` at a `.json`, `.json.gz` or `.bin` snapshot to use
//! another one; `--duplicates` controls how repeated city ids are handled.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{anyhow, bail, Context};
use citydb_core::prelude::*;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_city(c: &CityRecord) {
    let flags = match (c.is_capital, c.is_metro) {
        (true, true) => " [capital, metro]",
        (true, false) => " [capital]",
        (false, true) => " [metro]",
        (false, false) => "",
    };
    println!(
        "{:<20} {} — {}, {} ({}, pop {}){}",
        c.id, c.name, c.state, c.region, c.tier, c.population, flags
    );
}

fn print_cities(cities: &[&CityRecord], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(cities)?);
    } else if cities.is_empty() {
        println!("No cities found.");
    } else {
        cities.iter().for_each(|c| print_city(c));
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let policy: DuplicatePolicy = args.duplicates.parse().map_err(|e: String| anyhow!(e))?;
    let opts = LoadOptions::default().with_duplicate_policy(policy);

    let db = match &args.input {
        Some(path) => Gazetteer::load_from_path(path, &opts)
            .with_context(|| format!("loading dataset from {path}"))?,
        None => Gazetteer::load_with(&opts).context("loading embedded dataset")?,
    };
    tracing::debug!(cities = db.len(), "dataset ready");
    let query = CityQuery::new(&db);
    let json = args.json;

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Gazetteer statistics:");
                println!("  Cities: {}", stats.cities);
                println!("  States: {}", stats.states);
                println!("  Regions: {}", stats.regions);
                println!("  Duplicate ids resolved: {}", stats.duplicates_resolved);
            }
        }

        Commands::Search {
            query: q,
            limit,
            scores,
        } => {
            let hits = query.search_scored(&q, limit);
            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else if hits.is_empty() {
                println!("No cities found matching: {q}");
            } else {
                for h in hits {
                    if scores {
                        print!("{:>4}  ", h.score);
                    }
                    print_city(h.city);
                }
            }
        }

        Commands::City { id } => match query.get_by_id(&id) {
            Some(c) if json => println!("{}", serde_json::to_string_pretty(c)?),
            Some(c) => {
                println!("City: {} ({})", c.name, c.id);
                println!("State: {}", c.state);
                println!("District: {}", c.district().unwrap_or("-"));
                println!("Region: {}", c.region);
                println!("{}", c.tier);
                println!("Population: {}", c.population);
                println!("Coordinates: {:.4}, {:.4}", c.latitude, c.longitude);
                println!("Aliases: {}", c.aliases.join(", "));
                println!("Capital: {}  Metro: {}", c.is_capital, c.is_metro);
            }
            None => eprintln!("No city found for id: {id}"),
        },

        Commands::State { name } => print_cities(&query.by_state(&name), json)?,

        Commands::Region { name } => {
            let region: Region = name.parse().map_err(|e: String| anyhow!(e))?;
            print_cities(&query.by_region(region), json)?;
        }

        Commands::Tier { tier } => {
            let Some(tier) = Tier::new(tier) else {
                bail!("tier must be between 1 and 4, got {tier}");
            };
            print_cities(&query.by_tier(tier), json)?;
        }

        Commands::Popular { limit } => print_cities(&query.popular(limit), json)?,

        Commands::Related { id, limit } => print_cities(&query.related(&id, limit), json)?,

        Commands::Nearest { id, limit } => {
            let near = query.nearest(&id, limit);
            if json {
                let rows: Vec<_> = near
                    .iter()
                    .map(|(c, km)| serde_json::json!({ "city": c, "distance_km": km }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if near.is_empty() {
                println!("No city found for id: {id}");
            } else {
                for (c, km) in near {
                    println!("{km:>8.1} km  {} ({})", c.name, c.state);
                }
            }
        }

        Commands::Distance { from, to } => {
            let km = DistanceCalculator::new(&db).try_distance(&from, &to)?;
            if json {
                println!("{}", serde_json::json!({ "from": from, "to": to, "distance_km": km }));
            } else {
                println!("{from} → {to}: {km:.1} km");
            }
        }

        Commands::Suggest { query: q } => {
            let s = query.suggest(&q);
            if json {
                println!("{}", serde_json::to_string_pretty(&s)?);
            } else {
                println!("Matches:");
                s.cities.iter().for_each(|c| print_city(c));
                for hint in &s.hints {
                    println!("Hint: {hint}");
                }
                for cat in &s.categories {
                    println!("\n{}:", cat.label);
                    cat.cities.iter().for_each(|c| print_city(c));
                }
            }
        }

        Commands::Routes { from, to } => {
            let Some(routes) = RoutePlanner::new(&db).plan(&from, &to) else {
                bail!("unknown city id in {from} → {to}");
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&routes)?);
            } else {
                for r in routes {
                    let eco = if r.eco_friendly { "eco" } else { "" };
                    println!(
                        "{:<17} {:>8.1} km {:>7.0} min {:>8.1} kg CO2 {eco}",
                        r.mode.label(),
                        r.distance_km,
                        r.duration_min,
                        r.emissions_kg
                    );
                }
            }
        }

        Commands::Snapshot { output } => {
            db.save_as(&output)
                .with_context(|| format!("writing snapshot to {output}"))?;
            println!("Wrote {} cities to {output}", db.len());
        }
    }

    Ok(())
}
