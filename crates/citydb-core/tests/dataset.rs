//! Behaviour of the full stack against the embedded reference dataset.

use approx::assert_relative_eq;
use citydb_core::prelude::*;

fn db() -> Gazetteer {
    Gazetteer::load().expect("embedded dataset loads")
}

#[test]
fn every_city_finds_itself_by_name() {
    let db = db();
    let ranker = Ranker::new(&db);
    for city in &db {
        let hits = ranker.search_scored(&city.name, db.len());
        let own = hits
            .iter()
            .find(|h| h.city.id == city.id)
            .unwrap_or_else(|| panic!("{} missing from its own search", city.id));
        // no other exact-name match scores higher
        for h in hits.iter().filter(|h| h.city.is_named(&city.name)) {
            assert!(h.score <= own.score, "{} outranked by {}", city.id, h.city.id);
        }
    }
}

#[test]
fn bombay_resolves_to_mumbai() {
    let db = db();
    let hits = Ranker::new(&db).search_scored("bombay", 5);
    assert_eq!(hits[0].city.id, "mumbai");
    assert_eq!(hits[0].score, 90 + 20 + 10 + 15);
}

#[test]
fn empty_query_returns_gazetteer_prefix() {
    let db = db();
    let ranker = Ranker::new(&db);
    for k in [0, 1, 7, 96, 500] {
        let hits = ranker.search("", k);
        assert_eq!(hits.len(), k.min(db.len()));
        for (hit, rec) in hits.iter().zip(db.records()) {
            assert_eq!(hit.id, rec.id);
        }
    }
}

#[test]
fn search_respects_limit() {
    let db = db();
    assert!(Ranker::new(&db).search("pur", 3).len() <= 3);
    assert!(Ranker::new(&db).search("pur", 0).is_empty());
}

#[test]
fn distances_are_symmetric_and_zero_on_diagonal() {
    let db = db();
    let calc = DistanceCalculator::new(&db);
    let ids: Vec<&str> = db.iter().map(|c| c.id()).collect();
    for a in &ids {
        assert_eq!(calc.distance(a, a), Some(0.0));
        for b in &ids {
            let ab = calc.distance(a, b).unwrap();
            let ba = calc.distance(b, a).unwrap();
            assert_relative_eq!(ab, ba, epsilon = 1e-9);
            assert!(ab >= 0.0);
        }
    }
}

#[test]
fn mumbai_delhi_distance() {
    let db = db();
    let d = DistanceCalculator::new(&db).distance("mumbai", "delhi").unwrap();
    assert!((1140.0..=1180.0).contains(&d), "got {d}");
}

#[test]
fn tier_one_has_eight_cities_by_population() {
    let db = db();
    let q = CityQuery::new(&db);
    let t1 = q.by_tier(Tier::ONE);
    let ids: Vec<_> = t1.iter().map(|c| c.id()).collect();
    assert_eq!(
        ids,
        ["delhi", "mumbai", "bangalore", "hyderabad", "ahmedabad", "chennai", "kolkata", "pune"]
    );
    assert!(t1.windows(2).all(|w| w[0].population >= w[1].population));
}

#[test]
fn popular_is_tier_then_population() {
    let db = db();
    let q = CityQuery::new(&db);
    for n in [0, 5, 30, 1000] {
        let p = q.popular(n);
        assert_eq!(p.len(), n.min(db.len()));
        assert!(p.windows(2).all(|w| {
            w[0].tier < w[1].tier
                || (w[0].tier == w[1].tier && w[0].population >= w[1].population)
        }));
    }
}

#[test]
fn duplicate_ids_resolve_to_one_record() {
    let db = db();
    let hits: Vec<_> = db.iter().filter(|c| c.id == "mangalore").collect();
    assert_eq!(hits.len(), 1);
    // keep-most-populous: the 623,841 entry survives over 484,785
    assert_eq!(db.get_by_id("mangalore").unwrap().population, 623_841);
    assert_eq!(db.iter().filter(|c| c.id == "kochi").count(), 1);
}

#[test]
fn duplicate_policy_first_and_last_differ_for_mangalore() {
    let first = Gazetteer::load_with(
        &LoadOptions::default().with_duplicate_policy(DuplicatePolicy::KeepFirst),
    )
    .unwrap();
    let last = Gazetteer::load_with(
        &LoadOptions::default().with_duplicate_policy(DuplicatePolicy::KeepLast),
    )
    .unwrap();
    assert_eq!(first.get_by_id("mangalore").unwrap().population, 623_841);
    assert_eq!(last.get_by_id("mangalore").unwrap().population, 484_785);
}

#[test]
fn related_cities_share_state_or_region() {
    let db = db();
    let q = CityQuery::new(&db);
    let origin = db.get_by_id("pune").unwrap();
    let related = q.related("pune", 10);
    assert_eq!(related.len(), 10);
    for c in &related {
        assert_ne!(c.id, "pune");
        assert!(c.state == origin.state || c.region == origin.region);
    }
    assert!(related.windows(2).all(|w| w[0].population >= w[1].population));
    assert!(q.related("atlantis", 10).is_empty());
}

#[test]
fn by_state_and_region_lookups() {
    let db = db();
    let q = CityQuery::new(&db);
    let ka = q.by_state("karnataka");
    assert_eq!(ka[0].id, "bangalore");
    assert!(ka.iter().all(|c| c.state == "Karnataka"));
    assert_eq!(q.by_region(Region::Northeast).len(), 1);
}

#[test]
fn tech_suggestions_include_bangalore() {
    let db = db();
    let s = CityQuery::new(&db).suggest("tech city");
    assert_eq!(s.categories.len(), 1);
    let tech = &s.categories[0];
    assert_eq!(tech.label, "Tech Hubs");
    assert!(tech.cities.len() <= 5);
    assert!(tech.cities.iter().any(|c| c.id == "bangalore"));
    assert!(s.cities.len() <= 8);
}

#[test]
fn metro_capital_suggestions_are_capped() {
    let db = db();
    let s = CityQuery::new(&db).suggest("metro capital");
    let labels: Vec<_> = s.categories.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, ["Capital Cities", "Metro Cities"]);
    assert!(s.categories.iter().all(|c| c.cities.len() == 5));
    assert!(s.categories[0].cities.iter().all(|c| c.is_capital));
    assert!(s.categories[1].cities.iter().all(|c| c.is_metro));
}
