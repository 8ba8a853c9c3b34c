// crates/citydb-core/src/query.rs

//! # Query / Category Facade
//!
//! Read-only views composed from the gazetteer, the ranker and the distance
//! calculator. Nothing here holds state beyond those borrows.

use crate::distance::{haversine_km, DistanceCalculator};
use crate::gazetteer::{CityFilter, Gazetteer};
use crate::model::{CityRecord, Region, Tier};
use crate::search::{Ranker, ScoredCity};
use crate::text::{contains_word, equals_folded, fold_key};
use serde::Serialize;

/// Number of ranked cities returned alongside suggestion categories.
pub const SUGGESTION_SEARCH_LIMIT: usize = 8;
/// Cities listed per suggestion category.
pub const CATEGORY_SIZE: usize = 5;
/// Ids that count as technology hubs besides "silicon" aliases.
pub const TECH_HUB_IDS: [&str; 5] = ["bangalore", "hyderabad", "pune", "chennai", "noida"];

/// Keyword test applied to the folded query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Fires when the query contains the keyword anywhere.
    Contains(&'static str),
    /// Fires only on a whole word, so "it" does not fire inside "city".
    Word(&'static str),
}

impl Trigger {
    fn fires(&self, folded_query: &str) -> bool {
        match *self {
            Trigger::Contains(k) => folded_query.contains(k),
            Trigger::Word(w) => contains_word(folded_query, w),
        }
    }
}

/// A pre-filtered grouping a suggestion rule can surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Capitals,
    Metros,
    TechHubs,
    Region(Region),
}

impl Category {
    pub fn label(&self) -> String {
        match self {
            Category::Capitals => "Capital Cities".to_owned(),
            Category::Metros => "Metro Cities".to_owned(),
            Category::TechHubs => "Tech Hubs".to_owned(),
            Category::Region(r) => format!("{r} India"),
        }
    }

    pub fn hint(&self) -> String {
        match self {
            Category::Capitals => "Try searching for state capitals".to_owned(),
            Category::Metros => "Explore major metropolitan areas".to_owned(),
            Category::TechHubs => "Discover India's technology centers".to_owned(),
            Category::Region(r) => format!("Explore cities in {r} India"),
        }
    }
}

/// One row of the suggestion rule table.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionRule {
    pub triggers: &'static [Trigger],
    pub category: Category,
}

/// Keyword heuristics, evaluated in order. Every matching rule contributes
/// its category; categories appear in table order.
///
/// `"it"` only counts as a whole word. A bare substring test would fire the
/// tech category on "city" or "cities", so this deliberately diverges from
/// plain substring matching.
pub const SUGGESTION_RULES: &[SuggestionRule] = &[
    SuggestionRule {
        triggers: &[Trigger::Contains("capital")],
        category: Category::Capitals,
    },
    SuggestionRule {
        triggers: &[Trigger::Contains("metro")],
        category: Category::Metros,
    },
    SuggestionRule {
        triggers: &[Trigger::Contains("tech"), Trigger::Word("it")],
        category: Category::TechHubs,
    },
    SuggestionRule {
        triggers: &[Trigger::Contains("north")],
        category: Category::Region(Region::North),
    },
    SuggestionRule {
        triggers: &[Trigger::Contains("south")],
        category: Category::Region(Region::South),
    },
    SuggestionRule {
        triggers: &[Trigger::Contains("east")],
        category: Category::Region(Region::East),
    },
    SuggestionRule {
        triggers: &[Trigger::Contains("west")],
        category: Category::Region(Region::West),
    },
    SuggestionRule {
        triggers: &[Trigger::Contains("central")],
        category: Category::Region(Region::Central),
    },
    SuggestionRule {
        triggers: &[Trigger::Contains("northeast")],
        category: Category::Region(Region::Northeast),
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionCategory<'a> {
    pub label: String,
    pub cities: Vec<&'a CityRecord>,
}

/// Ranked matches plus whatever categories the query's keywords point at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestions<'a> {
    pub cities: Vec<&'a CityRecord>,
    pub hints: Vec<String>,
    pub categories: Vec<SuggestionCategory<'a>>,
}

fn by_population_desc(v: &mut [&CityRecord]) {
    v.sort_by(|a, b| b.population.cmp(&a.population));
}

/// Convenience views over one gazetteer.
///
/// ```rust
/// use citydb_core::{CityQuery, Gazetteer, Tier};
///
/// let db = Gazetteer::load()?;
/// let q = CityQuery::new(&db);
/// assert_eq!(q.by_tier(Tier::ONE).len(), 8);
/// assert_eq!(q.popular(3)[0].id, "delhi");
/// # Ok::<(), citydb_core::CityDbError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CityQuery<'a> {
    gazetteer: &'a Gazetteer,
    ranker: Ranker<'a>,
    distances: DistanceCalculator<'a>,
}

impl<'a> CityQuery<'a> {
    pub fn new(gazetteer: &'a Gazetteer) -> Self {
        Self::with_ranker(Ranker::new(gazetteer))
    }

    /// Facade using a custom-weighted ranker (and its gazetteer).
    pub fn with_ranker(ranker: Ranker<'a>) -> Self {
        let gazetteer = ranker.gazetteer();
        CityQuery {
            gazetteer,
            ranker,
            distances: DistanceCalculator::new(gazetteer),
        }
    }

    pub fn gazetteer(&self) -> &'a Gazetteer {
        self.gazetteer
    }

    pub fn ranker(&self) -> &Ranker<'a> {
        &self.ranker
    }

    pub fn search(&self, query: &str, limit: usize) -> Vec<&'a CityRecord> {
        self.ranker.search(query, limit)
    }

    pub fn search_scored(&self, query: &str, limit: usize) -> Vec<ScoredCity<'a>> {
        self.ranker.search_scored(query, limit)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&'a CityRecord> {
        self.gazetteer.get_by_id(id)
    }

    pub fn distance(&self, a: &str, b: &str) -> Option<f64> {
        self.distances.distance(a, b)
    }

    /// Cities in `state` (case-insensitive), most populous first.
    pub fn by_state(&self, state: &str) -> Vec<&'a CityRecord> {
        let state = state.trim();
        let mut v = self.gazetteer.filter(|c| equals_folded(&c.state, state));
        by_population_desc(&mut v);
        v
    }

    /// Cities in `region`, most populous first.
    pub fn by_region(&self, region: Region) -> Vec<&'a CityRecord> {
        let mut v = self.gazetteer.filter(|c| c.region == region);
        by_population_desc(&mut v);
        v
    }

    /// Cities of `tier`, most populous first.
    pub fn by_tier(&self, tier: Tier) -> Vec<&'a CityRecord> {
        let mut v = self.gazetteer.filter(|c| c.tier == tier);
        by_population_desc(&mut v);
        v
    }

    /// Categorical filter, most populous first.
    pub fn filter(&self, f: &CityFilter) -> Vec<&'a CityRecord> {
        let mut v = self.gazetteer.filter_by(f);
        by_population_desc(&mut v);
        v
    }

    /// Most significant cities: tier ascending, then population descending.
    pub fn popular(&self, limit: usize) -> Vec<&'a CityRecord> {
        let mut v: Vec<&CityRecord> = self.gazetteer.iter().collect();
        v.sort_by(|a, b| a.tier.cmp(&b.tier).then(b.population.cmp(&a.population)));
        v.truncate(limit);
        v
    }

    /// Cities sharing the state or the region of `id`, most populous first,
    /// `id` itself excluded. This is a membership filter, not a distance
    /// ranking; see [`CityQuery::nearest`] for that.
    pub fn related(&self, id: &str, limit: usize) -> Vec<&'a CityRecord> {
        let Some(city) = self.gazetteer.get_by_id(id) else {
            return Vec::new();
        };
        let mut v = self.gazetteer.filter(|c| {
            c.id != city.id && (c.state == city.state || c.region == city.region)
        });
        by_population_desc(&mut v);
        v.truncate(limit);
        v
    }

    /// Same as [`CityQuery::related`].
    pub fn nearby(&self, id: &str, limit: usize) -> Vec<&'a CityRecord> {
        self.related(id, limit)
    }

    /// The `limit` geographically closest cities to `id`, nearest first,
    /// paired with their distance in km.
    pub fn nearest(&self, id: &str, limit: usize) -> Vec<(&'a CityRecord, f64)> {
        let Some(origin) = self.gazetteer.get_by_id(id) else {
            return Vec::new();
        };
        let mut v: Vec<(&CityRecord, f64)> = self
            .gazetteer
            .iter()
            .filter(|c| c.id != origin.id)
            .map(|c| (c, haversine_km(origin, c)))
            .collect();
        v.sort_by(|a, b| a.1.total_cmp(&b.1));
        v.truncate(limit);
        v
    }

    fn category_cities(&self, category: Category) -> Vec<&'a CityRecord> {
        let mut v = match category {
            Category::Capitals => self.gazetteer.filter(|c| c.is_capital),
            Category::Metros => self.gazetteer.filter(|c| c.is_metro),
            Category::TechHubs => self.gazetteer.filter(|c| {
                c.aliases.iter().any(|a| fold_key(a).contains("silicon"))
                    || TECH_HUB_IDS.contains(&c.id.as_str())
            }),
            Category::Region(r) => self.by_region(r),
        };
        v.truncate(CATEGORY_SIZE);
        v
    }

    /// Ranked matches for `query` plus keyword-driven category groupings
    /// from [`SUGGESTION_RULES`].
    pub fn suggest(&self, query: &str) -> Suggestions<'a> {
        let folded = fold_key(query);
        let mut hints = Vec::new();
        let mut categories = Vec::new();

        for rule in SUGGESTION_RULES {
            if rule.triggers.iter().any(|t| t.fires(&folded)) {
                hints.push(rule.category.hint());
                categories.push(SuggestionCategory {
                    label: rule.category.label(),
                    cities: self.category_cities(rule.category),
                });
            }
        }

        Suggestions {
            cities: self.search(query, SUGGESTION_SEARCH_LIMIT),
            hints,
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoadOptions;
    use crate::gazetteer::fixtures::small;

    fn db() -> Gazetteer {
        Gazetteer::from_records(small(), &LoadOptions::default()).unwrap()
    }

    fn ids<'a>(v: &[&'a CityRecord]) -> Vec<&'a str> {
        v.iter().map(|c| c.id()).collect()
    }

    #[test]
    fn state_views_sort_by_population() {
        let db = db();
        let q = CityQuery::new(&db);
        assert_eq!(ids(&q.by_state("KERALA")), ["alpha", "beta"]);
        assert_eq!(ids(&q.by_region(Region::North)), ["gamma", "delta"]);
        assert!(q.by_state("Assam").is_empty());
    }

    #[test]
    fn popular_orders_by_tier_then_population() {
        let db = db();
        let q = CityQuery::new(&db);
        // beta and epsilon tie on tier and population: gazetteer order holds
        assert_eq!(ids(&q.popular(10)), ["alpha", "beta", "epsilon", "gamma", "delta"]);
        assert_eq!(q.popular(2).len(), 2);
    }

    #[test]
    fn related_excludes_self_and_unknown() {
        let db = db();
        let q = CityQuery::new(&db);
        assert_eq!(ids(&q.related("beta", 5)), ["alpha"]);
        assert_eq!(ids(&q.nearby("gamma", 5)), ["delta"]);
        assert!(q.related("nowhere", 5).is_empty());
        assert!(q.related("epsilon", 5).is_empty());
    }

    #[test]
    fn nearest_is_distance_ordered() {
        let db = db();
        let q = CityQuery::new(&db);
        let near = q.nearest("alpha", 4);
        assert_eq!(near[0].0.id, "beta");
        assert!(near.windows(2).all(|w| w[0].1 <= w[1].1));
        assert!(near.iter().all(|(c, _)| c.id != "alpha"));
        assert!(q.nearest("nowhere", 3).is_empty());
    }

    #[test]
    fn suggestion_rules_fire_on_keywords() {
        let db = db();
        let q = CityQuery::new(&db);

        let s = q.suggest("capital of the south");
        let labels: Vec<_> = s.categories.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Capital Cities", "South India"]);
        assert_eq!(ids(&s.categories[0].cities), ["alpha", "epsilon"]);
        assert_eq!(s.hints.len(), 2);

        assert!(q.suggest("city").categories.is_empty());
        assert_eq!(q.suggest("IT jobs").categories[0].label, "Tech Hubs");
    }

    #[test]
    fn it_trigger_needs_a_whole_word() {
        let db = db();
        let q = CityQuery::new(&db);
        for text in ["city", "cities", "visit goa", "united"] {
            assert!(q.suggest(text).categories.is_empty(), "{text:?}");
        }
        for text in ["it", "best IT city", "it-parks"] {
            let labels: Vec<_> = q.suggest(text).categories.into_iter().map(|c| c.label).collect();
            assert_eq!(labels, ["Tech Hubs"], "{text:?}");
        }
    }

    #[test]
    fn northeast_also_matches_north() {
        let db = db();
        let labels: Vec<_> = CityQuery::new(&db)
            .suggest("northeast")
            .categories
            .into_iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(labels, ["North India", "East India", "Northeast India"]);
    }
}
