// crates/citydb-core/src/search.rs

//! # Fuzzy Matcher / Ranker
//!
//! A deterministic, additive rule table. Every rule contributes a fixed
//! weight; the weights are plain data in [`ScoreWeights`] so the table can
//! be inspected and unit tested.

use crate::gazetteer::{Gazetteer, SearchKeys};
use crate::model::{CityRecord, Tier};
use crate::text::normalize_query;
use serde::{Deserialize, Serialize};

/// Queries shorter than this (in characters, after trimming) skip ranking.
pub const MIN_QUERY_CHARS: usize = 2;

/// How alias matches combine when a city has several matching aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AliasScoring {
    /// Only the strongest alias match counts.
    #[default]
    Best,
    /// Every matching alias adds its weight.
    Sum,
}

/// Weight table for [`Ranker`].
///
/// # Scoring
///
/// Name, alias and location rules only fire on a textual match; the
/// importance bonuses (tier, capital, metro) apply to every city. A city is
/// dropped from the results only when its total is exactly zero.
///
/// | rule                 | default |
/// |----------------------|---------|
/// | name exact           | 100     |
/// | name prefix          | 80      |
/// | name substring       | 60      |
/// | alias exact          | 90      |
/// | alias prefix         | 70      |
/// | alias substring      | 50      |
/// | state substring      | 40      |
/// | district substring   | 30      |
/// | tier 1 / 2 / 3 / 4   | 20 / 15 / 10 / 0 |
/// | capital              | 10      |
/// | metro                | 15      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub name_exact: u32,
    pub name_prefix: u32,
    pub name_substring: u32,
    pub alias_exact: u32,
    pub alias_prefix: u32,
    pub alias_substring: u32,
    pub state_substring: u32,
    pub district_substring: u32,
    /// Indexed by tier rank - 1.
    pub tier_bonus: [u32; 4],
    pub capital_bonus: u32,
    pub metro_bonus: u32,
    pub alias_scoring: AliasScoring,
}

impl ScoreWeights {
    pub const NAME_EXACT: u32 = 100;
    pub const NAME_PREFIX: u32 = 80;
    pub const NAME_SUBSTRING: u32 = 60;
    pub const ALIAS_EXACT: u32 = 90;
    pub const ALIAS_PREFIX: u32 = 70;
    pub const ALIAS_SUBSTRING: u32 = 50;
    pub const STATE_SUBSTRING: u32 = 40;
    pub const DISTRICT_SUBSTRING: u32 = 30;
    pub const TIER_BONUS: [u32; 4] = [20, 15, 10, 0];
    pub const CAPITAL_BONUS: u32 = 10;
    pub const METRO_BONUS: u32 = 15;

    pub fn tier(&self, tier: Tier) -> u32 {
        self.tier_bonus[usize::from(tier.rank() - 1)]
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            name_exact: Self::NAME_EXACT,
            name_prefix: Self::NAME_PREFIX,
            name_substring: Self::NAME_SUBSTRING,
            alias_exact: Self::ALIAS_EXACT,
            alias_prefix: Self::ALIAS_PREFIX,
            alias_substring: Self::ALIAS_SUBSTRING,
            state_substring: Self::STATE_SUBSTRING,
            district_substring: Self::DISTRICT_SUBSTRING,
            tier_bonus: Self::TIER_BONUS,
            capital_bonus: Self::CAPITAL_BONUS,
            metro_bonus: Self::METRO_BONUS,
            alias_scoring: AliasScoring::Best,
        }
    }
}

/// A ranked search result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredCity<'a> {
    pub score: u32,
    pub city: &'a CityRecord,
}

/// Exact / prefix / substring tiering shared by the name and alias rules.
fn graded(key: &str, q: &str, exact: u32, prefix: u32, substring: u32) -> u32 {
    if key == q {
        exact
    } else if key.starts_with(q) {
        prefix
    } else if key.contains(q) {
        substring
    } else {
        0
    }
}

/// Scores one record against an already-normalized query.
pub(crate) fn score_keys(w: &ScoreWeights, r: &CityRecord, k: &SearchKeys, q: &str) -> u32 {
    let mut score = graded(&k.name, q, w.name_exact, w.name_prefix, w.name_substring);

    let alias_hits = k
        .aliases
        .iter()
        .map(|a| graded(a, q, w.alias_exact, w.alias_prefix, w.alias_substring));
    score += match w.alias_scoring {
        AliasScoring::Best => alias_hits.max().unwrap_or(0),
        AliasScoring::Sum => alias_hits.sum(),
    };

    if k.state.contains(q) {
        score += w.state_substring;
    }
    if k.district.as_deref().is_some_and(|d| d.contains(q)) {
        score += w.district_substring;
    }

    score += w.tier(r.tier);
    if r.is_capital {
        score += w.capital_bonus;
    }
    if r.is_metro {
        score += w.metro_bonus;
    }
    score
}

/// Ranks gazetteer entries against free-text queries.
///
/// Holds nothing but a borrow of the gazetteer and its weight table.
#[derive(Debug, Clone, Copy)]
pub struct Ranker<'a> {
    gazetteer: &'a Gazetteer,
    weights: ScoreWeights,
}

impl<'a> Ranker<'a> {
    pub fn new(gazetteer: &'a Gazetteer) -> Self {
        Self::with_weights(gazetteer, ScoreWeights::default())
    }

    pub fn with_weights(gazetteer: &'a Gazetteer, weights: ScoreWeights) -> Self {
        Ranker { gazetteer, weights }
    }

    pub fn gazetteer(&self) -> &'a Gazetteer {
        self.gazetteer
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Score of a single record for `query` (normalized here).
    ///
    /// Returns `None` unless `record` is borrowed from this ranker's
    /// gazetteer. An equal id is not enough.
    pub fn score(&self, record: &CityRecord, query: &str) -> Option<u32> {
        let idx = self.gazetteer.index_of(&record.id)?;
        let own = &self.gazetteer.records()[idx];
        if !std::ptr::eq(record, own) {
            return None;
        }
        let q = normalize_query(query);
        Some(score_keys(&self.weights, own, &self.gazetteer.keys()[idx], &q))
    }

    /// Top `limit` cities for `query`, best first.
    ///
    /// Queries under two characters (counted after trimming, before
    /// folding) return the first `limit` records in gazetteer order,
    /// unranked.
    ///
    /// ```rust
    /// use citydb_core::{Gazetteer, Ranker};
    ///
    /// let db = Gazetteer::load()?;
    /// let hits = Ranker::new(&db).search("bombay", 5);
    /// assert_eq!(hits[0].id, "mumbai");
    /// # Ok::<(), citydb_core::CityDbError>(())
    /// ```
    pub fn search(&self, query: &str, limit: usize) -> Vec<&'a CityRecord> {
        self.search_scored(query, limit)
            .into_iter()
            .map(|h| h.city)
            .collect()
    }

    /// Like [`Ranker::search`] but keeps the scores. The fallback path
    /// reports a score of 0.
    pub fn search_scored(&self, query: &str, limit: usize) -> Vec<ScoredCity<'a>> {
        let q = normalize_query(query);
        let records = self.gazetteer.records();

        // Folding can expand one char ("ß" -> "ss"), so measure the raw input.
        if query.trim().chars().count() < MIN_QUERY_CHARS || q.is_empty() {
            return records
                .iter()
                .take(limit)
                .map(|city| ScoredCity { score: 0, city })
                .collect();
        }

        let mut hits: Vec<ScoredCity<'a>> = records
            .iter()
            .zip(self.gazetteer.keys())
            .filter_map(|(city, keys)| {
                let score = score_keys(&self.weights, city, keys, &q);
                (score > 0).then_some(ScoredCity { score, city })
            })
            .collect();

        // Stable: equal scores keep gazetteer order.
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits.truncate(limit);

        tracing::debug!(query = %q, limit, returned = hits.len(), "city search");
        hits
    }
}
