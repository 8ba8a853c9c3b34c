// crates/citydb-core/src/gazetteer.rs

//! # City Gazetteer
//!
//! The immutable record store every other component reads from. A
//! [`Gazetteer`] is built once (see the `loader` module), owns all
//! [`CityRecord`]s, and is shared by reference afterwards.

use crate::common::DbStats;
use crate::config::{DuplicatePolicy, LoadOptions};
use crate::error::{CityDbError, Result};
use crate::model::{CityRecord, Region, Tier};
use crate::raw::CityRaw;
use crate::text::{equals_folded, fold_key};
use std::collections::{HashMap, HashSet};

/// Folded search keys, computed once per record at build time.
#[derive(Clone, Debug)]
pub(crate) struct SearchKeys {
    pub name: String,
    pub aliases: Vec<String>,
    pub state: String,
    pub district: Option<String>,
}

impl SearchKeys {
    fn of(r: &CityRecord) -> Self {
        SearchKeys {
            name: fold_key(&r.name),
            aliases: r.aliases.iter().map(|a| fold_key(a)).collect(),
            state: fold_key(&r.state),
            district: r.district.as_deref().map(fold_key),
        }
    }
}

/// The in-memory city reference set.
///
/// Order is the dataset order after duplicate resolution and is stable for
/// a given input, which the ranker relies on for tie-breaking.
/// `Gazetteer::default()` is empty.
#[derive(Clone, Debug, Default)]
pub struct Gazetteer {
    records: Vec<CityRecord>,
    keys: Vec<SearchKeys>,
    by_id: HashMap<String, usize>,
    duplicates_resolved: usize,
}

impl Gazetteer {
    /// Builds a gazetteer from raw entries, validating each one and
    /// resolving duplicate ids according to `opts.duplicate_policy`.
    ///
    /// ```rust
    /// use citydb_core::{Gazetteer, LoadOptions};
    /// use citydb_core::raw::CityRaw;
    ///
    /// let raw: Vec<CityRaw> = serde_json::from_str(r#"[
    ///   {"id":"goa","name":"Panaji","state":"Goa","latitude":15.4909,
    ///    "longitude":73.8278,"population":114405,"tier":3,
    ///    "aliases":["Panjim"],"is_capital":true,"is_metro":false,"region":"West"}
    /// ]"#)?;
    /// let db = Gazetteer::from_records(raw, &LoadOptions::default())?;
    /// assert_eq!(db.get_by_id("goa").map(|c| c.name()), Some("Panaji"));
    /// # Ok::<(), citydb_core::CityDbError>(())
    /// ```
    pub fn from_records<I>(raw: I, opts: &LoadOptions) -> Result<Self>
    where
        I: IntoIterator<Item = CityRaw>,
    {
        let records = raw
            .into_iter()
            .map(CityRaw::into_record)
            .collect::<Result<Vec<_>>>()?;
        Self::from_validated(records, opts)
    }

    pub(crate) fn from_validated(records: Vec<CityRecord>, opts: &LoadOptions) -> Result<Self> {
        let input_len = records.len();
        let records = resolve_duplicates(records, opts.duplicate_policy)?;
        let duplicates_resolved = input_len - records.len();

        let by_id = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect::<HashMap<_, _>>();
        let keys = records.iter().map(SearchKeys::of).collect();

        tracing::info!(
            cities = records.len(),
            duplicates_resolved,
            policy = %opts.duplicate_policy,
            "gazetteer built"
        );

        Ok(Gazetteer {
            records,
            keys,
            by_id,
            duplicates_resolved,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in gazetteer order.
    pub fn records(&self) -> &[CityRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CityRecord> {
        self.records.iter()
    }

    /// Looks a city up by its id. Unknown ids yield `None`.
    pub fn get_by_id(&self, id: &str) -> Option<&CityRecord> {
        self.index_of(id).map(|i| &self.records[i])
    }

    /// Like [`Gazetteer::get_by_id`] but reports a miss as [`CityDbError::NotFound`].
    pub fn try_get(&self, id: &str) -> Result<&CityRecord> {
        self.get_by_id(id)
            .ok_or_else(|| CityDbError::NotFound(format!("city id `{id}`")))
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id.trim()).copied()
    }

    pub(crate) fn keys(&self) -> &[SearchKeys] {
        &self.keys
    }

    /// Every record matching `pred`, in gazetteer order.
    pub fn filter<P>(&self, pred: P) -> Vec<&CityRecord>
    where
        P: Fn(&CityRecord) -> bool,
    {
        self.records.iter().filter(|r| pred(r)).collect()
    }

    /// Every record matching the categorical filter, in gazetteer order.
    pub fn filter_by(&self, f: &CityFilter) -> Vec<&CityRecord> {
        self.filter(|r| f.matches(r))
    }

    pub fn stats(&self) -> DbStats {
        let states: HashSet<String> = self.records.iter().map(|r| fold_key(&r.state)).collect();
        let regions: HashSet<Region> = self.records.iter().map(|r| r.region).collect();
        DbStats {
            cities: self.records.len(),
            states: states.len(),
            regions: regions.len(),
            duplicates_resolved: self.duplicates_resolved,
        }
    }
}

impl<'a> IntoIterator for &'a Gazetteer {
    type Item = &'a CityRecord;
    type IntoIter = std::slice::Iter<'a, CityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Collapses records sharing an id into one. The survivor always takes the
/// slot of the first occurrence so gazetteer order stays stable.
fn resolve_duplicates(
    records: Vec<CityRecord>,
    policy: DuplicatePolicy,
) -> Result<Vec<CityRecord>> {
    let mut out: Vec<CityRecord> = Vec::with_capacity(records.len());
    let mut seen: HashMap<String, usize> = HashMap::with_capacity(records.len());

    for rec in records {
        let Some(&slot) = seen.get(&rec.id) else {
            seen.insert(rec.id.clone(), out.len());
            out.push(rec);
            continue;
        };

        let existing = &out[slot];
        let replace = match policy {
            DuplicatePolicy::Reject => {
                return Err(CityDbError::DuplicateId { id: rec.id });
            }
            DuplicatePolicy::KeepFirst => false,
            DuplicatePolicy::KeepLast => true,
            DuplicatePolicy::KeepMostPopulous => rec.population > existing.population,
        };
        tracing::warn!(
            id = %rec.id,
            kept_population = if replace { rec.population } else { existing.population },
            dropped_population = if replace { existing.population } else { rec.population },
            policy = %policy,
            "duplicate city id resolved"
        );
        if replace {
            out[slot] = rec;
        }
    }
    Ok(out)
}

/// Categorical filter over tier, region, state and capital/metro flags.
/// Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityFilter {
    pub tier: Option<Tier>,
    pub region: Option<Region>,
    pub state: Option<String>,
    pub is_capital: Option<bool>,
    pub is_metro: Option<bool>,
}

impl CityFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tier(mut self, tier: Tier) -> Self {
        self.tier = Some(tier);
        self
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn capital(mut self, yes: bool) -> Self {
        self.is_capital = Some(yes);
        self
    }

    pub fn metro(mut self, yes: bool) -> Self {
        self.is_metro = Some(yes);
        self
    }

    pub fn matches(&self, r: &CityRecord) -> bool {
        self.tier.map_or(true, |t| r.tier == t)
            && self.region.map_or(true, |g| r.region == g)
            && self.is_capital.map_or(true, |c| r.is_capital == c)
            && self.is_metro.map_or(true, |m| r.is_metro == m)
            && self
                .state
                .as_deref()
                .map_or(true, |s| equals_folded(&r.state, s.trim()))
    }
}
