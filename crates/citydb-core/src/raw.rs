// crates/citydb-core/src/raw.rs
use crate::error::{CityDbError, Result};
use crate::model::{CityRecord, Region, Tier};
use serde::{Deserialize, Serialize};

/// Raw city structure as it comes from the JSON dataset.
///
/// Field types are deliberately loose (`u8` tier, string region) so that
/// bad data is reported by [`CityRaw::into_record`] with the offending id
/// instead of as an opaque deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityRaw {
    pub id: String,
    pub name: String,
    pub state: String,
    #[serde(default)]
    pub district: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub population: u64,
    pub tier: u8,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub is_capital: bool,
    #[serde(default)]
    pub is_metro: bool,
    pub region: String,
}

pub type CitiesRaw = Vec<CityRaw>;

impl CityRaw {
    /// Validates the raw entry and converts it into a [`CityRecord`].
    pub fn into_record(self) -> Result<CityRecord> {
        let id = self.id.trim().to_owned();
        if id.is_empty() {
            return Err(CityDbError::invalid(&self.name, "empty id"));
        }
        if self.name.trim().is_empty() {
            return Err(CityDbError::invalid(&id, "empty name"));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(CityDbError::invalid(
                &id,
                format!("latitude {} out of range", self.latitude),
            ));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(CityDbError::invalid(
                &id,
                format!("longitude {} out of range", self.longitude),
            ));
        }
        if self.population == 0 {
            return Err(CityDbError::invalid(&id, "population must be positive"));
        }
        let tier = Tier::try_from(self.tier).map_err(|e| CityDbError::invalid(&id, e))?;
        let region = self
            .region
            .parse::<Region>()
            .map_err(|e| CityDbError::invalid(&id, e))?;

        Ok(CityRecord {
            id,
            name: self.name,
            state: self.state,
            district: self.district.filter(|d| !d.trim().is_empty()),
            region,
            latitude: self.latitude,
            longitude: self.longitude,
            population: self.population,
            tier,
            aliases: self.aliases,
            is_capital: self.is_capital,
            is_metro: self.is_metro,
        })
    }
}

impl From<CityRecord> for CityRaw {
    fn from(r: CityRecord) -> Self {
        CityRaw {
            id: r.id,
            name: r.name,
            state: r.state,
            district: r.district,
            latitude: r.latitude,
            longitude: r.longitude,
            population: r.population,
            tier: r.tier.rank(),
            aliases: r.aliases,
            is_capital: r.is_capital,
            is_metro: r.is_metro,
            region: r.region.as_str().to_owned(),
        }
    }
}
