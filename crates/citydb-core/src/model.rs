// crates/citydb-core/src/model.rs
use crate::text::fold_key;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse geographic region a city belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
    West,
    Central,
    Northeast,
}

impl Region {
    /// All regions in declaration order.
    pub const ALL: [Region; 6] = [
        Region::North,
        Region::South,
        Region::East,
        Region::West,
        Region::Central,
        Region::Northeast,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
            Region::Central => "Central",
            Region::Northeast => "Northeast",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = String;

    /// Case- and accent-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = fold_key(s.trim());
        Region::ALL
            .into_iter()
            .find(|r| fold_key(r.as_str()) == key)
            .ok_or_else(|| format!("unknown region `{s}`"))
    }
}

/// Ordinal importance classification, 1 = most significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Tier(u8);

impl Tier {
    pub const ONE: Tier = Tier(1);
    pub const TWO: Tier = Tier(2);
    pub const THREE: Tier = Tier(3);
    pub const FOUR: Tier = Tier(4);

    /// Returns `None` outside `1..=4`.
    pub fn new(rank: u8) -> Option<Tier> {
        (1..=4).contains(&rank).then_some(Tier(rank))
    }

    pub fn rank(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Tier {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Tier::new(v).ok_or_else(|| format!("tier must be 1..=4, got {v}"))
    }
}

impl From<Tier> for u8 {
    fn from(t: Tier) -> u8 {
        t.0
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tier {}", self.0)
    }
}

/// A validated city entry.
///
/// Records are only ever handed out by reference from a [`Gazetteer`],
/// which owns them for its whole lifetime.
///
/// [`Gazetteer`]: crate::Gazetteer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    /// Stable identifier, unique within a gazetteer (e.g. `"mumbai"`).
    pub id: String,
    pub name: String,
    pub state: String,
    pub district: Option<String>,
    pub region: Region,
    pub latitude: f64,
    pub longitude: f64,
    pub population: u64,
    pub tier: Tier,
    /// Alternate names and spellings (e.g. `"Bombay"`).
    pub aliases: Vec<String>,
    pub is_capital: bool,
    pub is_metro: bool,
}

impl CityRecord {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// `(latitude, longitude)` in degrees.
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_parses_loosely() {
        assert_eq!("north".parse::<Region>(), Ok(Region::North));
        assert_eq!(" NorthEast ".parse::<Region>(), Ok(Region::Northeast));
        assert!("Atlantis".parse::<Region>().is_err());
    }

    #[test]
    fn tier_bounds() {
        assert_eq!(Tier::new(1), Some(Tier::ONE));
        assert_eq!(Tier::new(4).map(Tier::rank), Some(4));
        assert!(Tier::new(0).is_none());
        assert!(Tier::new(5).is_none());
        assert!(Tier::ONE < Tier::THREE);
    }

    #[test]
    fn tier_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Tier>("2").is_ok());
        assert!(serde_json::from_str::<Tier>("7").is_err());
    }
}
