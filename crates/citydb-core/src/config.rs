// crates/citydb-core/src/config.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the loader treats two records that share an `id`.
///
/// The reference dataset ships with such duplicates (`mangalore`, `kochi`),
/// so the default resolves them instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail the whole load with [`CityDbError::DuplicateId`].
    ///
    /// [`CityDbError::DuplicateId`]: crate::CityDbError::DuplicateId
    Reject,
    KeepFirst,
    KeepLast,
    /// Keep the record with the highest population; ties keep the earlier one.
    #[default]
    KeepMostPopulous,
}

impl DuplicatePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicatePolicy::Reject => "reject",
            DuplicatePolicy::KeepFirst => "keep_first",
            DuplicatePolicy::KeepLast => "keep_last",
            DuplicatePolicy::KeepMostPopulous => "keep_most_populous",
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "reject" => Ok(DuplicatePolicy::Reject),
            "keep_first" | "first" => Ok(DuplicatePolicy::KeepFirst),
            "keep_last" | "last" => Ok(DuplicatePolicy::KeepLast),
            "keep_most_populous" | "most_populous" => Ok(DuplicatePolicy::KeepMostPopulous),
            other => Err(format!(
                "unknown duplicate policy `{other}` (expected reject, keep_first, keep_last, keep_most_populous)"
            )),
        }
    }
}

/// Options controlling how a [`Gazetteer`] is built.
///
/// [`Gazetteer`]: crate::Gazetteer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoadOptions {
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
}

impl LoadOptions {
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_parses_common_spellings() {
        assert_eq!("reject".parse(), Ok(DuplicatePolicy::Reject));
        assert_eq!("keep-first".parse(), Ok(DuplicatePolicy::KeepFirst));
        assert_eq!("LAST".parse(), Ok(DuplicatePolicy::KeepLast));
        assert!("merge".parse::<DuplicatePolicy>().is_err());
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let opts: LoadOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts.duplicate_policy, DuplicatePolicy::KeepMostPopulous);
        let opts: LoadOptions =
            serde_json::from_str(r#"{"duplicate_policy":"reject"}"#).unwrap();
        assert_eq!(opts.duplicate_policy, DuplicatePolicy::Reject);
    }
}
