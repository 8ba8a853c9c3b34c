// crates/citydb-core/src/traits.rs
use crate::model::CityRecord;
use crate::text::fold_key;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// This trait centralizes accent-insensitive and case-insensitive
/// comparisons based on [`fold_key`]. Implementors provide a `&str` view of
/// their canonical name via [`NameMatch::name_str`], and get:
/// - [`NameMatch::is_named`] — equality on folded form
/// - [`NameMatch::name_contains`] — substring match on folded form
///
/// # Examples
/// ```rust
/// use citydb_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Bengalūru").is_named("bengaluru"));
/// assert!(Place("Visakhapatnam").name_contains("patnam"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

/// Anything with a position on the globe, in degrees.
pub trait Located {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
}

impl NameMatch for CityRecord {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

impl Located for CityRecord {
    #[inline]
    fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Located for (f64, f64) {
    #[inline]
    fn latitude(&self) -> f64 {
        self.0
    }

    #[inline]
    fn longitude(&self) -> f64 {
        self.1
    }
}

impl<T: Located + ?Sized> Located for &T {
    #[inline]
    fn latitude(&self) -> f64 {
        (**self).latitude()
    }

    #[inline]
    fn longitude(&self) -> f64 {
        (**self).longitude()
    }
}
