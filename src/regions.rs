//! Named sub-populations whose counts sum to the modeled population.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A set of named regions and their total population.
///
/// The total is computed once, when the `Regions` is built, and never changes afterward. It is kept
/// as an `i128` so that it is the exact sum of any counts. Counts are not validated here;
/// [`Parameters`](crate::Parameters) requires the total to be strictly positive and to fit in an
/// `i64`.
///
/// ```rust
/// use chime_params::Regions;
///
/// let regions = Regions::new([("a", 10), ("b", 20), ("c", 5)]);
/// assert_eq!(regions.population(), 35);
/// assert_eq!(regions.get("b"), Some(20));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(from = "IndexMap<String, i64>", into = "IndexMap<String, i64>")]
pub struct Regions {
    counts: IndexMap<String, i64>,
    population: i128,
}

impl Regions {
    /// Builds a `Regions` from `(name, count)` pairs. If a name occurs more than once, the last
    /// count given for it replaces the earlier ones, so the total is always the sum of the counts
    /// that can actually be looked up.
    pub fn new<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let counts: IndexMap<String, i64> = counts
            .into_iter()
            .map(|(name, count)| (name.into(), count))
            .collect();
        let population = counts.values().map(|&count| i128::from(count)).sum();
        Regions { counts, population }
    }

    #[must_use]
    pub fn population(&self) -> i128 {
        self.population
    }

    /// The count for the named region, if there is one.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.counts.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for Regions {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        Regions::new(iter)
    }
}

impl From<IndexMap<String, i64>> for Regions {
    fn from(counts: IndexMap<String, i64>) -> Self {
        Regions::new(counts)
    }
}

impl From<Regions> for IndexMap<String, i64> {
    fn from(regions: Regions) -> Self {
        regions.counts
    }
}
