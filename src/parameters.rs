//! The validated parameter set consumed by capacity projections.
//!
//! A [`Parameters`] can only be obtained through [`ParametersBuilder::build`] (or the adapters built
//! on top of it), which runs every field through its validator in a fixed order and returns the
//! first failure. There is no way to observe a partially built or unvalidated `Parameters`, and no
//! way to modify one after it is built.
//!
//! ```rust
//! use chime_params::{Disposition, ParametersBuilder};
//!
//! let parameters = ParametersBuilder::new(
//!     69,
//!     Disposition::new(0.025, 7.0),
//!     Disposition::new(0.0075, 9.0),
//!     0.3,
//!     Disposition::new(0.005, 10.0),
//! )
//! .population(3_600_000)
//! .doubling_time(4.0)
//! .market_share(0.15)
//! .build()
//! .unwrap();
//!
//! assert_eq!(parameters.population(), 3_600_000);
//! assert_eq!(parameters.n_days(), 100);
//! ```
use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use indexmap::IndexMap;
use log::{debug, trace};
use rustc_hash::FxHashMap as HashMap;
use serde::Serialize;

use crate::disposition::{Disposition, DispositionKind};
use crate::error::{ConfigurationError, Constraint, ParameterError, ValidationError};
use crate::regions::Regions;
use crate::validators::{
    date, optional_date, optional_strictly_positive, positive, rate, strictly_positive,
};

pub const DEFAULT_INFECTIOUS_DAYS: i64 = 14;
pub const DEFAULT_MARKET_SHARE: f64 = 1.0;
pub const DEFAULT_N_DAYS: i64 = 100;
pub const DEFAULT_RECOVERED: i64 = 0;

/// Display strings for the series a projection produces.
static LABELS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from_iter([
        ("hospitalized", "Hospitalized"),
        ("icu", "ICU"),
        ("ventilated", "Ventilated"),
        ("day", "Day"),
        ("date", "Date"),
        ("susceptible", "Susceptible"),
        ("infected", "Infected"),
        ("recovered", "Recovered"),
    ])
});

/// Where the modeled population comes from. Exactly one source is ever recorded.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PopulationSource {
    Explicit(i64),
    /// `population` is the regions' total, checked to be strictly positive and to fit in an `i64`.
    FromRegions { regions: Regions, population: i64 },
}

impl PopulationSource {
    #[must_use]
    pub fn population(&self) -> i64 {
        match self {
            PopulationSource::Explicit(population)
            | PopulationSource::FromRegions { population, .. } => *population,
        }
    }

    fn resolve(
        population: Option<i64>,
        region: Option<Regions>,
    ) -> Result<PopulationSource, ParameterError> {
        let source = match (population, region) {
            (None, Some(region)) => {
                let total = strictly_positive("region.population", region.population())?;
                let population = i64::try_from(total).map_err(|_| {
                    ValidationError::new("region.population", total, Constraint::Representable)
                })?;
                PopulationSource::FromRegions {
                    regions: region,
                    population,
                }
            }
            (Some(population), None) => {
                PopulationSource::Explicit(strictly_positive("population", population)?)
            }
            (Some(population), Some(region)) => {
                return Err(ConfigurationError::ConflictingPopulationSource {
                    population,
                    region_population: region.population(),
                }
                .into());
            }
            (None, None) => return Err(ConfigurationError::MissingPopulationSource.into()),
        };
        Ok(source)
    }
}

/// A fully validated set of projection inputs.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Parameters {
    current_hospitalized: i64,
    relative_contact_rate: f64,
    hospitalized: Disposition,
    icu: Disposition,
    ventilated: Disposition,
    population_source: PopulationSource,
    current_date: NaiveDate,
    date_first_hospitalized: Option<NaiveDate>,
    doubling_time: Option<f64>,
    infectious_days: i64,
    market_share: f64,
    max_y_axis: Option<i64>,
    n_days: i64,
    recovered: i64,
    #[serde(skip)]
    dispositions: IndexMap<DispositionKind, Disposition>,
}

impl Parameters {
    #[must_use]
    pub fn current_hospitalized(&self) -> i64 {
        self.current_hospitalized
    }

    #[must_use]
    pub fn relative_contact_rate(&self) -> f64 {
        self.relative_contact_rate
    }

    #[must_use]
    pub fn hospitalized(&self) -> Disposition {
        self.hospitalized
    }

    #[must_use]
    pub fn icu(&self) -> Disposition {
        self.icu
    }

    #[must_use]
    pub fn ventilated(&self) -> Disposition {
        self.ventilated
    }

    #[must_use]
    pub fn population_source(&self) -> &PopulationSource {
        &self.population_source
    }

    /// The total modeled population, whichever source it came from.
    #[must_use]
    pub fn population(&self) -> i64 {
        self.population_source.population()
    }

    /// The regions the population was summed from, or `None` if it was given explicitly.
    #[must_use]
    pub fn region(&self) -> Option<&Regions> {
        match &self.population_source {
            PopulationSource::FromRegions { regions, .. } => Some(regions),
            PopulationSource::Explicit(_) => None,
        }
    }

    #[must_use]
    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    #[must_use]
    pub fn date_first_hospitalized(&self) -> Option<NaiveDate> {
        self.date_first_hospitalized
    }

    #[must_use]
    pub fn doubling_time(&self) -> Option<f64> {
        self.doubling_time
    }

    #[must_use]
    pub fn infectious_days(&self) -> i64 {
        self.infectious_days
    }

    #[must_use]
    pub fn market_share(&self) -> f64 {
        self.market_share
    }

    /// Upper bound for plotted series. Carried through for presentation only.
    #[must_use]
    pub fn max_y_axis(&self) -> Option<i64> {
        self.max_y_axis
    }

    /// The projection horizon in days.
    #[must_use]
    pub fn n_days(&self) -> i64 {
        self.n_days
    }

    #[must_use]
    pub fn recovered(&self) -> i64 {
        self.recovered
    }

    /// Series name to display string, for every series a projection produces.
    #[must_use]
    pub fn labels(&self) -> &'static HashMap<&'static str, &'static str> {
        &LABELS
    }

    #[must_use]
    pub fn label(&self, name: &str) -> Option<&'static str> {
        LABELS.get(name).copied()
    }

    /// The three dispositions, in the order hospitalized, ICU, ventilated.
    #[must_use]
    pub fn dispositions(&self) -> &IndexMap<DispositionKind, Disposition> {
        &self.dispositions
    }

    #[must_use]
    pub fn disposition(&self, kind: DispositionKind) -> Disposition {
        match kind {
            DispositionKind::Hospitalized => self.hospitalized,
            DispositionKind::Icu => self.icu,
            DispositionKind::Ventilated => self.ventilated,
        }
    }

    /// Looks up a disposition by its series name (`"hospitalized"`, `"icu"`, or `"ventilated"`).
    #[must_use]
    pub fn disposition_by_name(&self, name: &str) -> Option<Disposition> {
        name.parse::<DispositionKind>()
            .ok()
            .map(|kind| self.disposition(kind))
    }
}

/// Collects the inputs for a [`Parameters`] and validates them all at once in [`build`](Self::build).
///
/// The five inputs without a sensible default are taken by [`new`](Self::new). Everything else
/// starts at its default and can be overridden with the chained setters. Exactly one of
/// [`population`](Self::population) or [`region`](Self::region) must be set before building.
#[derive(Clone, Debug)]
#[must_use]
pub struct ParametersBuilder {
    current_hospitalized: i64,
    hospitalized: Disposition,
    icu: Disposition,
    relative_contact_rate: f64,
    ventilated: Disposition,
    current_date: NaiveDate,
    date_first_hospitalized: Option<NaiveDate>,
    doubling_time: Option<f64>,
    infectious_days: i64,
    market_share: f64,
    max_y_axis: Option<i64>,
    n_days: i64,
    population: Option<i64>,
    recovered: i64,
    region: Option<Regions>,
}

impl ParametersBuilder {
    /// `current_date` defaults to today's local date, read once here.
    pub fn new(
        current_hospitalized: i64,
        hospitalized: Disposition,
        icu: Disposition,
        relative_contact_rate: f64,
        ventilated: Disposition,
    ) -> Self {
        ParametersBuilder {
            current_hospitalized,
            hospitalized,
            icu,
            relative_contact_rate,
            ventilated,
            current_date: Local::now().date_naive(),
            date_first_hospitalized: None,
            doubling_time: None,
            infectious_days: DEFAULT_INFECTIOUS_DAYS,
            market_share: DEFAULT_MARKET_SHARE,
            max_y_axis: None,
            n_days: DEFAULT_N_DAYS,
            population: None,
            recovered: DEFAULT_RECOVERED,
            region: None,
        }
    }

    pub fn current_date(mut self, current_date: NaiveDate) -> Self {
        self.current_date = current_date;
        self
    }

    pub fn date_first_hospitalized(mut self, date_first_hospitalized: NaiveDate) -> Self {
        self.date_first_hospitalized = Some(date_first_hospitalized);
        self
    }

    pub fn doubling_time(mut self, doubling_time: f64) -> Self {
        self.doubling_time = Some(doubling_time);
        self
    }

    pub fn infectious_days(mut self, infectious_days: i64) -> Self {
        self.infectious_days = infectious_days;
        self
    }

    pub fn market_share(mut self, market_share: f64) -> Self {
        self.market_share = market_share;
        self
    }

    pub fn max_y_axis(mut self, max_y_axis: i64) -> Self {
        self.max_y_axis = Some(max_y_axis);
        self
    }

    pub fn n_days(mut self, n_days: i64) -> Self {
        self.n_days = n_days;
        self
    }

    pub fn population(mut self, population: i64) -> Self {
        self.population = Some(population);
        self
    }

    pub fn recovered(mut self, recovered: i64) -> Self {
        self.recovered = recovered;
        self
    }

    pub fn region(mut self, region: Regions) -> Self {
        self.region = Some(region);
        self
    }

    // Option-taking setters for adapters that forward possibly-absent inputs.

    pub(crate) fn maybe_date_first_hospitalized(mut self, value: Option<NaiveDate>) -> Self {
        self.date_first_hospitalized = value;
        self
    }

    pub(crate) fn maybe_doubling_time(mut self, value: Option<f64>) -> Self {
        self.doubling_time = value;
        self
    }

    pub(crate) fn maybe_max_y_axis(mut self, value: Option<i64>) -> Self {
        self.max_y_axis = value;
        self
    }

    pub(crate) fn maybe_population(mut self, value: Option<i64>) -> Self {
        self.population = value;
        self
    }

    pub(crate) fn maybe_region(mut self, value: Option<Regions>) -> Self {
        self.region = value;
        self
    }

    /// Validates every input and assembles the [`Parameters`].
    ///
    /// Fields are checked in dependency order: counts and contact rate, then dispositions, then
    /// the population source, then dates, then the remaining scalars. The first violation is
    /// returned.
    ///
    /// # Errors
    /// - [`ParameterError::Validation`] if any field violates its constraint.
    /// - [`ParameterError::Configuration`] if both or neither of `population` and `region` were
    ///   set.
    pub fn build(self) -> Result<Parameters, ParameterError> {
        let parameters = self.validate();
        if let Err(error) = &parameters {
            debug!("rejected parameters: {error}");
        }
        parameters
    }

    fn validate(self) -> Result<Parameters, ParameterError> {
        let current_hospitalized = positive("current_hospitalized", self.current_hospitalized)?;
        let relative_contact_rate = rate("relative_contact_rate", self.relative_contact_rate)?;

        let hospitalized = validate_disposition(DispositionKind::Hospitalized, self.hospitalized)?;
        let icu = validate_disposition(DispositionKind::Icu, self.icu)?;
        let ventilated = validate_disposition(DispositionKind::Ventilated, self.ventilated)?;

        let population_source = PopulationSource::resolve(self.population, self.region)?;

        let current_date = date("current_date", self.current_date)?;
        let date_first_hospitalized =
            optional_date("date_first_hospitalized", self.date_first_hospitalized)?;
        let doubling_time = optional_strictly_positive("doubling_time", self.doubling_time)?;

        let infectious_days = strictly_positive("infectious_days", self.infectious_days)?;
        let market_share = rate("market_share", self.market_share)?;
        let max_y_axis = optional_strictly_positive("max_y_axis", self.max_y_axis)?;
        let n_days = strictly_positive("n_days", self.n_days)?;
        let recovered = positive("recovered", self.recovered)?;

        let dispositions = IndexMap::from([
            (DispositionKind::Hospitalized, hospitalized),
            (DispositionKind::Icu, icu),
            (DispositionKind::Ventilated, ventilated),
        ]);

        debug!(
            "accepted parameters: population {} ({}), {} days from {}",
            population_source.population(),
            match population_source {
                PopulationSource::Explicit(_) => "explicit",
                PopulationSource::FromRegions { .. } => "regions",
            },
            n_days,
            current_date
        );

        Ok(Parameters {
            current_hospitalized,
            relative_contact_rate,
            hospitalized,
            icu,
            ventilated,
            population_source,
            current_date,
            date_first_hospitalized,
            doubling_time,
            infectious_days,
            market_share,
            max_y_axis,
            n_days,
            recovered,
            dispositions,
        })
    }
}

/// The rate must be a proportion. The duration must be strictly positive, except that an inactive
/// (zero rate) disposition may have a zero duration.
fn validate_disposition(
    kind: DispositionKind,
    disposition: Disposition,
) -> Result<Disposition, ParameterError> {
    let (rate_field, days_field) = kind.field_names();
    rate(rate_field, disposition.rate)?;
    if disposition.is_inactive() {
        positive(days_field, disposition.days)?;
    } else {
        strictly_positive(days_field, disposition.days)?;
    }
    trace!(
        "{kind}: rate {}, days {}",
        disposition.rate,
        disposition.days
    );
    Ok(disposition)
}
