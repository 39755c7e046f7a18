//! Parameter sets stored as configuration documents.
//!
//! A [`ParametersConfig`] mirrors [`Parameters`] field for field, using the same snake_case names
//! and the same defaults. It is only a deserialization target: converting it into `Parameters`
//! runs the full validation in [`ParametersBuilder::build`], so a configuration file cannot smuggle
//! in values the builder would reject.
//!
//! ```json
//! {
//!   "current_hospitalized": 69,
//!   "relative_contact_rate": 0.3,
//!   "hospitalized": { "rate": 0.025, "days": 7 },
//!   "icu": { "rate": 0.0075, "days": 9 },
//!   "ventilated": { "rate": 0.005, "days": 10 },
//!   "region": { "delaware": 564696, "chester": 519293 },
//!   "current_date": "2020-03-28",
//!   "doubling_time": 4.0,
//!   "market_share": 0.15
//! }
//! ```
use chrono::NaiveDate;
use serde::Deserialize;

use crate::disposition::Disposition;
use crate::error::ParameterError;
use crate::parameters::{
    Parameters, ParametersBuilder, DEFAULT_INFECTIOUS_DAYS, DEFAULT_MARKET_SHARE, DEFAULT_N_DAYS,
    DEFAULT_RECOVERED,
};
use crate::regions::Regions;

fn default_infectious_days() -> i64 {
    DEFAULT_INFECTIOUS_DAYS
}

fn default_market_share() -> f64 {
    DEFAULT_MARKET_SHARE
}

fn default_n_days() -> i64 {
    DEFAULT_N_DAYS
}

fn default_recovered() -> i64 {
    DEFAULT_RECOVERED
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParametersConfig {
    pub current_hospitalized: i64,
    pub relative_contact_rate: f64,
    pub hospitalized: Disposition,
    pub icu: Disposition,
    pub ventilated: Disposition,
    /// Today's date when absent.
    pub current_date: Option<NaiveDate>,
    pub date_first_hospitalized: Option<NaiveDate>,
    pub doubling_time: Option<f64>,
    #[serde(default = "default_infectious_days")]
    pub infectious_days: i64,
    #[serde(default = "default_market_share")]
    pub market_share: f64,
    pub max_y_axis: Option<i64>,
    #[serde(default = "default_n_days")]
    pub n_days: i64,
    pub population: Option<i64>,
    #[serde(default = "default_recovered")]
    pub recovered: i64,
    pub region: Option<Regions>,
}

impl ParametersConfig {
    /// # Errors
    /// [`ParameterError::JsonError`] if the text is not valid JSON or does not have the expected
    /// shape (missing required fields, unknown fields, wrong types).
    pub fn from_json_str(config: &str) -> Result<Self, ParameterError> {
        Ok(serde_json::from_str(config)?)
    }
}

impl TryFrom<ParametersConfig> for Parameters {
    type Error = ParameterError;

    fn try_from(config: ParametersConfig) -> Result<Self, Self::Error> {
        let mut builder = ParametersBuilder::new(
            config.current_hospitalized,
            config.hospitalized,
            config.icu,
            config.relative_contact_rate,
            config.ventilated,
        );
        if let Some(current_date) = config.current_date {
            builder = builder.current_date(current_date);
        }
        builder
            .maybe_date_first_hospitalized(config.date_first_hospitalized)
            .maybe_doubling_time(config.doubling_time)
            .infectious_days(config.infectious_days)
            .market_share(config.market_share)
            .maybe_max_y_axis(config.max_y_axis)
            .n_days(config.n_days)
            .maybe_population(config.population)
            .recovered(config.recovered)
            .maybe_region(config.region)
            .build()
    }
}
