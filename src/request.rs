//! Adapts raw request data (for example the JSON body of a form submission) into [`Parameters`].
//!
//! Every key is optional. Absent keys fall back to the defaults below; present keys must hold a
//! value of the right primitive kind. The request always supplies an explicit population, never
//! regions.
//!
//! | Key                           | Parameter                  | Default      |
//! |-------------------------------|----------------------------|--------------|
//! | `dateOfFirstHospitalizedCase` | `date_first_hospitalized`  | `"2020-7-3"` |
//! | `population`                  | `population`               | 10000        |
//! | `currentHospitalized`         | `current_hospitalized`     | 0            |
//! | `hospitalMarketShare`         | `market_share`             | 0            |
//! | `hospitalizationPercent`      | `hospitalized.rate`        | 0            |
//! | `averageHospitalLengthOfStay` | `hospitalized.days`        | 0            |
//! | `icuNeedPercent`              | `icu.rate`                 | 0            |
//! | `averageDaysInICU`            | `icu.days`                 | 0            |
//! | `ventilationNeedPercent`      | `ventilated.rate`          | 0            |
//! | `averageDaysOnVentilator`     | `ventilated.days`          | 0            |
//! | `infectiousDays`              | `infectious_days`          | 14           |
//! | `socialDistancing`            | `relative_contact_rate`    | 0            |
//! | `numberOfDaysToProject`       | `n_days`                   | 100          |
//!
//! The `*Percent` values are used as rates exactly as given; they are not divided by 100.
use chrono::NaiveDate;
use log::trace;
use serde_json::{Map, Value};

use crate::disposition::Disposition;
use crate::error::{ParameterError, ParseError};
use crate::parameters::{Parameters, ParametersBuilder, DEFAULT_INFECTIOUS_DAYS, DEFAULT_N_DAYS};
use crate::validators::calendar_date;

pub const DEFAULT_DATE_FIRST_HOSPITALIZED: &str = "2020-7-3";
pub const DEFAULT_POPULATION: i64 = 10_000;

/// Builds [`Parameters`] from an untyped request mapping.
///
/// # Errors
/// - [`ParameterError::Parse`] if the date of the first hospitalized case is malformed or names a
///   day that does not exist, or if any value has the wrong type.
/// - Any error [`ParametersBuilder::build`] returns.
pub fn construct_parameters(request_data: &Map<String, Value>) -> Result<Parameters, ParameterError> {
    let request = Request(request_data);

    let date_first_hospitalized = parse_date(
        request.get_str("dateOfFirstHospitalizedCase", DEFAULT_DATE_FIRST_HOSPITALIZED)?,
    )?;
    let hospitalized = Disposition::new(
        request.get_f64("hospitalizationPercent", 0.0)?,
        request.get_f64("averageHospitalLengthOfStay", 0.0)?,
    );
    let icu = Disposition::new(
        request.get_f64("icuNeedPercent", 0.0)?,
        request.get_f64("averageDaysInICU", 0.0)?,
    );
    let ventilated = Disposition::new(
        request.get_f64("ventilationNeedPercent", 0.0)?,
        request.get_f64("averageDaysOnVentilator", 0.0)?,
    );

    ParametersBuilder::new(
        request.get_i64("currentHospitalized", 0)?,
        hospitalized,
        icu,
        request.get_f64("socialDistancing", 0.0)?,
        ventilated,
    )
    .population(request.get_i64("population", DEFAULT_POPULATION)?)
    .market_share(request.get_f64("hospitalMarketShare", 0.0)?)
    .date_first_hospitalized(date_first_hospitalized)
    .infectious_days(request.get_i64("infectiousDays", DEFAULT_INFECTIOUS_DAYS)?)
    .n_days(request.get_i64("numberOfDaysToProject", DEFAULT_N_DAYS)?)
    .build()
}

/// Parses `request_json` as a JSON object and passes it to [`construct_parameters`].
///
/// # Errors
/// [`ParameterError::JsonError`] if the text is not a JSON object, otherwise as
/// [`construct_parameters`].
pub fn construct_parameters_from_json(request_json: &str) -> Result<Parameters, ParameterError> {
    let request_data: Map<String, Value> = serde_json::from_str(request_json)?;
    construct_parameters(&request_data)
}

/// Parses a `Y-M-D` date such as `"2020-7-3"`. Components may have leading zeros.
///
/// # Errors
/// [`ParseError::WrongComponentCount`] unless there are exactly three `-`-separated components,
/// [`ParseError::InvalidComponent`] if one is not a decimal integer, and
/// [`ParseError::InvalidDate`] if they do not name a calendar day.
pub fn parse_date(input: &str) -> Result<NaiveDate, ParseError> {
    let components: Vec<&str> = input.split('-').collect();
    let &[year, month, day] = components.as_slice() else {
        return Err(ParseError::WrongComponentCount {
            input: input.to_string(),
            found: components.len(),
        });
    };
    let invalid = |component: &str| ParseError::InvalidComponent {
        input: input.to_string(),
        component: component.to_string(),
    };
    let year: i32 = year.trim().parse().map_err(|_| invalid(year))?;
    let month: u32 = month.trim().parse().map_err(|_| invalid(month))?;
    let day: u32 = day.trim().parse().map_err(|_| invalid(day))?;
    calendar_date(year, month, day)
}

/// Typed reads with defaults over the raw request mapping.
struct Request<'a>(&'a Map<String, Value>);

impl<'a> Request<'a> {
    fn get(&self, key: &'static str) -> Option<&'a Value> {
        let value = self.0.get(key);
        if value.is_none() {
            trace!("{key} not in request, using default");
        }
        value
    }

    fn get_str(&self, key: &'static str, default: &'a str) -> Result<&'a str, ParseError> {
        match self.get(key) {
            None => Ok(default),
            Some(Value::String(value)) => Ok(value.as_str()),
            Some(other) => Err(invalid_field_type(key, "a string", other)),
        }
    }

    fn get_f64(&self, key: &'static str, default: f64) -> Result<f64, ParseError> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => value
                .as_f64()
                .ok_or_else(|| invalid_field_type(key, "a number", value)),
        }
    }

    /// Integral floats such as `100.0` are accepted; `100.5` is not.
    fn get_i64(&self, key: &'static str, default: i64) -> Result<i64, ParseError> {
        let Some(value) = self.get(key) else {
            return Ok(default);
        };
        if let Some(integer) = value.as_i64() {
            return Ok(integer);
        }
        match value.as_f64() {
            #[allow(clippy::cast_possible_truncation)]
            Some(float)
                if float.fract() == 0.0 && float >= i64::MIN as f64 && float < i64::MAX as f64 =>
            {
                Ok(float as i64)
            }
            _ => Err(invalid_field_type(key, "an integer", value)),
        }
    }
}

fn invalid_field_type(key: &'static str, expected: &'static str, found: &Value) -> ParseError {
    ParseError::InvalidFieldType {
        key,
        expected,
        found: found.to_string(),
    }
}
