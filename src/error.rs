//! Error types returned while validating and constructing [`Parameters`](crate::Parameters).
//!
//! Every failure is fatal to the construction call that produced it. Nothing in this crate
//! catches or recovers from these errors; they are handed back to the caller (typically a
//! request handler) to translate into a user-facing response.
use std::fmt::{self, Display};

/// The constraint a validator enforces.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Constraint {
    /// `value >= 0`
    Positive,
    /// `value > 0`
    StrictlyPositive,
    /// `0 <= value <= 1`
    Rate,
    /// `value <= i64::MAX`
    Representable,
}

impl Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Positive => write!(f, "must be greater than or equal to 0"),
            Constraint::StrictlyPositive => write!(f, "must be greater than 0"),
            Constraint::Rate => write!(f, "must be in the interval [0, 1]"),
            Constraint::Representable => write!(f, "must not exceed {}", i64::MAX),
        }
    }
}

/// A single field violates its constraint.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ValidationError {
    field: &'static str,
    value: String,
    constraint: Constraint,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: &'static str, value: impl Display, constraint: Constraint) -> Self {
        Self {
            field,
            value: value.to_string(),
            constraint,
        }
    }

    #[must_use]
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The offending value as it was rendered at validation time.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn constraint(&self) -> Constraint {
        self.constraint
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value {} provided for {} {}",
            self.value, self.field, self.constraint
        )
    }
}

impl std::error::Error for ValidationError {}

/// A structural invariant is violated independent of any single field.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConfigurationError {
    /// Neither `population` nor `region` was supplied.
    MissingPopulationSource,
    /// Both `population` and `region` were supplied.
    ConflictingPopulationSource {
        population: i64,
        region_population: i128,
    },
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::MissingPopulationSource => {
                write!(f, "population or region must be provided")
            }
            ConfigurationError::ConflictingPopulationSource {
                population,
                region_population,
            } => write!(
                f,
                "population ({}) and region (total {}) are mutually exclusive",
                population, region_population
            ),
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Raw request data could not be read.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParseError {
    /// A date string did not split into exactly year, month, and day.
    WrongComponentCount { input: String, found: usize },
    /// A date component is not a decimal integer.
    InvalidComponent { input: String, component: String },
    /// The components parse, but do not name a calendar date.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// A request value has the wrong primitive kind.
    InvalidFieldType {
        key: &'static str,
        expected: &'static str,
        found: String,
    },
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::WrongComponentCount { input, found } => write!(
                f,
                "expected a date of the form YYYY-M-D, found {} component(s) in {:?}",
                found, input
            ),
            ParseError::InvalidComponent { input, component } => {
                write!(f, "invalid date component {:?} in {:?}", component, input)
            }
            ParseError::InvalidDate { year, month, day } => {
                write!(f, "{}-{}-{} is not a valid calendar date", year, month, day)
            }
            ParseError::InvalidFieldType {
                key,
                expected,
                found,
            } => write!(f, "expected {} for {}, found {}", expected, key, found),
        }
    }
}

impl std::error::Error for ParseError {}

/// Provides `ParameterError` and maps the individual failure kinds into it.
#[derive(Debug)]
pub enum ParameterError {
    Validation(ValidationError),
    Configuration(ConfigurationError),
    Parse(ParseError),
    JsonError(serde_json::Error),
}

impl ParameterError {
    /// The request or parameter field responsible for the failure, when there is one.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ParameterError::Validation(error) => Some(error.field()),
            ParameterError::Configuration(_) => Some("population"),
            ParameterError::Parse(ParseError::InvalidFieldType { key, .. }) => Some(*key),
            ParameterError::Parse(_) => Some("date_first_hospitalized"),
            ParameterError::JsonError(_) => None,
        }
    }
}

impl From<ValidationError> for ParameterError {
    fn from(error: ValidationError) -> Self {
        ParameterError::Validation(error)
    }
}

impl From<ConfigurationError> for ParameterError {
    fn from(error: ConfigurationError) -> Self {
        ParameterError::Configuration(error)
    }
}

impl From<ParseError> for ParameterError {
    fn from(error: ParseError) -> Self {
        ParameterError::Parse(error)
    }
}

impl From<serde_json::Error> for ParameterError {
    fn from(error: serde_json::Error) -> Self {
        ParameterError::JsonError(error)
    }
}

impl std::error::Error for ParameterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParameterError::Validation(error) => Some(error),
            ParameterError::Configuration(error) => Some(error),
            ParameterError::Parse(error) => Some(error),
            ParameterError::JsonError(error) => Some(error),
        }
    }
}

impl Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParameterError::Validation(error) => write!(f, "Validation error: {error}"),
            ParameterError::Configuration(error) => write!(f, "Configuration error: {error}"),
            ParameterError::Parse(error) => write!(f, "Parse error: {error}"),
            ParameterError::JsonError(error) => write!(f, "JSON error: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_message_names_field_and_constraint() {
        let error = ValidationError::new("market_share", 1.5, Constraint::Rate);
        assert_eq!(
            error.to_string(),
            "value 1.5 provided for market_share must be in the interval [0, 1]"
        );
        assert_eq!(error.field(), "market_share");
        assert_eq!(error.value(), "1.5");
    }

    #[test]
    fn parameter_error_reports_field() {
        let error: ParameterError =
            ValidationError::new("n_days", 0, Constraint::StrictlyPositive).into();
        assert_eq!(error.field(), Some("n_days"));

        let error: ParameterError = ConfigurationError::MissingPopulationSource.into();
        assert_eq!(error.field(), Some("population"));

        let error: ParameterError = ParseError::InvalidDate {
            year: 2021,
            month: 13,
            day: 1,
        }
        .into();
        assert_eq!(error.field(), Some("date_first_hospitalized"));
        assert_eq!(
            error.to_string(),
            "Parse error: 2021-13-1 is not a valid calendar date"
        );
    }

    #[test]
    fn json_error_has_source() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = ParameterError::from(json_error);
        assert!(std::error::Error::source(&error).is_some());
        assert_eq!(error.field(), None);
    }
}
