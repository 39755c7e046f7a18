//! Validated inputs for hospital capacity projections
//!
//! A capacity projection estimates hospital, ICU, and ventilator demand over time for a
//! population. Its inputs usually arrive as loosely typed request data, and none of the projection
//! math should run until every input has been checked. This crate is that check: it turns raw
//! inputs into an immutable, fully validated [`Parameters`] value, or explains exactly which input
//! is wrong.
//!
//! There are three ways in:
//! * [`ParametersBuilder`] for typed callers.
//! * [`construct_parameters`] for untyped request data keyed by form field names, such as
//!   `hospitalizationPercent` or `numberOfDaysToProject`.
//! * [`ParametersConfig`] for configuration documents that use the parameter names directly.
//!
//! All three end in [`ParametersBuilder::build`], which applies the validators in
//! [`validators`] to every field and enforces that the population is given either explicitly or
//! as a sum over [`Regions`], never both.
//!
//! ```rust
//! use chime_params::construct_parameters_from_json;
//!
//! let parameters = construct_parameters_from_json(
//!     r#"{"population": 3600000, "hospitalizationPercent": 0.025, "averageHospitalLengthOfStay": 7}"#,
//! )
//! .unwrap();
//! assert_eq!(parameters.population(), 3_600_000);
//! assert_eq!(parameters.label("icu"), Some("ICU"));
//! ```
pub mod config;
pub mod disposition;
pub mod error;
pub mod log;
pub mod parameters;
pub mod prelude;
pub mod regions;
pub mod request;
pub mod validators;

pub use config::ParametersConfig;
pub use disposition::{Disposition, DispositionKind};
pub use error::{ConfigurationError, Constraint, ParameterError, ParseError, ValidationError};
pub use parameters::{Parameters, ParametersBuilder, PopulationSource};
pub use regions::Regions;
pub use request::{construct_parameters, construct_parameters_from_json};

// Re-exports for callers that build request maps or dates themselves.
pub use chrono;
pub use serde_json;
