use std::path::PathBuf;

use assert_approx_eq::assert_approx_eq;
use chime_params::chrono::NaiveDate;
use chime_params::prelude::*;
use chime_params::{ConfigurationError, ParseError};

fn read_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}

#[test]
fn request_and_config_describe_the_same_projection() {
    let from_request = construct_parameters_from_json(&read_fixture("request_penn.json")).unwrap();
    let config = ParametersConfig::from_json_str(&read_fixture("config_regions.json")).unwrap();
    let from_config = Parameters::try_from(config).unwrap();

    // Same total, different sources.
    assert_eq!(from_request.population(), 4_119_405);
    assert_eq!(from_config.population(), from_request.population());
    assert_eq!(
        from_request.population_source(),
        &PopulationSource::Explicit(4_119_405)
    );
    assert_eq!(from_config.region().unwrap().get("philly"), Some(1_581_000));

    for kind in [
        DispositionKind::Hospitalized,
        DispositionKind::Icu,
        DispositionKind::Ventilated,
    ] {
        assert_eq!(from_request.disposition(kind), from_config.disposition(kind));
    }
    assert_eq!(
        from_request.date_first_hospitalized(),
        from_config.date_first_hospitalized()
    );
    assert_approx_eq!(from_request.market_share(), from_config.market_share());
    assert_approx_eq!(
        from_request.relative_contact_rate(),
        from_config.relative_contact_rate()
    );
    assert_eq!(from_config.n_days(), 60);
    assert_eq!(from_config.doubling_time(), Some(4.0));
}

#[test]
fn empty_request_uses_defaults() {
    let parameters = construct_parameters(&chime_params::serde_json::Map::new()).unwrap();
    assert_eq!(parameters.population(), 10_000);
    assert_eq!(parameters.n_days(), 100);
    assert_eq!(
        parameters.date_first_hospitalized(),
        Some(NaiveDate::from_ymd_opt(2020, 7, 3).unwrap())
    );
    assert_eq!(parameters.hospitalized(), Disposition::new(0.0, 0.0));
    assert_eq!(
        parameters.disposition_by_name("hospitalized"),
        Some(Disposition::new(0.0, 0.0))
    );
}

#[test]
fn invalid_month_is_a_date_error() {
    let result = construct_parameters_from_json(&read_fixture("request_bad_date.json"));
    match result {
        Err(error @ ParameterError::Parse(ParseError::InvalidDate { .. })) => {
            assert_eq!(error.field(), Some("date_first_hospitalized"));
        }
        other => panic!("expected an invalid date, got {other:?}"),
    }
}

#[test]
fn population_sources_are_exclusive() {
    let dispositions = (
        Disposition::new(0.025, 7.0),
        Disposition::new(0.0075, 9.0),
        Disposition::new(0.005, 10.0),
    );
    let builder = ParametersBuilder::new(0, dispositions.0, dispositions.1, 0.0, dispositions.2);

    let both = builder
        .clone()
        .population(1000)
        .region(Regions::new([("north", 500), ("south", 300)]))
        .build();
    assert!(matches!(
        both,
        Err(ParameterError::Configuration(
            ConfigurationError::ConflictingPopulationSource { .. }
        ))
    ));

    let neither = builder.clone().build();
    assert!(matches!(
        neither,
        Err(ParameterError::Configuration(
            ConfigurationError::MissingPopulationSource
        ))
    ));

    let regions = builder
        .region(Regions::new([("north", 500), ("south", 300)]))
        .build()
        .unwrap();
    assert_eq!(regions.population(), 800);
    assert_eq!(regions.region().unwrap().get("south"), Some(300));
}

#[test]
fn identical_requests_build_equal_parameters() {
    let request = read_fixture("request_penn.json");
    let first = construct_parameters_from_json(&request).unwrap();
    let second = construct_parameters_from_json(&request).unwrap();
    assert_eq!(first, second);
}

#[test]
fn parameters_export_as_json() {
    let config = ParametersConfig::from_json_str(&read_fixture("config_regions.json")).unwrap();
    let parameters = Parameters::try_from(config).unwrap();
    let exported = chime_params::serde_json::to_value(&parameters).unwrap();
    assert_eq!(
        exported["population_source"]["from_regions"]["regions"]["bucks"],
        628_341
    );
    assert_eq!(exported["date_first_hospitalized"], "2020-03-07");
    assert_eq!(exported["max_y_axis"], chime_params::serde_json::Value::Null);
}
