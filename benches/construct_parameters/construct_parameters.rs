use chime_params::serde_json::{json, Map, Value};
use chime_params::{construct_parameters, Disposition, ParametersBuilder, Regions};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn penn_request() -> Map<String, Value> {
    match json!({
        "dateOfFirstHospitalizedCase": "2020-3-7",
        "population": 4_119_405,
        "currentHospitalized": 69,
        "hospitalMarketShare": 0.15,
        "hospitalizationPercent": 0.025,
        "averageHospitalLengthOfStay": 7,
        "icuNeedPercent": 0.0075,
        "averageDaysInICU": 9,
        "ventilationNeedPercent": 0.005,
        "averageDaysOnVentilator": 10,
        "socialDistancing": 0.3,
    }) {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let request = penn_request();
    c.bench_function("construct_parameters", |bencher| {
        bencher.iter(|| construct_parameters(black_box(&request)));
    });

    let regions = Regions::new((0..3_000).map(|county| (format!("county-{county}"), 1_000)));
    c.bench_function("build from 3000 regions", |bencher| {
        bencher.iter(|| {
            ParametersBuilder::new(
                0,
                Disposition::new(0.025, 7.0),
                Disposition::new(0.0075, 9.0),
                0.3,
                Disposition::new(0.005, 10.0),
            )
            .region(black_box(regions.clone()))
            .build()
        });
    });
}

criterion_group!(parameter_benches, criterion_benchmark);
criterion_main!(parameter_benches);
