//! Unit tests for feature encoding, input validation and error display.
mod common;
use plantid::features::{FEATURE_NAMES, HEIGHT_FIELD, parse_measurement};
use plantid::prelude::*;

#[test]
fn test_stem_quality_codes() {
    assert_eq!(StemQuality::Thin.code(), 0);
    assert_eq!(StemQuality::Medium.code(), 1);
    assert_eq!(StemQuality::Thick.code(), 2);
    assert_eq!(StemQuality::default(), StemQuality::Medium);
}

#[test]
fn test_stem_quality_parsing_is_case_insensitive() {
    assert_eq!("Thick".parse::<StemQuality>(), Ok(StemQuality::Thick));
    assert_eq!("  thin ".parse::<StemQuality>(), Ok(StemQuality::Thin));
    assert_eq!("MEDIUM".parse::<StemQuality>(), Ok(StemQuality::Medium));
    for stem in StemQuality::ALL {
        assert_eq!(stem.to_string().parse::<StemQuality>(), Ok(stem));
    }
}

#[test]
fn test_unknown_stem_quality_is_rejected() {
    let err = "woody".parse::<StemQuality>().unwrap_err();
    assert_eq!(err, InputError::UnknownStemQuality("woody".to_string()));

    let err = encode(50.0, 5.0, "").unwrap_err();
    assert!(matches!(err, InputError::UnknownStemQuality(_)));
}

#[test]
fn test_encode_produces_fixed_order_vector() {
    let features = encode(50.0, 5.0, "Thick").unwrap();
    assert_eq!(features.values(), &[50.0, 5.0, 2.0]);
    assert_eq!(FEATURE_NAMES, ["height_cm", "leaf_width_cm", "stem_quality_code"]);
}

#[test]
fn test_encode_is_deterministic() {
    let first = encode(123.4, 6.7, "medium").unwrap();
    for _ in 0..10 {
        assert_eq!(encode(123.4, 6.7, "medium").unwrap(), first);
    }
}

#[test]
fn test_non_positive_measurements_are_rejected() {
    for bad in [0.0, -1.0, -0.001] {
        assert!(matches!(
            encode(bad, 5.0, "thin"),
            Err(InputError::NonPositive { field: "height", .. })
        ));
        assert!(matches!(
            encode(50.0, bad, "thin"),
            Err(InputError::NonPositive { field: "leaf width", .. })
        ));
    }
}

#[test]
fn test_non_finite_measurements_are_rejected() {
    assert!(matches!(
        Measurements::new(f64::NAN, 5.0, StemQuality::Thin),
        Err(InputError::NotFinite { .. })
    ));
    assert!(matches!(
        Measurements::new(50.0, f64::INFINITY, StemQuality::Thin),
        Err(InputError::NotFinite { .. })
    ));
}

#[test]
fn test_parse_measurement() {
    assert_eq!(parse_measurement(HEIGHT_FIELD, " 42.5 "), Ok(42.5));
    let err = parse_measurement(HEIGHT_FIELD, "tall").unwrap_err();
    assert_eq!(
        err,
        InputError::NotANumber {
            field: "height",
            raw: "tall".to_string()
        }
    );
}

#[test]
fn test_input_limits() {
    let limits = InputLimits::default();
    let inside = Measurements::new(80.0, 4.0, StemQuality::Medium).unwrap();
    assert!(limits.check(&inside).is_ok());

    let boundary = Measurements::new(10.0, 20.0, StemQuality::Medium).unwrap();
    assert!(limits.check(&boundary).is_ok());

    let too_tall = Measurements::new(450.0, 4.0, StemQuality::Medium).unwrap();
    assert!(matches!(
        limits.check(&too_tall),
        Err(InputError::OutOfRange { field: "height", .. })
    ));
}

#[test]
fn test_error_display() {
    let err = InputError::NonPositive {
        field: "height",
        value: -3.0,
    };
    assert!(err.to_string().contains("height"));
    assert!(err.to_string().contains("-3"));

    let err = InputError::UnknownStemQuality("woody".to_string());
    assert!(err.to_string().contains("woody"));
    assert!(err.to_string().contains("thin, medium, thick"));

    assert!(TrainError::EmptyTrainingSet.to_string().contains("empty"));
    assert!(ModelError::NotTrained.to_string().contains("No trained model"));

    let err = KnowledgeError::UnknownSpecies("fern".to_string());
    assert!(err.to_string().contains("fern"));
}
