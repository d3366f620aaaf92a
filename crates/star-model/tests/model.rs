//! Tests for star-model validation rules.

use star_model::{
    Field, GreekLetter, Hemisphere, StarCandidate, ValidationContext, ValidationError,
    absolute_magnitude,
};

fn candidate(hemisphere: &str, degrees: i32) -> StarCandidate {
    StarCandidate {
        name: "VEG0001".to_string(),
        hemisphere: hemisphere.to_string(),
        declination_degrees: degrees,
        declination_minutes: 47,
        declination_seconds: 1.3,
        right_ascension_hours: 18,
        right_ascension_minutes: 36,
        right_ascension_seconds: 56,
        apparent_magnitude: 0.03,
        distance_ly: 25.04,
        constellation: "Lyra".to_string(),
        temperature: 9330.0,
        mass: 2.1,
    }
}

#[test]
fn declination_must_match_hemisphere() {
    let ctx = ValidationContext::new();

    let err = candidate("Northern", -1).validate(&ctx).unwrap_err();
    assert_eq!(err.field(), Some(Field::DeclinationDegrees));
    assert!(candidate("Northern", 90).validate(&ctx).is_ok());

    let err = candidate("Southern", 1).validate(&ctx).unwrap_err();
    assert_eq!(err.field(), Some(Field::DeclinationDegrees));
    assert!(candidate("Southern", -90).validate(&ctx).is_ok());
}

#[test]
fn unknown_hemisphere_is_rejected() {
    let err = candidate("equator", 10)
        .validate(&ValidationContext::new())
        .unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnknownHemisphere {
            input: "equator".to_string()
        }
    );
}

#[test]
fn hemisphere_checked_before_coordinates() {
    let mut c = candidate("X", 10);
    c.declination_minutes = 75;
    assert!(matches!(
        c.validate(&ValidationContext::new()),
        Err(ValidationError::UnknownHemisphere { .. })
    ));
}

#[test]
fn validated_star_carries_derived_magnitude() {
    let validated = candidate("N", 38)
        .validate(&ValidationContext::new())
        .unwrap();
    let star = validated.designate(GreekLetter::Alpha);
    let expected = absolute_magnitude(0.03, 25.04).unwrap();
    assert_eq!(star.absolute_magnitude(), expected);
    assert_eq!(star.hemisphere(), Hemisphere::Northern);
    assert_eq!(star.designation().to_string(), "Alpha Lyra");
}

#[test]
fn absolute_magnitude_is_deterministic() {
    let inputs = [(-26.74, 0.0000158), (0.03, 25.04), (15.0, 1.0e6), (-1.46, 8.6)];
    for (m, d) in inputs {
        let first = absolute_magnitude(m, d).unwrap();
        let second = absolute_magnitude(m, d).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }
}

#[test]
fn hemisphere_serializes_by_name() {
    let json = serde_json::to_string(&Hemisphere::Southern).expect("serialize hemisphere");
    assert_eq!(json, "\"Southern\"");
    let round: Hemisphere = serde_json::from_str(&json).expect("deserialize hemisphere");
    assert_eq!(round, Hemisphere::Southern);
}
