//! 길이/무게/시간 변환 회귀 테스트.
use gradegrid::conversion::{convert, try_convert, ConversionError, ConversionRequest};
use gradegrid::quantity::UnitFamily;
use gradegrid::units::{convert_linear, LengthUnit, LinearUnit, TimeUnit, WeightUnit};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tol {tol})"
    );
}

fn round_trip_all<U: LinearUnit>() {
    for &a in U::ALL {
        for &b in U::ALL {
            for x in [0.0, 1.0, 12.5, 1234.0] {
                let back = convert_linear(convert_linear(x, a, b), b, a);
                assert_close(back, x, 1e-9 * x.max(1.0));
            }
        }
    }
}

#[test]
fn every_pair_round_trips() {
    round_trip_all::<LengthUnit>();
    round_trip_all::<WeightUnit>();
    round_trip_all::<TimeUnit>();
}

#[test]
fn same_unit_returns_input_exactly() {
    for &u in LengthUnit::ALL {
        assert_eq!(convert_linear(0.1, u, u), 0.1);
    }
    let req = ConversionRequest::new(UnitFamily::Time, "month", "month", 7.3);
    assert_eq!(convert(&req).unwrap().value, 7.3);
}

#[test]
fn one_meter_in_feet() {
    let req = ConversionRequest::new(UnitFamily::Length, "meter", "foot", 1.0);
    let out = convert(&req).unwrap();
    assert_close(out.value, 3.2808, 1e-4);
    assert_eq!(
        out.formula,
        "1 Meters (m) = 1 × 1 ÷ 0.3048 = 3.2808 Feet (ft)"
    );
}

#[test]
fn one_kilogram_in_pounds() {
    let req = ConversionRequest::new(UnitFamily::Weight, "kilogram", "pound", 1.0);
    assert_close(convert(&req).unwrap().value, 2.2046, 1e-4);
}

#[test]
fn hours_to_minutes_uses_aliases() {
    let req = ConversionRequest::new(UnitFamily::Time, "hr", "min", 2.0);
    assert_close(convert(&req).unwrap().value, 120.0, 1e-12);
}

#[test]
fn unknown_unit_has_no_result() {
    let req = ConversionRequest::new(UnitFamily::Length, "meter", "furlong", 1.0);
    assert!(convert(&req).is_none());
    assert_eq!(
        try_convert(&req),
        Err(ConversionError::UnknownUnit("furlong".into()))
    );
}

#[test]
fn units_from_another_family_are_rejected() {
    let req = ConversionRequest::new(UnitFamily::Weight, "meter", "pound", 1.0);
    assert!(convert(&req).is_none());
}

#[test]
fn non_finite_input_has_no_result() {
    let req = ConversionRequest::new(UnitFamily::Length, "meter", "foot", f64::NAN);
    assert!(convert(&req).is_none());
    let req = ConversionRequest::new(UnitFamily::Length, "meter", "foot", f64::INFINITY);
    assert!(matches!(
        try_convert(&req),
        Err(ConversionError::NonFiniteInput(_))
    ));
}
