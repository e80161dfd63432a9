//! 기준 단위 항등 및 알 수 없는 단위 패스스루 회귀 테스트.
use instrument_engineering_toolbox::conversion::{self, convert};
use instrument_engineering_toolbox::quantity::QuantityKind;

#[test]
fn base_unit_is_identity_for_every_kind() {
    for kind in QuantityKind::ALL {
        let base = conversion::base_unit_id(kind);
        for v in [-3.5, 0.0, 1.0, 273.15, 1.0e6] {
            assert_eq!(convert(kind, v, base), v, "{kind:?} {base}");
        }
    }
}

#[test]
fn unknown_unit_passes_value_through() {
    for kind in QuantityKind::ALL {
        assert_eq!(convert(kind, 42.0, "not-a-real-unit"), 42.0, "{kind:?}");
    }
}

#[test]
fn unknown_unit_passes_through_from_base_too() {
    for kind in QuantityKind::ALL {
        assert_eq!(
            conversion::convert_from_base(kind, 42.0, "furlong"),
            42.0,
            "{kind:?}"
        );
    }
}

#[test]
fn non_finite_values_propagate() {
    assert!(convert(QuantityKind::Length, f64::NAN, "in").is_nan());
    assert_eq!(
        convert(QuantityKind::Pressure, f64::INFINITY, "bar"),
        f64::INFINITY
    );
}
