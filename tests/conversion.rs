//! 변환 디스패처와 단위 레지스트리 회귀 테스트.
use instrument_engineering_toolbox::conversion::{convert, lookup, ConversionError};
use instrument_engineering_toolbox::quantity::QuantityKind;
use instrument_engineering_toolbox::units;

#[test]
fn length_scenarios() {
    assert!((convert(QuantityKind::Length, 1.0, "in") - 25.4).abs() < 1e-12);
    assert!((convert(QuantityKind::Length, 2.0, "ft") - 609.6).abs() < 1e-12);
    assert!((convert(QuantityKind::Length, 5.0, "m") - 5000.0).abs() < 1e-12);
}

#[test]
fn volume_scenarios() {
    assert!((convert(QuantityKind::Volume, 1.0, "L") - 1000.0).abs() < 1e-12);
    assert!((convert(QuantityKind::Volume, 2.0, "ft3") - 56633.693184).abs() < 1e-6);
    assert!((convert(QuantityKind::Volume, 1.0, "liter") - 1000.0).abs() < 1e-12);
}

#[test]
fn flow_rate_scenarios() {
    assert!((convert(QuantityKind::FlowRate, 60.0, "lph") - 1.0).abs() < 1e-12);
    assert!((convert(QuantityKind::FlowRate, 10.0, "bpd") - 1.104078437).abs() < 1e-9);
}

#[test]
fn viscosity_and_density_scenarios() {
    assert!((convert(QuantityKind::Viscosity, 1000.0, "cps") - 1.0).abs() < 1e-12);
    assert!((convert(QuantityKind::Density, 1.0, "lbs/ft3") - 16.018463).abs() < 1e-9);
}

#[test]
fn affine_law_matches_table() {
    for kind in QuantityKind::ALL {
        for def in units::units_for(kind) {
            let got = convert(kind, 2.5, def.id);
            assert!(
                (got - (2.5 * def.factor + def.offset)).abs() < 1e-12,
                "{kind:?} {}",
                def.id
            );
        }
    }
}

#[test]
fn registry_preserves_dropdown_order() {
    let ids: Vec<&str> = units::units_for(QuantityKind::Length)
        .iter()
        .map(|def| def.id)
        .collect();
    assert_eq!(ids, ["in", "ft", "mm", "m"]);

    let ids: Vec<&str> = units::units_for(QuantityKind::Volume)
        .iter()
        .map(|def| def.id)
        .collect();
    assert_eq!(ids, ["cc", "ml", "L", "m3", "in3", "ft3", "cm3", "liter"]);

    let ids: Vec<&str> = units::units_for(QuantityKind::Pressure)
        .iter()
        .map(|def| def.id)
        .collect();
    assert_eq!(ids, ["psia", "psig", "bar", "atm"]);

    let ids: Vec<&str> = units::units_for(QuantityKind::FlowRate)
        .iter()
        .map(|def| def.id)
        .collect();
    assert_eq!(ids, ["lpm", "lph", "bpd"]);
}

#[test]
fn flow_rate_labels_follow_ui() {
    let labels: Vec<&str> = units::units_for(QuantityKind::FlowRate)
        .iter()
        .map(|def| def.label)
        .collect();
    assert_eq!(labels, ["NLPM", "NLPH", "BPD"]);
    assert_eq!(units::units_for(QuantityKind::Viscosity)[0].label, "cP");
}

#[test]
fn lookup_rejects_unknown_unit() {
    let err = lookup(QuantityKind::FlowRate, "gph").unwrap_err();
    match err {
        ConversionError::UnknownUnit(u) => assert_eq!(u, "gph"),
    }
    assert!(lookup(QuantityKind::Pressure, "psig").is_ok());
}
