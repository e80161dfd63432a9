//! psig 게이지/절대 변환 회귀 테스트.
use instrument_engineering_toolbox::units::pressure::{convert_pressure, from_psia, to_psia};

#[test]
fn psig_zero_is_one_atmosphere_absolute() {
    // 0 psig => 14.7 psia
    assert!((convert_pressure(0.0, "psig") - 14.7).abs() < 1e-12);
}

#[test]
fn psig_adds_atmospheric_offset() {
    // 게이지 압력은 배율이 아니라 오프셋으로 환산된다
    assert!((convert_pressure(100.0, "psig") - 114.7).abs() < 1e-9);
    assert!((convert_pressure(-14.7, "psig")).abs() < 1e-12);
}

#[test]
fn bar_and_atm_are_pure_factors() {
    assert!((convert_pressure(1.0, "bar") - 14.503774).abs() < 1e-9);
    assert!((convert_pressure(1.0, "atm") - 14.695949).abs() < 1e-9);
    assert_eq!(convert_pressure(0.0, "bar"), 0.0);
    assert_eq!(convert_pressure(0.0, "atm"), 0.0);
}

#[test]
fn psia_roundtrip_through_psig() {
    // 14.7 psia => 0 psig => 14.7 psia
    let psig = from_psia(14.7, "psig");
    assert!(psig.abs() < 1e-12, "expected ~0 psig, got {psig}");
    let back = to_psia(psig, "psig");
    assert!((back - 14.7).abs() < 1e-12);
}
