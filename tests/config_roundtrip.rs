//! 설정 직렬화 및 기본 단위 검증 회귀 테스트.
use instrument_engineering_toolbox::config::{Config, DefaultUnits};
use instrument_engineering_toolbox::quantity::QuantityKind;

#[test]
fn config_roundtrips_through_toml() {
    let mut cfg = Config::default();
    cfg.language = Some("en".to_string());
    cfg.default_units.volume = "ft3".to_string();
    let text = toml::to_string_pretty(&cfg).unwrap();
    let back: Config = toml::from_str(&text).unwrap();
    assert_eq!(back.language.as_deref(), Some("en"));
    assert_eq!(back.default_units.volume, "ft3");
    assert_eq!(back.default_units.length, "in");
}

#[test]
fn default_unit_change_is_validated_against_registry() {
    let mut units = DefaultUnits::default();
    assert!(units.set_for_kind(QuantityKind::Pressure, "bar").is_ok());
    assert_eq!(units.for_kind(QuantityKind::Pressure), "bar");
    assert!(units.set_for_kind(QuantityKind::Pressure, "mmhg").is_err());
    assert_eq!(units.for_kind(QuantityKind::Pressure), "bar");
}
