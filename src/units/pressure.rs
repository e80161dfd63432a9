use super::UnitDef;

const ATM_PSI: f64 = 14.7;

/// 압력 단위 테이블. 내부 기준은 psia(절대압)이다.
/// psig는 게이지 압력이므로 배율이 아니라 대기압 14.7 psi를 더하는 오프셋으로 환산한다.
pub const PRESSURE_UNITS: &[UnitDef] = &[
    UnitDef::scale("psia", "psia", 1.0),
    UnitDef::shift("psig", "psig", ATM_PSI),
    UnitDef::scale("bar", "bar", 14.503774),
    UnitDef::scale("atm", "atm", 14.695949),
];

/// 주어진 압력을 psia로 환산한다. 모르는 단위는 값을 그대로 돌려준다.
pub fn to_psia(value: f64, unit: &str) -> f64 {
    match super::find(PRESSURE_UNITS, unit) {
        Some(def) => def.to_base(value),
        None => value,
    }
}

/// psia 값을 원하는 단위로 환산한다. 모르는 단위는 값을 그대로 돌려준다.
pub fn from_psia(value_psia: f64, unit: &str) -> f64 {
    match super::find(PRESSURE_UNITS, unit) {
        Some(def) => def.from_base(value_psia),
        None => value_psia,
    }
}

/// 압력을 내부 기준 단위(psia)로 변환한다.
pub fn convert_pressure(value: f64, unit: &str) -> f64 {
    to_psia(value, unit)
}
