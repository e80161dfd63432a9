use super::UnitDef;

/// 밀도 단위 테이블. 내부 기준은 kg/m3이다.
pub const DENSITY_UNITS: &[UnitDef] = &[
    UnitDef::scale("lbs/ft3", "lbs/ft3", 16.018463),
    UnitDef::scale("kg/m3", "kg/m3", 1.0),
];

/// 주어진 밀도를 kg/m3로 환산한다. 모르는 단위는 값을 그대로 돌려준다.
pub fn to_kg_per_m3(value: f64, unit: &str) -> f64 {
    match super::find(DENSITY_UNITS, unit) {
        Some(def) => def.to_base(value),
        None => value,
    }
}

/// kg/m3 값을 원하는 단위로 환산한다. 모르는 단위는 값을 그대로 돌려준다.
pub fn from_kg_per_m3(value_base: f64, unit: &str) -> f64 {
    match super::find(DENSITY_UNITS, unit) {
        Some(def) => def.from_base(value_base),
        None => value_base,
    }
}

/// 밀도를 내부 기준 단위(kg/m3)로 변환한다.
pub fn convert_density(value: f64, unit: &str) -> f64 {
    to_kg_per_m3(value, unit)
}
