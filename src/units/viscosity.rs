use super::UnitDef;

/// 점도 단위 테이블. 내부 기준은 kg/m-s이다.
pub const VISCOSITY_UNITS: &[UnitDef] = &[
    UnitDef::scale("cps", "cP", 1.0 / 1000.0),
    UnitDef::scale("kg/m-s", "kg/m-s", 1.0),
];

/// 주어진 점도를 kg/m-s로 환산한다. 모르는 단위는 값을 그대로 돌려준다.
pub fn to_kg_per_m_s(value: f64, unit: &str) -> f64 {
    match super::find(VISCOSITY_UNITS, unit) {
        Some(def) => def.to_base(value),
        None => value,
    }
}

/// kg/m-s 값을 원하는 단위로 환산한다. 모르는 단위는 값을 그대로 돌려준다.
pub fn from_kg_per_m_s(value_base: f64, unit: &str) -> f64 {
    match super::find(VISCOSITY_UNITS, unit) {
        Some(def) => def.from_base(value_base),
        None => value_base,
    }
}

/// 점도를 내부 기준 단위(kg/m-s)로 변환한다.
pub fn convert_viscosity(value: f64, unit: &str) -> f64 {
    to_kg_per_m_s(value, unit)
}
