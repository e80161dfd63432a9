use crate::quantity::{QuantityKind, QuantityValue};
use crate::units::{self, UnitDef};

/// 단위 검증 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위의 값을 해당 물리량의 내부 기준 단위로 환산한다.
///
/// 단위 문자열은 레지스트리의 id(`in`, `lpm`, `psig` 등)를 그대로 사용한다.
/// 모르는 단위는 실패 대신 값을 그대로 돌려주므로, 단위 id를 신뢰해야 하는
/// 호출자는 [`lookup`]으로 먼저 검증해야 한다.
pub fn convert(kind: QuantityKind, value: f64, unit_str: &str) -> f64 {
    match kind {
        QuantityKind::Length => units::convert_length(value, unit_str),
        QuantityKind::FlowRate => units::convert_flow_rate(value, unit_str),
        QuantityKind::Viscosity => units::convert_viscosity(value, unit_str),
        QuantityKind::Density => units::convert_density(value, unit_str),
        QuantityKind::Volume => units::convert_volume(value, unit_str),
        QuantityKind::Pressure => units::convert_pressure(value, unit_str),
    }
}

/// 내부 기준 단위 값을 원하는 표시 단위로 환산한다. 모르는 단위는 값을 그대로 돌려준다.
pub fn convert_from_base(kind: QuantityKind, value_base: f64, unit_str: &str) -> f64 {
    match kind {
        QuantityKind::Length => units::length::from_millimeter(value_base, unit_str),
        QuantityKind::FlowRate => units::flow_rate::from_lpm(value_base, unit_str),
        QuantityKind::Viscosity => units::viscosity::from_kg_per_m_s(value_base, unit_str),
        QuantityKind::Density => units::density::from_kg_per_m3(value_base, unit_str),
        QuantityKind::Volume => units::volume::from_cubic_centimeter(value_base, unit_str),
        QuantityKind::Pressure => units::pressure::from_psia(value_base, unit_str),
    }
}

/// 입력을 내부 기준 단위로 정규화한 컨테이너를 만든다.
pub fn normalize(kind: QuantityKind, value: f64, unit_str: &str) -> QuantityValue {
    QuantityValue {
        kind,
        value_base: convert(kind, value, unit_str),
    }
}

/// 단위 id를 레지스트리에서 찾는다. 변환 함수와 달리 모르는 단위는 오류로 돌려준다.
pub fn lookup(kind: QuantityKind, unit_str: &str) -> Result<&'static UnitDef, ConversionError> {
    units::units_for(kind)
        .iter()
        .find(|def| def.id == unit_str)
        .ok_or_else(|| ConversionError::UnknownUnit(unit_str.to_string()))
}

/// 물리량의 내부 기준 단위 id를 반환한다.
pub fn base_unit_id(kind: QuantityKind) -> &'static str {
    match kind {
        QuantityKind::Length => "mm",
        QuantityKind::FlowRate => "lpm",
        QuantityKind::Viscosity => "kg/m-s",
        QuantityKind::Density => "kg/m3",
        QuantityKind::Volume => "cm3",
        QuantityKind::Pressure => "psia",
    }
}
