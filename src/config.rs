use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::conversion::{self, ConversionError};
use crate::quantity::QuantityKind;

/// 각 물리량별 기본 단위 id를 담는다. 입력 폼의 초기 선택값으로 쓰인다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub length: String,
    pub flow_rate: String,
    pub viscosity: String,
    pub density: String,
    pub volume: String,
    pub pressure: String,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        // 각 드롭다운의 첫 항목을 초기 선택값으로 쓴다.
        Self {
            length: "in".to_string(),
            flow_rate: "lpm".to_string(),
            viscosity: "cps".to_string(),
            density: "lbs/ft3".to_string(),
            volume: "cc".to_string(),
            pressure: "psia".to_string(),
        }
    }
}

impl DefaultUnits {
    /// 물리량에 해당하는 기본 단위 id를 반환한다.
    pub fn for_kind(&self, kind: QuantityKind) -> &str {
        match kind {
            QuantityKind::Length => &self.length,
            QuantityKind::FlowRate => &self.flow_rate,
            QuantityKind::Viscosity => &self.viscosity,
            QuantityKind::Density => &self.density,
            QuantityKind::Volume => &self.volume,
            QuantityKind::Pressure => &self.pressure,
        }
    }

    /// 기본 단위 id를 바꾼다. 레지스트리에 없는 id는 거부한다.
    pub fn set_for_kind(&mut self, kind: QuantityKind, unit: &str) -> Result<(), ConversionError> {
        conversion::lookup(kind, unit)?;
        let slot = match kind {
            QuantityKind::Length => &mut self.length,
            QuantityKind::FlowRate => &mut self.flow_rate,
            QuantityKind::Viscosity => &mut self.viscosity,
            QuantityKind::Density => &mut self.density,
            QuantityKind::Volume => &mut self.volume,
            QuantityKind::Pressure => &mut self.pressure,
        };
        *slot = unit.to_string();
        Ok(())
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 표시 언어(ko/en). 없으면 시스템 로케일을 따른다.
    pub language: Option<String>,
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            default_units: DefaultUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
