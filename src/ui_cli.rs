use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::units::{self, UnitDef};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    UnitConversion,
    UnitList,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_LIST));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::UnitConversion),
            "2" => return Ok(MenuChoice::UnitList),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 단위 변환 메뉴를 처리한다. 입력값을 내부 기준 단위로 정규화해 보여준다.
pub fn handle_unit_conversion(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_quantity(n) {
                break kind;
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let default_unit = cfg.default_units.for_kind(kind).to_string();
    let unit = read_unit(tr, kind, &default_unit)?;
    let q = conversion::normalize(kind, value, unit.id);
    println!(
        "{} {} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        q.value_base,
        conversion::base_unit_id(kind)
    );
    let target = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TARGET))?;
    let target = target.trim();
    if !target.is_empty() {
        match conversion::lookup(kind, target) {
            Ok(def) => println!(
                "{} {} {}",
                tr.t(keys::UNIT_CONVERSION_RESULT),
                def.from_base(q.value_base),
                def.id
            ),
            Err(err) => println!("{} {}", tr.t(keys::ERROR_PREFIX), err),
        }
    }
    Ok(())
}

/// 물리량별 단위 테이블을 표시 순서 그대로 출력한다.
pub fn handle_unit_list(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_LIST_HEADING));
    for kind in QuantityKind::ALL {
        println!(
            "[{:?}] {} {}",
            kind,
            tr.t(keys::UNIT_LIST_BASE),
            conversion::base_unit_id(kind)
        );
        for def in units::units_for(kind) {
            if def.offset != 0.0 {
                println!("  {} ({}): +{}", def.id, def.label, def.offset);
            } else {
                println!("  {} ({}): x{}", def.id, def.label, def.factor);
            }
        }
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. 물리량별 기본 단위를 변경한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}: {:?}",
        tr.t(keys::SETTINGS_CURRENT_DEFAULTS),
        cfg.default_units
    );
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    let kind = match sel.trim().parse::<u32>().ok().and_then(map_quantity) {
        Some(kind) => kind,
        None => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    let current = cfg.default_units.for_kind(kind).to_string();
    let unit = read_unit(tr, kind, &current)?;
    cfg.default_units.set_for_kind(kind, unit.id)?;
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Length),
        2 => Some(QuantityKind::FlowRate),
        3 => Some(QuantityKind::Viscosity),
        4 => Some(QuantityKind::Density),
        5 => Some(QuantityKind::Volume),
        6 => Some(QuantityKind::Pressure),
        _ => None,
    }
}

/// 단위 id를 입력받아 레지스트리에서 검증한다. 빈 입력은 기본값으로 처리한다.
fn read_unit(
    tr: &Translator,
    kind: QuantityKind,
    default_id: &str,
) -> Result<&'static UnitDef, AppError> {
    let ids: Vec<&str> = units::units_for(kind).iter().map(|def| def.id).collect();
    println!("{} {}", tr.t(keys::UNIT_PROMPT_AVAILABLE), ids.join(", "));
    loop {
        let sel = read_line(&format!("{} [{default_id}]: ", tr.t(keys::UNIT_PROMPT_ID)))?;
        let sel = sel.trim();
        let id = if sel.is_empty() { default_id } else { sel };
        match conversion::lookup(kind, id) {
            Ok(def) => return Ok(def),
            Err(err) => println!("{} {}", tr.t(keys::ERROR_PREFIX), err),
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
