use std::io::{self, Write};
use std::path::PathBuf;

use crate::app::AppError;
use crate::catalog::{self, ToolDescriptor};
use crate::config::Config;
use crate::conversion::{self, ConversionRequest, ConversionResult};
use crate::export::{self, ExportFormat, ExportRecord};
use crate::gpa::{self, GpaMode, GpaRequest};
use crate::i18n::{fill_template, keys, Translator};
use crate::input::parse_number;
use crate::quantity::UnitFamily;

/// 변환 결과 카드 제목.
pub const CONVERTED_LABEL: &str = "Converted Value";
/// 단위 변환 결과 표시 자릿수.
pub const CONVERSION_DECIMALS: usize = 4;
/// 학점 계산 결과 표시 자릿수.
pub const GPA_DECIMALS: usize = 2;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Gpa,
    Conversion,
    Search,
    Settings,
    Exit,
}

/// 결과를 써넣을 파일과 형식.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTarget {
    pub path: PathBuf,
    pub format: ExportFormat,
}

/// 설정 하위 명령으로 바꿀 항목들. `None`은 그대로 둔다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsUpdate {
    pub dark_mode: Option<bool>,
    pub multiplier: Option<f64>,
    pub language: Option<String>,
    pub export_format: Option<String>,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_GPA,
        keys::MAIN_MENU_CONVERSION,
        keys::MAIN_MENU_SEARCH,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = match read_line(tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(err) if err.is_end_of_input() => return Ok(MenuChoice::Exit),
            Err(err) => return Err(err),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Gpa),
            "2" => return Ok(MenuChoice::Conversion),
            "3" => return Ok(MenuChoice::Search),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 학점 계산 메뉴를 처리한다.
pub fn handle_gpa(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::GPA_HEADING));
    println!("{}", tr.t(keys::GPA_OPTIONS));
    let mode = loop {
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        if let Some(mode) = sel
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| GpaMode::ALL.get(i).copied())
        {
            break mode;
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    };
    println!("{}", mode.title());

    let inputs = if mode.takes_list() {
        let mut values = Vec::new();
        loop {
            let prompt = fill_template(
                tr.t(keys::GPA_PROMPT_SEMESTER),
                &[("n", (values.len() + 1).to_string())],
            );
            let line = match read_line(&prompt) {
                Ok(line) => line,
                Err(err) if err.is_end_of_input() => break,
                Err(err) => return Err(err),
            };
            if line.trim().is_empty() {
                break;
            }
            values.push(line.trim().to_string());
        }
        values
    } else {
        vec![read_line(tr.t(keys::GPA_PROMPT_VALUE))?.trim().to_string()]
    };

    let request = GpaRequest::new(mode, &inputs);
    match gpa::compute(&request, &cfg.gpa_scale()) {
        Some(result) => {
            print_result(tr, mode.result_label(), mode.unit(), &result, GPA_DECIMALS);
            offer_export(tr, mode.result_label(), mode.unit(), &result)?;
        }
        None => println!("{}", tr.t(keys::NO_RESULT)),
    }
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONVERSION_HEADING));
    println!("{}", tr.t(keys::CONVERSION_OPTIONS));
    let family = loop {
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        if let Some(family) = sel
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| UnitFamily::ALL.get(i).copied())
        {
            break family;
        }
        println!("{}", tr.t(keys::CONVERSION_UNSUPPORTED));
    };
    println!("{}", family.title());
    println!("{}", tr.t(keys::CONVERSION_UNITS));
    for unit in family.units() {
        println!("  {:<12} {}", unit.id, unit.label);
    }

    let value_text = read_line(tr.t(keys::CONVERSION_PROMPT_VALUE))?;
    let (default_from, default_to) = family.default_units();
    let from = or_default(read_line(tr.t(keys::CONVERSION_PROMPT_FROM_UNIT))?, default_from);
    let to = or_default(read_line(tr.t(keys::CONVERSION_PROMPT_TO_UNIT))?, default_to);

    let Some(value) = parse_number(&value_text) else {
        println!("{}", tr.t(keys::NO_RESULT));
        return Ok(());
    };
    let request = ConversionRequest::new(family, &from, &to, value);
    match conversion::try_convert(&request) {
        Ok(result) => {
            let unit = target_symbol(family, &to);
            print_result(tr, CONVERTED_LABEL, unit, &result, CONVERSION_DECIMALS);
            offer_export(tr, CONVERTED_LABEL, unit, &result)?;
        }
        Err(err) => println!("{}: {err}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 도구 검색 메뉴를 처리한다.
pub fn handle_search(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SEARCH_HEADING));
    let query = read_line(tr.t(keys::SEARCH_PROMPT))?;
    run_search(tr, query.trim());
    Ok(())
}

/// 설정 메뉴를 처리한다. 값이 바뀌었으면 true를 돌려준다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    print_settings(tr, cfg);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let update = match sel.trim() {
        "" => return Ok(false),
        "1" => SettingsUpdate {
            dark_mode: Some(!cfg.dark_mode),
            ..SettingsUpdate::default()
        },
        "2" => SettingsUpdate {
            export_format: Some(read_line(tr.t(keys::SETTINGS_PROMPT_EXPORT_FORMAT))?),
            ..SettingsUpdate::default()
        },
        "3" => {
            let text = read_line(tr.t(keys::SETTINGS_PROMPT_MULTIPLIER))?;
            match parse_number(&text) {
                Some(m) => SettingsUpdate {
                    multiplier: Some(m),
                    ..SettingsUpdate::default()
                },
                None => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(false);
                }
            }
        }
        "4" => SettingsUpdate {
            language: Some(read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?),
            ..SettingsUpdate::default()
        },
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(false);
        }
    };
    match apply_settings(cfg, &update) {
        Ok(changed) => {
            print_settings(tr, cfg);
            Ok(changed)
        }
        Err(err) => {
            println!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            Ok(false)
        }
    }
}

/// `convert` 하위 명령. 결과가 없으면 오류로 돌려 종료 코드에 반영한다.
pub fn run_convert(
    tr: &Translator,
    family: &str,
    value: &str,
    from: &str,
    to: &str,
    export: Option<&ExportTarget>,
) -> Result<(), AppError> {
    let family =
        UnitFamily::parse(family).ok_or_else(|| AppError::UnknownFamily(family.to_string()))?;
    let value = parse_number(value).ok_or_else(|| AppError::InvalidNumber(value.to_string()))?;
    let request = ConversionRequest::new(family, from, to, value);
    let result = conversion::try_convert(&request)?;
    let unit = target_symbol(family, to);
    print_result(tr, CONVERTED_LABEL, unit, &result, CONVERSION_DECIMALS);
    if let Some(target) = export {
        export_to(tr, target, CONVERTED_LABEL, unit, &result)?;
    }
    Ok(())
}

/// `gpa` 하위 명령.
pub fn run_gpa(
    tr: &Translator,
    cfg: &Config,
    mode: &str,
    values: &[String],
    export: Option<&ExportTarget>,
) -> Result<(), AppError> {
    let mode = GpaMode::parse(mode).ok_or_else(|| AppError::UnknownMode(mode.to_string()))?;
    let result = compute_gpa(cfg, mode, values)?;
    print_result(tr, mode.result_label(), mode.unit(), &result, GPA_DECIMALS);
    if let Some(target) = export {
        export_to(tr, target, mode.result_label(), mode.unit(), &result)?;
    }
    Ok(())
}

/// 설정의 배율로 학점 계산을 수행한다. 유효한 입력이 없으면 `NoResult`.
pub fn compute_gpa(
    cfg: &Config,
    mode: GpaMode,
    values: &[String],
) -> Result<ConversionResult, AppError> {
    let request = GpaRequest::new(mode, values);
    gpa::compute(&request, &cfg.gpa_scale()).ok_or(AppError::NoResult)
}

/// `search` 하위 명령. 일치하는 도구를 분류와 함께 출력한다.
pub fn run_search(tr: &Translator, query: &str) -> Vec<&'static ToolDescriptor> {
    let hits = catalog::search(catalog::CATALOG, query);
    if hits.is_empty() {
        println!(
            "{}",
            fill_template(tr.t(keys::SEARCH_NO_MATCH), &[("q", query.to_string())])
        );
    }
    for tool in &hits {
        println!("[{}] {} - {}", tool.category.title(), tool.title, tool.description);
    }
    hits
}

/// `settings` 하위 명령. 바뀐 값이 있으면 저장한다.
pub fn run_settings(
    tr: &Translator,
    cfg: &mut Config,
    update: &SettingsUpdate,
) -> Result<(), AppError> {
    if apply_settings(cfg, update)? {
        cfg.save()?;
        println!("{}", tr.t(keys::SETTINGS_SAVED));
    }
    print_settings(tr, cfg);
    Ok(())
}

/// 설정 변경을 반영한다. 하나라도 바뀌었으면 true.
pub fn apply_settings(cfg: &mut Config, update: &SettingsUpdate) -> Result<bool, AppError> {
    let before = cfg.clone();
    if let Some(dark) = update.dark_mode {
        cfg.dark_mode = dark;
    }
    if let Some(m) = update.multiplier {
        if !(m.is_finite() && m > 0.0) {
            return Err(AppError::InvalidNumber(m.to_string()));
        }
        cfg.percent_multiplier = m;
    }
    if let Some(lang) = &update.language {
        cfg.language = lang.trim().to_string();
    }
    if let Some(fmt) = &update.export_format {
        cfg.export_format = parse_format(fmt)?;
    }
    Ok(*cfg != before)
}

/// 내보내기 형식 문자열을 해석한다.
pub fn parse_format(s: &str) -> Result<ExportFormat, AppError> {
    ExportFormat::parse(s).ok_or_else(|| AppError::UnknownFormat(s.trim().to_string()))
}

fn print_settings(tr: &Translator, cfg: &Config) {
    println!("{} {}", tr.t(keys::SETTINGS_DARK_MODE), if cfg.dark_mode { "on" } else { "off" });
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_EXPORT_FORMAT),
        cfg.export_format.extension()
    );
    println!("{} {}", tr.t(keys::SETTINGS_MULTIPLIER), cfg.gpa_scale().percent_multiplier);
    println!("{} {}", tr.t(keys::SETTINGS_LANGUAGE), cfg.language);
}

fn print_result(
    tr: &Translator,
    label: &str,
    unit: &str,
    result: &ConversionResult,
    decimals: usize,
) {
    println!("{}", result_line(label, unit, result, decimals));
    println!("{} {}", tr.t(keys::RESULT_FORMULA), result.formula);
}

/// `라벨: 값단위` 한 줄. 단위는 값에 붙여 쓴다 (`80.75%`).
fn result_line(label: &str, unit: &str, result: &ConversionResult, decimals: usize) -> String {
    format!("{label}: {}{unit}", result.display(decimals))
}

fn offer_export(
    tr: &Translator,
    label: &str,
    unit: &str,
    result: &ConversionResult,
) -> Result<(), AppError> {
    let answer = match read_line(tr.t(keys::EXPORT_PROMPT)) {
        Ok(answer) => answer,
        Err(err) if err.is_end_of_input() => return Ok(()),
        Err(err) => return Err(err),
    };
    let format = match answer.trim().to_lowercase().as_str() {
        "t" | "txt" => ExportFormat::Txt,
        "c" | "csv" => ExportFormat::Csv,
        _ => return Ok(()),
    };
    let target = ExportTarget {
        path: PathBuf::from(export::default_file_name(format)),
        format,
    };
    export_to(tr, &target, label, unit, result)
}

fn export_to(
    tr: &Translator,
    target: &ExportTarget,
    label: &str,
    unit: &str,
    result: &ConversionResult,
) -> Result<(), AppError> {
    let record = ExportRecord::new(label, result.value, unit, &result.formula);
    export::write_export(&target.path, &export::render(&record, target.format))?;
    println!("{} {}", tr.t(keys::EXPORT_DONE), target.path.display());
    Ok(())
}

fn target_symbol(family: UnitFamily, unit: &str) -> &'static str {
    family.find_unit(unit).map(|u| u.symbol()).unwrap_or("")
}

fn or_default(input: String, default: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// 한 줄을 읽는다. 입력이 끝났으면(EOF) `UnexpectedEof` 입출력 오류.
fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        println!();
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_is_attached_to_the_value() {
        let result = ConversionResult {
            value: 80.75,
            formula: String::new(),
        };
        assert_eq!(result_line("Your Percentage", "%", &result, 2), "Your Percentage: 80.75%");
        let result = ConversionResult {
            value: 212.0,
            formula: String::new(),
        };
        assert_eq!(
            result_line("Converted Value", "°F", &result, 4),
            "Converted Value: 212.0000°F"
        );
    }

    #[test]
    fn unitless_result_has_no_trailing_space() {
        let result = ConversionResult {
            value: 8.0,
            formula: String::new(),
        };
        assert_eq!(result_line("Your CGPA", "", &result, 2), "Your CGPA: 8.00");
    }
}
