use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;
use tracing::warn;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const NO_RESULT: &str = "general.no_result";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_GPA: &str = "main_menu.gpa";
    pub const MAIN_MENU_CONVERSION: &str = "main_menu.conversion";
    pub const MAIN_MENU_SEARCH: &str = "main_menu.search";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const GPA_HEADING: &str = "gpa.heading";
    pub const GPA_OPTIONS: &str = "gpa.options";
    pub const GPA_PROMPT_SEMESTER: &str = "gpa.prompt_semester";
    pub const GPA_PROMPT_VALUE: &str = "gpa.prompt_value";

    pub const CONVERSION_HEADING: &str = "conversion.heading";
    pub const CONVERSION_OPTIONS: &str = "conversion.options";
    pub const CONVERSION_UNITS: &str = "conversion.units";
    pub const CONVERSION_PROMPT_VALUE: &str = "conversion.prompt_value";
    pub const CONVERSION_PROMPT_FROM_UNIT: &str = "conversion.prompt_from_unit";
    pub const CONVERSION_PROMPT_TO_UNIT: &str = "conversion.prompt_to_unit";
    pub const CONVERSION_UNSUPPORTED: &str = "conversion.unsupported";

    pub const RESULT_FORMULA: &str = "result.formula";

    pub const SEARCH_HEADING: &str = "search.heading";
    pub const SEARCH_PROMPT: &str = "search.prompt";
    pub const SEARCH_NO_MATCH: &str = "search.no_match";

    pub const EXPORT_PROMPT: &str = "export.prompt";
    pub const EXPORT_DONE: &str = "export.done";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_DARK_MODE: &str = "settings.dark_mode";
    pub const SETTINGS_EXPORT_FORMAT: &str = "settings.export_format";
    pub const SETTINGS_MULTIPLIER: &str = "settings.multiplier";
    pub const SETTINGS_LANGUAGE: &str = "settings.language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_PROMPT_EXPORT_FORMAT: &str = "settings.prompt_export_format";
    pub const SETTINGS_PROMPT_MULTIPLIER: &str = "settings.prompt_multiplier";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    fn pack_name(&self) -> &'static str {
        match self {
            Language::Ko => "ko-kr",
            Language::En => "en-us",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 언어팩을 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 한국어 번역이 없으면 영어 문자열로 폴백한다.
    pub fn t(&self, key: &str) -> &str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }
}

/// `{name}` 자리표시자를 값으로 바꾼다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(&path).ok()?;
        let map = parse_toml_to_map(&content);
        if map.is_none() {
            warn!(path = %path.display(), "language pack is empty or not valid TOML");
        }
        map
    };

    // 1) full code (e.g., ko-kr)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., ko)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    // 3) canonical file name (e.g., ko -> ko-kr)
    try_load(Language::from_code(lang).pack_name())
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match Language::from_code(lang) {
        Language::En => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        Language::Ko => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        NO_RESULT => "결과 없음: 입력값을 확인하세요.",
        MAIN_MENU_TITLE => "\n=== GradeGrid ===",
        MAIN_MENU_GPA => "1) 학점 계산기",
        MAIN_MENU_CONVERSION => "2) 단위 변환기",
        MAIN_MENU_SEARCH => "3) 도구 검색",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        GPA_HEADING => "\n-- 학점 계산기 --",
        GPA_OPTIONS => "1) SGPA → CGPA  2) CGPA → 백분율  3) SGPA → 백분율  4) 백분율 → CGPA",
        GPA_PROMPT_SEMESTER => "{n}학기 SGPA (끝내려면 엔터): ",
        GPA_PROMPT_VALUE => "값 입력: ",
        CONVERSION_HEADING => "\n-- 단위 변환 --",
        CONVERSION_OPTIONS => "1) 길이  2) 무게  3) 시간  4) 온도",
        CONVERSION_UNITS => "단위:",
        CONVERSION_PROMPT_VALUE => "값 입력: ",
        CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: meter, kg, C): ",
        CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: foot, lb, F): ",
        CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        RESULT_FORMULA => "계산식:",
        SEARCH_HEADING => "\n-- 도구 검색 --",
        SEARCH_PROMPT => "검색어 (전체 보기는 엔터): ",
        SEARCH_NO_MATCH => "\"{q}\"에 해당하는 계산기가 없습니다.",
        EXPORT_PROMPT => "결과를 내보낼까요? (t=txt, c=csv, 엔터=건너뛰기): ",
        EXPORT_DONE => "내보내기 완료:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_DARK_MODE => "다크 모드:",
        SETTINGS_EXPORT_FORMAT => "내보내기 형식:",
        SETTINGS_MULTIPLIER => "백분율 배율:",
        SETTINGS_LANGUAGE => "언어:",
        SETTINGS_OPTIONS => "1) 다크 모드 전환  2) 내보내기 형식  3) 백분율 배율  4) 언어",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_PROMPT_EXPORT_FORMAT => "내보내기 형식 (txt/csv): ",
        SETTINGS_PROMPT_MULTIPLIER => "배율 (표준 9.5): ",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 (auto/ko/en): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        NO_RESULT => "No result: check the input.",
        MAIN_MENU_TITLE => "\n=== GradeGrid ===",
        MAIN_MENU_GPA => "1) Academic calculators",
        MAIN_MENU_CONVERSION => "2) Unit converters",
        MAIN_MENU_SEARCH => "3) Search tools",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        GPA_HEADING => "\n-- Academic Calculators --",
        GPA_OPTIONS => "1) SGPA → CGPA  2) CGPA → %  3) SGPA → %  4) % → CGPA",
        GPA_PROMPT_SEMESTER => "Semester {n} SGPA (blank to finish): ",
        GPA_PROMPT_VALUE => "Value: ",
        CONVERSION_HEADING => "\n-- Unit Conversion --",
        CONVERSION_OPTIONS => "1) Length  2) Weight  3) Time  4) Temperature",
        CONVERSION_UNITS => "Units:",
        CONVERSION_PROMPT_VALUE => "Value: ",
        CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: meter, kg, C): ",
        CONVERSION_PROMPT_TO_UNIT => "To unit (ex: foot, lb, F): ",
        CONVERSION_UNSUPPORTED => "Unsupported selection.",
        RESULT_FORMULA => "Formula:",
        SEARCH_HEADING => "\n-- Search Tools --",
        SEARCH_PROMPT => "Search (enter for all): ",
        SEARCH_NO_MATCH => "No calculators found for \"{q}\"",
        EXPORT_PROMPT => "Export result? (t=txt, c=csv, enter=skip): ",
        EXPORT_DONE => "Exported to",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_DARK_MODE => "Dark mode:",
        SETTINGS_EXPORT_FORMAT => "Export format:",
        SETTINGS_MULTIPLIER => "Percentage multiplier:",
        SETTINGS_LANGUAGE => "Language:",
        SETTINGS_OPTIONS => {
            "1) Toggle dark mode  2) Export format  3) Percentage multiplier  4) Language"
        }
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_PROMPT_EXPORT_FORMAT => "Export format (txt/csv): ",
        SETTINGS_PROMPT_MULTIPLIER => "Multiplier (standard 9.5): ",
        SETTINGS_PROMPT_LANGUAGE => "Language code (auto/ko/en): ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        _ => "[missing translation]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_falls_back_to_english_for_unknown_keys() {
        let tr = Translator::new("ko-kr");
        assert_eq!(tr.t(keys::MAIN_MENU_EXIT), "0) 종료");
        assert_eq!(tr.t("no.such.key"), "[missing translation]");
    }

    #[test]
    fn explicit_language_beats_config() {
        assert_eq!(resolve_language("ko", Some("en")), "ko");
        assert_eq!(resolve_language("auto", Some("en-us")), "en");
    }

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("[gui.nav]\nhome = \"홈\"\n").unwrap();
        assert_eq!(map.get("gui.nav.home").map(String::as_str), Some("홈"));
    }

    #[test]
    fn built_in_korean_pack_has_gui_strings() {
        let tr = Translator::new_with_pack("ko", None);
        assert!(tr.lookup("gui.nav.home").is_some());
    }

    #[test]
    fn pack_directory_overrides_built_in_strings() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ko-kr.toml"), "[gui.nav]\nhome = \"처음\"\n").unwrap();
        let tr = Translator::new_with_pack("ko", dir.path().to_str());
        assert_eq!(tr.lookup("gui.nav.home").as_deref(), Some("처음"));
        // 언어팩에 없는 CLI 키는 내장 문자열을 쓴다
        assert_eq!(tr.t(keys::MAIN_MENU_EXIT), "0) 종료");
    }

    #[test]
    fn template_placeholders_are_filled() {
        let s = fill_template("Semester {n} SGPA", &[("n", "3".to_string())]);
        assert_eq!(s, "Semester 3 SGPA");
    }
}
