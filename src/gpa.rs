//! SGPA/CGPA/백분율 환산식.
//!
//! 네 가지 모드는 서로 독립적이며 모두 입력 → (값, 식) 순수 함수이다.

use tracing::debug;

use crate::conversion::ConversionResult;
use crate::input::parse_number;

/// 인도 대학에서 널리 쓰는 CGPA → 백분율 배율.
pub const STANDARD_PERCENT_MULTIPLIER: f64 = 9.5;
/// 10점 만점 평점.
pub const MAX_GPA: f64 = 10.0;

/// 계산 모드.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpaMode {
    SgpaToCgpa,
    CgpaToPercent,
    SgpaToPercent,
    PercentToCgpa,
}

impl GpaMode {
    pub const ALL: [GpaMode; 4] = [
        GpaMode::SgpaToCgpa,
        GpaMode::CgpaToPercent,
        GpaMode::SgpaToPercent,
        GpaMode::PercentToCgpa,
    ];

    pub fn id(self) -> &'static str {
        match self {
            GpaMode::SgpaToCgpa => "sgpa-cgpa",
            GpaMode::CgpaToPercent => "cgpa-percent",
            GpaMode::SgpaToPercent => "sgpa-percent",
            GpaMode::PercentToCgpa => "percent-cgpa",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|m| m.id() == key)
    }

    pub fn title(self) -> &'static str {
        match self {
            GpaMode::SgpaToCgpa => "SGPA to CGPA Calculator",
            GpaMode::CgpaToPercent => "CGPA to Percentage Calculator",
            GpaMode::SgpaToPercent => "SGPA to Percentage Calculator",
            GpaMode::PercentToCgpa => "Percentage to CGPA Calculator",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GpaMode::SgpaToCgpa => "Calculate your Cumulative GPA from multiple semester GPAs",
            GpaMode::CgpaToPercent => "Convert your CGPA to percentage using the standard formula",
            GpaMode::SgpaToPercent => "Convert your Semester GPA directly to percentage",
            GpaMode::PercentToCgpa => "Convert your percentage marks to CGPA scale",
        }
    }

    /// 결과 카드 제목.
    pub fn result_label(self) -> &'static str {
        match self {
            GpaMode::SgpaToCgpa | GpaMode::PercentToCgpa => "Your CGPA",
            GpaMode::CgpaToPercent | GpaMode::SgpaToPercent => "Your Percentage",
        }
    }

    /// 결과 값 뒤에 붙는 단위.
    pub fn unit(self) -> &'static str {
        match self {
            GpaMode::CgpaToPercent | GpaMode::SgpaToPercent => "%",
            GpaMode::SgpaToCgpa | GpaMode::PercentToCgpa => "",
        }
    }

    /// 단일 입력 모드의 입력 칸 이름. 평균 모드는 학기별 칸을 쓴다.
    pub fn input_label(self) -> &'static str {
        match self {
            GpaMode::SgpaToCgpa => "Semester SGPA (out of 10.0)",
            GpaMode::CgpaToPercent => "Enter your CGPA",
            GpaMode::SgpaToPercent => "Enter your SGPA",
            GpaMode::PercentToCgpa => "Enter your Percentage",
        }
    }

    pub fn takes_list(self) -> bool {
        matches!(self, GpaMode::SgpaToCgpa)
    }

    pub fn note(self) -> &'static str {
        match self {
            GpaMode::SgpaToCgpa => {
                "All calculations assume a grading scale of 10.0. CGPA is calculated as the simple average of all semester SGPAs."
            }
            _ => {
                "This calculator uses the standard formula (multiplier of 9.5) commonly used by Indian universities. Your institution may use a different conversion factor."
            }
        }
    }
}

/// 환산 배율과 평점 상한.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpaScale {
    pub percent_multiplier: f64,
    pub max_gpa: f64,
}

impl Default for GpaScale {
    fn default() -> Self {
        Self {
            percent_multiplier: STANDARD_PERCENT_MULTIPLIER,
            max_gpa: MAX_GPA,
        }
    }
}

impl GpaScale {
    /// 설정값으로 배율을 바꾼다. 0 이하나 유한하지 않은 값이면 표준 배율을 유지한다.
    pub fn with_multiplier(multiplier: f64) -> Self {
        let mut scale = Self::default();
        if multiplier.is_finite() && multiplier > 0.0 {
            scale.percent_multiplier = multiplier;
        }
        scale
    }
}

/// 계산 요청. 입력은 사용자가 적은 문자열 그대로 받는다.
#[derive(Debug, Clone, PartialEq)]
pub enum GpaRequest {
    /// 학기별 SGPA 목록 → CGPA (산술 평균)
    SgpaToCgpa(Vec<String>),
    CgpaToPercent(String),
    SgpaToPercent(String),
    PercentToCgpa(String),
}

impl GpaRequest {
    /// 모드와 입력 목록으로 요청을 만든다. 단일 입력 모드는 첫 항목만 쓴다.
    pub fn new(mode: GpaMode, inputs: &[String]) -> Self {
        let first = || inputs.first().cloned().unwrap_or_default();
        match mode {
            GpaMode::SgpaToCgpa => GpaRequest::SgpaToCgpa(inputs.to_vec()),
            GpaMode::CgpaToPercent => GpaRequest::CgpaToPercent(first()),
            GpaMode::SgpaToPercent => GpaRequest::SgpaToPercent(first()),
            GpaMode::PercentToCgpa => GpaRequest::PercentToCgpa(first()),
        }
    }

    pub fn mode(&self) -> GpaMode {
        match self {
            GpaRequest::SgpaToCgpa(_) => GpaMode::SgpaToCgpa,
            GpaRequest::CgpaToPercent(_) => GpaMode::CgpaToPercent,
            GpaRequest::SgpaToPercent(_) => GpaMode::SgpaToPercent,
            GpaRequest::PercentToCgpa(_) => GpaMode::PercentToCgpa,
        }
    }
}

/// 숫자로 해석되고 `[0, max_gpa]` 범위에 드는 SGPA만 순서대로 남긴다.
pub fn valid_sgpas<S: AsRef<str>>(inputs: &[S], max_gpa: f64) -> Vec<f64> {
    inputs
        .iter()
        .filter_map(|s| parse_number(s.as_ref()))
        .filter(|v| (0.0..=max_gpa).contains(v))
        .collect()
}

/// 요청을 계산한다. 해석 가능한 입력이 없으면 `None`.
pub fn compute(request: &GpaRequest, scale: &GpaScale) -> Option<ConversionResult> {
    let result = match request {
        GpaRequest::SgpaToCgpa(values) => average(values, scale),
        GpaRequest::CgpaToPercent(text) => to_percent("CGPA", text, scale),
        GpaRequest::SgpaToPercent(text) => to_percent("SGPA", text, scale),
        GpaRequest::PercentToCgpa(text) => {
            let percent = parse_number(text)?;
            let m = scale.percent_multiplier;
            let cgpa = percent / m;
            Some(ConversionResult {
                value: cgpa,
                formula: format!("CGPA = Percentage / {m} = {percent} / {m} = {cgpa:.2}"),
            })
        }
    };
    if result.is_none() {
        debug!(mode = request.mode().id(), "gpa calculation produced no result");
    }
    result
}

fn average(values: &[String], scale: &GpaScale) -> Option<ConversionResult> {
    let sgpas = valid_sgpas(values, scale.max_gpa);
    if sgpas.is_empty() {
        return None;
    }
    let n = sgpas.len();
    let total: f64 = sgpas.iter().sum();
    let cgpa = total / n as f64;
    let terms = sgpas
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" + ");
    Some(ConversionResult {
        value: cgpa,
        formula: format!("CGPA = ({terms}) / {n} = {total:.2} / {n} = {cgpa:.2}"),
    })
}

fn to_percent(name: &str, text: &str, scale: &GpaScale) -> Option<ConversionResult> {
    let gpa = parse_number(text)?;
    let m = scale.percent_multiplier;
    let percentage = gpa * m;
    Some(ConversionResult {
        value: percentage,
        formula: format!("Percentage = {name} × {m} = {gpa} × {m} = {percentage:.2}%"),
    })
}
