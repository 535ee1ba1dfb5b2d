use thiserror::Error;
use tracing::debug;

use crate::quantity::UnitFamily;
use crate::units::temperature::{self, TemperatureUnit};
use crate::units::{convert_linear, LengthUnit, LinearUnit, TimeUnit, WeightUnit};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Error, PartialEq)]
pub enum ConversionError {
    /// 계열에 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// NaN/무한대 입력
    #[error("유한한 숫자가 아닌 입력값: {0}")]
    NonFiniteInput(f64),
}

/// 변환 요청 한 건. 계산할 때마다 새로 만든다.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub family: UnitFamily,
    pub from: String,
    pub to: String,
    pub value: f64,
}

impl ConversionRequest {
    pub fn new(family: UnitFamily, from: &str, to: &str, value: f64) -> Self {
        Self {
            family,
            from: from.to_string(),
            to: to.to_string(),
            value,
        }
    }
}

/// 계산 결과와 사용된 식.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub value: f64,
    pub formula: String,
}

impl ConversionResult {
    /// 결과 값을 고정 소수 자릿수로 표시한다.
    pub fn display(&self, decimals: usize) -> String {
        format!("{:.*}", decimals, self.value)
    }
}

/// 변환을 수행한다. 단위를 모르거나 입력이 유한하지 않으면 결과 없음(`None`).
///
/// 입력할 때마다 다시 호출되므로 실패는 오류로 올리지 않고 조용히 넘긴다.
pub fn convert(request: &ConversionRequest) -> Option<ConversionResult> {
    match try_convert(request) {
        Ok(result) => Some(result),
        Err(err) => {
            debug!(family = request.family.id(), %err, "conversion produced no result");
            None
        }
    }
}

/// 실패 사유를 돌려주는 변환. CLI처럼 이유를 보여줘야 할 때 쓴다.
pub fn try_convert(request: &ConversionRequest) -> Result<ConversionResult, ConversionError> {
    if !request.value.is_finite() {
        return Err(ConversionError::NonFiniteInput(request.value));
    }
    match request.family {
        UnitFamily::Length => convert_in::<LengthUnit>(request),
        UnitFamily::Weight => convert_in::<WeightUnit>(request),
        UnitFamily::Time => convert_in::<TimeUnit>(request),
        UnitFamily::Temperature => {
            let from = parse_temperature_unit(&request.from)?;
            let to = parse_temperature_unit(&request.to)?;
            Ok(ConversionResult {
                value: temperature::convert_temperature(request.value, from, to),
                formula: temperature::edge_formula(request.value, from, to),
            })
        }
    }
}

fn convert_in<U: LinearUnit>(
    request: &ConversionRequest,
) -> Result<ConversionResult, ConversionError> {
    let from = parse_linear_unit::<U>(&request.from)?;
    let to = parse_linear_unit::<U>(&request.to)?;
    let v = request.value;
    let value = convert_linear(v, from, to);
    let formula = format!(
        "{v} {} = {v} × {} ÷ {} = {value:.4} {}",
        from.label(),
        from.factor_to_base(),
        to.factor_to_base(),
        to.label()
    );
    Ok(ConversionResult { value, formula })
}

fn parse_linear_unit<U: LinearUnit>(s: &str) -> Result<U, ConversionError> {
    U::parse(s).ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
}

fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    TemperatureUnit::parse(s).ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
}
