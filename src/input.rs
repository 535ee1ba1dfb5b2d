//! 텍스트 입력 해석.

/// 입력 칸의 문자열을 숫자로 해석한다.
///
/// 앞뒤 공백은 무시한다. 비어 있거나, 숫자가 아니거나, 유한하지 않은 값(`inf`, `NaN`)은 `None`.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
