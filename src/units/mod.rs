//! 단위 정의 및 변환 모듈 모음.

pub mod length;
pub mod temperature;
pub mod time;
pub mod weight;

pub use length::LengthUnit;
pub use temperature::{convert_temperature, TemperatureUnit};
pub use time::TimeUnit;
pub use weight::WeightUnit;

/// 기준 단위에 대한 배율 하나로 정의되는 단위 계열.
///
/// 계열마다 배율이 정확히 1인 기준 단위가 하나 있고, 모든 배율은 0보다 크다.
pub trait LinearUnit: Copy + PartialEq + 'static {
    /// 계열에 속한 모든 단위 (UI 표시 순서).
    const ALL: &'static [Self];

    /// 직렬화/선택 목록에 쓰이는 식별자 (`meter`, `pound` 등).
    fn id(self) -> &'static str;

    /// 사람이 읽는 표시 이름 (`Meters (m)` 등).
    fn label(self) -> &'static str;

    /// 기준 단위로 환산하는 배율.
    fn factor_to_base(self) -> f64;

    /// 식별자 또는 약어를 단위로 해석한다. 대소문자는 구분하지 않는다.
    fn parse(s: &str) -> Option<Self>;
}

/// 기준 단위를 거쳐 값을 변환한다: `value × from ÷ to`. 같은 단위면 입력 그대로.
pub fn convert_linear<U: LinearUnit>(value: f64, from: U, to: U) -> f64 {
    if from == to {
        return value;
    }
    let base = value * from.factor_to_base();
    base / to.factor_to_base()
}
