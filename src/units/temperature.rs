use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: &'static [TemperatureUnit] = &[
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn id(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Kelvin => "kelvin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius (°C)",
            TemperatureUnit::Fahrenheit => "Fahrenheit (°F)",
            TemperatureUnit::Kelvin => "Kelvin (K)",
        }
    }

    /// 식별자 또는 기호(`C`, `°F`, `K`)를 해석한다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "celsius" | "c" | "°c" => Some(TemperatureUnit::Celsius),
            "fahrenheit" | "f" | "°f" => Some(TemperatureUnit::Fahrenheit),
            "kelvin" | "k" => Some(TemperatureUnit::Kelvin),
            _ => None,
        }
    }
}

/// 주어진 값을 섭씨로 변환한다.
pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TemperatureUnit::Kelvin => value - 273.15,
    }
}

/// 섭씨 값을 원하는 단위로 변환한다.
pub fn from_celsius(value_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value_c,
        TemperatureUnit::Fahrenheit => value_c * 9.0 / 5.0 + 32.0,
        TemperatureUnit::Kelvin => value_c + 273.15,
    }
}

/// 온도를 서로 다른 단위로 변환한다. 같은 단위면 입력을 그대로 돌려준다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    from_celsius(to_celsius(value, from), to)
}

/// 두 단위를 잇는 직접 변환식을 입력값을 대입한 문자열로 만든다.
///
/// 계산은 항상 섭씨를 거치지만 표시식은 여섯 방향 각각의 직접식이다.
pub fn edge_formula(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> String {
    use TemperatureUnit::*;
    match (from, to) {
        (Celsius, Fahrenheit) => format!("°F = (°C × 9/5) + 32 = ({value} × 9/5) + 32"),
        (Celsius, Kelvin) => format!("K = °C + 273.15 = {value} + 273.15"),
        (Fahrenheit, Celsius) => format!("°C = (°F - 32) × 5/9 = ({value} - 32) × 5/9"),
        (Fahrenheit, Kelvin) => {
            format!("K = (°F - 32) × 5/9 + 273.15 = ({value} - 32) × 5/9 + 273.15")
        }
        (Kelvin, Celsius) => format!("°C = K - 273.15 = {value} - 273.15"),
        (Kelvin, Fahrenheit) => {
            format!("°F = (K - 273.15) × 9/5 + 32 = ({value} - 273.15) × 9/5 + 32")
        }
        _ => format!("{} → {}", from.id(), to.id()),
    }
}
