use crate::units::{LengthUnit, LinearUnit, TemperatureUnit, TimeUnit, WeightUnit};

/// 변환기가 다루는 단위 계열을 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitFamily {
    Length,
    Weight,
    Time,
    Temperature,
}

/// 단위 하나의 표시용 정의.
///
/// 선형 계열은 `factor_to_base`가 항상 `Some`이며 0보다 크다. 온도는 배율이 없다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub factor_to_base: Option<f64>,
}

impl UnitDefinition {
    fn linear<U: LinearUnit>(unit: U) -> Self {
        Self {
            id: unit.id(),
            label: unit.label(),
            factor_to_base: Some(unit.factor_to_base()),
        }
    }

    fn temperature(unit: TemperatureUnit) -> Self {
        Self {
            id: unit.id(),
            label: unit.label(),
            factor_to_base: None,
        }
    }

    /// 결과 옆에 붙는 기호. 표시 이름의 괄호 안 문자열이며, 괄호가 없으면 이름 전체.
    pub fn symbol(&self) -> &'static str {
        let label = self.label;
        label
            .find('(')
            .and_then(|open| {
                let rest = &label[open + 1..];
                rest.find(')').map(|close| &rest[..close])
            })
            .unwrap_or(label)
    }
}

impl UnitFamily {
    pub const ALL: [UnitFamily; 4] = [
        UnitFamily::Length,
        UnitFamily::Weight,
        UnitFamily::Time,
        UnitFamily::Temperature,
    ];

    pub fn id(self) -> &'static str {
        match self {
            UnitFamily::Length => "length",
            UnitFamily::Weight => "weight",
            UnitFamily::Time => "time",
            UnitFamily::Temperature => "temperature",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "length" | "distance" => Some(UnitFamily::Length),
            "weight" | "mass" => Some(UnitFamily::Weight),
            "time" => Some(UnitFamily::Time),
            "temperature" | "temp" => Some(UnitFamily::Temperature),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            UnitFamily::Length => "Length Converter",
            UnitFamily::Weight => "Weight Converter",
            UnitFamily::Time => "Time Converter",
            UnitFamily::Temperature => "Temperature Converter",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            UnitFamily::Length => "Convert between different units of length and distance",
            UnitFamily::Weight => "Convert between different units of mass and weight",
            UnitFamily::Time => "Convert between different units of time",
            UnitFamily::Temperature => "Convert between Celsius, Fahrenheit, and Kelvin",
        }
    }

    /// 온도를 제외한 계열은 배율 하나로 변환된다.
    pub fn is_linear(self) -> bool {
        !matches!(self, UnitFamily::Temperature)
    }

    /// 계열에 속한 단위 목록 (표시 순서).
    pub fn units(self) -> Vec<UnitDefinition> {
        match self {
            UnitFamily::Length => linear_defs::<LengthUnit>(),
            UnitFamily::Weight => linear_defs::<WeightUnit>(),
            UnitFamily::Time => linear_defs::<TimeUnit>(),
            UnitFamily::Temperature => TemperatureUnit::ALL
                .iter()
                .copied()
                .map(UnitDefinition::temperature)
                .collect(),
        }
    }

    /// 식별자나 약어로 단위를 찾는다.
    pub fn find_unit(self, id: &str) -> Option<UnitDefinition> {
        match self {
            UnitFamily::Length => LengthUnit::parse(id).map(UnitDefinition::linear),
            UnitFamily::Weight => WeightUnit::parse(id).map(UnitDefinition::linear),
            UnitFamily::Time => TimeUnit::parse(id).map(UnitDefinition::linear),
            UnitFamily::Temperature => TemperatureUnit::parse(id).map(UnitDefinition::temperature),
        }
    }

    /// 페이지를 처음 열 때 선택되는 (입력, 변환) 단위 식별자.
    pub fn default_units(self) -> (&'static str, &'static str) {
        match self {
            UnitFamily::Length => ("meter", "foot"),
            UnitFamily::Weight => ("kilogram", "pound"),
            UnitFamily::Time => ("hour", "minute"),
            UnitFamily::Temperature => ("celsius", "fahrenheit"),
        }
    }

    /// 변환기 하단의 빠른 참고표.
    pub fn quick_reference(self) -> &'static [&'static str] {
        match self {
            UnitFamily::Length => &[
                "1 meter = 3.281 feet",
                "1 kilometer = 0.621 miles",
                "1 inch = 2.54 centimeters",
            ],
            UnitFamily::Weight => &[
                "1 kilogram = 2.205 pounds",
                "1 pound = 16 ounces",
                "1 gram = 1000 milligrams",
            ],
            UnitFamily::Time => &[
                "1 hour = 60 minutes = 3600 seconds",
                "1 day = 24 hours",
                "1 week = 7 days",
            ],
            UnitFamily::Temperature => &[
                "Water freezes: 0°C = 32°F = 273.15K",
                "Water boils: 100°C = 212°F = 373.15K",
                "Body temperature: 37°C = 98.6°F",
            ],
        }
    }
}

fn linear_defs<U: LinearUnit>() -> Vec<UnitDefinition> {
    U::ALL.iter().copied().map(UnitDefinition::linear).collect()
}
