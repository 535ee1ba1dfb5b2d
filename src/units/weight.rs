use serde::{Deserialize, Serialize};

use super::LinearUnit;

/// 무게(질량) 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    Kilogram,
    Gram,
    Milligram,
    Pound,
    Ounce,
    Ton,
}

impl LinearUnit for WeightUnit {
    const ALL: &'static [Self] = &[
        WeightUnit::Kilogram,
        WeightUnit::Gram,
        WeightUnit::Milligram,
        WeightUnit::Pound,
        WeightUnit::Ounce,
        WeightUnit::Ton,
    ];

    fn id(self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "kilogram",
            WeightUnit::Gram => "gram",
            WeightUnit::Milligram => "milligram",
            WeightUnit::Pound => "pound",
            WeightUnit::Ounce => "ounce",
            WeightUnit::Ton => "ton",
        }
    }

    fn label(self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "Kilograms (kg)",
            WeightUnit::Gram => "Grams (g)",
            WeightUnit::Milligram => "Milligrams (mg)",
            WeightUnit::Pound => "Pounds (lb)",
            WeightUnit::Ounce => "Ounces (oz)",
            WeightUnit::Ton => "Metric Tons (t)",
        }
    }

    fn factor_to_base(self) -> f64 {
        match self {
            WeightUnit::Kilogram => 1.0,
            WeightUnit::Gram => 0.001,
            WeightUnit::Milligram => 0.000001,
            WeightUnit::Pound => 0.453592,
            WeightUnit::Ounce => 0.0283495,
            WeightUnit::Ton => 1000.0,
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kilogram" | "kilograms" | "kg" => Some(WeightUnit::Kilogram),
            "gram" | "grams" | "g" => Some(WeightUnit::Gram),
            "milligram" | "milligrams" | "mg" => Some(WeightUnit::Milligram),
            "pound" | "pounds" | "lb" | "lbs" => Some(WeightUnit::Pound),
            "ounce" | "ounces" | "oz" => Some(WeightUnit::Ounce),
            "ton" | "tons" | "tonne" | "t" => Some(WeightUnit::Ton),
            _ => None,
        }
    }
}
