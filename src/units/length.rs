use serde::{Deserialize, Serialize};

use super::LinearUnit;

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Mile,
    Yard,
    Foot,
    Inch,
}

impl LinearUnit for LengthUnit {
    const ALL: &'static [Self] = &[
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Centimeter,
        LengthUnit::Millimeter,
        LengthUnit::Mile,
        LengthUnit::Yard,
        LengthUnit::Foot,
        LengthUnit::Inch,
    ];

    fn id(self) -> &'static str {
        match self {
            LengthUnit::Meter => "meter",
            LengthUnit::Kilometer => "kilometer",
            LengthUnit::Centimeter => "centimeter",
            LengthUnit::Millimeter => "millimeter",
            LengthUnit::Mile => "mile",
            LengthUnit::Yard => "yard",
            LengthUnit::Foot => "foot",
            LengthUnit::Inch => "inch",
        }
    }

    fn label(self) -> &'static str {
        match self {
            LengthUnit::Meter => "Meters (m)",
            LengthUnit::Kilometer => "Kilometers (km)",
            LengthUnit::Centimeter => "Centimeters (cm)",
            LengthUnit::Millimeter => "Millimeters (mm)",
            LengthUnit::Mile => "Miles (mi)",
            LengthUnit::Yard => "Yards (yd)",
            LengthUnit::Foot => "Feet (ft)",
            LengthUnit::Inch => "Inches (in)",
        }
    }

    fn factor_to_base(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Mile => 1609.344,
            LengthUnit::Yard => 0.9144,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Inch => 0.0254,
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "meter" | "meters" | "metre" | "m" => Some(LengthUnit::Meter),
            "kilometer" | "kilometers" | "km" => Some(LengthUnit::Kilometer),
            "centimeter" | "centimeters" | "cm" => Some(LengthUnit::Centimeter),
            "millimeter" | "millimeters" | "mm" => Some(LengthUnit::Millimeter),
            "mile" | "miles" | "mi" => Some(LengthUnit::Mile),
            "yard" | "yards" | "yd" => Some(LengthUnit::Yard),
            "foot" | "feet" | "ft" => Some(LengthUnit::Foot),
            "inch" | "inches" | "in" => Some(LengthUnit::Inch),
            _ => None,
        }
    }
}
