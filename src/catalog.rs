//! 홈 화면 도구 목록과 검색.

use crate::gpa::GpaMode;
use crate::quantity::UnitFamily;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCategory {
    Academic,
    Conversion,
}

impl ToolCategory {
    pub fn title(self) -> &'static str {
        match self {
            ToolCategory::Academic => "Academic Calculators",
            ToolCategory::Conversion => "Unit Converters",
        }
    }
}

/// 카드를 눌렀을 때 열리는 도구.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Gpa(GpaMode),
    Convert(UnitFamily),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub title: &'static str,
    pub description: &'static str,
    pub category: ToolCategory,
    pub tool: Tool,
}

impl ToolDescriptor {
    /// 소문자로 바꾼 질의가 제목이나 설명에 포함되는지 확인한다.
    fn matches_lowercase(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query) || self.description.to_lowercase().contains(query)
    }
}

pub const CATALOG: &[ToolDescriptor] = &[
    ToolDescriptor {
        title: "SGPA to CGPA",
        description: "Convert your Semester GPA to Cumulative GPA across all semesters",
        category: ToolCategory::Academic,
        tool: Tool::Gpa(GpaMode::SgpaToCgpa),
    },
    ToolDescriptor {
        title: "CGPA to Percentage",
        description: "Convert your Cumulative GPA to percentage format",
        category: ToolCategory::Academic,
        tool: Tool::Gpa(GpaMode::CgpaToPercent),
    },
    ToolDescriptor {
        title: "SGPA to Percentage",
        description: "Directly convert Semester GPA to percentage",
        category: ToolCategory::Academic,
        tool: Tool::Gpa(GpaMode::SgpaToPercent),
    },
    ToolDescriptor {
        title: "Percentage to CGPA",
        description: "Convert percentage marks to CGPA scale",
        category: ToolCategory::Academic,
        tool: Tool::Gpa(GpaMode::PercentToCgpa),
    },
    ToolDescriptor {
        title: "Length Converter",
        description: "Convert between meters, feet, inches, kilometers, and more",
        category: ToolCategory::Conversion,
        tool: Tool::Convert(UnitFamily::Length),
    },
    ToolDescriptor {
        title: "Weight Converter",
        description: "Convert between kilograms, pounds, ounces, and grams",
        category: ToolCategory::Conversion,
        tool: Tool::Convert(UnitFamily::Weight),
    },
    ToolDescriptor {
        title: "Time Converter",
        description: "Convert between seconds, minutes, hours, and days",
        category: ToolCategory::Conversion,
        tool: Tool::Convert(UnitFamily::Time),
    },
    ToolDescriptor {
        title: "Temperature Converter",
        description: "Convert between Celsius, Fahrenheit, and Kelvin",
        category: ToolCategory::Conversion,
        tool: Tool::Convert(UnitFamily::Temperature),
    },
];

/// 질의가 제목 또는 설명에 (대소문자 무시) 포함된 도구를 원래 순서대로 돌려준다.
///
/// 빈 질의(공백만 있는 경우 포함)는 전체 목록과 같다. 순위 매기기는 하지 않는다.
pub fn search<'a>(tools: &'a [ToolDescriptor], query: &str) -> Vec<&'a ToolDescriptor> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return tools.iter().collect();
    }
    tools.iter().filter(|t| t.matches_lowercase(&q)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_tool_once() {
        for mode in GpaMode::ALL {
            assert_eq!(
                CATALOG.iter().filter(|t| t.tool == Tool::Gpa(mode)).count(),
                1
            );
        }
        for family in UnitFamily::ALL {
            assert_eq!(
                CATALOG
                    .iter()
                    .filter(|t| t.tool == Tool::Convert(family))
                    .count(),
                1
            );
        }
    }

    #[test]
    fn description_match_keeps_catalog_order() {
        let hits = search(CATALOG, "percentage");
        let titles: Vec<_> = hits.iter().map(|t| t.title).collect();
        assert_eq!(
            titles,
            vec!["CGPA to Percentage", "SGPA to Percentage", "Percentage to CGPA"]
        );
    }
}
