//! 계산 결과를 텍스트/CSV 파일로 내보낸다. 읽기 경로는 없다.

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 내보내기 파일 형식. 설정 파일에는 확장자와 같은 소문자로 저장한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    #[serde(alias = "Txt", alias = "TXT")]
    Txt,
    #[serde(alias = "Csv", alias = "CSV")]
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "txt" | "text" => Some(ExportFormat::Txt),
            "csv" => Some(ExportFormat::Csv),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
}

/// 마지막으로 계산한 결과 한 건.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRecord {
    pub label: String,
    pub value: f64,
    pub unit: String,
    pub formula: String,
    pub generated_on: NaiveDateTime,
}

impl ExportRecord {
    /// 현재 로컬 시각으로 기록을 만든다.
    pub fn new(label: &str, value: f64, unit: &str, formula: &str) -> Self {
        Self {
            label: label.to_string(),
            value,
            unit: unit.to_string(),
            formula: formula.to_string(),
            generated_on: Local::now().naive_local(),
        }
    }

    fn timestamp(&self) -> String {
        self.generated_on.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// 형식에 맞춰 내보낼 문서를 만든다.
pub fn render(record: &ExportRecord, format: ExportFormat) -> String {
    match format {
        ExportFormat::Txt => format!(
            "GradeGrid Result\n\n{}: {}{}\n\nFormula: {}\n\nGenerated on: {}",
            record.label,
            record.value,
            record.unit,
            record.formula,
            record.timestamp()
        ),
        ExportFormat::Csv => csv_document(
            &format!("{}{}", record.value, record.unit),
            &record.formula,
            &record.timestamp(),
        ),
    }
}

/// 설정 화면의 견본 내보내기 문서.
pub fn render_sample(format: ExportFormat, generated_on: NaiveDateTime) -> String {
    let stamp = generated_on.format(TIMESTAMP_FORMAT).to_string();
    match format {
        ExportFormat::Txt => format!(
            "GradeGrid Sample Export\n\nThis is a sample export file.\nYour calculation results will appear here.\n\nExport Format: TXT\nDate: {stamp}"
        ),
        ExportFormat::Csv => csv_document("Sample Result", "Sample Formula", &stamp),
    }
}

fn csv_document(result: &str, formula: &str, date: &str) -> String {
    format!(
        "Result,Formula,Date\n{},{},{}",
        csv_field(result),
        csv_field(formula),
        csv_field(date)
    )
}

fn csv_field(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub fn default_file_name(format: ExportFormat) -> String {
    format!("gradegrid-result.{}", format.extension())
}

pub fn sample_file_name(format: ExportFormat) -> String {
    format!("gradegrid-sample.{}", format.extension())
}

/// 문서를 파일로 쓴다.
pub fn write_export(path: &Path, contents: &str) -> Result<(), ExportError> {
    fs::write(path, contents)?;
    info!(path = %path.display(), "result exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(9, 26, 53)
            .unwrap()
    }

    fn record() -> ExportRecord {
        ExportRecord {
            label: "Your Percentage".into(),
            value: 80.75,
            unit: "%".into(),
            formula: "Percentage = CGPA × 9.5 = 8.5 × 9.5 = 80.75%".into(),
            generated_on: fixed_time(),
        }
    }

    #[test]
    fn text_export_layout() {
        let doc = render(&record(), ExportFormat::Txt);
        assert_eq!(
            doc,
            "GradeGrid Result\n\nYour Percentage: 80.75%\n\nFormula: Percentage = CGPA × 9.5 = 8.5 × 9.5 = 80.75%\n\nGenerated on: 2026-03-14 09:26:53"
        );
    }

    #[test]
    fn csv_export_has_header_and_one_row() {
        let doc = render(&record(), ExportFormat::Csv);
        let lines: Vec<_> = doc.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Result,Formula,Date");
        assert_eq!(
            lines[1],
            "\"80.75%\",\"Percentage = CGPA × 9.5 = 8.5 × 9.5 = 80.75%\",\"2026-03-14 09:26:53\""
        );
    }

    #[test]
    fn csv_quotes_are_doubled() {
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn sample_export_mentions_format() {
        let txt = render_sample(ExportFormat::Txt, fixed_time());
        assert!(txt.contains("Export Format: TXT"));
        let csv = render_sample(ExportFormat::Csv, fixed_time());
        assert!(csv.starts_with("Result,Formula,Date\n\"Sample Result\""));
    }

    #[test]
    fn write_export_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(default_file_name(ExportFormat::Csv));
        write_export(&path, "Result,Formula,Date").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "Result,Formula,Date");
    }
}
