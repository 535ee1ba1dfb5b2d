use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::export::ExportFormat;
use crate::gpa::{GpaScale, STANDARD_PERCENT_MULTIPLIER};

/// 기본 설정 파일 경로 (작업 디렉터리 기준).
pub const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다. 파일에 없는 항목은 기본값으로 채운다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 다크 모드 사용 여부
    pub dark_mode: bool,
    /// 언어 코드 (auto/ko/en)
    pub language: String,
    /// 추가 언어팩 디렉터리
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_pack_dir: Option<String>,
    /// 결과 내보내기 형식
    pub export_format: ExportFormat,
    /// CGPA → 백분율 배율
    pub percent_multiplier: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dark_mode: false,
            language: "auto".to_string(),
            language_pack_dir: None,
            export_format: ExportFormat::Txt,
            percent_multiplier: STANDARD_PERCENT_MULTIPLIER,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_from(Path::new(CONFIG_FILE))
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본값을 저장한 뒤 돌려준다.
pub fn load_or_default_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!(path = %path.display(), dark_mode = self.dark_mode, "settings saved");
        Ok(())
    }

    /// 백분율 환산에 쓸 배율. 잘못된 값은 표준 배율로 대체된다.
    pub fn gpa_scale(&self) -> GpaScale {
        GpaScale::with_multiplier(self.percent_multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = load_or_default_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn dark_mode_survives_a_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config {
            dark_mode: true,
            export_format: ExportFormat::Csv,
            ..Config::default()
        };
        cfg.save_to(&path).unwrap();
        let loaded = load_or_default_from(&path).unwrap();
        assert!(loaded.dark_mode);
        assert_eq!(loaded.export_format, ExportFormat::Csv);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let cfg: Config = toml::from_str("dark_mode = true").unwrap();
        assert!(cfg.dark_mode);
        assert_eq!(cfg.language, "auto");
        assert_eq!(cfg.percent_multiplier, STANDARD_PERCENT_MULTIPLIER);
    }

    #[test]
    fn export_format_is_stored_lowercase() {
        let text = toml::to_string_pretty(&Config {
            export_format: ExportFormat::Csv,
            ..Config::default()
        })
        .unwrap();
        assert!(text.contains("export_format = \"csv\""), "{text}");

        for written in ["csv", "Csv", "CSV"] {
            let cfg: Config = toml::from_str(&format!("export_format = \"{written}\"")).unwrap();
            assert_eq!(cfg.export_format, ExportFormat::Csv);
        }
        let cfg: Config = toml::from_str("export_format = \"txt\"").unwrap();
        assert_eq!(cfg.export_format, ExportFormat::Txt);
    }

    #[test]
    fn invalid_multiplier_uses_standard_scale() {
        let cfg = Config {
            percent_multiplier: -1.0,
            ..Config::default()
        };
        assert_eq!(cfg.gpa_scale().percent_multiplier, STANDARD_PERCENT_MULTIPLIER);
    }

    #[test]
    fn broken_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "dark_mode = ").unwrap();
        assert!(matches!(
            load_or_default_from(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
