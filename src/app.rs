use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::export::ExportError;
use crate::i18n::{self, Translator};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 결과 내보내기 오류
    #[error("내보내기 오류: {0}")]
    Export(#[from] ExportError),
    /// 알 수 없는 단위 계열
    #[error("알 수 없는 단위 계열: {0}")]
    UnknownFamily(String),
    /// 알 수 없는 학점 계산 모드
    #[error("알 수 없는 계산 모드: {0}")]
    UnknownMode(String),
    /// 알 수 없는 내보내기 형식
    #[error("알 수 없는 내보내기 형식: {0}")]
    UnknownFormat(String),
    /// 숫자로 해석할 수 없는 입력
    #[error("숫자가 아닌 입력값: {0}")]
    InvalidNumber(String),
    /// 유효한 입력이 하나도 없어 결과가 없음
    #[error("계산 결과 없음: 유효한 입력값이 없습니다")]
    NoResult,
}

impl AppError {
    /// 표준 입력이 닫혀 더 읽을 줄이 없는 경우.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, AppError::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 입력이 끝나면 종료 메뉴와 같이 끝난다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        let step = match ui_cli::main_menu(tr)? {
            MenuChoice::Gpa => ui_cli::handle_gpa(tr, config),
            MenuChoice::Conversion => ui_cli::handle_conversion(tr),
            MenuChoice::Search => ui_cli::handle_search(tr),
            MenuChoice::Settings => handle_settings(tr, config),
            MenuChoice::Exit => break,
        };
        match step {
            Ok(()) => {}
            Err(err) if err.is_end_of_input() => break,
            Err(err) => return Err(err),
        }
    }
    println!("{}", tr.t(i18n::keys::APP_EXIT));
    Ok(())
}

fn handle_settings(tr: &Translator, config: &mut Config) -> Result<(), AppError> {
    if ui_cli::handle_settings(tr, config)? {
        config.save()?;
        println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn closed_stdin_is_end_of_input() {
        assert!(AppError::from(io::Error::from(io::ErrorKind::UnexpectedEof)).is_end_of_input());
        assert!(!AppError::from(io::Error::from(io::ErrorKind::BrokenPipe)).is_end_of_input());
        assert!(!AppError::NoResult.is_end_of_input());
    }
}
