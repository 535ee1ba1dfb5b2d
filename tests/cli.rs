//! CLI 하위 명령 보조 함수 테스트.
use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use gradegrid::app::AppError;
use gradegrid::config::Config;
use gradegrid::export::ExportFormat;
use gradegrid::gpa::GpaMode;
use gradegrid::i18n::Translator;
use gradegrid::ui_cli::{self, apply_settings, compute_gpa, ExportTarget, SettingsUpdate};

#[test]
fn settings_update_reports_changes() {
    let mut cfg = Config::default();
    let unchanged = apply_settings(&mut cfg, &SettingsUpdate::default()).unwrap();
    assert!(!unchanged);

    let update = SettingsUpdate {
        dark_mode: Some(true),
        export_format: Some("CSV".into()),
        ..SettingsUpdate::default()
    };
    assert!(apply_settings(&mut cfg, &update).unwrap());
    assert!(cfg.dark_mode);
    assert_eq!(cfg.export_format, ExportFormat::Csv);
}

#[test]
fn bad_settings_are_rejected() {
    let mut cfg = Config::default();
    let update = SettingsUpdate {
        multiplier: Some(0.0),
        ..SettingsUpdate::default()
    };
    assert!(matches!(
        apply_settings(&mut cfg, &update),
        Err(AppError::InvalidNumber(_))
    ));
    let update = SettingsUpdate {
        export_format: Some("pdf".into()),
        ..SettingsUpdate::default()
    };
    assert!(matches!(
        apply_settings(&mut cfg, &update),
        Err(AppError::UnknownFormat(f)) if f == "pdf"
    ));
}

#[test]
fn gpa_uses_configured_multiplier() {
    let cfg = Config {
        percent_multiplier: 10.0,
        ..Config::default()
    };
    let out = compute_gpa(&cfg, GpaMode::CgpaToPercent, &["7.5".to_string()]).unwrap();
    assert!((out.value - 75.0).abs() < 1e-12);
}

#[test]
fn gpa_without_valid_input_is_an_error() {
    let cfg = Config::default();
    assert!(matches!(
        compute_gpa(&cfg, GpaMode::SgpaToCgpa, &["abc".to_string()]),
        Err(AppError::NoResult)
    ));
}

#[test]
fn convert_command_reports_bad_arguments() {
    let tr = Translator::new("en");
    assert!(matches!(
        ui_cli::run_convert(&tr, "volume", "1", "l", "ml", None),
        Err(AppError::UnknownFamily(_))
    ));
    assert!(matches!(
        ui_cli::run_convert(&tr, "length", "1x", "m", "ft", None),
        Err(AppError::InvalidNumber(_))
    ));
    assert!(matches!(
        ui_cli::run_convert(&tr, "length", "1", "m", "kg", None),
        Err(AppError::Conversion(_))
    ));
}

#[test]
fn convert_command_writes_csv_export() {
    let dir = tempfile::tempdir().unwrap();
    let target = ExportTarget {
        path: dir.path().join("out.csv"),
        format: ExportFormat::Csv,
    };
    let tr = Translator::new("en");
    ui_cli::run_convert(&tr, "temperature", "100", "C", "F", Some(&target)).unwrap();
    let written = std::fs::read_to_string(&target.path).unwrap();
    let mut lines = written.lines();
    assert_eq!(lines.next(), Some("Result,Formula,Date"));
    assert!(lines.next().unwrap().starts_with("\"212°F\",\"°F = (°C × 9/5) + 32"));
}

#[test]
fn gpa_command_rejects_unknown_mode() {
    let tr = Translator::new("en");
    assert!(matches!(
        ui_cli::run_gpa(&tr, &Config::default(), "gpa-grade", &["8".to_string()], None),
        Err(AppError::UnknownMode(_))
    ));
}

#[test]
fn search_command_returns_hits() {
    let tr = Translator::new("en");
    assert_eq!(ui_cli::run_search(&tr, "weight").len(), 1);
}

fn interactive_cli(dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gradegrid_cli"));
    cmd.args(["--lang", "en"])
        .current_dir(dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::null());
    cmd
}

#[test]
fn interactive_menu_exits_when_stdin_is_closed() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = interactive_cli(dir.path()).stdin(Stdio::null()).spawn().unwrap();
    let deadline = Instant::now() + Duration::from_secs(10);
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break Some(status);
        }
        if Instant::now() > deadline {
            child.kill().unwrap();
            child.wait().unwrap();
            break None;
        }
        thread::sleep(Duration::from_millis(50));
    };
    let status = status.expect("interactive menu kept running after EOF");
    assert!(status.success());
}

#[test]
fn piped_gpa_session_prints_result_and_exits() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = interactive_cli(dir.path()).stdin(Stdio::piped()).spawn().unwrap();
    child.stdin.take().unwrap().write_all(b"1\n1\n8\n9\n7\n").unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Your CGPA: 8.00"), "{stdout}");
    assert_eq!(stdout.matches("Invalid").count(), 0, "{stdout}");
}
