use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use gradegrid::app::{self, AppError};
use gradegrid::config::{self, Config};
use gradegrid::i18n::{self, keys, Translator};
use gradegrid::logging;
use gradegrid::ui_cli::{self, ExportTarget, SettingsUpdate};

/// GradeGrid 학점 계산기 / 단위 변환기 CLI.
#[derive(Debug, Parser)]
#[command(name = "gradegrid_cli", version, about = "GPA calculators and unit converters")]
struct Cli {
    /// 언어 코드 (auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto", global = true)]
    lang: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 단위를 변환한다. 예: convert length 1 meter foot
    Convert {
        /// length, weight, time, temperature
        family: String,
        #[arg(allow_negative_numbers = true)]
        value: String,
        from: String,
        to: String,
        #[command(flatten)]
        export: ExportArgs,
    },
    /// 학점을 환산한다. 예: gpa sgpa-cgpa 8 9 7
    Gpa {
        /// sgpa-cgpa, cgpa-percent, sgpa-percent, percent-cgpa
        mode: String,
        #[arg(allow_negative_numbers = true, num_args = 1..)]
        values: Vec<String>,
        #[command(flatten)]
        export: ExportArgs,
    },
    /// 도구 목록을 검색한다. 검색어가 없으면 전체 목록.
    Search { query: Vec<String> },
    /// 설정을 바꾸고 저장한다.
    Settings {
        #[arg(long, value_enum)]
        dark_mode: Option<Toggle>,
        #[arg(long)]
        multiplier: Option<f64>,
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        export_format: Option<String>,
    },
}

#[derive(Debug, Args)]
struct ExportArgs {
    /// 결과를 이 경로에 내보낸다
    #[arg(long)]
    export: Option<PathBuf>,
    /// txt 또는 csv (기본: 설정값)
    #[arg(long)]
    format: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Toggle {
    On,
    Off,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령 또는 대화형 메뉴를 실행한다.
fn main() -> ExitCode {
    logging::init("gradegrid=warn");
    let cli = Cli::parse();
    let prefix_tr = Translator::new(&i18n::resolve_language(&cli.lang, None));
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", prefix_tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    match cli.command {
        None => app::run(&mut cfg, &tr),
        Some(Command::Convert {
            family,
            value,
            from,
            to,
            export,
        }) => {
            let target = export_target(&cfg, export)?;
            ui_cli::run_convert(&tr, &family, &value, &from, &to, target.as_ref())
        }
        Some(Command::Gpa {
            mode,
            values,
            export,
        }) => {
            let target = export_target(&cfg, export)?;
            ui_cli::run_gpa(&tr, &cfg, &mode, &values, target.as_ref())
        }
        Some(Command::Search { query }) => {
            ui_cli::run_search(&tr, &query.join(" "));
            Ok(())
        }
        Some(Command::Settings {
            dark_mode,
            multiplier,
            language,
            export_format,
        }) => {
            let update = SettingsUpdate {
                dark_mode: dark_mode.map(|t| matches!(t, Toggle::On)),
                multiplier,
                language,
                export_format,
            };
            ui_cli::run_settings(&tr, &mut cfg, &update)
        }
    }
}

fn export_target(cfg: &Config, args: ExportArgs) -> Result<Option<ExportTarget>, AppError> {
    let Some(path) = args.export else {
        return Ok(None);
    };
    let format = match args.format.as_deref() {
        Some(f) => ui_cli::parse_format(f)?,
        None => cfg.export_format,
    };
    Ok(Some(ExportTarget { path, format }))
}
