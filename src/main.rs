use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;

use aerosol_tube_penetration::app::{self, AppError, Session, SweepRequest};
use aerosol_tube_penetration::config::{self, DEFAULT_CONFIG_PATH};
use aerosol_tube_penetration::i18n::{keys, resolve_language, Translator};
use aerosol_tube_penetration::inputs::RawInputs;
use aerosol_tube_penetration::logging;
use aerosol_tube_penetration::ui_cli::OutputFormat;

#[derive(Parser)]
#[command(name = "tube_penetration")]
#[command(version)]
#[command(about = "Diffusion losses of aerosol particles in laminar tube flow", long_about = None)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// 표시 언어 (ko, en, auto)
    #[arg(long, global = true)]
    lang: Option<String>,

    /// 디버그 로그를 stderr로 출력
    #[arg(short, long, global = true)]
    verbose: bool,

    /// 결과를 JSON으로 출력
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate penetration once, e.g. `calc "5 nm" "300 K" "10 L/min" "2 m" "7 cm"`
    Calc {
        #[arg(allow_hyphen_values = true)]
        particle_diameter: String,
        #[arg(allow_hyphen_values = true)]
        temperature: String,
        #[arg(allow_hyphen_values = true)]
        flowrate: String,
        #[arg(allow_hyphen_values = true)]
        tube_length: String,
        #[arg(allow_hyphen_values = true)]
        tube_diameter: String,

        /// Print intermediate values
        #[arg(long)]
        detail: bool,
    },

    /// Prompt for the inputs and calculate repeatedly
    Interactive {
        /// Print intermediate values
        #[arg(long)]
        detail: bool,
    },

    /// Penetration curve over a range of particle diameters
    Sweep {
        #[arg(allow_hyphen_values = true)]
        temperature: String,
        #[arg(allow_hyphen_values = true)]
        flowrate: String,
        #[arg(allow_hyphen_values = true)]
        tube_length: String,
        #[arg(allow_hyphen_values = true)]
        tube_diameter: String,

        /// Smallest particle diameter, e.g. "1 nm"
        #[arg(long)]
        from: String,

        /// Largest particle diameter, e.g. "1 um"
        #[arg(long)]
        to: String,

        /// Number of log-spaced diameters
        #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(2..=1000))]
        points: u16,
    },

    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the active configuration
    Show,
    /// Write a default configuration file
    Init,
}

/// 프로그램의 엔트리 포인트. 오류가 있으면 출력하고 종료 코드 1을 돌려준다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn try_run(cli: Cli) -> Result<(), ()> {
    // 설정을 읽기 전이므로 언어는 플래그와 시스템 로케일로만 정한다.
    let early_tr = Translator::new(&resolve_language(cli.lang.as_deref(), None));

    if let Commands::Config {
        action: ConfigAction::Init,
    } = cli.command
    {
        return app::init_config(&cli.config).map_err(|err| report(&early_tr, &err));
    }

    let cfg = match &cli.command {
        Commands::Interactive { .. } => config::load_or_default(&cli.config),
        _ => config::load_if_present(&cli.config),
    }
    .map_err(|err| report(&early_tr, &AppError::from(err)))?;

    let lang = resolve_language(cli.lang.as_deref(), Some(&cfg.language));
    debug!(lang = %lang, config = %cli.config.display(), "session ready");
    let session = Session {
        config: cfg,
        tr: Translator::new(&lang),
        format: if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
    };

    let result = match cli.command {
        Commands::Calc {
            particle_diameter,
            temperature,
            flowrate,
            tube_length,
            tube_diameter,
            detail,
        } => {
            let raw = RawInputs::new(
                particle_diameter,
                temperature,
                flowrate,
                tube_length,
                tube_diameter,
            );
            app::run_calc(&session, &raw, detail)
        }
        Commands::Interactive { detail } => app::run_interactive(&session, detail),
        Commands::Sweep {
            temperature,
            flowrate,
            tube_length,
            tube_diameter,
            from,
            to,
            points,
        } => {
            let request = SweepRequest {
                raw: RawInputs::new(from, temperature, flowrate, tube_length, tube_diameter),
                to,
                points: usize::from(points),
            };
            app::run_sweep(&session, &request)
        }
        Commands::Config {
            action: ConfigAction::Show,
        } => app::show_config(&session.config),
        Commands::Config {
            action: ConfigAction::Init,
        } => Ok(()),
    };

    result.map_err(|err| match err {
        AppError::Calculation(calc) => {
            if let Err(out) = session.print_error(&calc) {
                report(&session.tr, &out);
            }
        }
        other => report(&session.tr, &other),
    })
}

fn report(tr: &Translator, err: &AppError) {
    eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
}
