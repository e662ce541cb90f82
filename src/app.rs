use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::error::CalculationError;
use crate::i18n::{keys, Translator};
use crate::inputs::{parse_and_validate, parse_field, InputField, RawInputs};
use crate::penetration::{penetration_curve, PenetrationModel, PenetrationReport};
use crate::ui_cli::{self, OutputFormat};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// 입력 해석 또는 모델 계산 오류
    #[error(transparent)]
    Calculation(#[from] CalculationError),
    /// JSON 출력 오류
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 한 번의 실행에 필요한 설정·번역기·출력 형식.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: Config,
    pub tr: Translator,
    pub format: OutputFormat,
}

impl Session {
    pub fn model(&self) -> PenetrationModel {
        PenetrationModel::new(self.config.constants)
    }

    /// 계산 오류를 형식에 맞게 출력한다.
    pub fn print_error(&self, err: &CalculationError) -> Result<(), AppError> {
        match self.format {
            OutputFormat::Json => {
                ui_cli::print_json(&ui_cli::error_json(&self.tr, err, self.config.decimals))
            }
            OutputFormat::Text => {
                eprintln!(
                    "{}: {}",
                    self.tr.t(keys::ERROR_PREFIX),
                    ui_cli::render_error(&self.tr, err, self.config.decimals)
                );
                Ok(())
            }
        }
    }

    fn print_report(&self, report: &PenetrationReport, detail: bool) -> Result<(), AppError> {
        match self.format {
            OutputFormat::Json => ui_cli::print_json(&ui_cli::report_json(report, detail)),
            OutputFormat::Text => {
                println!(
                    "{}",
                    ui_cli::format_result(&self.tr, report, self.config.decimals)
                );
                if detail {
                    println!("{}", ui_cli::format_detail(&self.tr, report));
                }
                Ok(())
            }
        }
    }
}

/// 원본 문자열 다섯 개에서 상세 결과까지 한 번에 계산한다.
pub fn calculate(
    raw: &RawInputs,
    model: &PenetrationModel,
) -> Result<PenetrationReport, CalculationError> {
    let inputs = parse_and_validate(raw)?;
    model.report(&inputs)
}

/// `calc` 명령: 한 번 계산하고 결과를 출력한다.
pub fn run_calc(session: &Session, raw: &RawInputs, detail: bool) -> Result<(), AppError> {
    let report = calculate(raw, &session.model())?;
    session.print_report(&report, detail)
}

/// `interactive` 명령: 입력을 받아 계산하는 과정을 종료할 때까지 반복한다.
///
/// 계산 오류는 출력만 하고 다시 입력을 받는다.
pub fn run_interactive(session: &Session, detail: bool) -> Result<(), AppError> {
    let tr = &session.tr;
    println!("{}", tr.t(keys::INTRO));
    let model = session.model();
    loop {
        let Some(raw) = ui_cli::prompt_inputs(tr)? else {
            break;
        };
        match calculate(&raw, &model) {
            Ok(report) => session.print_report(&report, detail)?,
            Err(err) => session.print_error(&err)?,
        }
        if !ui_cli::ask_continue(tr)? {
            break;
        }
    }
    println!("{}", tr.t(keys::APP_EXIT));
    Ok(())
}

/// 스윕 범위 입력.
#[derive(Debug, Clone)]
pub struct SweepRequest {
    /// 입자 직경 자리에는 `from`을 넣어 검증한다.
    pub raw: RawInputs,
    pub to: String,
    pub points: usize,
}

/// `sweep` 명령: 입자 직경 범위에 대한 투과율 곡선을 출력한다.
pub fn run_sweep(session: &Session, request: &SweepRequest) -> Result<(), AppError> {
    let template = parse_and_validate(&request.raw)?;
    let to_m = parse_field(InputField::ParticleDiameter, &request.to)?;
    let curve = penetration_curve(
        &session.model(),
        &template,
        template.particle_diameter_m,
        to_m,
        request.points,
    )?;
    match session.format {
        OutputFormat::Json => ui_cli::print_json(&serde_json::to_value(&curve)?),
        OutputFormat::Text => {
            println!(
                "{}",
                ui_cli::format_curve(&session.tr, &curve, session.config.decimals)
            );
            Ok(())
        }
    }
}

/// `config show`: 현재 설정을 TOML로 출력한다.
pub fn show_config(config: &Config) -> Result<(), AppError> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// `config init`: 기본 설정 파일을 쓴다.
pub fn init_config(path: &std::path::Path) -> Result<(), AppError> {
    Config::default().save(path)?;
    info!(path = %path.display(), "wrote default config");
    println!("{}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_reports_first_bad_field() {
        let raw = RawInputs::new("5 nm", "300 K", "10 kg/min", "2 m", "7 cm");
        let err = calculate(&raw, &PenetrationModel::default()).unwrap_err();
        match err {
            CalculationError::InvalidUnit {
                field,
                base_units,
                ..
            } => {
                assert_eq!(field, InputField::Flowrate);
                assert_eq!(base_units, "kg/s");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
