use std::io::{self, BufRead, Write};

use serde_json::{json, Value};

use crate::app::AppError;
use crate::error::CalculationError;
use crate::i18n::{keys, Translator};
use crate::inputs::{InputField, RawInputs};
use crate::penetration::{DepositionBranch, PenetrationCurve, PenetrationReport};
use crate::units::flow::{from_cubic_meter_per_second, VolumeFlowUnit};
use crate::units::length::{from_meter, LengthUnit};
use crate::units::temperature::{from_kelvin, TemperatureUnit};

/// 결과 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn field_label(tr: &Translator, field: InputField) -> &'static str {
    let key = match field {
        InputField::ParticleDiameter => keys::FIELD_PARTICLE_DIAMETER,
        InputField::AerosolTemperature => keys::FIELD_TEMPERATURE,
        InputField::Flowrate => keys::FIELD_FLOWRATE,
        InputField::TubeLength => keys::FIELD_TUBE_LENGTH,
        InputField::TubeDiameter => keys::FIELD_TUBE_DIAMETER,
    };
    tr.t(key)
}

/// 다섯 항목을 차례로 입력받는다. 입력이 끝나면(EOF) None.
pub fn prompt_inputs(tr: &Translator) -> Result<Option<RawInputs>, AppError> {
    let mut raw = RawInputs::default();
    for field in InputField::ALL {
        let prompt = format!(
            "{} ({} {}): ",
            field_label(tr, field),
            tr.t(keys::PROMPT_EXAMPLE),
            field.example()
        );
        match read_line(&prompt)? {
            Some(line) => raw.set(field, line.trim()),
            None => return Ok(None),
        }
    }
    Ok(Some(raw))
}

/// 계속 계산할지 묻는다.
pub fn ask_continue(tr: &Translator) -> Result<bool, AppError> {
    Ok(match read_line(tr.t(keys::PROMPT_CONTINUE))? {
        Some(line) => !line.trim().eq_ignore_ascii_case("q"),
        None => false,
    })
}

/// 원래 대화상자와 같은 두 줄 결과 문구.
pub fn format_result(tr: &Translator, report: &PenetrationReport, decimals: usize) -> String {
    format!(
        "{} {:.*}\n{} {:.*}",
        tr.t(keys::RESULT_LAMINAR),
        decimals,
        report.reynolds,
        tr.t(keys::RESULT_PENETRATION),
        decimals,
        report.penetration_coefficient
    )
}

/// 중간 계산값 표. 입력은 읽기 쉬운 단위(nm, °C, L/min)로 다시 보여준다.
pub fn format_detail(tr: &Translator, report: &PenetrationReport) -> String {
    let i = &report.inputs;
    let branch = match report.branch {
        DepositionBranch::ExponentialSum => tr.t(keys::DETAIL_BRANCH_EXP),
        DepositionBranch::PowerSeries => tr.t(keys::DETAIL_BRANCH_SERIES),
    };
    let lines = [
        tr.t(keys::DETAIL_HEADING).to_string(),
        format!(
            "{}: {:.3} nm",
            field_label(tr, InputField::ParticleDiameter),
            from_meter(i.particle_diameter_m, LengthUnit::Nanometer)
        ),
        format!(
            "{}: {:.2} K ({:.2} °C)",
            field_label(tr, InputField::AerosolTemperature),
            i.temperature_k,
            from_kelvin(i.temperature_k, TemperatureUnit::Celsius)
        ),
        format!(
            "{}: {:.4} L/min",
            field_label(tr, InputField::Flowrate),
            from_cubic_meter_per_second(i.flowrate_m3_s, VolumeFlowUnit::LiterPerMinute)
        ),
        format!(
            "{}: {:.4} m",
            field_label(tr, InputField::TubeLength),
            i.tube_length_m
        ),
        format!(
            "{}: {:.2} mm",
            field_label(tr, InputField::TubeDiameter),
            from_meter(i.tube_diameter_m, LengthUnit::Millimeter)
        ),
        format!("{} {:.6}", tr.t(keys::DETAIL_SPEED), report.mean_flow_speed_m_s),
        format!("{} {:.4e}", tr.t(keys::DETAIL_VISCOSITY), report.viscosity_pa_s),
        format!(
            "{} {:.4}",
            tr.t(keys::DETAIL_CUNNINGHAM),
            report.cunningham_correction
        ),
        format!(
            "{} {:.4e}",
            tr.t(keys::DETAIL_DIFFUSION),
            report.diffusion_coefficient_m2_s
        ),
        format!("{} {:.6}", tr.t(keys::DETAIL_ALPHA), report.deposition_parameter),
        branch.to_string(),
    ];
    lines.join("\n")
}

/// 오류를 사용자에게 보여줄 문장으로 바꾼다.
pub fn render_error(tr: &Translator, err: &CalculationError, decimals: usize) -> String {
    match err {
        CalculationError::ParseFailure {
            field,
            raw_text,
            reason,
        } => tr
            .t(keys::ERROR_PARSE)
            .replace("{field}", field_label(tr, *field))
            .replace("{text}", raw_text)
            .replace("{reason}", &reason.to_string()),
        CalculationError::InvalidUnit {
            field,
            supplied_unit,
            base_units,
            expected_units,
        } => tr
            .t(keys::ERROR_INVALID_UNIT)
            .replace("{field}", field_label(tr, *field))
            .replace("{unit}", supplied_unit)
            .replace("{base}", base_units)
            .replace("{expected}", &expected_units.join(", ")),
        CalculationError::NonPositive { field, value } => tr
            .t(keys::ERROR_NON_POSITIVE)
            .replace("{field}", field_label(tr, *field))
            .replace("{value}", &value.to_string()),
        CalculationError::NonLaminarFlow { reynolds, limit } => tr
            .t(keys::ERROR_NON_LAMINAR)
            .replace("{re}", &format!("{reynolds:.decimals$}"))
            .replace("{limit}", &limit.to_string()),
        CalculationError::NonFinite { quantity } => tr
            .t(keys::ERROR_NON_FINITE)
            .replace("{quantity}", quantity),
    }
}

pub fn report_json(report: &PenetrationReport, detail: bool) -> Value {
    let mut out = json!({
        "reynolds": report.reynolds,
        "penetration_coefficient": report.penetration_coefficient,
    });
    if detail {
        out["detail"] = json!(report);
    }
    out
}

pub fn error_json(tr: &Translator, err: &CalculationError, decimals: usize) -> Value {
    let mut body = json!({
        "kind": err.kind(),
        "message": render_error(tr, err, decimals),
    });
    if let Some(field) = err.field() {
        body["field"] = json!(field);
    }
    if let CalculationError::NonLaminarFlow { reynolds, .. } = err {
        body["reynolds"] = json!(reynolds);
    }
    json!({ "error": body })
}

pub fn format_curve(tr: &Translator, curve: &PenetrationCurve, decimals: usize) -> String {
    let mut out = format!(
        "{} {:.*}\n{}",
        tr.t(keys::RESULT_LAMINAR),
        decimals,
        curve.reynolds,
        tr.t(keys::SWEEP_HEADING)
    );
    for p in &curve.points {
        out.push_str(&format!(
            "\n{:<17.3} {:<11.4e} {:.*}",
            from_meter(p.particle_diameter_m, LengthUnit::Nanometer),
            p.deposition_parameter,
            decimals,
            p.penetration_coefficient
        ));
    }
    out
}

pub fn print_json(value: &Value) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// 한 줄을 읽는다. 표준입력이 닫혔으면 None.
fn read_line(prompt: &str) -> Result<Option<String>, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    let n = io::stdin().lock().read_line(&mut buf)?;
    Ok(if n == 0 { None } else { Some(buf) })
}
