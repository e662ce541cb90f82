use std::f64::consts::PI;

use serde::Serialize;
use tracing::{debug, warn};

use super::air::{dynamic_viscosity_air, ModelConstants};
use super::diffusion::{cunningham_correction, diffusion_coefficient};
use crate::error::CalculationError;
use crate::inputs::SiInputs;

/// 레이놀즈수에 따른 흐름 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlowRegime {
    Laminar,
    NonLaminar,
}

impl FlowRegime {
    /// 한계값과 같으면 층류로 본다.
    pub fn classify(reynolds: f64, limit: f64) -> Self {
        if reynolds <= limit {
            FlowRegime::Laminar
        } else {
            FlowRegime::NonLaminar
        }
    }
}

/// Gormley-Kennedy 근사식 중 어느 쪽을 썼는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DepositionBranch {
    /// α ≥ 경계값: 지수항 세 개의 합
    ExponentialSum,
    /// α < 경계값: α의 분수 거듭제곱 급수
    PowerSeries,
}

/// 최종 결과: 레이놀즈수와 침투계수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PenetrationResult {
    pub reynolds: f64,
    pub penetration_coefficient: f64,
}

/// 중간 계산값까지 포함한 상세 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PenetrationReport {
    pub inputs: SiInputs,
    /// 평균 유속 [m/s]
    pub mean_flow_speed_m_s: f64,
    /// 공기 점도 [Pa·s]
    pub viscosity_pa_s: f64,
    pub reynolds: f64,
    pub cunningham_correction: f64,
    /// 입자 확산계수 [m2/s]
    pub diffusion_coefficient_m2_s: f64,
    /// 무차원 침착 변수 α
    pub deposition_parameter: f64,
    pub branch: DepositionBranch,
    pub penetration_coefficient: f64,
}

impl PenetrationReport {
    pub fn result(&self) -> PenetrationResult {
        PenetrationResult {
            reynolds: self.reynolds,
            penetration_coefficient: self.penetration_coefficient,
        }
    }
}

/// 원형 배관 단면의 평균 유속: U = Q / (π·(D/2)²)
pub fn mean_flow_speed(flowrate_m3_s: f64, tube_diameter_m: f64) -> f64 {
    let radius = tube_diameter_m / 2.0;
    flowrate_m3_s / (PI * radius * radius)
}

/// 배관 레이놀즈수: Re = ρ·U·D / μ
pub fn reynolds_number(
    density_kg_m3: f64,
    speed_m_s: f64,
    tube_diameter_m: f64,
    viscosity_pa_s: f64,
) -> f64 {
    density_kg_m3 * speed_m_s * tube_diameter_m / viscosity_pa_s
}

/// Gormley-Kennedy 침착 변수: α = π·D·L / Q
pub fn deposition_parameter(diffusion_m2_s: f64, tube_length_m: f64, flowrate_m3_s: f64) -> f64 {
    PI * diffusion_m2_s * tube_length_m / flowrate_m3_s
}

/// 경계값과 같으면 지수합 식을 쓴다.
pub fn select_branch(alpha: f64, threshold: f64) -> DepositionBranch {
    if alpha >= threshold {
        DepositionBranch::ExponentialSum
    } else {
        DepositionBranch::PowerSeries
    }
}

/// P = 0.8191·e^(−3.657α) + 0.0975·e^(−22.3α) + 0.0325·e^(−57α)
pub fn penetration_exponential_sum(alpha: f64) -> f64 {
    0.8191 * (-3.657 * alpha).exp() + 0.0975 * (-22.3 * alpha).exp() + 0.0325 * (-57.0 * alpha).exp()
}

/// P = 1 − 2.56·α^(2/3) + c·α + 0.177·α^(4/3)
pub fn penetration_power_series(alpha: f64, linear_coefficient: f64) -> f64 {
    1.0 - 2.56 * alpha.powf(2.0 / 3.0) + linear_coefficient * alpha
        + 0.177 * alpha.powf(4.0 / 3.0)
}

/// α에 맞는 근사식을 골라 침투계수를 계산한다.
pub fn penetration_coefficient(alpha: f64, constants: &ModelConstants) -> (f64, DepositionBranch) {
    let branch = select_branch(alpha, constants.alpha_threshold);
    let p = match branch {
        DepositionBranch::ExponentialSum => penetration_exponential_sum(alpha),
        DepositionBranch::PowerSeries => {
            penetration_power_series(alpha, constants.small_alpha_linear_coefficient)
        }
    };
    (p, branch)
}

fn finite(quantity: &'static str, value: f64) -> Result<f64, CalculationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculationError::NonFinite { quantity })
    }
}

/// 확산 침착에 의한 배관 투과율 모델. 상수는 생성 시 주입한다.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PenetrationModel {
    constants: ModelConstants,
}

impl PenetrationModel {
    pub fn new(constants: ModelConstants) -> Self {
        Self { constants }
    }

    /// 층류 여부만 판정한다. 입자 크기와 무관하다.
    pub fn reynolds(&self, inputs: &SiInputs) -> Result<f64, CalculationError> {
        inputs.validate()?;
        let speed = mean_flow_speed(inputs.flowrate_m3_s, inputs.tube_diameter_m);
        let mu = dynamic_viscosity_air(inputs.temperature_k, &self.constants);
        finite(
            "Reynolds number",
            reynolds_number(
                self.constants.air_density_kg_m3,
                speed,
                inputs.tube_diameter_m,
                mu,
            ),
        )
    }

    /// 전체 계산을 수행하고 중간값을 함께 돌려준다.
    pub fn report(&self, inputs: &SiInputs) -> Result<PenetrationReport, CalculationError> {
        inputs.validate()?;
        let c = &self.constants;

        let speed = finite(
            "mean flow speed",
            mean_flow_speed(inputs.flowrate_m3_s, inputs.tube_diameter_m),
        )?;
        let mu = finite(
            "air viscosity",
            dynamic_viscosity_air(inputs.temperature_k, c),
        )?;
        if mu <= 0.0 {
            return Err(CalculationError::NonFinite {
                quantity: "air viscosity",
            });
        }
        let reynolds = finite(
            "Reynolds number",
            reynolds_number(c.air_density_kg_m3, speed, inputs.tube_diameter_m, mu),
        )?;
        debug!(speed, mu, reynolds, "flow regime inputs");

        if FlowRegime::classify(reynolds, c.laminar_reynolds_limit) == FlowRegime::NonLaminar {
            warn!(reynolds, limit = c.laminar_reynolds_limit, "flow is not laminar");
            return Err(CalculationError::NonLaminarFlow {
                reynolds,
                limit: c.laminar_reynolds_limit,
            });
        }

        let cc = finite(
            "Cunningham correction",
            cunningham_correction(inputs.particle_diameter_m, c.mean_free_path_m),
        )?;
        let diffusion = finite(
            "diffusion coefficient",
            diffusion_coefficient(
                inputs.temperature_k,
                inputs.particle_diameter_m,
                cc,
                mu,
                c.boltzmann_j_per_k,
            ),
        )?;
        let alpha = finite(
            "deposition parameter",
            deposition_parameter(diffusion, inputs.tube_length_m, inputs.flowrate_m3_s),
        )?;
        let (p, branch) = penetration_coefficient(alpha, c);
        let p = finite("penetration coefficient", p)?;
        debug!(cc, diffusion, alpha, ?branch, p, "penetration computed");

        Ok(PenetrationReport {
            inputs: *inputs,
            mean_flow_speed_m_s: speed,
            viscosity_pa_s: mu,
            reynolds,
            cunningham_correction: cc,
            diffusion_coefficient_m2_s: diffusion,
            deposition_parameter: alpha,
            branch,
            penetration_coefficient: p,
        })
    }

    pub fn compute(&self, inputs: &SiInputs) -> Result<PenetrationResult, CalculationError> {
        self.report(inputs).map(|r| r.result())
    }
}

/// 기본 상수로 침투계수를 계산한다.
pub fn compute_penetration(inputs: &SiInputs) -> Result<PenetrationResult, CalculationError> {
    PenetrationModel::default().compute(inputs)
}

/// 기본 상수로 중간 계산값까지 포함한 결과를 만든다.
pub fn compute_report(inputs: &SiInputs) -> Result<PenetrationReport, CalculationError> {
    PenetrationModel::default().report(inputs)
}
