use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 모델에 주입되는 물리 상수. 프로세스 동안 바뀌지 않는다.
///
/// 기본값은 표준 공기 기준이며, 고도가 다른 현장 등은 config.toml에서 덮어쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConstants {
    /// 공기 밀도 [kg/m3]. 입력 온도와 무관한 고정값이다.
    pub air_density_kg_m3: f64,
    /// 공기 평균자유행로 [m]
    pub mean_free_path_m: f64,
    /// 볼츠만 상수 [J/K]
    pub boltzmann_j_per_k: f64,
    /// 점도 멱법칙 계수: μ = a·T^b [Pa·s]
    pub viscosity_coefficient: f64,
    /// 점도 멱법칙 지수
    pub viscosity_exponent: f64,
    /// 층류 판정 한계 레이놀즈수 (이 값 이하면 층류)
    pub laminar_reynolds_limit: f64,
    /// Gormley-Kennedy 두 근사식의 경계 α
    pub alpha_threshold: f64,
    /// 작은 α 근사식의 1차항 계수. 문헌값은 1.2이다.
    pub small_alpha_linear_coefficient: f64,
}

impl Default for ModelConstants {
    fn default() -> Self {
        Self {
            air_density_kg_m3: 1.293,
            mean_free_path_m: 6.73e-8,
            boltzmann_j_per_k: 1.38e-23,
            viscosity_coefficient: 2.791e-7,
            viscosity_exponent: 0.7355,
            laminar_reynolds_limit: 2000.0,
            alpha_threshold: 0.0312,
            small_alpha_linear_coefficient: 1.8,
        }
    }
}

/// 상수 값이 물리적으로 쓸 수 없는 경우.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("model constant `{name}` must be a positive finite number (got {value})")]
pub struct InvalidConstant {
    pub name: &'static str,
    pub value: f64,
}

impl ModelConstants {
    /// 모든 상수가 유한한 양수인지 확인한다.
    pub fn validate(&self) -> Result<(), InvalidConstant> {
        let checks = [
            ("air_density_kg_m3", self.air_density_kg_m3),
            ("mean_free_path_m", self.mean_free_path_m),
            ("boltzmann_j_per_k", self.boltzmann_j_per_k),
            ("viscosity_coefficient", self.viscosity_coefficient),
            ("viscosity_exponent", self.viscosity_exponent),
            ("laminar_reynolds_limit", self.laminar_reynolds_limit),
            ("alpha_threshold", self.alpha_threshold),
            (
                "small_alpha_linear_coefficient",
                self.small_alpha_linear_coefficient,
            ),
        ];
        match checks
            .into_iter()
            .find(|(_, value)| !(value.is_finite() && *value > 0.0))
        {
            Some((name, value)) => Err(InvalidConstant { name, value }),
            None => Ok(()),
        }
    }
}

/// 온도 T [K]에서 공기의 동점성계수 [Pa·s]를 멱법칙 근사로 구한다.
///
/// 기본 상수로는 μ = 2.791e-7 · T^0.7355 이다. 호출마다 다시 계산한다.
pub fn dynamic_viscosity_air(temperature_k: f64, constants: &ModelConstants) -> f64 {
    constants.viscosity_coefficient * temperature_k.powf(constants.viscosity_exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viscosity_near_room_temperature() {
        let mu = dynamic_viscosity_air(300.0, &ModelConstants::default());
        assert!((mu - 1.852_177e-5).abs() < 1e-10, "mu={mu}");
    }

    #[test]
    fn viscosity_grows_with_temperature() {
        let c = ModelConstants::default();
        assert!(dynamic_viscosity_air(350.0, &c) > dynamic_viscosity_air(300.0, &c));
    }

    #[test]
    fn validate_names_bad_constant() {
        let c = ModelConstants {
            mean_free_path_m: 0.0,
            ..ModelConstants::default()
        };
        assert_eq!(
            c.validate(),
            Err(InvalidConstant {
                name: "mean_free_path_m",
                value: 0.0
            })
        );
        assert!(ModelConstants::default().validate().is_ok());
    }
}
