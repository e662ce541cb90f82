use serde::Serialize;

use super::model::{DepositionBranch, PenetrationModel};
use crate::error::CalculationError;
use crate::inputs::{InputField, SiInputs};

/// 입자 직경 하나에 대한 침투계수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub particle_diameter_m: f64,
    pub deposition_parameter: f64,
    pub branch: DepositionBranch,
    pub penetration_coefficient: f64,
}

/// 같은 배관·유량 조건에서 입자 직경별 침투계수 곡선.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PenetrationCurve {
    /// 입자 크기와 무관하므로 한 번만 담는다.
    pub reynolds: f64,
    pub points: Vec<CurvePoint>,
}

/// `from`부터 `to`까지 로그 간격으로 `points`개 값을 만든다. 양 끝을 포함한다.
pub fn log_spaced(from: f64, to: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![from],
        n => {
            let (lo, hi) = (from.ln(), to.ln());
            let step = (hi - lo) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        to
                    } else {
                        (lo + step * i as f64).exp()
                    }
                })
                .collect()
        }
    }
}

/// `template`의 입자 직경만 바꿔가며 침투계수를 계산한다.
///
/// 흐름이 층류가 아니면 첫 계산에서 바로 `NonLaminarFlow`를 돌려준다.
pub fn penetration_curve(
    model: &PenetrationModel,
    template: &SiInputs,
    from_m: f64,
    to_m: f64,
    points: usize,
) -> Result<PenetrationCurve, CalculationError> {
    for bound in [from_m, to_m] {
        if !(bound.is_finite() && bound > 0.0) {
            return Err(CalculationError::NonPositive {
                field: InputField::ParticleDiameter,
                value: bound,
            });
        }
    }

    let reynolds = model.reynolds(template)?;
    let points = log_spaced(from_m, to_m, points)
        .into_iter()
        .map(|dp| {
            let inputs = SiInputs {
                particle_diameter_m: dp,
                ..*template
            };
            model.report(&inputs).map(|r| CurvePoint {
                particle_diameter_m: dp,
                deposition_parameter: r.deposition_parameter,
                branch: r.branch,
                penetration_coefficient: r.penetration_coefficient,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PenetrationCurve { reynolds, points })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_spacing_hits_both_ends() {
        let v = log_spaced(1e-9, 1e-6, 4);
        assert_eq!(v.len(), 4);
        assert_eq!(v[0], 1e-9);
        assert_eq!(v[3], 1e-6);
        assert!((v[1] - 1e-8).abs() < 1e-15);
        assert!((v[2] - 1e-7).abs() < 1e-14);
        assert!(log_spaced(1e-9, 1e-6, 0).is_empty());
        assert_eq!(log_spaced(1e-9, 1e-6, 1), vec![1e-9]);
    }

    #[test]
    fn larger_particles_penetrate_better() {
        let template = SiInputs::new(5e-9, 300.0, 1.0 / 6000.0, 2.0, 0.07).expect("inputs");
        let curve = penetration_curve(&PenetrationModel::default(), &template, 1e-9, 1e-6, 12)
            .expect("laminar");
        assert_eq!(curve.points.len(), 12);
        for pair in curve.points.windows(2) {
            assert!(pair[1].penetration_coefficient > pair[0].penetration_coefficient);
        }
    }

    #[test]
    fn rejects_zero_bound() {
        let template = SiInputs::new(5e-9, 300.0, 1.0 / 6000.0, 2.0, 0.07).expect("inputs");
        let err = penetration_curve(&PenetrationModel::default(), &template, 0.0, 1e-6, 5)
            .unwrap_err();
        assert_eq!(err.field(), Some(InputField::ParticleDiameter));
    }
}
