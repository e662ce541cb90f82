use thiserror::Error;

use crate::conversion::ConversionError;
use crate::inputs::InputField;

/// 계산 파이프라인(입력 해석 → 침투 모델)에서 발생 가능한 오류.
///
/// 모든 오류는 입력을 고쳐 다시 제출하면 해결된다. 재시도는 의미가 없다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// 숫자/단위 문자열을 해석할 수 없음
    #[error("{field}: cannot parse '{raw_text}' ({reason})")]
    ParseFailure {
        field: InputField,
        raw_text: String,
        reason: ConversionError,
    },
    /// 해석은 되었지만 물리 차원이 맞지 않음
    #[error(
        "{field}: unit '{supplied_unit}' resolves to {base_units}; expected one of: {}",
        .expected_units.join(", ")
    )]
    InvalidUnit {
        field: InputField,
        supplied_unit: String,
        base_units: String,
        expected_units: Vec<String>,
    },
    /// 0 또는 음수 크기 (나눗셈 전에 거른다)
    #[error("{field}: value must be greater than zero (got {value} in SI units)")]
    NonPositive { field: InputField, value: f64 },
    /// 층류 조건(Re ≤ 한계값) 위반
    #[error("flow is not laminar: Re = {reynolds:.3} exceeds {limit}")]
    NonLaminarFlow { reynolds: f64, limit: f64 },
    /// 계산 중 NaN/∞ 발생
    #[error("computation produced a non-finite {quantity}")]
    NonFinite { quantity: &'static str },
}

impl CalculationError {
    /// 오류와 관련된 입력 항목. 흐름 조건 오류처럼 특정 항목이 없으면 None.
    pub fn field(&self) -> Option<InputField> {
        match self {
            CalculationError::ParseFailure { field, .. }
            | CalculationError::InvalidUnit { field, .. }
            | CalculationError::NonPositive { field, .. } => Some(*field),
            CalculationError::NonLaminarFlow { .. } | CalculationError::NonFinite { .. } => None,
        }
    }

    /// 기계가 읽는 출력(JSON)용 오류 종류 이름.
    pub fn kind(&self) -> &'static str {
        match self {
            CalculationError::ParseFailure { .. } => "parse_failure",
            CalculationError::InvalidUnit { .. } => "invalid_unit",
            CalculationError::NonPositive { .. } => "non_positive",
            CalculationError::NonLaminarFlow { .. } => "non_laminar_flow",
            CalculationError::NonFinite { .. } => "non_finite",
        }
    }
}
