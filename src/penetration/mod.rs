//! 층류 원형 배관에서 확산 침착에 의한 에어로졸 투과율 계산 모듈 모음.
//! 공기 물성/상수, 미끄럼 보정·확산계수, Gormley-Kennedy 모델, 입자 크기 스윕으로 구성한다.

pub mod air;
pub mod diffusion;
pub mod model;
pub mod sweep;

pub use air::{dynamic_viscosity_air, InvalidConstant, ModelConstants};
pub use model::{
    compute_penetration, compute_report, DepositionBranch, FlowRegime, PenetrationModel, PenetrationReport,
    PenetrationResult,
};
pub use sweep::{penetration_curve, CurvePoint, PenetrationCurve};
