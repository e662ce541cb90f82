//! 배관 내 에어로졸 투과율 계산기.
//!
//! 입력 문자열 해석과 단위 환산, Gormley-Kennedy 모델 계산을 라이브러리로 두고
//! `tube_penetration` 바이너리는 출력만 담당한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod error;
pub mod i18n;
pub mod inputs;
pub mod logging;
pub mod penetration;
pub mod quantity;
pub mod ui_cli;
pub mod units;

pub use error::CalculationError;
pub use inputs::{parse_and_validate, InputField, RawInputs, SiInputs};
pub use penetration::{compute_penetration, compute_report, PenetrationResult};
