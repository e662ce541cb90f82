//! 단위 정의 및 변환 모듈 모음.

pub mod flow;
pub mod length;
pub mod mass;
pub mod temperature;
pub mod time;
pub mod volume;

pub use flow::VolumeFlowUnit;
pub use length::LengthUnit;
pub use mass::MassUnit;
pub use temperature::TemperatureUnit;
pub use time::TimeUnit;
pub use volume::VolumeUnit;
