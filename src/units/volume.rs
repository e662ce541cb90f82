use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 입방미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    CubicMeter,
    Liter,
    Milliliter,
    CubicCentimeter,
    CubicFoot,
}

impl VolumeUnit {
    /// 체적 단위 기호를 해석한다. `m3`처럼 지수가 붙은 길이 단위는 변환기에서 처리한다.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "l" | "liter" | "liters" | "litre" | "litres" => Some(VolumeUnit::Liter),
            "ml" | "milliliter" | "milliliters" | "millilitre" => Some(VolumeUnit::Milliliter),
            "cc" => Some(VolumeUnit::CubicCentimeter),
            "cuft" => Some(VolumeUnit::CubicFoot),
            _ => None,
        }
    }

}

pub fn to_cubic_meter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMeter => value,
        VolumeUnit::Liter => value / 1000.0,
        VolumeUnit::Milliliter | VolumeUnit::CubicCentimeter => value / 1_000_000.0,
        VolumeUnit::CubicFoot => value * 0.028_316_846_592,
    }
}
