use serde::{Deserialize, Serialize};

use super::time::{to_second, TimeUnit};
use super::volume::{to_cubic_meter, VolumeUnit};

/// 체적 유량 단위. 내부 기준은 m3/s이다.
///
/// `L/min`처럼 체적/시간으로 쓰는 식은 변환기가 조합해서 처리하고,
/// 여기서는 현장에서 한 단어로 쓰는 약어(lpm, sccm, cfm)와 표시용 단위를 다룬다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeFlowUnit {
    CubicMeterPerHour,
    LiterPerMinute,
    CubicCentimeterPerMinute,
    CubicFootPerMinute,
}

impl VolumeFlowUnit {
    pub const ALL: [VolumeFlowUnit; 4] = [
        VolumeFlowUnit::CubicMeterPerHour,
        VolumeFlowUnit::LiterPerMinute,
        VolumeFlowUnit::CubicCentimeterPerMinute,
        VolumeFlowUnit::CubicFootPerMinute,
    ];

    /// 한 단어 유량 약어를 해석한다. 표준 상태(s-) 표기는 실제 유량과 같게 취급한다.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "lpm" | "slpm" => Some(VolumeFlowUnit::LiterPerMinute),
            "ccm" | "sccm" => Some(VolumeFlowUnit::CubicCentimeterPerMinute),
            "cfm" | "scfm" => Some(VolumeFlowUnit::CubicFootPerMinute),
            "cmh" => Some(VolumeFlowUnit::CubicMeterPerHour),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            VolumeFlowUnit::CubicMeterPerHour => "m^3/h",
            VolumeFlowUnit::LiterPerMinute => "L/min",
            VolumeFlowUnit::CubicCentimeterPerMinute => "cm^3/min",
            VolumeFlowUnit::CubicFootPerMinute => "ft^3/min",
        }
    }

    fn parts(&self) -> (VolumeUnit, TimeUnit) {
        match self {
            VolumeFlowUnit::CubicMeterPerHour => (VolumeUnit::CubicMeter, TimeUnit::Hour),
            VolumeFlowUnit::LiterPerMinute => (VolumeUnit::Liter, TimeUnit::Minute),
            VolumeFlowUnit::CubicCentimeterPerMinute => {
                (VolumeUnit::CubicCentimeter, TimeUnit::Minute)
            }
            VolumeFlowUnit::CubicFootPerMinute => (VolumeUnit::CubicFoot, TimeUnit::Minute),
        }
    }
}

/// 주어진 유량을 m3/s로 변환한다.
pub fn to_cubic_meter_per_second(value: f64, unit: VolumeFlowUnit) -> f64 {
    let (volume, time) = unit.parts();
    to_cubic_meter(value, volume) / to_second(1.0, time)
}

/// m3/s 값을 원하는 유량 단위로 변환한다.
pub fn from_cubic_meter_per_second(value: f64, unit: VolumeFlowUnit) -> f64 {
    value / to_cubic_meter_per_second(1.0, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lpm_is_liter_per_minute() {
        let q = to_cubic_meter_per_second(10.0, VolumeFlowUnit::LiterPerMinute);
        assert!((q - 10.0 / 1000.0 / 60.0).abs() < 1e-15);
        let back = from_cubic_meter_per_second(q, VolumeFlowUnit::LiterPerMinute);
        assert!((back - 10.0).abs() < 1e-9);
    }

    #[test]
    fn sccm_to_lpm() {
        let q = to_cubic_meter_per_second(1000.0, VolumeFlowUnit::CubicCentimeterPerMinute);
        let lpm = from_cubic_meter_per_second(q, VolumeFlowUnit::LiterPerMinute);
        assert!((lpm - 1.0).abs() < 1e-9);
        assert_eq!(
            VolumeFlowUnit::from_symbol("SLPM"),
            Some(VolumeFlowUnit::LiterPerMinute)
        );
    }
}
