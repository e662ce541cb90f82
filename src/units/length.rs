use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 미터이다.
///
/// 입자 직경(nm, µm)부터 배관 길이(m, ft)까지 한 표로 다룬다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Nanometer,
    Micrometer,
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 9] = [
        LengthUnit::Nanometer,
        LengthUnit::Micrometer,
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Yard,
    ];

    /// 단위 기호(대소문자 무시)를 enum으로 해석한다.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "nm" | "nanometer" | "nanometers" | "nanometre" => Some(LengthUnit::Nanometer),
            "um" | "µm" | "μm" | "micron" | "microns" | "micrometer" | "micrometers" => {
                Some(LengthUnit::Micrometer)
            }
            "mm" | "millimeter" | "millimeters" | "millimetre" => Some(LengthUnit::Millimeter),
            "cm" | "centimeter" | "centimeters" | "centimetre" => Some(LengthUnit::Centimeter),
            "m" | "meter" | "meters" | "metre" | "metres" => Some(LengthUnit::Meter),
            "km" | "kilometer" | "kilometers" | "kilometre" => Some(LengthUnit::Kilometer),
            "in" | "inch" | "inches" => Some(LengthUnit::Inch),
            "ft" | "foot" | "feet" => Some(LengthUnit::Foot),
            "yd" | "yard" | "yards" => Some(LengthUnit::Yard),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Nanometer => "nm",
            LengthUnit::Micrometer => "µm",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
            LengthUnit::Yard => "yd",
        }
    }
}

/// 주어진 값을 미터로 변환한다.
pub fn to_meter(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Nanometer => value * 1e-9,
        LengthUnit::Micrometer => value * 1e-6,
        LengthUnit::Millimeter => value / 1000.0,
        LengthUnit::Centimeter => value / 100.0,
        LengthUnit::Meter => value,
        LengthUnit::Kilometer => value * 1000.0,
        LengthUnit::Inch => value * 0.0254,
        LengthUnit::Foot => value * 0.3048,
        LengthUnit::Yard => value * 0.9144,
    }
}

/// 미터 값을 원하는 단위로 변환한다.
pub fn from_meter(value_m: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Nanometer => value_m * 1e9,
        LengthUnit::Micrometer => value_m * 1e6,
        LengthUnit::Millimeter => value_m * 1000.0,
        LengthUnit::Centimeter => value_m * 100.0,
        LengthUnit::Meter => value_m,
        LengthUnit::Kilometer => value_m / 1000.0,
        LengthUnit::Inch => value_m / 0.0254,
        LengthUnit::Foot => value_m / 0.3048,
        LengthUnit::Yard => value_m / 0.9144,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_sizes_share_one_base() {
        let a = to_meter(5.0, LengthUnit::Nanometer);
        let b = to_meter(0.005, LengthUnit::Micrometer);
        let c = to_meter(5e-6, LengthUnit::Millimeter);
        assert!((a - 5e-9).abs() < 1e-20);
        assert!((a - b).abs() < 1e-20);
        assert!((a - c).abs() < 1e-20);
    }

    #[test]
    fn symbols_are_case_insensitive() {
        assert_eq!(LengthUnit::from_symbol("CM"), Some(LengthUnit::Centimeter));
        assert_eq!(LengthUnit::from_symbol("µm"), Some(LengthUnit::Micrometer));
        assert_eq!(LengthUnit::from_symbol("parsec"), None);
        for unit in LengthUnit::ALL {
            assert_eq!(LengthUnit::from_symbol(unit.symbol()), Some(unit));
        }
    }
}
