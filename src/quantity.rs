use std::fmt;

use serde::Serialize;

use crate::units::temperature::{to_kelvin, TemperatureUnit};

/// 기본 SI 차원(m, kg, s, K)의 지수 벡터.
///
/// 단위식은 모두 이 벡터로 환원한 뒤 비교한다. `L/min`과 `m^3/s`는 같은 값을 가진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Dimension {
    pub length: i8,
    pub mass: i8,
    pub time: i8,
    pub temperature: i8,
}

impl Dimension {
    pub const DIMENSIONLESS: Dimension = Dimension::new(0, 0, 0, 0);
    pub const LENGTH: Dimension = Dimension::new(1, 0, 0, 0);
    pub const MASS: Dimension = Dimension::new(0, 1, 0, 0);
    pub const TIME: Dimension = Dimension::new(0, 0, 1, 0);
    pub const TEMPERATURE: Dimension = Dimension::new(0, 0, 0, 1);
    pub const VOLUME: Dimension = Dimension::new(3, 0, 0, 0);
    pub const VOLUME_FLOW_RATE: Dimension = Dimension::new(3, 0, -1, 0);

    pub const fn new(length: i8, mass: i8, time: i8, temperature: i8) -> Self {
        Self {
            length,
            mass,
            time,
            temperature,
        }
    }

    /// 모든 지수에 `n`을 곱한다 (`m^3` 같은 거듭제곱). 지수가 i8 범위를 넘으면 None.
    pub fn checked_powi(self, n: i8) -> Option<Self> {
        Some(Self::new(
            self.length.checked_mul(n)?,
            self.mass.checked_mul(n)?,
            self.time.checked_mul(n)?,
            self.temperature.checked_mul(n)?,
        ))
    }

    /// 두 차원의 곱 (지수 합). 넘치면 None.
    pub fn checked_mul(self, rhs: Dimension) -> Option<Self> {
        Some(Self::new(
            self.length.checked_add(rhs.length)?,
            self.mass.checked_add(rhs.mass)?,
            self.time.checked_add(rhs.time)?,
            self.temperature.checked_add(rhs.temperature)?,
        ))
    }

    pub fn is_dimensionless(&self) -> bool {
        *self == Self::DIMENSIONLESS
    }
}

/// 기본 SI 단위 표기로 출력한다. 예: `m^3/s`, `kg`, `dimensionless`.
impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "dimensionless");
        }
        // i16로 넓혀서 -128도 부호를 뒤집을 수 있게 한다.
        let factors = [
            ("kg", i16::from(self.mass)),
            ("m", i16::from(self.length)),
            ("s", i16::from(self.time)),
            ("K", i16::from(self.temperature)),
        ];
        let render = |exps: Vec<(&str, i16)>| -> String {
            exps.iter()
                .map(|(sym, e)| {
                    if *e == 1 {
                        sym.to_string()
                    } else {
                        format!("{sym}^{e}")
                    }
                })
                .collect::<Vec<_>>()
                .join("*")
        };
        let num: Vec<_> = factors.iter().copied().filter(|(_, e)| *e > 0).collect();
        let den: Vec<_> = factors
            .iter()
            .copied()
            .filter(|(_, e)| *e < 0)
            .map(|(s, e)| (s, -e))
            .collect();
        let num_str = if num.is_empty() {
            "1".to_string()
        } else {
            render(num)
        };
        if den.is_empty() {
            write!(f, "{num_str}")
        } else if den.len() == 1 {
            write!(f, "{num_str}/{}", render(den))
        } else {
            write!(f, "{num_str}/({})", render(den))
        }
    }
}

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuantityKind {
    Length,
    Temperature,
    VolumeFlowRate,
}

impl QuantityKind {
    pub fn dimension(&self) -> Dimension {
        match self {
            QuantityKind::Length => Dimension::LENGTH,
            QuantityKind::Temperature => Dimension::TEMPERATURE,
            QuantityKind::VolumeFlowRate => Dimension::VOLUME_FLOW_RATE,
        }
    }
}

/// 단위식의 SI 환산 방식.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// 곱셈 환산: SI = 값 × 배율
    Factor(f64),
    /// 기준점이 있는 온도 척도 (단독으로 쓰인 온도 단위만 해당)
    Temperature(TemperatureUnit),
}

/// 해석이 끝난 단위식. 생성 후에는 차원이 바뀌지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedUnit {
    /// 사용자가 입력한 단위 문자열 (앞뒤 공백 제거)
    pub text: String,
    pub dimension: Dimension,
    pub scale: Scale,
}

impl ResolvedUnit {
    pub fn dimensionless() -> Self {
        Self {
            text: String::new(),
            dimension: Dimension::DIMENSIONLESS,
            scale: Scale::Factor(1.0),
        }
    }

    /// 이 단위로 표현된 크기를 SI 기준 값으로 환산한다.
    pub fn to_si(&self, magnitude: f64) -> f64 {
        match self.scale {
            Scale::Factor(factor) => magnitude * factor,
            Scale::Temperature(unit) => to_kelvin(magnitude, unit),
        }
    }
}

/// 수치와 단위를 함께 담는 값. 크기는 유한하다.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionedValue {
    pub magnitude: f64,
    pub unit: ResolvedUnit,
}

impl DimensionedValue {
    pub fn dimension(&self) -> Dimension {
        self.unit.dimension
    }

    /// SI 기준 단위(m, K, m3/s 등)로 환산한 값.
    pub fn to_si(&self) -> f64 {
        self.unit.to_si(self.magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_in_base_units() {
        assert_eq!(Dimension::VOLUME_FLOW_RATE.to_string(), "m^3/s");
        assert_eq!(Dimension::MASS.to_string(), "kg");
        assert_eq!(Dimension::DIMENSIONLESS.to_string(), "dimensionless");
        assert_eq!(Dimension::TIME.checked_powi(-1).map(|d| d.to_string()).as_deref(), Some("1/s"));
        assert_eq!(Dimension::new(-3, 1, 0, 0).to_string(), "kg/m^3");
        assert_eq!(Dimension::new(-128, 0, 0, 0).to_string(), "1/m^128");
    }

    #[test]
    fn flow_rate_is_volume_over_time() {
        let per_second = Dimension::TIME.checked_powi(-1).expect("1/s");
        assert_eq!(
            Dimension::LENGTH
                .checked_powi(3)
                .and_then(|v| v.checked_mul(per_second)),
            Some(QuantityKind::VolumeFlowRate.dimension())
        );
        assert_eq!(Dimension::VOLUME.checked_mul(per_second), Some(Dimension::VOLUME_FLOW_RATE));
    }

    #[test]
    fn exponent_overflow_is_none() {
        assert_eq!(Dimension::VOLUME.checked_powi(50), None);
        assert_eq!(
            Dimension::new(127, 0, 0, 0).checked_mul(Dimension::LENGTH),
            None
        );
        assert_eq!(Dimension::LENGTH.checked_powi(-128).map(|d| d.length), Some(-128));
    }
}
