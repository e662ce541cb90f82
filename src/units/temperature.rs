use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다. 섭씨/화씨는 기준점이 있는 아핀 척도이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 4] = [
        TemperatureUnit::Kelvin,
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Rankine,
    ];

    /// 단위 기호를 enum으로 해석한다. `degC`, `°C`, `C` 모두 섭씨로 본다.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "k" | "kelvin" => Some(TemperatureUnit::Kelvin),
            "c" | "°c" | "degc" | "deg_c" | "celsius" | "degree_celsius" => {
                Some(TemperatureUnit::Celsius)
            }
            "f" | "°f" | "degf" | "deg_f" | "fahrenheit" | "degree_fahrenheit" => {
                Some(TemperatureUnit::Fahrenheit)
            }
            "r" | "°r" | "degr" | "rankine" => Some(TemperatureUnit::Rankine),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Rankine => "°R",
        }
    }

    /// 켈빈 환산 시 기준점 이동이 필요한 단위인지 여부.
    pub fn is_offset(&self) -> bool {
        matches!(self, TemperatureUnit::Celsius | TemperatureUnit::Fahrenheit)
    }
}

/// 주어진 값을 켈빈으로 변환한다.
pub fn to_kelvin(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value,
        TemperatureUnit::Celsius => value + 273.15,
        TemperatureUnit::Fahrenheit => (value + 459.67) * 5.0 / 9.0,
        TemperatureUnit::Rankine => value * 5.0 / 9.0,
    }
}

/// 켈빈 값을 원하는 단위로 변환한다.
pub fn from_kelvin(value_k: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value_k,
        TemperatureUnit::Celsius => value_k - 273.15,
        TemperatureUnit::Fahrenheit => value_k * 9.0 / 5.0 - 459.67,
        TemperatureUnit::Rankine => value_k * 9.0 / 5.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freezing_point_matches_across_scales() {
        let c = to_kelvin(0.0, TemperatureUnit::Celsius);
        let f = to_kelvin(32.0, TemperatureUnit::Fahrenheit);
        let k = to_kelvin(273.15, TemperatureUnit::Kelvin);
        assert!((c - k).abs() < 1e-9);
        assert!((f - k).abs() < 1e-9);
    }

    #[test]
    fn boiling_point_back_from_kelvin() {
        let k = to_kelvin(100.0, TemperatureUnit::Celsius);
        assert!((from_kelvin(k, TemperatureUnit::Fahrenheit) - 212.0).abs() < 1e-9);
        assert!((from_kelvin(k, TemperatureUnit::Celsius) - 100.0).abs() < 1e-9);
        for unit in TemperatureUnit::ALL {
            assert_eq!(TemperatureUnit::from_symbol(unit.symbol()), Some(unit));
        }
        assert!(TemperatureUnit::from_symbol("degC").is_some_and(|u| u.is_offset()));
        assert!(!TemperatureUnit::Kelvin.is_offset());
    }
}
