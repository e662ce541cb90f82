use serde::{Deserialize, Serialize};

/// 시간 단위. 유량 분모에만 쓰이며 내부 기준은 초이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
}

impl TimeUnit {
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "s" | "sec" | "second" | "seconds" => Some(TimeUnit::Second),
            "min" | "minute" | "minutes" => Some(TimeUnit::Minute),
            "h" | "hr" | "hour" | "hours" => Some(TimeUnit::Hour),
            _ => None,
        }
    }
}

pub fn to_second(value: f64, unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Second => value,
        TimeUnit::Minute => value * 60.0,
        TimeUnit::Hour => value * 3600.0,
    }
}
