use serde::{Deserialize, Serialize};

/// 질량 단위. 내부 기준은 kg이다.
///
/// 계산 입력에는 쓰이지 않지만, 잘못된 차원(예: 입자 직경에 mg)을
/// 해석 실패가 아닌 단위 불일치로 보고하기 위해 인식한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Kilogram,
    Gram,
    Milligram,
    Pound,
}

impl MassUnit {
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "kg" | "kilogram" | "kilograms" => Some(MassUnit::Kilogram),
            "g" | "gram" | "grams" => Some(MassUnit::Gram),
            "mg" | "milligram" | "milligrams" => Some(MassUnit::Milligram),
            "lb" | "lbs" | "lbm" | "pound" | "pounds" => Some(MassUnit::Pound),
            _ => None,
        }
    }
}

pub fn to_kg(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value,
        MassUnit::Gram => value / 1000.0,
        MassUnit::Milligram => value / 1_000_000.0,
        MassUnit::Pound => value * 0.453_592_37,
    }
}
