//! 다섯 개의 입력 문자열을 해석·검증해 SI 기준 값([`SiInputs`])을 만든다.
//!
//! 항목 순서(입자 직경 → 온도 → 유량 → 배관 길이 → 배관 내경)대로 검사하고
//! 처음 만난 오류를 바로 반환한다.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::conversion::parse_quantity;
use crate::error::CalculationError;
use crate::quantity::{Dimension, QuantityKind};
use crate::units::{LengthUnit, TemperatureUnit, VolumeFlowUnit};

/// 계산에 필요한 입력 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    ParticleDiameter,
    AerosolTemperature,
    Flowrate,
    TubeLength,
    TubeDiameter,
}

impl InputField {
    /// 검사 순서.
    pub const ALL: [InputField; 5] = [
        InputField::ParticleDiameter,
        InputField::AerosolTemperature,
        InputField::Flowrate,
        InputField::TubeLength,
        InputField::TubeDiameter,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InputField::ParticleDiameter => "Particle Diameter",
            InputField::AerosolTemperature => "Aerosol Temperature",
            InputField::Flowrate => "Flowrate",
            InputField::TubeLength => "Tube Length",
            InputField::TubeDiameter => "Tube Diameter",
        }
    }

    /// 맵 기반 입력에서 쓰는 키.
    pub fn key(&self) -> &'static str {
        match self {
            InputField::ParticleDiameter => "particle_diameter",
            InputField::AerosolTemperature => "temperature",
            InputField::Flowrate => "flowrate",
            InputField::TubeLength => "tube_length",
            InputField::TubeDiameter => "tube_diameter",
        }
    }

    pub fn expected_kind(&self) -> QuantityKind {
        match self {
            InputField::AerosolTemperature => QuantityKind::Temperature,
            InputField::Flowrate => QuantityKind::VolumeFlowRate,
            InputField::ParticleDiameter | InputField::TubeLength | InputField::TubeDiameter => {
                QuantityKind::Length
            }
        }
    }

    /// 오류 메시지에 보여줄 허용 단위 목록. 단위 표의 기호에서 만든다.
    pub fn accepted_units(&self) -> Vec<String> {
        match self.expected_kind() {
            QuantityKind::Length => LengthUnit::ALL
                .iter()
                .map(|u| u.symbol().to_string())
                .collect(),
            QuantityKind::Temperature => TemperatureUnit::ALL
                .iter()
                .map(|u| u.symbol().to_string())
                .collect(),
            // 기준 단위(m^3/s)를 맨 앞에 둔다.
            QuantityKind::VolumeFlowRate => {
                std::iter::once(Dimension::VOLUME_FLOW_RATE.to_string())
                    .chain(VolumeFlowUnit::ALL.iter().map(|u| u.symbol().to_string()))
                    .collect()
            }
        }
    }

    /// 입력 예시 (원래 대화상자의 안내 문구와 같은 값).
    pub fn example(&self) -> &'static str {
        match self {
            InputField::ParticleDiameter => "5 nm",
            InputField::AerosolTemperature => "300 K",
            InputField::Flowrate => "10 L/min",
            InputField::TubeLength => "2 m",
            InputField::TubeDiameter => "7 cm",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 표시 계층이 넘겨주는 원본 문자열 다섯 개.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInputs {
    pub particle_diameter: String,
    pub temperature: String,
    pub flowrate: String,
    pub tube_length: String,
    pub tube_diameter: String,
}

impl RawInputs {
    pub fn new(
        particle_diameter: impl Into<String>,
        temperature: impl Into<String>,
        flowrate: impl Into<String>,
        tube_length: impl Into<String>,
        tube_diameter: impl Into<String>,
    ) -> Self {
        Self {
            particle_diameter: particle_diameter.into(),
            temperature: temperature.into(),
            flowrate: flowrate.into(),
            tube_length: tube_length.into(),
            tube_diameter: tube_diameter.into(),
        }
    }

    /// 키(`InputField::key`) → 문자열 맵에서 만든다. 없는 키는 빈 문자열로 두어 해석 단계에서 걸러진다.
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        let get = |field: InputField| map.get(field.key()).cloned().unwrap_or_default();
        Self {
            particle_diameter: get(InputField::ParticleDiameter),
            temperature: get(InputField::AerosolTemperature),
            flowrate: get(InputField::Flowrate),
            tube_length: get(InputField::TubeLength),
            tube_diameter: get(InputField::TubeDiameter),
        }
    }

    pub fn get(&self, field: InputField) -> &str {
        match field {
            InputField::ParticleDiameter => &self.particle_diameter,
            InputField::AerosolTemperature => &self.temperature,
            InputField::Flowrate => &self.flowrate,
            InputField::TubeLength => &self.tube_length,
            InputField::TubeDiameter => &self.tube_diameter,
        }
    }

    pub fn set(&mut self, field: InputField, value: impl Into<String>) {
        let slot = match field {
            InputField::ParticleDiameter => &mut self.particle_diameter,
            InputField::AerosolTemperature => &mut self.temperature,
            InputField::Flowrate => &mut self.flowrate,
            InputField::TubeLength => &mut self.tube_length,
            InputField::TubeDiameter => &mut self.tube_diameter,
        };
        *slot = value.into();
    }
}

/// SI 기준으로 환산된 계산 입력. 다섯 값 모두 0보다 크다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SiInputs {
    /// 입자 직경 [m]
    pub particle_diameter_m: f64,
    /// 에어로졸 온도 [K]
    pub temperature_k: f64,
    /// 체적 유량 [m3/s]
    pub flowrate_m3_s: f64,
    /// 배관 길이 [m]
    pub tube_length_m: f64,
    /// 배관 내경 [m]
    pub tube_diameter_m: f64,
}

impl SiInputs {
    /// 값을 직접 지정해 만든다. 0 이하이거나 유한하지 않은 값은 거부한다.
    pub fn new(
        particle_diameter_m: f64,
        temperature_k: f64,
        flowrate_m3_s: f64,
        tube_length_m: f64,
        tube_diameter_m: f64,
    ) -> Result<Self, CalculationError> {
        let inputs = Self {
            particle_diameter_m,
            temperature_k,
            flowrate_m3_s,
            tube_length_m,
            tube_diameter_m,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::ParticleDiameter => self.particle_diameter_m,
            InputField::AerosolTemperature => self.temperature_k,
            InputField::Flowrate => self.flowrate_m3_s,
            InputField::TubeLength => self.tube_length_m,
            InputField::TubeDiameter => self.tube_diameter_m,
        }
    }

    /// 모든 항목이 유한한 양수인지 확인한다.
    pub fn validate(&self) -> Result<(), CalculationError> {
        for field in InputField::ALL {
            ensure_positive(field, self.get(field))?;
        }
        Ok(())
    }
}

fn ensure_positive(field: InputField, value: f64) -> Result<f64, CalculationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CalculationError::NonPositive { field, value })
    }
}

/// 한 항목을 해석하고 차원·부호를 검사한 뒤 SI 값을 돌려준다.
pub fn parse_field(field: InputField, raw: &str) -> Result<f64, CalculationError> {
    let value = parse_quantity(raw).map_err(|reason| CalculationError::ParseFailure {
        field,
        raw_text: raw.to_string(),
        reason,
    })?;

    let expected = field.expected_kind().dimension();
    if value.dimension() != expected {
        let supplied_unit = if value.unit.text.is_empty() {
            "dimensionless".to_string()
        } else {
            value.unit.text.clone()
        };
        return Err(CalculationError::InvalidUnit {
            field,
            supplied_unit,
            base_units: value.dimension().to_string(),
            expected_units: field.accepted_units(),
        });
    }

    let si = value.to_si();
    debug!(field = field.key(), raw, si, "parsed input");
    ensure_positive(field, si)
}

/// 다섯 개 입력을 모두 해석해 [`SiInputs`]를 만든다. 첫 번째 오류에서 멈춘다.
pub fn parse_and_validate(raw: &RawInputs) -> Result<SiInputs, CalculationError> {
    let mut values = [0.0; 5];
    for (slot, field) in values.iter_mut().zip(InputField::ALL) {
        *slot = parse_field(field, raw.get(field))?;
    }
    let [particle_diameter_m, temperature_k, flowrate_m3_s, tube_length_m, tube_diameter_m] =
        values;
    Ok(SiInputs {
        particle_diameter_m,
        temperature_k,
        flowrate_m3_s,
        tube_length_m,
        tube_diameter_m,
    })
}
