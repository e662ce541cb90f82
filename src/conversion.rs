//! `"<숫자> <단위식>"` 문자열을 [`DimensionedValue`]로 해석한다.
//!
//! 단위식은 닫힌 단위표(`units::*`)의 기호를 `*`, `/`, `^n`(또는 `**n`, `m3` 같은
//! 접미 지수)로 조합한 형태만 허용한다. 기호는 대소문자를 구분하지 않는다.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::quantity::{Dimension, DimensionedValue, ResolvedUnit, Scale};
use crate::units::{
    flow, length, mass, time, volume, LengthUnit, MassUnit, TemperatureUnit, TimeUnit,
    VolumeFlowUnit, VolumeUnit,
};

lazy_static! {
    /// 앞쪽 숫자 리터럴과 나머지 단위식을 분리한다.
    /// 예: "5 nm", "1.5e-9 m", "-20 degC", "10L/min"
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r"^\s*([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)\s*(.*?)\s*$"
    )
    .expect("quantity pattern is a valid regex");

    /// 단위 인자 하나: 이름 + 선택적 지수 (`m^3`, `cm3`, `s^-1`).
    static ref FACTOR_PATTERN: Regex = Regex::new(
        r"^([^\d^+-]+?)(?:\^([+-]?\d+)|(\d+))?$"
    )
    .expect("factor pattern is a valid regex");
}

/// 문자열 해석 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// 앞쪽에 숫자 리터럴이 없음
    #[error("no leading number")]
    MissingNumber,
    /// 숫자가 유한하지 않음 (overflow 등)
    #[error("number is not finite")]
    NonFinite,
    /// 알 수 없는 단위 문자열
    #[error("unknown unit '{0}'")]
    UnknownUnit(String),
    /// 단위식 문법 오류
    #[error("malformed unit expression '{0}'")]
    Malformed(String),
    /// 섭씨/화씨를 다른 단위와 조합함
    #[error("offset temperature unit '{0}' cannot be combined with other units")]
    OffsetInCompound(String),
}

/// 입력 문자열을 수치와 단위로 해석한다.
pub fn parse_quantity(raw: &str) -> Result<DimensionedValue, ConversionError> {
    let caps = QUANTITY_PATTERN
        .captures(raw)
        .ok_or(ConversionError::MissingNumber)?;
    let number = caps.get(1).map_or("", |m| m.as_str());
    let unit_text = caps.get(2).map_or("", |m| m.as_str());

    let magnitude: f64 = number
        .parse()
        .map_err(|_| ConversionError::MissingNumber)?;
    if !magnitude.is_finite() {
        return Err(ConversionError::NonFinite);
    }
    let unit = resolve_unit(unit_text)?;
    Ok(DimensionedValue { magnitude, unit })
}

/// 단위식을 SI 배율과 차원으로 환원한다. 빈 문자열은 무차원이다.
pub fn resolve_unit(text: &str) -> Result<ResolvedUnit, ConversionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(ResolvedUnit::dimensionless());
    }
    let expr: String = trimmed
        .replace("**", "^")
        .replace('·', "*")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let factors = split_factors(&expr)?;

    // 온도 단위가 단독이면 아핀 환산을 그대로 쓴다.
    if let [(name, 1, false)] = factors.as_slice() {
        if let Some(unit) = TemperatureUnit::from_symbol(name) {
            return Ok(ResolvedUnit {
                text: trimmed.to_string(),
                dimension: Dimension::TEMPERATURE,
                scale: Scale::Temperature(unit),
            });
        }
    }

    let mut scale = 1.0;
    let mut dimension = Dimension::DIMENSIONLESS;
    for (name, exp, divide) in factors {
        let (factor, dim) = lookup_symbol(name)?;
        let power = if divide { -i32::from(exp) } else { i32::from(exp) };
        scale *= factor.powi(power);
        // 지수가 i8 범위를 넘는 단위식은 문법 오류로 본다.
        dimension = dim
            .checked_powi(exp)
            .and_then(|d| if divide { d.checked_powi(-1) } else { Some(d) })
            .and_then(|d| dimension.checked_mul(d))
            .ok_or_else(|| ConversionError::Malformed(expr.clone()))?;
    }
    Ok(ResolvedUnit {
        text: trimmed.to_string(),
        dimension,
        scale: Scale::Factor(scale),
    })
}

/// `a*b/c^2`를 (이름, 지수, 분모 여부) 목록으로 나눈다. `/`는 바로 뒤 인자에만 걸린다.
fn split_factors(expr: &str) -> Result<Vec<(&str, i8, bool)>, ConversionError> {
    let mut out = Vec::new();
    let mut divide = false;
    let mut start = 0;
    let bytes: Vec<(usize, char)> = expr.char_indices().collect();
    for (pos, &(idx, ch)) in bytes.iter().enumerate() {
        let is_last = pos + 1 == bytes.len();
        if ch == '*' || ch == '/' || is_last {
            let end = if ch == '*' || ch == '/' {
                idx
            } else {
                idx + ch.len_utf8()
            };
            let token = &expr[start..end];
            out.push(parse_factor(token, expr, divide)?);
            divide = ch == '/';
            start = idx + ch.len_utf8();
            if is_last && (ch == '*' || ch == '/') {
                return Err(ConversionError::Malformed(expr.to_string()));
            }
        }
    }
    Ok(out)
}

fn parse_factor<'a>(
    token: &'a str,
    expr: &str,
    divide: bool,
) -> Result<(&'a str, i8, bool), ConversionError> {
    if token.is_empty() {
        return Err(ConversionError::Malformed(expr.to_string()));
    }
    let caps = FACTOR_PATTERN
        .captures(token)
        .ok_or_else(|| ConversionError::Malformed(expr.to_string()))?;
    let name = caps.get(1).map_or("", |m| m.as_str());
    let exp = match caps.get(2).or_else(|| caps.get(3)) {
        Some(m) => m
            .as_str()
            .parse::<i8>()
            .map_err(|_| ConversionError::Malformed(expr.to_string()))?,
        None => 1,
    };
    if exp == 0 {
        return Err(ConversionError::Malformed(expr.to_string()));
    }
    Ok((name, exp, divide))
}

/// 단위 기호 하나를 (SI 배율, 차원)으로 찾는다.
fn lookup_symbol(name: &str) -> Result<(f64, Dimension), ConversionError> {
    if let Some(u) = VolumeFlowUnit::from_symbol(name) {
        return Ok((
            flow::to_cubic_meter_per_second(1.0, u),
            Dimension::VOLUME_FLOW_RATE,
        ));
    }
    if let Some(u) = LengthUnit::from_symbol(name) {
        return Ok((length::to_meter(1.0, u), Dimension::LENGTH));
    }
    if let Some(u) = VolumeUnit::from_symbol(name) {
        return Ok((volume::to_cubic_meter(1.0, u), Dimension::VOLUME));
    }
    if let Some(u) = TimeUnit::from_symbol(name) {
        return Ok((time::to_second(1.0, u), Dimension::TIME));
    }
    if let Some(u) = MassUnit::from_symbol(name) {
        return Ok((mass::to_kg(1.0, u), Dimension::MASS));
    }
    if let Some(u) = TemperatureUnit::from_symbol(name) {
        if u.is_offset() {
            return Err(ConversionError::OffsetInCompound(name.to_string()));
        }
        // 켈빈/랭킨은 배율만 다르다.
        let factor = crate::units::temperature::to_kelvin(1.0, u);
        return Ok((factor, Dimension::TEMPERATURE));
    }
    Err(ConversionError::UnknownUnit(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn si(raw: &str) -> f64 {
        parse_quantity(raw).expect(raw).to_si()
    }

    #[test]
    fn splits_number_and_unit() {
        let v = parse_quantity("5 nm").expect("5 nm");
        assert_eq!(v.magnitude, 5.0);
        assert_eq!(v.unit.text, "nm");
        assert_eq!(v.dimension(), Dimension::LENGTH);

        let v = parse_quantity("1.5e-9m").expect("no space");
        assert!((v.to_si() - 1.5e-9).abs() < 1e-20);
    }

    #[test]
    fn compound_flow_expressions() {
        let expected = 10.0 / 1000.0 / 60.0;
        for raw in [
            "10 L/min",
            "10 l / min",
            "10 lpm",
            "10000 cm^3/min",
            "10000 cm3/min",
            "10000 cc/min",
            "0.01 m**3/min",
        ] {
            let v = parse_quantity(raw).expect(raw);
            assert_eq!(v.dimension(), Dimension::VOLUME_FLOW_RATE, "{raw}");
            assert!((v.to_si() - expected).abs() < 1e-12, "{raw}");
        }
        assert!((si("1 m^3/s") - 1.0).abs() < 1e-12);
        assert!((si("3.6 m^3/h") - 0.001).abs() < 1e-12);
    }

    #[test]
    fn temperature_is_affine_when_alone() {
        assert!((si("0 degC") - 273.15).abs() < 1e-9);
        assert!((si("32 °F") - 273.15).abs() < 1e-9);
        assert!((si("491.67 R") - 273.15).abs() < 1e-9);
    }

    #[test]
    fn offset_unit_in_compound_is_rejected() {
        assert_eq!(
            resolve_unit("degC/min"),
            Err(ConversionError::OffsetInCompound("degC".to_string()))
        );
        let per_kelvin = resolve_unit("1/K");
        assert!(per_kelvin.is_err(), "bare '1' is not a unit symbol");
    }

    #[test]
    fn wrong_dimension_still_resolves() {
        let v = parse_quantity("3 mg").expect("mass parses");
        assert_eq!(v.dimension(), Dimension::MASS);
        let v = parse_quantity("42").expect("plain number");
        assert!(v.dimension().is_dimensionless());
    }

    #[test]
    fn malformed_inputs() {
        assert_eq!(parse_quantity("nm 5"), Err(ConversionError::MissingNumber));
        assert_eq!(parse_quantity(""), Err(ConversionError::MissingNumber));
        assert_eq!(parse_quantity("1e999 m"), Err(ConversionError::NonFinite));
        assert_eq!(
            parse_quantity("5 furlongs"),
            Err(ConversionError::UnknownUnit("furlongs".to_string()))
        );
        assert!(matches!(
            parse_quantity("5 m/"),
            Err(ConversionError::Malformed(_))
        ));
        assert!(matches!(
            parse_quantity("5 m^0"),
            Err(ConversionError::Malformed(_))
        ));
    }

    #[test]
    fn exponent_overflow_is_malformed() {
        for raw in ["5 L^50", "5 m^127*m", "5 m/m^-128", "5 m^127*m^127*m^3"] {
            assert!(
                matches!(parse_quantity(raw), Err(ConversionError::Malformed(_))),
                "{raw}"
            );
        }
        // 범위 안의 큰 지수는 그대로 허용한다.
        let v = parse_quantity("1 m^120").expect("m^120");
        assert_eq!(v.dimension().length, 120);
    }
}
