use crate::utils::error::{GrowthError, Result};
use serde_json::Value;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(GrowthError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(GrowthError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(GrowthError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// 讀取非負數欄位；缺少或 null 時回傳 `default`
pub fn non_negative_number(field_name: &str, value: Option<&Value>, default: f64) -> Result<f64> {
    match value {
        None | Some(Value::Null) => Ok(default),
        Some(v) => {
            let number = v
                .as_f64()
                .ok_or_else(|| GrowthError::invalid_field(field_name, v, "expected a number"))?;
            if number < 0.0 {
                return Err(GrowthError::invalid_field(
                    field_name,
                    v,
                    "must not be negative",
                ));
            }
            // 大整數轉 f64 會失真，1 單位的比較就不可靠
            if let Some(integer) = v.as_u64() {
                if number >= U64_LIMIT || number as u64 != integer {
                    return Err(GrowthError::invalid_field(
                        field_name,
                        v,
                        "integer out of exact range",
                    ));
                }
            }
            Ok(number)
        }
    }
}

pub fn string_field(field_name: &str, value: Option<&Value>, default: &str) -> Result<String> {
    match value {
        None | Some(Value::Null) => Ok(default.to_string()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(v) => Err(GrowthError::invalid_field(field_name, v, "expected a string")),
    }
}
