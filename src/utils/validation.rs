use crate::utils::error::{KataError, Result};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(KataError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(KataError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(KataError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 確認輸入是陣列，否則回報欄位位置
pub fn validate_sequence(field_name: &str, value: &Value) -> Result<()> {
    if !value.is_array() {
        return Err(KataError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected an array".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique<T: Eq + Hash + Debug>(field_name: &str, values: &[T]) -> Result<()> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(KataError::ConfigValidationError {
                field: field_name.to_string(),
                message: format!("{:?} is listed more than once", value),
            });
        }
    }
    Ok(())
}
