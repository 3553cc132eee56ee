use crate::utils::error::{CustomerError, Result};
use rust_decimal::Decimal;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Only the empty string is rejected; whitespace is a legal value.
pub fn validate_required_argument(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CustomerError::InvalidArgument {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO {
        return Err(CustomerError::OutOfRange {
            field: field_name.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CustomerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CustomerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(CustomerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
