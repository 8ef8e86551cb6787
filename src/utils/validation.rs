use crate::utils::error::{LoanCheckError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(LoanCheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LoanCheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(LoanCheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// 驗證 `[min, max]` 區間本身是否合法（非空）
pub fn validate_bounds<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    min: T,
    max: T,
) -> Result<()> {
    if min > max {
        return Err(LoanCheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("[{}, {}]", min, max),
            reason: "Lower bound must not exceed upper bound".to_string(),
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
        return Err(LoanCheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("files.cases", "pruebas.jsonl").is_ok());
        assert!(validate_path("files.cases", "").is_err());
        assert!(validate_path("files.cases", "   ").is_err());
        assert!(validate_path("files.cases", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("generator.count", 100, 1).is_ok());
        assert!(validate_positive_number("generator.count", 0, 1).is_err());
    }

    #[test]
    fn test_validate_bounds_and_range() {
        assert!(validate_bounds("generator.income", 5000, 10000).is_ok());
        assert!(validate_bounds("generator.income", 5000, 5000).is_ok());
        assert!(validate_bounds("generator.income", 10000, 5000).is_err());

        assert!(validate_range("rule.base_threshold_pct", 15u32, 0, 100).is_ok());
        assert!(validate_range("rule.base_threshold_pct", 150u32, 0, 100).is_err());
    }
}
