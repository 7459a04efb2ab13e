use alchemist_errors::{AlchemistError, AlchemistResult};

/// Trait for configuration validation
pub trait ConfigValidator {
    fn validate(&self) -> AlchemistResult<()>;
}

/// General validation utilities
pub struct ValidationUtils;

impl ValidationUtils {
    pub fn validate_not_empty(value: &str, field_name: &str) -> AlchemistResult<()> {
        if value.trim().is_empty() {
            return Err(AlchemistError::config_error(format!("{field_name} 不能为空")));
        }
        Ok(())
    }

    pub fn validate_bind_address(address: &str, field_name: &str) -> AlchemistResult<()> {
        address
            .parse::<std::net::SocketAddr>()
            .map(|_| ())
            .map_err(|_| {
                AlchemistError::config_error(format!("{field_name} 不是有效的监听地址: {address}"))
            })
    }

    pub fn validate_range(value: u64, min: u64, max: u64, field_name: &str) -> AlchemistResult<()> {
        if value < min || value > max {
            return Err(AlchemistError::config_error(format!(
                "{field_name} 必须在 {min} 到 {max} 之间，当前为 {value}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(ValidationUtils::validate_not_empty("info", "log_level").is_ok());
        assert!(ValidationUtils::validate_not_empty("  ", "log_level").is_err());
    }

    #[test]
    fn test_validate_bind_address() {
        assert!(ValidationUtils::validate_bind_address("0.0.0.0:8080", "bind").is_ok());
        assert!(ValidationUtils::validate_bind_address("[::1]:3000", "bind").is_ok());
        assert!(ValidationUtils::validate_bind_address("localhost", "bind").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(ValidationUtils::validate_range(10, 1, 100, "size").is_ok());
        let err = ValidationUtils::validate_range(0, 1, 100, "size").unwrap_err();
        assert!(err.to_string().contains("size"));
    }
}
