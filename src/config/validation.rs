//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Endpoints must be absolute http(s) URLs
//! - Timeouts must be non-zero
//! - Token decimals must fit a U256 scale factor
//!
//! Returns all validation errors, not just the first.

use std::fmt;

use crate::config::schema::ClientConfig;

/// Largest power of ten that fits in a U256.
pub const MAX_DECIMALS: u8 = 77;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_url("router.url", &config.router.url, &mut errors);
    check_url("everpay.url", &config.everpay.url, &mut errors);

    if config.router.timeout_secs == 0 {
        errors.push(ValidationError {
            field: "router.timeout_secs",
            message: "must be greater than 0".to_string(),
        });
    }
    if config.everpay.timeout_secs == 0 {
        errors.push(ValidationError {
            field: "everpay.timeout_secs",
            message: "must be greater than 0".to_string(),
        });
    }
    if config.everpay.token_tag.is_empty() {
        errors.push(ValidationError {
            field: "everpay.token_tag",
            message: "must not be empty".to_string(),
        });
    }
    if config.token.decimals > MAX_DECIMALS {
        errors.push(ValidationError {
            field: "token.decimals",
            message: format!("must be at most {}", MAX_DECIMALS),
        });
    }
    if config.genesis.halo_address.is_empty() {
        errors.push(ValidationError {
            field: "genesis.halo_address",
            message: "must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_url(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    match url::Url::parse(value) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError {
            field,
            message: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError {
            field,
            message: format!("invalid URL '{}': {}", value, e),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ClientConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ClientConfig::default();
        config.router.url = "not a url".to_string();
        config.everpay.url = "ftp://example.com".to_string();
        config.router.timeout_secs = 0;
        config.token.decimals = 78;

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["router.url", "everpay.url", "router.timeout_secs", "token.decimals"]
        );
        assert!(errors[1].to_string().contains("unsupported scheme 'ftp'"));
    }
}
