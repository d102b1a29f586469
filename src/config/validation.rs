use crate::config::types::{Config, OutputConfig, ScannerConfig, UserAgentConfig};
use crate::ConfigError;

/// Upper bound on pages fetched concurrently in one batch
const MAX_BATCH_SIZE: usize = 100;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scanner_config(&config.scanner)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates scanner configuration
fn validate_scanner_config(config: &ScannerConfig) -> Result<(), ConfigError> {
    if config.batch_size < 1 || config.batch_size > MAX_BATCH_SIZE {
        return Err(ConfigError::Validation(format!(
            "batch_size must be between 1 and {}, got {}",
            MAX_BATCH_SIZE, config.batch_size
        )));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    if config.sitemap_paths.is_empty() {
        return Err(ConfigError::Validation(
            "sitemap_paths must contain at least one path".to_string(),
        ));
    }

    for path in &config.sitemap_paths {
        validate_sitemap_path(path)?;
    }

    Ok(())
}

/// Sitemap paths are joined onto the base URL, so they must be root-relative
fn validate_sitemap_path(path: &str) -> Result<(), ConfigError> {
    if !path.starts_with('/') {
        return Err(ConfigError::InvalidUrl(format!(
            "Sitemap path '{}' must start with '/'",
            path
        )));
    }

    if path.contains(char::is_whitespace) {
        return Err(ConfigError::InvalidUrl(format!(
            "Sitemap path '{}' cannot contain whitespace",
            path
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.pool.is_empty() {
        return Err(ConfigError::Validation(
            "user agent pool cannot be empty".to_string(),
        ));
    }

    if config.pool.iter().any(|ua| ua.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "user agent pool cannot contain blank entries".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.json_path.is_empty() {
        return Err(ConfigError::Validation(
            "json_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
