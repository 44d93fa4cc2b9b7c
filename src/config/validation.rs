use crate::config::types::{BatchConfig, Config, FetchConfig, RendererConfig, UserAgentConfig};
use crate::ConfigError;

const MAX_TIMEOUT_SECS: u64 = 60;
const MAX_REDIRECTS: usize = 20;
const MAX_SETTLE_MS: u64 = 30_000;
const MAX_WORKERS: usize = 64;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_renderer_config(&config.renderer)?;
    validate_batch_config(&config.batch)?;
    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    for (name, value) in [
        ("timeout_secs", config.timeout_secs),
        ("probe_timeout_secs", config.probe_timeout_secs),
    ] {
        if value < 1 || value > MAX_TIMEOUT_SECS {
            return Err(ConfigError::Validation(format!(
                "{} must be between 1 and {}, got {}",
                name, MAX_TIMEOUT_SECS, value
            )));
        }
    }

    if config.probe_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "probe_timeout_secs ({}) must not exceed timeout_secs ({})",
            config.probe_timeout_secs, config.timeout_secs
        )));
    }

    if config.max_redirects > MAX_REDIRECTS {
        return Err(ConfigError::Validation(format!(
            "max_redirects must be <= {}, got {}",
            MAX_REDIRECTS, config.max_redirects
        )));
    }

    Ok(())
}

/// Validates the client identities
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.primary.trim().is_empty() {
        return Err(ConfigError::Validation(
            "primary user agent cannot be empty".to_string(),
        ));
    }

    if config.alternate.trim().is_empty() {
        return Err(ConfigError::Validation(
            "alternate user agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates renderer configuration
///
/// The executable is checked even when rendering is disabled.
fn validate_renderer_config(config: &RendererConfig) -> Result<(), ConfigError> {
    if let Some(executable) = &config.executable {
        if executable.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "executable cannot be empty".to_string(),
            ));
        }
    }

    if config.settle_ms > MAX_SETTLE_MS {
        return Err(ConfigError::Validation(format!(
            "settle_ms must be <= {}ms, got {}ms",
            MAX_SETTLE_MS, config.settle_ms
        )));
    }

    Ok(())
}

/// Validates batch configuration
fn validate_batch_config(config: &BatchConfig) -> Result<(), ConfigError> {
    if config.max_workers < 1 || config.max_workers > MAX_WORKERS {
        return Err(ConfigError::Validation(format!(
            "max_workers must be between 1 and {}, got {}",
            MAX_WORKERS, config.max_workers
        )));
    }
    Ok(())
}
