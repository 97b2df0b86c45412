use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_SEARCH_URL: &str = "https://im.diningcode.com/API/isearch/";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so only malformed values fail.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("TASTE_ENV", "development"));
    let bind_addr = parse_addr("TASTE_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("TASTE_LOG_LEVEL", "info");

    let search_url = or_default("TASTE_SEARCH_URL", DEFAULT_SEARCH_URL);
    if search_url.trim().is_empty() {
        return Err(invalid("TASTE_SEARCH_URL", "must not be empty".to_string()));
    }

    let request_timeout_secs = parse_u64("TASTE_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "TASTE_REQUEST_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }

    let user_agent = or_default("TASTE_USER_AGENT", DEFAULT_USER_AGENT);
    let export_dir = PathBuf::from(or_default("TASTE_EXPORT_DIR", "."));

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        search_url,
        request_timeout_secs,
        user_agent,
        export_dir,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
