use thiserror::Error;

use crate::lookup_config::LookupConfig;

/// Configuration loading failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load lookup configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_lookup_config() -> Result<LookupConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_lookup_config_from_env()
}

/// Load lookup configuration from environment variables already in the process.
///
/// Unlike [`load_lookup_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_lookup_config_from_env() -> Result<LookupConfig, ConfigError> {
    build_lookup_config(|key| std::env::var(key))
}

/// Build lookup configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_lookup_config<F>(lookup: F) -> Result<LookupConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_opt_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .parse::<u64>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(None),
        }
    };

    let directory_url = require("MEMBERDESK_DIRECTORY_URL")?;
    let access_token = lookup("MEMBERDESK_ACCESS_TOKEN").ok();
    let page_size = parse_u32("MEMBERDESK_PAGE_SIZE", "20")?;
    let request_timeout_secs = parse_opt_u64("MEMBERDESK_REQUEST_TIMEOUT_SECS")?;
    let user_agent = or_default("MEMBERDESK_USER_AGENT", "memberdesk/0.1 (pos-lookup)");
    let log_level = or_default("MEMBERDESK_LOG_LEVEL", "info");

    Ok(LookupConfig {
        directory_url,
        access_token,
        page_size,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}
