use crate::client_config::ClientConfig;
use crate::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_USER_AGENT: &str = "ytsum/0.1 (video-summarizer)";
pub const DEFAULT_HISTORY_LIMIT: u32 = 50;

/// Load client configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_client_config() -> Result<ClientConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_client_config_from_env()
}

/// Load client configuration from environment variables already in the process.
///
/// Unlike [`load_client_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_client_config_from_env() -> Result<ClientConfig, ConfigError> {
    build_client_config(|key| std::env::var(key))
}

/// Build client configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a
/// `HashMap` lookup.
fn build_client_config<F>(lookup: F) -> Result<ClientConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: u32| -> Result<u32, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.trim().parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    };

    let api_base_url = parse_base_url(&or_default("YTSUM_API_URL", DEFAULT_API_BASE_URL))?;
    let log_level = or_default("YTSUM_LOG_LEVEL", "info");
    let user_agent = or_default("YTSUM_USER_AGENT", DEFAULT_USER_AGENT);

    let history_limit = parse_u32("YTSUM_HISTORY_LIMIT", DEFAULT_HISTORY_LIMIT)?;
    if history_limit == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "YTSUM_HISTORY_LIMIT".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(ClientConfig {
        api_base_url,
        log_level,
        user_agent,
        history_limit,
    })
}

/// Validates the service base address and strips trailing slashes.
///
/// An empty value falls back to the default, matching how an unset override
/// behaves.
fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_API_BASE_URL.to_string());
    }

    let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    if !has_scheme {
        return Err(ConfigError::InvalidEnvVar {
            var: "YTSUM_API_URL".to_string(),
            reason: format!("expected an http(s) URL, got \"{trimmed}\""),
        });
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
