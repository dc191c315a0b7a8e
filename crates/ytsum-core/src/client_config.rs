/// Process-wide client settings, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base address of the analysis service, without a trailing slash.
    pub api_base_url: String,
    pub log_level: String,
    pub user_agent: String,
    pub history_limit: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: crate::config::DEFAULT_API_BASE_URL.to_string(),
            log_level: "info".to_string(),
            user_agent: crate::config::DEFAULT_USER_AGENT.to_string(),
            history_limit: crate::config::DEFAULT_HISTORY_LIMIT,
        }
    }
}
