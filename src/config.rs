/// Configuration constants for the Physitrack API
pub mod api {
    /// Base path for the v2 API
    pub const BASE_PATH: &str = "/api/v2";

    /// Service domain; each account lives on its own subdomain
    pub const SERVICE_DOMAIN: &str = "physitrack.com";

    /// The server returns exactly this many records on every page but the last
    pub const PAGE_SIZE: usize = 200;

    /// Header carrying the API key
    pub const API_KEY_HEADER: &str = "X-Api-Key";

    pub const CLIENTS: &str = "clients";
    pub const PROGRAMS: &str = "programs";
    pub const PROMS: &str = "proms";
    pub const MESSAGES: &str = "messages";
    pub const TEMPLATES: &str = "templates";
    pub const EXERCISES: &str = "exercises";
    pub const EVENTS: &str = "events";

    /// Request timeout in seconds
    pub const TIMEOUT_SECS: u64 = 30;

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable holding the API key
    pub const API_KEY_ENV_VAR: &str = "PHYSITRACK_API_KEY";

    /// Environment variable holding the account subdomain
    pub const SUBDOMAIN_ENV_VAR: &str = "PHYSITRACK_SUBDOMAIN";

    /// Path to the credentials file (relative to HOME)
    pub const FILE_PATH: &str = ".physitrack/credentials.json";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_path_format() {
        assert!(api::BASE_PATH.starts_with('/'));
        assert!(!api::BASE_PATH.ends_with('/'));
    }

    #[test]
    fn test_page_size_sentinel() {
        assert_eq!(api::PAGE_SIZE, 200);
    }

    #[test]
    fn test_service_domain_is_bare_host() {
        assert!(api::SERVICE_DOMAIN.contains('.'));
        assert!(!api::SERVICE_DOMAIN.starts_with("https://"));
    }
}
