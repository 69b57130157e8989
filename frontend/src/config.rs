/// Local-storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Local-storage key holding the theme preference.
pub const THEME_KEY: &str = "theme";
/// Boolean key written by older builds; read once when `theme` is absent.
pub const LEGACY_DARK_MODE_KEY: &str = "darkMode";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub currency_code: String,
    pub sign_in_page: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            currency_code: "GHS".to_string(),
            sign_in_page: "index.html".to_string(),
        }
    }
}

impl AppConfig {
    /// Uses the page's own origin as the API base.
    pub fn from_window() -> Self {
        let origin = web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default();
        Self::with_origin(&origin)
    }

    pub fn with_origin(origin: &str) -> Self {
        Self {
            api_base_url: origin.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_origin_and_path() {
        let config = AppConfig::with_origin("https://budget.example.com/");
        assert_eq!(
            config.endpoint("/net-balance"),
            "https://budget.example.com/net-balance"
        );
        assert_eq!(
            config.endpoint("budget-status/2026-10"),
            "https://budget.example.com/budget-status/2026-10"
        );
    }

    #[test]
    fn empty_origin_gives_relative_urls() {
        let config = AppConfig::with_origin("");
        assert_eq!(config.endpoint("/expenses"), "/expenses");
        assert_eq!(config.currency_code, "GHS");
    }
}
