use serde::{Deserialize, Serialize};

const SETTINGS_KEY: &str = "dashboard_settings";

/// Client settings, persisted in `localStorage`. Every field has a default so
/// a partial or outdated blob still loads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Prefix for API paths. Empty means same origin.
    #[serde(default)]
    pub api_base_url: String,
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// `localStorage` key holding the bearer token.
    #[serde(default = "default_token_key")]
    pub token_key: String,
    #[serde(default = "default_currency_code")]
    pub currency_code: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_login_path() -> String {
    "/login-page".to_string()
}

fn default_token_key() -> String {
    "token".to_string()
}

fn default_currency_code() -> String {
    "INR".to_string()
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            login_path: default_login_path(),
            token_key: default_token_key(),
            currency_code: default_currency_code(),
            currency_symbol: default_currency_symbol(),
            log_level: default_log_level(),
        }
    }
}

pub const CURRENCY_CODES: [&str; 6] = ["INR", "USD", "EUR", "GBP", "JPY", "PHP"];

pub fn currency_symbol_for(code: &str) -> &'static str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "PHP" => "₱",
        _ => "₹",
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|err| {
            log::warn!("ignoring stored settings: {err}");
            Self::default()
        })
    }

    pub fn load() -> Self {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(raw)) = storage.get_item(SETTINGS_KEY) {
                    return Self::from_json(&raw);
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(raw) = serde_json::to_string(self) {
                    let _ = storage.set_item(SETTINGS_KEY, &raw);
                }
            }
        }
    }

    pub fn with_currency(&self, code: &str) -> Self {
        Self {
            currency_code: code.to_string(),
            currency_symbol: currency_symbol_for(code).to_string(),
            ..self.clone()
        }
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), path)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let config = AppConfig::from_json(r#"{ "currency_code": "USD", "currency_symbol": "$" }"#);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.login_path, "/login-page");
        assert_eq!(config.token_key, "token");
        assert_eq!(config.api_base_url, "");
    }

    #[test]
    fn test_unparsable_settings_fall_back() {
        assert_eq!(AppConfig::from_json("{not json"), AppConfig::default());
    }

    #[test]
    fn test_with_currency() {
        let config = AppConfig::default().with_currency("GBP");
        assert_eq!(config.currency_code, "GBP");
        assert_eq!(config.currency_symbol, "£");
        assert_eq!(AppConfig::default().with_currency("XYZ").currency_symbol, "₹");
    }

    #[test]
    fn test_api_url_joins_base() {
        let mut config = AppConfig::default();
        assert_eq!(config.api_url("/summary"), "/summary");
        config.api_base_url = "http://localhost:8000/".into();
        assert_eq!(config.api_url("/summary"), "http://localhost:8000/summary");
    }

    #[test]
    fn test_log_level() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Info);
        config.log_level = "debug".into();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "loud".into();
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
