use crate::config::AppConfig;

/// Bearer token read from `localStorage` at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(Self { token })
        }
    }

    pub fn from_storage(config: &AppConfig) -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        let token = storage.get_item(&config.token_key).ok()??;
        Self::new(token)
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

pub fn redirect_to_login(config: &AppConfig) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(&config.login_path).is_err() {
            log::error!("could not redirect to {}", config.login_path);
        }
    }
}

/// Drops the stored token and sends the user back to the login page.
pub fn logout(config: &AppConfig) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(&config.token_key);
        }
    }
    log::info!("logged out");
    redirect_to_login(config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_is_no_session() {
        assert!(Session::new("").is_none());
        assert!(Session::new("   ").is_none());
    }

    #[test]
    fn test_bearer_header() {
        let session = Session::new("abc.def").expect("token present");
        assert_eq!(session.bearer(), "Bearer abc.def");
    }
}
