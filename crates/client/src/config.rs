//! Client configuration.

/// Backend used when `MEATKONNEX_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://meatkonnex-backend.onrender.com";

/// Where the backend lives and how to authenticate against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_url: String,
    auth_token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: normalize_url(api_url.into()),
            auth_token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Read `MEATKONNEX_API_URL` and `MEATKONNEX_AUTH_TOKEN`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let config = match present("MEATKONNEX_API_URL") {
            Some(url) => Self::new(url),
            None => Self::default(),
        };
        match present("MEATKONNEX_AUTH_TOKEN") {
            Some(token) => config.with_token(token.trim()),
            None => config,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }
}

fn normalize_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}
