use log::{info, warn};
use serde::Deserialize;
use ustr::Ustr;

/// Users endpoint used when nothing else is configured.
pub const DEFAULT_USERS_URL: &str = "https://dummyjson.com/users";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Endpoint serving `{"users": [...]}`. Fetched in full, without query parameters.
    pub users_url: String,
}

/// Environment variables that override [`BusinessConfig::default`].
#[derive(Debug, Default, Deserialize)]
struct EnvOverrides {
    roster_users_url: Option<String>,
}

impl BusinessConfig {
    pub fn new(users_url: String) -> Self {
        Self { users_url }
    }

    /// Point at the users endpoint of a server rooted at `base_url`.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(format!("{}/users", base_url.trim_end_matches('/')))
    }

    /// Defaults, overridden by `ROSTER_USERS_URL` when set.
    ///
    /// The web build has no process environment and always uses the defaults.
    pub fn from_env() -> Self {
        if cfg!(target_arch = "wasm32") {
            return Self::default();
        }
        Self::from_vars(std::env::vars())
    }

    fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let overrides: EnvOverrides = match serde_env::from_iter(vars) {
            Ok(overrides) => overrides,
            Err(err) => {
                warn!("Ignoring malformed environment overrides: {err}");
                EnvOverrides::default()
            }
        };

        match overrides.roster_users_url {
            Some(url) if !url.trim().is_empty() => {
                info!("Using users endpoint from ROSTER_USERS_URL: {url}");
                Self::new(url)
            }
            _ => Self::default(),
        }
    }

    pub fn users_url(&self) -> Ustr {
        Ustr::from(&self.users_url)
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            users_url: DEFAULT_USERS_URL.to_owned(),
        }
    }
}
