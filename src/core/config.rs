//! Verification endpoint configuration read from the host's parameter store.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use super::error::NcfError;

/// Parameter holding the verification endpoint URL.
pub const PARAM_API_URL: &str = "ncf.api.url";
/// Parameter holding the access token sent as `x-access-token`.
pub const PARAM_API_TOKEN: &str = "ncf.api.token";
/// Parameter holding an optional request timeout in seconds.
pub const PARAM_API_TIMEOUT: &str = "ncf.api.timeout";

/// Read-only view of the host's process-wide configuration parameters.
pub trait ParamStore {
    /// Value of `key`, or `None` when unset.
    fn get_param(&self, key: &str) -> Option<String>;
}

impl ParamStore for HashMap<String, String> {
    fn get_param(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl ParamStore for BTreeMap<String, String> {
    fn get_param(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<P: ParamStore + ?Sized> ParamStore for &P {
    fn get_param(&self, key: &str) -> Option<String> {
        (**self).get_param(key)
    }
}

/// Parameters taken from the process environment.
///
/// `ncf.api.url` is read from `NCF_API_URL`, and so on.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvParams;

impl EnvParams {
    fn var_name(key: &str) -> String {
        key.replace('.', "_").to_uppercase()
    }
}

impl ParamStore for EnvParams {
    fn get_param(&self, key: &str) -> Option<String> {
        std::env::var(Self::var_name(key)).ok()
    }
}

/// Endpoint, credentials and timeout for the verification service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NcfApiConfig {
    /// Verification endpoint URL.
    pub url: String,
    /// Access token; the header is omitted when `None`.
    pub token: Option<String>,
    /// Request timeout; the transport default applies when `None`.
    pub timeout: Option<Duration>,
}

impl NcfApiConfig {
    /// Create a config for `url` with no token and no timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: None,
            timeout: None,
        }
    }

    /// Set the access token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load `ncf.api.url`, `ncf.api.token` and `ncf.api.timeout` from the host.
    ///
    /// # Errors
    ///
    /// Returns `NcfError::Config` if the URL is missing or blank, or the
    /// timeout is not a positive number of seconds.
    pub fn from_params(params: &impl ParamStore) -> Result<Self, NcfError> {
        let url = params
            .get_param(PARAM_API_URL)
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| NcfError::Config(format!("'{PARAM_API_URL}' is not set")))?;

        let token = params
            .get_param(PARAM_API_TOKEN)
            .filter(|t| !t.trim().is_empty());

        let timeout = match params.get_param(PARAM_API_TIMEOUT) {
            None => None,
            Some(raw) => {
                let secs: f64 = raw.trim().parse().map_err(|_| {
                    NcfError::Config(format!("'{PARAM_API_TIMEOUT}' must be a number, got '{raw}'"))
                })?;
                match Duration::try_from_secs_f64(secs) {
                    Ok(d) if !d.is_zero() => Some(d),
                    _ => {
                        return Err(NcfError::Config(format!(
                            "'{PARAM_API_TIMEOUT}' must be a positive number of seconds, got '{raw}'"
                        )));
                    }
                }
            }
        };

        Ok(Self {
            url,
            token,
            timeout,
        })
    }
}
