//! Blocking HTTP client for the NCF verification endpoint.

use std::error::Error as _;
use std::io;

use reqwest::blocking::Client;

use super::request::VerificationRequest;
use super::transport::{RawResponse, Transport};
use crate::core::{NcfApiConfig, NcfError, ParamStore};

/// Header carrying the access token.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// [`Transport`] that issues `GET <url>?ncf=..&rnc=..` requests with `reqwest`.
///
/// No retries are attempted. Without an explicit timeout the blocking
/// client's default of 30 seconds applies.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: NcfApiConfig,
}

impl HttpTransport {
    /// Build a transport with one reusable client for `config`.
    ///
    /// # Errors
    ///
    /// Returns `NcfError::Transport` if the TLS backend cannot be initialized.
    pub fn new(config: NcfApiConfig) -> Result<Self, NcfError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| NcfError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// Build a transport from the host's `ncf.api.*` parameters.
    pub fn from_params(params: &impl ParamStore) -> Result<Self, NcfError> {
        Self::new(NcfApiConfig::from_params(params)?)
    }

    /// The configuration this transport was built with.
    pub fn config(&self) -> &NcfApiConfig {
        &self.config
    }
}

/// Connect, DNS and timeout failures, plus connections dropped by the
/// server before a complete response arrived.
fn is_connection_failure(e: &reqwest::Error) -> bool {
    if e.is_connect() || e.is_timeout() {
        return true;
    }
    if !e.is_request() && !e.is_body() {
        return false;
    }
    let mut source = e.source();
    while let Some(err) = source {
        if let Some(io_err) = err.downcast_ref::<io::Error>() {
            if matches!(
                io_err.kind(),
                io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
                    | io::ErrorKind::UnexpectedEof
                    | io::ErrorKind::BrokenPipe
            ) {
                return true;
            }
        }
        if let Some(hyper_err) = err.downcast_ref::<hyper::Error>() {
            if hyper_err.is_incomplete_message()
                || hyper_err.is_closed()
                || hyper_err.is_canceled()
            {
                return true;
            }
        }
        source = err.source();
    }
    false
}

fn classify(e: reqwest::Error) -> NcfError {
    if is_connection_failure(&e) {
        NcfError::ServiceUnavailable(e.to_string())
    } else {
        NcfError::Transport(e.to_string())
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &VerificationRequest) -> Result<RawResponse, NcfError> {
        let mut req = self.client.get(&self.config.url).query(request);
        if let Some(ref token) = self.config.token {
            req = req.header(ACCESS_TOKEN_HEADER, token);
        }

        let resp = req.send().map_err(classify)?;
        let status = resp.status().as_u16();
        // A rejected token is reported as such even if its body is unreadable.
        let body = if status == reqwest::StatusCode::FORBIDDEN.as_u16() {
            resp.text().unwrap_or_default()
        } else {
            resp.text().map_err(classify)?
        };

        Ok(RawResponse { status, body })
    }
}
