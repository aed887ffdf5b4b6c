//! Proxy Configuration & HTTP Client Factory
//!
//! Proxy types for the outbound webhook client, and the factory that builds
//! a `reqwest::Client` from them.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::utils::error::{AppError, AppResult};

/// Default request timeout for webhook posts, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Proxy protocol type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProxyProtocol {
    Http,
    Https,
    Socks5,
}

impl ProxyProtocol {
    /// Return the URL scheme string for this protocol.
    pub fn scheme(&self) -> &'static str {
        match self {
            ProxyProtocol::Http => "http",
            ProxyProtocol::Https => "https",
            ProxyProtocol::Socks5 => "socks5",
        }
    }
}

/// Proxy configuration
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProxyConfig {
    pub protocol: ProxyProtocol,
    pub host: String,
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Read from config.json but never written back.
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
}

impl ProxyConfig {
    /// Build the proxy URL string (without auth).
    pub fn url(&self) -> String {
        format!("{}://{}:{}", self.protocol.scheme(), self.host, self.port)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("proxy host cannot be empty".to_string());
        }
        if self.port == 0 {
            return Err("proxy port cannot be 0".to_string());
        }
        Ok(())
    }
}

// Keeps the password out of log lines.
impl fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("protocol", &self.protocol)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Options for the outbound HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpClientOptions {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<ProxyConfig>,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for HttpClientOptions {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            proxy: None,
        }
    }
}

impl HttpClientOptions {
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(format!(
                "timeout_secs must be between 1 and 300, got {}",
                self.timeout_secs
            ));
        }
        if let Some(ref proxy) = self.proxy {
            proxy.validate()?;
        }
        Ok(())
    }
}

/// Build a `reqwest::Client` from the given options.
///
/// - `Some(proxy)` -> route every request through the proxy
/// - `None` -> explicitly disable proxy (`no_proxy`), ignoring env vars
pub fn build_http_client(options: &HttpClientOptions) -> AppResult<reqwest::Client> {
    let mut builder =
        reqwest::Client::builder().timeout(Duration::from_secs(options.timeout_secs));
    match &options.proxy {
        Some(cfg) => {
            let mut p = reqwest::Proxy::all(cfg.url())
                .map_err(|e| AppError::http_client(format!("invalid proxy URL: {}", e)))?;
            if let (Some(u), Some(pw)) = (&cfg.username, &cfg.password) {
                p = p.basic_auth(u, pw);
            }
            builder = builder.proxy(p);
        }
        None => {
            builder = builder.no_proxy();
        }
    }
    Ok(builder.build()?)
}
