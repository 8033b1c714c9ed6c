use std::time::Duration;

use anyhow::{bail, Result};

use crate::cli::ServerArgs;

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub debug: bool,
    pub dev: bool,
    pub cloud_url: String,
    pub upstream_timeout: Option<Duration>,
}

impl ServerConfig {
    pub fn from_args(args: &ServerArgs) -> Result<Self> {
        let cloud_url = args
            .cloud_url
            .as_deref()
            .map(str::trim)
            .unwrap_or_default();
        // Require a provisioner connection
        if cloud_url.is_empty() {
            bail!(
                "a hostname and port number where a cloud provisioner endpoint can be found are required"
            );
        }

        Ok(Self {
            listen_addr: normalize_listen_addr(&args.listen),
            debug: args.debug,
            dev: args.dev,
            cloud_url: cloud_url.to_string(),
            upstream_timeout: args
                .upstream_timeout_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        })
    }
}

/// `:8078` style addresses listen on every interface.
fn normalize_listen_addr(listen: &str) -> String {
    if listen.starts_with(':') {
        format!("0.0.0.0{}", listen)
    } else {
        listen.to_string()
    }
}
