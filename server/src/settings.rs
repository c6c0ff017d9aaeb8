//! Runtime configuration shared by every request handler.

use std::path::PathBuf;
use tally::CalculateOptions;

/// Immutable server configuration, built once from the command line.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Directory served for non-API `GET` requests.
    pub static_dir: PathBuf,
    pub calculate: CalculateOptions,
}

impl Settings {
    /// `host:port` as passed to the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            static_dir: PathBuf::from("public"),
            calculate: CalculateOptions::default(),
        }
    }
}
