//! Server Configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Server startup errors
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid BIND_ADDR {0:?}: {1}")]
    BindAddr(String, std::net::AddrParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Preview server settings, read from the environment
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Directory holding the built WASM bundle and `index.html`
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub const DEFAULT_BIND_ADDR: &'static str = "0.0.0.0:3000";
    pub const DEFAULT_STATIC_DIR: &'static str = "static";

    /// Load from `BIND_ADDR` and `STATIC_DIR`
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_vars(
            std::env::var("BIND_ADDR").ok(),
            std::env::var("STATIC_DIR").ok(),
        )
    }

    fn from_vars(bind_addr: Option<String>, static_dir: Option<String>) -> Result<Self, ServerError> {
        let bind_addr = bind_addr.unwrap_or_else(|| Self::DEFAULT_BIND_ADDR.into());
        let parsed = bind_addr
            .parse()
            .map_err(|e| ServerError::BindAddr(bind_addr.clone(), e))?;

        Ok(Self {
            bind_addr: parsed,
            static_dir: static_dir
                .unwrap_or_else(|| Self::DEFAULT_STATIC_DIR.into())
                .into(),
        })
    }

    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}
