//! Process settings read from the environment.
//!
//! `main` loads `.env` with `dotenv` before calling [`Settings::from_env`].

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;
use crate::fs_manager::PortablePathManager;
use crate::signature::{Signature, DEFAULT_SENDER_ALIAS, DEFAULT_SENDER_NAME};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct Settings {
    pub paths: PortablePathManager,
    pub config_file: PathBuf,
    pub history_file: PathBuf,
    pub signature: Signature,
    pub host: String,
    pub port: u16,
}

impl Settings {
    /// Reads `RESPONDER_*` variables, using defaults for anything unset.
    pub fn from_env() -> Result<Self, AppError> {
        let paths = match env::var("RESPONDER_DATA_DIR") {
            Ok(dir) if !dir.trim().is_empty() => PortablePathManager::new(dir),
            _ => PortablePathManager::from_current_dir(),
        };

        let config_file = env::var("RESPONDER_CONFIG_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| paths.config_file());
        let history_file = env::var("RESPONDER_HISTORY_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| paths.history_file());

        let signature = Signature::new(
            env::var("RESPONDER_SENDER_NAME").unwrap_or_else(|_| DEFAULT_SENDER_NAME.to_string()),
            env::var("RESPONDER_SENDER_ALIAS").unwrap_or_else(|_| DEFAULT_SENDER_ALIAS.to_string()),
        );

        let host = env::var("RESPONDER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("RESPONDER_PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("RESPONDER_PORT '{}': {}", raw, e)))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            paths,
            config_file,
            history_file,
            signature,
            host,
            port,
        })
    }

    /// Address the HTTP boundary binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid bind address {}:{}: {}", self.host, self.port, e)))
    }
}
