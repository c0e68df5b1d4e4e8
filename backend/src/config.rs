//! Server configuration, read once from the environment at startup.
//!
//! | variable              | default                         |
//! |-----------------------|---------------------------------|
//! | `PORTAL_HOST`         | `127.0.0.1`                     |
//! | `PORTAL_PORT`         | `8080`                          |
//! | `PORTAL_DB_PATH`      | `portal.sqlite`                 |
//! | `PRIMARY_WEBHOOK_URL` | the team-chat task webhook      |
//! | `SHEETS_WEBHOOK_URL`  | the spreadsheet append web app  |

use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_PRIMARY_WEBHOOK_URL: &str =
    "https://agit.in/webhook/fb2d4ac7-bda0-418f-9947-e5ce1dbe965a";
const DEFAULT_SHEETS_WEBHOOK_URL: &str = "https://script.google.com/macros/s/AKfycbyqsVqcqnzbyHcIEfwl-v_QMJzev-ZOSSjBW2UCjWX0ntS-yT0TQmK0GY4rfToA_gM_/exec";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub primary_webhook_url: String,
    pub sheets_webhook_url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORTAL_PORT must be a port number, got `{0}`")]
    InvalidPort(String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORTAL_PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) => port,
                Err(_) => return Err(ConfigError::InvalidPort(raw)),
            },
            None => 8080,
        };
        Ok(Self {
            host: lookup("PORTAL_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            db_path: lookup("PORTAL_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("portal.sqlite")),
            primary_webhook_url: lookup("PRIMARY_WEBHOOK_URL")
                .unwrap_or_else(|| DEFAULT_PRIMARY_WEBHOOK_URL.to_string()),
            sheets_webhook_url: lookup("SHEETS_WEBHOOK_URL")
                .unwrap_or_else(|| DEFAULT_SHEETS_WEBHOOK_URL.to_string()),
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
