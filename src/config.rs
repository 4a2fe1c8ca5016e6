use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::{env, time::Duration};

/// Word list served by default: one English word per line.
pub const DEFAULT_DICTIONARY_SOURCE: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/master/words.txt";

/// Default cap on the number of letters kept from a query
pub const DEFAULT_MAX_QUERY_LENGTH: usize = 32;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub dictionary: DictionaryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub session_idle_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryConfig {
    /// Local path or http(s) URL of a newline-delimited word list
    pub source: String,
    pub max_query_length: usize,
    pub fetch_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "9999".to_string())
                .parse()
                .context("PORT must be a number")?,
            session_idle_timeout_secs: env::var("SESSION_IDLE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .context("SESSION_IDLE_TIMEOUT_SECS must be a number")?,
        };

        let dictionary = DictionaryConfig {
            source: env::var("DICTIONARY_SOURCE")
                .unwrap_or_else(|_| DEFAULT_DICTIONARY_SOURCE.to_string()),
            max_query_length: env::var("MAX_QUERY_LENGTH")
                .unwrap_or_else(|_| DEFAULT_MAX_QUERY_LENGTH.to_string())
                .parse()
                .context("MAX_QUERY_LENGTH must be a number")?,
            fetch_timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("FETCH_TIMEOUT_SECS must be a number")?,
        };

        ensure!(
            dictionary.max_query_length > 0,
            "MAX_QUERY_LENGTH must be at least 1"
        );

        Ok(Config { server, dictionary })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.dictionary.fetch_timeout_secs)
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.server.session_idle_timeout_secs)
    }
}

#[cfg(test)]
impl Config {
    /// Configuration for tests that never touches the environment
    pub fn for_tests() -> Self {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                session_idle_timeout_secs: 5,
            },
            dictionary: DictionaryConfig {
                source: "./words.txt".to_string(),
                max_query_length: DEFAULT_MAX_QUERY_LENGTH,
                fetch_timeout_secs: 5,
            },
        }
    }
}
