//! Runtime configuration
//!
//! Library crates never prompt; every interactive fallback lives here,
//! in the binary, and only fires when the environment leaves a
//! credential unset.

use dialoguer::{Input, Password};
use fetcher::DEFAULT_TIMEOUT;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use storage::DbConfig;

/// Page listing the PVE fast moves
pub const DEFAULT_SOURCE_URL: &str = "https://gamepress.gg/pokemongo/pve-fast-moves";

/// Everything one pipeline run needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Page to scrape
    pub source_url: String,
    /// Fetch timeout
    pub timeout: Duration,
    /// Audit identity stamped into insert_user/update_user
    pub actor: String,
    /// MySQL connection settings
    pub db: DbConfig,
}

impl IngestConfig {
    /// Build from `POGO_*` environment variables, prompting for any
    /// missing credential
    ///
    /// The actor defaults to the database user, matching the audit
    /// stamps the table has always carried.
    pub fn load() -> Result<Self, dialoguer::Error> {
        let host = env_or_prompt("POGO_DB_HOST", "Enter the host")?;
        let user = env_or_prompt("POGO_DB_USER", "Enter the user")?;
        let password = match nonempty_env("POGO_DB_PASSWORD") {
            Some(value) => value,
            None => Password::new().with_prompt("Enter the password").interact()?,
        };

        let source_url =
            nonempty_env("POGO_SOURCE_URL").unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string());
        let actor = nonempty_env("POGO_ACTOR").unwrap_or_else(|| user.clone());

        Ok(Self {
            source_url,
            timeout: DEFAULT_TIMEOUT,
            actor,
            db: DbConfig {
                host,
                user,
                password,
            },
        })
    }
}

fn nonempty_env(var: &str) -> Option<String> {
    env::var(var).ok().filter(|value| !value.is_empty())
}

fn env_or_prompt(var: &str, prompt: &str) -> Result<String, dialoguer::Error> {
    match nonempty_env(var) {
        Some(value) => Ok(value),
        None => Input::<String>::new().with_prompt(prompt).interact_text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_is_serde_capable() {
        fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}
        assert_serde::<IngestConfig>();
    }

    // Env vars are process-global, so both cases run inside one test.
    #[test]
    fn test_load_from_environment_only() {
        env::set_var("POGO_DB_HOST", "localhost");
        env::set_var("POGO_DB_USER", "scraper");
        env::set_var("POGO_DB_PASSWORD", "secret");
        env::set_var("POGO_ACTOR", "batchjob");

        let config = IngestConfig::load().unwrap();
        assert_eq!(config.db.host, "localhost");
        assert_eq!(config.db.user, "scraper");
        assert_eq!(config.db.password, "secret");
        assert_eq!(config.actor, "batchjob");
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));

        // Without an explicit actor, audit stamps fall back to the
        // database user.
        env::remove_var("POGO_ACTOR");
        let config = IngestConfig::load().unwrap();
        assert_eq!(config.actor, "scraper");
    }
}
