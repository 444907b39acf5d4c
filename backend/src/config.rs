//! Backend configuration, read once at startup from environment variables.
//!
//! | variable           | default          |
//! |--------------------|------------------|
//! | `BIND_ADDR`        | `127.0.0.1:8080` |
//! | `JOBS_CORPUS_PATH` | built-in sample  |
//! | `SEARCH_DELAY_MS`  | `0`              |

use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub bind_addr: SocketAddr,
    /// JSON file holding the job corpus. `None` serves the built-in sample jobs.
    pub corpus_path: Option<PathBuf>,
    /// Simulated latency added before every search.
    pub search_delay: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            corpus_path: None,
            search_delay: Duration::ZERO,
        }
    }
}

impl BackendConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup. Empty values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr = get("BIND_ADDR").unwrap_or(DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("BIND_ADDR is not a socket address: {bind_addr:?}"))?;

        let corpus_path = get("JOBS_CORPUS_PATH").map(PathBuf::from);

        let search_delay = match get("SEARCH_DELAY_MS") {
            Some(ms) => Duration::from_millis(
                ms.parse::<u64>()
                    .with_context(|| format!("SEARCH_DELAY_MS is not a number of milliseconds: {ms:?}"))?,
            ),
            None => Duration::ZERO,
        };

        Ok(Self { bind_addr, corpus_path, search_delay })
    }
}
