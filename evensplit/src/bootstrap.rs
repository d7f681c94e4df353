use std::{env, path::PathBuf};
use tracing_subscriber::EnvFilter;

pub const RECORDS_PATH_VAR: &str = "EVENSPLIT_RECORDS_PATH";
pub const DEFAULT_RECORDS_PATH: &str = "evensplit-records.json";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub records_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let records_path = lookup(RECORDS_PATH_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RECORDS_PATH));

        Self { records_path }
    }
}

/// Initialize logging on stderr so stdout stays clean for reports.
///
/// Honors `RUST_LOG`, defaulting to warnings only.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
