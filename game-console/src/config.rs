use std::env;
use std::path::PathBuf;

/// Frontend configuration read from the environment. Logging goes to a
/// file (or nowhere) because stdout belongs to the raw-mode screen.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path for the tracing log file; logging is skipped entirely when
    /// unset.
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            log_file: env::var("GUESS_MASTER_LOG").ok().map(PathBuf::from),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { log_file: None }
    }
}
