use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use game_console::app::{App, LogHandler};
use game_console::config::Config;
use game_core::GameSession;

/// Logging goes to a file when `GUESS_MASTER_LOG` is set; stdout belongs
/// to the raw-mode screen and is never written by the subscriber.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;

    info!("Starting Guess Master...");
    let mut session = GameSession::with_builtin_bank()?;
    info!(
        "Question bank loaded: {} questions across {} categories",
        session.bank().question_count(),
        session.bank().category_count()
    );
    session.events_mut().add_handler(Box::new(LogHandler));

    let mut app = App::new(session);
    app.run().await?;

    info!("Guess Master shut down cleanly");
    Ok(())
}
