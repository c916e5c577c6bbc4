//! SITTA bahan ajar console
//!
//! Loads the seed dataset and reads commands from stdin, one per line.

use std::io::{self, BufRead, Write};

use bahan_ajar_console::{load_catalog, Config, Outcome, Session};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    // Initialize tracing; stdout is reserved for command output
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.filter));
    let registry = tracing_subscriber::registry().with(filter);
    if config.log.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }

    tracing::info!("Starting SITTA bahan ajar console");
    tracing::info!("Environment: {}", config.environment);

    let catalog = load_catalog(&config.seed.path)?;
    tracing::info!(
        path = %config.seed.path,
        stock = catalog.stock.len(),
        orders = catalog.tracking.len(),
        "seed loaded"
    );

    let mut session = Session::new(catalog)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in session.execute_line("stock list").into_lines() {
        writeln!(stdout, "{}", line)?;
    }
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(stdout, "> ")?;
            stdout.flush()?;
            continue;
        }
        match session.execute_line(&line) {
            Outcome::Quit => break,
            Outcome::Continue(output) => {
                for out in output {
                    writeln!(stdout, "{}", out)?;
                }
            }
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    tracing::info!("Session closed");
    Ok(())
}
