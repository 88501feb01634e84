//! Terminal client entry point.
mod app;
mod config;
mod input;
mod render;
mod terminal;

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use life_core::{Pattern, SimConfig, Topology};

use app::App;
use config::CliConfig;
use terminal::{CrosstermSize, TerminalGuard};

/// Conway's Game of Life in the terminal.
#[derive(Parser)]
#[command(name = "life")]
#[command(about = "Conway's Game of Life in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Pattern to seed the grid with, resolved as `<pattern dir>/<name>.cells`.
    #[arg(default_value = "random")]
    pattern: String,

    /// Target generations per second; 0 runs unthrottled.
    #[arg(long, default_value_t = 0)]
    rate: u32,

    /// Wrap neighbor lookups around the edges instead of treating them as dead.
    #[arg(long)]
    wrap: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::from_env();
    config.rate = cli.rate;

    setup_logging(&config)?;

    // A missing pattern file is the only fatal startup condition; it is
    // reported before the terminal is touched.
    let starting = if cli.pattern == "random" {
        None
    } else {
        let path = config.pattern_dir.join(format!("{}.cells", cli.pattern));
        tracing::info!(path = %path.display(), "loading pattern");
        Some(Pattern::load(&path)?)
    };

    let sim = SimConfig {
        topology: if cli.wrap {
            Topology::Toroidal
        } else {
            Topology::Bounded
        },
        ..SimConfig::default()
    };

    terminal::init()?;
    let _guard = TerminalGuard;

    let result = App::new(
        config,
        sim,
        starting,
        std::io::stdout(),
        CrosstermSize,
        StdRng::from_entropy(),
    )
    .and_then(|mut app| app.run());

    terminal::restore()?;
    result
}

/// Setup logging to a file only: the TUI owns stdout for the whole run.
fn setup_logging(config: &CliConfig) -> Result<()> {
    std::fs::create_dir_all(&config.log_dir)?;

    let file_appender = tracing_appender::rolling::never(&config.log_dir, "life.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer().with_writer(non_blocking_file);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Leak the guard to keep the file writer alive for the process lifetime.
    std::mem::forget(guard);

    tracing::info!("logging initialized: {}/life.log", config.log_dir.display());

    Ok(())
}
