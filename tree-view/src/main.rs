//! Application entry point for the ASCII tree viewer.
//!
//! With `--headless` the grown trees are printed to stdout; otherwise
//! eframe/egui is started and all interactive logic is delegated to
//! [`Viewer`] from the `viewer` module.

mod cli;
mod error;
mod viewer;

use std::process;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::Cli;
use error::ViewError;
use viewer::Viewer;

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), ViewError> {
    let cfg = cli.config()?;

    if cli.headless {
        print!("{}", cli::render_headless(&cfg));
        return Ok(());
    }

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "ASCII Trees",
        options,
        Box::new(|_cc| {
            // Construct the root app state for the viewer.
            Ok(Box::new(Viewer::new(cfg)))
        }),
    )
    .map_err(|e| ViewError::Gui(e.to_string()))
}

/// Installs a stderr subscriber. `RUST_LOG` wins over the `-d` count.
fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    tracing::debug!(?level, "logging initialised");
}
