//! Spiro CLI
//!
//! Draws hypotrochoid curves ("spirographs").
//!
//! # Usage
//!
//! ```bash
//! # Animate four random curves until Ctrl-C, saving the result
//! spiro --save
//!
//! # Draw a single curve: R=300, r=50, l=0.5
//! spiro --sparams 300 50 0.5 --format svg
//!
//! # Stop after two full cycles with reproducible curves
//! spiro --cycles 2 --seed 7 --save --out drawings
//! ```

mod app;
mod cli;
mod config;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use spiro_core::traits::Validate;

use crate::cli::Args;
use crate::config::SpiroConfig;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_tracing(args.log_level.as_deref())?;

    if args.init_config {
        SpiroConfig::write_default(&args.config)?;
        println!("wrote default config to {}", args.config.display());
        return Ok(());
    }

    let mut config = SpiroConfig::load(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;
    args.apply_overrides(&mut config);
    config.validate()?;

    match args.static_curve()? {
        Some(curve) => {
            app::run_static(&config, curve)?;
        }
        None => {
            println!("generating spirographs...");
            let summary = app::run_animation(&config, args.interactive, args.save)?;
            println!(
                "stopped after {} ticks and {} cycles",
                summary.ticks, summary.cycles
            );
        }
    }
    Ok(())
}
