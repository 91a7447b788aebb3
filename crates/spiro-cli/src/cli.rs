use std::path::PathBuf;

use clap::Parser;
use spiro_core::Result;
use spiro_math::integral_radius;
use spiro_render::ExportFormat;

use crate::config::SpiroConfig;

/// Draws spirographs.
///
/// With no arguments, animates a group of random curves that restart once
/// they have all closed. Terminology: R is the radius of the outer circle,
/// r the radius of the inner circle, l the ratio of the hole distance to r.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Draw a single curve with outer radius R, inner radius r and hole ratio l
    #[arg(long, num_args = 3, value_names = ["R", "r", "l"], allow_negative_numbers = true)]
    pub sparams: Option<Vec<f64>>,

    /// Path to config TOML
    #[arg(long, default_value = "spiro.toml")]
    pub config: PathBuf,

    /// Write a default config to --config and exit
    #[arg(long, default_value_t = false)]
    pub init_config: bool,

    /// Number of curves animated together (overrides config)
    #[arg(long)]
    pub tracers: Option<usize>,

    /// Stop after this many ticks (overrides config)
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Stop after this many completed cycles (overrides config)
    #[arg(long)]
    pub cycles: Option<u64>,

    /// Seed for reproducible curves (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Save the final drawing when the animation stops
    #[arg(long, default_value_t = false)]
    pub save: bool,

    /// Directory drawings are saved to (overrides config)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Output format, repeatable: png, svg or json (overrides config)
    #[arg(long = "format")]
    pub formats: Vec<ExportFormat>,

    /// Log filter used when RUST_LOG is unset, e.g. "debug" or "spiro_trace=trace"
    #[arg(long)]
    pub log_level: Option<String>,

    /// Read key commands from stdin: t toggles cursors, empty line restarts,
    /// s saves, q quits
    #[arg(long, default_value_t = false)]
    pub interactive: bool,
}

/// Validated `--sparams` values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticCurve {
    pub outer_radius: u32,
    pub inner_radius: u32,
    pub hole_ratio: f64,
}

impl Args {
    /// Copy command-line overrides into `config`.
    pub fn apply_overrides(&self, config: &mut SpiroConfig) {
        if let Some(tracers) = self.tracers {
            config.animation.tracer_count = tracers;
        }
        if let Some(ticks) = self.ticks {
            config.animation.max_ticks = Some(ticks);
        }
        if let Some(cycles) = self.cycles {
            config.animation.max_cycles = Some(cycles);
        }
        if let Some(seed) = self.seed {
            config.animation.seed = Some(seed);
        }
        if let Some(out) = &self.out {
            config.export.directory = out.clone();
        }
        if !self.formats.is_empty() {
            config.export.formats = self.formats.clone();
        }
    }

    /// The single-curve request, if any. Radii must be whole numbers.
    pub fn static_curve(&self) -> Result<Option<StaticCurve>> {
        let Some(values) = self.sparams.as_deref() else {
            return Ok(None);
        };
        let [outer, inner, hole] = values else {
            return Err(spiro_core::SpiroError::invalid(
                "--sparams takes exactly three values: R r l",
            ));
        };
        Ok(Some(StaticCurve {
            outer_radius: integral_radius("R", *outer)?,
            inner_radius: integral_radius("r", *inner)?,
            hole_ratio: *hole,
        }))
    }
}
