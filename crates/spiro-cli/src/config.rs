use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use spiro_core::traits::Validate;
use spiro_core::{Result, SpiroError};
use spiro_geometry::Color;
use spiro_math::Viewport;
use spiro_render::ExportFormat;
use spiro_trace::{CurveTracer, Ensemble, SamplerConfig};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "AnimationConfig::default_tracer_count")]
    pub tracer_count: usize,
    #[serde(default = "AnimationConfig::default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "AnimationConfig::default_step_degrees")]
    pub step_degrees: f64,
    /// Stop after this many automatic resets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cycles: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_ticks: Option<u64>,
    /// Fixed sampler seed for reproducible runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl AnimationConfig {
    fn default_tracer_count() -> usize {
        Ensemble::DEFAULT_SIZE
    }
    fn default_tick_interval_ms() -> u64 {
        10
    }
    fn default_step_degrees() -> f64 {
        CurveTracer::DEFAULT_STEP
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tracer_count: Self::default_tracer_count(),
            tick_interval_ms: Self::default_tick_interval_ms(),
            step_degrees: Self::default_step_degrees(),
            max_cycles: None,
            max_ticks: None,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    #[serde(default = "SurfaceConfig::default_width")]
    pub width: u32,
    #[serde(default = "SurfaceConfig::default_height")]
    pub height: u32,
    #[serde(default = "SurfaceConfig::default_background")]
    pub background: Color,
}

impl SurfaceConfig {
    fn default_width() -> u32 {
        800
    }
    fn default_height() -> u32 {
        600
    }
    fn default_background() -> Color {
        Color::WHITE
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
            background: Self::default_background(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "ExportConfig::default_directory")]
    pub directory: PathBuf,
    #[serde(default = "ExportConfig::default_prefix")]
    pub prefix: String,
    #[serde(default = "ExportConfig::default_formats")]
    pub formats: Vec<ExportFormat>,
}

impl ExportConfig {
    fn default_directory() -> PathBuf {
        PathBuf::from(".")
    }
    fn default_prefix() -> String {
        "spiro".to_string()
    }
    fn default_formats() -> Vec<ExportFormat> {
        vec![ExportFormat::Png]
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: Self::default_directory(),
            prefix: Self::default_prefix(),
            formats: Self::default_formats(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpiroConfig {
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub surface: SurfaceConfig,
    #[serde(default)]
    pub sampler: SamplerConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl SpiroConfig {
    /// Load from a TOML file. A missing file means defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
            .map_err(|e| SpiroError::Config(format!("{}: {e}", path.display())))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| SpiroError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SpiroError::Config(e.to_string()))
    }

    /// Write the defaults to `path`, refusing to overwrite an existing file.
    pub fn write_default(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(SpiroError::Config(format!(
                "{} already exists",
                path.display()
            )));
        }
        fs::write(path, Self::default().to_toml()?)?;
        Ok(())
    }
}

impl Validate for SpiroConfig {
    fn validate(&self) -> Result<()> {
        let anim = &self.animation;
        if anim.tracer_count == 0 {
            return Err(SpiroError::Config("tracer_count must be at least 1".into()));
        }
        if anim.tick_interval_ms == 0 {
            return Err(SpiroError::Config("tick_interval_ms must be positive".into()));
        }
        if !(anim.step_degrees.is_finite() && anim.step_degrees > 0.0) {
            return Err(SpiroError::Config(format!(
                "step_degrees must be positive, got {}",
                anim.step_degrees
            )));
        }
        let min_side = self.sampler.min_surface_side();
        if self.surface.width < min_side || self.surface.height < min_side {
            return Err(SpiroError::Config(format!(
                "surface {}x{} is smaller than {min_side} on one side",
                self.surface.width, self.surface.height
            )));
        }
        if self.export.formats.is_empty() {
            return Err(SpiroError::Config("at least one export format is required".into()));
        }
        self.sampler
            .validate()
            .and_then(|_| self.surface.background.validate())
            .map_err(|e| SpiroError::Config(e.to_string()))
    }
}
