use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpiroError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Degenerate bounds: {width}x{height} surface is too small to sample a curve")]
    DegenerateBounds { width: u32, height: u32 },

    #[error("Surface error: {0}")]
    Surface(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpiroError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameters(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SpiroError>;
