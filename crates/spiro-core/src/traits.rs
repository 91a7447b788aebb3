use crate::error::Result;

/// Validate that a value is usable before it enters the animation loop.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
