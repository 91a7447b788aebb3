pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{Result, SpiroError};
pub use tolerance::Tolerance;
