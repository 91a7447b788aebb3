//! Incremental curve tracing and the multi-curve animation loop.

pub mod animator;
pub mod command;
pub mod ensemble;
pub mod recording;
pub mod sampler;
pub mod schedule;
pub mod surface;
pub mod tracer;

pub use animator::{Animator, RunSummary, StopReason};
pub use command::{Command, KeyBindings};
pub use ensemble::{Ensemble, EnsembleState, TickOutcome, TracerSnapshot};
pub use recording::{DrawCommand, RecordingSurface};
pub use sampler::{ParameterSampler, SamplerConfig};
pub use schedule::{ManualScheduler, Scheduler, ThreadScheduler};
pub use surface::{PenId, RenderingSurface};
pub use tracer::CurveTracer;
