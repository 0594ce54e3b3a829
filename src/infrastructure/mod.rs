//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `backends/` - Deployment targets (Local, AWS, GCP)
//! - `work/` - Units of work behind each stage (simulated, instant)
//! - `events/` - Progress sinks (NDJSON, tracing)

pub mod backends;
pub mod events;
pub mod work;

// Re-export for convenience
pub use backends::{standard_backends, AwsBackend, BackendSettings, GcpBackend, LocalBackend};
pub use events::{JsonProgressSink, TracingProgressSink};
pub use work::{InstantWork, SimulatedWork};
