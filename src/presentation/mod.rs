//! Presentation Layer
//!
//! Wires configuration into infrastructure: picks the stage work
//! implementation, builds the backend registry and hands both to the
//! orchestrator. The binary only talks to the library through here.

pub mod factory;

pub use factory::{create_orchestrator, create_work, FactoryOptions};
