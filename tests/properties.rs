//! Property tests for Modelship.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/progress.rs"]
mod progress;

#[path = "properties/request.rs"]
mod request;
