//! Terminal output for the modelship binary

pub mod console;
pub mod error;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
