//! Environment layer: build the isolated Python environment and launch the app.

pub mod builder;
pub mod interpreter;
pub mod runner;
