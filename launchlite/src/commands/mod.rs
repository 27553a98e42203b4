//! Command handlers: one module per subcommand.

pub mod clean;
pub mod doctor;
pub mod run;
pub mod setup;
