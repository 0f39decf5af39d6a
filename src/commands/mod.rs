//! CLI command implementations.

pub mod export;
pub mod info;

pub use export::{default_output_path, ExportCommand, ExportOutcome};
pub use info::InfoCommand;
