//! Logger configuration
//!
//! - `LoggerConfig`: settings consumed by `LogFacade::configure`
//! - `SinkFloors`: minimum level of each configured sink
//! - YAML/JSON loading via `LoggerConfig::from_file`

mod settings;
mod file;

pub use settings::{LoggerConfig, SinkFloors};
pub use file::ConfigFormat;
