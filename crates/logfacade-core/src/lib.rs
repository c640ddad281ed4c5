//! LogFacade Core
//!
//! A process-wide logging facade. One lazily created `LogFacade` routes
//! leveled messages to a console sink and to size-rotating info and
//! critical files, tagging each line with the calling thread, file, line
//! and function.
//!
//! ## Sinks and floors
//!
//! | Sink          | Default floor | Enabled by              |
//! |---------------|---------------|-------------------------|
//! | console       | DEBUG         | `console: true`         |
//! | info file     | INFO          | `info_file: <path>`     |
//! | critical file | ERROR         | `critical_file: <path>` |
//!
//! Messages below the logger's own `level` are dropped everywhere.
//!
//! ```rust,no_run
//! use logfacade_core::{error_log, LogFacade, LoggerConfig};
//!
//! let config = LoggerConfig::from_file("logging.yaml")?;
//! LogFacade::get_instance().configure(&config)?;
//!
//! LogFacade::warning("cache is cold");
//! error_log!("request {} failed", 42);
//! # Ok::<(), logfacade_core::LogError>(())
//! ```
//!
//! Before `configure` is called, or if a sink cannot be written, messages
//! are printed to stdout as `[LEVEL] - <annotated message>`.

pub mod level;
pub mod error;
pub mod config;
pub mod record;
pub mod sinks;
pub mod backend;
pub mod facade;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use level::Level;
pub use error::{LogError, LogResult};
pub use config::{ConfigFormat, LoggerConfig, SinkFloors};
pub use record::CallSite;
pub use sinks::{ConsoleSink, MemorySink, RotatingFileSink, Sink, SharedSink};
pub use backend::Backend;
pub use facade::LogFacade;
