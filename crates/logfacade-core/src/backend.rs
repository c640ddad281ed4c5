//! Named logger with a minimum level and a set of floored sinks
//!
//! The backend knows nothing about singletons or fallbacks; it formats a
//! line once and hands it to every sink whose floor admits the level.

use std::io;
use std::sync::Arc;

use crate::config::LoggerConfig;
use crate::error::LogResult;
use crate::level::Level;
use crate::record::{display_name, format_line};
use crate::sinks::{ConsoleSink, RotatingFileSink, SharedSink};

struct AttachedSink {
    floor: Level,
    sink: SharedSink,
}

/// A named logger routing lines to its sinks
pub struct Backend {
    name: String,
    level: Level,
    sinks: Vec<AttachedSink>,
}

impl Backend {
    /// Create a logger with no sinks and an INFO threshold
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: Level::Info,
            sinks: Vec::new(),
        }
    }

    /// Build a logger and its sinks from settings
    ///
    /// Sinks are attached critical file first, then info file, then console.
    /// Nothing is kept if any sink fails to open.
    pub fn from_config(config: &LoggerConfig) -> LogResult<Self> {
        config.validate()?;

        let mut backend = Self::new(config.app_name.clone());
        backend.set_level(config.level);

        if let Some(path) = &config.critical_file {
            let sink = RotatingFileSink::open(path, config.max_bytes(), config.backup_count)?;
            backend.attach(config.floors.critical_file, Arc::new(sink));
        }

        if let Some(path) = &config.info_file {
            let sink = RotatingFileSink::open(path, config.max_bytes(), config.backup_count)?;
            backend.attach(config.floors.info_file, Arc::new(sink));
        }

        if config.console {
            backend.attach(config.floors.console, Arc::new(ConsoleSink::stdout()));
        }

        Ok(backend)
    }

    /// Name as configured (may be empty)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name as it appears in lines
    pub fn display_name(&self) -> &str {
        display_name(&self.name)
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Attach a sink that accepts `floor` and above
    pub fn attach(&mut self, floor: Level, sink: SharedSink) {
        self.sinks.push(AttachedSink { floor, sink });
    }

    /// Number of attached sinks
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Whether a message at `level` passes the logger threshold
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    /// Format and deliver an annotated message
    ///
    /// Every eligible sink is tried; the first write error is returned after
    /// the others have had their turn.
    pub fn log(&self, level: Level, annotated: &str) -> io::Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }

        let mut targets = self.sinks.iter().filter(|s| level >= s.floor).peekable();
        if targets.peek().is_none() {
            return Ok(());
        }

        let line = format_line(&self.name, level, annotated);
        let mut first_error = None;
        for attached in targets {
            if let Err(e) = attached.sink.write_line(level, &line) {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Flush every sink
    pub fn flush(&self) -> io::Result<()> {
        for attached in &self.sinks {
            attached.sink.flush()?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backend")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}
