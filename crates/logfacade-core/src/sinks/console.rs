//! Console sink implementation

use std::io::{self, Write};

use parking_lot::Mutex;

use super::traits::Sink;
use crate::level::Level;

/// A sink that writes lines to the console (stdout by default)
pub struct ConsoleSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl ConsoleSink {
    /// Create a console sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a console sink writing to stderr
    pub fn stderr() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Create a console sink over any writer
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl std::fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSink").finish_non_exhaustive()
    }
}

impl Sink for ConsoleSink {
    fn write_line(&self, _level: Level, line: &str) -> io::Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        let mut writer = self.writer.lock();
        writer.write_all(buf.as_bytes())?;
        writer.flush()
    }

    fn flush(&self) -> io::Result<()> {
        self.writer.lock().flush()
    }
}
