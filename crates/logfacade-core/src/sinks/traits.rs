//! Sink trait definition

use std::io;
use std::sync::Arc;

use crate::level::Level;

/// Destination for formatted log lines
///
/// Implementations:
/// - `ConsoleSink`: writes to stdout (or any writer)
/// - `RotatingFileSink`: appends to a size-rotated file
/// - `MemorySink`: keeps lines in memory for tests
///
/// A line never contains the trailing newline; sinks add their own
/// terminator. Each call must write the whole line at once so concurrent
/// callers never interleave partial lines.
pub trait Sink: Send + Sync {
    /// Write one formatted line
    fn write_line(&self, level: Level, line: &str) -> io::Result<()>;

    /// Flush buffered output
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Type alias for a shared sink
pub type SharedSink = Arc<dyn Sink>;
