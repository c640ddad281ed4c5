//! In-memory sink

use std::io;

use parking_lot::Mutex;

use super::traits::Sink;
use crate::level::Level;

/// A sink that keeps every line in memory
///
/// Useful for testing or for embedding hosts that forward lines elsewhere.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Level, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all recorded lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().iter().map(|(_, line)| line.clone()).collect()
    }

    /// Copy of all recorded lines with their levels
    pub fn records(&self) -> Vec<(Level, String)> {
        self.lines.lock().clone()
    }

    /// Whether any recorded line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().iter().any(|(_, line)| line.contains(needle))
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write_line(&self, level: Level, line: &str) -> io::Result<()> {
        self.lines.lock().push((level, line.to_string()));
        Ok(())
    }
}
