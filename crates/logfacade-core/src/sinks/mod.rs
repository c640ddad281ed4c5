//! Sink abstractions and built-in sinks

mod traits;
mod console;
mod memory;
pub mod rotating_file;

pub use traits::{Sink, SharedSink};
pub use console::ConsoleSink;
pub use memory::MemorySink;
pub use rotating_file::{RotatingFileSink, ensure_parent_dir};
