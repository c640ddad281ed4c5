//! Caller context and line formatting
//!
//! Every emitted message is annotated with the calling thread and the call
//! site before it reaches a sink:
//!
//! ```text
//! [<thread>] <file>:<line> in <function>() -- <message>
//! ```
//!
//! Sinks receive the full line, which prefixes the annotated message with a
//! timestamp, the logger name and the level:
//!
//! ```text
//! 2024-02-07 12:00:00,123 -- my-app -- INFO -- [main] main.rs:12 in run() -- ready
//! ```

use std::panic::Location;
use std::path::Path;

use crate::level::Level;

/// Function name reported when the caller's function is not known
pub const UNKNOWN_FUNCTION: &str = "<unknown>";

/// Logger name used when the application name is empty
pub const ROOT_LOGGER_NAME: &str = "root";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Where a log call was made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    function: &'static str,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self { file, line, function }
    }

    /// Location of the caller of the enclosing `#[track_caller]` function
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line(), UNKNOWN_FUNCTION)
    }

    /// Basename of the source file
    pub fn file_name(&self) -> &'static str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn function(&self) -> &'static str {
        self.function
    }

    /// `[<thread>] <file>:<line> in <function>() -- <message>` for the current thread
    pub fn annotate(&self, message: &str) -> String {
        format!(
            "[{}] {}:{} in {}() -- {}",
            current_thread_name(),
            self.file_name(),
            self.line,
            self.function,
            message
        )
    }
}

/// Name of the calling thread, or its id when unnamed
pub fn current_thread_name() -> String {
    let thread = std::thread::current();
    match thread.name() {
        Some(name) => name.to_string(),
        None => format!("{:?}", thread.id()),
    }
}

/// Logger name as it appears in lines
pub fn display_name(app_name: &str) -> &str {
    if app_name.is_empty() {
        ROOT_LOGGER_NAME
    } else {
        app_name
    }
}

/// `<timestamp> -- <name> -- <LEVEL> -- <annotated>`, without a trailing newline
pub fn format_line(app_name: &str, level: Level, annotated: &str) -> String {
    format!(
        "{} -- {} -- {} -- {}",
        chrono::Local::now().format(TIMESTAMP_FORMAT),
        display_name(app_name),
        level,
        annotated
    )
}

/// `[LEVEL] - <annotated>` used when the logger cannot deliver a message
pub fn format_fallback(level: Level, annotated: &str) -> String {
    format!("[{}] - {}", level, annotated)
}

/// Strip the helper suffix from a `type_name` taken inside a function body
///
/// Used by [`function_name!`](crate::function_name); closures report the
/// function that contains them.
#[doc(hidden)]
pub fn trim_function_path(type_name: &'static str) -> &'static str {
    let path = type_name.strip_suffix("::__f").unwrap_or(type_name);
    let path = path.trim_end_matches("::{{closure}}");
    match path.rfind("::") {
        Some(pos) => &path[pos + 2..],
        None => path,
    }
}

/// Name of the enclosing function, resolved at compile time
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __f() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::record::trim_function_path(__type_name_of(__f))
    }};
}

/// Call site of the macro invocation, including the enclosing function
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::record::CallSite::new(file!(), line!(), $crate::function_name!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_site_basename() {
        let site = CallSite::new("src/bin/server/main.rs", 42, "run");
        assert_eq!(site.file_name(), "main.rs");
        assert_eq!(site.line(), 42);
        assert_eq!(site.function(), "run");
    }

    #[test]
    fn test_annotate_format() {
        let site = CallSite::new("src/worker.rs", 7, "process");
        let annotated = std::thread::Builder::new()
            .name("worker-1".to_string())
            .spawn(move || site.annotate("job done"))
            .unwrap()
            .join()
            .unwrap();
        assert_eq!(annotated, "[worker-1] worker.rs:7 in process() -- job done");
    }

    #[test]
    fn test_caller_location() {
        let site = CallSite::caller();
        assert_eq!(site.file_name(), "record.rs");
        assert_eq!(site.line(), line!() - 2);
        assert_eq!(site.function(), UNKNOWN_FUNCTION);
    }

    #[test]
    fn test_function_name_macro() {
        assert_eq!(crate::function_name!(), "test_function_name_macro");

        let from_closure = (|| crate::function_name!())();
        assert_eq!(from_closure, "test_function_name_macro");
    }

    #[test]
    fn test_call_site_macro() {
        let site = crate::call_site!();
        assert_eq!(site.file_name(), "record.rs");
        assert_eq!(site.function(), "test_call_site_macro");
    }

    #[test]
    fn test_format_line_shape() {
        let line = format_line("TestApp", Level::Warning, "[main] a.rs:1 in f() -- hi");
        let parts: Vec<&str> = line.splitn(4, " -- ").collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[1], "TestApp");
        assert_eq!(parts[2], "WARNING");
        assert_eq!(parts[3], "[main] a.rs:1 in f() -- hi");

        // 2024-02-07 12:00:00,123
        let ts = parts[0];
        assert_eq!(ts.len(), 23);
        assert_eq!(&ts[19..20], ",");
    }

    #[test]
    fn test_empty_app_name_is_root() {
        let line = format_line("", Level::Info, "msg");
        assert!(line.contains(" -- root -- INFO -- msg"));
    }

    #[test]
    fn test_format_fallback() {
        assert_eq!(format_fallback(Level::Critical, "boom"), "[CRITICAL] - boom");
    }

    #[test]
    fn test_trim_function_path() {
        assert_eq!(trim_function_path("app::jobs::run::__f"), "run");
        assert_eq!(trim_function_path("app::jobs::run::{{closure}}::__f"), "run");
        assert_eq!(trim_function_path("main::__f"), "main");
    }
}
