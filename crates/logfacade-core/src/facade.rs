//! Process-wide logging facade
//!
//! `LogFacade` is created lazily on first use and lives until the process
//! exits. Until `configure` is called it has no sinks, and every message is
//! printed to stdout as `[LEVEL] - <annotated message>`. The same fallback is
//! used whenever a sink fails to write, so logging calls never fail.
//!
//! ```no_run
//! use logfacade_core::{info_log, Level, LogFacade, LoggerConfig};
//!
//! LogFacade::get_instance()
//!     .configure(
//!         &LoggerConfig::new("my-app")
//!             .with_info_file("logs/info.log")
//!             .with_critical_file("logs/critical.log")
//!             .with_console(true)
//!             .with_level(Level::Debug),
//!     )
//!     .expect("logging setup");
//!
//! LogFacade::info("service started");
//! info_log!("listening on port {}", 8080);
//! ```

use std::io::{self, Write};

use once_cell::sync::OnceCell;
use parking_lot::{Mutex, RwLock};

use crate::backend::Backend;
use crate::config::LoggerConfig;
use crate::error::{LogError, LogResult};
use crate::level::Level;
use crate::record::{format_fallback, CallSite};
use crate::sinks::SharedSink;

/// Global facade instance
static INSTANCE: OnceCell<LogFacade> = OnceCell::new();

enum FacadeState {
    Unconfigured,
    Configured(Backend),
}

/// Singleton wrapper around a configurable multi-sink logger
pub struct LogFacade {
    state: RwLock<FacadeState>,
    fallback: Mutex<Box<dyn Write + Send>>,
}

impl LogFacade {
    fn new() -> Self {
        Self::with_fallback(io::stdout())
    }

    fn with_fallback(writer: impl Write + Send + 'static) -> Self {
        Self {
            state: RwLock::new(FacadeState::Unconfigured),
            fallback: Mutex::new(Box::new(writer)),
        }
    }

    /// The process-wide facade, created unconfigured on first call
    pub fn get_instance() -> &'static LogFacade {
        INSTANCE.get_or_init(LogFacade::new)
    }

    /// Create the process-wide facade directly
    ///
    /// Fails with `SingletonViolation` once an instance exists, whether it
    /// was made here or by `get_instance`.
    pub fn try_create() -> LogResult<&'static LogFacade> {
        let mut created = false;
        let instance = INSTANCE.get_or_init(|| {
            created = true;
            LogFacade::new()
        });
        if created {
            Ok(instance)
        } else {
            Err(LogError::SingletonViolation)
        }
    }

    /// Replace the current logger with one built from `config`
    ///
    /// Missing directories are created. Previously attached sinks are
    /// dropped once the new ones are in place; on error the current logger
    /// is left untouched.
    pub fn configure(&self, config: &LoggerConfig) -> LogResult<()> {
        let backend = Backend::from_config(config)?;
        let previous = std::mem::replace(&mut *self.state.write(), FacadeState::Configured(backend));
        if let FacadeState::Configured(old) = previous {
            let _ = old.flush();
        }
        Ok(())
    }

    /// Attach an extra sink to the configured logger
    pub fn add_sink(&self, floor: Level, sink: SharedSink) -> LogResult<()> {
        match &mut *self.state.write() {
            FacadeState::Configured(backend) => {
                backend.attach(floor, sink);
                Ok(())
            }
            FacadeState::Unconfigured => Err(LogError::NotConfigured),
        }
    }

    /// Drop the logger and return to the unconfigured state
    pub fn reset(&self) {
        let previous = std::mem::replace(&mut *self.state.write(), FacadeState::Unconfigured);
        if let FacadeState::Configured(old) = previous {
            let _ = old.flush();
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(*self.state.read(), FacadeState::Configured(_))
    }

    /// Configured application name, if any
    pub fn app_name(&self) -> Option<String> {
        match &*self.state.read() {
            FacadeState::Configured(backend) => Some(backend.name().to_string()),
            FacadeState::Unconfigured => None,
        }
    }

    /// Configured minimum level, if any
    pub fn level(&self) -> Option<Level> {
        match &*self.state.read() {
            FacadeState::Configured(backend) => Some(backend.level()),
            FacadeState::Unconfigured => None,
        }
    }

    /// Flush every sink
    pub fn flush(&self) -> io::Result<()> {
        match &*self.state.read() {
            FacadeState::Configured(backend) => backend.flush(),
            FacadeState::Unconfigured => Ok(()),
        }
    }

    /// Annotate `message` with the caller context and deliver it
    ///
    /// Falls back to stdout when unconfigured or when a sink write fails.
    pub fn emit(&self, level: Level, site: &CallSite, message: &str) {
        let annotated = site.annotate(message);
        if !self.deliver(level, &annotated) {
            self.write_fallback(level, &annotated);
        }
    }

    /// The only error boundary of the emission path: sink write failures
    fn deliver(&self, level: Level, annotated: &str) -> bool {
        match &*self.state.read() {
            FacadeState::Configured(backend) => backend.log(level, annotated).is_ok(),
            FacadeState::Unconfigured => false,
        }
    }

    fn write_fallback(&self, level: Level, annotated: &str) {
        let mut out = self.fallback.lock();
        let _ = writeln!(out, "{}", format_fallback(level, annotated));
        let _ = out.flush();
    }

    /// Log at DEBUG through the global facade
    #[track_caller]
    pub fn debug(message: &str) {
        Self::get_instance().emit(Level::Debug, &CallSite::caller(), message);
    }

    /// Log at INFO through the global facade
    #[track_caller]
    pub fn info(message: &str) {
        Self::get_instance().emit(Level::Info, &CallSite::caller(), message);
    }

    /// Log at WARNING through the global facade
    #[track_caller]
    pub fn warning(message: &str) {
        Self::get_instance().emit(Level::Warning, &CallSite::caller(), message);
    }

    /// Alias for `warning`
    #[track_caller]
    pub fn warn(message: &str) {
        Self::warning(message);
    }

    /// Log at ERROR through the global facade
    #[track_caller]
    pub fn error(message: &str) {
        Self::get_instance().emit(Level::Error, &CallSite::caller(), message);
    }

    /// Alias for `error`
    #[track_caller]
    pub fn err(message: &str) {
        Self::error(message);
    }

    /// Log at CRITICAL through the global facade
    #[track_caller]
    pub fn critical(message: &str) {
        Self::get_instance().emit(Level::Critical, &CallSite::caller(), message);
    }

    /// Alias for `critical`
    #[track_caller]
    pub fn crit(message: &str) {
        Self::critical(message);
    }
}

impl std::fmt::Debug for LogFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("LogFacade");
        match &*self.state.read() {
            FacadeState::Configured(backend) => s.field("backend", backend),
            FacadeState::Unconfigured => s.field("backend", &"unconfigured"),
        };
        s.finish()
    }
}

/// Log at the given level through the global facade, with the caller's function name
#[macro_export]
macro_rules! log_at {
    ($level:expr, $($arg:tt)*) => {
        $crate::LogFacade::get_instance().emit($level, &$crate::call_site!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::log_at!($crate::Level::Debug, $($arg)*)
    };
}

#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        $crate::log_at!($crate::Level::Info, $($arg)*)
    };
}

#[macro_export]
macro_rules! warning_log {
    ($($arg:tt)*) => {
        $crate::log_at!($crate::Level::Warning, $($arg)*)
    };
}

#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::log_at!($crate::Level::Error, $($arg)*)
    };
}

#[macro_export]
macro_rules! critical_log {
    ($($arg:tt)*) => {
        $crate::log_at!($crate::Level::Critical, $($arg)*)
    };
}
