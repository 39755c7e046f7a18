//! Logging for parameter construction.
//!
//! The crate emits messages through the `log` facade: `debug!` when a parameter set is accepted or
//! rejected, and `trace!` for individual fields and defaults. The macros are re-exported here so
//! that callers can log through the same facade:
//!
//! ```rust
//! use chime_params::log::info;
//!
//! info!("Loading request");
//! ```
//!
//! Nothing is printed by default. With the `logging` feature (on by default), the functions below
//! install and reconfigure a console logger:
//!
//!  - `enable_logging()`: emit every message
//!  - `disable_logging()`: emit nothing
//!  - `set_log_level(level)`: emit messages with priority at least `level`
//!  - `set_module_filter(module, level)` / `remove_module_filter(module)`: override the level for
//!    one module path, e.g. `"chime_params::request"`
//!
//! Without the feature these only adjust `log::max_level()`.
#[cfg(feature = "logging")]
mod standard_logger;

#[cfg(not(feature = "logging"))]
mod null_logger;

pub use log::{debug, error, info, trace, warn, LevelFilter};

use rustc_hash::FxHashMap as HashMap;
use std::sync::{LazyLock, Mutex, MutexGuard};

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Off;

static LOGGER_SETTINGS: LazyLock<Mutex<LoggerSettings>> = LazyLock::new(Mutex::default);

/// The global level plus per-module overrides. Only one instance exists, behind
/// `LOGGER_SETTINGS`, because the installed logger is process-global.
#[derive(Debug)]
pub(in crate::log) struct LoggerSettings {
    pub(in crate::log) global_level: LevelFilter,
    pub(in crate::log) module_levels: HashMap<String, LevelFilter>,

    #[cfg(feature = "logging")]
    handle: Option<log4rs::Handle>,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            global_level: DEFAULT_LOG_LEVEL,
            module_levels: HashMap::default(),
            #[cfg(feature = "logging")]
            handle: None,
        }
    }
}

impl LoggerSettings {
    fn set_global_level(&mut self, level: LevelFilter) {
        self.global_level = level;
        self.apply();
    }

    fn set_module_level(&mut self, module: &str, level: LevelFilter) {
        if self.module_levels.get(module) == Some(&level) {
            return;
        }
        self.module_levels.insert(module.to_string(), level);
        self.apply();
    }

    fn remove_module_level(&mut self, module: &str) {
        if self.module_levels.remove(module).is_some() {
            self.apply();
        }
    }
}

/// Emits every message. Equivalent to `set_log_level(LevelFilter::Trace)`.
pub fn enable_logging() {
    set_log_level(LevelFilter::Trace);
}

/// Emits nothing. Equivalent to `set_log_level(LevelFilter::Off)`.
pub fn disable_logging() {
    set_log_level(LevelFilter::Off);
}

pub fn set_log_level(level: LevelFilter) {
    settings().set_global_level(level);
}

/// Overrides the global level for messages from `module_path` and its submodules.
pub fn set_module_filter(module_path: &str, level: LevelFilter) {
    settings().set_module_level(module_path, level);
}

/// Returns `module_path` to the global level.
pub fn remove_module_filter(module_path: &str) {
    settings().remove_module_level(module_path);
}

fn settings() -> MutexGuard<'static, LoggerSettings> {
    // A panic while holding the lock leaves the settings themselves intact.
    LOGGER_SETTINGS
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
