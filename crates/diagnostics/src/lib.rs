// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Diagnostics for llms-index
//!
//! Lightweight, configurable logging shared by the library and the binary.
//!
//! Usage:
//! - Set LLMS_INDEX_LOG=off - no logs
//! - Set LLMS_INDEX_LOG=warn (default) - problems only
//! - Set LLMS_INDEX_LOG=info - basic operation logs
//! - Set LLMS_INDEX_LOG=debug - detailed diagnostic logs

use std::sync::Once;

// Re-export emit so macros can use it
pub use emit;

/// Environment variable consulted by [`init_diagnostics`].
pub const LOG_ENV_VAR: &str = "LLMS_INDEX_LOG";

static INIT: Once = Once::new();

/// Log level selected from the environment (or forced by the caller).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    /// Parse a level name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "off" => Some(LogLevel::Off),
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            _ => None,
        }
    }

    fn emit_level(self) -> Option<emit::Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(emit::Level::Error),
            LogLevel::Warn => Some(emit::Level::Warn),
            LogLevel::Info => Some(emit::Level::Info),
            LogLevel::Debug => Some(emit::Level::Debug),
        }
    }
}

/// Initialize diagnostics based on the LLMS_INDEX_LOG environment variable.
///
/// Safe to call multiple times; only the first call has any effect.
pub fn init_diagnostics() {
    init_with_override(None);
}

/// Initialize diagnostics, letting `forced` win over the environment.
///
/// The binary uses this for `--verbose`.
pub fn init_with_override(forced: Option<LogLevel>) {
    INIT.call_once(|| {
        let level = match forced {
            Some(level) => level,
            None => level_from_env(),
        };

        let Some(min) = level.emit_level() else {
            return;
        };

        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(min))
            .init();

        // The runtime must outlive main; flushing on exit is not needed for stderr.
        std::mem::forget(rt);
    });
}

fn level_from_env() -> LogLevel {
    let Ok(raw) = std::env::var(LOG_ENV_VAR) else {
        return LogLevel::Warn;
    };
    match LogLevel::parse(&raw) {
        Some(level) => level,
        None => {
            // Bootstrap warning - the logger is not running yet
            eprintln!("Warning: Unknown {} value '{}', using 'info'", LOG_ENV_VAR, raw);
            LogLevel::Info
        }
    }
}

/// Log basic operations (catalog loaded, files written, etc.)
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log detailed diagnostics (per-category counts, skipped entries, etc.)
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log warning conditions (config fallbacks, empty results)
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log error conditions (unreadable catalog, failed writes)
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

/// Re-export the init function for convenience
pub use init_diagnostics as init;
