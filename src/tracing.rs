//! Logging setup and field state diffs
//!
//! The crate only emits `tracing` events; hosts that already install a
//! subscriber get them for free. Hosts without one can call [`init`].
//!
//! Filtering goes through `RUST_LOG`:
//! - `RUST_LOG=token_field=debug` - field creation, focus changes, rejected input
//! - `RUST_LOG=token_field::focus=debug` - focus changes only
//! - `RUST_LOG=token_field::dispatch=trace` - per-event state diffs
//!
//! The file log lands in `<config dir>/logs/token-field.log.YYYY-MM-DD`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::field::Field;

const LOG_FILE_PREFIX: &str = "token-field.log";

/// What [`init_with`] installs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Console directives used when `RUST_LOG` is unset or invalid
    pub console_default: String,
    /// Directives for the daily log file; None disables file logging
    pub file_filter: Option<String>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            console_default: "warn".to_string(),
            file_filter: Some("token_field=debug".to_string()),
        }
    }
}

/// Install console and file logging with [`LogSettings::default`]
pub fn init() -> bool {
    init_with(&LogSettings::default())
}

/// Install a global subscriber. Returns false if one was already set.
pub fn init_with(settings: &LogSettings) -> bool {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.console_default));
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = settings.file_filter.as_deref().and_then(|directives| {
        match crate::config_paths::ensure_logs_dir() {
            Ok(logs_dir) => Some(
                fmt::layer()
                    .with_writer(tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX))
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new(directives)),
            ),
            Err(e) => {
                eprintln!("Warning: Could not initialize file logging: {:#}", e);
                None
            }
        }
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
}

/// Lightweight snapshot of a field's editing state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub text_len: usize,
    pub caret: usize,
    pub has_focus: bool,
    pub activated: bool,
}

impl FieldSnapshot {
    pub fn from_field(field: &Field) -> Self {
        Self {
            text_len: field.text().chars().count(),
            caret: field.caret(),
            has_focus: field.has_focus(),
            activated: field.is_activated(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &FieldSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.text_len != other.text_len {
            changes.push(format!("len: {} → {}", self.text_len, other.text_len));
        }
        if self.caret != other.caret {
            changes.push(format!("caret: {} → {}", self.caret, other.caret));
        }
        if self.has_focus != other.has_focus {
            let status = if other.has_focus { "gained" } else { "lost" };
            changes.push(format!("focus {}", status));
        }
        if self.activated != other.activated {
            let status = if other.activated { "raised" } else { "cleared" };
            changes.push(format!("activation {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
