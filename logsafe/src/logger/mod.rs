//! A leveled, structured logger that masks before it formats.
//!
//! The facade wraps a `slog` pipeline and owns a [`Masker`]. Plain messages
//! are emitted as-is; structured payloads go through
//! [`Masker::mask_sensitive_data`] *before* JSON encoding, so unmasked
//! values never reach the output sink. Drain errors are ignored at the root
//! of the pipeline: logging never blocks the caller.
//!
//! The factory selects the output backend from [`Config::backend`]; both
//! backends write to stdout by default, or to any `Write` sink via
//! [`Logger::with_writer`].

mod config;
mod drain;

use std::io::{self, Write};

use serde::Serialize;
use slog::Drain;

use self::drain::{JsonDrain, TextDrain};
use crate::masking::{Maskable, Masker};

pub use config::{Backend, Config, ConfigError, Keys, DEFAULT_LEVEL};

/// Leveled logger with a masking boundary in front of the sink.
#[derive(Clone)]
pub struct Logger {
    inner: slog::Logger,
    masker: Masker,
}

impl Logger {
    /// Builds a logger writing to stdout.
    pub fn new(cfg: Config) -> Result<Self, ConfigError> {
        Self::with_writer(cfg, io::stdout())
    }

    /// Builds a logger writing to an arbitrary sink.
    pub fn with_writer<W>(cfg: Config, sink: W) -> Result<Self, ConfigError>
    where
        W: Write + Send + 'static,
    {
        let level = config::parse_level(&cfg.level)?;
        let fields: serde_json::Map<String, serde_json::Value> =
            cfg.fields.into_iter().collect();
        let inner = match cfg.backend {
            Backend::Json => {
                let drain = JsonDrain::new(sink, cfg.keys, fields);
                slog::Logger::root(drain.filter_level(level).ignore_res(), slog::o!())
            }
            Backend::Text => {
                let drain = TextDrain::new(sink, fields);
                slog::Logger::root(drain.filter_level(level).ignore_res(), slog::o!())
            }
        };
        Ok(Self {
            inner,
            masker: Masker::new(),
        })
    }

    /// Logs a plain message at debug level.
    pub fn debug(&self, msg: &str) {
        slog::debug!(self.inner, "{}", msg);
    }

    /// Logs a plain message at info level.
    pub fn info(&self, msg: &str) {
        slog::info!(self.inner, "{}", msg);
    }

    /// Logs a plain message at warning level.
    pub fn warn(&self, msg: &str) {
        slog::warn!(self.inner, "{}", msg);
    }

    /// Logs a plain message at error level.
    pub fn error(&self, msg: &str) {
        slog::error!(self.inner, "{}", msg);
    }

    /// Masks `value` and logs its JSON form at debug level.
    pub fn debug_masked<T: Maskable + Serialize>(&self, value: &T) {
        slog::debug!(self.inner, "{}", self.format_value(value));
    }

    /// Masks `value` and logs its JSON form at info level.
    pub fn info_masked<T: Maskable + Serialize>(&self, value: &T) {
        slog::info!(self.inner, "{}", self.format_value(value));
    }

    /// Masks `value` and logs its JSON form at warning level.
    pub fn warn_masked<T: Maskable + Serialize>(&self, value: &T) {
        slog::warn!(self.inner, "{}", self.format_value(value));
    }

    /// Masks `value` and logs its JSON form at error level.
    pub fn error_masked<T: Maskable + Serialize>(&self, value: &T) {
        slog::error!(self.inner, "{}", self.format_value(value));
    }

    /// Masks a structured payload and renders it as a JSON string.
    ///
    /// Encoding failures degrade to an empty string; the masking boundary
    /// never surfaces an error to the caller.
    fn format_value<T: Maskable + Serialize>(&self, value: &T) -> String {
        let masked = self.masker.mask_sensitive_data(value);
        serde_json::to_string(&masked).unwrap_or_default()
    }
}
