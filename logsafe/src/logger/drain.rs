//! `slog::Drain` implementations for the logger backends.
//!
//! Both drains render a complete line per record — the configured
//! time/level/msg keys, the static fields, and any record key-values — and
//! write it to an owned sink behind a mutex. Level filtering happens in the
//! `slog` pipeline (`Drain::filter_level`), not here.

use std::{
    io::{self, Write},
    sync::Mutex,
};

use chrono::{Local, SecondsFormat};
use serde_json::{Map as JsonMap, Value as JsonValue};
use slog::{Drain, Key, OwnedKVList, Record, KV};

use super::config::Keys;

/// Severity label used on the wire (JSON backend).
fn level_label(level: slog::Level) -> &'static str {
    match level {
        slog::Level::Critical => "critical",
        slog::Level::Error => "error",
        slog::Level::Warning => "warn",
        slog::Level::Info => "info",
        slog::Level::Debug => "debug",
        slog::Level::Trace => "trace",
    }
}

/// Severity label used by the text backend.
fn level_heading(level: slog::Level) -> &'static str {
    match level {
        slog::Level::Critical => "CRITICAL",
        slog::Level::Error => "ERROR",
        slog::Level::Warning => "WARN",
        slog::Level::Info => "INFO",
        slog::Level::Debug => "DEBUG",
        slog::Level::Trace => "TRACE",
    }
}

fn timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Collects a record's key-value pairs into a JSON object.
struct MapSerializer<'a> {
    map: &'a mut JsonMap<String, JsonValue>,
}

impl slog::Serializer for MapSerializer<'_> {
    fn emit_arguments(&mut self, key: Key, val: &std::fmt::Arguments<'_>) -> slog::Result {
        self.map
            .insert(key.into(), JsonValue::String(val.to_string()));
        Ok(())
    }

    fn emit_str(&mut self, key: Key, val: &str) -> slog::Result {
        self.map.insert(key.into(), JsonValue::String(val.into()));
        Ok(())
    }

    fn emit_bool(&mut self, key: Key, val: bool) -> slog::Result {
        self.map.insert(key.into(), JsonValue::Bool(val));
        Ok(())
    }

    fn emit_i64(&mut self, key: Key, val: i64) -> slog::Result {
        self.map.insert(key.into(), JsonValue::from(val));
        Ok(())
    }

    fn emit_u64(&mut self, key: Key, val: u64) -> slog::Result {
        self.map.insert(key.into(), JsonValue::from(val));
        Ok(())
    }

    fn emit_f64(&mut self, key: Key, val: f64) -> slog::Result {
        self.map.insert(key.into(), JsonValue::from(val));
        Ok(())
    }

    fn emit_unit(&mut self, key: Key) -> slog::Result {
        self.map.insert(key.into(), JsonValue::Null);
        Ok(())
    }

    fn emit_none(&mut self, key: Key) -> slog::Result {
        self.map.insert(key.into(), JsonValue::Null);
        Ok(())
    }

    fn emit_serde(&mut self, key: Key, value: &dyn slog::SerdeValue) -> slog::Result {
        let json = serde_json::to_value(value.as_serde()).unwrap_or(JsonValue::Null);
        self.map.insert(key.into(), json);
        Ok(())
    }
}

fn collect_kv(
    record: &Record<'_>,
    values: &OwnedKVList,
    map: &mut JsonMap<String, JsonValue>,
) -> io::Result<()> {
    let mut serializer = MapSerializer { map };
    record
        .kv()
        .serialize(record, &mut serializer)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
    values
        .serialize(record, &mut serializer)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
    Ok(())
}

fn lock_sink<W>(sink: &Mutex<W>) -> std::sync::MutexGuard<'_, W> {
    match sink.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Emits one JSON object per record.
pub(crate) struct JsonDrain<W: Write> {
    sink: Mutex<W>,
    keys: Keys,
    fields: JsonMap<String, JsonValue>,
}

impl<W: Write> JsonDrain<W> {
    pub(crate) fn new(sink: W, keys: Keys, fields: JsonMap<String, JsonValue>) -> Self {
        Self {
            sink: Mutex::new(sink),
            keys,
            fields,
        }
    }
}

impl<W: Write> Drain for JsonDrain<W> {
    type Ok = ();
    type Err = io::Error;

    fn log(&self, record: &Record<'_>, values: &OwnedKVList) -> Result<Self::Ok, Self::Err> {
        let mut map = self.fields.clone();
        map.insert(
            self.keys.time_key.clone(),
            JsonValue::String(timestamp()),
        );
        map.insert(
            self.keys.level_key.clone(),
            JsonValue::String(level_label(record.level()).to_string()),
        );
        map.insert(
            self.keys.msg_key.clone(),
            JsonValue::String(record.msg().to_string()),
        );
        collect_kv(record, values, &mut map)?;

        let mut sink = lock_sink(&self.sink);
        serde_json::to_writer(&mut *sink, &JsonValue::Object(map))?;
        writeln!(sink)?;
        Ok(())
    }
}

/// Emits one human-readable line per record.
pub(crate) struct TextDrain<W: Write> {
    sink: Mutex<W>,
    fields: JsonMap<String, JsonValue>,
}

impl<W: Write> TextDrain<W> {
    pub(crate) fn new(sink: W, fields: JsonMap<String, JsonValue>) -> Self {
        Self {
            sink: Mutex::new(sink),
            fields,
        }
    }
}

impl<W: Write> Drain for TextDrain<W> {
    type Ok = ();
    type Err = io::Error;

    fn log(&self, record: &Record<'_>, values: &OwnedKVList) -> Result<Self::Ok, Self::Err> {
        let mut kv = self.fields.clone();
        collect_kv(record, values, &mut kv)?;

        let mut sink = lock_sink(&self.sink);
        write!(
            sink,
            "{} {} {}",
            timestamp(),
            level_heading(record.level()),
            record.msg()
        )?;
        for (key, value) in &kv {
            write!(sink, " {key}={value}")?;
        }
        writeln!(sink)?;
        Ok(())
    }
}
