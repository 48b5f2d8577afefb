//! Integration tests for the logger facade.
//!
//! These tests drive the factory end-to-end against an in-memory sink and
//! verify key remapping, static fields, level filtering, and the masking
//! boundary in front of the drain.

#![cfg(feature = "logger")]

use std::{
    collections::HashMap,
    io::{self, Write},
    sync::{Arc, Mutex},
};

use logsafe::{
    logger::{Backend, Config, ConfigError, Keys, Logger},
    Sensitive,
};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// An in-memory sink that stays readable after the logger takes ownership.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    fn lines(&self) -> Vec<JsonValue> {
        self.contents()
            .lines()
            .map(|line| serde_json::from_str(line).expect("line should be valid JSON"))
            .collect()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Sensitive, Serialize)]
struct Login {
    user: String,
    #[sensitive(full)]
    password: String,
    #[sensitive]
    session: String,
}

#[test]
fn test_json_backend_emits_structural_keys() {
    let buf = SharedBuf::default();
    let logger = Logger::with_writer(Config::default(), buf.clone()).unwrap();

    logger.info("hello");

    let lines = buf.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["msg"], "hello");
    assert_eq!(lines[0]["level"], "info");
    assert!(lines[0]["ts"].is_string());
}

#[test]
fn test_json_backend_respects_custom_keys() {
    let buf = SharedBuf::default();
    let cfg = Config {
        keys: Keys {
            msg_key: "message".to_string(),
            level_key: "severity".to_string(),
            time_key: "time".to_string(),
        },
        ..Config::default()
    };
    let logger = Logger::with_writer(cfg, buf.clone()).unwrap();

    logger.warn("careful");

    let lines = buf.lines();
    assert_eq!(lines[0]["message"], "careful");
    assert_eq!(lines[0]["severity"], "warn");
    assert!(lines[0]["time"].is_string());
    assert!(lines[0].get("msg").is_none());
}

#[test]
fn test_static_fields_are_attached_to_every_line() {
    let buf = SharedBuf::default();
    let mut fields = HashMap::new();
    fields.insert("service".to_string(), JsonValue::from("payments"));
    fields.insert("shard".to_string(), JsonValue::from(3));
    let cfg = Config {
        fields,
        ..Config::default()
    };
    let logger = Logger::with_writer(cfg, buf.clone()).unwrap();

    logger.info("one");
    logger.error("two");

    let lines = buf.lines();
    assert_eq!(lines.len(), 2);
    for line in &lines {
        assert_eq!(line["service"], "payments");
        assert_eq!(line["shard"], 3);
    }
}

#[test]
fn test_level_threshold_filters_lower_severities() {
    let buf = SharedBuf::default();
    let cfg = Config {
        level: "info".to_string(),
        ..Config::default()
    };
    let logger = Logger::with_writer(cfg, buf.clone()).unwrap();

    logger.debug("dropped");
    logger.info("kept");
    logger.error("also kept");

    let lines = buf.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["msg"], "kept");
    assert_eq!(lines[1]["msg"], "also kept");
}

#[test]
fn test_masked_payload_never_reaches_the_sink() {
    let buf = SharedBuf::default();
    let logger = Logger::with_writer(Config::default(), buf.clone()).unwrap();

    let login = Login {
        user: "alice".to_string(),
        password: "hunter2".to_string(),
        session: "abc123def".to_string(),
    };
    logger.info_masked(&login);

    let contents = buf.contents();
    assert!(!contents.contains("hunter2"));
    assert!(!contents.contains("abc123def"));

    let lines = buf.lines();
    let msg = lines[0]["msg"].as_str().unwrap();
    let payload: JsonValue = serde_json::from_str(msg).unwrap();
    assert_eq!(payload["user"], "alice");
    assert_eq!(payload["password"], "*******");
    // "abc123def" is nine characters: two visible, seven masked.
    assert_eq!(payload["session"], "ab*******");
}

#[test]
fn test_masked_variants_cover_all_levels() {
    let buf = SharedBuf::default();
    let cfg = Config {
        level: "trace".to_string(),
        ..Config::default()
    };
    let logger = Logger::with_writer(cfg, buf.clone()).unwrap();

    let login = Login {
        user: "bob".to_string(),
        password: "p4ss".to_string(),
        session: "s".to_string(),
    };
    logger.debug_masked(&login);
    logger.info_masked(&login);
    logger.warn_masked(&login);
    logger.error_masked(&login);

    let lines = buf.lines();
    assert_eq!(lines.len(), 4);
    let levels: Vec<_> = lines
        .iter()
        .map(|line| line["level"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(levels, vec!["debug", "info", "warn", "error"]);
    assert!(!buf.contents().contains("p4ss"));
}

#[test]
fn test_text_backend_renders_single_lines() {
    let buf = SharedBuf::default();
    let mut fields = HashMap::new();
    fields.insert("service".to_string(), JsonValue::from("payments"));
    let cfg = Config {
        fields,
        backend: Backend::Text,
        ..Config::default()
    };
    let logger = Logger::with_writer(cfg, buf.clone()).unwrap();

    logger.error("boom");

    let contents = buf.contents();
    let mut lines = contents.lines();
    let line = lines.next().unwrap();
    assert!(lines.next().is_none());
    assert!(line.contains(" ERROR boom"));
    assert!(line.contains("service=\"payments\""));
}

#[test]
fn test_invalid_level_is_rejected() {
    let cfg = Config {
        level: "loud".to_string(),
        ..Config::default()
    };
    let result = Logger::new(cfg);
    assert!(matches!(result, Err(ConfigError::InvalidLevel(level)) if level == "loud"));
}

#[test]
fn test_empty_level_defaults_to_debug() {
    let buf = SharedBuf::default();
    let logger = Logger::with_writer(Config::default(), buf.clone()).unwrap();

    logger.debug("visible");
    assert_eq!(buf.lines().len(), 1);
}
