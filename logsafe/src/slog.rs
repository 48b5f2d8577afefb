//! Adapters for emitting masked values through `slog`.
//!
//! This module connects [`Masked`](crate::Masked) with `slog` by providing
//! `slog::Value` implementations that serialize masked outputs as structured
//! JSON via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is derived from the masked clone,
//!   never from the original value.
//! - Avoiding fallible logging APIs: serialization failures are represented
//!   as placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog` or decide which fields are sensitive.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::masking::Masked;

/// A `slog::Value` that emits an already-masked payload as structured JSON.
///
/// The payload is stored as a `serde_json::Value` and emitted via `slog`'s
/// nested-value support.
pub struct MaskedJson {
    value: JsonValue,
}

impl MaskedJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }
}

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts values into a `slog::Value` that logs their masked form as JSON.
///
/// `to_masked_json` builds the masked clone with a default-configured
/// [`Masker`](crate::Masker) and stores the result as a `serde_json::Value`.
/// The original (unmasked) value is never serialized.
///
/// ## Example
/// ```ignore
/// use logsafe::slog::ToMaskedJson;
///
/// info!(logger, "event"; "data" => event.to_masked_json());
/// ```
pub trait ToMaskedJson: Masked + Serialize {
    /// Masks `self` and returns a `slog::Value` that serializes as JSON.
    ///
    /// If converting the masked clone into `serde_json::Value` fails, the
    /// returned value stores a JSON string with the message
    /// `"failed to serialize masked value"`.
    #[must_use]
    fn to_masked_json(&self) -> MaskedJson {
        let masked = self.masked();
        let json = serde_json::to_value(masked).unwrap_or_else(|_| {
            JsonValue::String("failed to serialize masked value".to_string())
        });
        MaskedJson::new(json)
    }
}

impl<T> ToMaskedJson for T where T: Masked + Serialize {}
