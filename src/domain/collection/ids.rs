//! Record identifier normalization.
//!
//! Identifiers arrive from the URL as text while records store them as JSON
//! numbers or strings. Both sides are normalized to a string before comparing,
//! so `"7"` finds `{"id": 7}` and `7` finds `{"id": "7"}`.

use serde_json::Number;
use serde_json::Value as JsonValue;

/// Largest magnitude at which an `f64` still holds every integer exactly.
const MAX_EXACT_F64_INT: f64 = 9_007_199_254_740_992.0;

/// Returns the canonical string form of an identifier value.
///
/// Strings are returned as-is and numbers are rendered without a trailing
/// `.0` when they hold an integral value. Other JSON types have no identifier
/// form and yield `None`.
pub fn id_key(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(number_key(n)),
        _ => None,
    }
}

/// Loose identifier equality between a record's `id` field and a requested id.
///
/// Besides exact string equality of the normalized forms, a numeric record id
/// also matches a requested id that parses to the same number (`"1.0"` matches `1`).
pub fn ids_match(record_id: &JsonValue, requested: &str) -> bool {
    let Some(key) = id_key(record_id) else {
        return false;
    };
    if key == requested {
        return true;
    }

    match (record_id.as_f64(), parse_numeric(requested)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn number_key(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < MAX_EXACT_F64_INT => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn parse_numeric(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
}
