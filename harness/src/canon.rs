//! Canonical JSON bytes for hashing.
//!
//! Objects are written with keys in byte order, output is compact, and
//! numbers must be integers: a float would let formatting drift across
//! platforms. Scalars are encoded by `serde_json`.

use serde_json::Value;

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanonError {
    /// A JSON number was not an integer.
    #[error("non-integer number in canonical JSON: {raw}")]
    NonIntegerNumber { raw: String },
    /// `serde_json` failed to encode a scalar.
    #[error("scalar encoding failed: {detail}")]
    Encode { detail: String },
}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not
/// representable as `i64` or `u64`.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CanonError> {
    let mut out = Vec::new();
    emit(value, &mut out)?;
    Ok(out)
}

fn emit(value: &Value, out: &mut Vec<u8>) -> Result<(), CanonError> {
    match value {
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                emit(item, out)?;
            }
            out.push(b']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
            out.push(b'{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                scalar(key, out)?;
                out.push(b':');
                emit(item, out)?;
            }
            out.push(b'}');
        }
        Value::Number(n) if !(n.is_i64() || n.is_u64()) => {
            return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => scalar(value, out)?,
    }
    Ok(())
}

fn scalar<T: serde::Serialize + ?Sized>(value: &T, out: &mut Vec<u8>) -> Result<(), CanonError> {
    serde_json::to_writer(out, value).map_err(|e| CanonError::Encode {
        detail: e.to_string(),
    })
}
