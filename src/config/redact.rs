//! Serde helpers that hide secret values.

use serde::Serializer;

pub const REDACTED: &str = "[REDACTED]";

pub fn secret<T, S>(_value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: ?Sized,
    S: Serializer,
{
    serializer.serialize_str(REDACTED)
}

pub fn optional_secret<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(_) => serializer.serialize_some(REDACTED),
        None => serializer.serialize_none(),
    }
}
