//! Boolean columns in the CSV files.
//!
//! Existing files were written with `True`/`False`, so the same spelling is
//! used on write. Reading is lenient about case and also accepts `1`/`0`.

use serde::{de, Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(label(*value))
}

/// Cell text for a boolean, as written to the CSV
pub fn label(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid boolean: {raw:?}")))
}

/// Parse a boolean cell
pub fn parse(raw: &str) -> Option<bool> {
    match raw.trim() {
        v if v.eq_ignore_ascii_case("true") || v == "1" => Some(true),
        v if v.eq_ignore_ascii_case("false") || v == "0" => Some(false),
        _ => None,
    }
}
