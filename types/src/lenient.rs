//! Field decoders for backend records.
//!
//! The backend stores whatever was posted, so numbers may come back as
//! strings (or floats where an integer is expected) and any field may be
//! null. These decoders take what they can and fall back to the default.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl Raw {
    fn number(self) -> Option<f64> {
        match self {
            Raw::Number(n) => Some(n),
            Raw::Text(s) => s.trim().parse().ok(),
            Raw::Other(_) => None,
        }
        .filter(|n| n.is_finite())
    }
}

pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
        Raw::Other(_) => String::new(),
    })
}

pub(crate) fn price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Raw::deserialize(deserializer)?.number().unwrap_or_default())
}

pub(crate) fn stock<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Raw::deserialize(deserializer)?
        .number()
        .map(|n| n.trunc() as i64)
        .unwrap_or_default())
}

/// The create form submits the rating as the selected option's string, so it
/// comes back either way. Anything outside `0..=255` reads as unrated.
pub(crate) fn rating<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Raw::deserialize(deserializer)?
        .number()
        .filter(|n| (0.0..=f64::from(u8::MAX)).contains(n))
        .map(|n| n as u8)
        .unwrap_or_default())
}
