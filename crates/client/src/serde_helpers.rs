//! Serde helpers for the API's loose JSON typing.
//!
//! Responsibilities:
//! - Accept numeric fields as JSON numbers or decimal strings (`Decimal` columns are
//!   serialized as strings by the backend).
//! - Accept identifiers as either numbers or strings.
//! - Default `null` and unparseable numerics to zero so a single odd row never
//!   fails a whole page.
//!
//! Invariants:
//! - Combine with `#[serde(default)]` so missing fields also default.
//! - Decimal strings may use `.` or `,` as the decimal separator.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Loose {
    U64(u64),
    I64(i64),
    F64(f64),
    Bool(bool),
    String(String),
}

fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .or_else(|| trimmed.replace(',', ".").parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

fn loose_to_f64(value: Loose) -> Option<f64> {
    match value {
        Loose::U64(v) => Some(v as f64),
        Loose::I64(v) => Some(v as f64),
        Loose::F64(v) => Some(v),
        Loose::Bool(_) => None,
        Loose::String(s) => parse_decimal(&s),
    }
}

/// `f64` from a number, a decimal string, or `null` (zero).
pub fn f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Loose>::deserialize(deserializer)?
        .and_then(loose_to_f64)
        .unwrap_or(0.0))
}

/// Like [`f64_lenient`] but keeps the absence of a value.
pub fn opt_f64_lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Loose>::deserialize(deserializer)?.and_then(loose_to_f64))
}

/// Non-negative count from a number or string; fractional values are truncated.
pub fn u64_lenient<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Loose>::deserialize(deserializer)?;
    Ok(match value {
        Some(Loose::U64(v)) => v,
        Some(other) => loose_to_f64(other)
            .filter(|v| *v >= 0.0)
            .map(|v| v as u64)
            .unwrap_or(0),
        None => 0,
    })
}

/// Identifier or code that may arrive as a number or a string.
pub fn string_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_string_from_number_or_string(deserializer)?.unwrap_or_default())
}

pub fn opt_string_from_number_or_string<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<Loose>::deserialize(deserializer)?.map(|value| match value {
            Loose::U64(v) => v.to_string(),
            Loose::I64(v) => v.to_string(),
            Loose::F64(v) => v.to_string(),
            Loose::Bool(v) => v.to_string(),
            Loose::String(s) => s,
        }),
    )
}

/// String list from either a JSON array or a comma separated string.
pub fn string_list_lenient<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListOrString {
        List(Vec<String>),
        String(String),
    }

    Ok(
        match Option::<ListOrString>::deserialize(deserializer)? {
            Some(ListOrString::List(items)) => items,
            Some(ListOrString::String(raw)) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        },
    )
}

/// Count map (`{"sobrepreco": "3"}`); unparseable counts become zero.
pub fn count_map_lenient<'de, D>(deserializer: D) -> Result<BTreeMap<String, u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, Loose>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .map(|(k, v)| {
            let count = match v {
                Loose::U64(n) => n,
                other => loose_to_f64(other)
                    .filter(|n| *n >= 0.0)
                    .map(|n| n as u64)
                    .unwrap_or(0),
            };
            (k, count)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Money {
        #[serde(default, deserialize_with = "f64_lenient")]
        valor: f64,
        #[serde(default, deserialize_with = "u64_lenient")]
        total: u64,
    }

    #[test]
    fn decimal_strings_and_numbers_parse() {
        let a: Money = serde_json::from_str(r#"{"valor": "1234.56", "total": "7"}"#).unwrap();
        assert_eq!(a.valor, 1234.56);
        assert_eq!(a.total, 7);

        let b: Money = serde_json::from_str(r#"{"valor": 10, "total": 3.9}"#).unwrap();
        assert_eq!(b.valor, 10.0);
        assert_eq!(b.total, 3);
    }

    #[test]
    fn null_missing_and_garbage_default_to_zero() {
        let a: Money = serde_json::from_str(r#"{"valor": null}"#).unwrap();
        assert_eq!(a.valor, 0.0);
        assert_eq!(a.total, 0);

        let b: Money = serde_json::from_str(r#"{"valor": "n/a", "total": -4}"#).unwrap();
        assert_eq!(b.valor, 0.0);
        assert_eq!(b.total, 0);
    }

    #[test]
    fn comma_decimal_separator_is_accepted() {
        let a: Money = serde_json::from_str(r#"{"valor": "12,5"}"#).unwrap();
        assert_eq!(a.valor, 12.5);
    }

    #[test]
    fn string_list_accepts_array_or_csv() {
        #[derive(Deserialize)]
        struct W {
            #[serde(default, deserialize_with = "string_list_lenient")]
            tags: Vec<String>,
        }
        let a: W = serde_json::from_str(r#"{"tags": ["obra", "asfalto"]}"#).unwrap();
        let b: W = serde_json::from_str(r#"{"tags": "obra, asfalto,"}"#).unwrap();
        assert_eq!(a.tags, b.tags);
    }

    #[test]
    fn ids_accept_numbers() {
        #[derive(Deserialize)]
        struct W {
            #[serde(deserialize_with = "string_from_number_or_string")]
            id: String,
        }
        let w: W = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(w.id, "42");
    }
}
