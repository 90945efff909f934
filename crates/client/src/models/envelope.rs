//! Canonical list envelope.
//!
//! The API returns lists in three shapes: `{items, total, pages}`, an object with a
//! resource-specific array key (`alertas`, `empresas`, ...), or a bare JSON array.
//! [`Page::from_value`] folds all of them into one `Page<T>` so callers never see
//! the difference.
//!
//! Invariants:
//! - `pages >= 1` for every successfully decoded page.
//! - A missing `total` equals the number of decoded items.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, Result};

/// Array keys accepted in place of `items`, in lookup order.
pub const LIST_KEYS: &[&str] = &[
    "items",
    "alertas",
    "empresas",
    "relatorios",
    "ranking",
    "series",
    "top",
];

/// One page of a list resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub pages: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            pages: 1,
        }
    }
}

impl<T> Page<T> {
    /// A single page holding every item.
    pub fn single(items: Vec<T>) -> Self {
        Self {
            total: items.len() as u64,
            items,
            pages: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Keep only items matching `keep`, recounting as a single page.
    pub fn filtered(self, keep: impl FnMut(&T) -> bool) -> Self {
        Self::single(self.items.into_iter().filter(keep).collect())
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            pages: self.pages,
        }
    }
}

impl<T: DeserializeOwned> Page<T> {
    /// Normalize any list response shape into a `Page`.
    ///
    /// `per_page` is the page size the request asked for; it is only used to derive
    /// `pages` when the server omitted it.
    pub fn from_value(value: Value, per_page: Option<u32>) -> Result<Self> {
        match value {
            Value::Array(raw) => Ok(Self::single(decode_items(raw)?)),
            Value::Object(mut map) => {
                let raw = LIST_KEYS
                    .iter()
                    .find_map(|key| match map.remove(*key) {
                        Some(Value::Array(items)) => Some(items),
                        _ => None,
                    })
                    .ok_or_else(|| {
                        ClientError::InvalidResponse(format!(
                            "expected a list under one of {LIST_KEYS:?}"
                        ))
                    })?;
                let items = decode_items(raw)?;

                let total = map
                    .get("total")
                    .and_then(as_u64)
                    .unwrap_or(items.len() as u64);
                let pages = map
                    .get("pages")
                    .and_then(as_u64)
                    .map(|p| u32::try_from(p).unwrap_or(u32::MAX))
                    .unwrap_or_else(|| pages_for(total, per_page));

                Ok(Self {
                    items,
                    total,
                    pages: pages.max(1),
                })
            }
            other => Err(ClientError::InvalidResponse(format!(
                "expected a list response, got {}",
                value_kind(&other)
            ))),
        }
    }
}

/// Number of pages needed for `total` items, at least 1.
pub fn pages_for(total: u64, per_page: Option<u32>) -> u32 {
    match per_page {
        Some(size) if size > 0 => {
            let pages = total.div_ceil(u64::from(size));
            u32::try_from(pages).unwrap_or(u32::MAX).max(1)
        }
        _ => 1,
    }
}

fn decode_items<T: DeserializeOwned>(raw: Vec<Value>) -> Result<Vec<T>> {
    raw.into_iter()
        .enumerate()
        .map(|(idx, item)| {
            serde_json::from_value(item).map_err(|e| {
                ClientError::InvalidResponse(format!("failed to decode list item {idx}: {e}"))
            })
        })
        .collect()
}

fn as_u64(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| value.as_f64().filter(|v| *v >= 0.0).map(|v| v as u64))
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn items_envelope_is_taken_as_is() {
        let page: Page<u32> =
            Page::from_value(json!({"items": [1, 2], "total": 42, "pages": 3}), Some(20)).unwrap();
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.total, 42);
        assert_eq!(page.pages, 3);
    }

    #[test]
    fn bespoke_key_becomes_items() {
        let page: Page<String> =
            Page::from_value(json!({"empresas": ["a", "b", "c"]}), None).unwrap();
        assert_eq!(page.len(), 3);
        assert_eq!(page.total, 3);
        assert_eq!(page.pages, 1);
    }

    #[test]
    fn bare_array_is_one_page() {
        let page: Page<u8> = Page::from_value(json!([7, 8]), Some(1)).unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.pages, 1);
    }

    #[test]
    fn missing_pages_derives_from_per_page() {
        let page: Page<u8> = Page::from_value(json!({"items": [], "total": 41}), Some(20)).unwrap();
        assert_eq!(page.pages, 3);
    }

    #[test]
    fn zero_pages_is_clamped_to_one() {
        let page: Page<u8> =
            Page::from_value(json!({"items": [], "total": 0, "pages": 0}), Some(20)).unwrap();
        assert_eq!(page.pages, 1);
    }

    #[test]
    fn scalar_body_is_rejected() {
        let err = Page::<u8>::from_value(json!("nope"), None).unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }
}
