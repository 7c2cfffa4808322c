//! Normalization of movie search response bodies.
//!
//! The same client talks to three back ends that wrap results differently:
//!
//! | Shape                              | Produced by                      |
//! |------------------------------------|----------------------------------|
//! | `{ "description": [...] }`         | the upstream API called directly |
//! | `{ "results": { "description": [...] } }` | the proxy and the generator |
//! | `{ "results": [...] }`             | hand-written mocks               |
//!
//! [`normalize_results`] checks them in that order and returns the first list
//! found, or an empty list.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A poster field that is either a single URL or a list of URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhotoUrl {
    One(String),
    Many(Vec<String>),
}

/// One search hit as a client sees it.
///
/// Built from any JSON object: known fields of an unexpected type never drop
/// the hit. A `year` or `photo_url` that cannot be read stays in `extra`
/// under its original key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct MovieSummary {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<PhotoUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MovieSummary {
    /// The poster to display: the URL itself, or the first of a list.
    pub fn poster(&self) -> Option<&str> {
        match self.photo_url.as_ref()? {
            PhotoUrl::One(url) => Some(url),
            PhotoUrl::Many(urls) => urls.first().map(String::as_str),
        }
    }
}

impl From<Map<String, Value>> for MovieSummary {
    fn from(mut extra: Map<String, Value>) -> Self {
        let title = match extra.remove("title") {
            Some(Value::String(s)) => s,
            Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
            _ => String::new(),
        };

        let year = match extra.remove("year") {
            Some(Value::Number(n)) if n.as_i64().is_some() => n.as_i64(),
            Some(Value::String(s)) if s.trim().parse::<i64>().is_ok() => s.trim().parse().ok(),
            Some(Value::Null) | None => None,
            Some(other) => {
                extra.insert("year".into(), other);
                None
            }
        };

        let photo_url = match extra.remove("photo_url") {
            Some(Value::String(url)) => Some(PhotoUrl::One(url)),
            Some(Value::Array(items)) => Some(PhotoUrl::Many(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(url) => Some(url),
                        _ => None,
                    })
                    .collect(),
            )),
            Some(Value::Null) | None => None,
            Some(other) => {
                extra.insert("photo_url".into(), other);
                None
            }
        };

        let url = match extra.remove("url") {
            Some(Value::String(url)) => Some(url),
            Some(Value::Null) | None => None,
            Some(other) => {
                extra.insert("url".into(), other);
                None
            }
        };

        Self {
            title,
            year,
            photo_url,
            url,
            extra,
        }
    }
}

/// Extract the result list from any of the known response shapes.
///
/// Every object in the located list is kept; non-object entries are skipped.
pub fn normalize_results(body: &Value) -> Vec<MovieSummary> {
    locate_list(body)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_object().cloned().map(MovieSummary::from))
                .collect()
        })
        .unwrap_or_default()
}

fn locate_list(body: &Value) -> Option<&Vec<Value>> {
    if let Some(list) = body.get("description").and_then(Value::as_array) {
        return Some(list);
    }

    match body.get("results") {
        Some(Value::Object(results)) => results.get("description").and_then(Value::as_array),
        Some(Value::Array(list)) => Some(list),
        _ => None,
    }
}
