//! Typed schema for the mock-server environment file.
//!
//! The file is a Mockoon environment: a JSON object with an ordered `routes`
//! list, each route holding an ordered `responses` list. Only the fields this
//! workspace reads or writes are typed; every other key is kept in an `extra`
//! map so a load/save cycle never drops operator configuration.
//!
//! A response body is stored in one of two mutually exclusive encodings:
//!
//! - legacy: `bodyType` + inline `body` string
//! - structured: `content: { type, data }`
//!
//! [`ResponseBody`] models that choice as an enum so callers match on the
//! variant instead of probing for fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;

/// `bodyType` written for inline legacy bodies.
pub const INLINE_BODY_TYPE: &str = "INLINE";

/// MIME type written into structured bodies.
pub const JSON_MIME_TYPE: &str = "application/json";

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// The whole environment document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub routes: Vec<Route>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Environment {
    /// An environment with no routes and no other keys.
    pub fn empty() -> Self {
        Self {
            routes: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Parse and validate a document from its JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, CoreError> {
        serde_json::from_str(text).map_err(|e| CoreError::MalformedDocument(e.to_string()))
    }

    /// Validate an already-parsed JSON value against the schema.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        serde_json::from_value(value).map_err(|e| CoreError::MalformedDocument(e.to_string()))
    }

    /// Serialize with two-space indentation, the layout Mockoon itself writes.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// ---------------------------------------------------------------------------
// Route
// ---------------------------------------------------------------------------

/// One endpoint definition served by the mock server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Missing on hand-written routes; filled in when appended.
    #[serde(default)]
    pub uuid: String,
    pub method: String,
    pub endpoint: String,
    pub responses: Vec<RouteResponse>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A `{key, value}` header pair as Mockoon stores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    pub value: String,
}

impl Header {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// Which encoding a response body uses on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyEncoding {
    Legacy,
    Structured,
}

/// Body of a mock response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    /// Neither encoding is populated.
    Empty,
    /// `bodyType` + `body`.
    Legacy { body_type: String, body: String },
    /// `content: { type, data }`.
    Structured { mime_type: String, data: String },
}

impl ResponseBody {
    /// The encoding in use, if any.
    pub fn encoding(&self) -> Option<BodyEncoding> {
        match self {
            Self::Empty => None,
            Self::Legacy { .. } => Some(BodyEncoding::Legacy),
            Self::Structured { .. } => Some(BodyEncoding::Structured),
        }
    }

    /// The raw body text regardless of encoding.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Legacy { body, .. } => Some(body),
            Self::Structured { data, .. } => Some(data),
        }
    }
}

/// One response variant of a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawResponse", into = "RawResponse")]
pub struct RouteResponse {
    pub status_code: u16,
    pub headers: Vec<Header>,
    pub body: ResponseBody,
    pub extra: Map<String, Value>,
}

impl RouteResponse {
    /// Minimal response used when a route has none: 200, no headers, no body.
    pub fn placeholder() -> Self {
        Self {
            status_code: 200,
            headers: Vec::new(),
            body: ResponseBody::Empty,
            extra: Map::new(),
        }
    }
}

/// On-disk field layout of a response. Both encodings appear as optional
/// fields here; conversion to [`RouteResponse`] picks exactly one.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResponse {
    status_code: u16,
    #[serde(default)]
    headers: Vec<Header>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<Value>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<RawResponse> for RouteResponse {
    type Error = CoreError;

    fn try_from(raw: RawResponse) -> Result<Self, Self::Error> {
        // A populated `content` wins over any legacy fields left beside it.
        // `null` and `{}` count as unpopulated.
        let body = match raw.content {
            Some(Value::Object(content)) if !content.is_empty() => parse_structured(content)?,
            Some(Value::Object(_)) | Some(Value::Null) | None => match (raw.body_type, raw.body) {
                (None, None) => ResponseBody::Empty,
                (body_type, body) => ResponseBody::Legacy {
                    body_type: body_type.unwrap_or_else(|| INLINE_BODY_TYPE.to_string()),
                    body: body.unwrap_or_default(),
                },
            },
            Some(other) => {
                return Err(CoreError::MalformedDocument(format!(
                    "response content must be an object, got {other}"
                )))
            }
        };

        Ok(Self {
            status_code: raw.status_code,
            headers: raw.headers,
            body,
            extra: raw.extra,
        })
    }
}

fn parse_structured(content: Map<String, Value>) -> Result<ResponseBody, CoreError> {
    let mime_type = match content.get("type") {
        None | Some(Value::Null) => JSON_MIME_TYPE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            return Err(CoreError::MalformedDocument(format!(
                "content.type must be a string, got {other}"
            )))
        }
    };
    let data = match content.get("data") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            return Err(CoreError::MalformedDocument(format!(
                "content.data must be a string, got {other}"
            )))
        }
    };

    Ok(ResponseBody::Structured { mime_type, data })
}

impl From<RouteResponse> for RawResponse {
    fn from(response: RouteResponse) -> Self {
        let (body_type, body, content) = match response.body {
            ResponseBody::Empty => (None, None, None),
            ResponseBody::Legacy { body_type, body } => (Some(body_type), Some(body), None),
            ResponseBody::Structured { mime_type, data } => {
                let mut content = Map::new();
                content.insert("type".into(), Value::String(mime_type));
                content.insert("data".into(), Value::String(data));
                (None, None, Some(Value::Object(content)))
            }
        };

        Self {
            status_code: response.status_code,
            headers: response.headers,
            body_type,
            body,
            content,
            extra: response.extra,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
