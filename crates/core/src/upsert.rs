//! Movies-route upsert over an in-memory [`Environment`].
//!
//! [`upsert_movies_route`] finds (or appends) the `GET` movies route and
//! overwrites its first response with a JSON payload. The body is written in
//! whichever encoding the response already used; a response with no body, or
//! a freshly created one, gets the legacy inline encoding.

use serde::Serialize;
use uuid::Uuid;

use crate::environment::{
    BodyEncoding, Environment, Header, ResponseBody, Route, RouteResponse, INLINE_BODY_TYPE,
    JSON_MIME_TYPE,
};
use crate::error::CoreError;

/// Endpoint given to a movies route created from scratch.
pub const MOVIES_ENDPOINT: &str = "/api/movies";

/// Endpoint suffixes recognised as the movies route.
const MOVIES_ENDPOINT_SUFFIXES: [&str; 2] = ["/api/movies", "/movies"];

/// Result of a single upsert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpsertOutcome {
    /// `uuid` of the route that received the payload.
    pub route_uuid: String,
    /// `true` when no matching route existed and one was appended.
    pub created: bool,
    /// Encoding the payload was written in.
    pub encoding: BodyEncoding,
}

/// Whether `endpoint` ends with one of the movies suffixes.
///
/// Any route sharing the suffix matches, e.g. `/legacy/movies`.
pub fn is_movies_endpoint(endpoint: &str) -> bool {
    MOVIES_ENDPOINT_SUFFIXES
        .iter()
        .any(|suffix| endpoint.ends_with(suffix))
}

/// Whether `route` is the `GET` movies route.
pub fn is_movies_route(route: &Route) -> bool {
    route.method.eq_ignore_ascii_case("get") && is_movies_endpoint(&route.endpoint)
}

/// Headers forced onto the movies response: JSON content type plus
/// permissive CORS.
pub fn movies_response_headers() -> Vec<Header> {
    vec![
        Header::new("Content-Type", "application/json; charset=utf-8"),
        Header::new("Access-Control-Allow-Origin", "*"),
        Header::new(
            "Access-Control-Allow-Methods",
            "GET,POST,PUT,PATCH,DELETE,HEAD,OPTIONS",
        ),
        Header::new(
            "Access-Control-Allow-Headers",
            "Content-Type, Origin, Accept, Authorization, Content-Length, X-Requested-With",
        ),
    ]
}

/// Write `payload` into the first response of the movies route.
///
/// The first matching route wins; later duplicates are left untouched. When
/// nothing matches a new route is appended, so repeated calls never grow the
/// route list past one movies route.
pub fn upsert_movies_route<T: Serialize + ?Sized>(
    env: &mut Environment,
    payload: &T,
) -> Result<UpsertOutcome, CoreError> {
    let serialized = serde_json::to_string(payload)
        .map_err(|e| CoreError::Validation(format!("payload is not serializable: {e}")))?;

    let (index, created) = match env.routes.iter().position(is_movies_route) {
        Some(index) => (index, false),
        None => {
            env.routes.push(new_movies_route());
            (env.routes.len() - 1, true)
        }
    };

    let route = &mut env.routes[index];
    if route.responses.is_empty() {
        route.responses.push(RouteResponse::placeholder());
    }

    let response = &mut route.responses[0];
    response.status_code = 200;
    response.headers = movies_response_headers();

    let encoding = match response.body {
        ResponseBody::Structured { .. } => BodyEncoding::Structured,
        ResponseBody::Legacy { .. } | ResponseBody::Empty => BodyEncoding::Legacy,
    };
    response.body = match encoding {
        BodyEncoding::Structured => ResponseBody::Structured {
            mime_type: JSON_MIME_TYPE.to_string(),
            data: serialized,
        },
        BodyEncoding::Legacy => ResponseBody::Legacy {
            body_type: INLINE_BODY_TYPE.to_string(),
            body: serialized,
        },
    };

    Ok(UpsertOutcome {
        route_uuid: route.uuid.clone(),
        created,
        encoding,
    })
}

/// Append an operator-supplied route to the end of `routes`.
///
/// A missing or blank `uuid` is replaced with a fresh one.
pub fn add_route(env: &mut Environment, route: serde_json::Value) -> Result<&Route, CoreError> {
    let mut route: Route = serde_json::from_value(route)
        .map_err(|e| CoreError::Validation(format!("Invalid route definition: {e}")))?;

    if route.uuid.trim().is_empty() {
        route.uuid = Uuid::new_v4().to_string();
    }

    env.routes.push(route);
    let last = env.routes.len() - 1;
    Ok(&env.routes[last])
}

fn new_movies_route() -> Route {
    Route {
        uuid: Uuid::now_v7().to_string(),
        method: "get".to_string(),
        endpoint: MOVIES_ENDPOINT.to_string(),
        responses: vec![RouteResponse::placeholder()],
        extra: serde_json::Map::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
