//! User HTTP Routes
//!
//! List, search, fetch and create over the record repository.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;

use super::errors::{ApiError, ApiResult};
use super::response::{CreatedResponse, ListResponse, SingleResponse};
use crate::store::{FileStore, NewRecord, Record, RecordRepository};

// ==================
// Shared State
// ==================

/// User state shared across handlers
pub struct UsersState {
    pub repository: RecordRepository,
}

impl UsersState {
    pub fn new(store: FileStore) -> Self {
        Self {
            repository: RecordRepository::new(store),
        }
    }
}

// ==================
// Request Types
// ==================

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub city: Option<String>,
}

// ==================
// User Routes
// ==================

/// Create user routes.
///
/// `/users/search` is a static segment and always wins over `/users/:id`.
/// Each path also answers with a trailing slash. Unsupported methods on
/// known paths fall through to "Route not found".
pub fn user_routes(state: Arc<UsersState>) -> Router {
    let users = get(list_users_handler)
        .post(create_user_handler)
        .fallback(route_not_found);
    let search = get(search_users_handler).fallback(route_not_found);
    let user = get(get_user_handler).fallback(route_not_found);

    Router::new()
        .route("/users", users.clone())
        .route("/users/", users)
        .route("/users/search", search.clone())
        .route("/users/search/", search)
        .route("/users/:id", user.clone())
        .route("/users/:id/", user)
        .with_state(state)
}

/// Fallback for anything no route handles
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

// ==================
// Helper Functions
// ==================

/// Parse a path id the lenient way: leading whitespace, an optional sign,
/// then as many digits as are present. Anything without a leading digit is
/// `None` and matches no record.
pub fn parse_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let value: i64 = unsigned.get(..end)?.parse().ok()?;

    Some(if negative { -value } else { value })
}

fn display_id(id: Option<i64>) -> String {
    id.map_or_else(|| "NaN".to_string(), |id| id.to_string())
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

/// Decode the request body. Non-JSON or empty bodies decode to `Null` so
/// they fail field validation rather than parsing.
fn parse_json_body(headers: &HeaderMap, body: &Bytes) -> ApiResult<Value> {
    if !is_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidJson(e.to_string()))
}

fn required_text<'a>(payload: &'a Value, field: &str) -> Option<&'a str> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Validate a create payload. Any `id` in the body is ignored.
pub fn validate_new_record(payload: &Value) -> ApiResult<NewRecord> {
    match (required_text(payload, "name"), required_text(payload, "city")) {
        (Some(name), Some(city)) => Ok(NewRecord::new(name, city)),
        _ => Err(ApiError::BadRequest(
            "Name and city are required fields".to_string(),
        )),
    }
}

// ==================
// Handlers
// ==================

async fn list_users_handler(
    State(state): State<Arc<UsersState>>,
) -> ApiResult<Json<ListResponse<Record>>> {
    let users = state
        .repository
        .list()
        .await
        .map_err(ApiError::internal("Error reading users"))?;

    Ok(Json(ListResponse::new(users)))
}

async fn search_users_handler(
    State(state): State<Arc<UsersState>>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> ApiResult<Json<ListResponse<Record>>> {
    let city = query
        .ok()
        .and_then(|Query(q)| q.city)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::BadRequest("City query parameter is required".to_string()))?;

    let users = state
        .repository
        .search_by_city(&city)
        .await
        .map_err(ApiError::internal("Error searching users"))?;

    Ok(Json(ListResponse::new(users)))
}

async fn get_user_handler(
    State(state): State<Arc<UsersState>>,
    raw_id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<SingleResponse<Record>>> {
    let Path(raw_id) = raw_id.map_err(|e| ApiError::Rejected {
        status: e.status(),
        message: e.body_text(),
    })?;
    let id = parse_id(&raw_id);

    let user = state
        .repository
        .get(id)
        .await
        .map_err(ApiError::internal("Error fetching user"))?
        .ok_or_else(|| ApiError::NotFound(format!("User with ID {} not found", display_id(id))))?;

    Ok(Json(SingleResponse::new(user)))
}

async fn create_user_handler(
    State(state): State<Arc<UsersState>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<(StatusCode, Json<CreatedResponse<Record>>)> {
    let body = body.map_err(|e| ApiError::Rejected {
        status: e.status(),
        message: e.body_text(),
    })?;
    let payload = parse_json_body(&headers, &body)?;
    let new_record = validate_new_record(&payload)?;

    let user = state
        .repository
        .create(new_record)
        .await
        .map_err(ApiError::internal("Error adding user"))?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("User added successfully", user)),
    ))
}
