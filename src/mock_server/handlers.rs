//! HTTP request handlers for the mock server.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use tokio::sync::RwLock;

use super::state::{Collection, MockState};
use crate::JsonObject;

type SharedState = Arc<RwLock<MockState>>;

const DEFAULT_PAGE_SIZE: usize = 30;

fn fault(status: StatusCode, code: u32, message: String) -> Response {
    (status, Json(json!({"code": code, "message": message}))).into_response()
}

fn not_found(collection: &str, id: &str) -> Response {
    fault(
        StatusCode::NOT_FOUND,
        404,
        format!("{collection} {id} does not exist"),
    )
}

/// Check the bearer token and resolve the collection segment.
fn admit(state: &MockState, headers: &HeaderMap, segment: &str) -> Result<Collection, Response> {
    if let Some(required) = &state.required_token {
        let presented = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));
        if presented != Some(required.as_str()) {
            return Err(fault(
                StatusCode::UNAUTHORIZED,
                124,
                "Invalid access token.".to_string(),
            ));
        }
    }

    Collection::from_segment(segment).ok_or_else(|| {
        fault(
            StatusCode::NOT_FOUND,
            404,
            format!("Unknown resource: {segment}"),
        )
    })
}

/// GET /phone/{collection}
pub async fn list_records(
    State(state): State<SharedState>,
    Path(segment): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    let collection = match admit(&state, &headers, &segment) {
        Ok(c) => c,
        Err(response) => return response,
    };

    let page_size = query
        .get("page_size")
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PAGE_SIZE);
    let token = query
        .get("next_page_token")
        .map(String::as_str)
        .filter(|t| !t.is_empty());

    let (items, next) = state.page(collection, page_size, token);

    let mut body = JsonObject::new();
    body.insert(collection.items_key().to_string(), json!(items));
    body.insert("next_page_token".to_string(), json!(next.unwrap_or_default()));
    body.insert("page_size".to_string(), json!(page_size));
    body.insert("total_records".to_string(), json!(state.count(collection)));

    (StatusCode::OK, Json(body)).into_response()
}

/// GET /phone/{collection}/{id}
pub async fn get_record(
    State(state): State<SharedState>,
    Path((segment, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    let collection = match admit(&state, &headers, &segment) {
        Ok(c) => c,
        Err(response) => return response,
    };

    match state.get(collection, &id) {
        Some(record) => (StatusCode::OK, Json(record.clone())).into_response(),
        None => not_found(&segment, &id),
    }
}

/// POST /phone/{collection}
pub async fn create_record(
    State(state): State<SharedState>,
    Path(segment): Path<String>,
    headers: HeaderMap,
    Json(record): Json<JsonObject>,
) -> Response {
    let mut state = state.write().await;
    let collection = match admit(&state, &headers, &segment) {
        Ok(c) => c,
        Err(response) => return response,
    };

    let id = state.insert(collection, record);
    let created = state.get(collection, &id).cloned().unwrap_or_default();
    (StatusCode::CREATED, Json(created)).into_response()
}

/// PATCH /phone/{collection}/{id}
pub async fn update_record(
    State(state): State<SharedState>,
    Path((segment, id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(patch): Json<JsonObject>,
) -> Response {
    let mut state = state.write().await;
    let collection = match admit(&state, &headers, &segment) {
        Ok(c) => c,
        Err(response) => return response,
    };

    if state.update(collection, &id, patch) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found(&segment, &id)
    }
}

/// DELETE /phone/{collection}/{id}
pub async fn delete_record(
    State(state): State<SharedState>,
    Path((segment, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    let mut state = state.write().await;
    let collection = match admit(&state, &headers, &segment) {
        Ok(c) => c,
        Err(response) => return response,
    };

    if state.remove(collection, &id) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found(&segment, &id)
    }
}

/// GET /phone/{collection}/{id}/settings
pub async fn get_settings(
    State(state): State<SharedState>,
    Path((segment, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    let collection = match admit(&state, &headers, &segment) {
        Ok(c) => c,
        Err(response) => return response,
    };

    if state.get(collection, &id).is_none() {
        return not_found(&segment, &id);
    }

    let settings = state
        .settings
        .get(&(collection, id))
        .cloned()
        .unwrap_or_default();
    (StatusCode::OK, Json(Value::Object(settings))).into_response()
}

/// GET /phone/{collection}/{id}/settings/{setting_type}
pub async fn get_setting(
    State(state): State<SharedState>,
    Path((segment, id, setting_type)): Path<(String, String, String)>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    let collection = match admit(&state, &headers, &segment) {
        Ok(c) => c,
        Err(response) => return response,
    };

    let value = state
        .settings
        .get(&(collection, id.clone()))
        .and_then(|settings| settings.get(&setting_type));

    match value {
        Some(value) => {
            let mut body = JsonObject::new();
            body.insert(setting_type, value.clone());
            (StatusCode::OK, Json(body)).into_response()
        }
        None => not_found(&format!("{segment} setting {setting_type} for"), &id),
    }
}

/// POST /phone/devices/{id}/reboot
pub async fn reboot_device(
    State(state): State<SharedState>,
    Path((segment, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    let mut state = state.write().await;
    let collection = match admit(&state, &headers, &segment) {
        Ok(c) => c,
        Err(response) => return response,
    };

    if collection != Collection::Devices {
        return fault(
            StatusCode::BAD_REQUEST,
            300,
            format!("{segment} cannot be rebooted"),
        );
    }
    if state.get(collection, &id).is_none() {
        return not_found(&segment, &id);
    }

    state.reboots.push(id);
    StatusCode::ACCEPTED.into_response()
}
