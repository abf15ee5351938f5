//! HTTP handlers mapping core results onto JSON responses

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use reparto_core::prelude::*;

use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct ShortestPathRequest {
    target: Value,
}

#[derive(Debug, Serialize)]
pub struct ShortestPathResponse {
    path: Vec<NodeId>,
    distance: f64,
    distance_km: f64,
    estimated_time_minutes: u32,
    average_speed_kmh: f64,
    fuel_cost: f64,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Parses the `target` field leniently: JSON numbers and numeric
/// strings are both accepted, and fractional values truncate toward
/// zero. Map front-ends send all three shapes.
fn coerce_target(value: &Value) -> Option<NodeId> {
    let numeric = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    let truncated = numeric.trunc();
    if !truncated.is_finite() || truncated < 0.0 || truncated > f64::from(NodeId::MAX) {
        return None;
    }
    Some(truncated as NodeId)
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::NodeNotFound(_) | Error::NoCandidates | Error::NoPathFound(_) => {
            StatusCode::NOT_FOUND
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `POST /shortest_path` — path from the nearest depot to the
/// requested target node, with derived trip metrics.
pub async fn shortest_path(
    State(state): State<SharedState>,
    Json(request): Json<ShortestPathRequest>,
) -> Response {
    let Some(target) = coerce_target(&request.target) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            format!("invalid target node: {}", request.target),
        );
    };

    let result = match resolve(&state.graph, target, &state.depots) {
        Ok(result) => result,
        Err(error) => {
            tracing::debug!("query for node {target} failed: {error}");
            return error_response(status_for(&error), error.to_string());
        }
    };

    let metrics = match derive_metrics(result.distance, &state.cost_model) {
        Ok(metrics) => metrics,
        Err(error) => return error_response(status_for(&error), error.to_string()),
    };

    let response = ShortestPathResponse {
        path: result.path.clone(),
        distance: result.distance,
        distance_km: metrics.distance_km,
        estimated_time_minutes: metrics.estimated_time_minutes,
        average_speed_kmh: metrics.average_speed_kmh,
        fuel_cost: metrics.fuel_cost,
    };

    // Keep the winning path for the next /graph render.
    state.cache.store(result);

    (StatusCode::OK, Json(response)).into_response()
}

/// `GET /graph` — the whole network as GeoJSON, with the most recently
/// computed path highlighted and depot nodes annotated.
pub async fn graph(State(state): State<SharedState>) -> Response {
    let snapshot = state.cache.retrieve();
    match graph_to_geojson_string(&state.graph, &state.rule, snapshot.as_deref()) {
        Ok(body) => (
            [(header::CONTENT_TYPE, "application/geo+json")],
            body,
        )
            .into_response(),
        Err(error) => error_response(StatusCode::INTERNAL_SERVER_ERROR, error.to_string()),
    }
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn home() -> &'static str {
    "reparto routing server. POST /shortest_path with {\"target\": <node id>} or GET /graph for the rendered network."
}
