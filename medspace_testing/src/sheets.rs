use std::{
    net::IpAddr,
    sync::{Arc, Mutex},
};

use anyhow::Context;
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::info;

const ACCESS_TOKEN: &str = "test-access-token";

pub async fn start_server(host: IpAddr, port: u16) -> anyhow::Result<()> {
    info!("Starting sheets testing server on {host}:{port}");
    info!("Token endpoint: http://{host}:{port}/token");
    info!("Api base: http://{host}:{port}/");
    info!("Appended rows are logged and served at http://{host}:{port}/appended");

    let router = Router::new()
        .route("/token", routing::post(token))
        .route(
            "/v4/spreadsheets/:spreadsheet_id/values/:range",
            routing::post(append),
        )
        .route("/appended", routing::get(appended))
        .with_state(Arc::new(SheetsState::default()));

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router)
        .await
        .context("Failed to start HTTP server")
}

#[derive(Debug, Default)]
struct SheetsState {
    rows: Mutex<Vec<AppendedRow>>,
}

#[derive(Debug, Clone, Serialize)]
struct AppendedRow {
    spreadsheet_id: String,
    range: String,
    values: Vec<Vec<String>>,
}

#[derive(Deserialize)]
struct TokenRequest {
    grant_type: String,
}

async fn token(Form(request): Form<TokenRequest>) -> Response {
    if request.grant_type != "urn:ietf:params:oauth:grant-type:jwt-bearer" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "unsupported_grant_type" })),
        )
            .into_response();
    }

    Json(json!({
        "access_token": ACCESS_TOKEN,
        "expires_in": 3599,
        "token_type": "Bearer",
    }))
    .into_response()
}

#[derive(Deserialize)]
struct AppendQuery {
    #[serde(rename = "valueInputOption")]
    value_input_option: String,
}

#[derive(Deserialize)]
struct AppendRequest {
    values: Vec<Vec<String>>,
}

async fn append(
    state: State<Arc<SheetsState>>,
    Path((spreadsheet_id, range)): Path<(String, String)>,
    Query(query): Query<AppendQuery>,
    headers: HeaderMap,
    Json(request): Json<AppendRequest>,
) -> Response {
    let expected = format!("Bearer {ACCESS_TOKEN}");
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        == Some(expected.as_str());
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "status": "UNAUTHENTICATED" } })),
        )
            .into_response();
    }

    // the real endpoint is `.../values/<range>:append`
    let Some(range) = range.strip_suffix(":append").map(ToOwned::to_owned) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    if query.value_input_option != "RAW" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": { "status": "INVALID_ARGUMENT" } })),
        )
            .into_response();
    }

    info!("Appending to {spreadsheet_id} {range}: {:?}", request.values);

    let row = AppendedRow {
        spreadsheet_id: spreadsheet_id.clone(),
        range: range.clone(),
        values: request.values,
    };
    state.rows.lock().unwrap().push(row);

    Json(json!({
        "spreadsheetId": spreadsheet_id,
        "updates": { "updatedRange": range, "updatedRows": 1 },
    }))
    .into_response()
}

async fn appended(state: State<Arc<SheetsState>>) -> Json<Vec<AppendedRow>> {
    Json(state.rows.lock().unwrap().clone())
}
