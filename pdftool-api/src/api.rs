use axum::{
    extract::{Json, Multipart, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use pdftool::forms::field_mappings;
use pdftool::{FormFieldService, FormFields, PdfToolError, ResourceLoader};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

/// Query parameters for the form field endpoint
#[derive(Debug, Deserialize)]
pub struct FormFieldsQuery {
    /// Source identifier resolved by the configured resource loader
    pub source: String,
}

/// Standard error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message describing what went wrong
    pub error: String,
}

/// One row of the name mapping listing
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MappingEntry {
    pub form_field_name: String,
    pub api_name: String,
}

/// Application-specific error types for the API.
///
/// Every variant is reported as `500 Internal Server Error`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Source resolution and PDF processing failures
    #[error(transparent)]
    Extraction(#[from] PdfToolError),
    /// Malformed uploads
    #[error("{0}")]
    Upload(String),
    /// The blocking extraction task did not complete
    #[error("Extraction task failed: {0}")]
    Task(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_response = ErrorResponse {
            error: self.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(error_response)).into_response()
    }
}

/// Shared handler state
pub struct AppState<L> {
    pub service: FormFieldService<L>,
}

/// Build the application router around a form field service
pub fn app<L: ResourceLoader + 'static>(service: FormFieldService<L>) -> Router {
    let state = Arc::new(AppState { service });

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/form-fields", get(form_fields::<L>))
        .route("/api/form-fields/upload", post(upload_form_fields::<L>))
        .route("/api/mappings", get(list_mappings))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint for monitoring and load balancing
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "pdftool API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Extract the form fields of a document addressed by source identifier
pub async fn form_fields<L: ResourceLoader + 'static>(
    State(state): State<Arc<AppState<L>>>,
    Query(query): Query<FormFieldsQuery>,
) -> Result<Json<FormFields>, AppError> {
    let fields = tokio::task::spawn_blocking(move || state.service.form_fields(&query.source))
        .await
        .map_err(|e| {
            error!("Extraction task failed: {}", e);
            AppError::Task(e.to_string())
        })??;

    Ok(Json(fields))
}

/// Extract the form fields of an uploaded PDF file
pub async fn upload_form_fields<L: ResourceLoader + 'static>(
    State(state): State<Arc<AppState<L>>>,
    mut multipart: Multipart,
) -> Result<Json<FormFields>, AppError> {
    let mut pdf_data = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(format!("Failed to read multipart field: {e}")))?
    {
        if field.name() == Some("file") {
            pdf_data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Upload(format!("Failed to read file data: {e}")))?,
            );
            break;
        }
    }

    let pdf_bytes = pdf_data.ok_or_else(|| AppError::Upload("No file provided in upload".to_string()))?;

    let fields =
        tokio::task::spawn_blocking(move || state.service.form_fields_from_bytes(pdf_bytes.to_vec()))
            .await
            .map_err(|e| AppError::Task(e.to_string()))??;

    Ok(Json(fields))
}

/// List the static field name mapping table
pub async fn list_mappings() -> Json<Vec<MappingEntry>> {
    Json(
        field_mappings()
            .iter()
            .map(|mapping| MappingEntry {
                form_field_name: mapping.form_field_name.to_string(),
                api_name: mapping.api_name.to_string(),
            })
            .collect(),
    )
}
