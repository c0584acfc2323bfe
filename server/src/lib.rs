use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use termdoc_core::{
    highlight_bands, process_documents, Band, Document, Matrix, MatrixError, MatrixKind, ProcessingOptions,
    ResultBundle, StopwordSet, TermOrder,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    pub documents: Vec<Document>,
    #[serde(default)]
    pub options: ProcessingOptions,
    #[serde(default)]
    pub order: TermOrder,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Serialize)]
pub struct HighlightResponse {
    pub kind: MatrixKind,
    pub vocabulary: Vec<String>,
    pub bands: Matrix<Band>,
}

#[derive(Clone)]
pub struct AppState {
    pub stopwords: Arc<StopwordSet>,
}

pub struct ApiError(MatrixError);

impl From<MatrixError> for ApiError {
    fn from(e: MatrixError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            MatrixError::EmptyInput => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::BAD_REQUEST,
        };
        (status, Json(ErrorBody { error: self.0.to_string() })).into_response()
    }
}

pub fn build_app(stopwords: StopwordSet) -> Router {
    let app_state = AppState { stopwords: Arc::new(stopwords) };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/process", post(process_handler))
        .route("/export/:kind", post(export_handler))
        .route("/highlight/:kind", post(highlight_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn run(state: &AppState, req: &ProcessRequest) -> Result<ResultBundle, ApiError> {
    let bundle = process_documents(&req.documents, &req.options, &state.stopwords)?;
    Ok(bundle.sorted(req.order))
}

pub async fn process_handler(
    State(state): State<AppState>,
    Json(req): Json<ProcessRequest>,
) -> Result<Json<ResultBundle>, ApiError> {
    let bundle = run(&state, &req)?;
    tracing::info!(num_docs = bundle.num_docs(), num_terms = bundle.num_terms(), "processed documents");
    Ok(Json(bundle))
}

pub async fn export_handler(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(req): Json<ProcessRequest>,
) -> Result<Response, ApiError> {
    let kind: MatrixKind = kind.parse()?;
    let bundle = run(&state, &req)?;
    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", kind.file_name())),
    ];
    Ok((headers, bundle.to_csv(kind)).into_response())
}

pub async fn highlight_handler(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(req): Json<ProcessRequest>,
) -> Result<Json<HighlightResponse>, ApiError> {
    let kind: MatrixKind = kind.parse()?;
    let bundle = run(&state, &req)?;
    let bands = match kind {
        MatrixKind::Count => highlight_bands(bundle.counts()),
        MatrixKind::Tfidf => highlight_bands(bundle.tfidf()),
        // incidence cells are already binary
        MatrixKind::Incidence => bundle.incidence().map(|_| Band::None),
    };
    Ok(Json(HighlightResponse { kind, vocabulary: bundle.vocabulary().to_vec(), bands }))
}
