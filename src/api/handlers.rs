//! HTTP request handlers for the blog API

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    Json as JsonExtractor,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::core::error::Error;
use crate::core::types::{Blog, BlogDraft, BlogId, BlogPage};
use crate::service::SharedService;

/// Uniform response envelope for every endpoint.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Payload, when there is one
    pub data: Option<T>,
    /// Human-readable detail, mostly used for errors
    pub message: Option<String>,
}

/// Health check payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process serves requests
    pub status: String,
    /// Crate version
    pub version: String,
}

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Case-insensitive substring matched against username or text
    pub search_term: Option<String>,
    /// 1-based page number (default 1)
    pub page_number: Option<u32>,
    /// Records per page (default 10)
    pub page_size: Option<u32>,
}

type ErrorResponse = (StatusCode, Json<ApiResponse<()>>);

/// Map a service error to its transport status and envelope.
///
/// The status keys off the error kind alone; message text is never inspected.
/// Server-side failures are logged here and reported with a generic message.
fn error_response(err: Error) -> ErrorResponse {
    let status = match &err {
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        Error::InvalidArgument(_) | Error::Validation { .. } => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let message = if err.is_server_error() {
        error!(%err, "request failed");
        "An unexpected error occurred. Please try again later.".to_string()
    } else {
        debug!(%err, "rejected request");
        err.to_string()
    };

    (
        status,
        Json(ApiResponse {
            success: false,
            data: None,
            message: Some(message),
        }),
    )
}

/// `GET /blogs` - list blogs with optional search and pagination.
pub async fn list_blogs(
    State(service): State<SharedService>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<BlogPage>>, ErrorResponse> {
    let page = service
        .list(
            query.search_term.as_deref(),
            query.page_number,
            query.page_size,
        )
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse {
        success: true,
        data: Some(page),
        message: None,
    }))
}

/// `GET /blogs/{id}` - fetch a single blog.
pub async fn get_blog(
    State(service): State<SharedService>,
    Path(id): Path<BlogId>,
) -> Result<Json<ApiResponse<Blog>>, ErrorResponse> {
    let blog = service.get(id).await.map_err(error_response)?;

    Ok(Json(ApiResponse {
        success: true,
        data: Some(blog),
        message: None,
    }))
}

/// `POST /blogs` - create a blog; returns the stored record with its
/// assigned id.
pub async fn create_blog(
    State(service): State<SharedService>,
    JsonExtractor(draft): JsonExtractor<BlogDraft>,
) -> Result<(StatusCode, Json<ApiResponse<Blog>>), ErrorResponse> {
    let blog = service.create(draft).await.map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            success: true,
            data: Some(blog),
            message: Some("Blog created successfully".to_string()),
        }),
    ))
}

/// `PUT /blogs/{id}` - overwrite the mutable fields of an existing blog.
pub async fn update_blog(
    State(service): State<SharedService>,
    Path(id): Path<BlogId>,
    JsonExtractor(candidate): JsonExtractor<Blog>,
) -> Result<StatusCode, ErrorResponse> {
    service.update(id, candidate).await.map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /blogs/{id}` - remove a blog from the collection.
pub async fn delete_blog(
    State(service): State<SharedService>,
    Path(id): Path<BlogId>,
) -> Result<StatusCode, ErrorResponse> {
    service.delete(id).await.map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}

/// `GET /health` - liveness probe.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: crate::VERSION.to_string(),
    })
}
