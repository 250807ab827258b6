//! Screen HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::ScreenService;
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};

use super::dto::*;

/// Application state for screen handlers.
#[derive(Clone)]
pub struct ScreenAppState {
    pub screen_service: Arc<ScreenService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/screens",
    tag = "Screens",
    request_body = CreateScreenRequest,
    responses(
        (status = 200, description = "Screen created, seat grid provisioned", body = ApiResponse<ScreenDto>),
        (status = 422, description = "Invalid request body")
    )
)]
pub async fn create_screen(
    State(state): State<ScreenAppState>,
    ValidatedJson(request): ValidatedJson<CreateScreenRequest>,
) -> Result<Json<ApiResponse<ScreenDto>>, (StatusCode, Json<ApiResponse<ScreenDto>>)> {
    let screen = state
        .screen_service
        .create_screen(request.name, request.total_rows, request.seats_per_row)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(screen.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/screens",
    tag = "Screens",
    responses(
        (status = 200, description = "All active screens", body = ApiResponse<Vec<ScreenDto>>)
    )
)]
pub async fn list_screens(
    State(state): State<ScreenAppState>,
) -> Result<Json<ApiResponse<Vec<ScreenDto>>>, (StatusCode, Json<ApiResponse<Vec<ScreenDto>>>)> {
    let screens = state
        .screen_service
        .list_screens()
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(
        screens.into_iter().map(ScreenDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/screens/{screen_id}",
    tag = "Screens",
    params(("screen_id" = i64, Path, description = "Screen ID")),
    responses(
        (status = 200, description = "Screen details", body = ApiResponse<ScreenDto>),
        (status = 404, description = "Screen not found")
    )
)]
pub async fn get_screen(
    State(state): State<ScreenAppState>,
    Path(screen_id): Path<i64>,
) -> Result<Json<ApiResponse<ScreenDto>>, (StatusCode, Json<ApiResponse<ScreenDto>>)> {
    let screen = state
        .screen_service
        .get_screen(screen_id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(screen.into())))
}
