//! Show HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::ShowService;
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};

use super::dto::*;

/// Application state for show handlers.
#[derive(Clone)]
pub struct ShowAppState {
    pub show_service: Arc<ShowService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/shows",
    tag = "Shows",
    request_body = CreateShowRequest,
    responses(
        (status = 200, description = "Show scheduled", body = ApiResponse<ShowDto>),
        (status = 404, description = "Movie or screen not found"),
        (status = 409, description = "Schedule conflict with another show"),
        (status = 422, description = "Invalid request body")
    )
)]
pub async fn create_show(
    State(state): State<ShowAppState>,
    ValidatedJson(request): ValidatedJson<CreateShowRequest>,
) -> Result<Json<ApiResponse<ShowDto>>, (StatusCode, Json<ApiResponse<ShowDto>>)> {
    let show = state
        .show_service
        .create_show(
            request.movie_id,
            request.screen_id,
            request.date,
            request.start_time,
            request.ticket_price,
        )
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(show.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/shows/{show_id}",
    tag = "Shows",
    params(("show_id" = i64, Path, description = "Show ID")),
    request_body = UpdateShowRequest,
    responses(
        (status = 200, description = "Show rescheduled", body = ApiResponse<ShowDto>),
        (status = 404, description = "Show not found"),
        (status = 409, description = "Schedule conflict with another show")
    )
)]
pub async fn update_show(
    State(state): State<ShowAppState>,
    Path(show_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateShowRequest>,
) -> Result<Json<ApiResponse<ShowDto>>, (StatusCode, Json<ApiResponse<ShowDto>>)> {
    let show = state
        .show_service
        .update_show(show_id, request.date, request.start_time, request.ticket_price)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(show.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/shows/{show_id}",
    tag = "Shows",
    params(("show_id" = i64, Path, description = "Show ID")),
    responses(
        (status = 200, description = "Show deleted", body = ApiResponse<String>),
        (status = 404, description = "Show not found")
    )
)]
pub async fn delete_show(
    State(state): State<ShowAppState>,
    Path(show_id): Path<i64>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<String>>)> {
    state
        .show_service
        .delete_show(show_id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success("deleted".to_string())))
}

#[utoipa::path(
    get,
    path = "/api/v1/shows",
    tag = "Shows",
    responses(
        (status = 200, description = "All active shows", body = ApiResponse<Vec<ShowDto>>)
    )
)]
pub async fn list_shows(
    State(state): State<ShowAppState>,
) -> Result<Json<ApiResponse<Vec<ShowDto>>>, (StatusCode, Json<ApiResponse<Vec<ShowDto>>>)> {
    let shows = state.show_service.list_shows().await.map_err(domain_error)?;

    Ok(Json(ApiResponse::success(
        shows.into_iter().map(ShowDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/shows/{show_id}",
    tag = "Shows",
    params(("show_id" = i64, Path, description = "Show ID")),
    responses(
        (status = 200, description = "Show details", body = ApiResponse<ShowDto>),
        (status = 404, description = "Show not found")
    )
)]
pub async fn get_show(
    State(state): State<ShowAppState>,
    Path(show_id): Path<i64>,
) -> Result<Json<ApiResponse<ShowDto>>, (StatusCode, Json<ApiResponse<ShowDto>>)> {
    let show = state
        .show_service
        .get_show(show_id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(show.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/movies/{movie_id}/shows",
    tag = "Shows",
    params(("movie_id" = i64, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Active shows for the movie", body = ApiResponse<Vec<ShowDto>>),
        (status = 404, description = "Movie not found")
    )
)]
pub async fn list_shows_for_movie(
    State(state): State<ShowAppState>,
    Path(movie_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<ShowDto>>>, (StatusCode, Json<ApiResponse<Vec<ShowDto>>>)> {
    let shows = state
        .show_service
        .list_shows_for_movie(movie_id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(
        shows.into_iter().map(ShowDto::from).collect(),
    )))
}
