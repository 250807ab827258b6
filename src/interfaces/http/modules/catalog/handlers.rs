//! Movie and user HTTP handlers
//!
//! Thin CRUD around the catalogue entities the booking engine leans on.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::movie::Movie;
use crate::domain::user::User;
use crate::domain::{DomainError, RepositoryProvider};
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};

use super::dto::*;

/// Application state for catalogue handlers.
#[derive(Clone)]
pub struct CatalogAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    post,
    path = "/api/v1/movies",
    tag = "Catalog",
    request_body = CreateMovieRequest,
    responses(
        (status = 200, description = "Movie added", body = ApiResponse<MovieDto>),
        (status = 422, description = "Invalid request body")
    )
)]
pub async fn create_movie(
    State(state): State<CatalogAppState>,
    ValidatedJson(request): ValidatedJson<CreateMovieRequest>,
) -> Result<Json<ApiResponse<MovieDto>>, (StatusCode, Json<ApiResponse<MovieDto>>)> {
    let mut movie = Movie::new(request.title, request.duration_minutes);
    movie.description = request.description;
    movie.genre = request.genre;
    movie.release_date = request.release_date;

    let saved = state
        .repos
        .movies()
        .save(movie)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(saved.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/movies",
    tag = "Catalog",
    responses(
        (status = 200, description = "All active movies", body = ApiResponse<Vec<MovieDto>>)
    )
)]
pub async fn list_movies(
    State(state): State<CatalogAppState>,
) -> Result<Json<ApiResponse<Vec<MovieDto>>>, (StatusCode, Json<ApiResponse<Vec<MovieDto>>>)> {
    let movies = state
        .repos
        .movies()
        .find_all_active()
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(
        movies.into_iter().map(MovieDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/movies/{movie_id}",
    tag = "Catalog",
    params(("movie_id" = i64, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie details", body = ApiResponse<MovieDto>),
        (status = 404, description = "Movie not found")
    )
)]
pub async fn get_movie(
    State(state): State<CatalogAppState>,
    Path(movie_id): Path<i64>,
) -> Result<Json<ApiResponse<MovieDto>>, (StatusCode, Json<ApiResponse<MovieDto>>)> {
    let movie = state
        .repos
        .movies()
        .find_by_id(movie_id)
        .await
        .map_err(domain_error)?
        .ok_or_else(|| {
            domain_error(DomainError::NotFound {
                entity: "Movie",
                field: "id",
                value: movie_id.to_string(),
            })
        })?;

    Ok(Json(ApiResponse::success(movie.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Catalog",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User registered", body = ApiResponse<UserDto>),
        (status = 409, description = "Email already registered"),
        (status = 422, description = "Invalid request body")
    )
)]
pub async fn create_user(
    State(state): State<CatalogAppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<Json<ApiResponse<UserDto>>, (StatusCode, Json<ApiResponse<UserDto>>)> {
    if state
        .repos
        .users()
        .find_by_email(&request.email)
        .await
        .map_err(domain_error)?
        .is_some()
    {
        return Err(domain_error(DomainError::Conflict(format!(
            "Email {} is already registered",
            request.email
        ))));
    }

    let mut user = User::new(request.name, request.email);
    user.phone_number = request.phone_number;

    let saved = state.repos.users().save(user).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(saved.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}",
    tag = "Catalog",
    params(("user_id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserDto>),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<CatalogAppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<ApiResponse<UserDto>>, (StatusCode, Json<ApiResponse<UserDto>>)> {
    let user = state
        .repos
        .users()
        .find_by_id(user_id)
        .await
        .map_err(domain_error)?
        .ok_or_else(|| {
            domain_error(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: user_id.to_string(),
            })
        })?;

    Ok(Json(ApiResponse::success(user.into())))
}
