//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{BookingService, ScreenService, SeatService, ShowService};
use crate::domain::RepositoryProvider;
use crate::notifications::SharedEventBus;

use super::common::ApiResponse;
use super::modules::metrics::{http_metrics_middleware, MetricsState};
use super::modules::{bookings, catalog, health, metrics, screens, seats, shows};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Screens
        screens::handlers::create_screen,
        screens::handlers::list_screens,
        screens::handlers::get_screen,
        // Seats
        seats::handlers::get_screen_seats,
        seats::handlers::block_seats,
        seats::handlers::unblock_seats,
        // Shows
        shows::handlers::create_show,
        shows::handlers::update_show,
        shows::handlers::delete_show,
        shows::handlers::list_shows,
        shows::handlers::get_show,
        shows::handlers::list_shows_for_movie,
        // Bookings
        bookings::handlers::create_booking,
        bookings::handlers::cancel_booking,
        bookings::handlers::get_booking,
        bookings::handlers::get_booking_by_reference,
        bookings::handlers::list_user_bookings,
        // Catalog
        catalog::handlers::create_movie,
        catalog::handlers::list_movies,
        catalog::handlers::get_movie,
        catalog::handlers::create_user,
        catalog::handlers::get_user,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            // Health
            health::handlers::HealthResponse,
            health::handlers::ComponentHealth,
            // Screens
            screens::CreateScreenRequest,
            screens::ScreenDto,
            // Seats
            seats::SeatDto,
            seats::BlockSeatsRequest,
            seats::UnblockSeatsRequest,
            // Shows
            shows::CreateShowRequest,
            shows::UpdateShowRequest,
            shows::ShowDto,
            // Bookings
            bookings::CreateBookingRequest,
            bookings::CancelBookingRequest,
            bookings::BookingDto,
            bookings::BookingDetailsDto,
            // Catalog
            catalog::CreateMovieRequest,
            catalog::MovieDto,
            catalog::CreateUserRequest,
            catalog::UserDto,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Screens", description = "Screen management and seat grid provisioning"),
        (name = "Seats", description = "Seat map queries, holds and releases"),
        (name = "Shows", description = "Show scheduling with overlap validation"),
        (name = "Bookings", description = "Booking confirmation and cancellation"),
        (name = "Catalog", description = "Movie catalogue and user registration"),
    ),
    info(
        title = "Cinema Booking Service API",
        version = "1.0.0",
        description = "REST API for seat inventory, holds and show scheduling",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
#[allow(clippy::too_many_arguments)]
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
    event_bus: SharedEventBus,
    seat_service: Arc<SeatService>,
    booking_service: Arc<BookingService>,
    show_service: Arc<ShowService>,
    screen_service: Arc<ScreenService>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let screen_routes = Router::new()
        .route(
            "/api/v1/screens",
            post(screens::handlers::create_screen).get(screens::handlers::list_screens),
        )
        .route("/api/v1/screens/{screen_id}", get(screens::handlers::get_screen))
        .with_state(screens::ScreenAppState { screen_service });

    let seat_routes = Router::new()
        .route(
            "/api/v1/screens/{screen_id}/seats",
            get(seats::handlers::get_screen_seats),
        )
        .route(
            "/api/v1/screens/{screen_id}/seats/block",
            post(seats::handlers::block_seats),
        )
        .route(
            "/api/v1/screens/{screen_id}/seats/unblock",
            post(seats::handlers::unblock_seats),
        )
        .with_state(seats::SeatAppState { seat_service });

    let show_routes = Router::new()
        .route(
            "/api/v1/shows",
            post(shows::handlers::create_show).get(shows::handlers::list_shows),
        )
        .route(
            "/api/v1/shows/{show_id}",
            put(shows::handlers::update_show)
                .get(shows::handlers::get_show)
                .delete(shows::handlers::delete_show),
        )
        .route(
            "/api/v1/movies/{movie_id}/shows",
            get(shows::handlers::list_shows_for_movie),
        )
        .with_state(shows::ShowAppState { show_service });

    let booking_routes = Router::new()
        .route("/api/v1/bookings", post(bookings::handlers::create_booking))
        .route(
            "/api/v1/bookings/{booking_id}",
            get(bookings::handlers::get_booking),
        )
        .route(
            "/api/v1/bookings/{booking_id}/cancel",
            post(bookings::handlers::cancel_booking),
        )
        .route(
            "/api/v1/bookings/reference/{reference}",
            get(bookings::handlers::get_booking_by_reference),
        )
        .route(
            "/api/v1/users/{user_id}/bookings",
            get(bookings::handlers::list_user_bookings),
        )
        .with_state(bookings::BookingAppState { booking_service });

    let catalog_routes = Router::new()
        .route(
            "/api/v1/movies",
            post(catalog::handlers::create_movie).get(catalog::handlers::list_movies),
        )
        .route("/api/v1/movies/{movie_id}", get(catalog::handlers::get_movie))
        .route("/api/v1/users", post(catalog::handlers::create_user))
        .route("/api/v1/users/{user_id}", get(catalog::handlers::get_user))
        .with_state(catalog::CatalogAppState { repos });

    let health_routes = Router::new()
        .route("/health", get(health::handlers::health_check))
        .with_state(health::HealthState {
            db,
            event_bus,
            started_at: Arc::new(Instant::now()),
        });

    let metrics_routes = Router::new()
        .route("/metrics", get(metrics::handlers::prometheus_metrics))
        .with_state(MetricsState {
            handle: metrics_handle,
        });

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(screen_routes)
        .merge(seat_routes)
        .merge(show_routes)
        .merge(booking_routes)
        .merge(catalog_routes)
        .merge(health_routes)
        .merge(metrics_routes)
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
