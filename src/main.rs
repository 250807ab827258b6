//! Cinema booking service entry point
//!
//! REST server for seat holds, bookings and show scheduling.
//! Reads configuration from TOML file (~/.config/cinema-booking/config.toml).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use cinema_booking::application::{
    start_expiry_sweeper, BookingService, ScreenService, SeatService, ShowService,
};
use cinema_booking::config::AppConfig;
use cinema_booking::infrastructure::database::Migrator;
use cinema_booking::shared::shutdown::ShutdownCoordinator;
use cinema_booking::{
    create_api_router, create_event_bus, default_config_path, init_database, DatabaseConfig,
    SeaOrmRepositoryProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("CINEMA_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Cinema Booking Service...");

    // ── Prometheus metrics recorder (must be installed before any metrics calls) ──
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    info!("📊 Prometheus metrics recorder installed");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.connection_url(),
        max_connections: app_cfg.database.max_connections,
    };
    info!("Database: {}", db_config.url);

    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // Initialize repository provider
    let repos: Arc<dyn cinema_booking::domain::RepositoryProvider> =
        Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    // Initialize event bus for seat map notifications
    let event_bus = create_event_bus();
    info!("🔔 Event bus initialized");

    // Initialize services
    let seat_service = Arc::new(SeatService::new(
        repos.clone(),
        event_bus.clone(),
        app_cfg.booking.hold_ttl_secs,
        app_cfg.booking.max_seats_per_hold,
    ));
    let booking_service = Arc::new(BookingService::new(
        repos.clone(),
        event_bus.clone(),
        app_cfg.booking.max_seats_per_hold,
    ));
    let show_service = Arc::new(ShowService::new(repos.clone()));
    let screen_service = Arc::new(ScreenService::new(repos.clone()));

    // Initialize shutdown coordinator
    let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
    let shutdown_signal = shutdown.signal();

    // Start listening for shutdown signals (SIGTERM, SIGINT)
    shutdown.start_signal_listener();

    // Start the expiry sweeper
    start_expiry_sweeper(
        repos.clone(),
        event_bus.clone(),
        shutdown_signal.clone(),
        app_cfg.booking.sweep_interval_secs,
    );

    // Create REST API router
    let api_router = create_api_router(
        repos,
        db.clone(),
        event_bus,
        seat_service,
        booking_service,
        show_service,
        screen_service,
        prometheus_handle,
    );

    // Start REST API server with graceful shutdown
    let api_addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/swagger-ui/", api_addr);

    let api_shutdown = shutdown_signal.clone();
    let result = axum::serve(listener, api_router)
        .with_graceful_shutdown(async move {
            api_shutdown.wait().await;
            info!("🛑 REST API server received shutdown signal");
        })
        .await;

    if let Err(e) = result {
        error!("REST API server error: {}", e);
    }

    // Perform final cleanup
    info!("🧹 Performing final cleanup...");

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("✅ Database connection closed");
    }

    info!("👋 Cinema Booking Service shutdown complete");
    Ok(())
}
