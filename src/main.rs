//! Restaurant voice assistant backend
//!
//! Reads configuration from a TOML file (~/.config/restaurant-voice/config.toml,
//! or the path in `RESTAURANT_CONFIG`).

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::time::Instant;
use tracing::{error, info, warn};

use restaurant_voice::domain::RepositoryProvider;
use restaurant_voice::infrastructure::database::repositories::SeaOrmRepositoryProvider;
use restaurant_voice::infrastructure::database::seed::seed_demo_data;
use restaurant_voice::infrastructure::{InMemoryCache, OpenAiRealtimeClient};
use restaurant_voice::interfaces::http::modules::health::HealthState;
use restaurant_voice::interfaces::http::modules::metrics::MetricsState;
use restaurant_voice::shared::shutdown::ShutdownCoordinator;
use restaurant_voice::{
    create_router, default_config_path, init_database, run_migrations, ApiState, AppConfig,
    DatabaseConfig,
};

/// Days of table slots created when seeding demo data.
const DEMO_SEED_DAYS: u64 = 14;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("RESTAURANT_CONFIG")
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
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
                )
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            let mut cfg = AppConfig::default();
            cfg.apply_env_overrides();
            cfg
        }
    };

    info!("Starting {} voice assistant backend...", app_cfg.restaurant.name);

    // ── Prometheus metrics recorder (must be installed before any metrics calls) ──
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;
    info!("Prometheus metrics recorder installed");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.url.clone(),
    };
    info!("Database: {}", db_config.url);

    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    if let Err(e) = run_migrations(&db).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }

    if app_cfg.database.seed_demo_data {
        if let Err(e) = seed_demo_data(&db, Utc::now().date_naive(), DEMO_SEED_DAYS).await {
            warn!("Failed to seed demo data: {}", e);
        }
    }

    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    // ── Shutdown ───────────────────────────────────────────────
    let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
    let shutdown_signal = shutdown.signal();
    shutdown.start_signal_listener();

    // ── Cache & voice provider ─────────────────────────────────
    let cache = Arc::new(InMemoryCache::new());
    let sweeper = cache.clone().spawn_sweeper(
        Duration::from_secs(app_cfg.cache.sweep_interval_secs.max(1)),
        shutdown_signal.clone(),
    );

    let provider = Arc::new(OpenAiRealtimeClient::new(
        app_cfg.voice.base_url.clone(),
        Duration::from_secs(app_cfg.voice.request_timeout_secs),
    )?);

    let api_state = ApiState::from_config(&app_cfg, repos, cache, provider);
    if !api_state.voice.is_configured() {
        warn!("No usable OPENAI_API_KEY configured; /api/session will fail");
    }

    let router = create_router(
        api_state,
        HealthState {
            db: db.clone(),
            started_at: Arc::new(Instant::now()),
        },
        MetricsState {
            handle: prometheus_handle,
        },
        &app_cfg.server.public_dir,
    );

    // ── HTTP server with graceful shutdown ─────────────────────
    let addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on http://{}", addr);
    info!("OpenAPI document at http://{}/api-doc/openapi.json", addr);

    let server_shutdown = shutdown_signal.clone();
    let result = axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        server_shutdown.wait().await;
        info!("HTTP server received shutdown signal");
    })
    .await;

    if let Err(e) = &result {
        error!("HTTP server error: {}", e);
    }

    // ── Final cleanup ──────────────────────────────────────────
    shutdown_signal.trigger();
    shutdown
        .run_cleanup(|| async move {
            if let Err(e) = sweeper.await {
                warn!("Cache sweeper task failed: {}", e);
            }
            if let Err(e) = db.close().await {
                warn!("Error closing database connection: {}", e);
            } else {
                info!("Database connection closed");
            }
        })
        .await;

    info!("Shutdown complete");
    result.map_err(Into::into)
}
