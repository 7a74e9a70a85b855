use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use labour_hub::config::Settings;
use labour_hub::core::JobMatcher;
use labour_hub::routes::{self, AppState};
use labour_hub::services::JobStore;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting Labour Hub service...");

    let fallback = settings.matching.fallback_location;
    if !fallback.is_valid() {
        error!("Configured fallback location is out of range: {:?}", fallback);
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "matching.fallback_location out of range",
        ));
    }

    let store = if settings.store.seed_demo_jobs {
        JobStore::with_demo_jobs(fallback)
    } else {
        JobStore::new(fallback)
    };
    let store = Arc::new(store);

    info!("Job store initialized with {} jobs", store.job_count().await);

    let matcher = JobMatcher::new(settings.matching.default_max_distance_km);

    info!(
        "Matcher initialized (default max distance: {:?}km, fallback location: {:?})",
        matcher.default_max_distance_km(),
        fallback
    );

    let app_state = AppState { store, matcher };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .app_data(routes::path_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
