use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;
use crate::models::{CreateJobRequest, HealthResponse, SearchJobsRequest, SearchJobsResponse};
use super::{store_error, validation_error, AppState};

/// Configure all job-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/jobs", web::get().to(list_jobs))
        .route("/jobs", web::post().to(create_job))
        .route("/jobs/search", web::post().to(search_jobs))
        .route("/jobs/{id}", web::get().to(get_job));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List every posting in board order
///
/// GET /api/v1/jobs
async fn list_jobs(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.store.list_jobs().await)
}

/// GET /api/v1/jobs/{id}
async fn get_job(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match state.store.get_job(path.into_inner()).await {
        Ok(job) => HttpResponse::Ok().json(job),
        Err(e) => store_error(e),
    }
}

/// Post a new job
///
/// POST /api/v1/jobs
///
/// Request body:
/// ```json
/// {
///   "title": "Harvesting Corn",
///   "workType": "harvesting",
///   "location": { "lat": 28.6139, "lng": 77.2090, "address": "New Delhi" },
///   "dateTime": "2025-08-20T08:00:00",
///   "payment": { "amount": 1200, "type": "daily" },
///   "notes": "string",
///   "posterLocation": { "lat": 28.6139, "lng": 77.2090 }
/// }
/// ```
async fn create_job(
    state: web::Data<AppState>,
    req: web::Json<CreateJobRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_job request: {:?}", errors);
        return validation_error(errors.to_string());
    }

    match state.store.create_job(req.into_inner()).await {
        Ok(job) => HttpResponse::Created().json(job),
        Err(e) => {
            tracing::info!("Rejected job posting: {}", e);
            store_error(e)
        }
    }
}

/// Search the board
///
/// POST /api/v1/jobs/search
///
/// Request body:
/// ```json
/// {
///   "filter": {
///     "search": "corn",
///     "workType": "harvesting",
///     "maxDistance": 50,
///     "minPayment": "100",
///     "maxPayment": ""
///   },
///   "workerLocation": { "lat": 28.6139, "lng": 77.2090 }
/// }
/// ```
async fn search_jobs(
    state: web::Data<AppState>,
    req: web::Json<SearchJobsRequest>,
) -> impl Responder {
    let SearchJobsRequest { filter, worker_location } = req.into_inner();

    if let Some(location) = worker_location {
        if !location.is_valid() {
            return validation_error(format!(
                "worker location out of range: {}, {}",
                location.lat, location.lng
            ));
        }
    }

    let jobs = state.store.list_jobs().await;
    let result = state.matcher.find_jobs(&jobs, worker_location, &filter);

    let response = SearchJobsResponse {
        matched: result.jobs.len(),
        total_jobs: result.total_jobs,
        jobs: result.jobs,
    };

    tracing::info!(
        "Returning {} of {} jobs (worker location known: {})",
        response.matched,
        response.total_jobs,
        worker_location.is_some()
    );

    HttpResponse::Ok().json(response)
}
