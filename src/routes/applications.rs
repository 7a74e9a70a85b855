use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;
use crate::models::{ApplyRequest, UpdateApplicationStatusRequest};
use super::{store_error, validation_error, AppState};

/// Configure all application-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/jobs/{id}/applications", web::post().to(apply_to_job))
        .route("/jobs/{id}/applications", web::get().to(list_applications))
        .route("/applications/{id}", web::patch().to(update_status));
}

/// Apply to a job
///
/// POST /api/v1/jobs/{id}/applications
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "phone": "+919876543210",
///   "email": "string",
///   "experience": "string",
///   "skills": "Harvesting, Irrigation",
///   "availability": "string",
///   "notes": "string"
/// }
/// ```
async fn apply_to_job(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<ApplyRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for application: {:?}", errors);
        return validation_error(errors.to_string());
    }

    match state.store.apply_to_job(path.into_inner(), req.into_inner()).await {
        Ok(application) => HttpResponse::Created().json(application),
        Err(e) => store_error(e),
    }
}

/// GET /api/v1/jobs/{id}/applications
async fn list_applications(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match state.store.list_applications(path.into_inner()).await {
        Ok(applications) => HttpResponse::Ok().json(applications),
        Err(e) => store_error(e),
    }
}

/// Accept or reject an application
///
/// PATCH /api/v1/applications/{id}
///
/// Request body:
/// ```json
/// { "status": "accepted|rejected" }
/// ```
async fn update_status(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<UpdateApplicationStatusRequest>,
) -> impl Responder {
    match state
        .store
        .update_application_status(path.into_inner(), req.status)
        .await
    {
        Ok(application) => HttpResponse::Ok().json(application),
        Err(e) => {
            tracing::warn!("Failed to update application: {}", e);
            store_error(e)
        }
    }
}
