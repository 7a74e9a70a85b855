use chrono::{NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{
    Applicant, Application, ApplicationStatus, ApplyRequest, Coordinates, CreateJobRequest, FarmOwner, Job,
    JobLocation, Payment, PaymentType, WorkType,
};

/// Errors that can occur with job board operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Job not found: {0}")]
    JobNotFound(Uuid),

    #[error("Application not found: {0}")]
    ApplicationNotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Application is already {current}, cannot mark it {requested}")]
    InvalidTransition {
        current: ApplicationStatus,
        requested: ApplicationStatus,
    },
}

/// In-memory job board
///
/// Jobs are kept in posting order and own their applications. All access
/// goes through a tokio RwLock so the store can be shared across workers.
pub struct JobStore {
    jobs: RwLock<Vec<Job>>,
    fallback_location: Coordinates,
}

impl JobStore {
    /// Create an empty store
    ///
    /// `fallback_location` is used for postings that arrive without usable
    /// coordinates when the poster's own location is unknown too.
    pub fn new(fallback_location: Coordinates) -> Self {
        Self {
            jobs: RwLock::new(Vec::new()),
            fallback_location,
        }
    }

    /// Create a store pre-populated with the demo postings
    pub fn with_demo_jobs(fallback_location: Coordinates) -> Self {
        Self {
            jobs: RwLock::new(demo_jobs()),
            fallback_location,
        }
    }

    pub async fn list_jobs(&self) -> Vec<Job> {
        self.jobs.read().await.clone()
    }

    pub async fn job_count(&self) -> usize {
        self.jobs.read().await.len()
    }

    pub async fn get_job(&self, job_id: Uuid) -> Result<Job, StoreError> {
        self.jobs
            .read()
            .await
            .iter()
            .find(|job| job.id == job_id)
            .cloned()
            .ok_or(StoreError::JobNotFound(job_id))
    }

    /// Post a new job
    ///
    /// Blank titles become "<Type> Work". Missing or zeroed coordinates are
    /// replaced by the poster's location, or the store's fallback location
    /// when that is unknown too. A posting with neither an address nor
    /// coordinates is rejected.
    pub async fn create_job(&self, request: CreateJobRequest) -> Result<Job, StoreError> {
        let location = self.resolve_location(&request.location, request.poster_location)?;

        let title = match request.title.trim() {
            "" => request.work_type.default_title(),
            title => title.to_string(),
        };

        let job = Job {
            id: Uuid::new_v4(),
            title,
            work_type: request.work_type,
            location,
            date_time: request.date_time,
            payment: Payment {
                amount: request.payment.amount,
                payment_type: request.payment.payment_type,
            },
            notes: request.notes,
            farm_owner: request.farm_owner.unwrap_or_default(),
            applicants: Vec::new(),
            created_at: Utc::now(),
        };

        self.jobs.write().await.push(job.clone());

        tracing::info!("Created job {} ({}) at {:?}", job.id, job.title, job.location.address);
        Ok(job)
    }

    fn resolve_location(
        &self,
        location: &JobLocation,
        poster_location: Option<Coordinates>,
    ) -> Result<JobLocation, StoreError> {
        let coordinates = location.coordinates().filter(|c| !c.is_unset());
        let address = location.address.trim();

        if address.is_empty() && coordinates.is_none() {
            return Err(StoreError::Validation(
                "a location address or coordinates are required".to_string(),
            ));
        }

        if let Some(c) = coordinates {
            if !c.is_valid() {
                return Err(StoreError::Validation(format!(
                    "coordinates out of range: {}, {}",
                    c.lat, c.lng
                )));
            }
            return Ok(JobLocation::new(c, address));
        }

        let resolved = match poster_location.filter(|c| c.is_valid() && !c.is_unset()) {
            Some(poster) => JobLocation::new(poster, or_default(address, "Current Location")),
            None => JobLocation::new(self.fallback_location, or_default(address, "Location not specified")),
        };

        tracing::debug!(
            "Job location {:?} has no usable coordinates, using {:?}",
            address,
            resolved.coordinates()
        );
        Ok(resolved)
    }

    /// Submit an application for a job
    ///
    /// The application starts out pending and is appended to the job's
    /// applicants.
    pub async fn apply_to_job(&self, job_id: Uuid, request: ApplyRequest) -> Result<Application, StoreError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .iter_mut()
            .find(|job| job.id == job_id)
            .ok_or(StoreError::JobNotFound(job_id))?;

        let application = Application {
            id: Uuid::new_v4(),
            job_id,
            applicant: Applicant {
                name: request.name.trim().to_string(),
                phone: request.phone,
                email: request.email,
                experience: request.experience,
                skills: request.skills,
                availability: request.availability,
                notes: request.notes,
            },
            status: ApplicationStatus::Pending,
            applied_at: Utc::now(),
        };

        job.applicants.push(application.clone());

        tracing::info!(
            "{} applied to {} ({} applicants)",
            application.applicant.name,
            job.title,
            job.applicants.len()
        );
        Ok(application)
    }

    pub async fn list_applications(&self, job_id: Uuid) -> Result<Vec<Application>, StoreError> {
        self.get_job(job_id).await.map(|job| job.applicants)
    }

    /// Accept or reject a pending application
    pub async fn update_application_status(
        &self,
        application_id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Application, StoreError> {
        let mut jobs = self.jobs.write().await;
        let application = jobs
            .iter_mut()
            .flat_map(|job| job.applicants.iter_mut())
            .find(|application| application.id == application_id)
            .ok_or(StoreError::ApplicationNotFound(application_id))?;

        if !application.status.can_transition_to(status) {
            return Err(StoreError::InvalidTransition {
                current: application.status,
                requested: status,
            });
        }

        application.status = status;

        tracing::info!("Application {} marked {}", application_id, status);
        Ok(application.clone())
    }
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .unwrap_or_default()
}

/// Sample postings around Delhi
pub fn demo_jobs() -> Vec<Job> {
    let created_at = Utc::now();
    vec![
        Job {
            id: Uuid::new_v4(),
            title: "Harvesting Corn".to_string(),
            work_type: WorkType::Harvesting,
            location: JobLocation::new(Coordinates::new(28.6139, 77.2090), "New Delhi, India"),
            date_time: at(2025, 8, 20, 8),
            payment: Payment { amount: 1200, payment_type: PaymentType::Daily },
            notes: "Experience with corn harvesting preferred. Own transportation required.".to_string(),
            farm_owner: FarmOwner {
                name: "John Smith".to_string(),
                phone: "+91-9876543210".to_string(),
                email: "john@farm.com".to_string(),
            },
            applicants: Vec::new(),
            created_at,
        },
        Job {
            id: Uuid::new_v4(),
            title: "Vegetable Planting".to_string(),
            work_type: WorkType::Planting,
            location: JobLocation::new(Coordinates::new(28.7041, 77.1025), "Gurgaon, Haryana, India"),
            date_time: at(2025, 8, 22, 7),
            payment: Payment { amount: 150, payment_type: PaymentType::Hourly },
            notes: "Planting seasonal vegetables. 8-hour shift.".to_string(),
            farm_owner: FarmOwner {
                name: "Maria Garcia".to_string(),
                phone: "+91-9876543211".to_string(),
                email: "maria@farm.com".to_string(),
            },
            applicants: Vec::new(),
            created_at,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaymentInput;

    const DELHI: Coordinates = Coordinates { lat: 28.6139, lng: 77.2090 };

    fn create_request(location: JobLocation, poster_location: Option<Coordinates>) -> CreateJobRequest {
        CreateJobRequest {
            title: String::new(),
            work_type: WorkType::Irrigation,
            location,
            date_time: at(2025, 9, 1, 6),
            payment: PaymentInput { amount: 800, payment_type: PaymentType::Daily },
            notes: String::new(),
            farm_owner: None,
            poster_location,
        }
    }

    fn apply_request(name: &str) -> ApplyRequest {
        ApplyRequest {
            name: name.to_string(),
            phone: "+919876543210".to_string(),
            email: "worker@example.com".to_string(),
            experience: Some("3 years".to_string()),
            skills: None,
            availability: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_job_generates_title() {
        let store = JobStore::new(DELHI);
        let location = JobLocation::new(Coordinates::new(18.5204, 73.8567), "Pune");

        let job = store.create_job(create_request(location, None)).await.unwrap();

        assert_eq!(job.title, "Irrigation Work");
        assert_eq!(job.location.coordinates(), Some(Coordinates::new(18.5204, 73.8567)));
        assert_eq!(store.job_count().await, 1);
    }

    #[tokio::test]
    async fn test_zeroed_coordinates_use_poster_location() {
        let store = JobStore::new(DELHI);
        let location = JobLocation { lat: Some(0.0), lng: Some(0.0), address: String::new() };
        let poster = Coordinates::new(26.9124, 75.7873);

        // Zeroed coordinates without an address are no location at all
        assert!(matches!(
            store.create_job(create_request(location.clone(), Some(poster))).await,
            Err(StoreError::Validation(_))
        ));

        let location = JobLocation { address: "Jaipur".to_string(), ..location };
        let job = store.create_job(create_request(location, Some(poster))).await.unwrap();

        assert_eq!(job.location.coordinates(), Some(poster));
        assert_eq!(job.location.address, "Jaipur");
    }

    #[tokio::test]
    async fn test_missing_coordinates_use_fallback() {
        let store = JobStore::new(DELHI);
        let location = JobLocation { address: "Somewhere in Haryana".to_string(), ..JobLocation::default() };

        let job = store.create_job(create_request(location, None)).await.unwrap();

        assert_eq!(job.location.coordinates(), Some(DELHI));
        assert_eq!(job.location.address, "Somewhere in Haryana");
    }

    #[tokio::test]
    async fn test_out_of_range_coordinates_rejected() {
        let store = JobStore::new(DELHI);
        let location = JobLocation::new(Coordinates::new(123.0, 77.0), "Nowhere");

        let result = store.create_job(create_request(location, None)).await;
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }

    #[tokio::test]
    async fn test_apply_and_decide() {
        let store = JobStore::with_demo_jobs(DELHI);
        let job_id = store.list_jobs().await[0].id;

        let application = store.apply_to_job(job_id, apply_request("Ravi")).await.unwrap();
        assert_eq!(application.status, ApplicationStatus::Pending);
        assert_eq!(application.job_id, job_id);

        let applications = store.list_applications(job_id).await.unwrap();
        assert_eq!(applications.len(), 1);

        let accepted = store
            .update_application_status(application.id, ApplicationStatus::Accepted)
            .await
            .unwrap();
        assert_eq!(accepted.status, ApplicationStatus::Accepted);

        let job = store.get_job(job_id).await.unwrap();
        assert_eq!(job.applicants[0].status, ApplicationStatus::Accepted);

        let again = store
            .update_application_status(application.id, ApplicationStatus::Rejected)
            .await;
        assert!(matches!(again, Err(StoreError::InvalidTransition { .. })));
    }

    #[tokio::test]
    async fn test_unknown_ids() {
        let store = JobStore::new(DELHI);
        let missing = Uuid::new_v4();

        assert!(matches!(store.get_job(missing).await, Err(StoreError::JobNotFound(_))));
        assert!(matches!(
            store.apply_to_job(missing, apply_request("Ravi")).await,
            Err(StoreError::JobNotFound(_))
        ));
        assert!(matches!(
            store.update_application_status(missing, ApplicationStatus::Accepted).await,
            Err(StoreError::ApplicationNotFound(_))
        ));
    }

    #[test]
    fn test_demo_jobs() {
        let jobs = demo_jobs();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].payment.amount, 1200);
        assert_eq!(jobs[1].work_type, WorkType::Planting);
        assert!(jobs.iter().all(|job| job.location.coordinates().is_some()));
    }

    #[test]
    fn test_store_is_usable_from_sync_code() {
        let store = JobStore::with_demo_jobs(DELHI);
        let jobs = tokio_test::block_on(store.list_jobs());
        assert_eq!(jobs.len(), 2);
    }
}
