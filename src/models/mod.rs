// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Applicant, Application, ApplicationStatus, Coordinates, DateRange, FarmOwner, Job, JobFilter, JobLocation, Payment, PaymentType, RankedJob, WorkType};
pub use requests::{ApplyRequest, CreateJobRequest, PaymentInput, SearchJobsRequest, UpdateApplicationStatusRequest};
pub use responses::{ErrorResponse, HealthResponse, SearchJobsResponse};
