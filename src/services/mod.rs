// Service exports
pub mod store;

pub use store::{demo_jobs, JobStore, StoreError};
