//! Labour Hub - job board and proximity matching for farm labour
//!
//! This library provides the job search pipeline used by the Labour Hub:
//! free-text, work type, distance and payment filters over job postings,
//! followed by a distance sort from the worker's location.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{JobMatcher, MatchResult, distance::{haversine_distance, format_distance}};
pub use models::{Coordinates, Job, JobFilter, RankedJob, WorkType, SearchJobsRequest, SearchJobsResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let distance = haversine_distance(28.6139, 77.2090, 28.7041, 77.1025);
        assert_eq!(format_distance(distance), "14km");
    }
}
