use crate::models::{Coordinates, Job, JobFilter, RankedJob};
use crate::core::{
    distance::{distance_between, format_distance},
    filters::{matches_search, matches_work_type, within_date_range, within_distance, within_payment, PaymentBounds},
};
use std::cmp::Ordering;

/// Result of a job search
#[derive(Debug)]
pub struct MatchResult {
    pub jobs: Vec<RankedJob>,
    pub total_jobs: usize,
}

/// Job search orchestrator - runs the filter pipeline and the distance sort
///
/// # Pipeline Stages
/// 1. Free-text search over title and work type
/// 2. Work type
/// 3. Distance from the worker
/// 4. Payment range
/// 5. Scheduled date window
/// 6. Ascending distance sort (only when the worker location is known)
#[derive(Debug, Clone)]
pub struct JobMatcher {
    default_max_distance_km: Option<f64>,
}

impl JobMatcher {
    pub fn new(default_max_distance_km: Option<f64>) -> Self {
        Self { default_max_distance_km }
    }

    /// A matcher that applies no distance bound unless the filter sets one
    pub fn unbounded() -> Self {
        Self { default_max_distance_km: None }
    }

    pub fn default_max_distance_km(&self) -> Option<f64> {
        self.default_max_distance_km
    }

    /// Filter and order jobs for a worker
    ///
    /// # Arguments
    /// * `jobs` - Every job on the board
    /// * `worker_location` - Where the worker is, if known
    /// * `filter` - Search criteria; a missing `maxDistance` falls back to
    ///   the matcher's default
    ///
    /// # Returns
    /// MatchResult with the surviving jobs, closest first when the worker
    /// location is known, otherwise in board order
    pub fn find_jobs(
        &self,
        jobs: &[Job],
        worker_location: Option<Coordinates>,
        filter: &JobFilter,
    ) -> MatchResult {
        let total_jobs = jobs.len();
        let max_distance_km = filter.max_distance_km.or(self.default_max_distance_km);
        let bounds = PaymentBounds::from_filter(filter);

        tracing::debug!(
            "Filtering {} jobs: search={:?}, work_type={:?}, max_distance={:?}, payment={:?}",
            total_jobs,
            filter.search,
            filter.work_type,
            max_distance_km,
            bounds
        );

        let mut ranked: Vec<RankedJob> = jobs
            .iter()
            .filter_map(|job| {
                if !matches_search(job, &filter.search) {
                    tracing::debug!("Job {} filtered out by search", job.title);
                    return None;
                }

                if !matches_work_type(job, filter.work_type) {
                    tracing::debug!("Job {} filtered out by work type", job.title);
                    return None;
                }

                let distance_km = worker_location
                    .zip(job.location.coordinates())
                    .map(|(worker, site)| distance_between(worker, site));

                if !within_distance(distance_km, max_distance_km) {
                    tracing::debug!(
                        "Job {} filtered out by distance ({:.2}km, max {:?}km)",
                        job.title,
                        distance_km.unwrap_or_default(),
                        max_distance_km
                    );
                    return None;
                }

                if !within_payment(job, &bounds) {
                    tracing::debug!("Job {} filtered out by payment ({})", job.title, job.payment.amount);
                    return None;
                }

                if !within_date_range(job, filter.date_range.as_ref()) {
                    tracing::debug!("Job {} filtered out by date", job.title);
                    return None;
                }

                Some(RankedJob {
                    job: job.clone(),
                    distance_km,
                    distance_label: distance_km.map(format_distance),
                })
            })
            .collect();

        if worker_location.is_some() {
            // sort_by is stable; jobs without coordinates go last
            ranked.sort_by(|a, b| compare_distance(a.distance_km, b.distance_km));
        }

        tracing::debug!("{} of {} jobs passed all filters", ranked.len(), total_jobs);

        MatchResult {
            jobs: ranked,
            total_jobs,
        }
    }
}

impl Default for JobMatcher {
    fn default() -> Self {
        Self::new(Some(50.0))
    }
}

fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
