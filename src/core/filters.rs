use crate::models::{DateRange, Job, JobFilter, WorkType};

/// Parse the integer prefix of user-typed text
///
/// Leading whitespace is skipped, an optional sign is accepted, and digits are
/// taken up to the first non-digit. Text without a leading integer yields
/// `None`, which callers treat as "no bound".
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let value = rest[..digits_len]
        .bytes()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add((d - b'0') as i64));

    Some(if negative { -value } else { value })
}

/// Payment bounds resolved from a filter's free-text fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaymentBounds {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl PaymentBounds {
    pub fn from_filter(filter: &JobFilter) -> Self {
        Self {
            min: filter.min_payment.as_deref().and_then(parse_int_prefix),
            max: filter.max_payment.as_deref().and_then(parse_int_prefix),
        }
    }
}

/// Case-insensitive substring match against the title or the work type
#[inline]
pub fn matches_search(job: &Job, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }

    let needle = search.to_lowercase();
    job.title.to_lowercase().contains(&needle) || job.work_type.as_str().contains(&needle)
}

#[inline]
pub fn matches_work_type(job: &Job, work_type: Option<WorkType>) -> bool {
    work_type.map_or(true, |wanted| job.work_type == wanted)
}

/// Check a computed distance against the configured maximum
///
/// An unknown distance (no worker location, or a job without coordinates)
/// always passes.
#[inline]
pub fn within_distance(distance_km: Option<f64>, max_distance_km: Option<f64>) -> bool {
    match (distance_km, max_distance_km) {
        (Some(distance), Some(max)) => distance <= max,
        _ => true,
    }
}

#[inline]
pub fn within_payment(job: &Job, bounds: &PaymentBounds) -> bool {
    let amount = job.payment.amount as i64;

    if let Some(min) = bounds.min {
        if amount < min {
            return false;
        }
    }

    if let Some(max) = bounds.max {
        if amount > max {
            return false;
        }
    }

    true
}

#[inline]
pub fn within_date_range(job: &Job, range: Option<&DateRange>) -> bool {
    let Some(range) = range else {
        return true;
    };

    if let Some(from) = range.from {
        if job.date_time < from {
            return false;
        }
    }

    if let Some(to) = range.to {
        if job.date_time > to {
            return false;
        }
    }

    true
}
