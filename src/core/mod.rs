// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod matcher;

pub use distance::{distance_between, format_distance, haversine_distance};
pub use filters::{matches_search, matches_work_type, parse_int_prefix, within_date_range, within_distance, within_payment, PaymentBounds};
pub use matcher::{JobMatcher, MatchResult};
