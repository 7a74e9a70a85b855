use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A point on the globe in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when either component is zero, which is how browser forms submit
    /// "no location picked"
    pub fn is_unset(&self) -> bool {
        self.lat == 0.0 || self.lng == 0.0
    }

    /// Latitude within [-90, 90] and longitude within [-180, 180]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Categories of farm work a job can be posted under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkType {
    Harvesting,
    Planting,
    Irrigation,
    Pesticide,
    Maintenance,
    Livestock,
    Packaging,
    General,
}

impl WorkType {
    pub const ALL: [WorkType; 8] = [
        WorkType::Harvesting,
        WorkType::Planting,
        WorkType::Irrigation,
        WorkType::Pesticide,
        WorkType::Maintenance,
        WorkType::Livestock,
        WorkType::Packaging,
        WorkType::General,
    ];

    /// Wire name, also what free-text search matches against
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkType::Harvesting => "harvesting",
            WorkType::Planting => "planting",
            WorkType::Irrigation => "irrigation",
            WorkType::Pesticide => "pesticide",
            WorkType::Maintenance => "maintenance",
            WorkType::Livestock => "livestock",
            WorkType::Packaging => "packaging",
            WorkType::General => "general",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            WorkType::Harvesting => "Harvesting",
            WorkType::Planting => "Planting",
            WorkType::Irrigation => "Irrigation",
            WorkType::Pesticide => "Pesticide Spraying",
            WorkType::Maintenance => "Farm Maintenance",
            WorkType::Livestock => "Livestock Care",
            WorkType::Packaging => "Packaging",
            WorkType::General => "General Farm Work",
        }
    }

    /// Title used for postings submitted without one, e.g. "Harvesting Work"
    pub fn default_title(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => format!("{}{} Work", first.to_ascii_uppercase(), chars.as_str()),
            None => "Work".to_string(),
        }
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        WorkType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == needle)
            .ok_or_else(|| format!("unknown work type: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Hourly,
    Daily,
    Weekly,
    Fixed,
}

impl Default for PaymentType {
    fn default() -> Self {
        PaymentType::Daily
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub amount: u32,
    #[serde(rename = "type", default)]
    pub payment_type: PaymentType,
}

/// Where the work happens
///
/// Coordinates are optional: a posting without them is never excluded by a
/// distance bound and sorts after located postings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(default)]
    pub address: String,
}

impl JobLocation {
    pub fn new(coordinates: Coordinates, address: impl Into<String>) -> Self {
        Self {
            lat: Some(coordinates.lat),
            lng: Some(coordinates.lng),
            address: address.into(),
        }
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FarmOwner {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

/// A job posting on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub work_type: WorkType,
    pub location: JobLocation,
    pub date_time: NaiveDateTime,
    pub payment: Payment,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub farm_owner: FarmOwner,
    #[serde(default)]
    pub applicants: Vec<Application>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    /// Only pending applications can be decided, and a decision is final
    pub fn can_transition_to(&self, next: ApplicationStatus) -> bool {
        matches!(
            (self, next),
            (ApplicationStatus::Pending, ApplicationStatus::Accepted)
                | (ApplicationStatus::Pending, ApplicationStatus::Rejected)
        )
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

/// Contact and experience details a worker submits with an application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: Uuid,
    pub job_id: Uuid,
    #[serde(flatten)]
    pub applicant: Applicant,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

/// Inclusive window over a job's scheduled date and time
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default)]
    pub from: Option<NaiveDateTime>,
    #[serde(default)]
    pub to: Option<NaiveDateTime>,
}

/// Search criteria a worker applies to the board
///
/// Payment bounds are kept as typed text and parsed leniently when the
/// filter runs; text without a leading integer means "no bound".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilter {
    #[serde(default)]
    pub search: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub work_type: Option<WorkType>,
    #[serde(default)]
    pub date_range: Option<DateRange>,
    #[serde(default, rename = "maxDistance")]
    pub max_distance_km: Option<f64>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub min_payment: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub max_payment: Option<String>,
}

/// A job that survived filtering, with its distance from the worker
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedJob {
    #[serde(flatten)]
    pub job: Job,
    pub distance_km: Option<f64>,
    pub distance_label: Option<String>,
}

/// Select boxes post "" for "All Work Types"
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<WorkType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<TextOrNumber> = Option::deserialize(deserializer)?;
    Ok(raw.map(|v| match v {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Integer(i) => i.to_string(),
        TextOrNumber::Float(f) => f.to_string(),
    }))
}
