use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::{ApplicationStatus, Coordinates, FarmOwner, JobFilter, JobLocation, PaymentType, WorkType};

/// Request to post a new job
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub title: String,
    pub work_type: WorkType,
    #[serde(default)]
    pub location: JobLocation,
    pub date_time: NaiveDateTime,
    #[validate(nested)]
    pub payment: PaymentInput,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: String,
    #[serde(default)]
    pub farm_owner: Option<FarmOwner>,
    /// Current location of the person posting, used when the job location
    /// has no usable coordinates
    #[serde(default)]
    pub poster_location: Option<Coordinates>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PaymentInput {
    #[validate(range(min = 1))]
    pub amount: u32,
    #[serde(rename = "type", default)]
    pub payment_type: PaymentType,
}

/// Request to search the job board
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchJobsRequest {
    #[serde(default)]
    pub filter: JobFilter,
    #[serde(default)]
    pub worker_location: Option<Coordinates>,
}

/// Request to apply to a job
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApplyRequest {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    #[validate(
        email(message = "a valid email address is required"),
        custom(function = "validate_email_domain")
    )]
    pub email: String,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request to accept or reject an application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateApplicationStatusRequest {
    pub status: ApplicationStatus,
}

/// A name made only of whitespace counts as missing
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("name");
        err.message = Some("name is required".into());
        return Err(err);
    }
    Ok(())
}

/// The domain part must contain a dot with text on both sides, so
/// `user@localhost` is rejected
pub fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    let domain = email.rsplit_once('@').map(|(_, domain)| domain).unwrap_or_default();
    let dotted = domain
        .split_once('.')
        .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'));

    if dotted {
        Ok(())
    } else {
        let mut err = ValidationError::new("email");
        err.message = Some("a valid email address is required".into());
        Err(err)
    }
}

/// Optional leading `+`, then a non-zero digit and at most 15 more digits.
/// Whitespace anywhere is ignored.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = compact.strip_prefix('+').unwrap_or(&compact);

    let mut chars = digits.chars();
    let leading_ok = matches!(chars.next(), Some('1'..='9'));
    let rest_ok = chars.clone().all(|c| c.is_ascii_digit()) && chars.count() <= 15;

    if leading_ok && rest_ok {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone");
        err.message = Some("a valid phone number is required".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_request(phone: &str, email: &str) -> ApplyRequest {
        ApplyRequest {
            name: "Ravi Kumar".to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            experience: None,
            skills: Some("Harvesting, Tractor Operation".to_string()),
            availability: None,
            notes: None,
        }
    }

    #[test]
    fn test_phone_validation() {
        assert!(validate_phone("+919876543210").is_ok());
        assert!(validate_phone("98765 43210").is_ok());
        assert!(validate_phone("0123456").is_err());
        assert!(validate_phone("+91-9876543210").is_err());
        assert!(validate_phone("").is_err());
        assert!(validate_phone("12345678901234567").is_err());
    }

    #[test]
    fn test_apply_request_validation() {
        assert!(apply_request("+919876543210", "ravi@example.com").validate().is_ok());
        assert!(apply_request("+919876543210", "not-an-email").validate().is_err());
        assert!(apply_request("abc", "ravi@example.com").validate().is_err());

        let mut missing_name = apply_request("+919876543210", "ravi@example.com");
        missing_name.name.clear();
        assert!(missing_name.validate().is_err());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut blank_name = apply_request("+919876543210", "ravi@example.com");
        blank_name.name = "   ".to_string();
        assert!(blank_name.validate().is_err());

        assert!(validate_name(" Ravi ").is_ok());
        assert!(validate_name("\t").is_err());
    }

    #[test]
    fn test_email_domain_needs_dot() {
        assert!(apply_request("+919876543210", "ravi@localhost").validate().is_err());
        assert!(apply_request("+919876543210", "ravi@farm.co.in").validate().is_ok());

        assert!(validate_email_domain("ravi@example.com").is_ok());
        assert!(validate_email_domain("ravi@localhost").is_err());
        assert!(validate_email_domain("ravi@.com").is_err());
        assert!(validate_email_domain("ravi@example.").is_err());
        assert!(validate_email_domain("ravi").is_err());
    }

    #[test]
    fn test_create_job_request_rejects_zero_payment() {
        let request: CreateJobRequest = serde_json::from_str(
            r#"{
                "workType": "planting",
                "location": {"address": "Gurgaon"},
                "dateTime": "2025-08-22T07:00:00",
                "payment": {"amount": 0, "type": "hourly"}
            }"#,
        )
        .unwrap();

        assert!(request.validate().is_err());
        assert!(request.title.is_empty());
    }
}
