use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::shared::validate_name;
use crate::entity::round;
use crate::error::AppError;
use crate::utils::round::derive_status;

/// Round status, derived from the time window at read time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoundStatus {
    Draft,
    Live,
    Completed,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateRoundRequest {
    pub name: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub upload_deadline: DateTime<Utc>,
    /// Accepted for wire compatibility and ignored: status is always derived
    /// from the time window, never stored.
    #[serde(default)]
    pub status: Option<RoundStatus>,
}

#[derive(Deserialize, Default, PartialEq, utoipa::ToSchema)]
pub struct UpdateRoundRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub upload_deadline: Option<DateTime<Utc>>,
    /// Accepted for wire compatibility and ignored.
    #[serde(default)]
    pub status: Option<RoundStatus>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct RoundResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub upload_deadline: DateTime<Utc>,
    /// Derived from the time window at response time.
    pub status: RoundStatus,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<round::Model> for RoundResponse {
    fn from(m: round::Model) -> Self {
        let status = derive_status(Utc::now(), m.start_time, m.end_time);
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            start_time: m.start_time,
            end_time: m.end_time,
            upload_deadline: m.upload_deadline,
            status,
            created_by: m.created_by,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

pub fn validate_create_round(req: &CreateRoundRequest) -> Result<(), AppError> {
    validate_name(&req.name, "Round name")?;
    validate_time_window(req.start_time, req.end_time, req.upload_deadline)
}

pub fn validate_update_round(req: &UpdateRoundRequest) -> Result<(), AppError> {
    if let Some(ref name) = req.name {
        validate_name(name, "Round name")?;
    }
    // Cross-field window checks run against the merged result in the handler.
    Ok(())
}

/// The window invariants, checked on create and on every merged update:
/// `end_time > start_time` and `start_time <= upload_deadline <= end_time`.
pub fn validate_time_window(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    upload_deadline: DateTime<Utc>,
) -> Result<(), AppError> {
    if end <= start {
        return Err(AppError::Validation(
            "end_time must be after start_time".into(),
        ));
    }
    if upload_deadline < start || upload_deadline > end {
        return Err(AppError::Validation(
            "upload_deadline must fall within [start_time, end_time]".into(),
        ));
    }
    Ok(())
}
