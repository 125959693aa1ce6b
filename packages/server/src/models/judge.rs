use serde::Serialize;

use crate::entity::judge;

/// Judge projection for admin listings. `password_hash` never leaves the
/// storage layer.
#[derive(Serialize, utoipa::ToSchema)]
pub struct JudgeResponse {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub email: String,
    /// Category tags as a JSON array.
    pub expertise: serde_json::Value,
    pub is_active: bool,
}

impl From<judge::Model> for JudgeResponse {
    fn from(m: judge::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            name: m.name,
            email: m.email,
            expertise: m.expertise,
            is_active: m.is_active,
        }
    }
}
