use serde::Deserialize;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct AssignRequest {
    pub team_id: i32,
    pub judge_id: i32,
}
