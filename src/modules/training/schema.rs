use serde::{Deserialize, Serialize};
use sqlx::prelude::{FromRow, Type};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize)]
#[sqlx(type_name = "training_visibility", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TrainingVisibility {
    Public,
    Private,
    OnlyFriends,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TrainingEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub start_time: chrono::DateTime<chrono::Utc>,
    /// None for an in-progress or instantaneous activity.
    pub end_time: Option<chrono::DateTime<chrono::Utc>>,
    /// None defers to the owner's profile default.
    pub visibility: Option<TrainingVisibility>,
}
