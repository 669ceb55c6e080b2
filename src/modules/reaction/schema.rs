use serde::{Deserialize, Serialize};
use sqlx::prelude::{FromRow, Type};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize)]
#[sqlx(type_name = "reaction_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReactionType {
    Like,
    Dislike,
}

/// No uniqueness constraint: the same user may react to the same training
/// any number of times.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ReactionEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub training_id: Uuid,
    pub reaction_type: ReactionType,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
