use serde::{Deserialize, Serialize};
use sqlx::prelude::{FromRow, Type};
use uuid::Uuid;

/// Lifecycle of a friendship request. `Pending` is the only non-terminal
/// state; the three others are terminal and never transition again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize)]
#[sqlx(type_name = "friendship_request_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FriendshipRequestStatus {
    Pending,
    Accepted,
    Rejected,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FriendshipRequestEntity {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub status: FriendshipRequestStatus,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
