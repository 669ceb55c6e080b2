use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::user::schema::UserEntity;

#[derive(Debug, Clone, Deserialize)]
pub struct FriendshipRequestBody {
    pub receiver_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendResponse {
    pub id: Uuid,
    pub email: String,
}

impl From<UserEntity> for FriendResponse {
    fn from(user: UserEntity) -> Self {
        FriendResponse { id: user.id, email: user.email }
    }
}
