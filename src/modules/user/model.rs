use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::modules::{training::schema::TrainingVisibility, user::schema::UserEntity};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
}

impl From<UserEntity> for UserResponse {
    fn from(user: UserEntity) -> Self {
        UserResponse { id: user.id, email: user.email }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub jwt: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignUpBody {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignInBody {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTrainingVisibilityBody {
    pub training_visibility: TrainingVisibility,
}

pub struct InsertUser {
    pub email: String,
    pub hash_password: String,
}
