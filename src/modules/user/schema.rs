use serde::Serialize;
use sqlx::prelude::FromRow;
use uuid::Uuid;

use crate::modules::training::schema::TrainingVisibility;

#[allow(unused)]
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: Uuid,
    pub email: String,
    pub hash_password: String,
}

/// Created in the same transaction as its user; carries the default
/// visibility applied to trainings without their own setting.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProfileEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub training_visibility: TrainingVisibility,
}
