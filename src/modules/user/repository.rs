use uuid::Uuid;

use crate::api::error;
use crate::modules::training::schema::TrainingVisibility;
use crate::modules::user::{model::InsertUser, schema::UserEntity};

#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the user and its profile row together; a duplicate email
    /// surfaces as `EmailAlreadyExists`.
    async fn create(&self, user: &InsertUser) -> Result<UserEntity, error::SystemError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>, error::SystemError>;

    async fn does_user_with_id_exist(&self, user_id: &Uuid) -> Result<bool, error::SystemError>;

    async fn get_users_by_ids(
        &self,
        user_ids: &[Uuid],
    ) -> Result<Vec<UserEntity>, error::SystemError>;

    async fn update_training_visibility(
        &self,
        user_id: &Uuid,
        visibility: TrainingVisibility,
    ) -> Result<(), error::SystemError>;
}
