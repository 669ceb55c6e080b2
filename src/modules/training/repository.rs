use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::api::error;
use crate::modules::training::schema::{TrainingEntity, TrainingVisibility};

/// Training reads are visibility-filtered at the store: a training the
/// requester may not see behaves exactly like one that does not exist.
#[async_trait::async_trait]
pub trait TrainingRepository: Send + Sync {
    async fn create_training(
        &self,
        user_id: &Uuid,
        name: &str,
        start_time: DateTime<Utc>,
        end_time: Option<DateTime<Utc>>,
        visibility: Option<TrainingVisibility>,
    ) -> Result<TrainingEntity, error::SystemError>;

    async fn get_training_by_id(
        &self,
        request_user_id: &Uuid,
        training_id: &Uuid,
    ) -> Result<Option<TrainingEntity>, error::SystemError>;

    /// All of `user_id`'s trainings visible to the requester, newest
    /// start_time first.
    async fn get_user_trainings(
        &self,
        request_user_id: &Uuid,
        user_id: &Uuid,
    ) -> Result<Vec<TrainingEntity>, error::SystemError>;
}
