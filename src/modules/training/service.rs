use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    api::error,
    modules::{
        friendship::repository::FriendshipRepository,
        notification::NotificationPublisher,
        training::{
            repository::TrainingRepository,
            schema::{TrainingEntity, TrainingVisibility},
        },
    },
};

#[derive(Clone)]
pub struct TrainingService<T, F, P>
where
    T: TrainingRepository,
    F: FriendshipRepository + Send + Sync,
    P: NotificationPublisher,
{
    training_repo: Arc<T>,
    friendship_repo: Arc<F>,
    publisher: Arc<P>,
}

impl<T, F, P> TrainingService<T, F, P>
where
    T: TrainingRepository,
    F: FriendshipRepository + Send + Sync,
    P: NotificationPublisher,
{
    pub fn with_dependencies(
        training_repo: Arc<T>,
        friendship_repo: Arc<F>,
        publisher: Arc<P>,
    ) -> Self {
        TrainingService { training_repo, friendship_repo, publisher }
    }

    pub async fn create_training(
        &self,
        user_id: Uuid,
        name: String,
        start_time: DateTime<Utc>,
        end_time: Option<DateTime<Utc>>,
        visibility: Option<TrainingVisibility>,
    ) -> Result<TrainingEntity, error::SystemError> {
        let training = self
            .training_repo
            .create_training(&user_id, &name, start_time, end_time, visibility)
            .await?;
        self.notify_friends(&training).await;
        Ok(training)
    }

    pub async fn get_training(
        &self,
        request_user_id: Uuid,
        training_id: Uuid,
    ) -> Result<TrainingEntity, error::SystemError> {
        self.training_repo
            .get_training_by_id(&request_user_id, &training_id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Training not found"))
    }

    pub async fn get_user_trainings(
        &self,
        request_user_id: Uuid,
        user_id: Uuid,
    ) -> Result<Vec<TrainingEntity>, error::SystemError> {
        self.training_repo.get_user_trainings(&request_user_id, &user_id).await
    }

    /// One message per current friend, sequential, at-most-once: a failed
    /// publish is logged and the remaining friends are skipped. The
    /// training itself is already committed either way.
    async fn notify_friends(&self, training: &TrainingEntity) {
        let friends = match self.friendship_repo.get_user_friends_ids(&training.user_id).await {
            Ok(friends) => friends,
            Err(e) => {
                log::error!("friend lookup for training {} failed: {e}", training.id);
                return;
            }
        };
        for friend_id in friends {
            if let Err(e) = self.publisher.publish_new_training(&friend_id, &training.id).await {
                log::error!("new-training publish to {friend_id} failed: {e}");
                break;
            }
        }
    }
}
