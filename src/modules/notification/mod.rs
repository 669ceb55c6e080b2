use deadpool_redis::redis::AsyncCommands;
use uuid::Uuid;

use crate::api::error;

/// Per-friend channel carrying new-training events; consumers subscribe to
/// the channel of the user they act for.
pub fn new_training_channel(friend_id: &Uuid) -> String {
    format!("new_training:{friend_id}")
}

#[async_trait::async_trait]
pub trait NotificationPublisher: Send + Sync {
    /// At-most-once; callers decide what a failure means for the rest of
    /// their fan-out.
    async fn publish_new_training(
        &self,
        friend_id: &Uuid,
        training_id: &Uuid,
    ) -> Result<(), error::SystemError>;
}

#[derive(Clone)]
pub struct RedisNotificationPublisher {
    pool: deadpool_redis::Pool,
}

impl RedisNotificationPublisher {
    pub fn new(pool: deadpool_redis::Pool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl NotificationPublisher for RedisNotificationPublisher {
    async fn publish_new_training(
        &self,
        friend_id: &Uuid,
        training_id: &Uuid,
    ) -> Result<(), error::SystemError> {
        let mut conn = self.pool.get().await?;
        let payload = serde_json::to_string(&serde_json::json!({ "training_id": training_id }))?;
        conn.publish::<_, _, ()>(new_training_channel(friend_id), payload).await?;
        Ok(())
    }
}
