use std::collections::HashSet;
use uuid::Uuid;

use crate::{
    api::error,
    modules::friendship::{
        repository::{FriendshipRepo, FriendshipRepository, FriendshipRequestRepository},
        schema::{FriendshipRequestEntity, FriendshipRequestStatus},
    },
};

#[derive(Clone)]
pub struct FriendshipRepositoryPg {
    pool: sqlx::PgPool,
}

impl FriendshipRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl FriendshipRepository for FriendshipRepositoryPg {
    async fn get_user_friends_ids(
        &self,
        user_id: &Uuid,
    ) -> Result<HashSet<Uuid>, error::SystemError> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT user_2_id FROM friendship WHERE user_1_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(ids.into_iter().collect())
    }

    async fn are_users_friends(
        &self,
        user_1_id: &Uuid,
        user_2_id: &Uuid,
    ) -> Result<bool, error::SystemError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM friendship
                WHERE (user_1_id = $1 AND user_2_id = $2)
                   OR (user_1_id = $2 AND user_2_id = $1)
            )
            "#,
        )
        .bind(user_1_id)
        .bind(user_2_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn create_friendship(
        &self,
        user_1_id: &Uuid,
        user_2_id: &Uuid,
    ) -> Result<(), error::SystemError> {
        sqlx::query(
            "INSERT INTO friendship (user_1_id, user_2_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(user_1_id)
        .bind(user_2_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl FriendshipRequestRepository for FriendshipRepositoryPg {
    async fn does_pending_request_exist(
        &self,
        user_1_id: &Uuid,
        user_2_id: &Uuid,
    ) -> Result<bool, error::SystemError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM friendship_request
                WHERE status = $3
                  AND ((sender_id = $1 AND receiver_id = $2)
                    OR (sender_id = $2 AND receiver_id = $1))
            )
            "#,
        )
        .bind(user_1_id)
        .bind(user_2_id)
        .bind(FriendshipRequestStatus::Pending)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn create_pending_request(
        &self,
        sender_id: &Uuid,
        receiver_id: &Uuid,
    ) -> Result<FriendshipRequestEntity, error::SystemError> {
        let id = Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext));
        let request = sqlx::query_as::<_, FriendshipRequestEntity>(
            r#"
            INSERT INTO friendship_request (id, sender_id, receiver_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(sender_id)
        .bind(receiver_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(request)
    }

    async fn get_request_by_id(
        &self,
        request_id: &Uuid,
    ) -> Result<Option<FriendshipRequestEntity>, error::SystemError> {
        let request = sqlx::query_as::<_, FriendshipRequestEntity>(
            "SELECT * FROM friendship_request WHERE id = $1",
        )
        .bind(request_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(request)
    }

    async fn update_status(
        &self,
        request_id: &Uuid,
        status: FriendshipRequestStatus,
    ) -> Result<(), error::SystemError> {
        sqlx::query("UPDATE friendship_request SET status = $2 WHERE id = $1")
            .bind(request_id)
            .bind(status)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_pending_requests_sent_by_user(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<FriendshipRequestEntity>, error::SystemError> {
        let requests = sqlx::query_as::<_, FriendshipRequestEntity>(
            r#"
            SELECT * FROM friendship_request
            WHERE sender_id = $1 AND status = $2
            ORDER BY timestamp ASC
            "#,
        )
        .bind(user_id)
        .bind(FriendshipRequestStatus::Pending)
        .fetch_all(&self.pool)
        .await?;
        Ok(requests)
    }

    async fn get_pending_requests_received_by_user(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<FriendshipRequestEntity>, error::SystemError> {
        let requests = sqlx::query_as::<_, FriendshipRequestEntity>(
            r#"
            SELECT * FROM friendship_request
            WHERE receiver_id = $1 AND status = $2
            ORDER BY timestamp ASC
            "#,
        )
        .bind(user_id)
        .bind(FriendshipRequestStatus::Pending)
        .fetch_all(&self.pool)
        .await?;
        Ok(requests)
    }
}

#[async_trait::async_trait]
impl FriendshipRepo for FriendshipRepositoryPg {
    async fn accept_request_atomic(
        &self,
        request: &FriendshipRequestEntity,
    ) -> Result<(), error::SystemError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE friendship_request SET status = $2 WHERE id = $1")
            .bind(request.id)
            .bind(FriendshipRequestStatus::Accepted)
            .execute(tx.as_mut())
            .await?;

        // both directions, so one-directional reads see the edge
        sqlx::query(
            "INSERT INTO friendship (user_1_id, user_2_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(request.sender_id)
        .bind(request.receiver_id)
        .execute(tx.as_mut())
        .await?;
        sqlx::query(
            "INSERT INTO friendship (user_1_id, user_2_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(request.receiver_id)
        .bind(request.sender_id)
        .execute(tx.as_mut())
        .await?;

        tx.commit().await?;
        Ok(())
    }
}
