use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    api::error,
    modules::training::{
        repository::TrainingRepository,
        schema::{TrainingEntity, TrainingVisibility},
    },
};

/// SQL twin of `model::is_training_visible`. `$1` is the requesting user.
const VISIBLE_TO_REQUESTER: &str = r#"
    (
        t.user_id = $1
        OR COALESCE(t.visibility, p.training_visibility, 'public') = 'public'::training_visibility
        OR (
            COALESCE(t.visibility, p.training_visibility, 'public') = 'only_friends'::training_visibility
            AND t.user_id IN (SELECT user_2_id FROM friendship WHERE user_1_id = $1)
        )
    )
"#;

#[derive(Clone)]
pub struct TrainingRepositoryPg {
    pool: sqlx::PgPool,
}

impl TrainingRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl TrainingRepository for TrainingRepositoryPg {
    async fn create_training(
        &self,
        user_id: &Uuid,
        name: &str,
        start_time: DateTime<Utc>,
        end_time: Option<DateTime<Utc>>,
        visibility: Option<TrainingVisibility>,
    ) -> Result<TrainingEntity, error::SystemError> {
        let id = Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext));
        let training = sqlx::query_as::<_, TrainingEntity>(
            r#"
            INSERT INTO training (id, user_id, name, start_time, end_time, visibility)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(name)
        .bind(start_time)
        .bind(end_time)
        .bind(visibility)
        .fetch_one(&self.pool)
        .await?;
        Ok(training)
    }

    async fn get_training_by_id(
        &self,
        request_user_id: &Uuid,
        training_id: &Uuid,
    ) -> Result<Option<TrainingEntity>, error::SystemError> {
        let sql = format!(
            r#"
            SELECT t.* FROM training t
            LEFT JOIN profile p ON p.user_id = t.user_id
            WHERE t.id = $2 AND {VISIBLE_TO_REQUESTER}
            "#
        );
        let training = sqlx::query_as::<_, TrainingEntity>(&sql)
            .bind(request_user_id)
            .bind(training_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(training)
    }

    async fn get_user_trainings(
        &self,
        request_user_id: &Uuid,
        user_id: &Uuid,
    ) -> Result<Vec<TrainingEntity>, error::SystemError> {
        let sql = format!(
            r#"
            SELECT t.* FROM training t
            LEFT JOIN profile p ON p.user_id = t.user_id
            WHERE t.user_id = $2 AND {VISIBLE_TO_REQUESTER}
            ORDER BY t.start_time DESC
            "#
        );
        let trainings = sqlx::query_as::<_, TrainingEntity>(&sql)
            .bind(request_user_id)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(trainings)
    }
}
