use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    api::error,
    modules::reaction::{
        repository::ReactionRepository,
        schema::{ReactionEntity, ReactionType},
    },
};

#[derive(Clone)]
pub struct ReactionRepositoryPg {
    pool: sqlx::PgPool,
}

impl ReactionRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ReactionRepository for ReactionRepositoryPg {
    async fn create_reaction(
        &self,
        user_id: &Uuid,
        training_id: &Uuid,
        reaction_type: ReactionType,
    ) -> Result<ReactionEntity, error::SystemError> {
        let id = Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext));
        let reaction = sqlx::query_as::<_, ReactionEntity>(
            r#"
            INSERT INTO reaction (id, user_id, training_id, reaction_type, created_at)
            VALUES ($1, $2, $3, $4, now())
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(training_id)
        .bind(reaction_type)
        .fetch_one(&self.pool)
        .await?;
        Ok(reaction)
    }

    async fn get_reactions_by_training_ids(
        &self,
        training_ids: &[Uuid],
    ) -> Result<Vec<Vec<ReactionEntity>>, error::SystemError> {
        let reactions = sqlx::query_as::<_, ReactionEntity>(
            "SELECT * FROM reaction WHERE training_id = ANY($1) ORDER BY created_at DESC",
        )
        .bind(training_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<Uuid, Vec<ReactionEntity>> = HashMap::new();
        for reaction in reactions {
            grouped.entry(reaction.training_id).or_default().push(reaction);
        }
        Ok(training_ids
            .iter()
            .map(|training_id| grouped.remove(training_id).unwrap_or_default())
            .collect())
    }

    async fn get_reaction_count_by_training_ids(
        &self,
        training_ids: &[Uuid],
    ) -> Result<Vec<i64>, error::SystemError> {
        let counts: Vec<(Uuid, i64)> = sqlx::query_as(
            r#"
            SELECT training_id, COUNT(*) FROM reaction
            WHERE training_id = ANY($1)
            GROUP BY training_id
            "#,
        )
        .bind(training_ids)
        .fetch_all(&self.pool)
        .await?;

        let counts: HashMap<Uuid, i64> = counts.into_iter().collect();
        Ok(training_ids
            .iter()
            .map(|training_id| counts.get(training_id).copied().unwrap_or(0))
            .collect())
    }
}
