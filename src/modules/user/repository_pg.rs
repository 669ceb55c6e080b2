use uuid::Uuid;

use crate::{
    api::error,
    modules::{
        training::schema::TrainingVisibility,
        user::{model::InsertUser, repository::UserRepository, schema::UserEntity},
    },
};

#[derive(Clone)]
pub struct UserRepositoryPg {
    pool: sqlx::PgPool,
}

impl UserRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UserRepository for UserRepositoryPg {
    async fn create(&self, user: &InsertUser) -> Result<UserEntity, error::SystemError> {
        let mut tx = self.pool.begin().await?;

        let user_id = Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext));
        let created = sqlx::query_as::<_, UserEntity>(
            r#"INSERT INTO "user" (id, email, hash_password) VALUES ($1, $2, $3) RETURNING *"#,
        )
        .bind(user_id)
        .bind(&user.email)
        .bind(&user.hash_password)
        .fetch_one(tx.as_mut())
        .await?;

        let profile_id = Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext));
        sqlx::query("INSERT INTO profile (id, user_id) VALUES ($1, $2)")
            .bind(profile_id)
            .bind(user_id)
            .execute(tx.as_mut())
            .await?;

        tx.commit().await?;
        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>, error::SystemError> {
        let user = sqlx::query_as::<_, UserEntity>(
            r#"SELECT * FROM "user" WHERE lower(email) = lower($1)"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn does_user_with_id_exist(&self, user_id: &Uuid) -> Result<bool, error::SystemError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM "user" WHERE id = $1)"#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn get_users_by_ids(
        &self,
        user_ids: &[Uuid],
    ) -> Result<Vec<UserEntity>, error::SystemError> {
        let users = sqlx::query_as::<_, UserEntity>(
            r#"SELECT * FROM "user" WHERE id = ANY($1)"#,
        )
        .bind(user_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    async fn update_training_visibility(
        &self,
        user_id: &Uuid,
        visibility: TrainingVisibility,
    ) -> Result<(), error::SystemError> {
        sqlx::query("UPDATE profile SET training_visibility = $2 WHERE user_id = $1")
            .bind(user_id)
            .bind(visibility)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
