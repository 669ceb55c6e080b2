use std::sync::Arc;
use uuid::Uuid;

use crate::api::error;
use crate::modules::training::schema::TrainingVisibility;
use crate::modules::user::model::{InsertUser, SignInBody, SignUpBody, UserResponse};
use crate::modules::user::repository::UserRepository;
use crate::utils::{hash_password, verify_password, Claims};
use crate::ENV;

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository + Send + Sync>,
}

impl UserService {
    pub fn with_dependencies(repo: Arc<dyn UserRepository + Send + Sync>) -> Self {
        UserService { repo }
    }

    pub async fn sign_up(&self, body: SignUpBody) -> Result<UserResponse, error::SystemError> {
        let hash_password = hash_password(&body.password)?;

        let new_user = InsertUser { email: body.email, hash_password };
        let user = self.repo.create(&new_user).await?;
        Ok(UserResponse::from(user))
    }

    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn sign_in(&self, body: SignInBody) -> Result<String, error::SystemError> {
        let user = self
            .repo
            .find_by_email(&body.email)
            .await?
            .ok_or(error::SystemError::LoginFailed)?;

        let valid = verify_password(&user.hash_password, &body.password)?;
        if !valid {
            return Err(error::SystemError::LoginFailed);
        }

        let access_token =
            Claims::new(&user.id, ENV.access_token_expiration).encode(ENV.jwt_secret.as_ref())?;
        Ok(access_token)
    }

    pub async fn update_training_visibility(
        &self,
        user_id: Uuid,
        visibility: TrainingVisibility,
    ) -> Result<(), error::SystemError> {
        self.repo.update_training_visibility(&user_id, visibility).await
    }
}
