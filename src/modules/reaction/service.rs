use std::sync::Arc;
use uuid::Uuid;

use crate::{
    api::error,
    modules::{
        reaction::{
            model::TrainingReactionsResponse,
            repository::ReactionRepository,
            schema::{ReactionEntity, ReactionType},
        },
        training::repository::TrainingRepository,
    },
};

#[derive(Clone)]
pub struct ReactionService<R, T>
where
    R: ReactionRepository,
    T: TrainingRepository,
{
    reaction_repo: Arc<R>,
    training_repo: Arc<T>,
}

impl<R, T> ReactionService<R, T>
where
    R: ReactionRepository,
    T: TrainingRepository,
{
    pub fn with_dependencies(reaction_repo: Arc<R>, training_repo: Arc<T>) -> Self {
        ReactionService { reaction_repo, training_repo }
    }

    /// Reacting requires the training to be visible to the reactor; an
    /// invisible training reads as not found here too.
    pub async fn create_reaction(
        &self,
        user_id: Uuid,
        training_id: Uuid,
        reaction_type: ReactionType,
    ) -> Result<ReactionEntity, error::SystemError> {
        self.training_repo
            .get_training_by_id(&user_id, &training_id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Training not found"))?;
        self.reaction_repo.create_reaction(&user_id, &training_id, reaction_type).await
    }

    pub async fn get_training_reactions(
        &self,
        request_user_id: Uuid,
        training_id: Uuid,
    ) -> Result<TrainingReactionsResponse, error::SystemError> {
        self.training_repo
            .get_training_by_id(&request_user_id, &training_id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Training not found"))?;

        let ids = [training_id];
        let (mut reactions, counts) = tokio::try_join!(
            self.reaction_repo.get_reactions_by_training_ids(&ids),
            self.reaction_repo.get_reaction_count_by_training_ids(&ids),
        )?;
        Ok(TrainingReactionsResponse {
            reactions: reactions.pop().unwrap_or_default(),
            count: counts.first().copied().unwrap_or(0),
        })
    }
}
