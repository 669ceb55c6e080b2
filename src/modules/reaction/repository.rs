use uuid::Uuid;

use crate::api::error;
use crate::modules::reaction::schema::{ReactionEntity, ReactionType};

#[async_trait::async_trait]
pub trait ReactionRepository: Send + Sync {
    async fn create_reaction(
        &self,
        user_id: &Uuid,
        training_id: &Uuid,
        reaction_type: ReactionType,
    ) -> Result<ReactionEntity, error::SystemError>;

    /// One inner list per requested training id, in request order, each
    /// ordered newest first.
    async fn get_reactions_by_training_ids(
        &self,
        training_ids: &[Uuid],
    ) -> Result<Vec<Vec<ReactionEntity>>, error::SystemError>;

    /// One count per requested training id, in request order.
    async fn get_reaction_count_by_training_ids(
        &self,
        training_ids: &[Uuid],
    ) -> Result<Vec<i64>, error::SystemError>;
}
