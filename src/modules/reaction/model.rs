use serde::{Deserialize, Serialize};

use crate::modules::reaction::schema::{ReactionEntity, ReactionType};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateReactionBody {
    pub reaction_type: ReactionType,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrainingReactionsResponse {
    pub reactions: Vec<ReactionEntity>,
    pub count: i64,
}
