use actix_web::{get, post, web, HttpRequest};
use uuid::Uuid;

use crate::{
    api::{error, success},
    middlewares::get_claims,
    modules::{
        reaction::{
            model::{CreateReactionBody, TrainingReactionsResponse},
            repository_pg::ReactionRepositoryPg,
            schema::ReactionEntity,
            service::ReactionService,
        },
        training::repository_pg::TrainingRepositoryPg,
    },
};

pub type ReactionSvc = ReactionService<ReactionRepositoryPg, TrainingRepositoryPg>;

#[post("/training/{training_id}")]
pub async fn create_reaction(
    reaction_service: web::Data<ReactionSvc>,
    training_id: web::Path<Uuid>,
    body: web::Json<CreateReactionBody>,
    req: HttpRequest,
) -> Result<success::Success<ReactionEntity>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let reaction =
        reaction_service.create_reaction(user_id, *training_id, body.reaction_type).await?;
    Ok(success::Success::created(Some(reaction)))
}

#[get("/training/{training_id}")]
pub async fn list_training_reactions(
    reaction_service: web::Data<ReactionSvc>,
    training_id: web::Path<Uuid>,
    req: HttpRequest,
) -> Result<success::Success<TrainingReactionsResponse>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let reactions = reaction_service.get_training_reactions(user_id, *training_id).await?;
    Ok(success::Success::ok(Some(reactions)))
}
