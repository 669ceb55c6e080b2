use actix_web::{get, post, web, HttpRequest};
use uuid::Uuid;

use crate::{
    api::{error, success},
    middlewares::get_claims,
    modules::{
        friendship::repository_pg::FriendshipRepositoryPg,
        notification::RedisNotificationPublisher,
        training::{
            model::CreateTrainingBody, repository_pg::TrainingRepositoryPg,
            schema::TrainingEntity, service::TrainingService,
        },
    },
    utils::ValidatedJson,
};

pub type TrainingSvc =
    TrainingService<TrainingRepositoryPg, FriendshipRepositoryPg, RedisNotificationPublisher>;

#[post("/")]
pub async fn create_training(
    training_service: web::Data<TrainingSvc>,
    body: ValidatedJson<CreateTrainingBody>,
    req: HttpRequest,
) -> Result<success::Success<TrainingEntity>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let body = body.0;
    let training = training_service
        .create_training(user_id, body.name, body.start_time, body.end_time, body.visibility)
        .await?;
    Ok(success::Success::created(Some(training)).message("Training created successfully"))
}

#[get("/{training_id}")]
pub async fn get_training(
    training_service: web::Data<TrainingSvc>,
    training_id: web::Path<Uuid>,
    req: HttpRequest,
) -> Result<success::Success<TrainingEntity>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let training = training_service.get_training(user_id, *training_id).await?;
    Ok(success::Success::ok(Some(training)))
}

#[get("/user/{user_id}")]
pub async fn list_user_trainings(
    training_service: web::Data<TrainingSvc>,
    user_id: web::Path<Uuid>,
    req: HttpRequest,
) -> Result<success::Success<Vec<TrainingEntity>>, error::Error> {
    let request_user_id = get_claims(&req)?.sub;
    let trainings = training_service.get_user_trainings(request_user_id, *user_id).await?;
    Ok(success::Success::ok(Some(trainings)))
}
