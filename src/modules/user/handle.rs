use actix_web::{patch, post, web, HttpRequest};

use crate::{
    api::{error, success},
    middlewares::get_claims,
    modules::user::{
        model::{SignInBody, SignUpBody, TokenResponse, UpdateTrainingVisibilityBody, UserResponse},
        service::UserService,
    },
    utils::ValidatedJson,
};

#[post("/sign-up")]
pub async fn sign_up(
    user_service: web::Data<UserService>,
    body: ValidatedJson<SignUpBody>,
) -> Result<success::Success<UserResponse>, error::Error> {
    let user = user_service.sign_up(body.0).await?;
    Ok(success::Success::created(Some(user)).message("User created successfully"))
}

#[post("/sign-in")]
pub async fn sign_in(
    user_service: web::Data<UserService>,
    body: ValidatedJson<SignInBody>,
) -> Result<success::Success<TokenResponse>, error::Error> {
    let jwt = user_service.sign_in(body.0).await?;
    Ok(success::Success::ok(Some(TokenResponse { jwt })))
}

#[patch("/me/training-visibility")]
pub async fn update_training_visibility(
    user_service: web::Data<UserService>,
    body: web::Json<UpdateTrainingVisibilityBody>,
    req: HttpRequest,
) -> Result<success::Success<()>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    user_service.update_training_visibility(user_id, body.training_visibility).await?;
    Ok(success::Success::no_content())
}
