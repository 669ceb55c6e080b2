use actix_web::{get, post, web, HttpRequest};
use uuid::Uuid;

use crate::{
    api::{error, success},
    middlewares::get_claims,
    modules::{
        friendship::{
            model::{FriendResponse, FriendshipRequestBody},
            repository_pg::FriendshipRepositoryPg,
            schema::FriendshipRequestEntity,
            service::FriendshipRequestService,
        },
        user::repository_pg::UserRepositoryPg,
    },
};

pub type FriendshipSvc = FriendshipRequestService<FriendshipRepositoryPg, UserRepositoryPg>;

#[post("/requests")]
pub async fn send_friendship_request(
    friendship_service: web::Data<FriendshipSvc>,
    body: web::Json<FriendshipRequestBody>,
    req: HttpRequest,
) -> Result<success::Success<FriendshipRequestEntity>, error::Error> {
    let sender_id = get_claims(&req)?.sub;
    let request =
        friendship_service.create_friendship_request(sender_id, body.receiver_id).await?;

    Ok(success::Success::created(Some(request)).message("Friendship request sent successfully"))
}

#[post("/requests/{request_id}/accept")]
pub async fn accept_friendship_request(
    friendship_service: web::Data<FriendshipSvc>,
    request_id: web::Path<Uuid>,
    req: HttpRequest,
) -> Result<success::Success<()>, error::Error> {
    let receiver_id = get_claims(&req)?.sub;
    friendship_service.accept_friendship_request(receiver_id, *request_id).await?;
    Ok(success::Success::no_content())
}

#[post("/requests/{request_id}/reject")]
pub async fn reject_friendship_request(
    friendship_service: web::Data<FriendshipSvc>,
    request_id: web::Path<Uuid>,
    req: HttpRequest,
) -> Result<success::Success<()>, error::Error> {
    let receiver_id = get_claims(&req)?.sub;
    friendship_service.reject_friendship_request(receiver_id, *request_id).await?;
    Ok(success::Success::no_content())
}

#[post("/requests/{request_id}/cancel")]
pub async fn cancel_friendship_request(
    friendship_service: web::Data<FriendshipSvc>,
    request_id: web::Path<Uuid>,
    req: HttpRequest,
) -> Result<success::Success<()>, error::Error> {
    let sender_id = get_claims(&req)?.sub;
    friendship_service.cancel_friendship_request(sender_id, *request_id).await?;
    Ok(success::Success::no_content())
}

#[get("/requests/sent")]
pub async fn list_sent_requests(
    friendship_service: web::Data<FriendshipSvc>,
    req: HttpRequest,
) -> Result<success::Success<Vec<FriendshipRequestEntity>>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let requests = friendship_service.get_pending_requests_sent_by_user(user_id).await?;
    Ok(success::Success::ok(Some(requests)))
}

#[get("/requests/received")]
pub async fn list_received_requests(
    friendship_service: web::Data<FriendshipSvc>,
    req: HttpRequest,
) -> Result<success::Success<Vec<FriendshipRequestEntity>>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let requests = friendship_service.get_pending_requests_received_by_user(user_id).await?;
    Ok(success::Success::ok(Some(requests)))
}

#[get("/")]
pub async fn list_friends(
    friendship_service: web::Data<FriendshipSvc>,
    req: HttpRequest,
) -> Result<success::Success<Vec<FriendResponse>>, error::Error> {
    let user_id = get_claims(&req)?.sub;
    let friends = friendship_service.get_friends(user_id).await?;
    Ok(success::Success::ok(Some(friends)))
}
