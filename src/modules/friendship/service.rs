use std::sync::Arc;
use uuid::Uuid;

use crate::{
    api::error,
    modules::{
        friendship::{
            model::FriendResponse,
            repository::FriendshipRepo,
            schema::{FriendshipRequestEntity, FriendshipRequestStatus},
        },
        user::repository::UserRepository,
    },
};

/// The single authority for friendship-request state transitions.
/// Repositories only persist; every legality rule lives here.
#[derive(Clone)]
pub struct FriendshipRequestService<R, U>
where
    R: FriendshipRepo + Send + Sync,
    U: UserRepository + Send + Sync,
{
    friendship_repo: Arc<R>,
    user_repo: Arc<U>,
}

impl<R, U> FriendshipRequestService<R, U>
where
    R: FriendshipRepo + Send + Sync,
    U: UserRepository + Send + Sync,
{
    pub fn with_dependencies(friendship_repo: Arc<R>, user_repo: Arc<U>) -> Self {
        FriendshipRequestService { friendship_repo, user_repo }
    }

    /// Checks run in a fixed order and short-circuit: receiver existence,
    /// then friendship, then duplicate pending request. The check-then-insert
    /// window is backstopped by the pending-pair unique index, which maps a
    /// raced duplicate to the same error kind.
    pub async fn create_friendship_request(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
    ) -> Result<FriendshipRequestEntity, error::SystemError> {
        if !self.user_repo.does_user_with_id_exist(&receiver_id).await? {
            return Err(error::SystemError::ReceiverDoesNotExist);
        }
        if self.friendship_repo.are_users_friends(&sender_id, &receiver_id).await? {
            return Err(error::SystemError::UsersAreAlreadyFriends);
        }
        if self.friendship_repo.does_pending_request_exist(&sender_id, &receiver_id).await? {
            return Err(error::SystemError::FriendshipRequestAlreadyCreated);
        }
        self.friendship_repo.create_pending_request(&sender_id, &receiver_id).await
    }

    /// Only the receiver may accept, and only while the request is pending.
    pub async fn accept_friendship_request(
        &self,
        user_id: Uuid,
        friendship_request_id: Uuid,
    ) -> Result<(), error::SystemError> {
        let request =
            self.get_pending_request_received_by_user(user_id, friendship_request_id).await?;
        self.friendship_repo.accept_request_atomic(&request).await
    }

    /// Only the receiver may reject.
    pub async fn reject_friendship_request(
        &self,
        user_id: Uuid,
        friendship_request_id: Uuid,
    ) -> Result<(), error::SystemError> {
        self.get_pending_request_received_by_user(user_id, friendship_request_id).await?;
        self.friendship_repo
            .update_status(&friendship_request_id, FriendshipRequestStatus::Rejected)
            .await
    }

    /// Only the sender may cancel.
    pub async fn cancel_friendship_request(
        &self,
        user_id: Uuid,
        friendship_request_id: Uuid,
    ) -> Result<(), error::SystemError> {
        self.get_pending_request_sent_by_user(user_id, friendship_request_id).await?;
        self.friendship_repo
            .update_status(&friendship_request_id, FriendshipRequestStatus::Cancelled)
            .await
    }

    pub async fn get_pending_requests_sent_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<FriendshipRequestEntity>, error::SystemError> {
        self.friendship_repo.get_pending_requests_sent_by_user(&user_id).await
    }

    pub async fn get_pending_requests_received_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<FriendshipRequestEntity>, error::SystemError> {
        self.friendship_repo.get_pending_requests_received_by_user(&user_id).await
    }

    pub async fn get_friends(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<FriendResponse>, error::SystemError> {
        let friend_ids: Vec<Uuid> =
            self.friendship_repo.get_user_friends_ids(&user_id).await?.into_iter().collect();
        let friends = self.user_repo.get_users_by_ids(&friend_ids).await?;
        Ok(friends.into_iter().map(FriendResponse::from).collect())
    }

    async fn get_pending_request(
        &self,
        friendship_request_id: Uuid,
    ) -> Result<FriendshipRequestEntity, error::SystemError> {
        match self.friendship_repo.get_request_by_id(&friendship_request_id).await? {
            Some(request) if request.status == FriendshipRequestStatus::Pending => Ok(request),
            // missing and non-pending collapse into one kind
            _ => Err(error::SystemError::PendingFriendshipRequestForUserDoesNotExist),
        }
    }

    async fn get_pending_request_received_by_user(
        &self,
        user_id: Uuid,
        friendship_request_id: Uuid,
    ) -> Result<FriendshipRequestEntity, error::SystemError> {
        let request = self.get_pending_request(friendship_request_id).await?;
        if request.receiver_id != user_id {
            return Err(error::SystemError::PendingFriendshipRequestForUserDoesNotExist);
        }
        Ok(request)
    }

    async fn get_pending_request_sent_by_user(
        &self,
        user_id: Uuid,
        friendship_request_id: Uuid,
    ) -> Result<FriendshipRequestEntity, error::SystemError> {
        let request = self.get_pending_request(friendship_request_id).await?;
        if request.sender_id != user_id {
            return Err(error::SystemError::PendingFriendshipRequestForUserDoesNotExist);
        }
        Ok(request)
    }
}
