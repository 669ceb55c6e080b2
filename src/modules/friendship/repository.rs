use std::collections::HashSet;
use uuid::Uuid;

use crate::api::error;
use crate::modules::friendship::schema::{FriendshipRequestEntity, FriendshipRequestStatus};

/// Directed friendship edges. The workflow writes both directions on
/// acceptance, so `get_user_friends_ids` may read a single direction;
/// `are_users_friends` still checks both orderings rather than trusting
/// one direction to be authoritative.
#[async_trait::async_trait]
pub trait FriendshipRepository {
    async fn get_user_friends_ids(
        &self,
        user_id: &Uuid,
    ) -> Result<HashSet<Uuid>, error::SystemError>;

    async fn are_users_friends(
        &self,
        user_1_id: &Uuid,
        user_2_id: &Uuid,
    ) -> Result<bool, error::SystemError>;

    /// Inserts one directed edge. Idempotent: inserting an edge that
    /// already exists is a no-op.
    async fn create_friendship(
        &self,
        user_1_id: &Uuid,
        user_2_id: &Uuid,
    ) -> Result<(), error::SystemError>;
}

#[async_trait::async_trait]
pub trait FriendshipRequestRepository {
    /// True iff a pending request exists between the unordered pair, in
    /// either direction.
    async fn does_pending_request_exist(
        &self,
        user_1_id: &Uuid,
        user_2_id: &Uuid,
    ) -> Result<bool, error::SystemError>;

    async fn create_pending_request(
        &self,
        sender_id: &Uuid,
        receiver_id: &Uuid,
    ) -> Result<FriendshipRequestEntity, error::SystemError>;

    async fn get_request_by_id(
        &self,
        request_id: &Uuid,
    ) -> Result<Option<FriendshipRequestEntity>, error::SystemError>;

    /// Unconditional overwrite; the workflow is the authority on legality.
    async fn update_status(
        &self,
        request_id: &Uuid,
        status: FriendshipRequestStatus,
    ) -> Result<(), error::SystemError>;

    async fn get_pending_requests_sent_by_user(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<FriendshipRequestEntity>, error::SystemError>;

    async fn get_pending_requests_received_by_user(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<FriendshipRequestEntity>, error::SystemError>;
}

#[async_trait::async_trait]
pub trait FriendshipRepo:
    FriendshipRepository + FriendshipRequestRepository + Send + Sync
{
    /// Marks the request accepted and inserts both directed edges in one
    /// transaction, so an accepted request can never be observed without
    /// its symmetric friendship.
    async fn accept_request_atomic(
        &self,
        request: &FriendshipRequestEntity,
    ) -> Result<(), error::SystemError>;
}
