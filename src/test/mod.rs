//! In-memory repository fakes shared by the service unit tests.

#![allow(dead_code)]
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use uuid::Uuid;

use crate::api::error;
use crate::modules::friendship::repository::{
    FriendshipRepo, FriendshipRepository, FriendshipRequestRepository,
};
use crate::modules::friendship::schema::{FriendshipRequestEntity, FriendshipRequestStatus};
use crate::modules::notification::NotificationPublisher;
use crate::modules::reaction::repository::ReactionRepository;
use crate::modules::reaction::schema::{ReactionEntity, ReactionType};
use crate::modules::training::model::is_training_visible;
use crate::modules::training::repository::TrainingRepository;
use crate::modules::training::schema::{TrainingEntity, TrainingVisibility};
use crate::modules::user::model::InsertUser;
use crate::modules::user::repository::UserRepository;
use crate::modules::user::schema::UserEntity;

fn new_id() -> Uuid {
    Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext))
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<UserEntity>>,
    profiles: Mutex<HashMap<Uuid, TrainingVisibility>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&self, email: &str) -> Uuid {
        let id = new_id();
        self.users.lock().unwrap().push(UserEntity {
            id,
            email: email.to_string(),
            hash_password: String::new(),
        });
        self.profiles.lock().unwrap().insert(id, TrainingVisibility::Public);
        id
    }

    pub fn profile_visibility(&self, user_id: &Uuid) -> Option<TrainingVisibility> {
        self.profiles.lock().unwrap().get(user_id).copied()
    }
}

#[async_trait::async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &InsertUser) -> Result<UserEntity, error::SystemError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
            return Err(error::SystemError::EmailAlreadyExists);
        }
        let created = UserEntity {
            id: new_id(),
            email: user.email.clone(),
            hash_password: user.hash_password.clone(),
        };
        users.push(created.clone());
        self.profiles.lock().unwrap().insert(created.id, TrainingVisibility::Public);
        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>, error::SystemError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn does_user_with_id_exist(&self, user_id: &Uuid) -> Result<bool, error::SystemError> {
        Ok(self.users.lock().unwrap().iter().any(|u| u.id == *user_id))
    }

    async fn get_users_by_ids(
        &self,
        user_ids: &[Uuid],
    ) -> Result<Vec<UserEntity>, error::SystemError> {
        let users = self.users.lock().unwrap();
        Ok(user_ids
            .iter()
            .filter_map(|id| users.iter().find(|u| u.id == *id).cloned())
            .collect())
    }

    async fn update_training_visibility(
        &self,
        user_id: &Uuid,
        visibility: TrainingVisibility,
    ) -> Result<(), error::SystemError> {
        self.profiles.lock().unwrap().insert(*user_id, visibility);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryFriendshipRepository {
    edges: Mutex<HashSet<(Uuid, Uuid)>>,
    requests: Mutex<Vec<FriendshipRequestEntity>>,
}

impl InMemoryFriendshipRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Symmetric helper for test setup.
    pub fn add_friendship(&self, user_1_id: &Uuid, user_2_id: &Uuid) {
        let mut edges = self.edges.lock().unwrap();
        edges.insert((*user_1_id, *user_2_id));
        edges.insert((*user_2_id, *user_1_id));
    }

    /// One direction only, for exercising unordered lookups.
    pub fn add_directed_edge(&self, user_1_id: &Uuid, user_2_id: &Uuid) {
        self.edges.lock().unwrap().insert((*user_1_id, *user_2_id));
    }

    pub fn insert_request(&self, request: FriendshipRequestEntity) {
        self.requests.lock().unwrap().push(request);
    }

    pub fn edge_count(&self) -> usize {
        self.edges.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl FriendshipRepository for InMemoryFriendshipRepository {
    async fn get_user_friends_ids(
        &self,
        user_id: &Uuid,
    ) -> Result<HashSet<Uuid>, error::SystemError> {
        Ok(self
            .edges
            .lock()
            .unwrap()
            .iter()
            .filter(|(from, _)| from == user_id)
            .map(|(_, to)| *to)
            .collect())
    }

    async fn are_users_friends(
        &self,
        user_1_id: &Uuid,
        user_2_id: &Uuid,
    ) -> Result<bool, error::SystemError> {
        let edges = self.edges.lock().unwrap();
        Ok(edges.contains(&(*user_1_id, *user_2_id)) || edges.contains(&(*user_2_id, *user_1_id)))
    }

    async fn create_friendship(
        &self,
        user_1_id: &Uuid,
        user_2_id: &Uuid,
    ) -> Result<(), error::SystemError> {
        self.edges.lock().unwrap().insert((*user_1_id, *user_2_id));
        Ok(())
    }
}

#[async_trait::async_trait]
impl FriendshipRequestRepository for InMemoryFriendshipRepository {
    async fn does_pending_request_exist(
        &self,
        user_1_id: &Uuid,
        user_2_id: &Uuid,
    ) -> Result<bool, error::SystemError> {
        Ok(self.requests.lock().unwrap().iter().any(|r| {
            r.status == FriendshipRequestStatus::Pending
                && ((r.sender_id == *user_1_id && r.receiver_id == *user_2_id)
                    || (r.sender_id == *user_2_id && r.receiver_id == *user_1_id))
        }))
    }

    async fn create_pending_request(
        &self,
        sender_id: &Uuid,
        receiver_id: &Uuid,
    ) -> Result<FriendshipRequestEntity, error::SystemError> {
        let request = FriendshipRequestEntity {
            id: new_id(),
            sender_id: *sender_id,
            receiver_id: *receiver_id,
            status: FriendshipRequestStatus::Pending,
            timestamp: Utc::now(),
        };
        self.requests.lock().unwrap().push(request.clone());
        Ok(request)
    }

    async fn get_request_by_id(
        &self,
        request_id: &Uuid,
    ) -> Result<Option<FriendshipRequestEntity>, error::SystemError> {
        Ok(self.requests.lock().unwrap().iter().find(|r| r.id == *request_id).cloned())
    }

    async fn update_status(
        &self,
        request_id: &Uuid,
        status: FriendshipRequestStatus,
    ) -> Result<(), error::SystemError> {
        if let Some(request) =
            self.requests.lock().unwrap().iter_mut().find(|r| r.id == *request_id)
        {
            request.status = status;
        }
        Ok(())
    }

    async fn get_pending_requests_sent_by_user(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<FriendshipRequestEntity>, error::SystemError> {
        let mut requests: Vec<FriendshipRequestEntity> = self
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.status == FriendshipRequestStatus::Pending && r.sender_id == *user_id)
            .cloned()
            .collect();
        requests.sort_by_key(|r| r.timestamp);
        Ok(requests)
    }

    async fn get_pending_requests_received_by_user(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<FriendshipRequestEntity>, error::SystemError> {
        let mut requests: Vec<FriendshipRequestEntity> = self
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.status == FriendshipRequestStatus::Pending && r.receiver_id == *user_id)
            .cloned()
            .collect();
        requests.sort_by_key(|r| r.timestamp);
        Ok(requests)
    }
}

#[async_trait::async_trait]
impl FriendshipRepo for InMemoryFriendshipRepository {
    async fn accept_request_atomic(
        &self,
        request: &FriendshipRequestEntity,
    ) -> Result<(), error::SystemError> {
        self.update_status(&request.id, FriendshipRequestStatus::Accepted).await?;
        let mut edges = self.edges.lock().unwrap();
        edges.insert((request.sender_id, request.receiver_id));
        edges.insert((request.receiver_id, request.sender_id));
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryTrainingRepository {
    trainings: Mutex<Vec<TrainingEntity>>,
    profiles: Mutex<HashMap<Uuid, TrainingVisibility>>,
    friends: Mutex<HashSet<(Uuid, Uuid)>>,
}

impl InMemoryTrainingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_profile_visibility(&self, user_id: &Uuid, visibility: TrainingVisibility) {
        self.profiles.lock().unwrap().insert(*user_id, visibility);
    }

    pub fn add_friendship(&self, user_1_id: &Uuid, user_2_id: &Uuid) {
        let mut friends = self.friends.lock().unwrap();
        friends.insert((*user_1_id, *user_2_id));
        friends.insert((*user_2_id, *user_1_id));
    }

    fn is_friend(&self, request_user_id: &Uuid, owner_id: &Uuid) -> bool {
        self.friends.lock().unwrap().contains(&(*request_user_id, *owner_id))
    }
}

#[async_trait::async_trait]
impl TrainingRepository for InMemoryTrainingRepository {
    async fn create_training(
        &self,
        user_id: &Uuid,
        name: &str,
        start_time: DateTime<Utc>,
        end_time: Option<DateTime<Utc>>,
        visibility: Option<TrainingVisibility>,
    ) -> Result<TrainingEntity, error::SystemError> {
        let training = TrainingEntity {
            id: new_id(),
            user_id: *user_id,
            name: name.to_string(),
            start_time,
            end_time,
            visibility,
        };
        self.trainings.lock().unwrap().push(training.clone());
        Ok(training)
    }

    async fn get_training_by_id(
        &self,
        request_user_id: &Uuid,
        training_id: &Uuid,
    ) -> Result<Option<TrainingEntity>, error::SystemError> {
        let trainings = self.trainings.lock().unwrap();
        Ok(trainings.iter().find(|t| t.id == *training_id).filter(|t| {
            is_training_visible(
                t,
                self.profiles.lock().unwrap().get(&t.user_id).copied(),
                request_user_id,
                self.is_friend(request_user_id, &t.user_id),
            )
        }).cloned())
    }

    async fn get_user_trainings(
        &self,
        request_user_id: &Uuid,
        user_id: &Uuid,
    ) -> Result<Vec<TrainingEntity>, error::SystemError> {
        let mut visible: Vec<TrainingEntity> = self
            .trainings
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == *user_id)
            .filter(|t| {
                is_training_visible(
                    t,
                    self.profiles.lock().unwrap().get(&t.user_id).copied(),
                    request_user_id,
                    self.is_friend(request_user_id, &t.user_id),
                )
            })
            .cloned()
            .collect();
        visible.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Ok(visible)
    }
}

#[derive(Default)]
pub struct InMemoryReactionRepository {
    reactions: Mutex<Vec<ReactionEntity>>,
}

impl InMemoryReactionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ReactionRepository for InMemoryReactionRepository {
    async fn create_reaction(
        &self,
        user_id: &Uuid,
        training_id: &Uuid,
        reaction_type: ReactionType,
    ) -> Result<ReactionEntity, error::SystemError> {
        let reaction = ReactionEntity {
            id: new_id(),
            user_id: *user_id,
            training_id: *training_id,
            reaction_type,
            created_at: Utc::now(),
        };
        self.reactions.lock().unwrap().push(reaction.clone());
        Ok(reaction)
    }

    async fn get_reactions_by_training_ids(
        &self,
        training_ids: &[Uuid],
    ) -> Result<Vec<Vec<ReactionEntity>>, error::SystemError> {
        let reactions = self.reactions.lock().unwrap();
        Ok(training_ids
            .iter()
            .map(|training_id| {
                // insertion order reversed, newest first
                reactions
                    .iter()
                    .filter(|r| r.training_id == *training_id)
                    .rev()
                    .cloned()
                    .collect()
            })
            .collect())
    }

    async fn get_reaction_count_by_training_ids(
        &self,
        training_ids: &[Uuid],
    ) -> Result<Vec<i64>, error::SystemError> {
        let reactions = self.reactions.lock().unwrap();
        Ok(training_ids
            .iter()
            .map(|training_id| {
                reactions.iter().filter(|r| r.training_id == *training_id).count() as i64
            })
            .collect())
    }
}

pub struct RecordingPublisher {
    published: Mutex<Vec<(Uuid, Uuid)>>,
    fail_after: Option<usize>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        RecordingPublisher { published: Mutex::new(Vec::new()), fail_after: None }
    }

    /// Succeeds for the first `n` publishes, then fails every call.
    pub fn failing_after(n: usize) -> Self {
        RecordingPublisher { published: Mutex::new(Vec::new()), fail_after: Some(n) }
    }

    pub fn published(&self) -> Vec<(Uuid, Uuid)> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl NotificationPublisher for RecordingPublisher {
    async fn publish_new_training(
        &self,
        friend_id: &Uuid,
        training_id: &Uuid,
    ) -> Result<(), error::SystemError> {
        let mut published = self.published.lock().unwrap();
        if let Some(n) = self.fail_after {
            if published.len() >= n {
                return Err(error::SystemError::bad_request("notification bus unavailable"));
            }
        }
        published.push((*friend_id, *training_id));
        Ok(())
    }
}
