use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::modules::training::schema::{TrainingEntity, TrainingVisibility};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTrainingBody {
    #[validate(length(min = 1))]
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub visibility: Option<TrainingVisibility>,
}

/// Per-training override wins, then the owner's profile default, then
/// public (the profile row is normally always there, this is only a
/// fallback for a missing one).
pub fn effective_visibility(
    training: &TrainingEntity,
    profile_default: Option<TrainingVisibility>,
) -> TrainingVisibility {
    training.visibility.or(profile_default).unwrap_or(TrainingVisibility::Public)
}

/// The visibility rule. The Pg repository expresses the same rule in SQL;
/// this form is what the in-memory store and the tests run against.
pub fn is_training_visible(
    training: &TrainingEntity,
    profile_default: Option<TrainingVisibility>,
    request_user_id: &Uuid,
    is_friend_of_owner: bool,
) -> bool {
    if training.user_id == *request_user_id {
        return true;
    }
    match effective_visibility(training, profile_default) {
        TrainingVisibility::Public => true,
        TrainingVisibility::Private => false,
        TrainingVisibility::OnlyFriends => is_friend_of_owner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn training(owner: Uuid, visibility: Option<TrainingVisibility>) -> TrainingEntity {
        TrainingEntity {
            id: Uuid::new_v4(),
            user_id: owner,
            name: "morning run".into(),
            start_time: Utc::now(),
            end_time: None,
            visibility,
        }
    }

    #[test]
    fn owner_always_sees_own_training() {
        let owner = Uuid::new_v4();
        let t = training(owner, Some(TrainingVisibility::Private));
        assert!(is_training_visible(&t, Some(TrainingVisibility::Private), &owner, false));
    }

    #[test]
    fn private_is_invisible_even_to_a_friend() {
        let owner = Uuid::new_v4();
        let t = training(owner, Some(TrainingVisibility::Private));
        assert!(!is_training_visible(&t, None, &Uuid::new_v4(), true));
    }

    #[test]
    fn only_friends_default_applies_when_training_has_no_override() {
        let owner = Uuid::new_v4();
        let t = training(owner, None);
        let stranger = Uuid::new_v4();
        assert!(is_training_visible(&t, Some(TrainingVisibility::OnlyFriends), &stranger, true));
        assert!(!is_training_visible(&t, Some(TrainingVisibility::OnlyFriends), &stranger, false));
    }

    #[test]
    fn public_is_visible_to_a_stranger() {
        let owner = Uuid::new_v4();
        let t = training(owner, None);
        assert!(is_training_visible(&t, Some(TrainingVisibility::Public), &Uuid::new_v4(), false));
    }

    #[test]
    fn training_override_beats_profile_default() {
        let owner = Uuid::new_v4();
        let t = training(owner, Some(TrainingVisibility::Private));
        // a public profile default does not open up a private training
        assert!(!is_training_visible(&t, Some(TrainingVisibility::Public), &Uuid::new_v4(), true));
    }

    #[test]
    fn missing_profile_falls_back_to_public() {
        let owner = Uuid::new_v4();
        let t = training(owner, None);
        assert!(is_training_visible(&t, None, &Uuid::new_v4(), false));
    }
}
