use super::Entity;
use serde::{Deserialize, Serialize};

/// A user attending an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub user_id: String,
    pub event_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewParticipant {
    pub user_id: String,
    pub event_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantPatch {
    pub user_id: Option<String>,
    pub event_id: Option<String>,
}

impl Entity for Participant {
    const KIND: &'static str = "Participant";

    type New = NewParticipant;
    type Patch = ParticipantPatch;

    fn create(id: String, data: NewParticipant) -> Self {
        Self {
            id,
            user_id: data.user_id,
            event_id: data.event_id,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: ParticipantPatch) {
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
        if let Some(event_id) = patch.event_id {
            self.event_id = event_id;
        }
    }
}
