use super::Entity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl Entity for User {
    const KIND: &'static str = "User";

    type New = NewUser;
    type Patch = UserPatch;

    fn create(id: String, data: NewUser) -> Self {
        Self {
            id,
            username: data.username,
            email: data.email,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: UserPatch) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}
