use serde::{Deserialize, Serialize};

pub type UserId = i64;

/// A directory entry. Fields beyond these four are ignored.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub username: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Comment {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(rename = "comment", default)]
    pub text: String,
}

#[cfg(test)]
impl Comment {
    pub fn new(user_id: UserId, text: impl Into<String>) -> Self {
        Self {
            user_id,
            text: text.into(),
        }
    }
}
