use std::collections::HashMap;

use crate::api::{Comment, UserId};

/// Comment texts per user, in arrival order. A user without comments has no
/// entry.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommentsByUser {
    by_user: HashMap<UserId, Vec<String>>,
}

impl CommentsByUser {
    pub fn get(&self, user_id: UserId) -> &[String] {
        self.by_user
            .get(&user_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn count(&self, user_id: UserId) -> usize {
        self.get(user_id).len()
    }

    pub fn total(&self) -> usize {
        self.by_user.values().map(Vec::len).sum()
    }

    #[cfg(test)]
    pub fn contains_user(&self, user_id: UserId) -> bool {
        self.by_user.contains_key(&user_id)
    }

    fn push(&mut self, user_id: UserId, text: String) {
        self.by_user.entry(user_id).or_default().push(text);
    }
}

pub fn group_by_user(records: &[Comment]) -> CommentsByUser {
    records
        .iter()
        .fold(CommentsByUser::default(), |mut grouped, record| {
            grouped.push(record.user_id, record.text.clone());
            grouped
        })
}

/// Returns `current` with `text` appended to `user_id`'s comments. `current`
/// itself is left untouched.
pub fn merge_submission(current: &CommentsByUser, user_id: UserId, text: &str) -> CommentsByUser {
    let mut merged = current.clone();
    merged.push(user_id, text.to_string());
    merged
}
