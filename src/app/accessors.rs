use super::*;

impl App {
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn theme(&self) -> &'static ThemePalette {
        self.theme
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn users_state(&self) -> LoadState {
        self.users_state
    }

    pub fn comments_state(&self) -> LoadState {
        self.comments_state
    }

    pub fn comments(&self) -> &CommentsByUser {
        &self.comments
    }

    pub fn comment_count(&self, user_id: UserId) -> usize {
        self.comments.count(user_id)
    }

    pub fn draft(&self, user_id: UserId) -> &str {
        self.drafts.get(&user_id).map(String::as_str).unwrap_or("")
    }

    pub fn row_state(&self, user_id: UserId) -> RowState {
        if self.in_flight.get(&user_id).is_some_and(|count| *count > 0) {
            return RowState::Submitting;
        }
        if self.draft(user_id).is_empty() {
            return RowState::Idle;
        }
        RowState::Editing
    }

    pub fn selected_index(&self) -> usize {
        self.selected_user
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.users.get(self.selected_user)
    }

    pub fn detail(&self) -> Option<&DetailPanel> {
        self.detail.as_ref()
    }

    pub fn status(&self) -> &str {
        self.status.as_str()
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn take_action(&mut self) -> Option<AppAction> {
        self.action.take()
    }

    pub(super) fn user_name(&self, user_id: UserId) -> String {
        self.users
            .iter()
            .find(|user| user.id == user_id)
            .map(|user| user.name.clone())
            .unwrap_or_else(|| format!("user {}", user_id))
    }
}
