use super::*;

impl App {
    pub fn set_users(&mut self, users: Vec<User>) {
        let selected_id = self.selected_user().map(|user| user.id);
        self.users = users;
        self.users_state = LoadState::Loaded;
        if self.users.is_empty() {
            self.mode = Mode::Normal;
        }
        self.selected_user = selected_id
            .and_then(|id| self.users.iter().position(|user| user.id == id))
            .unwrap_or(0);
    }

    /// Keeps whatever rows were already shown.
    pub fn users_failed(&mut self) {
        self.users_state = LoadState::Failed;
    }

    pub fn set_comment_records(&mut self, records: &[Comment]) {
        self.comments = group_by_user(records);
        self.comments_state = LoadState::Loaded;
    }

    pub fn comments_failed(&mut self) {
        self.comments_state = LoadState::Failed;
    }

    pub fn request_reload(&mut self) {
        self.users_state = LoadState::Pending;
        self.comments_state = LoadState::Pending;
        self.status = "Reloading".to_string();
        self.action = Some(AppAction::Reload);
    }

    pub(super) fn request_submit(&mut self, user_id: UserId) {
        let text = self.draft(user_id).to_string();
        if text.trim().is_empty() {
            self.status = "Nothing to submit".to_string();
            return;
        }
        *self.in_flight.entry(user_id).or_insert(0) += 1;
        self.status.clear();
        self.action = Some(AppAction::SubmitComment { user_id, text });
    }

    pub fn finish_submit(&mut self, user_id: UserId, text: &str) {
        self.end_in_flight(user_id);
        self.comments = merge_submission(&self.comments, user_id, text);
        self.drafts.remove(&user_id);
        self.status = format!("Comment saved for {}", self.user_name(user_id));
    }

    /// The draft stays in place so the operator can submit again.
    pub fn fail_submit(&mut self, user_id: UserId) {
        self.end_in_flight(user_id);
    }

    fn end_in_flight(&mut self, user_id: UserId) {
        if let Some(count) = self.in_flight.get_mut(&user_id) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.in_flight.remove(&user_id);
            }
        }
    }

    #[cfg(test)]
    pub fn edit_draft(&mut self, user_id: UserId, text: &str) {
        self.drafts.insert(user_id, text.to_string());
    }

    pub(super) fn push_draft_char(&mut self, ch: char) {
        if let Some(user_id) = self.selected_user().map(|user| user.id) {
            self.drafts.entry(user_id).or_default().push(ch);
        }
    }

    pub(super) fn pop_draft_char(&mut self) {
        if let Some(user_id) = self.selected_user().map(|user| user.id)
            && let Some(draft) = self.drafts.get_mut(&user_id)
        {
            draft.pop();
        }
    }

    pub(super) fn clear_draft(&mut self) {
        if let Some(user_id) = self.selected_user().map(|user| user.id) {
            self.drafts.remove(&user_id);
        }
    }

    #[cfg(test)]
    pub fn select_user(&mut self, user_id: UserId) -> bool {
        match self.users.iter().position(|user| user.id == user_id) {
            Some(index) => {
                self.selected_user = index;
                true
            }
            None => false,
        }
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        if self.users.is_empty() {
            self.selected_user = 0;
            return;
        }
        let last = self.users.len() - 1;
        self.selected_user = self.selected_user.saturating_add_signed(delta).min(last);
    }

    pub(super) fn select_last(&mut self) {
        self.selected_user = self.users.len().saturating_sub(1);
    }

    pub fn open_detail(&mut self) {
        let (user_id, user_name) = match self.selected_user() {
            Some(user) => (user.id, user.name.clone()),
            None => return,
        };
        let comments = self.comments.get(user_id).to_vec();
        debug!(user_id, count = comments.len(), "opened comment drawer");
        self.detail = Some(DetailPanel {
            user_id,
            user_name,
            comments,
            scroll: 0,
            max_scroll: None,
        });
    }

    pub fn close_detail(&mut self) {
        if let Some(detail) = self.detail.take() {
            debug!(user_id = detail.user_id, "closed comment drawer");
        }
    }

    pub(super) fn scroll_detail(&mut self, delta: i16) {
        if let Some(detail) = self.detail.as_mut() {
            let max_scroll = detail.max_scroll.unwrap_or(u16::MAX);
            detail.scroll = detail.scroll.saturating_add_signed(delta).min(max_scroll);
        }
    }

    pub fn set_detail_max_scroll(&mut self, max_scroll: u16) {
        if let Some(detail) = self.detail.as_mut() {
            detail.max_scroll = Some(max_scroll);
            if detail.scroll > max_scroll {
                detail.scroll = max_scroll;
            }
        }
    }
}
