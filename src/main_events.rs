use std::sync::mpsc::Receiver;

use crate::api::{Comment, User, UserId};
use crate::app::App;

/// Outcome of one background request, applied on the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    UsersLoaded(Vec<User>),
    UsersFailed,
    CommentsLoaded(Vec<Comment>),
    CommentsFailed,
    CommentSubmitted { user_id: UserId, text: String },
    CommentSubmitFailed { user_id: UserId },
}

pub fn handle_events(app: &mut App, event_rx: &Receiver<AppEvent>) {
    while let Ok(event) = event_rx.try_recv() {
        apply_event(app, event);
    }
}

pub fn apply_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::UsersLoaded(users) => {
            app.set_users(users);
            app.set_status("");
        }
        AppEvent::UsersFailed => {
            app.users_failed();
            app.set_status("");
        }
        AppEvent::CommentsLoaded(records) => app.set_comment_records(&records),
        AppEvent::CommentsFailed => app.comments_failed(),
        AppEvent::CommentSubmitted { user_id, text } => app.finish_submit(user_id, &text),
        AppEvent::CommentSubmitFailed { user_id } => app.fail_submit(user_id),
    }
}
