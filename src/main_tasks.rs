use std::future::Future;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use anyhow::Result;
use tracing::{error, info, warn};

use crate::api::{ApiClient, CommentStoreApi, DirectoryApi, UserId};
use crate::config::Config;
use crate::main_events::AppEvent;

#[derive(Debug, Clone)]
pub struct Endpoints {
    pub directory_url: String,
    pub comment_store_url: String,
}

impl Endpoints {
    pub fn from_config(config: &Config) -> Self {
        Self {
            directory_url: config.directory_url.clone(),
            comment_store_url: config.comment_store_url.clone(),
        }
    }
}

/// Fetches users and comments independently; either may land first.
pub fn start_initial_load(endpoints: &Endpoints, event_tx: Sender<AppEvent>) {
    spawn_request(
        endpoints.clone(),
        event_tx.clone(),
        AppEvent::UsersFailed,
        |client| async move { load_users(&client).await },
    );
    spawn_request(
        endpoints.clone(),
        event_tx,
        AppEvent::CommentsFailed,
        |client| async move { load_comments(&client).await },
    );
}

pub fn start_submit_comment(
    endpoints: &Endpoints,
    user_id: UserId,
    text: String,
    event_tx: Sender<AppEvent>,
) -> JoinHandle<()> {
    spawn_request(
        endpoints.clone(),
        event_tx,
        AppEvent::CommentSubmitFailed { user_id },
        move |client| async move { submit_comment(&client, user_id, text).await },
    )
}

fn spawn_request<F, Fut>(
    endpoints: Endpoints,
    event_tx: Sender<AppEvent>,
    on_setup_failure: AppEvent,
    request: F,
) -> JoinHandle<()>
where
    F: FnOnce(ApiClient) -> Fut + Send + 'static,
    Fut: Future<Output = AppEvent>,
{
    thread::spawn(move || {
        let event = match run_request(&endpoints, request) {
            Ok(event) => event,
            Err(error) => {
                error!(%error, "request could not start");
                on_setup_failure
            }
        };
        // A closed channel means the UI is gone; the result is dropped.
        let _ = event_tx.send(event);
    })
}

fn run_request<F, Fut>(endpoints: &Endpoints, request: F) -> Result<AppEvent>
where
    F: FnOnce(ApiClient) -> Fut,
    Fut: Future<Output = AppEvent>,
{
    let client = ApiClient::new(&endpoints.directory_url, &endpoints.comment_store_url)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(request(client)))
}

pub async fn load_users(api: &dyn DirectoryApi) -> AppEvent {
    match api.fetch_users().await {
        Ok(users) => {
            info!(count = users.len(), "loaded users");
            AppEvent::UsersLoaded(users)
        }
        Err(error) => {
            warn!(kind = error.kind(), %error, "user directory fetch failed");
            AppEvent::UsersFailed
        }
    }
}

pub async fn load_comments(api: &dyn CommentStoreApi) -> AppEvent {
    match api.list_comments().await {
        Ok(records) => {
            info!(count = records.len(), "loaded comments");
            AppEvent::CommentsLoaded(records)
        }
        Err(error) => {
            warn!(kind = error.kind(), %error, "comment fetch failed");
            AppEvent::CommentsFailed
        }
    }
}

pub async fn submit_comment(api: &dyn CommentStoreApi, user_id: UserId, text: String) -> AppEvent {
    match api.submit_comment(user_id, &text).await {
        Ok(response) => {
            info!(user_id, %response, "comment saved");
            AppEvent::CommentSubmitted { user_id, text }
        }
        Err(error) => {
            warn!(user_id, kind = error.kind(), %error, "comment submit failed");
            AppEvent::CommentSubmitFailed { user_id }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::mpsc;
    use std::time::Duration;

    use async_trait::async_trait;
    use reqwest::StatusCode;

    use super::{Endpoints, load_comments, load_users, start_submit_comment, submit_comment};
    use crate::api::{ApiError, Comment, CommentStoreApi, DirectoryApi, User, UserId};
    use crate::app::{App, RowState};
    use crate::config::Config;
    use crate::main_events::{AppEvent, apply_event};

    struct FakeDirectory {
        users: Option<Vec<User>>,
    }

    #[async_trait]
    impl DirectoryApi for FakeDirectory {
        async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
            match &self.users {
                Some(users) => Ok(users.clone()),
                None => Err(ApiError::Status {
                    url: "http://directory.test/users".to_string(),
                    status: StatusCode::BAD_GATEWAY,
                }),
            }
        }
    }

    #[derive(Default)]
    struct FakeStore {
        records: Mutex<Vec<Comment>>,
        reject_posts: bool,
        undecodable: bool,
    }

    #[async_trait]
    impl CommentStoreApi for FakeStore {
        async fn list_comments(&self) -> Result<Vec<Comment>, ApiError> {
            if self.undecodable {
                let source = serde_json::from_str::<serde_json::Value>("<html>")
                    .expect_err("invalid json");
                return Err(ApiError::Decode {
                    url: "http://store.test/comments".to_string(),
                    source,
                });
            }
            Ok(self.records.lock().expect("records lock").clone())
        }

        async fn submit_comment(
            &self,
            user_id: UserId,
            text: &str,
        ) -> Result<serde_json::Value, ApiError> {
            if self.reject_posts {
                return Err(ApiError::Status {
                    url: "http://store.test/comments".to_string(),
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                });
            }
            self.records
                .lock()
                .expect("records lock")
                .push(Comment::new(user_id, text));
            Ok(serde_json::json!({"message": "Comment added"}))
        }
    }

    fn ervin() -> User {
        User {
            id: 1,
            name: "Ervin Howell".to_string(),
            email: "e@h.com".to_string(),
            username: "Antonette".to_string(),
        }
    }

    #[tokio::test]
    async fn directory_failure_leaves_table_empty() {
        let mut app = App::new(Config::default());

        let event = load_users(&FakeDirectory { users: None }).await;

        assert_eq!(event, AppEvent::UsersFailed);
        apply_event(&mut app, event);
        assert!(app.users().is_empty());
    }

    #[tokio::test]
    async fn loaded_users_and_empty_comments_render_one_plain_row() {
        let mut app = App::new(Config::default());
        let directory = FakeDirectory {
            users: Some(vec![ervin()]),
        };

        apply_event(&mut app, load_users(&directory).await);
        apply_event(&mut app, load_comments(&FakeStore::default()).await);

        assert_eq!(app.users(), [ervin()]);
        assert_eq!(app.comment_count(1), 0);
    }

    #[tokio::test]
    async fn undecodable_comments_become_failed_event() {
        let store = FakeStore {
            undecodable: true,
            ..FakeStore::default()
        };

        assert_eq!(load_comments(&store).await, AppEvent::CommentsFailed);
    }

    #[tokio::test]
    async fn accepted_submit_updates_row_and_drawer() {
        let mut app = App::new(Config::default());
        app.set_users(vec![ervin()]);
        app.edit_draft(1, "Nice");
        let store = FakeStore::default();

        let event = submit_comment(&store, 1, "Nice".to_string()).await;
        apply_event(&mut app, event);

        assert_eq!(app.draft(1), "");
        assert_eq!(app.comment_count(1), 1);
        app.open_detail();
        assert_eq!(
            app.detail().expect("drawer").comments.last().map(String::as_str),
            Some("Nice")
        );
    }

    #[tokio::test]
    async fn rejected_submit_keeps_draft_and_count() {
        let mut app = App::new(Config::default());
        app.set_users(vec![ervin()]);
        app.set_comment_records(&[]);
        app.edit_draft(1, "Nice");
        let store = FakeStore {
            reject_posts: true,
            ..FakeStore::default()
        };

        let event = submit_comment(&store, 1, "Nice".to_string()).await;
        assert_eq!(event, AppEvent::CommentSubmitFailed { user_id: 1 });
        apply_event(&mut app, event);

        assert_eq!(app.draft(1), "Nice");
        assert_eq!(app.row_state(1), RowState::Editing);
        assert_eq!(app.comment_count(1), 0);
        assert!(store.records.lock().expect("records lock").is_empty());
    }

    #[tokio::test]
    async fn identical_submits_store_two_records() {
        let store = FakeStore::default();

        submit_comment(&store, 3, "Same".to_string()).await;
        submit_comment(&store, 3, "Same".to_string()).await;

        assert_eq!(
            store.records.lock().expect("records lock").clone(),
            vec![Comment::new(3, "Same"), Comment::new(3, "Same")]
        );
    }

    fn unreachable_endpoints() -> Endpoints {
        Endpoints {
            directory_url: "http://127.0.0.1:1".to_string(),
            comment_store_url: "http://127.0.0.1:1".to_string(),
        }
    }

    #[test]
    fn unreachable_store_reports_failed_submit_on_channel() {
        let (event_tx, event_rx) = mpsc::channel();

        start_submit_comment(&unreachable_endpoints(), 5, "Hello".to_string(), event_tx);

        let event = event_rx
            .recv_timeout(Duration::from_secs(30))
            .expect("submit outcome");
        assert_eq!(event, AppEvent::CommentSubmitFailed { user_id: 5 });
    }

    #[test]
    fn submit_finishing_after_ui_closed_drops_result() {
        let (event_tx, event_rx) = mpsc::channel();
        drop(event_rx);

        let worker =
            start_submit_comment(&unreachable_endpoints(), 5, "Hello".to_string(), event_tx);

        assert!(worker.join().is_ok());
    }
}
