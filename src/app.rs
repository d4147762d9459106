use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use tracing::debug;

use crate::api::{Comment, User, UserId};
use crate::comments::{CommentsByUser, group_by_user, merge_submission};
use crate::config::Config;
use crate::theme::{ThemePalette, resolve_theme};

mod accessors;
mod input;
mod state;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Editing,
}

/// Lifecycle of one row's draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Idle,
    Editing,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    Reload,
    SubmitComment { user_id: UserId, text: String },
}

/// Comments of one user, copied when the drawer opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    pub user_id: UserId,
    pub user_name: String,
    pub comments: Vec<String>,
    pub scroll: u16,
    /// Known once the drawer has been drawn at least once.
    pub max_scroll: Option<u16>,
}

pub struct App {
    should_quit: bool,
    theme: &'static ThemePalette,
    mode: Mode,
    users: Vec<User>,
    users_state: LoadState,
    comments: CommentsByUser,
    comments_state: LoadState,
    drafts: HashMap<UserId, String>,
    in_flight: HashMap<UserId, usize>,
    selected_user: usize,
    detail: Option<DetailPanel>,
    status: String,
    action: Option<AppAction>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            theme: resolve_theme(config.theme.as_deref()),
            mode: Mode::Normal,
            users: Vec::new(),
            users_state: LoadState::Pending,
            comments: CommentsByUser::default(),
            comments_state: LoadState::Pending,
            drafts: HashMap::new(),
            in_flight: HashMap::new(),
            selected_user: 0,
            detail: None,
            status: String::new(),
            action: None,
        }
    }
}
