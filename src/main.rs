mod api;
mod app;
mod cli;
mod comments;
mod config;
mod main_events;
mod main_tasks;
mod theme;
mod ui;

use std::env;
use std::fs;
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::app::{App, AppAction};
use crate::cli::{CliCommand, parse_args};
use crate::config::{Config, config_path, log_path};
use crate::main_events::{AppEvent, handle_events};
use crate::main_tasks::{Endpoints, start_initial_load, start_submit_comment};

type TuiBackend = CrosstermBackend<Stdout>;
type Tui = Terminal<TuiBackend>;

const TICK_RATE: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if let Some(command) = parse_args(&args)? {
        return handle_command(command);
    }

    init_tracing()?;
    let config = Config::load()?;
    let endpoints = Endpoints::from_config(&config);
    info!(
        directory = %endpoints.directory_url,
        comment_store = %endpoints.comment_store_url,
        "starting"
    );

    let mut terminal_guard = TerminalGuard::init()?;
    let mut app = App::new(config);
    let (event_tx, event_rx) = mpsc::channel();
    start_initial_load(&endpoints, event_tx.clone());

    run_app(
        terminal_guard.terminal_mut(),
        &mut app,
        &endpoints,
        event_rx,
        event_tx,
    )?;
    info!("shutting down");
    Ok(())
}

fn handle_command(command: CliCommand) -> Result<()> {
    match command {
        CliCommand::ConfigPath => {
            println!("{}", config_path().display());
            Ok(())
        }
        CliCommand::ConfigInit => handle_config_init(),
    }
}

fn handle_config_init() -> Result<()> {
    let path = config_path();
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }

    Config::default().save()?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

/// Logs go to a file; the terminal belongs to the TUI.
fn init_tracing() -> Result<()> {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;

    let path = log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log dir at {}", parent.display()))?;
    }
    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file at {}", path.display()))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("roster=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;
    Ok(())
}

fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    endpoints: &Endpoints,
    event_rx: Receiver<AppEvent>,
    event_tx: Sender<AppEvent>,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        handle_events(app, &event_rx);
        terminal.draw(|frame| ui::draw(frame, app))?;

        if app.should_quit() {
            return Ok(());
        }

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if !event::poll(timeout)? {
            last_tick = Instant::now();
            continue;
        }

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.on_key(key);
        }
        handle_actions(app, endpoints, event_tx.clone());

        if last_tick.elapsed() >= TICK_RATE {
            last_tick = Instant::now();
        }
    }
}

fn handle_actions(app: &mut App, endpoints: &Endpoints, event_tx: Sender<AppEvent>) {
    let action = match app.take_action() {
        Some(action) => action,
        None => return,
    };

    match action {
        AppAction::Reload => start_initial_load(endpoints, event_tx),
        AppAction::SubmitComment { user_id, text } => {
            start_submit_comment(endpoints, user_id, text, event_tx);
        }
    }
}

struct TerminalGuard {
    terminal: Tui,
}

impl TerminalGuard {
    fn init() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
