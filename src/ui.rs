use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
    Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap,
};

use crate::app::{App, DetailPanel, LoadState, Mode, RowState};
use crate::theme::ThemePalette;

mod ui_drawer;
mod ui_shared;
mod ui_table;

use ui_drawer::*;
use ui_shared::*;
use ui_table::*;

pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let theme = app.theme();
    frame.render_widget(Block::default().style(Style::default().bg(theme.bg_app)), area);

    let (main, footer) = split_area(area);
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(main);
    draw_header(frame, app, sections[0]);
    draw_user_table(frame, app, sections[1]);
    draw_drawer(frame, app, sections[1]);
    draw_status(frame, app, footer);
}

fn draw_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let theme = app.theme();
    let line = Line::from(vec![
        Span::styled(
            "Users",
            Style::default()
                .fg(theme.accent_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            load_label("users", app.users_state(), app.users().len()),
            Style::default().fg(theme.text_primary),
        ),
        Span::raw("  "),
        Span::styled(
            load_label("comments", app.comments_state(), app.comments().total()),
            Style::default().fg(theme.text_muted),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(panel_block("roster", theme)),
        area.inner(Margin {
            vertical: 0,
            horizontal: 1,
        }),
    );
}

fn draw_status(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let theme = app.theme();
    let mut lines = Vec::new();
    if !app.status().is_empty() {
        lines.push(Line::from(app.status().to_string()));
    }
    lines.push(Line::from(help_text(app)));
    let paragraph = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(theme.text_muted).bg(theme.bg_app))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border_panel)),
        );
    frame.render_widget(
        paragraph,
        area.inner(Margin {
            vertical: 0,
            horizontal: 2,
        }),
    );
}

fn help_text(app: &App) -> &'static str {
    if app.detail().is_some() {
        return "j/k scroll • Esc/Enter close";
    }
    match app.mode() {
        Mode::Editing => "type comment • Enter submit • Esc done • ↑/↓ row • Ctrl+u clear",
        Mode::Normal => concat!(
            "j/k move • g/G top/bottom • i edit • s submit • ",
            "Enter comments • r reload • q quit"
        ),
    }
}

fn load_label(noun: &str, state: LoadState, count: usize) -> String {
    match state {
        LoadState::Pending => format!("loading {}...", noun),
        LoadState::Loaded => format!("{} {}", count, noun),
        LoadState::Failed => format!("{} {} (unavailable)", count, noun),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::{draw, load_label};
    use crate::api::{Comment, User};
    use crate::app::{App, LoadState};
    use crate::config::Config;

    fn rendered(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|frame| draw(frame, app)).expect("draw");
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn sample_app() -> App {
        let mut app = App::new(Config::default());
        app.set_users(vec![User {
            id: 1,
            name: "Ervin Howell".to_string(),
            email: "e@h.com".to_string(),
            username: "Antonette".to_string(),
        }]);
        app
    }

    #[test]
    fn load_label_reflects_state() {
        assert_eq!(load_label("users", LoadState::Pending, 0), "loading users...");
        assert_eq!(load_label("users", LoadState::Loaded, 10), "10 users");
        assert_eq!(
            load_label("comments", LoadState::Failed, 0),
            "0 comments (unavailable)"
        );
    }

    #[test]
    fn renders_rows_with_placeholder_draft() {
        let mut app = sample_app();

        let screen = rendered(&mut app, 120, 20);

        assert!(screen.contains("Ervin Howell"));
        assert!(screen.contains("Antonette"));
        assert!(screen.contains("Add a comment"));
    }

    #[test]
    fn renders_empty_drawer_message() {
        let mut app = sample_app();
        app.open_detail();

        let screen = rendered(&mut app, 120, 20);

        assert!(screen.contains("No comments available"));
    }

    #[test]
    fn renders_drawer_comments() {
        let mut app = sample_app();
        app.set_comment_records(&[Comment::new(1, "Hello"), Comment::new(1, "World")]);
        app.open_detail();

        let screen = rendered(&mut app, 120, 20);

        assert!(screen.contains("• Hello"));
        assert!(screen.contains("• World"));
    }

    #[test]
    fn renders_without_users_or_room() {
        let mut app = App::new(Config::default());

        let _ = rendered(&mut app, 120, 20);
        let _ = rendered(&mut app, 10, 4);
    }

    #[test]
    fn long_comment_can_be_scrolled_to_its_end() {
        let mut app = sample_app();
        let mut words = vec!["lorem"; 199];
        words.push("TAILMARK");
        app.set_comment_records(&[Comment::new(1, words.join(" "))]);
        app.open_detail();

        let first = rendered(&mut app, 100, 20);
        assert!(!first.contains("TAILMARK"));

        for _ in 0..100 {
            app.on_key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE));
        }
        let scrolled = rendered(&mut app, 100, 20);

        assert!(scrolled.contains("TAILMARK"));
        let detail = app.detail().expect("drawer open");
        assert!(detail.scroll > 0);
        assert_eq!(Some(detail.scroll), detail.max_scroll);
    }
}
