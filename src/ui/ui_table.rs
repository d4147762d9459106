use super::*;

const DRAFT_PLACEHOLDER: &str = "Add a comment";

pub(super) fn draw_user_table(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let theme = app.theme();
    let area = area.inner(Margin {
        vertical: 0,
        horizontal: 1,
    });
    let border = match app.mode() {
        Mode::Editing => theme.border_focus,
        Mode::Normal => theme.border_panel,
    };
    let block = panel_block_with_border("Directory", border, theme.bg_panel, theme);

    if app.users().is_empty() {
        let message = match app.users_state() {
            LoadState::Pending => "Loading users...",
            LoadState::Loaded | LoadState::Failed => "No users to show. Press r to reload.",
        };
        frame.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(theme.text_muted))
                .block(block),
            area,
        );
        return;
    }

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Email"),
        Cell::from("Username"),
        Cell::from("Comments"),
        Cell::from("Add/Edit Comment"),
    ])
    .style(
        Style::default()
            .fg(theme.accent_primary)
            .add_modifier(Modifier::BOLD),
    );

    let selected = app.selected_index();
    let rows = app
        .users()
        .iter()
        .enumerate()
        .map(|(index, user)| {
            let editing = app.mode() == Mode::Editing && index == selected;
            Row::new(vec![
                Cell::from(ellipsize(user.name.as_str(), 28)),
                Cell::from(ellipsize(user.email.as_str(), 30)),
                Cell::from(ellipsize(user.username.as_str(), 18)),
                Cell::from(indicator_line(app.comment_count(user.id), theme)),
                Cell::from(draft_line(
                    app.draft(user.id),
                    app.row_state(user.id),
                    editing,
                    theme,
                )),
            ])
        })
        .collect::<Vec<Row>>();

    let widths = [
        Constraint::Percentage(22),
        Constraint::Percentage(24),
        Constraint::Percentage(14),
        Constraint::Length(10),
        Constraint::Min(20),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1)
        .highlight_symbol("▸ ")
        .row_highlight_style(
            Style::default()
                .bg(theme.bg_selected)
                .add_modifier(Modifier::BOLD),
        );
    let mut state = TableState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(table, area, &mut state);
}

/// Read at render time so the marker tracks the current comment count.
pub(super) fn indicator_line(count: usize, theme: &ThemePalette) -> Line<'static> {
    if count == 0 {
        return Line::from(Span::styled("○", Style::default().fg(theme.text_muted)));
    }
    Line::from(Span::styled(
        format!("● {}", count),
        Style::default()
            .fg(theme.accent_comments)
            .add_modifier(Modifier::BOLD),
    ))
}

pub(super) fn draft_line(
    draft: &str,
    state: RowState,
    editing: bool,
    theme: &ThemePalette,
) -> Line<'static> {
    let mut spans = Vec::new();
    if draft.is_empty() && !editing {
        spans.push(Span::styled(
            DRAFT_PLACEHOLDER,
            Style::default()
                .fg(theme.text_muted)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        let style = if editing {
            Style::default().fg(theme.text_primary).bg(theme.bg_input)
        } else {
            Style::default().fg(theme.text_primary)
        };
        spans.push(Span::styled(draft.to_string(), style));
        if editing {
            spans.push(Span::styled("▏", Style::default().fg(theme.border_focus)));
        }
    }
    if state == RowState::Submitting {
        spans.push(Span::styled(
            "  saving...",
            Style::default().fg(theme.accent_pending),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::{draft_line, indicator_line};
    use crate::app::RowState;
    use crate::theme::default_theme;

    fn text(line: &ratatui::text::Line<'_>) -> String {
        line.spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<String>()
    }

    #[test]
    fn indicator_distinguishes_commented_users() {
        let theme = default_theme();

        let empty = indicator_line(0, theme);
        let filled = indicator_line(3, theme);

        assert_eq!(text(&empty), "○");
        assert_eq!(text(&filled), "● 3");
        assert_eq!(empty.spans[0].style.fg, Some(theme.text_muted));
        assert_eq!(filled.spans[0].style.fg, Some(theme.accent_comments));
    }

    #[test]
    fn draft_line_shows_placeholder_and_saving_marker() {
        let theme = default_theme();

        assert_eq!(
            text(&draft_line("", RowState::Idle, false, theme)),
            "Add a comment"
        );
        assert_eq!(
            text(&draft_line("Nice", RowState::Submitting, false, theme)),
            "Nice  saving..."
        );
        assert_eq!(text(&draft_line("Ni", RowState::Editing, true, theme)), "Ni▏");
    }
}
