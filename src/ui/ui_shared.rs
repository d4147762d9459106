use super::*;

pub(super) fn panel_block<'a>(title: &'a str, theme: &ThemePalette) -> Block<'a> {
    panel_block_with_border(title, theme.border_panel, theme.bg_panel, theme)
}

pub(super) fn panel_block_with_border<'a>(
    title: &'a str,
    border: ratatui::style::Color,
    background: ratatui::style::Color,
    theme: &ThemePalette,
) -> Block<'a> {
    let border_type = if border == theme.border_focus {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };
    Block::default()
        .title(Line::from(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(theme.accent_primary)
                .add_modifier(Modifier::BOLD),
        )))
        .borders(Borders::ALL)
        .border_type(border_type)
        .style(Style::default().bg(background).fg(theme.text_primary))
        .border_style(Style::default().fg(border))
}

pub(super) fn split_area(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);
    (chunks[0], chunks[1])
}

pub(super) fn ellipsize(input: &str, max: usize) -> String {
    if input.chars().count() <= max {
        return input.to_string();
    }
    let head = input.chars().take(max.saturating_sub(3)).collect::<String>();
    format!("{}...", head)
}
