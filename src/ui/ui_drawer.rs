use super::*;

pub(super) fn draw_drawer(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let theme = app.theme();
    let (title, lines) = match app.detail() {
        Some(detail) => (
            format!("Comments · {}", ellipsize(detail.user_name.as_str(), 24)),
            drawer_lines(detail, theme),
        ),
        None => return,
    };
    let drawer = drawer_rect(area);
    frame.render_widget(Clear, drawer);

    let block = panel_block_with_border(title.as_str(), theme.border_focus, theme.bg_drawer, theme);
    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });
    let hidden_lines = paragraph
        .line_count(drawer.width.saturating_sub(2))
        .saturating_sub(drawer.height as usize);
    app.set_detail_max_scroll(u16::try_from(hidden_lines).unwrap_or(u16::MAX));

    let scroll = app.detail().map(|detail| detail.scroll).unwrap_or(0);
    frame.render_widget(paragraph.scroll((scroll, 0)), drawer);
}

pub(super) fn drawer_lines(detail: &DetailPanel, theme: &ThemePalette) -> Vec<Line<'static>> {
    if detail.comments.is_empty() {
        return vec![Line::from(Span::styled(
            "No comments available",
            Style::default().fg(theme.text_muted),
        ))];
    }
    detail
        .comments
        .iter()
        .map(|comment| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(theme.accent_comments)),
                Span::styled(comment.clone(), Style::default().fg(theme.text_primary)),
            ])
        })
        .collect()
}

fn drawer_rect(area: Rect) -> Rect {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);
    columns[1]
}
