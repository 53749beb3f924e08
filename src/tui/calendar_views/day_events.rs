use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use termcal::{app::AppState, ui::theme};

/// Side panel listing the cursor day's events in display order, with the
/// j/k selection highlighted.
pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let date = app.cursor_date();
    let events = app.events_for_date(date);

    let mut lines = vec![
        Line::from(vec![Span::styled(
            date.format("%A, %B %d").to_string(),
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
    ];

    if events.is_empty() {
        lines.push(Line::from(Span::styled(
            "No events",
            Style::default().fg(app.theme.outside_month),
        )));
    }

    for (index, event) in events.iter().enumerate() {
        let is_selected = index == app.selected_event_index;
        let bullet_style = Style::default().fg(theme::event_color(event.color.as_deref()));

        let mut title_style = Style::default();
        if is_selected {
            title_style = title_style
                .bg(app.theme.selected_bg)
                .fg(app.theme.selected_fg)
                .add_modifier(Modifier::BOLD);
        }

        let mut spans = vec![
            Span::styled("● ", bullet_style),
            Span::styled(
                format!(
                    "{}-{} ",
                    event.start.format("%H:%M"),
                    event.end.format("%H:%M")
                ),
                Style::default().fg(app.theme.weekday_header),
            ),
            Span::styled(event.title.clone(), title_style),
        ];

        if let Some(category) = &event.category {
            spans.push(Span::styled(
                format!(" [{}]", category),
                Style::default().fg(app.theme.outside_month),
            ));
        }

        lines.push(Line::from(spans));
    }

    let content = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Events "),
    );
    f.render_widget(content, area);
}
