use chrono::{Datelike, Local, NaiveDate};
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use termcal::{app::AppState, ui::month_view};

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let today = Local::now().date_naive();
    let layout = month_view::calculate_layout(app, today);

    let month_name = NaiveDate::from_ymd_opt(layout.year, layout.month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{}-{:02}", layout.year, layout.month));

    let mut lines = vec![
        Line::from(vec![Span::styled(
            month_name,
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(
            ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
                .iter()
                .map(|day| {
                    Span::styled(format!(" {} ", day), Style::default().fg(app.theme.weekday_header))
                })
                .collect::<Vec<_>>(),
        ),
    ];

    for week in &layout.weeks {
        let mut day_spans = Vec::new();

        for cell in &week.days {
            let marker = if cell.event_count > 0 { '.' } else { ' ' };
            let day_text = format!(" {:>2}{} ", cell.date.day(), marker);

            let mut style = Style::default();
            if !cell.in_month {
                style = style.fg(app.theme.outside_month);
            } else if cell.is_selected {
                style = style
                    .bg(app.theme.selected_bg)
                    .fg(app.theme.selected_fg)
                    .add_modifier(Modifier::BOLD);
            } else if cell.is_today {
                style = style.fg(app.theme.today).add_modifier(Modifier::BOLD);
            }

            if cell.event_count > 0 {
                style = style.add_modifier(Modifier::UNDERLINED);
            }

            day_spans.push(Span::styled(day_text, style));
        }

        lines.push(Line::from(day_spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("hjkl", Style::default().fg(app.theme.event_indicator)),
        Span::raw(" = Navigate | "),
        Span::styled("n/p", Style::default().fg(app.theme.event_indicator)),
        Span::raw(" = Month | "),
        Span::styled("t", Style::default().fg(app.theme.success)),
        Span::raw(" = Today | "),
        Span::styled("w", Style::default().fg(app.theme.event_indicator)),
        Span::raw(" = Week view"),
    ]));

    let content = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
