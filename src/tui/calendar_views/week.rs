use chrono::{Datelike, Local};
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use termcal::{
    app::AppState,
    ui::theme,
    ui::week_view::{self, EventBlock},
};

const FIRST_HOUR: u32 = 6;
const LAST_HOUR: u32 = 22;
const CELL_WIDTH: usize = 9;

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect, hour_height: f64) {
    let today = Local::now().date_naive();
    let layout = week_view::calculate_layout(app, today, hour_height);

    let week_range = if let Some(last_day) = layout.days.last() {
        format!(
            "{} - {}",
            layout.week_start.format("%b %d"),
            last_day.date.format("%b %d, %Y")
        )
    } else {
        layout.week_start.format("%b %d, %Y").to_string()
    };

    let mut lines = vec![
        Line::from(vec![Span::styled(
            week_range,
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
    ];

    let mut header_spans = vec![Span::raw("      ")];
    for day in &layout.days {
        let day_str = format!(" {:>3} {:<2}  ", day.date.format("%a"), day.date.day());

        let style = if day.is_selected {
            Style::default().bg(app.theme.selected_bg).fg(app.theme.selected_fg)
        } else if day.is_today {
            Style::default().fg(app.theme.today).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.weekday_header)
        };

        header_spans.push(Span::styled(day_str, style));
    }
    lines.push(Line::from(header_spans));
    lines.push(Line::from(""));

    for hour in FIRST_HOUR..LAST_HOUR {
        let mut line_spans = vec![Span::styled(
            format!("{:02}:00 ", hour),
            Style::default().fg(app.theme.form_label),
        )];

        for day in &layout.days {
            line_spans.push(hour_cell(&day.blocks, hour, hour_height));
        }

        lines.push(Line::from(line_spans));
    }

    let content = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}

/// One terminal row per hour: the block's title on the row its rect starts
/// in, a continuation mark on every further row the rect covers.
fn hour_cell<'a>(blocks: &'a [EventBlock], hour: u32, hour_height: f64) -> Span<'a> {
    let row = f64::from(hour) * hour_height;
    let next_row = f64::from(hour + 1) * hour_height;

    let covering: Vec<&EventBlock> = blocks
        .iter()
        .filter(|block| block.rect.top < next_row && block.rect.top + block.rect.height > row)
        .collect();

    let Some(first) = covering.first() else {
        return Span::raw(" ".repeat(CELL_WIDTH));
    };

    let starts_here = first.rect.top >= row && first.rect.top < next_row;
    let text = if starts_here {
        let mut label: String = first.title.chars().take(CELL_WIDTH - 2).collect();
        if covering.len() > 1 {
            label = label.chars().take(CELL_WIDTH - 4).collect();
            label.push_str(&format!("+{}", covering.len() - 1));
        }
        format!("{:<width$}", label, width = CELL_WIDTH)
    } else {
        format!("{:<width$}", "|", width = CELL_WIDTH)
    };

    Span::styled(text, Style::default().fg(theme::event_color(first.color.as_deref())))
}
