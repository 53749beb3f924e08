use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::{calendar_views, dialogs};
use termcal::app::{AppState, Mode, ViewType};

pub fn ui(f: &mut Frame, app: &AppState, hour_height: f64) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(main_chunks[1]);

    let mode_label = match app.mode {
        Mode::Normal => "Normal",
        Mode::Insert => "Insert",
        Mode::Confirm => "Confirm",
    };
    let view_label = match app.view {
        ViewType::Month => "Month",
        ViewType::Week => "Week",
    };

    let title = Paragraph::new(format!("termcal - {} View - {} Mode", view_label, mode_label))
        .style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, main_chunks[0]);

    match app.view {
        ViewType::Month => calendar_views::month::render(f, app, content_chunks[0]),
        ViewType::Week => calendar_views::week::render(f, app, content_chunks[0], hour_height),
    }

    calendar_views::day_events::render(f, app, content_chunks[1]);

    let status_text = match &app.status {
        Some(message) => message.clone(),
        None => format!(
            "Events: {} | q = Quit | a = Add | e = Edit | x = Delete",
            app.store.len()
        ),
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, main_chunks[2]);

    if app.event_form.is_some() {
        dialogs::event_form::render(f, app);
    }

    if app.pending_delete.is_some() {
        dialogs::delete_confirmation::render(f, app);
    }
}
