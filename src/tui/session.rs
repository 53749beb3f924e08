use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::cli::CliOptions;
use crate::tui::{presentation::ui, sample_events::add_sample_events};
use termcal::{
    app::{AppState, Mode, ViewType},
    calendar::{EventChange, EventStore, StoreError, UuidIdGenerator},
    input::{insert_mode, normal_mode},
    storage::config::Config,
    ui::theme::Theme,
};

pub fn run_tui(options: CliOptions) -> Result<(), io::Error> {
    let config = Config::load_or_create().map_err(|e| io::Error::other(e.to_string()))?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::get_by_name(options.theme.as_deref().unwrap_or(&config.ui.theme));
    let view = options.view.unwrap_or_else(|| default_view(&config));

    let store = EventStore::new(Box::new(UuidIdGenerator));
    let mut app = AppState::new(store).with_theme(theme).with_view(view);

    if options.sample {
        add_sample_events(&mut app);
    }

    let res = run_app(&mut terminal, &mut app, config.ui.hour_height);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn default_view(config: &Config) -> ViewType {
    match config.ui.default_view.to_lowercase().as_str() {
        "week" => ViewType::Week,
        _ => ViewType::Month,
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    hour_height: f64,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app, hour_height))?;

        if let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match app.mode {
                Mode::Normal => {
                    if key.code == KeyCode::Char('q') {
                        return Ok(());
                    }
                    normal_mode::handle_key(key.code, app);
                }
                Mode::Insert => match key.code {
                    KeyCode::Esc => cancel_event_form(app),
                    KeyCode::Enter => save_event_form(app),
                    code => insert_mode::handle_key(code, app),
                },
                Mode::Confirm => match key.code {
                    KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => confirm_delete(app),
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => cancel_delete(app),
                    _ => {}
                },
            }
        }

        for change in app.store.take_changes() {
            match change {
                EventChange::Added(event) => {
                    tracing::info!("Event added: {} ({})", event.title, event.id);
                }
                EventChange::Updated(event) => {
                    tracing::info!("Event updated: {} ({})", event.title, event.id);
                }
                EventChange::Removed { id } => {
                    tracing::info!("Event removed: {}", id);
                }
            }
        }
    }
}

fn cancel_event_form(app: &mut AppState) {
    app.event_form = None;
    app.mode = Mode::Normal;
}

fn save_event_form(app: &mut AppState) {
    let Some(form) = app.event_form.as_mut() else {
        return;
    };

    form.normalize_time_buffers();
    let draft = form.to_draft();
    let editing = form.event_id.clone();

    let result = match editing {
        Some(id) => app.store.update(&id, draft),
        None => app.store.add(draft),
    };

    match result {
        Ok(event) => {
            app.status = Some(format!("Saved \"{}\"", event.title));
            app.select_date(Some(event.start.date()));
            app.event_form = None;
            app.mode = Mode::Normal;
        }
        Err(StoreError::Invalid(errors)) => {
            tracing::warn!("Event rejected by validation: {}", errors);
            if let Some(form) = app.event_form.as_mut() {
                form.errors = errors;
            }
        }
        Err(StoreError::NotFound(id)) => {
            tracing::error!("Tried to update a missing event: {}", id);
            app.status = Some("Event no longer exists".to_string());
            app.event_form = None;
            app.mode = Mode::Normal;
        }
    }
}

fn confirm_delete(app: &mut AppState) {
    if let Some(id) = app.pending_delete.take() {
        match app.store.remove(&id) {
            Some(event) => {
                app.status = Some(format!("Deleted \"{}\"", event.title));
                app.reset_event_selection();
            }
            None => {
                app.status = Some("Event no longer exists".to_string());
            }
        }
    }
    app.mode = Mode::Normal;
}

fn cancel_delete(app: &mut AppState) {
    app.pending_delete = None;
    app.mode = Mode::Normal;
}
