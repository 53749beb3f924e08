use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use termcal::{
    app::{AppState, FormField},
    calendar::{EVENT_CATEGORIES, EVENT_COLORS, EventField},
    ui::theme,
};

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(form) = &app.event_form else {
        return;
    };

    let area = f.size();
    let form_width = 70;
    let form_height = 20;
    let x = (area.width.saturating_sub(form_width)) / 2;
    let y = (area.height.saturating_sub(form_height)) / 2;

    let form_area = ratatui::layout::Rect {
        x,
        y,
        width: form_width,
        height: form_height,
    };

    f.render_widget(Clear, form_area);

    let label_style = |field: FormField| {
        if form.active_field == field {
            Style::default().fg(app.theme.form_label_active)
        } else {
            Style::default().fg(app.theme.form_label)
        }
    };
    let error_style = Style::default().fg(app.theme.error);

    let form_title = if form.is_editing() { "Edit Event" } else { "Create New Event" };

    let mut form_text = vec![
        Line::from(vec![Span::styled(
            form_title,
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Title: ", label_style(FormField::Title)),
            Span::raw(&form.title),
        ]),
    ];

    if let Some(message) = form.errors.get(EventField::Title) {
        form_text.push(Line::from(Span::styled(format!("  {}", message), error_style)));
    }

    form_text.extend(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Date: ", Style::default().fg(app.theme.form_label)),
            Span::raw(form.date.format("%Y-%m-%d").to_string()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Start Time: ", label_style(FormField::StartTime)),
            Span::raw(&form.start_input),
            Span::styled(
                if form.active_field == FormField::StartTime { " (HH:MM or HHMM)" } else { "" },
                Style::default().fg(app.theme.form_label),
            ),
        ]),
    ]);

    if let Some(message) = form.errors.get(EventField::Start) {
        form_text.push(Line::from(Span::styled(format!("  {}", message), error_style)));
    }

    form_text.extend(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("End Time: ", label_style(FormField::EndTime)),
            Span::raw(&form.end_input),
        ]),
    ]);

    if let Some(message) = form.errors.get(EventField::End) {
        form_text.push(Line::from(Span::styled(format!("  {}", message), error_style)));
    }

    form_text.extend(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Description: ", label_style(FormField::Description)),
            Span::raw(&form.description),
        ]),
    ]);

    if let Some(message) = form.errors.get(EventField::Description) {
        form_text.push(Line::from(Span::styled(format!("  {}", message), error_style)));
    }

    let (color_name, color_value) = EVENT_COLORS[form.color_index];
    let category_label = if form.category_index == 0 {
        "No Category"
    } else {
        EVENT_CATEGORIES[form.category_index - 1]
    };

    form_text.extend(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Color: ", label_style(FormField::Color)),
            Span::styled("■ ", Style::default().fg(theme::event_color(Some(color_value)))),
            Span::raw(color_name),
            Span::styled(
                if form.active_field == FormField::Color { "  <- / ->" } else { "" },
                Style::default().fg(app.theme.form_label),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Category: ", label_style(FormField::Category)),
            Span::raw(category_label),
            Span::styled(
                if form.active_field == FormField::Category { "  <- / ->" } else { "" },
                Style::default().fg(app.theme.form_label),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Tab", Style::default().fg(app.theme.event_indicator)),
            Span::raw(" = Next field | "),
            Span::styled("Enter", Style::default().fg(app.theme.success)),
            Span::raw(" = Save | "),
            Span::styled("Esc", Style::default().fg(app.theme.error)),
            Span::raw(" = Cancel"),
        ]),
    ]);

    let block_title = if form.is_editing() { " Edit Event " } else { " New Event " };

    let form_paragraph = Paragraph::new(form_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(block_title)
                .style(Style::default().bg(Color::Black)),
        )
        .alignment(Alignment::Left);

    f.render_widget(form_paragraph, form_area);
}
