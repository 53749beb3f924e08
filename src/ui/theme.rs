use ratatui::style::Color;

use crate::calendar::DEFAULT_EVENT_COLOR;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub title: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub today: Color,
    pub event_indicator: Color,
    pub weekday_header: Color,
    pub outside_month: Color,
    pub status_bar: Color,
    pub form_label: Color,
    pub form_label_active: Color,
    pub error: Color,
    pub success: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            title: Color::Cyan,
            selected_bg: Color::Blue,
            selected_fg: Color::White,
            today: Color::Green,
            event_indicator: Color::Cyan,
            weekday_header: Color::Yellow,
            outside_month: Color::DarkGray,
            status_bar: Color::White,
            form_label: Color::DarkGray,
            form_label_active: Color::Cyan,
            error: Color::Red,
            success: Color::Green,
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            title: Color::Rgb(251, 184, 108),
            selected_bg: Color::Rgb(60, 56, 54),
            selected_fg: Color::Rgb(235, 219, 178),
            today: Color::Rgb(184, 187, 38),
            event_indicator: Color::Rgb(142, 192, 124),
            weekday_header: Color::Rgb(254, 128, 25),
            outside_month: Color::Rgb(146, 131, 116),
            status_bar: Color::Rgb(235, 219, 178),
            form_label: Color::Rgb(146, 131, 116),
            form_label_active: Color::Rgb(251, 184, 108),
            error: Color::Rgb(251, 73, 52),
            success: Color::Rgb(184, 187, 38),
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            title: Color::Rgb(136, 192, 208),
            selected_bg: Color::Rgb(59, 66, 82),
            selected_fg: Color::Rgb(236, 239, 244),
            today: Color::Rgb(163, 190, 140),
            event_indicator: Color::Rgb(129, 161, 193),
            weekday_header: Color::Rgb(235, 203, 139),
            outside_month: Color::Rgb(76, 86, 106),
            status_bar: Color::Rgb(216, 222, 233),
            form_label: Color::Rgb(76, 86, 106),
            form_label_active: Color::Rgb(136, 192, 208),
            error: Color::Rgb(191, 97, 106),
            success: Color::Rgb(163, 190, 140),
        }
    }

    pub fn get_by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            _ => Self::default_theme(),
        }
    }

    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "gruvbox", "nord"]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

/// Parses a `#rrggbb` color token into a terminal color.
pub fn color_from_hex(token: &str) -> Option<Color> {
    let hex = token.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Resolves an event's color token, falling back to the presentation
/// default when the event carries none or the token does not parse.
pub fn event_color(token: Option<&str>) -> Color {
    token
        .and_then(color_from_hex)
        .or_else(|| color_from_hex(DEFAULT_EVENT_COLOR))
        .unwrap_or(Color::Blue)
}
