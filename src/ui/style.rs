use ratatui::style::{Color, Modifier, Style};

use crate::status::SensorStatus;

pub fn status_color(status: SensorStatus) -> Color {
    match status {
        SensorStatus::Normal => Color::Green,
        SensorStatus::Warning => Color::Yellow,
        SensorStatus::Critical => Color::Red,
    }
}

pub fn status_icon(status: SensorStatus) -> &'static str {
    match status {
        SensorStatus::Normal => "✓",
        SensorStatus::Warning => "⚠",
        SensorStatus::Critical => "✗",
    }
}

pub fn status_style(status: SensorStatus) -> Style {
    Style::default()
        .fg(status_color(status))
        .add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color(SensorStatus::Normal), Color::Green);
        assert_eq!(status_color(SensorStatus::Warning), Color::Yellow);
        assert_eq!(status_color(SensorStatus::Critical), Color::Red);
    }
}
