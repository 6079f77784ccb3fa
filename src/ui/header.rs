use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::App;
use crate::status::SensorStatus;
use crate::ui::style::{status_color, status_icon, status_style};

pub fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
    let overall = app
        .evaluation
        .as_ref()
        .map(|e| e.overall)
        .unwrap_or(SensorStatus::Normal);

    let block = Block::default()
        .title(format!(" IoTani · {} ", app.handler.device_id()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(status_color(overall)));

    let inner = block.inner(area);
    block.render(area, buf);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Overall status
            Constraint::Percentage(25), // Connection
            Constraint::Percentage(35), // Weather
        ])
        .split(inner);

    let badge = match &app.evaluation {
        Some(_) => Line::from(vec![
            Span::raw("Status: "),
            Span::styled(
                format!("{} {}", status_icon(overall), overall.label()),
                status_style(overall),
            ),
        ]),
        None => Line::from(Span::styled(
            "Menunggu data sensor...",
            Style::default().fg(Color::DarkGray),
        )),
    };
    Paragraph::new(badge).render(chunks[0], buf);

    let (connected_icon, connected_color) = if app.handler.is_connected() {
        ("●", Color::Green)
    } else {
        ("○", Color::Red)
    };
    let connection = match app.handler.time_since_last_update() {
        Some(elapsed) => format!("{} {}s lalu", connected_icon, elapsed.as_secs()),
        None => format!("{} Belum terhubung", connected_icon),
    };
    Paragraph::new(Span::styled(connection, Style::default().fg(connected_color)))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

    let weather = &app.weather;
    let weather_text = format!(
        "{} {:.1}°C  💧{}%  💨{} km/j",
        weather.condition.label(),
        weather.temperature,
        weather.humidity,
        weather.wind_speed
    );
    Paragraph::new(weather_text)
        .alignment(Alignment::Right)
        .render(chunks[2], buf);
}
