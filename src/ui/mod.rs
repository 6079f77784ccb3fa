mod alert_banner;
mod header;
mod history_chart;
mod sensor_card;
pub mod style;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::App;
use crate::sensor::SensorKind;

use alert_banner::render_alert_banner;
use header::render_header;
use history_chart::render_history_chart;
use sensor_card::SensorCard;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(8), // Sensor cards
                Constraint::Min(5),    // Alerts
                Constraint::Length(7), // History
                Constraint::Length(1), // Footer
            ])
            .split(area);

        render_header(self, chunks[0], buf);
        render_sensor_cards(self, chunks[1], buf);

        let notifications = self
            .evaluation
            .as_ref()
            .map(|e| e.notifications.as_slice())
            .unwrap_or_default();
        render_alert_banner(notifications, chunks[2], buf);

        render_history(self, chunks[3], buf);
        render_footer(self, chunks[4], buf);
    }
}

fn thirds(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area)
}

fn render_sensor_cards(app: &App, area: Rect, buf: &mut Buffer) {
    let Some(evaluation) = &app.evaluation else {
        Paragraph::new("Belum ada data sensor")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::DarkGray))
            .render(area, buf);
        return;
    };

    let columns = thirds(area);
    let snapshot = &evaluation.snapshot;
    let cards = [
        (snapshot.ph, &evaluation.ph),
        (snapshot.moisture, &evaluation.moisture),
        (snapshot.temperature, &evaluation.temperature),
    ];

    for (column, (reading, classification)) in columns.iter().zip(cards) {
        SensorCard { reading, classification }.render(*column, buf);
    }
}

fn render_history(app: &App, area: Rect, buf: &mut Buffer) {
    let columns = thirds(area);
    let is_connected = app.handler.is_connected();

    for (column, kind) in columns.iter().zip(SensorKind::all()) {
        render_history_chart(app.handler.history(), kind, is_connected, *column, buf);
    }
}

fn render_footer(app: &App, area: Rect, buf: &mut Buffer) {
    let mut spans = vec![
        Span::styled(" q", Style::default().fg(Color::Cyan)),
        Span::raw(" keluar  "),
        Span::styled("c", Style::default().fg(Color::Cyan)),
        Span::raw(" ekspor CSV  "),
        Span::styled("h", Style::default().fg(Color::Cyan)),
        Span::raw(" laporan HTML  "),
        Span::styled(
            format!("alert: {}", app.alerts_raised),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if let Some(status) = &app.status_line {
        spans.push(Span::raw("  │ "));
        spans.push(Span::styled(status.clone(), Style::default().fg(Color::Yellow)));
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}
