use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::sensor::{format_plain, SensorReading};
use crate::status::StatusClassification;
use crate::ui::style::{status_color, status_icon, status_style};

/// Current value, status badge and classifier message for one sensor.
pub struct SensorCard<'a> {
    pub reading: SensorReading,
    pub classification: &'a StatusClassification,
}

impl Widget for SensorCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let kind = self.reading.kind();
        let status = self.classification.status;

        let block = Block::default()
            .title(format!(" {} ", kind.display_name()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(status_color(status)));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Value
                Constraint::Length(1), // Badge
                Constraint::Length(1), // Optimal range
                Constraint::Min(1),    // Message
            ])
            .split(inner);

        Paragraph::new(format!("{}{}", format_plain(self.reading.value()), kind.unit()))
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        Paragraph::new(Line::styled(
            format!("{} {}", status_icon(status), status.label()),
            status_style(status),
        ))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

        Paragraph::new(format!("Optimal: {}", kind.optimal_range()))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);

        Paragraph::new(self.classification.message.as_str())
            .wrap(Wrap { trim: true })
            .render(chunks[3], buf);
    }
}
