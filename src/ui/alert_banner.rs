use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::notification::{sorted_for_display, AlertType, Notification};
use crate::sensor::format_plain;
use crate::ui::style::{status_color, status_style};

pub fn render_alert_banner(notifications: &[Notification], area: Rect, buf: &mut Buffer) {
    let ordered = sorted_for_display(notifications.to_vec());

    let border = ordered
        .first()
        .map(|n| status_color(n.alert_type.status()))
        .unwrap_or(Color::DarkGray);

    let block = Block::default()
        .title(format!(" Peringatan ({}) ", ordered.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    if ordered.is_empty() {
        Paragraph::new(Span::styled(
            "✓ Semua sensor dalam kondisi optimal",
            Style::default().fg(Color::Green),
        ))
        .block(block)
        .render(area, buf);
        return;
    }

    let mut lines = Vec::new();
    for notification in &ordered {
        lines.extend(alert_lines(notification));
    }

    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

fn alert_lines(notification: &Notification) -> Vec<Line<'static>> {
    let status = notification.alert_type.status();
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} - {}", notification.sensor.display_name(), status.label()),
                status_style(status),
            ),
            Span::raw(format!(
                "  Nilai: {}{}",
                format_plain(notification.value),
                notification.unit
            )),
        ]),
        Line::raw(format!("  {}", notification.message)),
    ];

    if notification.alert_type == AlertType::Critical {
        lines.push(Line::styled(
            "  TINDAKAN SEGERA DIPERLUKAN",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::SensorSnapshot;
    use crate::notification::derive_notifications;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_critical_alert_calls_for_action() {
        let snapshot = SensorSnapshot::new(5.0, 60.0, 25.0).unwrap();
        let notifications = derive_notifications(&snapshot);
        let lines = alert_lines(&notifications[0]);

        assert_eq!(lines.len(), 3);
        assert!(line_text(&lines[0]).starts_with("pH Tanah - KRITIS"));
        assert!(line_text(&lines[0]).contains("Nilai: 5"));
        assert_eq!(line_text(&lines[2]).trim(), "TINDAKAN SEGERA DIPERLUKAN");
    }

    #[test]
    fn test_warning_alert_has_no_action_line() {
        let snapshot = SensorSnapshot::new(6.5, 45.0, 25.0).unwrap();
        let notifications = derive_notifications(&snapshot);
        let lines = alert_lines(&notifications[0]);

        assert_eq!(lines.len(), 2);
        assert!(line_text(&lines[0]).starts_with("Kelembaban Tanah - PERINGATAN"));
        assert!(line_text(&lines[0]).contains("Nilai: 45%"));
    }

    #[test]
    fn test_banner_renders_critical_first() {
        let snapshot = SensorSnapshot::new(5.8, 60.0, 40.0).unwrap();
        let notifications = derive_notifications(&snapshot);

        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        render_alert_banner(&notifications, area, &mut buf);

        let row = |y: u16| -> String {
            (0..area.width).map(|x| buf[(x, y)].symbol().to_string()).collect()
        };
        assert!(row(0).contains("Peringatan (2)"));
        assert!(row(1).contains("Suhu Tanah - KRITIS"));
    }
}
