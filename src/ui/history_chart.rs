use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Sparkline, Widget},
};

use crate::sensor::SensorKind;
use crate::telemetry::HistoryBuffer;

/// pH lives in 0..14, so it is scaled up to keep the bars distinguishable.
fn spark_scale(kind: SensorKind) -> f64 {
    match kind {
        SensorKind::Ph => 10.0,
        _ => 1.0,
    }
}

fn spark_color(kind: SensorKind) -> Color {
    match kind {
        SensorKind::Ph => Color::Magenta,
        SensorKind::Moisture => Color::Cyan,
        SensorKind::Temperature => Color::Yellow,
    }
}

pub fn render_history_chart(
    history: &HistoryBuffer,
    kind: SensorKind,
    is_connected: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Sparkline
            Constraint::Length(1), // Min / max
        ])
        .split(area);

    let series = history.series(kind);

    let container = Block::default()
        .title(format!(" {} ", kind.display_name()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let max_visible = container.inner(chunks[0]).width.max(1) as usize;
    let scale = spark_scale(kind);

    // Most recent window that fits the width
    let spark_data: Vec<u64> = series
        .iter()
        .rev()
        .take(max_visible)
        .rev()
        .map(|v| (v * scale).round().max(0.0) as u64)
        .collect();

    let sparkline = Sparkline::default()
        .block(container)
        .data(&spark_data)
        .style(Style::default().fg(if is_connected {
            spark_color(kind)
        } else {
            Color::DarkGray
        }));
    sparkline.render(chunks[0], buf);

    let min_val = series.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let summary = match series.last() {
        Some(current) => format!(
            "Cur: {:.1}{} | Min: {:.1} | Max: {:.1}",
            current,
            kind.unit(),
            min_val,
            max_val
        ),
        None => "Belum ada data".to_string(),
    };

    Paragraph::new(summary)
        .style(Style::default().fg(if is_connected { Color::White } else { Color::Red }))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);
}
