use chrono::NaiveDate;

use crate::telemetry::SensorDataPoint;

use super::csv::HEADERS;

const STYLE: &str = r#"
      body { font-family: Arial, sans-serif; margin: 20px; background-color: #f5f5f5; }
      .container { background-color: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
      h1 { color: #22c55e; text-align: center; margin-bottom: 10px; }
      .info { text-align: center; color: #666; margin-bottom: 20px; font-size: 12px; }
      table { width: 100%; border-collapse: collapse; margin-top: 20px; }
      th { background-color: #22c55e; color: white; padding: 12px; text-align: left; font-weight: bold; border: 1px solid #16a34a; }
      td { padding: 10px 12px; border: 1px solid #ddd; }
      tr:nth-child(even) { background-color: #f9fafb; }
      .footer { text-align: center; margin-top: 30px; font-size: 11px; color: #999; border-top: 1px solid #ddd; padding-top: 15px; }
"#;

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Standalone printable report of `data`.
pub fn generate_html_report(data: &[SensorDataPoint], data_type: &str, printed_on: NaiveDate) -> String {
    let header_cells: String = HEADERS
        .iter()
        .map(|h| format!("<th>{}</th>", escape_html(h)))
        .collect();

    let rows: String = data
        .iter()
        .map(|row| {
            format!(
                "<tr><td>{}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td></tr>\n",
                escape_html(&row.date),
                row.temperature,
                row.moisture,
                row.ph
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="UTF-8">
    <title>IoTani - Laporan Data Sensor</title>
    <style>{style}</style>
  </head>
  <body>
    <div class="container">
      <h1>🌱 IoTani - Laporan Data Sensor</h1>
      <div class="info">
        <p><strong>Tipe Data:</strong> {data_type}</p>
        <p><strong>Tanggal Cetak:</strong> {printed_on}</p>
        <p><strong>Total Baris:</strong> {count}</p>
      </div>
      <table>
        <thead><tr>{header_cells}</tr></thead>
        <tbody>
{rows}        </tbody>
      </table>
      <div class="footer">
        <p>Dokumen ini dihasilkan otomatis oleh Sistem IoTani</p>
      </div>
    </div>
  </body>
</html>
"#,
        style = STYLE,
        data_type = escape_html(data_type),
        printed_on = printed_on.format("%d/%m/%Y"),
        count = data.len(),
        header_cells = header_cells,
        rows = rows,
    )
}
