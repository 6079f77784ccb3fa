use crate::telemetry::SensorDataPoint;

pub(super) const HEADERS: [&str; 4] = ["Tanggal", "Suhu (°C)", "Kelembapan (%)", "pH"];

/// `Data <type>`, a blank line, the header row, then one row per point
/// with every value to two decimals.
pub fn generate_csv(data: &[SensorDataPoint], data_type: &str) -> String {
    let mut content = format!("Data {}\n\n", data_type);
    content.push_str(&HEADERS.join(","));
    content.push('\n');

    for row in data {
        content.push_str(&format!(
            "{},{:.2},{:.2},{:.2}\n",
            row.date, row.temperature, row.moisture, row.ph
        ));
    }

    content
}
