use std::fs;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use iotani_monitor::export::{write_export, ExportFormat};
use iotani_monitor::telemetry::generate_history;

#[test]
fn test_write_csv_and_html_exports() {
    let temp_dir = TempDir::new().unwrap();
    // Missing directories are created on demand
    let export_dir = temp_dir.path().join("exports");
    let date = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
    let data = generate_history(5, date, &mut StdRng::seed_from_u64(7));

    let csv_path = write_export(&export_dir, &data, "harian", ExportFormat::Csv, date).unwrap();
    assert_eq!(
        csv_path.file_name().unwrap().to_str().unwrap(),
        "iotani-data-harian-2025-03-02.csv"
    );

    let csv = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Data harian");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "Tanggal,Suhu (°C),Kelembapan (%),pH");
    assert_eq!(lines.len(), 3 + data.len());
    assert!(lines[3].starts_with(&data[0].date));

    let html_path = write_export(&export_dir, &data, "harian", ExportFormat::Html, date).unwrap();
    let html = fs::read_to_string(&html_path).unwrap();
    assert!(html.contains("IoTani - Laporan Data Sensor"));
    assert!(html.contains("02/03/2025"));
    assert_eq!(html.matches("<tr>").count(), data.len() + 1);
}
