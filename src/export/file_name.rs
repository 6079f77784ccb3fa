use chrono::NaiveDate;

use super::ExportFormat;

/// `iotani-data-<type>-<YYYY-MM-DD>.<ext>`
pub fn export_file_name(data_type: &str, date: NaiveDate, format: ExportFormat) -> String {
    format!(
        "iotani-data-{}-{}.{}",
        data_type,
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 9).unwrap();
        assert_eq!(
            export_file_name("harian", date, ExportFormat::Csv),
            "iotani-data-harian-2025-04-09.csv"
        );
        assert_eq!(
            export_file_name("harian", date, ExportFormat::Html),
            "iotani-data-harian-2025-04-09.html"
        );
    }
}
