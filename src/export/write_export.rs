use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::Result;
use crate::log_info;
use crate::telemetry::SensorDataPoint;

use super::{export_file_name, generate_csv, generate_html_report, ExportFormat};

/// Renders `data` and writes it into `export_dir`, creating the directory
/// when missing. Returns the written path.
pub fn write_export(
    export_dir: &Path,
    data: &[SensorDataPoint],
    data_type: &str,
    format: ExportFormat,
    date: NaiveDate,
) -> Result<PathBuf> {
    fs::create_dir_all(export_dir)?;

    let content = match format {
        ExportFormat::Csv => generate_csv(data, data_type),
        ExportFormat::Html => generate_html_report(data, data_type, date),
    };

    let path = export_dir.join(export_file_name(data_type, date, format));
    fs::write(&path, content)?;

    log_info!("📄 Exported {} rows to {}", data.len(), path.display());
    Ok(path)
}
