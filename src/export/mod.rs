//! CSV and HTML report export of sensor history.

mod csv;
mod file_name;
mod html_report;
mod write_export;

pub use csv::generate_csv;
pub use file_name::export_file_name;
pub use html_report::generate_html_report;
pub use write_export::write_export;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Html,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Html => "html",
        }
    }
}
