mod chart;
mod distribution;
mod font;
mod table;
mod viewer;

pub use chart::{BarChart, ChartBar};
pub use distribution::{ChartOrder, LabelCount, LabelDistribution};
pub use table::{export_table, format_decimal, write_table, TABLE_HEADER};
pub use viewer::{ChartViewer, SystemViewer};

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write results file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode results table: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to save chart image: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to open chart '{}' in an image viewer: {source}", path.display())]
    Viewer {
        path: PathBuf,
        source: std::io::Error,
    },
}
