use super::ReportError;
use std::path::Path;
use tracing::info;

/// Displays a saved chart to the user.
pub trait ChartViewer {
    fn show(&self, path: &Path) -> Result<(), ReportError>;
}

/// Hands the image to the desktop's default viewer and returns without
/// waiting for it to close.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemViewer;

impl ChartViewer for SystemViewer {
    fn show(&self, path: &Path) -> Result<(), ReportError> {
        open::that_detached(path).map_err(|source| ReportError::Viewer {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "chart opened in image viewer");
        Ok(())
    }
}
