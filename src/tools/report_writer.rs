// src/tools/report_writer.rs
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

pub const DEFAULT_REPORT_FILENAME: &str = "business_match_report.txt";

const REPORT_HEADER: &str = "--- Business Match Analysis Report ---";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Overwrite the destination with a timestamped header followed by the
/// report text. This never returns an error: the outcome, success or not,
/// is reported through the returned message.
pub async fn save_report(report_text: &str, destination: Option<&Path>) -> String {
    let path = destination
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_FILENAME));

    match write_report(report_text, &path).await {
        Ok(()) => {
            info!("Report saved to {}", path.display());
            format!("Report successfully saved to {}", path.display())
        }
        Err(e) => {
            error!("Report save failed: {}", e);
            format!("Error saving file: {}", e)
        }
    }
}

async fn write_report(report_text: &str, path: &Path) -> Result<(), PersistenceError> {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let contents = format!("{REPORT_HEADER}\nGenerated On: {timestamp}\n\n{report_text}");

    tokio::fs::write(path, contents)
        .await
        .map_err(|source| PersistenceError::Write {
            path: path.to_path_buf(),
            source,
        })
}
