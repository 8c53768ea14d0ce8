//! Export Module
//!
//! Writes what the active tab lists to disk.
//!
//! - Dashboard → activity log
//! - Content → the currently filtered articles
//! - CSV by default, JSON on request (`:export json`)
//! - Files land in the configured export dir, else `<data dir>/exports/`

mod csv_export;
mod json_export;

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::Local;
use tracing::{info, warn};

use crate::app::{App, Tab};
use crate::config;
use crate::core::{Action, NotifyLevel};
use crate::domain::fixtures::ACTIVITY_LOG;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(Error::UnknownExportFormat(s.to_string())),
        }
    }
}

/// Get the export directory path, creating it if needed
fn get_export_dir(configured: Option<&Path>) -> std::io::Result<PathBuf> {
    let export_dir = configured
        .map(Path::to_path_buf)
        .or_else(|| config::data_dir().map(|dir| dir.join("exports")))
        .unwrap_or_else(|| PathBuf::from(".assyad").join("exports"));
    fs::create_dir_all(&export_dir)?;
    Ok(export_dir)
}

/// Generate a timestamped filename
fn generate_filename(prefix: &str, format: ExportFormat) -> String {
    let timestamp = Local::now().format("%Y-%m-%d-%H%M%S");
    format!("{}-{}.{}", prefix, timestamp, format.extension())
}

/// Create a fresh export file in `dir`. Never reuses an existing path: a name
/// taken within the same second gets a `-1`, `-2`, ... suffix.
fn create_export_file(
    dir: &Path,
    prefix: &str,
    format: ExportFormat,
) -> io::Result<(PathBuf, File)> {
    let name = generate_filename(prefix, format);
    let stem = name
        .strip_suffix(&format!(".{}", format.extension()))
        .unwrap_or(&name)
        .to_string();

    let mut attempt = 0u32;
    loop {
        let candidate = if attempt == 0 {
            dir.join(&name)
        } else {
            dir.join(format!("{}-{}.{}", stem, attempt, format.extension()))
        };
        match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(file) => return Ok((candidate, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(e),
        }
    }
}

/// Export current view data based on the active tab
pub fn export_current_view(app: &App, format: ExportFormat) -> Action {
    match app.view.active_tab {
        Tab::Dashboard => export_activity(app, format),
        Tab::Content => export_posts(app, format),
        Tab::Editor | Tab::Media => Action::Notify(
            "Nothing to export in this view".to_string(),
            NotifyLevel::Warn,
        ),
    }
}

fn export_posts(app: &App, format: ExportFormat) -> Action {
    let posts = app.filtered_posts();
    if posts.is_empty() {
        return Action::Notify("No articles to export".to_string(), NotifyLevel::Warn);
    }

    run_export(app, "articles", format, "articles", |file| match format {
        ExportFormat::Csv => csv_export::write_posts(file, &posts),
        ExportFormat::Json => json_export::write_posts(file, &posts),
    })
}

fn export_activity(app: &App, format: ExportFormat) -> Action {
    run_export(app, "activity", format, "activities", |file| match format {
        ExportFormat::Csv => csv_export::write_activity(file, ACTIVITY_LOG),
        ExportFormat::Json => json_export::write_activity(file, ACTIVITY_LOG),
    })
}

fn run_export<F>(app: &App, prefix: &str, format: ExportFormat, noun: &str, write: F) -> Action
where
    F: FnOnce(File) -> Result<usize>,
{
    let export_dir = match get_export_dir(app.export_dir.as_deref()) {
        Ok(dir) => dir,
        Err(e) => {
            warn!(error = %e, "export dir unavailable");
            return Action::Notify(
                format!("Failed to create export directory: {}", e),
                NotifyLevel::Error,
            );
        }
    };

    let (path, file) = match create_export_file(&export_dir, prefix, format) {
        Ok(created) => created,
        Err(e) => {
            warn!(dir = %export_dir.display(), error = %e, "export file not created");
            return Action::Notify(format!("Export failed: {}", e), NotifyLevel::Error);
        }
    };

    match write(file) {
        Ok(count) => {
            info!(path = %path.display(), count, %format, "export written");
            Action::Notify(
                format!("Exported {} {} to {}", count, noun, path.display()),
                NotifyLevel::Info,
            )
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "export failed");
            Action::Notify(format!("Export failed: {}", e), NotifyLevel::Error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatusFilter;

    fn files_in(dir: &Path) -> Vec<PathBuf> {
        let mut entries: Vec<PathBuf> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        entries.sort();
        entries
    }

    fn only_file(dir: &Path) -> PathBuf {
        let mut entries: Vec<PathBuf> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        assert_eq!(entries.len(), 1);
        entries.remove(0)
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_export_filtered_posts_csv() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new();
        app.export_dir = Some(dir.path().to_path_buf());
        app.select_tab(Tab::Content);
        app.set_status_filter(StatusFilter::Draft);

        let action = export_current_view(&app, ExportFormat::Csv);
        assert!(matches!(action, Action::Notify(_, NotifyLevel::Info)), "{action:?}");

        let path = only_file(dir.path());
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("csv"));
        let content = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("id,title,status"));
        assert!(lines[1].contains("Sustainability Initiatives 2026"));
        assert!(lines[1].contains("Sustainability;Corporate"));
    }

    #[test]
    fn test_export_activity_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new();
        app.export_dir = Some(dir.path().to_path_buf());

        export_current_view(&app, ExportFormat::Json);

        let content = fs::read_to_string(only_file(dir.path())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), ACTIVITY_LOG.len());
        assert_eq!(entries[0]["actor"], "Sijo Joseph");
    }

    #[test]
    fn test_export_empty_result_is_a_warning() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new();
        app.export_dir = Some(dir.path().to_path_buf());
        app.select_tab(Tab::Content);
        app.set_query("nonexistent-xyz");

        let action = export_current_view(&app, ExportFormat::Csv);
        assert!(matches!(action, Action::Notify(_, NotifyLevel::Warn)));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_back_to_back_exports_keep_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new();
        app.export_dir = Some(dir.path().to_path_buf());
        app.select_tab(Tab::Content);

        app.set_status_filter(StatusFilter::Draft);
        let first = export_current_view(&app, ExportFormat::Csv);
        app.set_status_filter(StatusFilter::All);
        let second = export_current_view(&app, ExportFormat::Csv);
        assert_ne!(first, second);

        let files = files_in(dir.path());
        assert_eq!(files.len(), 2, "{files:?}");
        let mut row_counts: Vec<usize> = files
            .iter()
            .map(|path| fs::read_to_string(path).unwrap().lines().count() - 1)
            .collect();
        row_counts.sort();
        assert_eq!(row_counts, vec![1, 3]);
    }

    #[test]
    fn test_export_file_name_gets_suffix_when_taken() {
        let dir = tempfile::tempdir().unwrap();
        let (first, _) = create_export_file(dir.path(), "articles", ExportFormat::Json).unwrap();
        let (second, _) = create_export_file(dir.path(), "articles", ExportFormat::Json).unwrap();
        let (third, _) = create_export_file(dir.path(), "articles", ExportFormat::Json).unwrap();
        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_eq!(files_in(dir.path()).len(), 3);
        assert!(third.to_string_lossy().ends_with(".json"));
    }

    #[test]
    fn test_nothing_to_export_in_editor() {
        let mut app = App::new();
        app.select_tab(Tab::Editor);
        assert!(matches!(
            export_current_view(&app, ExportFormat::Csv),
            Action::Notify(_, NotifyLevel::Warn)
        ));
    }
}
