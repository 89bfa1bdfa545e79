//! Export module for Tally
//!
//! One-shot export of a session's state:
//! - JSON: the export document, which can be loaded back
//! - YAML: the same document, human-readable
//! - CSV: one row per line item (spreadsheet-compatible)

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_items_csv;
pub use json::{export_json, import_from_json, BudgetExport, ExpenseRecord, IncomeRecord};
pub use yaml::export_yaml;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::config::ExportFormat;
use crate::error::{TallyError, TallyResult};
use crate::models::BudgetState;

/// Default file name for an export made on `date`, e.g. `budget_20250131.json`
pub fn default_export_filename(format: ExportFormat, date: NaiveDate) -> String {
    format!("budget_{}.{}", date.format("%Y%m%d"), format.extension())
}

/// Write a session to `writer` in the given format
pub fn write_export<W: Write>(
    state: &BudgetState,
    format: ExportFormat,
    writer: &mut W,
) -> TallyResult<()> {
    match format {
        ExportFormat::Json => export_json(state, writer, true),
        ExportFormat::Yaml => export_yaml(state, writer),
        ExportFormat::Csv => export_items_csv(state, writer),
    }
}

/// Write a session to a file, creating parent directories as needed
pub fn export_to_file(state: &BudgetState, format: ExportFormat, path: &Path) -> TallyResult<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| TallyError::Io(format!("Failed to create {}: {}", parent.display(), e)))?;
    }

    let file = File::create(path)
        .map_err(|e| TallyError::Io(format!("Failed to create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);
    write_export(state, format, &mut writer)?;
    writer
        .flush()
        .map_err(|e| TallyError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

    info!(path = %path.display(), ?format, "exported budget");
    Ok(path.to_path_buf())
}

/// Load a JSON export from disk
pub fn load_export_file(path: &Path) -> TallyResult<BudgetState> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| TallyError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    let state = import_from_json(&contents)?;
    info!(path = %path.display(), "loaded budget export");
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::BudgetService;
    use tempfile::TempDir;

    #[test]
    fn test_default_export_filename() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(
            default_export_filename(ExportFormat::Json, date),
            "budget_20250131.json"
        );
        assert_eq!(
            default_export_filename(ExportFormat::Csv, date),
            "budget_20250131.csv"
        );
    }

    #[test]
    fn test_export_to_file_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("budget.json");

        let mut state = BudgetState::default();
        BudgetService::new(&mut state)
            .add_income("Salary", "1000")
            .unwrap();

        let written = export_to_file(&state, ExportFormat::Json, &path).unwrap();
        assert_eq!(written, path);

        let loaded = load_export_file(&path).unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_export_file(&temp_dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, TallyError::Io(_)));
    }
}
