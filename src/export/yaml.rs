//! YAML Export functionality
//!
//! Writes the same document as the JSON export in a human-readable form.

use crate::error::{TallyError, TallyResult};
use crate::export::json::BudgetExport;
use crate::models::BudgetState;
use chrono::Local;
use std::io::Write;

/// Export a session to YAML with a short header comment
pub fn export_yaml<W: Write>(state: &BudgetState, writer: &mut W) -> TallyResult<()> {
    let export = BudgetExport::from_state(state);

    let header = format!(
        "# Tally budget export\n# Generated: {}\n# App Version: {}\n\n",
        Local::now().format("%Y-%m-%d %H:%M"),
        env!("CARGO_PKG_VERSION")
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| TallyError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TallyError::Export(e.to_string()))?;

    Ok(())
}
