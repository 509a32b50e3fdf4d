//! Output formatting

use crate::error::Result;
use crate::output::human::format_human;
use crate::output::json::format_json;
use crate::parser::Facts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Fileset table for terminals
    Human,
    /// `{"filesets": [...]}` for the automation layer
    Json,
}

/// Render gathered facts. Only the JSON path can fail.
pub fn format_output(facts: &Facts, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(format_human(facts)),
        OutputFormat::Json => format_json(facts),
    }
}
