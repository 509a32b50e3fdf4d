//! Fileset fact gathering

use crate::engine::runner::{display_command, resolve_program, CommandRunner};
use crate::error::Result;
use crate::output::OutputFormat;
use crate::parser::{parse_records, Facts};
use crate::query::{build_args, QueryRequest};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const LSLPP: &str = "lslpp";

/// Runtime configuration for a query
#[derive(Debug, Clone)]
pub struct FactsContext {
    /// Explicit lslpp binary; PATH is searched when unset
    pub lslpp: Option<PathBuf>,
    pub output_format: OutputFormat,
}

impl Default for FactsContext {
    fn default() -> Self {
        Self {
            lslpp: None,
            output_format: OutputFormat::Human,
        }
    }
}

/// Run lslpp for `request` and parse its listing.
///
/// A non-zero exit status is logged and otherwise ignored; whatever lslpp
/// printed is still parsed.
pub fn gather_facts(
    request: &QueryRequest,
    ctx: &FactsContext,
    runner: &dyn CommandRunner,
) -> Result<Facts> {
    let program = resolve_program(LSLPP, ctx.lslpp.as_deref())?;
    let args = build_args(request);
    debug!(command = %display_command(&program, &args), "running lslpp");

    let output = runner.run(&program, &args)?;
    if !output.success() {
        warn!(
            status = ?output.status,
            stderr = %output.stderr.trim(),
            "lslpp exited unsuccessfully, parsing output anyway"
        );
    }

    let filesets = parse_records(&output.stdout)?;
    info!(count = filesets.len(), "collected fileset facts");
    Ok(Facts::new(filesets))
}

/// Parse previously captured `lslpp -lacq` output.
pub fn facts_from_output(output: &str) -> Result<Facts> {
    let filesets = parse_records(output)?;
    debug!(count = filesets.len(), "parsed captured lslpp output");
    Ok(Facts::new(filesets))
}

/// Describe the lslpp invocation `gather_facts` would perform, without running it.
pub fn explain_query(request: &QueryRequest, ctx: &FactsContext) -> String {
    let program = resolve_program(LSLPP, ctx.lslpp.as_deref())
        .unwrap_or_else(|_| Path::new(LSLPP).to_path_buf());
    display_command(&program, &build_args(request))
}
