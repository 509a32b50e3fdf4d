//! CLI argument parsing

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::query::SelectionCriteria;

#[derive(Parser)]
#[command(name = "lpp-facts")]
#[command(author, version, about = "Report installed AIX filesets as structured facts", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the lslpp binary (searched on PATH by default)
    #[arg(long, global = true, env = "LPP_FACTS_LSLPP", value_name = "PATH")]
    pub lslpp: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum SubCommand {
    /// Query installed filesets on this system
    Query {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Parse captured `lslpp -lacq` output
    Parse {
        /// File holding the output; reads stdin when absent or `-`
        file: Option<PathBuf>,
    },

    /// Show the lslpp command a query would run, without running it
    Explain {
        #[command(flatten)]
        selection: SelectionArgs,
    },
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Fileset names; `*` and `?` patterns are expanded by lslpp
    #[arg(value_name = "FILESET", conflicts_with = "bundle")]
    pub filesets: Vec<String>,

    /// Bundle file to use as the fileset list source
    #[arg(long, short = 'b')]
    pub bundle: Option<String>,

    /// Alternate install location
    #[arg(long, short = 'p')]
    pub path: Option<String>,

    /// Limit listings to base level filesets (no updates)
    #[arg(long, short = 'I')]
    pub base_levels_only: bool,
}

impl SelectionArgs {
    pub fn to_criteria(&self) -> SelectionCriteria {
        SelectionCriteria {
            patterns: (!self.filesets.is_empty()).then(|| self.filesets.clone()),
            bundle: self.bundle.clone(),
            root_path: self.path.clone(),
            base_levels_only: self.base_levels_only,
        }
    }
}
