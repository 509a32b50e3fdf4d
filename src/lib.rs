//! lpp-facts - installed AIX filesets as structured facts
//!
//! Runs `lslpp -lacq`, splits its colon-delimited listing and normalizes each
//! line into a [`PackageRecord`] with its VRMF, state, type and interim fix
//! lock decoded.
//!
//! # Example
//!
//! ```no_run
//! use lpp_facts::{gather_facts, FactsContext, SelectionCriteria, SystemRunner};
//!
//! let request = SelectionCriteria::new().with_patterns(["bos.rte.*"]).validate().unwrap();
//! let facts = gather_facts(&request, &FactsContext::default(), &SystemRunner).unwrap();
//! for fileset in &facts.filesets {
//!     println!("{} {}", fileset.name, fileset.level);
//! }
//! ```

pub mod cli;
pub mod engine;
pub mod error;
pub mod output;
pub mod parser;
pub mod query;

pub use engine::{explain_query, facts_from_output, gather_facts, CommandOutput, CommandRunner, FactsContext, SystemRunner};
pub use error::{LppError, Result};
pub use output::{format_output, OutputFormat};
pub use parser::{parse_records, Facts, FilesetType, PackageRecord, Vrmf};
pub use query::{build_args, QueryRequest, Selection, SelectionCriteria};
