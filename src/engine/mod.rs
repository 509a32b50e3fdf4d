//! Execution engine for fileset queries

pub mod executor;
pub mod runner;

pub use executor::{explain_query, facts_from_output, gather_facts, FactsContext, LSLPP};
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
