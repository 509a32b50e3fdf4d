//! Query construction for lslpp

pub mod builder;
pub mod selection;

pub use builder::build_args;
pub use selection::{QueryRequest, Selection, SelectionCriteria};
