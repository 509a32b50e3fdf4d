//! Fileset selection and boundary validation

use crate::error::{LppError, Result};
use serde::{Deserialize, Serialize};

/// Unvalidated selection as it arrives from a caller.
///
/// `patterns` and `bundle` are mutually exclusive. Presence counts, not
/// emptiness: an empty pattern list next to a bundle is still rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionCriteria {
    pub patterns: Option<Vec<String>>,
    pub bundle: Option<String>,
    pub root_path: Option<String>,
    pub base_levels_only: bool,
}

/// Which filesets to list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// Fileset name patterns (`*` and `?` are expanded by lslpp)
    Patterns(Vec<String>),
    /// A bundle file used as the fileset list source
    Bundle(String),
    All,
}

/// A validated query, ready for the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub selection: Selection,
    pub root_path: Option<String>,
    pub base_levels_only: bool,
}

impl Default for QueryRequest {
    fn default() -> Self {
        Self {
            selection: Selection::All,
            root_path: None,
            base_levels_only: false,
        }
    }
}

impl SelectionCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_bundle(mut self, bundle: impl Into<String>) -> Self {
        self.bundle = Some(bundle.into());
        self
    }

    pub fn with_root_path(mut self, path: impl Into<String>) -> Self {
        self.root_path = Some(path.into());
        self
    }

    pub fn base_levels_only(mut self, enabled: bool) -> Self {
        self.base_levels_only = enabled;
        self
    }

    /// Check mutual exclusivity and fold the criteria into a `QueryRequest`.
    pub fn validate(self) -> Result<QueryRequest> {
        let selection = match (self.patterns, self.bundle) {
            (Some(_), Some(_)) => {
                return Err(LppError::Validation(
                    "parameters are mutually exclusive: filesets|bundle".to_string(),
                ));
            }
            (None, Some(bundle)) if !bundle.is_empty() => Selection::Bundle(bundle),
            (Some(patterns), None) if !patterns.is_empty() => Selection::Patterns(patterns),
            _ => Selection::All,
        };

        Ok(QueryRequest {
            selection,
            root_path: self.root_path.filter(|p| !p.is_empty()),
            base_levels_only: self.base_levels_only,
        })
    }
}
