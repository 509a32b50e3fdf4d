//! lslpp argument construction

use crate::query::selection::{QueryRequest, Selection};

/// Long listing, all install locations, colon-separated, no headers.
pub const LISTING_FLAGS: &str = "-lacq";
pub const BASE_LEVELS_FLAG: &str = "-I";
pub const ROOT_PATH_FLAG: &str = "-R";
pub const BUNDLE_FLAG: &str = "-b";
pub const ALL_SELECTOR: &str = "all";

/// Build the lslpp argument list for a validated request.
pub fn build_args(request: &QueryRequest) -> Vec<String> {
    let mut args = vec![LISTING_FLAGS.to_string()];

    if request.base_levels_only {
        args.push(BASE_LEVELS_FLAG.to_string());
    }

    if let Some(ref path) = request.root_path {
        args.push(ROOT_PATH_FLAG.to_string());
        args.push(path.clone());
    }

    match &request.selection {
        Selection::Bundle(bundle) => {
            args.push(BUNDLE_FLAG.to_string());
            args.push(bundle.clone());
        }
        Selection::Patterns(patterns) => args.extend(patterns.iter().cloned()),
        Selection::All => args.push(ALL_SELECTOR.to_string()),
    }

    args
}
