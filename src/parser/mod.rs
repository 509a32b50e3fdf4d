//! Parsing of lslpp listing output

pub mod normalizer;
pub mod record;
pub mod tokenizer;

pub use normalizer::{normalize, parse_records, parse_vrmf};
pub use record::{Facts, FilesetType, PackageRecord, Vrmf};
pub use tokenizer::{tokenize, RawFields};
