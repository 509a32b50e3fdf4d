//! Raw lslpp fields to `PackageRecord`

use crate::error::{LppError, Result};
use crate::parser::record::{FilesetType, PackageRecord, Vrmf};
use crate::parser::tokenizer::{tokenize, RawFields};

/// Lock flag lslpp prints for filesets held by the interim fix manager.
pub const EFIX_LOCKED: &str = "EFIXLOCKED";

const FILESET_TYPES: [(&str, FilesetType); 4] = [
    ("I", FilesetType::Install),
    ("M", FilesetType::Maintenance),
    ("E", FilesetType::Enhancement),
    ("F", FilesetType::Fix),
];

/// Map a non-empty type code. Unknown codes become `Unrecognized`.
pub fn fileset_type(code: &str) -> FilesetType {
    FILESET_TYPES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, kind)| *kind)
        .unwrap_or(FilesetType::Unrecognized)
}

/// Decompose a level into VRMF.
///
/// Returns `Ok(None)` unless the level has exactly four dot-separated
/// segments. Surrounding whitespace in a segment is ignored. Four segments
/// that are not all integers in `u64` range is a corrupt level.
pub fn parse_vrmf(level: &str) -> Result<Option<Vrmf>> {
    let segments: Vec<&str> = level.split('.').collect();
    if segments.len() != 4 {
        return Ok(None);
    }

    let parse = |segment: &str| {
        segment.trim().parse::<u64>().map_err(|e| LppError::Integrity {
            level: level.to_string(),
            reason: format!("segment '{}': {}", segment, e),
        })
    };

    Ok(Some(Vrmf {
        ver: parse(segments[0])?,
        rel: parse(segments[1])?,
        modification: parse(segments[2])?,
        fix: parse(segments[3])?,
    }))
}

pub fn normalize(raw: &RawFields<'_>) -> Result<PackageRecord> {
    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());

    Ok(PackageRecord {
        source: raw.source().to_string(),
        name: raw.name().to_string(),
        level: raw.level().to_string(),
        vrmf: parse_vrmf(raw.level())?,
        ptf: non_empty(raw.ptf_id()),
        state: raw.state().to_lowercase(),
        kind: (!raw.type_code().is_empty()).then(|| fileset_type(raw.type_code())),
        description: raw.description().to_string(),
        locked: (raw.lock_flag() == EFIX_LOCKED).then_some(true),
    })
}

/// Tokenize and normalize a whole lslpp listing, preserving line order.
pub fn parse_records(output: &str) -> Result<Vec<PackageRecord>> {
    tokenize(output).map(|raw| normalize(&raw)).collect()
}
