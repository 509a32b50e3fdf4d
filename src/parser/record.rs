//! Fileset record types

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One installed fileset or fileset update as reported by lslpp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    /// Object repository the entry came from, e.g. `/etc/objrepos`
    pub source: String,
    pub name: String,
    /// Level exactly as reported
    pub level: String,
    /// Present only when `level` is four dot-separated integers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrmf: Option<Vrmf>,
    /// Program temporary fix identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ptf: Option<String>,
    /// Lower-cased lifecycle state (applied, committed, efixlocked, ...)
    pub state: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<FilesetType>,
    pub description: String,
    /// `Some(true)` when held by the interim fix manager, otherwise absent
    #[serde(rename = "emgr_locked", default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
}

impl PackageRecord {
    pub fn is_locked(&self) -> bool {
        self.locked.unwrap_or(false)
    }
}

/// Version, release, modification, fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Vrmf {
    pub ver: u64,
    pub rel: u64,
    #[serde(rename = "mod")]
    pub modification: u64,
    pub fix: u64,
}

impl fmt::Display for Vrmf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}.{}", self.ver, self.rel, self.modification, self.fix)
    }
}

/// Fileset type decoded from the single-letter lslpp code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilesetType {
    /// Install image (base level)
    Install,
    Maintenance,
    Enhancement,
    Fix,
    /// A non-empty code outside the known table. Serializes as an empty
    /// label rather than being dropped, matching what existing consumers of
    /// these facts already receive.
    Unrecognized,
}

impl FilesetType {
    pub fn label(&self) -> &'static str {
        match self {
            FilesetType::Install => "install",
            FilesetType::Maintenance => "maintenance",
            FilesetType::Enhancement => "enhancement",
            FilesetType::Fix => "fix",
            FilesetType::Unrecognized => "",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "install" => FilesetType::Install,
            "maintenance" => FilesetType::Maintenance,
            "enhancement" => FilesetType::Enhancement,
            "fix" => FilesetType::Fix,
            _ => FilesetType::Unrecognized,
        }
    }
}

impl fmt::Display for FilesetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for FilesetType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for FilesetType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(FilesetType::from_label(&label))
    }
}

/// Result handed to the automation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facts {
    pub filesets: Vec<PackageRecord>,
}

impl Facts {
    pub fn new(filesets: Vec<PackageRecord>) -> Self {
        Self { filesets }
    }

    pub fn len(&self) -> usize {
        self.filesets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filesets.is_empty()
    }
}
