//! JSON output formatting

use crate::error::Result;
use crate::parser::Facts;

/// Pretty-printed `{"filesets": [...]}`.
pub fn format_json(facts: &Facts) -> Result<String> {
    Ok(serde_json::to_string_pretty(facts)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_records;
    use serde_json::Value;

    #[test]
    fn test_json_shape() {
        let facts = Facts::new(
            parse_records("/etc/objrepos:bos.rte.lib:7.2.3.1:::COMMITTED:M:Libraries:EFIXLOCKED\n")
                .unwrap(),
        );
        let value: Value = serde_json::from_str(&format_json(&facts).unwrap()).unwrap();
        let fileset = &value["filesets"][0];
        assert_eq!(fileset["name"], "bos.rte.lib");
        assert_eq!(fileset["vrmf"]["mod"], 3);
        assert_eq!(fileset["type"], "maintenance");
        assert_eq!(fileset["emgr_locked"], true);
        assert!(fileset.get("ptf").is_none());
    }

    #[test]
    fn test_empty_facts() {
        let value: Value = serde_json::from_str(&format_json(&Facts::default()).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!({ "filesets": [] }));
    }
}
