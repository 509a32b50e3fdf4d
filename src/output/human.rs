//! Human-readable output formatting

use crate::parser::Facts;

pub fn format_human(facts: &Facts) -> String {
    if facts.is_empty() {
        return "No filesets found".to_string();
    }

    let mut output = String::from("Filesets\n--------\n");
    output.push_str(&format!(
        "{:<36} {:<14} {:<12} {:<12} {:<10}\n",
        "NAME", "LEVEL", "STATE", "TYPE", "PTF"
    ));
    output.push_str(&"-".repeat(88));
    output.push('\n');

    for fileset in &facts.filesets {
        let name = if fileset.is_locked() {
            format!("{}*", fileset.name)
        } else {
            fileset.name.clone()
        };
        output.push_str(&format!(
            "{:<36} {:<14} {:<12} {:<12} {:<10}\n",
            truncate(&name, 36),
            truncate(&fileset.level, 14),
            fileset.state,
            fileset.kind.map(|k| k.label()).unwrap_or("-"),
            fileset.ptf.as_deref().unwrap_or("-")
        ));
    }

    let locked = facts.filesets.iter().filter(|f| f.is_locked()).count();
    output.push_str(&format!("\n{} filesets", facts.len()));
    if locked > 0 {
        output.push_str(&format!(" ({} locked by interim fix manager, marked *)", locked));
    }
    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_records;

    #[test]
    fn test_empty() {
        assert_eq!(format_human(&Facts::default()), "No filesets found");
    }

    #[test]
    fn test_table_rows() {
        let facts = Facts::new(
            parse_records(
                "/etc/objrepos:bos.rte:7.2.3.0:U123456:APPLIED:I:Runtime::\n\
                 /etc/objrepos:bos.rte.lib:7.2.3.1:::COMMITTED:M:Libraries:EFIXLOCKED\n",
            )
            .unwrap(),
        );
        let output = format_human(&facts);
        assert!(output.contains("bos.rte.lib*"));
        assert!(output.contains("U123456"));
        assert!(output.contains("2 filesets (1 locked"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("devices.pciex.long.name", 10), "devices...");
    }
}
