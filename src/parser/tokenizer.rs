//! Splits `lslpp -lacq` output into raw field tuples
//!
//! Each line is `Source:Fileset:Level:PTF Id:State:Type:Description:EFIX Locked`.
//! Lines with fewer fields (continuations, headers, truncated output) are
//! dropped without error; fields past the eighth are ignored.

use tracing::trace;

pub const FIELD_DELIMITER: char = ':';
pub const FIELD_COUNT: usize = 8;

/// The eight trimmed fields of one lslpp line, borrowed from the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFields<'a> {
    fields: [&'a str; FIELD_COUNT],
}

impl<'a> RawFields<'a> {
    /// Split a single line, or `None` if it carries fewer than eight fields.
    pub fn from_line(line: &'a str) -> Option<Self> {
        let mut fields = [""; FIELD_COUNT];
        let mut count = 0;

        for (slot, field) in fields.iter_mut().zip(line.split(FIELD_DELIMITER)) {
            *slot = field.trim();
            count += 1;
        }

        if count < FIELD_COUNT {
            trace!(fields = count, line, "skipping short lslpp line");
            return None;
        }

        Some(Self { fields })
    }

    pub fn source(&self) -> &'a str {
        self.fields[0]
    }

    pub fn name(&self) -> &'a str {
        self.fields[1]
    }

    pub fn level(&self) -> &'a str {
        self.fields[2]
    }

    pub fn ptf_id(&self) -> &'a str {
        self.fields[3]
    }

    pub fn state(&self) -> &'a str {
        self.fields[4]
    }

    pub fn type_code(&self) -> &'a str {
        self.fields[5]
    }

    pub fn description(&self) -> &'a str {
        self.fields[6]
    }

    pub fn lock_flag(&self) -> &'a str {
        self.fields[7]
    }
}

/// Characters that end a line. `\r\n` splits twice; the empty piece
/// between is dropped as a short line.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Lazily tokenize raw lslpp output. Call again for a fresh pass.
pub fn tokenize(output: &str) -> impl Iterator<Item = RawFields<'_>> {
    output.split(is_line_break).filter_map(RawFields::from_line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_trimmed() {
        let raw = RawFields::from_line(" /etc/objrepos : bos.rte :7.2.3.0: :APPLIED:I: Runtime :").unwrap();
        assert_eq!(raw.source(), "/etc/objrepos");
        assert_eq!(raw.name(), "bos.rte");
        assert_eq!(raw.ptf_id(), "");
        assert_eq!(raw.description(), "Runtime");
        assert_eq!(raw.lock_flag(), "");
    }

    #[test]
    fn test_short_line_dropped() {
        assert!(RawFields::from_line("/etc/objrepos:bos.rte:7.2.3.0:U1:APPLIED").is_none());
        assert!(RawFields::from_line("").is_none());
        assert!(RawFields::from_line("a:b:c:d:e:f:g").is_none());
    }

    #[test]
    fn test_exactly_eight_fields_accepted() {
        assert!(RawFields::from_line(":::::::").is_some());
    }

    #[test]
    fn test_extra_fields_ignored() {
        let raw = RawFields::from_line("s:n:1.0.0.0:p:COMMITTED:F:d:EFIXLOCKED:extra:more").unwrap();
        assert_eq!(raw.lock_flag(), "EFIXLOCKED");
    }

    #[test]
    fn test_tokenize_preserves_order_and_drops_noise() {
        let output = "\
/usr/lib/objrepos:bos.rte:7.2.3.0::COMMITTED:I:Runtime::
  continuation of a description
/etc/objrepos:bos.rte:7.2.3.0::COMMITTED:I:Runtime::\r
/usr/lib/objrepos:xlC.rte:16.1.0.3::COMMITTED:I:XL C/C++ Runtime::
";
        let names: Vec<_> = tokenize(output).map(|r| (r.source(), r.name())).collect();
        assert_eq!(
            names,
            vec![
                ("/usr/lib/objrepos", "bos.rte"),
                ("/etc/objrepos", "bos.rte"),
                ("/usr/lib/objrepos", "xlC.rte"),
            ]
        );
    }

    #[test]
    fn test_tokenize_splits_on_every_line_break() {
        let output = "s:a:l::APPLIED:I:d:\rs:b:l::APPLIED:I:d:\u{2028}s:c:l::APPLIED:I:d:\x0cs:d:l::APPLIED:I:d:\r\n";
        let names: Vec<_> = tokenize(output).map(|r| r.name()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_tokenize_is_restartable() {
        let output = "s:n:l:p:APPLIED:I:d:\n";
        assert_eq!(tokenize(output).count(), 1);
        assert_eq!(tokenize(output).count(), 1);
    }

    #[test]
    fn test_tokenize_empty_output() {
        assert_eq!(tokenize("").count(), 0);
    }
}
