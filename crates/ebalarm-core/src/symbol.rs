//! PLC symbol records
//!
//! A `Symbol` is one row of a PLC symbol export: identifier, data type and
//! the free-text comment that becomes the alarm message.

use serde::Serialize;

/// A parsed PLC symbol.
///
/// The comment is normalized once, in [`Symbol::new`], and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    name: String,
    #[serde(rename = "type")]
    data_type: String,
    comment: String,
}

impl Symbol {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>, comment: &str) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            comment: normalize_comment(comment),
        }
    }

    /// Symbol identifier, used verbatim as the HMI read address
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    /// Normalized comment, used verbatim as the alarm message
    pub fn comment(&self) -> &str {
        &self.comment
    }
}

/// Trim the comment and turn literal `\n` sequences into line breaks.
pub fn normalize_comment(raw: &str) -> String {
    raw.trim().replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_escaped_newline_becomes_line_break() {
        let symbol = Symbol::new("TAG1", "BOOL", "Hello\\nWorld");
        assert_eq!(symbol.comment(), "Hello\nWorld");
    }

    #[test]
    fn test_comment_is_trimmed() {
        let symbol = Symbol::new("TAG1", "BOOL", "  Pump overload \r");
        assert_eq!(symbol.comment(), "Pump overload");
    }

    #[test]
    fn test_name_and_type_are_kept_verbatim() {
        let symbol = Symbol::new(" stS1DefImdt.x ", "BOOL", "");
        assert_eq!(symbol.name(), " stS1DefImdt.x ");
        assert_eq!(symbol.data_type(), "BOOL");
        assert_eq!(symbol.comment(), "");
    }

    #[test]
    fn test_serializes_type_field() {
        let symbol = Symbol::new("A", "INT", "c");
        let json = serde_json::to_value(&symbol).unwrap();
        assert_eq!(json["type"], "INT");
        assert_eq!(json["name"], "A");
    }
}
