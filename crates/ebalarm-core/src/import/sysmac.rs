//! Sysmac Studio variable table
//!
//! One record per line, TAB separated: `name, type, <unused>, comment, ...`.

use std::io::BufRead;

use crate::error::{AlarmError, Result};
use crate::symbol::Symbol;

use super::SymbolReader;

const MIN_FIELDS: usize = 4;

/// Line-oriented TSV reader
#[derive(Debug, Clone, Copy, Default)]
pub struct TabDelimitedReader;

impl TabDelimitedReader {
    fn parse_line(line: &str, line_number: usize) -> Result<Symbol> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < MIN_FIELDS {
            return Err(AlarmError::MalformedRecord {
                line: line_number,
                found: fields.len(),
            });
        }
        // fields[2] is not used
        Ok(Symbol::new(fields[0].trim_start(), fields[1], fields[3]))
    }
}

impl SymbolReader for TabDelimitedReader {
    fn read_symbols(&self, input: &mut dyn BufRead) -> Result<Vec<Symbol>> {
        let mut symbols = Vec::new();
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let line = line.trim_end_matches(&['\r', '\n'][..]);
            symbols.push(Self::parse_line(line, index + 1)?);
        }
        Ok(symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(input: &str) -> Result<Vec<Symbol>> {
        TabDelimitedReader.read_symbols(&mut Cursor::new(input.as_bytes()))
    }

    #[test]
    fn test_fields_map_to_name_type_comment() {
        let symbols = read("TAG1\tBOOL\tunused\tHello\\nWorld").unwrap();
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name(), "TAG1");
        assert_eq!(symbols[0].data_type(), "BOOL");
        assert_eq!(symbols[0].comment(), "Hello\nWorld");
    }

    #[test]
    fn test_third_field_is_skipped() {
        let symbols = read("TAG1\tBOOL\tGlobal\tComment").unwrap();
        assert!(!symbols[0].comment().contains("Global"));
        assert!(!symbols[0].data_type().contains("Global"));
    }

    #[test]
    fn test_leading_whitespace_is_trimmed_from_name() {
        let symbols = read("  stS1DefImdt.x\tBOOL\t\tFault\n").unwrap();
        assert_eq!(symbols[0].name(), "stS1DefImdt.x");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let symbols = read("TAG1\tBOOL\t\tComment\tExtra\tMore\n").unwrap();
        assert_eq!(symbols[0].comment(), "Comment");
    }

    #[test]
    fn test_crlf_and_empty_trailing_fields() {
        let symbols = read("A\tBOOL\t\t\r\nB\tINT\t\tLast\r\n").unwrap();
        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[0].comment(), "");
        assert_eq!(symbols[1].comment(), "Last");
    }

    #[test]
    fn test_short_line_aborts_whole_file() {
        let err = read("A\tBOOL\t\tok\nTAG2\tBOOL\nC\tBOOL\t\tok\n").unwrap_err();
        assert!(matches!(err, AlarmError::MalformedRecord { line: 2, found: 2 }));
    }

    #[test]
    fn test_blank_line_is_malformed() {
        let err = read("A\tBOOL\t\tok\n\nB\tBOOL\t\tok\n").unwrap_err();
        assert!(matches!(err, AlarmError::MalformedRecord { line: 2, found: 1 }));
    }

    #[test]
    fn test_empty_input_yields_no_symbols() {
        assert!(read("").unwrap().is_empty());
    }
}
