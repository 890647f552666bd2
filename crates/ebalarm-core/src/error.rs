use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlarmError {
    #[error("Invalid category filter '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("Unsupported import format: {name}")]
    UnsupportedFormat { name: String },

    #[error("Malformed record at line {line}: expected at least 4 tab-separated fields, found {found}")]
    MalformedRecord { line: usize, found: usize },

    #[error("Category registry is full: at most {max} categories")]
    RegistryFull { max: usize },

    #[error("Invalid category slot: {slot} (expected 0..{max})")]
    InvalidSlot { slot: usize, max: usize },

    #[error("Invalid color: '{value}' - expected 'r,g,b' or '#rrggbb'")]
    InvalidColor { value: String },

    #[error("Config parse error in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Config key not found: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value for {key}: {message}")]
    ConfigValue { key: String, message: String },

    #[error("PLC name is missing - pass --plc or set general.plc_name")]
    PlcNameMissing,

    #[error("Worker is not running")]
    WorkerDisconnected,

    #[error("Worker thread panicked")]
    WorkerPanicked,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T> = std::result::Result<T, AlarmError>;

impl AlarmError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Pattern { .. } => 2,
            Self::UnsupportedFormat { .. } => 3,
            Self::MalformedRecord { .. } => 4,
            Self::InvalidSlot { .. } | Self::InvalidColor { .. } | Self::RegistryFull { .. } => 5,
            Self::ConfigParse { .. } | Self::ConfigKeyNotFound { .. } | Self::ConfigValue { .. } => 6,
            Self::PlcNameMissing => 7,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_record_message_names_line() {
        let err = AlarmError::MalformedRecord { line: 12, found: 2 };
        let message = err.to_string();
        assert!(message.contains("line 12"), "{message}");
        assert!(message.contains("found 2"), "{message}");
    }

    #[test]
    fn test_exit_codes_distinguish_input_failures() {
        let unsupported = AlarmError::UnsupportedFormat {
            name: "codesys".to_string(),
        };
        let malformed = AlarmError::MalformedRecord { line: 1, found: 1 };
        assert_eq!(unsupported.exit_code(), 3);
        assert_eq!(malformed.exit_code(), 4);
        assert_eq!(AlarmError::WorkerPanicked.exit_code(), 1);
    }
}
