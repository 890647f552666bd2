//! Classification and export pipeline for EasyBuilder Pro alarm tables.
//!
//! PLC symbol exports are read into [`Symbol`]s, matched against an ordered
//! [`CategoryRegistry`] and written as the alarm import spreadsheet. The
//! [`Worker`] runs both steps on a background thread.

pub mod category;
pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod symbol;
pub mod worker;

pub use category::{
    classify, classify_all, Alarm, BuiltinCategory, Category, CategoryRegistry, CategorySettings,
    CategoryStyle, Rgb, StyleTable, BUILTIN_CATEGORIES, MAX_CATEGORIES,
};
pub use config::{Config, GeneralConfig, WorkerConfig};
pub use error::{AlarmError, Result};
pub use export::{render_row, report_rows, write_report};
pub use import::{read_symbols, ImportSource, SymbolReader, TabDelimitedReader};
pub use symbol::Symbol;
pub use worker::{Command, TaskResult, Worker, DEFAULT_COMMAND_TIMEOUT};
