//! # Category Module
//!
//! Ordered, regex-based classification of PLC symbols.
//!
//! ## Module layout
//!
//! - `color`: RGB triples used for category styling
//! - `settings`: persisted per-slot category record
//! - `def`: compiled, immutable `Category`
//! - `registry`: ordered `CategoryRegistry` and the export `StyleTable`
//! - `classifier`: `Alarm` and the classification pass
//! - `builtin`: preset categories
//!
//! ## Example
//!
//! ```rust
//! use ebalarm_core::category::{classify_all, CategoryRegistry, CategorySettings, Rgb};
//! use ebalarm_core::Symbol;
//!
//! let settings = vec![
//!     CategorySettings {
//!         name: "Faults".to_string(),
//!         filter: r"Def\w*\.".to_string(),
//!         bg_color: Rgb(165, 42, 42),
//!         fg_color: Rgb::BLACK,
//!     },
//!     CategorySettings::default(),
//! ];
//! let registry = CategoryRegistry::from_settings(&settings)?;
//!
//! let symbols = vec![
//!     Symbol::new("stS1DefImdt.bMotor", "BOOL", "Motor fault"),
//!     Symbol::new("stS1Counter", "INT", ""),
//! ];
//! let alarms = classify_all(symbols, &registry);
//! assert_eq!(alarms.len(), 1);
//! assert_eq!(alarms[0].category().name(), "Faults");
//! # Ok::<(), ebalarm_core::AlarmError>(())
//! ```

mod builtin;
mod classifier;
mod color;
mod def;
mod registry;
mod settings;

// Re-exports
pub use builtin::{BuiltinCategory, BUILTIN_CATEGORIES};
pub use classifier::{classify, classify_all, Alarm};
pub use color::Rgb;
pub use def::{Category, CategoryStyle};
pub use registry::{CategoryRegistry, StyleTable, MAX_CATEGORIES};
pub use settings::CategorySettings;
