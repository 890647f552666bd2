//! Category Classifier
//!
//! Pairs symbols with the first matching category of a registry. Symbols
//! that match nothing are dropped: only symbols of interest become alarms.

use serde::Serialize;

use crate::symbol::Symbol;

use super::def::Category;
use super::registry::CategoryRegistry;

/// A symbol paired with its matched category, the unit of export
#[derive(Debug, Clone, Serialize)]
pub struct Alarm {
    symbol: Symbol,
    category: Category,
}

impl Alarm {
    pub fn new(symbol: Symbol, category: Category) -> Self {
        Self { symbol, category }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn category(&self) -> &Category {
        &self.category
    }
}

/// Classify one symbol by its name.
pub fn classify(symbol: Symbol, registry: &CategoryRegistry) -> Option<Alarm> {
    let category = registry.first_match(symbol.name())?.clone();
    Some(Alarm::new(symbol, category))
}

/// Classify every symbol, keeping input order and dropping unmatched ones.
pub fn classify_all<I>(symbols: I, registry: &CategoryRegistry) -> Vec<Alarm>
where
    I: IntoIterator<Item = Symbol>,
{
    symbols
        .into_iter()
        .filter_map(|symbol| classify(symbol, registry))
        .collect()
}
