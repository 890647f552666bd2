//! Builtin Category Presets
//!
//! Default categories for station-structured alarm symbols
//! (`stS<station><Kind>...`). Loaded into the first slots on request.

use super::color::Rgb;
use super::settings::CategorySettings;

/// Preset category definitions, highest priority first
pub const BUILTIN_CATEGORIES: &[BuiltinCategory] = &[
    BuiltinCategory {
        name: "Immediate fault",
        filter: r"stS\d+DefImdt\w*\.",
        bg_color: Rgb(165, 42, 42),
        fg_color: Rgb::BLACK,
    },
    BuiltinCategory {
        name: "End-of-cycle fault",
        filter: r"stS\d+DefFcy\w*\.",
        bg_color: Rgb(165, 42, 42),
        fg_color: Rgb::BLACK,
    },
    BuiltinCategory {
        name: "Waiting fault",
        filter: r"stS\d+DefAttente\w*\.",
        bg_color: Rgb(0, 0, 255),
        fg_color: Rgb::WHITE,
    },
    BuiltinCategory {
        name: "Warning",
        filter: r"stS\d+Avert\w*\.",
        bg_color: Rgb(255, 215, 0),
        fg_color: Rgb::BLACK,
    },
    BuiltinCategory {
        name: "Message",
        filter: r"stS\d+Message\w*\.",
        bg_color: Rgb(0, 0, 255),
        fg_color: Rgb::WHITE,
    },
];

/// Static preset definition
#[derive(Debug, Clone)]
pub struct BuiltinCategory {
    pub name: &'static str,
    pub filter: &'static str,
    pub bg_color: Rgb,
    pub fg_color: Rgb,
}

impl From<&BuiltinCategory> for CategorySettings {
    fn from(builtin: &BuiltinCategory) -> Self {
        Self {
            name: builtin.name.to_string(),
            filter: builtin.filter.to_string(),
            bg_color: builtin.bg_color,
            fg_color: builtin.fg_color,
        }
    }
}
