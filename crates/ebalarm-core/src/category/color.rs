//! RGB colors for category styling

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AlarmError;

/// RGB triple, stored as `[r, g, b]` in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// `#rrggbb` form
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Decimal triple as expected by the import tool: `(r, g, b)`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

/// Parse `r,g,b`, `(r, g, b)` or `#rrggbb`.
impl FromStr for Rgb {
    type Err = AlarmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AlarmError::InvalidColor {
            value: s.to_string(),
        };
        let trimmed = s.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(invalid());
            }
            let channel =
                |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).map_err(|_| invalid());
            return Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
        }

        let inner = trimmed
            .trim_start_matches(&['(', '['][..])
            .trim_end_matches(&[')', ']'][..]);
        let channels = inner
            .split(',')
            .map(|part| part.trim().parse::<u8>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        match channels.as_slice() {
            [r, g, b] => Ok(Rgb(*r, *g, *b)),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_decimal_triple() {
        assert_eq!(Rgb(165, 42, 42).to_string(), "(165, 42, 42)");
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("165,42,42".parse::<Rgb>().unwrap(), Rgb(165, 42, 42));
        assert_eq!("(0, 0, 255)".parse::<Rgb>().unwrap(), Rgb(0, 0, 255));
        assert_eq!("#ffd700".parse::<Rgb>().unwrap(), Rgb(255, 215, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("256,0,0".parse::<Rgb>().is_err());
        assert!("1,2".parse::<Rgb>().is_err());
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("red".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_hex_round_trip() {
        let color = Rgb(0, 128, 255);
        assert_eq!(color.to_hex(), "#0080ff");
        assert_eq!(color.to_hex().parse::<Rgb>().unwrap(), color);
    }

    #[test]
    fn test_serde_as_array() {
        let json = serde_json::to_string(&Rgb(1, 2, 3)).unwrap();
        assert_eq!(json, "[1,2,3]");
    }
}
