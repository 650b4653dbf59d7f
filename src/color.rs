use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// ---------------------------------------------------------------------------
// Rgb – a persisted colour setting
// ---------------------------------------------------------------------------

/// An 8-bit RGB triple, persisted as a three-element JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Rgb = Rgb([0, 0, 0]);
    pub const WHITE: Rgb = Rgb([255, 255, 255]);
    pub const BLUE: Rgb = Rgb([0, 0, 255]);

    pub fn r(&self) -> u8 {
        self.0[0]
    }

    pub fn g(&self) -> u8 {
        self.0[1]
    }

    pub fn b(&self) -> u8 {
        self.0[2]
    }

    /// `#rrggbb` form for style sheets and logs.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
    }

    /// Read a colour from JSON, accepting only `[r, g, b]` with each channel
    /// an integer in `0..=255`.
    pub fn from_json(value: &JsonValue) -> Option<Rgb> {
        let items = value.as_array()?;
        if items.len() != 3 {
            return None;
        }
        let mut channels = [0u8; 3];
        for (slot, item) in channels.iter_mut().zip(items) {
            *slot = u8::try_from(item.as_u64()?).ok()?;
        }
        Some(Rgb(channels))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r(), self.g(), self.b())
    }
}
