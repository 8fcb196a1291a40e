//! Notice display colors and color generation

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB display color assigned to a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl NoticeColor {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl fmt::Display for NoticeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// Source of display colors for newly posted notices.
///
/// Injectable so tests can supply deterministic colors.
pub trait ColorSource {
    fn next_color(&mut self) -> NoticeColor;
}

/// Draws three independent uniform random channels per color
#[derive(Debug, Default)]
pub struct RandomColorSource;

impl ColorSource for RandomColorSource {
    fn next_color(&mut self) -> NoticeColor {
        let mut rng = rand::rng();
        NoticeColor::new(rng.random(), rng.random(), rng.random())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_formats_as_hex() {
        assert_eq!(NoticeColor::new(0, 128, 255).to_string(), "#0080ff");
        assert_eq!(NoticeColor::new(255, 255, 255).to_string(), "#ffffff");
    }

    #[test]
    fn random_source_produces_colors() {
        let mut source = RandomColorSource;
        // No reproducibility guarantee, only that drawing works repeatedly.
        for _ in 0..16 {
            let _ = source.next_color();
        }
    }
}
