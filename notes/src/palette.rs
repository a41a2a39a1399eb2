//! The fixed note palette.
//!
//! Notes can only take one of six named colors. Cycling walks [`Color::ALL`]
//! in order and wraps, so applying [`Color::next`] `Color::ALL.len()` times
//! is the identity.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A note color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Yellow,
    Pink,
    Blue,
    Green,
    Purple,
    Orange,
}

impl Color {
    /// Every palette entry in cycle order.
    pub const ALL: [Color; 6] = [
        Color::Yellow,
        Color::Pink,
        Color::Blue,
        Color::Green,
        Color::Purple,
        Color::Orange,
    ];

    /// Position of this color in [`Color::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Yellow => 0,
            Self::Pink => 1,
            Self::Blue => 2,
            Self::Green => 3,
            Self::Purple => 4,
            Self::Orange => 5,
        }
    }

    /// The next palette entry, wrapping from the last back to the first.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Pick a palette entry uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Lowercase name, matching the serde representation.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Pink => "pink",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
        }
    }

    /// Card background as a CSS hex color.
    #[must_use]
    pub fn fill(self) -> &'static str {
        match self {
            Self::Yellow => "#fef08a",
            Self::Pink => "#fbcfe8",
            Self::Blue => "#bfdbfe",
            Self::Green => "#bbf7d0",
            Self::Purple => "#e9d5ff",
            Self::Orange => "#fed7aa",
        }
    }

    /// Card border as a CSS hex color.
    #[must_use]
    pub fn border(self) -> &'static str {
        match self {
            Self::Yellow => "#fde047",
            Self::Pink => "#f9a8d4",
            Self::Blue => "#93c5fd",
            Self::Green => "#86efac",
            Self::Purple => "#d8b4fe",
            Self::Orange => "#fdba74",
        }
    }
}
