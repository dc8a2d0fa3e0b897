use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Tomorrow's predicted move of the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Direction {
    #[strum(serialize = "UP")]
    Up,
    #[strum(serialize = "DOWN")]
    Down,
}

impl Direction {
    /// The classifier emits class `1` for an up-move and `0` otherwise.
    pub fn from_class(class: f64) -> Option<Self> {
        if !class.is_finite() {
            return None;
        }
        Some(if class >= 0.5 { Self::Up } else { Self::Down })
    }

    pub fn is_up(self) -> bool {
        matches!(self, Self::Up)
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Up => "⬆",
            Self::Down => "⬇",
        }
    }
}
