//! Six-sided dice with a hold flag.
//!
//! ## DieId
//!
//! Stable letter label (`A`, `B`, ...) assigned in creation order.
//! Drivers use it to target a specific die for holding.
//!
//! ## Die
//!
//! A held die keeps its face through rolls until it is reset.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Lowest face on a die.
pub const MIN_FACE: u8 = 1;

/// Highest face on a die.
pub const MAX_FACE: u8 = 6;

/// Number of distinct die labels (`A..=Z`).
pub const MAX_DICE: usize = 26;

/// Stable die label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DieId(pub char);

impl DieId {
    /// Label for the die created at `index` (0 -> `A`).
    ///
    /// Returns `None` past the last letter.
    ///
    /// ```
    /// use dice_game::core::DieId;
    ///
    /// assert_eq!(DieId::from_index(0), Some(DieId('A')));
    /// assert_eq!(DieId::from_index(25), Some(DieId('Z')));
    /// assert_eq!(DieId::from_index(26), None);
    /// ```
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= MAX_DICE {
            return None;
        }
        Some(Self((b'A' + index as u8) as char))
    }

    /// The label character.
    #[must_use]
    pub const fn label(self) -> char {
        self.0
    }
}

impl std::fmt::Display for DieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single six-sided die.
///
/// `face_value` is 0 until the first roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    id: DieId,
    face_value: u8,
    held: bool,
}

impl Die {
    /// Create an unrolled, unheld die.
    #[must_use]
    pub fn new(id: DieId) -> Self {
        Self {
            id,
            face_value: 0,
            held: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> DieId {
        self.id
    }

    #[must_use]
    pub fn face_value(&self) -> u8 {
        self.face_value
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Has this die been rolled at least once?
    #[must_use]
    pub fn is_rolled(&self) -> bool {
        self.face_value != 0
    }

    /// Roll to a fresh face unless held.
    pub fn roll(&mut self, rng: &mut GameRng) {
        if !self.held {
            self.face_value = rng.roll_face();
        }
    }

    /// Lock the current face. Idempotent.
    pub fn hold(&mut self) {
        self.held = true;
    }

    /// Release the hold. The face stays until the next roll.
    pub fn reset(&mut self) {
        self.held = false;
    }

    /// Set the face directly, bypassing the RNG.
    #[cfg(test)]
    pub(crate) fn set_face(&mut self, face: u8) {
        self.face_value = face;
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}:", self.id)?;
        if self.is_rolled() {
            write!(f, "{}", self.face_value)?;
        } else {
            write!(f, "-")?;
        }
        if self.held {
            write!(f, "*")?;
        }
        write!(f, "]")
    }
}
