//! Game state types.

use crate::card::Card;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Constructed but not set up.
    Unset,
    /// Roles are assigned and the next turn can be played.
    Ready,
    /// The deck is exhausted and exactly one player still holds cards.
    Finished,
    /// The deck and both hands are exhausted.
    Drawn,
}

/// One attack on the table and its answer, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSlot {
    /// The attacking card.
    pub attack: Card,
    /// The card that beat it, or `None` if the defender took the attack.
    pub defense: Option<Card>,
}

impl TableSlot {
    /// Returns whether the attack was beaten.
    #[must_use]
    pub const fn is_beaten(&self) -> bool {
        self.defense.is_some()
    }
}
