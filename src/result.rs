//! Turn and game result types.

use alloc::vec::Vec;

use crate::game::TableSlot;

/// Result of a single turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResult {
    /// Seat index of the attacker for the next turn.
    pub attacker: usize,
    /// Seat index of the defender for the next turn.
    pub defender: usize,
    /// Whether the defender beat the attack.
    pub defended: bool,
    /// Cards played this turn, for display.
    pub table: Vec<TableSlot>,
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The player at this seat emptied their hand first.
    Winner(usize),
    /// Both players ran out of cards together.
    Draw,
}
