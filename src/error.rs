//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while setting up a game.
///
/// All of these are fatal: the game cannot proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The game has already been set up.
    #[error("game has already been set up")]
    AlreadySetUp,
    /// The deck had no card to reveal as trump.
    #[error("cannot reveal trump on an empty deck")]
    EmptyDeck,
    /// The trump indicator was already revealed.
    #[error("trump has already been revealed")]
    TrumpAlreadyRevealed,
    /// The hand limit cannot be dealt from the deck.
    #[error("hand limit {0} cannot be dealt to two players")]
    InvalidHandLimit(usize),
}

/// Errors raised by hand mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The card is not in the hand.
    #[error("card {0} is not in hand")]
    CardNotInHand(Card),
}

/// Errors that can occur while playing a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// `setup` has not been called.
    #[error("game not set up")]
    NotSetUp,
    /// The game is already over.
    #[error("game is over")]
    GameOver,
    /// More than one attacking card was supplied.
    #[error("only one card may attack, got {0}")]
    TooManyAttackCards(usize),
    /// The attacking card is not in the attacker's hand.
    #[error("attacking card {0} is not in hand")]
    AttackCardNotInHand(Card),
    /// A human attacker did not choose a card.
    #[error("human attacker must choose a card")]
    AttackCardRequired,
    /// The attacker has no card to play.
    #[error("attacker has no cards")]
    NoAttackCard,
    /// More than one defending card was supplied.
    #[error("only one card may defend, got {0}")]
    TooManyDefenseCards(usize),
    /// The defending card is not in the defender's hand.
    #[error("defending card {0} is not in hand")]
    DefenseCardNotInHand(Card),
    /// The defending card does not beat the attack.
    #[error("{defense} does not beat {attack}")]
    DefenseDoesNotBeat {
        /// The attacking card.
        attack: Card,
        /// The rejected defending card.
        defense: Card,
    },
    /// A hand invariant was violated.
    #[error(transparent)]
    Hand(#[from] HandError),
}

impl TurnError {
    /// Returns whether the error rejects a move the caller may retry with a
    /// different choice.
    ///
    /// The remaining errors are fatal and the game should not continue.
    #[must_use]
    pub const fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            Self::TooManyAttackCards(_)
                | Self::AttackCardNotInHand(_)
                | Self::AttackCardRequired
                | Self::TooManyDefenseCards(_)
                | Self::DefenseCardNotInHand(_)
                | Self::DefenseDoesNotBeat { .. }
        )
    }
}
