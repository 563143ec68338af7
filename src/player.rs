//! Player representation.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::error::HandError;

/// A participant holding a hand of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    is_human: bool,
    hand: Vec<Card>,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>, is_human: bool) -> Self {
        Self {
            name: name.into(),
            is_human,
            hand: Vec::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether choices for this player come from a person.
    #[must_use]
    pub const fn is_human(&self) -> bool {
        self.is_human
    }

    /// Returns the cards in hand, in sorted order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Adds cards to the hand and re-sorts it.
    ///
    /// `trump` is `None` only before the trump has been revealed.
    pub fn draw<I>(&mut self, cards: I, trump: Option<Suit>)
    where
        I: IntoIterator<Item = Card>,
    {
        self.hand.extend(cards);
        self.sort_hand(trump);
    }

    /// Removes the first card equal to `card`.
    ///
    /// # Errors
    ///
    /// Returns an error if the card is not in hand.
    pub fn remove(&mut self, card: Card) -> Result<(), HandError> {
        let index = self
            .hand
            .iter()
            .position(|c| *c == card)
            .ok_or(HandError::CardNotInHand(card))?;
        self.hand.remove(index);
        Ok(())
    }

    /// Sorts the hand.
    ///
    /// Without a trump, cards are ordered by suit priority then strength.
    /// With a trump, non-trumps come first and each group is ordered by
    /// strength.
    pub fn sort_hand(&mut self, trump: Option<Suit>) {
        match trump {
            None => self.hand.sort_by_key(Card::sort_key),
            Some(trump) => self.hand.sort_by_key(|card| card.trump_sort_key(trump)),
        }
    }

    /// Returns the weakest trump in hand, if any.
    #[must_use]
    pub fn lowest_trump(&self, trump: Suit) -> Option<Card> {
        self.hand
            .iter()
            .filter(|card| card.is_trump(trump))
            .min_by_key(|card| card.rank.strength())
            .copied()
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.hand.contains(card)
    }

    /// Returns whether the player still holds cards.
    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }

    /// Returns the number of cards in hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }
}
