//! The 36-card Durak deck.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, RANKS, SUITS};
use crate::error::SetupError;

/// An ordered deck of cards, drawn from the front.
///
/// The trump indicator is revealed once via [`Deck::setup_trump`] and then
/// sits at the bottom of the deck until it is drawn like any other card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
    trump: Option<Card>,
}

impl Deck {
    /// Builds the full 36-card deck and shuffles it with `rng`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Self::full_deck();
        cards.shuffle(rng);
        Self::from_cards(cards)
    }

    /// Creates a deck holding `cards` in draw order (first element on top).
    ///
    /// No shuffling or validation is performed. Useful for stacking the deck
    /// in tests.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
            trump: None,
        }
    }

    /// Returns every card of the deck, ordered by suit then rank.
    #[must_use]
    pub fn full_deck() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in SUITS {
            for rank in RANKS {
                cards.push(Card::new(suit, rank));
            }
        }
        cards
    }

    /// Draws the top card, or `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Places a card at the bottom of the deck.
    pub fn place_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Reveals the trump indicator: draws the top card, records it, and
    /// places it at the bottom.
    ///
    /// # Errors
    ///
    /// Returns an error if the trump was already revealed or the deck is
    /// empty.
    pub fn setup_trump(&mut self) -> Result<Card, SetupError> {
        if self.trump.is_some() {
            return Err(SetupError::TrumpAlreadyRevealed);
        }

        let card = self.draw().ok_or(SetupError::EmptyDeck)?;
        self.trump = Some(card);
        self.place_bottom(card);

        Ok(card)
    }

    /// Returns the revealed trump indicator, if any.
    #[must_use]
    pub const fn trump(&self) -> Option<Card> {
        self.trump
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the remaining cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = alloc::collections::vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
