//! Decision strategies for computer-controlled players.
//!
//! Both functions are pure: they look only at the hand, the trump suit and,
//! for defense, the attacking card.

use crate::card::{Card, Suit};

/// Chooses a card to attack with.
///
/// Leads with the weakest non-trump card, keeping trumps for defense. An
/// all-trump hand leads its weakest trump. Returns `None` for an empty hand.
#[must_use]
pub fn choose_attack_card(hand: &[Card], trump: Suit) -> Option<Card> {
    hand.iter()
        .filter(|card| !card.is_trump(trump))
        .min_by_key(|card| card.rank.strength())
        .or_else(|| hand.iter().min_by_key(|card| card.rank.strength()))
        .copied()
}

/// Chooses the cheapest card that beats `attacking`.
///
/// Non-trump answers are preferred over trumps, then lower strength over
/// higher. Returns `None` when nothing in hand beats the attack, meaning the
/// defender takes the card.
#[must_use]
pub fn choose_defense_card(hand: &[Card], attacking: &Card, trump: Suit) -> Option<Card> {
    hand.iter()
        .filter(|card| card.beats(attacking, trump))
        .min_by_key(|card| card.trump_sort_key(trump))
        .copied()
}
