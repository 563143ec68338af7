//! Card types and ordering rules.

use core::fmt;

/// Card suit.
///
/// Variants are declared in the fixed suit-priority order used to sort a
/// hand before the trump suit is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// Position of the suit in the no-trump sort order.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Spades => 0,
            Self::Clubs => 1,
            Self::Hearts => 2,
            Self::Diamonds => 3,
        }
    }

    /// Suit symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Spades => "♠",
            Self::Clubs => "♣",
            Self::Hearts => "♥",
            Self::Diamonds => "♦",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card rank, from six up to ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// Numeric strength used when comparing cards (6 through 14).
    #[must_use]
    pub const fn strength(self) -> u8 {
        match self {
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Jack => 11,
            Self::Queen => 12,
            Self::King => 13,
            Self::Ace => 14,
        }
    }

    /// Short label printed on the card face.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// All suits, in priority order.
pub const SUITS: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Hearts, Suit::Diamonds];

/// All ranks, weakest first.
pub const RANKS: [Rank; 9] = [
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// Number of cards in a Durak deck.
pub const DECK_SIZE: usize = SUITS.len() * RANKS.len();

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns whether this card beats `other` given the trump suit.
    ///
    /// A card beats a lower card of its own suit, and a trump beats any
    /// non-trump. Nothing else beats.
    #[must_use]
    pub fn beats(&self, other: &Self, trump: Suit) -> bool {
        if self.suit == other.suit {
            return self.rank.strength() > other.rank.strength();
        }
        self.suit == trump && other.suit != trump
    }

    /// Returns whether the card belongs to the trump suit.
    #[must_use]
    pub fn is_trump(&self, trump: Suit) -> bool {
        self.suit == trump
    }

    /// Sort key used while no trump is known: suit priority, then strength.
    #[must_use]
    pub const fn sort_key(&self) -> (u8, u8) {
        (self.suit.priority(), self.rank.strength())
    }

    /// Sort key once the trump is known: non-trumps first, then strength.
    #[must_use]
    pub fn trump_sort_key(&self, trump: Suit) -> (bool, u8) {
        (self.is_trump(trump), self.rank.strength())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
