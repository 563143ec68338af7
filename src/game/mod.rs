//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::deck::Deck;
use crate::error::SetupError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::GameOutcome;

pub mod state;
mod turn;

pub use state::{GameState, TableSlot};

/// Largest hand limit that can be dealt to both players while the trump
/// indicator stays in the deck.
pub const MAX_HAND_LIMIT: usize = (DECK_SIZE - 1) / 2;

/// A two-player Durak game engine.
///
/// The game owns the deck, both players and the discard pile.
/// Call [`Game::setup`] once, then [`Game::play_turn`] until
/// [`Game::is_finished`] (or [`Game::is_drawn`]) holds.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Cards not yet dealt.
    deck: Deck,
    /// Trump suit, known once the game is set up.
    trump: Option<Suit>,
    /// Both players, in seat order.
    players: [Player; 2],
    /// Cards permanently out of play.
    discard: Vec<Card>,
    /// Seat index of the current attacker.
    attacker: Option<usize>,
}

impl Game {
    /// Creates a new game whose deck is shuffled from `seed`.
    ///
    /// The same seed always produces the same game.
    ///
    /// # Example
    ///
    /// ```
    /// use durak::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Unset);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        Self::with_deck(options, deck)
    }

    /// Creates a new game that will play from `deck` as given.
    #[must_use]
    pub fn with_deck(options: GameOptions, deck: Deck) -> Self {
        let players = options
            .seats
            .clone()
            .map(|seat| Player::new(seat.name, seat.is_human));

        Self {
            options,
            deck,
            trump: None,
            players,
            discard: Vec::new(),
            attacker: None,
        }
    }

    /// Reveals the trump, deals both hands and picks the first attacker.
    ///
    /// Cards are dealt alternately up to the hand limit. The player holding
    /// the weakest trump attacks first; if neither holds a trump, seat 0
    /// does. Returns the trump indicator card.
    ///
    /// # Errors
    ///
    /// Returns an error if the game was already set up, the hand limit is
    /// invalid, or the deck cannot supply a trump.
    pub fn setup(&mut self) -> Result<Card, SetupError> {
        if self.trump.is_some() {
            return Err(SetupError::AlreadySetUp);
        }

        let limit = self.options.hand_limit;
        if limit == 0 || limit > MAX_HAND_LIMIT {
            return Err(SetupError::InvalidHandLimit(limit));
        }

        let trump_card = self.deck.setup_trump()?;
        let trump = trump_card.suit;
        self.trump = Some(trump);
        tracing::debug!(%trump_card, "trump revealed");

        let mut dealt = [Vec::with_capacity(limit), Vec::with_capacity(limit)];
        for _ in 0..limit {
            for cards in &mut dealt {
                if let Some(card) = self.deck.draw() {
                    cards.push(card);
                }
            }
        }
        for (player, cards) in self.players.iter_mut().zip(dealt) {
            player.draw(cards, Some(trump));
        }

        let attacker = self.first_attacker(trump);
        self.attacker = Some(attacker);
        tracing::debug!(
            attacker = self.players[attacker].name(),
            "first attacker chosen"
        );

        Ok(trump_card)
    }

    /// Returns the seat holding the weakest trump, or seat 0 if nobody has one.
    fn first_attacker(&self, trump: Suit) -> usize {
        self.players
            .iter()
            .enumerate()
            .filter_map(|(seat, player)| player.lowest_trump(trump).map(|card| (seat, card)))
            .min_by_key(|(_, card)| card.rank.strength())
            .map_or(0, |(seat, _)| seat)
    }

    /// Draws from the deck until the player reaches the hand limit or the
    /// deck runs out. Returns the number of cards drawn.
    fn refill(&mut self, seat: usize, trump: Suit) -> usize {
        let player = &mut self.players[seat];
        let mut drawn = Vec::new();
        while player.len() + drawn.len() < self.options.hand_limit {
            let Some(card) = self.deck.draw() else {
                break;
            };
            drawn.push(card);
        }

        let count = drawn.len();
        if count > 0 {
            player.draw(drawn, Some(trump));
            tracing::debug!(player = player.name(), count, "hand refilled");
        }
        count
    }

    /// Returns the current game state.
    #[must_use]
    pub fn state(&self) -> GameState {
        if self.attacker.is_none() {
            GameState::Unset
        } else if self.is_finished() {
            GameState::Finished
        } else if self.is_drawn() {
            GameState::Drawn
        } else {
            GameState::Ready
        }
    }

    /// Returns whether the deck is empty and exactly one player holds cards.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.deck.is_empty() && self.players.iter().filter(|p| p.has_cards()).count() == 1
    }

    /// Returns whether the game ended with the deck and both hands empty.
    #[must_use]
    pub fn is_drawn(&self) -> bool {
        self.attacker.is_some()
            && self.deck.is_empty()
            && self.players.iter().all(Player::is_empty)
    }

    /// Returns the winner: the player who got rid of their cards.
    ///
    /// Returns `None` while the game is still running and for a draw.
    #[must_use]
    pub fn get_winner(&self) -> Option<&Player> {
        if !self.is_finished() {
            return None;
        }
        self.players.iter().find(|p| p.is_empty())
    }

    /// Returns how the game ended, or `None` if it is still running.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.is_drawn() {
            return Some(GameOutcome::Draw);
        }
        if !self.is_finished() {
            return None;
        }
        self.players
            .iter()
            .position(Player::is_empty)
            .map(GameOutcome::Winner)
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the trump suit, once the game is set up.
    #[must_use]
    pub const fn trump(&self) -> Option<Suit> {
        self.trump
    }

    /// Returns the trump indicator card, once revealed.
    #[must_use]
    pub const fn trump_card(&self) -> Option<Card> {
        self.deck.trump()
    }

    /// Returns both players in seat order.
    #[must_use]
    pub const fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the player at `seat`.
    #[must_use]
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns the seat index of the current attacker.
    #[must_use]
    pub const fn attacker_index(&self) -> Option<usize> {
        self.attacker
    }

    /// Returns the seat index of the current defender.
    #[must_use]
    pub fn defender_index(&self) -> Option<usize> {
        self.attacker.map(|seat| 1 - seat)
    }

    /// Returns the current attacker.
    #[must_use]
    pub fn attacker(&self) -> Option<&Player> {
        self.attacker_index().map(|seat| &self.players[seat])
    }

    /// Returns the current defender.
    #[must_use]
    pub fn defender(&self) -> Option<&Player> {
        self.defender_index().map(|seat| &self.players[seat])
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the cards permanently out of play.
    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }
}
