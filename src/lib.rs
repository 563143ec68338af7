//! A two-player Durak card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages setup, turn resolution,
//! hand refills and win detection for a simplified one-card-per-attack
//! variant of Durak, plus the decision strategies used by computer players.
//!
//! # Example
//!
//! ```
//! use durak::{Game, GameOptions};
//!
//! let options = GameOptions::default().with_computer_players();
//! let mut game = Game::new(options, 42);
//! game.setup()?;
//!
//! while !game.is_finished() && !game.is_drawn() {
//!     game.play_turn(&[], &[])?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, Rank, SUITS, Suit};
pub use deck::Deck;
pub use error::{HandError, SetupError, TurnError};
pub use game::{Game, GameState, MAX_HAND_LIMIT, TableSlot};
pub use options::{GameOptions, HAND_LIMIT, Seat};
pub use player::Player;
pub use result::{GameOutcome, TurnResult};
pub use strategy::{choose_attack_card, choose_defense_card};
