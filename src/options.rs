//! Game configuration options.

use alloc::string::String;

/// Default number of cards a hand is dealt and refilled to.
pub const HAND_LIMIT: usize = 6;

/// One of the two seats at the table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Seat {
    /// Display name of the player.
    pub name: String,
    /// Whether a person makes this player's choices.
    pub is_human: bool,
}

impl Seat {
    /// Creates a seat.
    #[must_use]
    pub fn new(name: impl Into<String>, is_human: bool) -> Self {
        Self {
            name: name.into(),
            is_human,
        }
    }
}

/// Configuration options for a Durak game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use durak::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_limit(6)
///     .with_seat(0, "Alice", true)
///     .with_seat(1, "Bot", false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Cards dealt at setup and the refill target after each turn.
    pub hand_limit: usize,
    /// The two seats, in table order.
    pub seats: [Seat; 2],
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_limit: HAND_LIMIT,
            seats: [Seat::new("Player", true), Seat::new("Computer", false)],
        }
    }
}

impl GameOptions {
    /// Sets the hand limit.
    ///
    /// # Example
    ///
    /// ```
    /// use durak::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_limit(4);
    /// assert_eq!(options.hand_limit, 4);
    /// ```
    #[must_use]
    pub fn with_hand_limit(mut self, hand_limit: usize) -> Self {
        self.hand_limit = hand_limit;
        self
    }

    /// Replaces the seat at `index` (0 or 1). Other indices are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use durak::GameOptions;
    ///
    /// let options = GameOptions::default().with_seat(1, "Bob", true);
    /// assert_eq!(options.seats[1].name, "Bob");
    /// assert!(options.seats[1].is_human);
    /// ```
    #[must_use]
    pub fn with_seat(mut self, index: usize, name: impl Into<String>, is_human: bool) -> Self {
        if let Some(seat) = self.seats.get_mut(index) {
            *seat = Seat::new(name, is_human);
        }
        self
    }

    /// Makes both seats computer-controlled.
    ///
    /// # Example
    ///
    /// ```
    /// use durak::GameOptions;
    ///
    /// let options = GameOptions::default().with_computer_players();
    /// assert!(options.seats.iter().all(|seat| !seat.is_human));
    /// ```
    #[must_use]
    pub fn with_computer_players(mut self) -> Self {
        for seat in &mut self.seats {
            seat.is_human = false;
        }
        self
    }
}
