use alloc::vec;

use crate::card::{Card, Suit};
use crate::error::TurnError;
use crate::result::TurnResult;
use crate::strategy::{choose_attack_card, choose_defense_card};

use super::{Game, TableSlot};

impl Game {
    /// Plays one turn: attack, defense, refill and role rotation.
    ///
    /// `attack` and `defense` hold zero or one card each. An empty `attack`
    /// lets a computer attacker pick its own card; a human attacker must
    /// supply one. An empty `defense` lets a computer defender pick its own
    /// answer, while for a human defender it means taking the card.
    ///
    /// A beaten attack is discarded together with its answer and the
    /// defender becomes the next attacker. An attack that is not beaten goes
    /// into the defender's hand and the roles stay as they were. Both hands
    /// are then refilled from the deck, attacker first.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not set up or already over, or if a
    /// supplied card is not a legal choice (see
    /// [`TurnError::is_invalid_move`]). A rejected turn leaves the game
    /// unchanged.
    pub fn play_turn(&mut self, attack: &[Card], defense: &[Card]) -> Result<TurnResult, TurnError> {
        let (Some(attacker), Some(trump)) = (self.attacker, self.trump) else {
            return Err(TurnError::NotSetUp);
        };
        if self.is_finished() || self.is_drawn() {
            return Err(TurnError::GameOver);
        }
        let defender = 1 - attacker;

        let (attack_card, defense_card) = self
            .resolve_choices(attacker, defender, trump, attack, defense)
            .inspect_err(|err| tracing::warn!(%err, "turn rejected"))?;

        self.players[attacker].remove(attack_card)?;

        let defended = if let Some(defense_card) = defense_card {
            self.players[defender].remove(defense_card)?;
            self.discard.extend([attack_card, defense_card]);
            true
        } else {
            self.players[defender].draw([attack_card], Some(trump));
            false
        };
        let table = vec![TableSlot {
            attack: attack_card,
            defense: defense_card,
        }];
        tracing::debug!(
            attacker = self.players[attacker].name(),
            defender = self.players[defender].name(),
            %attack_card,
            ?defense_card,
            "turn resolved"
        );

        self.refill(attacker, trump);
        self.refill(defender, trump);

        let next_attacker = if defended { defender } else { attacker };
        self.attacker = Some(next_attacker);

        Ok(TurnResult {
            attacker: next_attacker,
            defender: 1 - next_attacker,
            defended,
            table,
        })
    }

    /// Validates both choices before anything is mutated.
    fn resolve_choices(
        &self,
        attacker: usize,
        defender: usize,
        trump: Suit,
        attack: &[Card],
        defense: &[Card],
    ) -> Result<(Card, Option<Card>), TurnError> {
        let attack_card = self.resolve_attack(attacker, trump, attack)?;
        let defense_card = self.resolve_defense(defender, trump, attack_card, defense)?;
        Ok((attack_card, defense_card))
    }

    fn resolve_attack(&self, seat: usize, trump: Suit, attack: &[Card]) -> Result<Card, TurnError> {
        let player = &self.players[seat];
        match attack {
            [] if player.is_human() => Err(TurnError::AttackCardRequired),
            [] => choose_attack_card(player.hand(), trump).ok_or(TurnError::NoAttackCard),
            [card] if player.contains(card) => Ok(*card),
            [card] => Err(TurnError::AttackCardNotInHand(*card)),
            cards => Err(TurnError::TooManyAttackCards(cards.len())),
        }
    }

    fn resolve_defense(
        &self,
        seat: usize,
        trump: Suit,
        attack_card: Card,
        defense: &[Card],
    ) -> Result<Option<Card>, TurnError> {
        let player = &self.players[seat];
        match defense {
            [] if player.is_human() => Ok(None),
            [] => Ok(choose_defense_card(player.hand(), &attack_card, trump)),
            [card] if !player.contains(card) => Err(TurnError::DefenseCardNotInHand(*card)),
            [card] if !card.beats(&attack_card, trump) => Err(TurnError::DefenseDoesNotBeat {
                attack: attack_card,
                defense: *card,
            }),
            [card] => Ok(Some(*card)),
            cards => Err(TurnError::TooManyDefenseCards(cards.len())),
        }
    }
}
