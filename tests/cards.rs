//! Card, deck, player and strategy tests.

use std::collections::HashSet;

use durak::{
    Card, DECK_SIZE, Deck, GameOptions, HandError, Player, Rank, SetupError, Suit, TurnError,
    choose_attack_card, choose_defense_card,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

#[test]
fn card_display_and_strength() {
    assert_eq!(card(Suit::Hearts, Rank::Ten).to_string(), "10♥");
    assert_eq!(card(Suit::Spades, Rank::Ace).to_string(), "A♠");
    assert_eq!(card(Suit::Diamonds, Rank::Six).to_string(), "6♦");
    assert_eq!(Rank::Six.strength(), 6);
    assert_eq!(Rank::Jack.strength(), 11);
    assert_eq!(Rank::Ace.strength(), 14);
}

#[test]
fn beats_same_suit_by_rank_only() {
    let king = card(Suit::Spades, Rank::King);
    let ace = card(Suit::Spades, Rank::Ace);
    assert!(ace.beats(&king, Suit::Hearts));
    assert!(!king.beats(&ace, Suit::Hearts));
    assert!(!king.beats(&king, Suit::Hearts));

    // Same-suit comparison holds inside the trump suit too.
    assert!(ace.beats(&king, Suit::Spades));
    assert!(!king.beats(&ace, Suit::Spades));
}

#[test]
fn beats_off_suit_requires_trump() {
    let six_trump = card(Suit::Hearts, Rank::Six);
    let ace_spades = card(Suit::Spades, Rank::Ace);
    let ace_clubs = card(Suit::Clubs, Rank::Ace);

    assert!(six_trump.beats(&ace_spades, Suit::Hearts));
    assert!(!ace_spades.beats(&six_trump, Suit::Hearts));
    assert!(!ace_spades.beats(&card(Suit::Clubs, Rank::Six), Suit::Hearts));
    assert!(!ace_clubs.beats(&card(Suit::Spades, Rank::Six), Suit::Hearts));
}

#[test]
fn sort_keys() {
    assert_eq!(card(Suit::Spades, Rank::Ace).sort_key(), (0, 14));
    assert_eq!(card(Suit::Diamonds, Rank::Six).sort_key(), (3, 6));
    assert_eq!(
        card(Suit::Clubs, Rank::Seven).trump_sort_key(Suit::Clubs),
        (true, 7)
    );
    assert_eq!(
        card(Suit::Hearts, Rank::Seven).trump_sort_key(Suit::Clubs),
        (false, 7)
    );
}

#[test]
fn full_deck_holds_each_card_once() {
    let cards = Deck::full_deck();
    assert_eq!(cards.len(), DECK_SIZE);
    let unique: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn shuffled_deck_is_seed_deterministic() {
    let a = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(9));
    let b = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(9));
    let c = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(10));

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.len(), DECK_SIZE);

    let mut sorted: Vec<Card> = a.iter().copied().collect();
    sorted.sort_unstable();
    let mut full = Deck::full_deck();
    full.sort_unstable();
    assert_eq!(sorted, full);
}

#[test]
fn deck_draws_from_top_and_places_at_bottom() {
    let six = card(Suit::Spades, Rank::Six);
    let seven = card(Suit::Spades, Rank::Seven);
    let mut deck = Deck::from_cards(vec![six, seven]);

    assert_eq!(deck.draw(), Some(six));
    deck.place_bottom(six);
    assert_eq!(deck.iter().copied().collect::<Vec<_>>(), vec![seven, six]);
    let mut order = Vec::new();
    for card in &deck {
        order.push(*card);
    }
    assert_eq!(order, vec![seven, six]);
    assert_eq!(deck.draw(), Some(seven));
    assert_eq!(deck.draw(), Some(six));
    assert_eq!(deck.draw(), None);
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), None);
}

#[test]
fn trump_is_revealed_once_and_moved_to_bottom() {
    let six = card(Suit::Spades, Rank::Six);
    let ace = card(Suit::Hearts, Rank::Ace);
    let mut deck = Deck::from_cards(vec![ace, six]);
    assert_eq!(deck.trump(), None);

    assert_eq!(deck.setup_trump(), Ok(ace));
    assert_eq!(deck.trump(), Some(ace));
    assert_eq!(deck.len(), 2);
    assert_eq!(deck.iter().copied().collect::<Vec<_>>(), vec![six, ace]);

    assert_eq!(deck.setup_trump(), Err(SetupError::TrumpAlreadyRevealed));
    assert_eq!(Deck::from_cards(Vec::new()).setup_trump(), Err(SetupError::EmptyDeck));
}

#[test]
fn player_sorts_without_and_with_trump() {
    let mut player = Player::new("Alice", true);
    assert!(player.is_human());
    assert_eq!(player.name(), "Alice");
    assert!(!player.has_cards());

    player.draw(
        [
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Spades, Rank::King),
            card(Suit::Hearts, Rank::Seven),
            card(Suit::Spades, Rank::Nine),
        ],
        None,
    );
    assert_eq!(
        player.hand(),
        &[
            card(Suit::Spades, Rank::Nine),
            card(Suit::Spades, Rank::King),
            card(Suit::Hearts, Rank::Seven),
            card(Suit::Diamonds, Rank::Six),
        ]
    );

    player.sort_hand(Some(Suit::Spades));
    assert_eq!(
        player.hand(),
        &[
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Hearts, Rank::Seven),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Spades, Rank::King),
        ]
    );
    assert_eq!(player.len(), 4);
}

#[test]
fn player_remove_and_lowest_trump() {
    let mut player = Player::new("Bot", false);
    player.draw(
        [
            card(Suit::Clubs, Rank::Queen),
            card(Suit::Clubs, Rank::Eight),
            card(Suit::Hearts, Rank::Six),
        ],
        Some(Suit::Clubs),
    );

    assert_eq!(player.lowest_trump(Suit::Clubs), Some(card(Suit::Clubs, Rank::Eight)));
    assert_eq!(player.lowest_trump(Suit::Spades), None);

    assert_eq!(player.remove(card(Suit::Clubs, Rank::Eight)), Ok(()));
    assert!(!player.contains(&card(Suit::Clubs, Rank::Eight)));
    assert_eq!(
        player.remove(card(Suit::Clubs, Rank::Eight)),
        Err(HandError::CardNotInHand(card(Suit::Clubs, Rank::Eight)))
    );
    assert_eq!(player.len(), 2);
}

#[test]
fn attack_strategy_saves_trumps() {
    let hand = [
        card(Suit::Hearts, Rank::Six),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Clubs, Rank::Seven),
    ];
    assert_eq!(
        choose_attack_card(&hand, Suit::Hearts),
        Some(card(Suit::Clubs, Rank::Seven))
    );

    let all_trump = [card(Suit::Hearts, Rank::Jack), card(Suit::Hearts, Rank::Eight)];
    assert_eq!(
        choose_attack_card(&all_trump, Suit::Hearts),
        Some(card(Suit::Hearts, Rank::Eight))
    );

    assert_eq!(choose_attack_card(&[], Suit::Hearts), None);
}

#[test]
fn defense_strategy_spends_cheapest_answer() {
    let attacking = card(Suit::Spades, Rank::Eight);
    let hand = [
        card(Suit::Hearts, Rank::Six),
        card(Suit::Spades, Rank::Ace),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Spades, Rank::Seven),
    ];
    assert_eq!(
        choose_defense_card(&hand, &attacking, Suit::Hearts),
        Some(card(Suit::Spades, Rank::Ten))
    );

    // A weak trump loses to a strong same-suit answer in cost order.
    let hand = [card(Suit::Hearts, Rank::Six), card(Suit::Spades, Rank::King)];
    assert_eq!(
        choose_defense_card(&hand, &attacking, Suit::Hearts),
        Some(card(Suit::Spades, Rank::King))
    );

    let hand = [card(Suit::Hearts, Rank::Six), card(Suit::Clubs, Rank::Ace)];
    assert_eq!(
        choose_defense_card(&hand, &attacking, Suit::Hearts),
        Some(card(Suit::Hearts, Rank::Six))
    );

    let hand = [card(Suit::Clubs, Rank::Ace), card(Suit::Spades, Rank::Six)];
    assert_eq!(choose_defense_card(&hand, &attacking, Suit::Hearts), None);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_hand_limit(4)
        .with_seat(0, "Ann", false)
        .with_seat(1, "Ben", true)
        .with_seat(2, "Ignored", true);

    assert_eq!(options.hand_limit, 4);
    assert_eq!(options.seats[0].name, "Ann");
    assert!(!options.seats[0].is_human);
    assert_eq!(options.seats[1].name, "Ben");
    assert!(options.seats[1].is_human);

    let defaults = GameOptions::default();
    assert_eq!(defaults.hand_limit, durak::HAND_LIMIT);
    assert!(defaults.seats[0].is_human);
    assert!(!defaults.seats[1].is_human);
}

#[test]
fn error_classification_and_messages() {
    let attack = card(Suit::Spades, Rank::King);
    let defense = card(Suit::Spades, Rank::Queen);
    let err = TurnError::DefenseDoesNotBeat { attack, defense };
    assert!(err.is_invalid_move());
    assert_eq!(err.to_string(), "Q♠ does not beat K♠");

    let err = TurnError::from(HandError::CardNotInHand(attack));
    assert!(!err.is_invalid_move());
    assert_eq!(err.to_string(), "card K♠ is not in hand");

    assert!(!TurnError::GameOver.is_invalid_move());
    assert!(!TurnError::NoAttackCard.is_invalid_move());
}
