//! Computer-vs-computer self-play example.
//!
//! Usage: `cargo run --example self_play -- [games] [seed]`. Set `RUST_LOG=debug`
//! to trace every turn.

use core::error::Error;

use durak::{Game, GameOptions, GameOutcome, TableSlot};

#[derive(Debug, Default)]
struct Tally {
    wins: [usize; 2],
    draws: usize,
    turns: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let games = args.next().and_then(|s| s.parse().ok()).unwrap_or(1000_u64);
    let base_seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0_u64);

    let mut tally = Tally::default();
    for seed in base_seed..base_seed + games {
        match play(seed, seed == base_seed) {
            Ok((outcome, turns)) => {
                tally.turns += turns;
                match outcome {
                    GameOutcome::Winner(seat) => tally.wins[seat] += 1,
                    GameOutcome::Draw => tally.draws += 1,
                }
            }
            Err(err) => println!("Seed {seed}: {err}"),
        }
    }

    println!("\nGames: {games}");
    println!("Seat 0 wins: {}", tally.wins[0]);
    println!("Seat 1 wins: {}", tally.wins[1]);
    println!("Draws: {}", tally.draws);
    if games > 0 {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for turn counts"
        )]
        let average = tally.turns as f64 / games as f64;
        println!("Average turns: {average:.1}");
    }
}

fn play(seed: u64, verbose: bool) -> Result<(GameOutcome, usize), Box<dyn Error>> {
    let options = GameOptions::default()
        .with_seat(0, "North", false)
        .with_seat(1, "South", false);
    let mut game = Game::new(options, seed);
    let trump_card = game.setup()?;
    if verbose {
        println!("Seed {seed}: trump card {trump_card}");
    }

    let mut turns = 0;
    loop {
        if let Some(outcome) = game.outcome() {
            if verbose {
                match outcome {
                    GameOutcome::Winner(seat) => {
                        let name = game.player(seat).map_or("?", durak::Player::name);
                        println!("{name} wins after {turns} turns.");
                    }
                    GameOutcome::Draw => println!("Draw after {turns} turns."),
                }
            }
            return Ok((outcome, turns));
        }

        let attacker = game.attacker().map_or("?", durak::Player::name).to_owned();
        let result = game.play_turn(&[], &[])?;
        turns += 1;

        if verbose {
            let verdict = if result.defended { "beaten" } else { "taken" };
            println!(
                "{attacker:>6}: {} ({verdict}, deck {})",
                format_table(&result.table),
                game.cards_remaining()
            );
        }
    }
}

fn format_table(table: &[TableSlot]) -> String {
    table
        .iter()
        .map(|slot| match slot.defense {
            Some(defense) => format!("{}/{}", slot.attack, defense),
            None => slot.attack.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
