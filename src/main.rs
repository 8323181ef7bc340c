use std::time::Duration;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use sea_battle::ui::{outcome_message, print_boards, print_greeting, result_message, side_name};
use sea_battle::{
    init_logging, AutomatedCombatant, GameConfig, HumanCombatant, Match, Side, TargetError,
};

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
struct Cli {
    /// Side length of both square grids.
    #[arg(long, default_value_t = sea_battle::DEFAULT_SIZE)]
    size: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Pause before the computer announces its move, in milliseconds.
    #[arg(long, default_value_t = 3000)]
    ai_delay_ms: u64,
    /// Show the computer's ships.
    #[arg(long)]
    reveal: bool,
}

fn main() -> anyhow::Result<()> {
    let level = init_logging();
    let cli = Cli::parse();
    log::debug!("logging at {} (set {} to change)", level, sea_battle::LOG_ENV);

    let config = GameConfig {
        ai_delay: Duration::from_millis(cli.ai_delay_ms),
        ..GameConfig::with_size(cli.size)
    };

    let rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (layouts and computer moves are reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let human = HumanCombatant::stdio();
    let computer = AutomatedCombatant::new(config.ai_delay);
    let mut game =
        Match::with_random_layouts(&config, Box::new(human), Box::new(computer), rng)?;
    game.grid_mut(Side::B).set_hidden(!cli.reveal);

    print_greeting();
    let result = game.run(
        |game| {
            print_boards(game.grid(Side::A), game.grid(Side::B));
            println!("{}'s turn!", side_name(game.turn_owner()));
        },
        |_, report| {
            if report.side == Side::B {
                println!("Computer move: {}", report.target);
            }
            println!("{}", outcome_message(report.outcome));
        },
    );

    let status = match result {
        Ok(status) => status,
        Err(TargetError::InputClosed) => {
            println!("Input closed, leaving the game.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    print_boards(game.grid(Side::A), game.grid(Side::B));
    println!("{}", "-".repeat(20));
    if let Some(message) = result_message(status) {
        println!("{}", message);
    }
    Ok(())
}
