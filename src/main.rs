#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use pirate_fleet::{
    init_logging, take_turn, CliPlayer, GameConfig, Grid, Match, Player, RandomPlayer, Side,
    TerminalSink,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in this terminal.
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "JSON game configuration file")]
        config: Option<PathBuf>,
    },
    /// Watch two computer players fight it out.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "JSON game configuration file")]
        config: Option<PathBuf>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn load_config(path: Option<PathBuf>) -> anyhow::Result<GameConfig> {
    match path {
        Some(p) => Ok(GameConfig::load(&p)?),
        None => Ok(GameConfig::default()),
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Local { seed, config } => {
            let config = load_config(config)?;
            let mut rng = make_rng(seed);
            let mut human = CliPlayer::new();
            let mut computer = RandomPlayer::new();
            let game = setup(&config, &mut human, &mut computer, &mut rng)?;
            run_local(game, human, computer, rng)?;
        }
        Commands::Auto { seed, config } => {
            let config = load_config(config)?;
            let mut rng = make_rng(seed);
            let mut first = RandomPlayer::new();
            let mut second = RandomPlayer::new();
            let mut game = setup(&config, &mut first, &mut second, &mut rng)?;
            let mut sink = TerminalSink::new(&config);
            let mut side = Side::Human;
            while !game.is_over() {
                match side {
                    Side::Human => take_turn(&mut game, side, &mut first, &mut second, &mut rng)?,
                    Side::Computer => take_turn(&mut game, side, &mut second, &mut first, &mut rng)?,
                };
                sink.drain(&mut game);
                side = side.opponent();
            }
            sink.print(&game);
            print_scores(&game);
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn setup(
    config: &GameConfig,
    human: &mut dyn Player,
    computer: &mut dyn Player,
    rng: &mut SmallRng,
) -> anyhow::Result<Match> {
    let mut human_grid = Grid::new(config)?;
    human.place_fleet(rng, &mut human_grid, config)?;
    let mut computer_grid = Grid::new(config)?;
    computer.place_fleet(rng, &mut computer_grid, config)?;
    Ok(Match::new(config.clone(), human_grid, computer_grid)?)
}

#[cfg(feature = "std")]
fn run_local(
    mut game: Match,
    mut human: CliPlayer,
    mut computer: RandomPlayer,
    mut rng: SmallRng,
) -> anyhow::Result<()> {
    let mut sink = TerminalSink::new(game.config());
    loop {
        println!("\n=== YOUR TURN ===");
        sink.print(&game);
        let Some(mv) = human.select_move(&mut rng, game.side(Side::Human).performed_moves())
        else {
            println!("No more input, leaving the game.");
            return Ok(());
        };
        match game.perform(Side::Human, mv, &mut rng) {
            Ok(res) => {
                human.handle_resolution(&res);
                computer.handle_opponent_resolution(&res);
            }
            Err(e) => {
                println!("Move rejected: {}", e);
                continue;
            }
        }
        sink.drain(&mut game);
        if game.is_over() {
            break;
        }

        take_turn(&mut game, Side::Computer, &mut computer, &mut human, &mut rng)?;
        sink.drain(&mut game);
        if game.is_over() {
            break;
        }
    }

    println!("\n=== GAME OVER ===");
    sink.print(&game);
    match game.winner() {
        Some(Side::Human) => println!("\nVICTORY! You have sunk all enemy ships!"),
        Some(Side::Computer) => println!("\nDEFEAT. All your ships have been destroyed."),
        None => {}
    }
    print_scores(&game);
    Ok(())
}

#[cfg(feature = "std")]
fn print_scores(game: &Match) {
    for side in [Side::Human, Side::Computer] {
        let stats = game.game_stats(side);
        println!(
            "{:?}: {} hits, {} misses, final score {}",
            side,
            stats.hits_on_enemy,
            stats.misses,
            game.final_score(side)
        );
    }
}
