use pirate_fleet::{take_turn, GameConfig, Grid, Match, Player, RandomPlayer, Side};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Hard stop well above the number of cells on any supported grid.
const MAX_TURNS: usize = 1_000;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let config = GameConfig::default();
    let mut p1 = RandomPlayer::new();
    let mut p2 = RandomPlayer::new();
    let mut g1 = Grid::new(&config)?;
    let mut g2 = Grid::new(&config)?;
    p1.place_fleet(&mut rng1, &mut g1, &config)?;
    p2.place_fleet(&mut rng2, &mut g2, &config)?;

    let mut game = Match::new(config, g1, g2)?;
    let mut turns = 0;
    while !game.is_over() && turns < MAX_TURNS {
        turns += 1;
        take_turn(&mut game, Side::Human, &mut p1, &mut p2, &mut rng1)?;
        if game.is_over() {
            break;
        }
        take_turn(&mut game, Side::Computer, &mut p2, &mut p1, &mut rng2)?;
    }
    let _ = game.drain_events().count();

    let winner = match game.winner() {
        Some(Side::Human) => Some("player1"),
        Some(Side::Computer) => Some("player2"),
        None => None,
    };
    let summary = |side: Side| {
        let stats = game.game_stats(side);
        json!({
            "hits": stats.hits_on_enemy,
            "misses": stats.misses,
            "ships_sunk": stats.own_ships_sunk,
            "score": game.final_score(side),
        })
    };

    let result = json!({
        "player1": summary(Side::Human),
        "player2": summary(Side::Computer),
        "turns": turns,
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
