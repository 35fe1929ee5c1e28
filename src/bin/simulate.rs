use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use log::info;
use owo_colors::OwoColorize;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use pacsearch::agents::*;
use pacsearch::game::*;
use pacsearch::search::State;
use pacsearch::{logging, Error};

/// Simulate games of a search agent against random ghosts.
#[derive(Parser)]
#[command(name = "pacsearch simulator", version)]
struct Opts {
    /// Layout file, defaults to the built-in small maze.
    #[arg(long)]
    layout: Option<PathBuf>,
    /// Number of games.
    #[arg(short, long, default_value_t = 1)]
    games: usize,
    /// Maximum number of moves of the controlled agent per game.
    #[arg(long, default_value_t = 500)]
    max_turns: usize,
    /// Print the board after every round.
    #[arg(short, long)]
    verbose: bool,
    /// JSON agent configuration, e.g. '{"Expectimax": {"depth": 3}}'.
    #[arg(default_value_t)]
    agent: Agent,
}

fn main() -> Result<(), Error> {
    logging();

    let Opts {
        layout,
        games,
        max_turns,
        verbose,
        agent,
    } = Opts::parse();

    let layout = match layout {
        Some(path) => std::fs::read_to_string(path)?,
        None => SMALL_CLASSIC.to_string(),
    };
    let game = Game::parse(&layout).ok_or(Error::Layout)?;
    info!("agent: {agent}");

    let start = Instant::now();
    let mut wins = 0;
    let mut total = 0;

    for i in 0..games {
        let (outcome, score) = play_game(&agent, &game, max_turns, verbose)?;
        wins += (outcome == Outcome::Win) as usize;
        total += score;
        println!(
            "{}: {} {:?} {} {}ms",
            "Finish Game".bright_green(),
            i,
            outcome,
            score,
            start.elapsed().as_millis()
        );
    }

    println!("Result: {}/{}", wins, games);
    if games > 0 {
        println!("Average Score: {:.1}", total as f64 / games as f64);
    }
    Ok(())
}

fn play_game(
    agent: &Agent,
    game: &Game,
    max_turns: usize,
    verbose: bool,
) -> Result<(Outcome, i64), Error> {
    let mut rng = SmallRng::from_entropy();
    let mut game = game.clone();

    if verbose {
        println!("init: {:?}", game);
    }

    for turn in 0..max_turns {
        let action = agent.get_action(&game)?;
        game.step(0, action);

        for ghost in 1..game.num_agents() {
            if game.is_terminal() {
                break;
            }
            let action = RandomAgent.get_action(&game, ghost, &mut rng)?;
            game.step(ghost, action);
        }

        if verbose {
            println!("{}: {:?} {:?}", turn, action, game);
        }

        if game.is_terminal() {
            println!("game: {:?} after {} turns", game.outcome(), turn);
            break;
        }
    }
    Ok((game.outcome(), game.score))
}
