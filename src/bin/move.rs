use std::path::PathBuf;

use clap::Parser;
use log::info;

use pacsearch::agents::*;
use pacsearch::game::*;
use pacsearch::{logging, Error};

/// Choose a single move for the given layout.
#[derive(Parser)]
#[command(name = "pacsearch move")]
struct Opts {
    /// Search depth in rounds.
    #[arg(short, long, default_value = "2", allow_hyphen_values = true)]
    depth: String,
    /// Evaluation function, `score` or `better`.
    #[arg(short, long, default_value = "score")]
    evaluation: String,
    /// Search strategy, `minimax`, `alphabeta` or `expectimax`.
    #[arg(short, long, default_value = "alphabeta")]
    strategy: Strategy,
    /// Layout file, defaults to the built-in minimax maze.
    layout: Option<PathBuf>,
}

fn main() -> Result<(), Error> {
    logging();

    let Opts {
        depth,
        evaluation,
        strategy,
        layout,
    } = Opts::parse();

    let config = SearchConfig::parse(&evaluation, &depth)?;

    let layout = match layout {
        Some(path) => std::fs::read_to_string(path)?,
        None => MINIMAX_CLASSIC.to_string(),
    };
    let game = Game::parse(&layout).ok_or(Error::Layout)?;
    info!("{:?}", game);

    let decision = strategy.search(&config, &game)?;
    info!(
        "Step: {:?} value={} nodes={} leaves={}",
        decision.action, decision.value, decision.stats.nodes, decision.stats.leaves
    );
    Ok(())
}
