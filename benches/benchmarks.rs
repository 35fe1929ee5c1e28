use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pacsearch::agents::{better_evaluation, score_evaluation, ReflexAgent};
use pacsearch::env::Direction;
use pacsearch::game::{Game, MINIMAX_CLASSIC, SMALL_CLASSIC};
use pacsearch::search::{self, State};

fn game_step_random(c: &mut Criterion) {
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    let game = Game::parse(SMALL_CLASSIC).unwrap();

    c.bench_function("game_step_random", |b| {
        b.iter(|| {
            let mut rng = SmallRng::seed_from_u64(42);
            let mut game = game.clone();
            for _ in 0..200 {
                for agent in 0..game.num_agents() {
                    let action = game
                        .legal_actions(agent)
                        .choose(&mut rng)
                        .copied()
                        .unwrap_or(Direction::Stop);
                    game.step(agent, action);
                }
                if game.is_terminal() {
                    break;
                }
            }
        })
    });
}

fn better_heuristic(c: &mut Criterion) {
    let game = Game::parse(SMALL_CLASSIC).unwrap();

    c.bench_function("better_evaluation", |b| {
        b.iter(|| better_evaluation(black_box(&game)))
    });
    c.bench_function("reflex", |b| {
        b.iter(|| ReflexAgent::evaluate(black_box(&game), Direction::Left))
    });
}

fn strategies(c: &mut Criterion) {
    let layouts = [
        ("minimax_classic", MINIMAX_CLASSIC, 3),
        ("small_classic", SMALL_CLASSIC, 2),
    ];
    for (name, layout, depth) in layouts {
        let game = Game::parse(layout).unwrap();
        let eval = score_evaluation::<Game>;

        for (strategy, decision) in [
            ("minimax", search::minimax(&game, depth, eval)),
            ("alphabeta", search::alphabeta(&game, depth, eval)),
            ("expectimax", search::expectimax(&game, depth, eval)),
        ] {
            let stats = decision.unwrap().stats;
            println!(
                "{strategy}_{name}: nodes={} leaves={}",
                stats.nodes, stats.leaves
            );
        }

        c.bench_function(&format!("minimax_{name}"), |b| {
            b.iter(|| search::minimax(black_box(&game), black_box(depth), eval))
        });
        c.bench_function(&format!("alphabeta_{name}"), |b| {
            b.iter(|| search::alphabeta(black_box(&game), black_box(depth), eval))
        });
        c.bench_function(&format!("expectimax_{name}"), |b| {
            b.iter(|| search::expectimax(black_box(&game), black_box(depth), eval))
        });
        c.bench_function(&format!("alphabeta_better_{name}"), |b| {
            b.iter(|| {
                search::alphabeta(
                    black_box(&game),
                    black_box(depth),
                    better_evaluation::<Game>,
                )
            })
        });
    }
}

criterion_group!(benches, game_step_random, better_heuristic, strategies);
criterion_main!(benches);
