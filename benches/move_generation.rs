use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_backgammon::core::{Command, GameConfig, GameRng, GameState, SeatMap};
use rust_backgammon::events::{fold, Event};
use rust_backgammon::game::Game;
use rust_backgammon::rules::{generate_moves, MoveFilter};
use rust_backgammon::Seat;

fn opening(dice: [u8; 2]) -> GameState {
    fold(&GameState::initial(false), &Event::Rolled { seat: Seat::White, dice })
}

fn playout(seed: u64, limit: usize) -> Game {
    let mut rng = GameRng::new(seed);
    let mut game = Game::new(
        SeatMap::new("alice".to_string(), "bob".to_string()),
        GameConfig::new(),
    );
    for _ in 0..limit {
        let moves = game.moves(&MoveFilter::new());
        let Some(index) = rng.pick(moves.len()) else {
            break;
        };
        let command = Command::from_action(&moves[index], rng.roll());
        game = game.execute(&command).expect("generated actions validate");
    }
    game
}

fn move_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_moves");
    for dice in [[3, 1], [6, 5], [4, 4]] {
        let state = opening(dice);
        group.bench_function(BenchmarkId::new("opening", format!("{}-{}", dice[0], dice[1])), |b| {
            b.iter(|| black_box(generate_moves(black_box(&state), &MoveFilter::new())))
        });
    }
    group.finish();
}

fn playouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("playout");
    for limit in [50usize, 200] {
        group.bench_function(BenchmarkId::new("random", limit), |b| {
            b.iter(|| black_box(playout(7, limit)))
        });
    }

    let game = playout(7, 200);
    group.bench_function("replay_200", |b| b.iter(|| black_box(game.replay())));
    group.finish();
}

criterion_group!(benches, move_generation, playouts);
criterion_main!(benches);
