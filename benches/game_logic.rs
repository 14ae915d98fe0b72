use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{Field, GameConfig, GameState};
use blockfall::types::Command;

fn bench_tick(c: &mut Criterion) {
    let mut game = GameState::new(12345);

    c.bench_function("tick", |b| {
        let mut now = 0u64;
        b.iter(|| {
            now += 16;
            game.tick(black_box(now));
            if game.game_over() {
                game.reset();
            }
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut game = GameState::new(12345);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            game.handle_input(black_box(Command::HardDrop), 0);
            if game.game_over() {
                game.reset();
            }
        })
    });
}

fn bench_shift_and_rotate(c: &mut Criterion) {
    let mut game = GameState::new(12345);

    c.bench_function("shift_and_rotate", |b| {
        b.iter(|| {
            game.handle_input(black_box(Command::MoveLeft), 0);
            game.handle_input(black_box(Command::RotateRight), 0);
            game.handle_input(black_box(Command::MoveRight), 0);
        })
    });
}

fn bench_clear_full_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut field = Field::new(&GameConfig::default());
            for y in 16..20 {
                for x in 0..10 {
                    field.set(x, y, true);
                }
            }
            black_box(field.clear_full_rows())
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_hard_drop,
    bench_shift_and_rotate,
    bench_clear_full_rows
);
criterion_main!(benches);
