use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::hint::black_box;
use std::time::Duration;
use common::games::{NullBroadcaster, SessionRng};
use common::games::snake::{BotController, BotType, SnakeSession, SnakeSessionSettings};

fn settings(seed: u64) -> SnakeSessionSettings {
    SnakeSessionSettings {
        field_width: 30,
        field_height: 30,
        start_x: 15,
        start_y: 15,
        initial_length: 2,
        move_rate_ms: 100,
        seed: Some(seed),
    }
}

fn play(bot_type: BotType, ticks: u64) -> u32 {
    let mut session = SnakeSession::create(settings(7)).expect("bench settings are valid");
    let mut bot_rng = SessionRng::new(8);
    let mut broadcaster = NullBroadcaster;

    for _ in 0..ticks {
        let input = BotController::calculate_input(bot_type, session.state(), &mut bot_rng);
        session.submit(input);
        if session.tick(&mut broadcaster).is_terminal() {
            break;
        }
    }
    session.score()
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("snake_ticks");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(10));

    group.bench_function("efficient_bot_1000", |b| {
        b.iter(|| play(black_box(BotType::Efficient), 1000))
    });

    group.bench_function("random_bot_1000", |b| {
        b.iter(|| play(black_box(BotType::Random), 1000))
    });

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
