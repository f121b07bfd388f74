use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use starfarer_core::prelude::*;
use starfarer_logic::config::GalaxyConfig;
use starfarer_logic::generation::generate_galaxy_from_config;

fn bench_generate_galaxy(c: &mut Criterion) {
    let config = GalaxyConfig {
        star_systems: 100,
        ..GalaxyConfig::default()
    };
    c.bench_function("generate_galaxy_100", |b| {
        b.iter(|| {
            let mut rng = ChaChaRng::seed_from_u64(7);
            black_box(generate_galaxy_from_config(&mut rng, &config))
        })
    });
}

fn bench_session_tick(c: &mut Criterion) {
    let mut session = GameSession::new(GameConfig {
        seed: Some(7),
        ..GameConfig::default()
    })
    .unwrap();
    session.finish_loading();
    session.key_down(Key::Forward);

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            session.tick();
            black_box(session.drain_events())
        })
    });
}

criterion_group!(benches, bench_generate_galaxy, bench_session_tick);
criterion_main!(benches);
