use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tambola_core::{
    ColumnCoverage, GameSession, GenerationPolicy, RandomTicketGenerator, SessionConfig,
    TicketGenerator,
};

fn bench_ticket_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("ticket_generation");
    for coverage in [ColumnCoverage::Loose, ColumnCoverage::EveryColumn] {
        let generator = RandomTicketGenerator::new(GenerationPolicy {
            coverage,
            ..Default::default()
        });
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{coverage:?}")),
            &generator,
            |b, generator| {
                let mut rng = SmallRng::seed_from_u64(0x7a3b);
                b.iter(|| black_box(generator.generate(&mut rng)));
            },
        );
    }
    group.finish();
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("six_tickets_full_draw", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            let mut session = GameSession::seeded(SessionConfig::default(), seed);
            session.generate_tickets(6).expect("six tickets");
            while session.can_draw() {
                black_box(session.draw_next().expect("draw"));
            }
            session
        });
    });
}

criterion_group!(benches, bench_ticket_generation, bench_full_game);
criterion_main!(benches);
