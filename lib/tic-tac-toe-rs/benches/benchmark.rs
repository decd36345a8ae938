use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    Criterion,
};
use std::time::Duration;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("minimax all", |b| {
        b.iter(|| tic_tac_toe::minimax(black_box(tic_tac_toe::initial_state())))
    });

    c.bench_function("solver compile", |b| b.iter(tic_tac_toe::Solver::compiled));

    let mut solver = tic_tac_toe::Solver::compiled();
    c.bench_function("solver compiled all", |b| {
        b.iter(|| solver.best_action(black_box(tic_tac_toe::initial_state())))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = criterion_benchmark
}
criterion_main!(benches);
