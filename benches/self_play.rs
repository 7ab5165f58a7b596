use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nim_td::core::{LearnerConfig, NimConfig};
use nim_td::learning::{QLearning, Sarsa};
use nim_td::training::{EpisodeRunner, Lineup, Mode};

fn bench_episodes(c: &mut Criterion) {
    let runner = EpisodeRunner::new(NimConfig::default());

    c.bench_function("q_learning_self_play_episode", |b| {
        let mut learner = QLearning::new(LearnerConfig::default());
        b.iter(|| black_box(runner.run(&mut Lineup::SelfPlay(&mut learner), Mode::Training)))
    });

    c.bench_function("sarsa_self_play_episode", |b| {
        let mut learner = Sarsa::new(LearnerConfig::default());
        b.iter(|| black_box(runner.run(&mut Lineup::SelfPlay(&mut learner), Mode::Training)))
    });
}

criterion_group!(benches, bench_episodes);
criterion_main!(benches);
