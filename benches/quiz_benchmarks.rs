use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use dalquiz::quiz::distractor::DistractorSelector;
use dalquiz::quiz::shuffle::shuffle;
use dalquiz::quiz::{Direction, QuizOptions, QuizRun, Vocabulary};

fn bench_shuffle(c: &mut Criterion) {
    let items: Vec<u32> = (0..12).collect();
    let mut rng = SmallRng::seed_from_u64(1);

    c.bench_function("shuffle (12 items)", |b| {
        b.iter(|| shuffle(black_box(&items), &mut rng))
    });
}

fn bench_wrong_choices(c: &mut Criterion) {
    let vocab = Vocabulary::months();
    let selector = DistractorSelector::new(&vocab);
    let mut rng = SmallRng::seed_from_u64(2);

    c.bench_function("wrong_choices (3 of 11)", |b| {
        b.iter(|| {
            selector.wrong_choices(
                black_box("January"),
                black_box("일월"),
                Direction::KoreanToEnglish,
                3,
                &mut rng,
            )
        })
    });
}

fn bench_generate_run(c: &mut Criterion) {
    let vocab = Vocabulary::months();
    let options = QuizOptions::default();
    let mut rng = SmallRng::seed_from_u64(3);

    c.bench_function("QuizRun::generate (12 questions)", |b| {
        b.iter(|| QuizRun::generate(black_box(&vocab), &options, &mut rng))
    });
}

criterion_group!(benches, bench_shuffle, bench_wrong_choices, bench_generate_run);
criterion_main!(benches);
