use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dragon_typer::core::{
    EntitySnapshot, HighScores, MemoryStore, Session, SessionSnapshot, WordList,
};
use dragon_typer::types::{Action, FontFamily};

fn crowded_session(store: &mut MemoryStore) -> Session {
    let words = WordList::from_text("ember wyrm wyvern hoard firebreather").unwrap();
    let entities = (0..40)
        .map(|i| EntitySnapshot {
            word: ["ember", "wyrm", "wyvern", "hoard"][i % 4].to_owned(),
            x: (i * 15) as f32,
            y: (i * 10) as f32,
            speed: 0.001,
        })
        .collect();
    let snapshot = SessionSnapshot {
        score: 10,
        lives: 3,
        font_size: 24,
        font: FontFamily::BitFont,
        entities,
    };
    *store = MemoryStore::new().with_save_text(snapshot.encode());
    let mut session = Session::new(words, HighScores::new(), 12345);
    session.apply(Action::Load, store);
    session
}

fn bench_tick(c: &mut Criterion) {
    let mut store = MemoryStore::new();
    let mut session = crowded_session(&mut store);

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            session.tick(black_box(0.016), &mut store);
        })
    });
}

fn bench_highlights(c: &mut Criterion) {
    let mut store = MemoryStore::new();
    let mut session = crowded_session(&mut store);
    for ch in "wyv".chars() {
        session.apply(Action::Type(ch), &mut store);
    }

    c.bench_function("highlight_pass_40_words", |b| {
        b.iter(|| black_box(session.highlights().map(|(_, n)| n).sum::<usize>()))
    });
}

fn bench_snapshot_codec(c: &mut Criterion) {
    let mut store = MemoryStore::new();
    let session = crowded_session(&mut store);
    let text = session.snapshot().encode();

    c.bench_function("snapshot_decode_40_words", |b| {
        b.iter(|| SessionSnapshot::decode(black_box(&text)))
    });
}

criterion_group!(benches, bench_tick, bench_highlights, bench_snapshot_codec);
criterion_main!(benches);
