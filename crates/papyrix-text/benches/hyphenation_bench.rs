//! Hyphenation throughput per language.
//!
//! Run with: cargo bench -p papyrix-text --bench hyphenation_bench
//!
//! Workloads:
//! - **Prose**: a paragraph of ordinary words, most of them short.
//! - **Long words**: compounds and technical terms where the trie walk
//!   dominates.
//! - **Explicit**: hyphenated compounds that take the segment path.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use papyrix_text::hyphenation::Hyphenator;
use std::hint::black_box;

// ── Workload Generators ─────────────────────────────────────────────────

const ENGLISH_PROSE: &str = "It was the best of times, it was the worst of times, it was the age \
    of wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of \
    incredulity, it was the season of Light, it was the season of Darkness.";

const ENGLISH_LONG: &[&str] = &[
    "hyphenation",
    "international",
    "incomprehensibilities",
    "characteristically",
    "uncharacteristically",
    "responsibilities",
    "counterrevolutionaries",
];

const GERMAN_LONG: &[&str] = &[
    "Donaudampfschifffahrt",
    "Rechtsschutzversicherungsgesellschaften",
    "Kraftfahrzeughaftpflichtversicherung",
    "Geschwindigkeitsbegrenzung",
];

const RUSSIAN_LONG: &[&str] = &[
    "\u{043f}\u{0440}\u{043e}\u{0433}\u{0440}\u{0430}\u{043c}\u{043c}\u{0438}\u{0440}\u{043e}\u{0432}\u{0430}\u{043d}\u{0438}\u{0435}",
    "\u{0434}\u{043e}\u{0441}\u{0442}\u{043e}\u{043f}\u{0440}\u{0438}\u{043c}\u{0435}\u{0447}\u{0430}\u{0442}\u{0435}\u{043b}\u{044c}\u{043d}\u{043e}\u{0441}\u{0442}\u{044c}",
];

const EXPLICIT: &[&str] = &[
    "self-aware",
    "state-of-the-art",
    "extensive-algorithm",
    "auto\u{ad}matic",
    "well-known\u{2013}fact",
];

fn prose_words() -> Vec<&'static str> {
    ENGLISH_PROSE.split_whitespace().collect()
}

// ── Benchmark Functions ─────────────────────────────────────────────────

fn bench_break_offsets(c: &mut Criterion) {
    let mut group = c.benchmark_group("hyphenation/break_offsets");

    let prose = prose_words();
    let workloads: [(&str, &str, &[&str]); 5] = [
        ("en_prose", "en", &prose),
        ("en_long", "en", ENGLISH_LONG),
        ("de_long", "de", GERMAN_LONG),
        ("ru_long", "ru", RUSSIAN_LONG),
        ("en_explicit", "en", EXPLICIT),
    ];

    for (name, language, words) in workloads {
        let hyphenator = Hyphenator::for_language(language);
        let bytes: usize = words.iter().map(|w| w.len()).sum();
        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), words, |b, words| {
            b.iter(|| {
                for word in words {
                    black_box(hyphenator.break_offsets(black_box(word), false));
                }
            });
        });
    }
    group.finish();
}

fn bench_fallback(c: &mut Criterion) {
    let mut group = c.benchmark_group("hyphenation/fallback");
    let hyphenator = Hyphenator::default();
    let words = ["zzzzzzzzzzzz", "qwrtypsdfghjklzxcvbnm", "abcdefghijklmnopqrstuvwxyz"];

    group.bench_function("no_language", |b| {
        b.iter(|| {
            for word in &words {
                black_box(hyphenator.break_offsets(black_box(word), true));
            }
        });
    });
    group.finish();
}

fn bench_language_lookup(c: &mut Criterion) {
    c.bench_function("hyphenation/for_language", |b| {
        b.iter(|| {
            for tag in ["en-US", "de_AT", "ru", "xx"] {
                black_box(Hyphenator::for_language(black_box(tag)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_break_offsets,
    bench_fallback,
    bench_language_lookup
);
criterion_main!(benches);
