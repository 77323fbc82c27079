#![allow(missing_docs)]

use compact_str::CompactString;
use divan::{Bencher, black_box};
use pairsmith::{
    training::{MergeTrainerOptions, PairCountTable, WordCounterOptions},
    vocab::Vocabulary,
};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

static WORDS: &[&str] = &[
    "low", "lower", "lowest", "newer", "newest", "wider", "widest", "hug", "pug", "pun", "bun",
    "tokenizer", "tokenize", "token", "merge", "merging", "merged", "symbol", "symbols",
];

fn corpus_vocab(repeats: usize) -> Vocabulary<CompactString, u64> {
    let mut counter = WordCounterOptions::default()
        .init::<CompactString, u64>()
        .unwrap();
    for i in 0..repeats {
        let line: Vec<String> = WORDS
            .iter()
            .enumerate()
            .map(|(j, w)| format!("{w}{}", (i * 7 + j) % 31))
            .collect();
        counter.update_from_text(line.join(" ")).unwrap();
    }
    counter.to_vocabulary().unwrap()
}

#[divan::bench(args = [100, 1000])]
fn count_pairs(
    bencher: Bencher,
    repeats: usize,
) {
    let vocab = corpus_vocab(repeats);
    bencher.bench(|| PairCountTable::from_vocab(black_box(&vocab)));
}

#[divan::bench(args = [100, 1000])]
fn count_pairs_parallel(
    bencher: Bencher,
    repeats: usize,
) {
    let vocab = corpus_vocab(repeats);
    bencher.bench(|| PairCountTable::from_vocab_parallel(black_box(&vocab)));
}

#[divan::bench(args = [10, 100])]
fn train_rounds(
    bencher: Bencher,
    rounds: usize,
) {
    let vocab = corpus_vocab(200);
    bencher
        .with_inputs(|| vocab.clone())
        .bench_values(|vocab| {
            MergeTrainerOptions::new(rounds)
                .with_record_snapshots(false)
                .init(vocab)
                .unwrap()
                .into_results()
                .unwrap()
        });
}
