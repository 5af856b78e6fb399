#[macro_use]
extern crate criterion;
extern crate cardroom_history;

use cardroom_history::history::GameType;
use cardroom_history::winamax::{WinamaxParser, split_hands};
use criterion::Criterion;

const TOURNAMENT_FILE: &str = include_str!("../src/winamax/testdata/tournament.txt");
const CASH_FILE: &str = include_str!("../src/winamax/testdata/cash.txt");

fn split_tournament(c: &mut Criterion) {
    c.bench_function("Split tournament file", |b| {
        b.iter(|| split_hands(TOURNAMENT_FILE));
    });
}

fn decode_one_hand(c: &mut Criterion) {
    let split = split_hands(TOURNAMENT_FILE);
    let text = split.blocks["236883548206792705-2"].clone();
    let parser = WinamaxParser::default();
    c.bench_function("Decode showdown hand", |b| {
        b.iter(|| parser.decode_hand(&text));
    });
}

fn parse_tournament_sequential(c: &mut Criterion) {
    let parser = WinamaxParser::builder().parallel(false).build();
    c.bench_function("Parse tournament file (sequential)", |b| {
        b.iter(|| parser.parse_str(TOURNAMENT_FILE));
    });
}

fn parse_tournament_parallel(c: &mut Criterion) {
    let parser = WinamaxParser::builder().parallel(true).build();
    c.bench_function("Parse tournament file (parallel)", |b| {
        b.iter(|| parser.parse_str(TOURNAMENT_FILE));
    });
}

fn parse_cash(c: &mut Criterion) {
    let parser = WinamaxParser::builder().game_type(GameType::Cash).build();
    c.bench_function("Parse cash game file", |b| {
        b.iter(|| parser.parse_str(CASH_FILE));
    });
}

criterion_group!(
    benches,
    split_tournament,
    decode_one_hand,
    parse_tournament_sequential,
    parse_tournament_parallel,
    parse_cash
);
criterion_main!(benches);
