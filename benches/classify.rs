use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use five_card::core::{Deck, Hand};

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_hand", |b| {
        b.iter(|| Hand::new_from_str(black_box("TH, JH, QH, KH, AH")))
    });
}

fn bench_rank(c: &mut Criterion) {
    let hands = [
        Hand::new_from_str("TH, JH, QH, KH, AH"),
        Hand::new_from_str("AH, 2D, 3S, 4C, 5H"),
        Hand::new_from_str("2H, 2D, 3S, 3C, 3H"),
        Hand::new_from_str("2H, 5D, 7S, 9C, JH"),
    ]
    .map(|h| h.expect("valid bench hands"));

    c.bench_function("rank_hand", |b| {
        b.iter(|| {
            for hand in &hands {
                black_box(hand.rank());
            }
        })
    });
}

fn bench_rank_dealt(c: &mut Criterion) {
    let mut deck = Deck::default();
    deck.shuffle(&mut rand::thread_rng());
    let mut hands = Vec::new();
    while let Some(hand) = deck.deal_hand() {
        hands.push(hand);
    }

    c.bench_function("rank_dealt_hands", |b| {
        b.iter(|| {
            for hand in &hands {
                black_box(hand.rank());
            }
        })
    });
}

criterion_group!(benches, bench_parse, bench_rank, bench_rank_dealt);
criterion_main!(benches);
