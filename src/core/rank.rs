use std::fmt;

use crate::core::{Card, Hand, Value};

/// All the different hand categories, weakest first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Rank {
    /// No matches.
    HighCard,
    /// One card matches another.
    Pair,
    /// Two different pairs of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of one value and two of another value.
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all of the same suit.
    StraightFlush,
    /// Ten through Ace in a sequence all of the same suit.
    RoyalFlush,
}

impl Rank {
    /// The label reported for this category.
    pub fn label(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::Pair => "Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The values forming the high boundary run.
const ROYAL_RUN: [Value; Hand::SIZE] = [
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::AceHigh,
];

/// All five cards share one suit.
fn is_flush(cards: &[Card; Hand::SIZE]) -> bool {
    cards.iter().all(|c| c.suit == cards[0].suit)
}

/// The five sorted values form one contiguous run.
///
/// Adjacency is a numeric difference of exactly one, so five distinct
/// consecutive values are required. Both Ace boundary runs fall out of
/// the two Ace members: the wheel is `1,2,3,4,5` and, after promotion,
/// the broadway run is `10,11,12,13,14`. Nothing else wraps around.
fn is_straight(cards: &[Card; Hand::SIZE]) -> bool {
    cards
        .windows(2)
        .all(|w| w[1].value as u8 == w[0].value as u8 + 1)
}

/// Flush and straight hold simultaneously.
fn is_straight_flush(cards: &[Card; Hand::SIZE]) -> bool {
    is_flush(cards) && is_straight(cards)
}

/// Flush whose sorted values are exactly Ten through `AceHigh`.
fn is_royal_flush(cards: &[Card; Hand::SIZE]) -> bool {
    is_flush(cards) && std::array::from_fn::<_, { Hand::SIZE }, _>(|i| cards[i].value) == ROYAL_RUN
}

/// Count how many cards hold each value, indexed by the numeric value.
fn value_counts(cards: &[Card; Hand::SIZE]) -> [u8; 15] {
    let mut counts = [0u8; 15];
    for c in cards {
        counts[c.value as usize] += 1;
    }
    counts
}

/// Some value appears four times.
fn is_four_of_a_kind(cards: &[Card; Hand::SIZE]) -> bool {
    value_counts(cards).contains(&4)
}

/// One value appears three times and another twice.
fn is_full_house(cards: &[Card; Hand::SIZE]) -> bool {
    let counts = value_counts(cards);
    counts.contains(&3) && counts.contains(&2)
}

/// Some value appears three times. Runs after the full house check, so
/// it doesn't need to exclude the pair itself.
fn is_three_of_a_kind(cards: &[Card; Hand::SIZE]) -> bool {
    value_counts(cards).contains(&3)
}

/// Exactly two distinct values each appear twice.
fn is_two_pair(cards: &[Card; Hand::SIZE]) -> bool {
    value_counts(cards).iter().filter(|&&n| n == 2).count() == 2
}

/// At least one value appears twice.
fn is_pair(cards: &[Card; Hand::SIZE]) -> bool {
    value_counts(cards).contains(&2)
}

type Predicate = fn(&[Card; Hand::SIZE]) -> bool;

/// The priority order for classification. The first predicate that
/// holds decides the category; several predicates overlap (a full house
/// also contains a pair) and this order is the sole disambiguation.
const CLASSIFIERS: [(Predicate, Rank); 9] = [
    (is_royal_flush, Rank::RoyalFlush),
    (is_straight_flush, Rank::StraightFlush),
    (is_flush, Rank::Flush),
    (is_four_of_a_kind, Rank::FourOfAKind),
    (is_full_house, Rank::FullHouse),
    (is_three_of_a_kind, Rank::ThreeOfAKind),
    (is_straight, Rank::Straight),
    (is_two_pair, Rank::TwoPair),
    (is_pair, Rank::Pair),
];

/// Classify five cards already sorted ascending by value.
fn rank_sorted(cards: &[Card; Hand::SIZE]) -> Rank {
    CLASSIFIERS
        .iter()
        .find(|(predicate, _)| predicate(cards))
        .map(|&(_, rank)| rank)
        .unwrap_or(Rank::HighCard)
}

impl Hand {
    /// Classify this hand into its best matching category.
    ///
    /// The cards are sorted ascending by value (on a copy, the hand is
    /// not mutated) and run through the predicates in priority order.
    /// When the hand holds any low Ace it is also evaluated with every
    /// Ace promoted to `AceHigh`, and the stronger category wins; this
    /// is what makes the Ace high runs reachable even though the
    /// parser always produces `AceLow`.
    ///
    /// # Examples
    /// ```
    /// use five_card::core::{Hand, Rank};
    ///
    /// let hand = Hand::new_from_str("TH, JH, QH, KH, AH").unwrap();
    /// assert_eq!(Rank::RoyalFlush, hand.rank());
    ///
    /// let hand = Hand::new_from_str("AH, 2D, 3S, 4C, 5H").unwrap();
    /// assert_eq!(Rank::Straight, hand.rank());
    /// ```
    pub fn rank(&self) -> Rank {
        let mut cards = *self.cards();
        cards.sort_unstable_by_key(|c| c.value);

        let mut rank = rank_sorted(&cards);
        if cards.iter().any(|c| c.value == Value::AceLow) {
            let mut promoted = cards;
            for card in &mut promoted {
                if card.value == Value::AceLow {
                    card.value = Value::AceHigh;
                }
            }
            promoted.sort_unstable_by_key(|c| c.value);
            // Promotion only moves Aces, so the count based categories
            // are unchanged; the interpretations can only disagree on
            // the straight family, where the stronger one is right.
            rank = rank.max(rank_sorted(&promoted));
        }

        tracing::trace!(?rank, "classified hand");
        rank
    }
}
