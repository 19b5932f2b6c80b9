use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::{Card, Hand, Suit, Value};

/// A deck of 52 cards.
///
/// Aces are dealt as [`Value::AceLow`], the same interpretation the
/// parser produces, so dealt and parsed hands classify identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Shuffle the remaining cards.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deal a single card off the top of the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deal a five card hand, or `None` if fewer than five cards
    /// remain.
    pub fn deal_hand(&mut self) -> Option<Hand> {
        if self.cards.len() < Hand::SIZE {
            return None;
        }
        let at = self.cards.len() - Hand::SIZE;
        let cards: [Card; Hand::SIZE] = self.cards.split_off(at).try_into().ok()?;
        Some(Hand::new(cards))
    }

    /// How many cards are left in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck empty?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// A full ordered deck.
impl Default for Deck {
    fn default() -> Self {
        let mut cards = Vec::with_capacity(Self::SIZE);
        for suit in Suit::suits() {
            for value in Value::values() {
                cards.push(Card::new(value, suit));
            }
        }
        Self { cards }
    }
}
