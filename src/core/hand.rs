use std::fmt;

use crate::core::{Card, ParseHandError, Suit, Value};

/// A five card hand.
///
/// Hands are built either from an array of cards or from text with
/// [`Hand::new_from_str`]. The classifier works on a sorted copy, so a
/// hand is never mutated after construction.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Hand {
    cards: [Card; 5],
}

impl Hand {
    /// Number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Create a hand from five cards.
    pub fn new(cards: [Card; Self::SIZE]) -> Self {
        Self { cards }
    }

    /// Parse a hand from comma separated card tokens.
    ///
    /// Each token is trimmed and must be 2 to 3 characters: a rank
    /// character followed by a suit character, case-insensitive. An `A`
    /// or `1` rank always yields [`Value::AceLow`]; the classifier is
    /// responsible for trying the high Ace interpretation.
    ///
    /// # Examples
    /// ```
    /// use five_card::core::Hand;
    ///
    /// let hand = Hand::new_from_str("AH, 2H, 3H, 4H, 5H").unwrap();
    /// assert_eq!("AH, 2H, 3H, 4H, 5H", hand.to_string());
    /// ```
    pub fn new_from_str(input: &str) -> Result<Self, ParseHandError> {
        Self::parse(input).inspect_err(|err| {
            tracing::debug!(input, %err, "failed to parse hand");
        })
    }

    fn parse(input: &str) -> Result<Self, ParseHandError> {
        let mut cards = Vec::with_capacity(Self::SIZE);
        for token in input.split(',') {
            cards.push(Card::try_from(token)?);
        }
        let cards: [Card; Self::SIZE] = cards
            .try_into()
            .map_err(|cards: Vec<Card>| ParseHandError::InvalidCardCount(cards.len()))?;
        Ok(Self::new(cards))
    }

    /// The cards of the hand, in the order they were given.
    pub fn cards(&self) -> &[Card; Self::SIZE] {
        &self.cards
    }

    /// Iterate over the cards of the hand.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}

impl TryFrom<&str> for Card {
    type Error = ParseHandError;

    /// Parse a single card token like `TH` or `ah`.
    fn try_from(token: &str) -> Result<Self, Self::Error> {
        let token = token.trim();
        let chars: Vec<char> = token.chars().collect();
        // Tokens may carry a trailing third character, only the first
        // two are significant.
        if !(2..=3).contains(&chars.len()) {
            return Err(ParseHandError::InvalidToken(token.to_string()));
        }

        let value =
            Value::from_char(chars[0]).ok_or(ParseHandError::InvalidRankChar(chars[0]))?;
        let suit = Suit::from_char(chars[1]).ok_or(ParseHandError::InvalidSuitChar(chars[1]))?;

        Ok(Card::new(value, suit))
    }
}

impl fmt::Display for Hand {
    /// Formats the hand in the same comma separated form the parser
    /// accepts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hand() {
        let hand = Hand::new_from_str("AH, 2H, 3H, 4H, 5H").unwrap();
        assert_eq!(
            &[
                Card::new(Value::AceLow, Suit::Heart),
                Card::new(Value::Two, Suit::Heart),
                Card::new(Value::Three, Suit::Heart),
                Card::new(Value::Four, Suit::Heart),
                Card::new(Value::Five, Suit::Heart),
            ],
            hand.cards()
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let upper = Hand::new_from_str("TH, JD, QS, KC, AH").unwrap();
        let lower = Hand::new_from_str("th, jd, qs, kc, ah").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let hand = Hand::new_from_str("  2D ,3S,  4C , 5H ,6D").unwrap();
        assert_eq!(Card::new(Value::Two, Suit::Diamond), hand.cards()[0]);
        assert_eq!(Card::new(Value::Six, Suit::Diamond), hand.cards()[4]);
    }

    #[test]
    fn test_parse_invalid_rank() {
        assert_eq!(
            Err(ParseHandError::InvalidRankChar('Z')),
            Hand::new_from_str("ZH, 2H, 3H, 4H, 5H")
        );
    }

    #[test]
    fn test_parse_invalid_suit() {
        assert_eq!(
            Err(ParseHandError::InvalidSuitChar('X')),
            Hand::new_from_str("2X, 3H, 4H, 5H, 6H")
        );
    }

    #[test]
    fn test_parse_ten_digit_form_rejected() {
        // "10H" takes '1' as the rank and '0' as the suit.
        assert_eq!(
            Err(ParseHandError::InvalidSuitChar('0')),
            Hand::new_from_str("10H, JH, QH, KH, AH")
        );
    }

    #[test]
    fn test_parse_token_too_short() {
        assert_eq!(
            Err(ParseHandError::InvalidToken("A".to_string())),
            Hand::new_from_str("A, 2H, 3H, 4H, 5H")
        );
    }

    #[test]
    fn test_parse_token_too_long() {
        assert_eq!(
            Err(ParseHandError::InvalidToken("2HHH".to_string())),
            Hand::new_from_str("2HHH, 3H, 4H, 5H, 6H")
        );
    }

    #[test]
    fn test_parse_too_few_cards() {
        assert_eq!(
            Err(ParseHandError::InvalidCardCount(4)),
            Hand::new_from_str("2H, 3H, 4H, 5H")
        );
    }

    #[test]
    fn test_parse_too_many_cards() {
        assert_eq!(
            Err(ParseHandError::InvalidCardCount(6)),
            Hand::new_from_str("2H, 3H, 4H, 5H, 6H, 7H")
        );
    }

    #[test]
    fn test_ace_parses_low() {
        let hand = Hand::new_from_str("AH, AD, 1S, 2C, 3H").unwrap();
        assert!(hand.iter().take(3).all(|c| c.value == Value::AceLow));
    }

    #[test]
    fn test_display_round_trips() {
        let text = "TH, JD, QS, KC, AH";
        let hand = Hand::new_from_str(text).unwrap();
        assert_eq!(text, hand.to_string());
        assert_eq!(hand, Hand::new_from_str(&hand.to_string()).unwrap());
    }

    #[test]
    fn test_card_try_from() {
        assert_eq!(
            Ok(Card::new(Value::Ten, Suit::Heart)),
            Card::try_from("TH")
        );
        assert_eq!(
            Err(ParseHandError::InvalidRankChar('Z')),
            Card::try_from("ZH")
        );
    }
}
