use std::fmt;

/// Card rank, or value.
///
/// The Ace is represented by two distinct members rather than a flag:
/// `AceLow` sits below `Two` and `AceHigh` above `King`. The parser
/// always produces `AceLow`; the classifier promotes to `AceHigh` when
/// testing the high boundary runs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Value {
    /// Ace counted below Two.
    AceLow = 1,
    /// 2
    Two = 2,
    /// 3
    Three = 3,
    /// 4
    Four = 4,
    /// 5
    Five = 5,
    /// 6
    Six = 6,
    /// 7
    Seven = 7,
    /// 8
    Eight = 8,
    /// 9
    Nine = 9,
    /// T
    Ten = 10,
    /// J
    Jack = 11,
    /// Q
    Queen = 12,
    /// K
    King = 13,
    /// Ace counted above King.
    AceHigh = 14,
}

impl Value {
    /// The thirteen values a fresh deck contains, ascending.
    ///
    /// Aces enter play as `AceLow`, matching what the parser produces
    /// for an `A` token.
    pub const fn values() -> [Self; 13] {
        [
            Self::AceLow,
            Self::Two,
            Self::Three,
            Self::Four,
            Self::Five,
            Self::Six,
            Self::Seven,
            Self::Eight,
            Self::Nine,
            Self::Ten,
            Self::Jack,
            Self::Queen,
            Self::King,
        ]
    }

    /// Parse a value from a rank character.
    ///
    /// Accepts `2`-`9`, `T`, `J`, `Q`, `K`, and `A` or `1` for the Ace,
    /// case-insensitive. Both Ace spellings yield `AceLow`.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' | '1' => Some(Self::AceLow),
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            'T' => Some(Self::Ten),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            _ => None,
        }
    }

    /// The character for this value. Both Ace members print as `A`.
    pub fn to_char(self) -> char {
        match self {
            Self::AceLow | Self::AceHigh => 'A',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    /// Is this one of the two Ace members?
    pub fn is_ace(self) -> bool {
        matches!(self, Self::AceLow | Self::AceHigh)
    }
}

/// Card suit. No suit ranks above another.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Suit {
    /// Diamonds
    Diamond = 0,
    /// Spades
    Spade = 1,
    /// Clubs
    Club = 2,
    /// Hearts
    Heart = 3,
}

impl Suit {
    /// All of the suits.
    pub const fn suits() -> [Self; 4] {
        [Self::Diamond, Self::Spade, Self::Club, Self::Heart]
    }

    /// Parse a suit from its character, case-insensitive.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'D' => Some(Self::Diamond),
            'S' => Some(Self::Spade),
            'C' => Some(Self::Club),
            'H' => Some(Self::Heart),
            _ => None,
        }
    }

    /// The character for this suit.
    pub fn to_char(self) -> char {
        match self {
            Self::Diamond => 'D',
            Self::Spade => 'S',
            Self::Club => 'C',
            Self::Heart => 'H',
        }
    }
}

/// A single playing card: a value and a suit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Card {
    /// The value of the card.
    pub value: Value,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card.
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}
