/// Module with the `Card`, `Value` and `Suit` types.
mod card;
/// Export `Card`, `Value` and `Suit`.
pub use self::card::{Card, Suit, Value};

/// Module with the parse error type.
mod errors;
/// Export `ParseHandError`.
pub use self::errors::ParseHandError;

/// Module with the five card `Hand` type and the textual parser.
mod hand;
/// Export `Hand`.
pub use self::hand::Hand;

/// Module with the hand categories and the classifier.
mod rank;
/// Export `Rank`.
pub use self::rank::Rank;

/// Module with a deck for dealing random hands.
mod deck;
/// Export `Deck`.
pub use self::deck::Deck;
