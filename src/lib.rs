//! A library for parsing five card poker hands from text and
//! classifying them into their best matching category.
//!
//! Hands are written as comma separated rank/suit tokens, the way the
//! interactive front end reads them:
//!
//! ```
//! use five_card::core::{Hand, Rank};
//!
//! let hand = Hand::new_from_str("TH, JH, QH, KH, AH").unwrap();
//! assert_eq!(Rank::RoyalFlush, hand.rank());
//! assert_eq!("Royal Flush", hand.rank().to_string());
//! ```
//!
//! The Ace plays both boundary roles: `A, 2, 3, 4, 5` and
//! `T, J, Q, K, A` are both straights.
//!
//! ```
//! use five_card::core::{Hand, Rank};
//!
//! let wheel = Hand::new_from_str("AH, 2D, 3S, 4C, 5H").unwrap();
//! assert_eq!(Rank::Straight, wheel.rank());
//!
//! let broadway = Hand::new_from_str("TH, JD, QS, KC, AH").unwrap();
//! assert_eq!(Rank::Straight, broadway.rank());
//! ```
//!
//! Random hands can be dealt from a [`Deck`](core::Deck):
//!
//! ```
//! use five_card::core::Deck;
//!
//! let mut deck = Deck::default();
//! deck.shuffle(&mut rand::thread_rng());
//! let hand = deck.deal_hand().unwrap();
//! println!("{}: {}", hand, hand.rank());
//! ```
pub mod core;
