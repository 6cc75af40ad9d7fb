//! A blackjack rules engine with optional `no_std` support.
//!
//! The crate provides the building blocks of a round: [`Card`]s, a
//! shuffleable [`Deck`], [`Hand`] scoring with soft aces, and a [`Player`]
//! whose bets are registered with any [`Dealer`].
//!
//! # Example
//!
//! ```
//! use bjrules::{Deck, Hand};
//!
//! let mut deck = Deck::with_seed(42);
//! deck.shuffle();
//!
//! let player = Hand::deal_from(&mut deck).unwrap();
//! let dealer = Hand::deal_from(&mut deck).unwrap();
//! assert_eq!(deck.len(), 48);
//! let _ = player.beats(&dealer);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod player;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{BetError, DrawError, HitError, ValueError};
pub use hand::{BLACKJACK, Hand};
pub use options::DeckOptions;
pub use player::{Dealer, Player};
