//! Error types for card, deck, hand and betting operations.

use thiserror::Error;

/// Errors that can occur when asking a card for its point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The card is an ace.
    #[error("ace has no fixed value")]
    Ace,
}

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Not enough cards left in the deck.
    #[error("not enough cards in the deck: requested {requested}, {remaining} remaining")]
    InsufficientCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur when hitting a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HitError {
    /// The hand already has 21 or more points.
    #[error("cannot hit a hand with {points} points")]
    OverLimit {
        /// Points in the hand.
        points: u16,
    },
    /// The deck is empty.
    #[error(transparent)]
    Draw(#[from] DrawError),
}

/// Errors that can occur when placing a bet.
///
/// `E` is the error type of the [`Dealer`](crate::Dealer) taking the bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError<E> {
    /// The bet is larger than the bankroll.
    #[error("insufficient funds: bet {requested}, bankroll {available}")]
    InsufficientFunds {
        /// Bet amount.
        requested: usize,
        /// Current bankroll.
        available: usize,
    },
    /// The dealer refused the bet.
    #[error("dealer rejected the bet: {0}")]
    Rejected(E),
}
