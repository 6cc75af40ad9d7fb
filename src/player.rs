//! Players, their bankroll, and the dealer they bet with.

use alloc::string::String;

use tracing::debug;

use crate::deck::Deck;
use crate::error::{BetError, DrawError};
use crate::hand::Hand;

/// Anything that can register a player's bet.
///
/// A dealer may refuse a bet by returning an error; the player's bankroll is
/// left untouched in that case.
pub trait Dealer {
    /// Error returned when the bet is refused.
    type Error;

    /// Registers a bet of `amount` from `player`.
    ///
    /// `player` still shows the bankroll from before the bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer refuses the bet.
    fn take_bet(&mut self, player: &Player, amount: usize) -> Result<(), Self::Error>;
}

impl<D: Dealer + ?Sized> Dealer for &mut D {
    type Error = D::Error;

    fn take_bet(&mut self, player: &Player, amount: usize) -> Result<(), Self::Error> {
        (**self).take_bet(player, amount)
    }
}

/// A player with a name, a bankroll, and possibly a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    bankroll: usize,
    hand: Option<Hand>,
}

impl Player {
    /// Creates a player with no hand.
    #[must_use]
    pub fn new(name: impl Into<String>, bankroll: usize) -> Self {
        Self {
            name: name.into(),
            bankroll,
            hand: None,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Returns the player's hand, if one has been dealt.
    #[must_use]
    pub const fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    /// Returns the player's hand mutably, if one has been dealt.
    pub fn hand_mut(&mut self) -> Option<&mut Hand> {
        self.hand.as_mut()
    }

    /// Gives the player a hand, returning the previous one.
    pub fn set_hand(&mut self, hand: Hand) -> Option<Hand> {
        self.hand.replace(hand)
    }

    /// Removes and returns the player's hand.
    pub fn take_hand(&mut self) -> Option<Hand> {
        self.hand.take()
    }

    /// Deals the player a fresh two-card hand from the deck.
    ///
    /// Any previous hand is replaced and returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck has fewer than two cards; neither the
    /// deck nor the player is modified in that case.
    pub fn deal_hand(&mut self, deck: &mut Deck) -> Result<Option<Hand>, DrawError> {
        let hand = Hand::deal_from(deck)?;
        Ok(self.set_hand(hand))
    }

    /// Places a bet with the dealer and takes it out of the bankroll.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InsufficientFunds`] if `amount` exceeds the
    /// bankroll, without contacting the dealer. Returns
    /// [`BetError::Rejected`] if the dealer refuses the bet. The bankroll is
    /// unchanged on error.
    pub fn place_bet<D>(&mut self, dealer: &mut D, amount: usize) -> Result<(), BetError<D::Error>>
    where
        D: Dealer + ?Sized,
    {
        if amount > self.bankroll {
            return Err(BetError::InsufficientFunds {
                requested: amount,
                available: self.bankroll,
            });
        }

        if let Err(err) = dealer.take_bet(self, amount) {
            debug!(player = %self.name, amount, "dealer rejected bet");
            return Err(BetError::Rejected(err));
        }

        self.bankroll -= amount;
        debug!(player = %self.name, amount, bankroll = self.bankroll, "bet placed");
        Ok(())
    }
}
