//! Hand representation and scoring.

use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DrawError, HitError};

/// Highest total that does not bust.
pub const BLACKJACK: u16 = 21;

/// Returns the total and the number of aces still counted as 11.
fn evaluate_cards(cards: &[Card]) -> (u16, u16) {
    let mut points: u16 = 0;
    let mut soft_aces: u16 = 0;

    for card in cards {
        match card.rank().fixed_value() {
            Some(value) => points = points.saturating_add(u16::from(value)),
            None => {
                soft_aces += 1;
                points = points.saturating_add(11);
            }
        }
    }

    // Demote one ace at a time from 11 to 1.
    while points > BLACKJACK && soft_aces > 0 {
        points -= 10;
        soft_aces -= 1;
    }

    (points, soft_aces)
}

/// A hand of cards, in the order they were dealt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand from the given cards.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Deals a two-card hand from the top of the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck has fewer than two cards; the deck is not
    /// modified in that case.
    pub fn deal_from(deck: &mut Deck) -> Result<Self, DrawError> {
        deck.take(2).map(Self::new)
    }

    /// Draws one card from the deck into the hand and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`HitError::OverLimit`] if the hand already has 21 or more
    /// points, or [`HitError::Draw`] if the deck is empty. Neither the hand
    /// nor the deck is modified on error.
    pub fn hit(&mut self, deck: &mut Deck) -> Result<Card, HitError> {
        let points = self.points();
        if points >= BLACKJACK {
            return Err(HitError::OverLimit { points });
        }

        let card = deck.draw().ok_or(DrawError::InsufficientCards {
            requested: 1,
            remaining: 0,
        })?;
        self.cards.push(card);

        debug!(%card, points = self.points(), "hit");
        Ok(card)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Consumes the hand and returns its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Calculates the blackjack total of the hand.
    ///
    /// Each ace counts as 11 unless that would bust the hand, in which case
    /// aces are recounted as 1 one at a time. The result can still be over
    /// 21 once every ace counts as 1.
    #[must_use]
    pub fn points(&self) -> u16 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1 > 0
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.points() == BLACKJACK
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.points() > BLACKJACK
    }

    /// Returns whether this hand wins against `other`.
    ///
    /// A busted hand never wins, not even against another busted hand. A
    /// standing hand beats a busted one. Otherwise the strictly higher total
    /// wins, so equal totals lose in both directions.
    #[must_use]
    pub fn beats(&self, other: &Self) -> bool {
        if self.is_busted() {
            false
        } else if other.is_busted() {
            true
        } else {
            self.points() > other.points()
        }
    }
}
