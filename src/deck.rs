//! A single deck of cards.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DrawError;
use crate::options::DeckOptions;

/// An ordered pile of cards.
///
/// The top of the deck is the end of [`cards`](Self::cards): [`take`](Self::take)
/// and [`draw`](Self::draw) remove from there, while
/// [`return_cards`](Self::return_cards) puts cards back at the bottom.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in the deck, bottom first.
    cards: Vec<Card>,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Returns the full 52-card deck in suit-major order.
    #[must_use]
    pub fn all_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards
    }

    /// Creates an unshuffled full deck.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(DeckOptions::default())
    }

    /// Creates a deck holding exactly `cards`, bottom first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self::with_options(DeckOptions::default().with_cards(cards))
    }

    /// Creates an unshuffled full deck whose shuffles are reproducible.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_options(DeckOptions::default().with_seed(seed))
    }

    /// Creates a deck from the given options.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::{Deck, DeckOptions};
    ///
    /// let mut a = Deck::with_options(DeckOptions::default().with_seed(3));
    /// let mut b = Deck::with_options(DeckOptions::default().with_seed(3));
    /// a.shuffle();
    /// b.shuffle();
    /// assert_eq!(a.cards(), b.cards());
    /// ```
    #[must_use]
    pub fn with_options(options: DeckOptions) -> Self {
        let rng = options
            .seed
            .map_or_else(unseeded_rng, ChaCha8Rng::seed_from_u64);

        Self {
            cards: options.cards.unwrap_or_else(Self::all_cards),
            rng,
        }
    }

    /// Returns the cards in the deck, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Removes the top `n` cards and returns them in the order they were
    /// drawn, top card first.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InsufficientCards`] if fewer than `n` cards are
    /// left. The deck is not modified in that case.
    pub fn take(&mut self, n: usize) -> Result<Vec<Card>, DrawError> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(DrawError::InsufficientCards {
                requested: n,
                remaining,
            });
        }

        let mut taken = self.cards.split_off(remaining - n);
        taken.reverse();

        debug!(requested = n, remaining = self.cards.len(), "took cards from deck");
        Ok(taken)
    }

    /// Puts cards back at the bottom of the deck, keeping their order.
    ///
    /// After the call, the first returned card is the bottom card.
    pub fn return_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        let mut returned: Vec<Card> = cards.into_iter().collect();
        let count = returned.len();
        returned.append(&mut self.cards);
        self.cards = returned;

        trace!(count, total = self.cards.len(), "returned cards to deck bottom");
    }

    /// Shuffles the deck in place.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        trace!(cards = self.cards.len(), "shuffled deck");
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
fn unseeded_rng() -> ChaCha8Rng {
    ChaCha8Rng::from_rng(&mut rand::rng())
}

#[cfg(not(feature = "std"))]
fn unseeded_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(0)
}
