//! Deck configuration options.

use alloc::vec::Vec;

use crate::card::Card;

/// Configuration options for a [`Deck`](crate::Deck).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjrules::{Deck, DeckOptions};
///
/// let options = DeckOptions::default().with_seed(7);
/// let deck = Deck::with_options(options);
/// assert_eq!(deck.len(), 52);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeckOptions {
    /// Seed for the shuffling RNG.
    ///
    /// `None` seeds from the thread RNG with the `std` feature, and from a
    /// fixed seed of `0` without it.
    pub seed: Option<u64>,
    /// Initial cards, bottom first. `None` for the full ordered deck.
    pub cards: Option<Vec<Card>>,
}

impl DeckOptions {
    /// Sets the shuffling seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_seed(42);
    /// assert_eq!(options.seed, Some(42));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the initial cards, bottom first.
    ///
    /// No deduplication is performed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::{Card, DeckOptions, Rank, Suit};
    ///
    /// let options = DeckOptions::default().with_cards(vec![
    ///     Card::new(Suit::Hearts, Rank::Five),
    ///     Card::new(Suit::Clubs, Rank::Eight),
    /// ]);
    /// assert_eq!(options.cards.map(|cards| cards.len()), Some(2));
    /// ```
    #[must_use]
    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = Some(cards);
        self
    }
}
