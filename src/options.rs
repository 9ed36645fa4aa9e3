//! Deck and hand configuration options.

use serde::{Deserialize, Serialize};

use crate::card::CompMode;

/// One copy of the base card set.
pub const ONE_DECK: u8 = 1;
/// Two copies of the base card set.
pub const TWO_DECK: u8 = 2;
/// Three copies of the base card set.
pub const THREE_DECK: u8 = 3;
/// Four copies of the base card set.
pub const FOUR_DECK: u8 = 4;
/// Five copies of the base card set.
pub const FIVE_DECK: u8 = 5;
/// Six copies of the base card set.
pub const SIX_DECK: u8 = 6;
/// Seven copies of the base card set.
pub const SEVEN_DECK: u8 = 7;

/// Fewest copies of the base set a deck may hold.
pub const MIN_DECKS: u8 = ONE_DECK;
/// Most copies of the base set a deck may hold.
pub const MAX_DECKS: u8 = SEVEN_DECK;

/// Default number of slots in a hand.
pub const DEFAULT_HAND_SIZE: usize = 5;
/// Fewest slots a hand may have.
pub const MIN_HAND_SIZE: usize = 1;

/// Configuration options for a [`CardDeck`](crate::CardDeck).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckhand::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_repetitions(2)
///     .with_seed(7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckOptions {
    /// Number of copies of the base card set.
    ///
    /// Values outside `MIN_DECKS..=MAX_DECKS` are treated as one deck.
    pub repetitions: u8,
    /// Seed for the deck's shuffle generator.
    pub seed: u64,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            repetitions: ONE_DECK,
            seed: 0,
        }
    }
}

impl DeckOptions {
    /// Sets the number of copies of the base card set.
    ///
    /// # Example
    ///
    /// ```
    /// use deckhand::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_repetitions(6);
    /// assert_eq!(options.repetitions, 6);
    /// ```
    #[must_use]
    pub const fn with_repetitions(mut self, repetitions: u8) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Sets the shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use deckhand::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_seed(42);
    /// assert_eq!(options.seed, 42);
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the repetition count the deck will actually use.
    #[must_use]
    pub const fn effective_repetitions(&self) -> u8 {
        if self.repetitions < MIN_DECKS || self.repetitions > MAX_DECKS {
            ONE_DECK
        } else {
            self.repetitions
        }
    }
}

/// Configuration options for a [`CardHand`](crate::CardHand).
///
/// ```
/// use deckhand::{CompMode, HandOptions};
///
/// let options = HandOptions::default()
///     .with_max_cards(7)
///     .with_sorted(true)
///     .with_comp_mode(CompMode::Default);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandOptions {
    /// Number of slots. Values below [`MIN_HAND_SIZE`] are raised to it.
    pub max_cards: usize,
    /// Whether the hand keeps its cards in sorted order.
    pub sorted: bool,
    /// Comparison mode used for sorting.
    pub comp_mode: CompMode,
}

impl Default for HandOptions {
    fn default() -> Self {
        Self {
            max_cards: DEFAULT_HAND_SIZE,
            sorted: true,
            comp_mode: CompMode::IgnoreSuit,
        }
    }
}

impl HandOptions {
    /// Sets the number of slots.
    ///
    /// # Example
    ///
    /// ```
    /// use deckhand::HandOptions;
    ///
    /// let options = HandOptions::default().with_max_cards(13);
    /// assert_eq!(options.max_cards, 13);
    /// ```
    #[must_use]
    pub const fn with_max_cards(mut self, max_cards: usize) -> Self {
        self.max_cards = max_cards;
        self
    }

    /// Sets whether the hand is kept sorted.
    ///
    /// # Example
    ///
    /// ```
    /// use deckhand::HandOptions;
    ///
    /// let options = HandOptions::default().with_sorted(false);
    /// assert!(!options.sorted);
    /// ```
    #[must_use]
    pub const fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Sets the comparison mode used for sorting.
    ///
    /// # Example
    ///
    /// ```
    /// use deckhand::{CompMode, HandOptions};
    ///
    /// let options = HandOptions::default().with_comp_mode(CompMode::IgnoreSuitAndFace);
    /// assert_eq!(options.comp_mode, CompMode::IgnoreSuitAndFace);
    /// ```
    #[must_use]
    pub const fn with_comp_mode(mut self, comp_mode: CompMode) -> Self {
        self.comp_mode = comp_mode;
        self
    }
}
