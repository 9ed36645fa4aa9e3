//! Card decks built from repeated value sets, with shuffling and dealing.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::card::{Card, CardBuilder, CardFamily};
use crate::milestone::MILESTONE_DECK;
use crate::error::RestoreError;
use crate::options::{DeckOptions, MAX_DECKS, MIN_DECKS};
use crate::playing::{JOKERS, PINOCHLE_DECK, PlayingCardValue, STANDARD_DECK};
use crate::value::CardValue;

/// An ordered deck of card values with a deal cursor.
///
/// The deck is built once from a base value set repeated one or more times,
/// followed by optional extra cards. Its length never changes afterwards;
/// dealing only moves the cursor, and [`CardDeck::shuffle`] reorders the
/// values and rewinds the cursor. Dealt values are wrapped into cards by the
/// deck's [`CardBuilder`].
///
/// Deserializing rejects a cursor past the end of the deck or a repetition
/// count outside 1 to 7.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawCardDeck<B>")]
pub struct CardDeck<B = CardFamily> {
    /// Every value in the deck, dealt or not.
    cards: Vec<CardValue>,
    /// Position of the next card to deal.
    next: usize,
    /// Whether the deck has been shuffled.
    shuffled: bool,
    /// Copies of the base set.
    repetitions: u8,
    /// Turns dealt values into cards.
    builder: B,
    /// Shuffle generator.
    rng: ChaCha8Rng,
}

/// Unchecked serialized form of a [`CardDeck`].
#[derive(Deserialize)]
struct RawCardDeck<B> {
    cards: Vec<CardValue>,
    next: usize,
    shuffled: bool,
    repetitions: u8,
    builder: B,
    rng: ChaCha8Rng,
}

impl<B> TryFrom<RawCardDeck<B>> for CardDeck<B> {
    type Error = RestoreError;

    fn try_from(raw: RawCardDeck<B>) -> Result<Self, Self::Error> {
        if !(MIN_DECKS..=MAX_DECKS).contains(&raw.repetitions) {
            return Err(RestoreError::InvalidRepetitions(raw.repetitions));
        }
        if raw.next > raw.cards.len() {
            return Err(RestoreError::CursorOutOfRange {
                position: raw.next,
                len: raw.cards.len(),
            });
        }

        Ok(Self {
            cards: raw.cards,
            next: raw.next,
            shuffled: raw.shuffled,
            repetitions: raw.repetitions,
            builder: raw.builder,
            rng: raw.rng,
        })
    }
}

impl CardDeck<CardFamily> {
    /// Creates an unshuffled standard 52-card deck, optionally followed by
    /// the two jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use deckhand::{CardDeck, DeckOptions};
    ///
    /// let deck = CardDeck::standard(DeckOptions::default().with_repetitions(2), true);
    /// assert_eq!(deck.len(), 106);
    /// ```
    #[must_use]
    pub fn standard(options: DeckOptions, jokers: bool) -> Self {
        let extras: &[PlayingCardValue] = if jokers { &JOKERS } else { &[] };
        Self::new(&STANDARD_DECK, extras, CardFamily::Playing, options)
    }

    /// Creates an unshuffled 48-card pinochle deck.
    #[must_use]
    pub fn pinochle(options: DeckOptions) -> Self {
        Self::new(&PINOCHLE_DECK, &[], CardFamily::Playing, options)
    }

    /// Creates an unshuffled 106-card Milestones deck.
    #[must_use]
    pub fn milestone(options: DeckOptions) -> Self {
        Self::new(&MILESTONE_DECK, &[], CardFamily::Milestone, options)
    }
}

impl<B: CardBuilder> CardDeck<B> {
    /// Creates a deck from `base` repeated `options.repetitions` times,
    /// followed by `extras` exactly once.
    ///
    /// A repetition count outside 1 to 7 is treated as 1.
    #[must_use]
    pub fn new<V>(base: &[V], extras: &[V], builder: B, options: DeckOptions) -> Self
    where
        V: Copy + Into<CardValue>,
    {
        let repetitions = options.effective_repetitions();
        if repetitions != options.repetitions {
            debug!(
                "deck repetition count {} out of range, using {repetitions}",
                options.repetitions
            );
        }

        let mut cards = Vec::with_capacity(base.len() * usize::from(repetitions) + extras.len());
        for _ in 0..repetitions {
            cards.extend(base.iter().map(|&value| value.into()));
        }
        cards.extend(extras.iter().map(|&value| value.into()));

        Self {
            cards,
            next: 0,
            shuffled: false,
            repetitions,
            builder,
            rng: ChaCha8Rng::seed_from_u64(options.seed),
        }
    }

    /// Shuffles the whole deck with its own generator and rewinds the cursor.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.rewind_shuffled();
    }

    /// Shuffles the whole deck with the given generator and rewinds the
    /// cursor.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.rewind_shuffled();
    }

    fn rewind_shuffled(&mut self) {
        self.next = 0;
        self.shuffled = true;
        debug!("shuffled deck of {} cards", self.cards.len());
    }

    /// Returns whether the deck has been shuffled.
    #[must_use]
    pub const fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// Returns whether any cards remain to be dealt.
    #[must_use]
    pub fn has_more_cards(&self) -> bool {
        self.next < self.cards.len()
    }

    /// Deals the card under the cursor.
    ///
    /// With `leave_in_deck` the cursor stays put, so the same card is dealt
    /// again next time. Returns `None` once every card has been dealt.
    pub fn deal_next(&mut self, leave_in_deck: bool) -> Option<Card> {
        let value = *self.cards.get(self.next)?;
        if !leave_in_deck {
            self.next += 1;
        }
        Some(self.make_card(value))
    }

    /// Deals the next card and advances the cursor.
    pub fn deal(&mut self) -> Option<Card> {
        self.deal_next(false)
    }

    /// Returns the next card without dealing it.
    #[must_use]
    pub fn peek(&self) -> Option<Card> {
        self.cards.get(self.next).map(|&value| self.make_card(value))
    }

    /// Iterates over every card in the deck from the top, ignoring the
    /// cursor.
    pub fn iter(&self) -> Cards<'_, B> {
        Cards {
            deck: self,
            position: 0,
        }
    }

    fn make_card(&self, value: CardValue) -> Card {
        self.builder.build(value).unwrap_or_else(|err| {
            warn!("could not build a card for {value}: {err}; dealing a blank card");
            Card::blank()
        })
    }
}

impl<B> CardDeck<B> {
    /// Returns the total number of cards, dealt or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards not yet dealt.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.next)
    }

    /// Returns the position of the next card to deal.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.next
    }

    /// Returns the number of copies of the base set.
    #[must_use]
    pub const fn repetitions(&self) -> u8 {
        self.repetitions
    }

    /// Returns the values in deck order.
    #[must_use]
    pub fn values(&self) -> &[CardValue] {
        &self.cards
    }

    /// Returns the card builder.
    #[must_use]
    pub const fn builder(&self) -> &B {
        &self.builder
    }
}

impl<'a, B: CardBuilder> IntoIterator for &'a CardDeck<B> {
    type Item = Card;
    type IntoIter = Cards<'a, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<B> fmt::Display for CardDeck<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CardDeck: (Decks-{}, Number of Cards-{}, CurrentCard-{})",
            self.repetitions,
            self.cards.len(),
            self.next
        )
    }
}

/// Iterator over every card of a deck, created by [`CardDeck::iter`].
#[derive(Debug, Clone)]
pub struct Cards<'a, B> {
    deck: &'a CardDeck<B>,
    position: usize,
}

impl<B: CardBuilder> Iterator for Cards<'_, B> {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        let value = *self.deck.cards.get(self.position)?;
        self.position += 1;
        Some(self.deck.make_card(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.deck.cards.len().saturating_sub(self.position);
        (left, Some(left))
    }
}

impl<B: CardBuilder> ExactSizeIterator for Cards<'_, B> {}

impl<B: CardBuilder> FusedIterator for Cards<'_, B> {}
