//! Fixed-capacity card hands with optional sorting.

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::mem;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::card::{Card, CompMode};
use crate::error::RestoreError;
use crate::options::{HandOptions, MIN_HAND_SIZE};

/// The card reported for empty slots.
///
/// It is immutable, so no hand can corrupt it for another.
pub static EMPTY_CARD: Card = Card::blank();

/// One position in a hand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub enum Slot {
    /// No card.
    #[default]
    Empty,
    /// Holds a card.
    Occupied(Card),
}

impl Slot {
    /// Returns the card in the slot, if any.
    #[must_use]
    pub const fn card(&self) -> Option<&Card> {
        match self {
            Self::Occupied(card) => Some(card),
            Self::Empty => None,
        }
    }

    /// Returns whether the slot is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns whether the slot holds a card.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied(_))
    }

    fn take(&mut self) -> Option<Card> {
        match mem::take(self) {
            Self::Occupied(card) => Some(card),
            Self::Empty => None,
        }
    }
}

// Occupied before empty, blank-valued cards after real ones, then ascending.
fn out_of_order(left: &Slot, right: &Slot) -> bool {
    match (left, right) {
        (Slot::Empty, Slot::Occupied(_)) => true,
        (Slot::Occupied(left), Slot::Occupied(right)) => match (left.is_blank(), right.is_blank()) {
            (true, false) => true,
            (false, false) => left.compare(right) == Ordering::Greater,
            _ => false,
        },
        _ => false,
    }
}

/// A hand of cards with a fixed number of slots.
///
/// A sorted hand keeps its cards in ascending order under its comparison
/// mode after every [`add`](CardHand::add) and
/// [`set_comp_mode`](CardHand::set_comp_mode), with empty slots at the end.
/// [`remove`](CardHand::remove) never moves other cards, so it can leave a
/// hole until the next sort or [`compress`](CardHand::compress).
///
/// Deserializing rejects a hand without slots or with a count that does not
/// match its occupied slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawCardHand")]
pub struct CardHand {
    /// Card slots; the length is the capacity.
    slots: Vec<Slot>,
    /// Number of occupied slots.
    count: usize,
    /// Whether the hand is kept sorted.
    sorted: bool,
    /// Comparison mode used for sorting.
    comp_mode: CompMode,
}

/// Unchecked serialized form of a [`CardHand`].
#[derive(Deserialize)]
struct RawCardHand {
    slots: Vec<Slot>,
    count: usize,
    sorted: bool,
    comp_mode: CompMode,
}

impl TryFrom<RawCardHand> for CardHand {
    type Error = RestoreError;

    fn try_from(raw: RawCardHand) -> Result<Self, Self::Error> {
        if raw.slots.len() < MIN_HAND_SIZE {
            return Err(RestoreError::NoSlots);
        }
        let occupied = raw.slots.iter().filter(|slot| slot.is_occupied()).count();
        if raw.count != occupied {
            return Err(RestoreError::CountMismatch {
                count: raw.count,
                occupied,
            });
        }

        Ok(Self {
            slots: raw.slots,
            count: raw.count,
            sorted: raw.sorted,
            comp_mode: raw.comp_mode,
        })
    }
}

impl CardHand {
    /// Creates an empty hand with `max_cards` slots (at least one).
    ///
    /// Sorted hands start in [`CompMode::IgnoreSuit`].
    #[must_use]
    pub fn new(max_cards: usize, sorted: bool) -> Self {
        Self::with_options(
            HandOptions::default()
                .with_max_cards(max_cards)
                .with_sorted(sorted),
        )
    }

    /// Creates an empty hand from options.
    #[must_use]
    pub fn with_options(options: HandOptions) -> Self {
        let max_cards = options.max_cards.max(MIN_HAND_SIZE);
        let mut slots = Vec::with_capacity(max_cards);
        slots.resize_with(max_cards, Slot::default);

        Self {
            slots,
            count: 0,
            sorted: options.sorted,
            comp_mode: options.comp_mode,
        }
    }

    /// Adds a card to the first empty slot, then re-sorts a sorted hand.
    ///
    /// In a sorted hand the card takes on the hand's comparison mode.
    ///
    /// # Errors
    ///
    /// Returns the card back if the hand is full.
    pub fn add(&mut self, card: Card) -> Result<(), Card> {
        match self.slots.iter().position(Slot::is_empty) {
            Some(index) => {
                self.place(index, card);
                Ok(())
            }
            None => Err(card),
        }
    }

    /// Removes the card at `index`, leaving the slot empty.
    ///
    /// Other slots are not moved, even in a sorted hand. An empty slot yields
    /// a blank card. Returns `None` if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        let taken = self.slots.get_mut(index)?.take();
        Some(match taken {
            Some(card) => {
                self.count -= 1;
                card
            }
            None => Card::blank(),
        })
    }

    /// Empties every slot.
    pub fn remove_all(&mut self) {
        self.slots.fill_with(Slot::default);
        self.count = 0;
    }

    /// Moves every card to the front, keeping their order, so that empty
    /// slots only trail. Does not sort.
    pub fn compress(&mut self) {
        self.slots.sort_by_key(Slot::is_empty);
    }

    /// Returns the card at `index`, or [`EMPTY_CARD`] for an empty slot.
    ///
    /// Returns `None` if `index` is out of range.
    #[must_use]
    pub fn card_at(&self, index: usize) -> Option<&Card> {
        self.slots
            .get(index)
            .map(|slot| slot.card().unwrap_or(&EMPTY_CARD))
    }

    /// Replaces the card at `index`, returning the previous occupant (a blank
    /// card if the slot was empty).
    ///
    /// In a sorted hand the new card is sorted in and may end up in another
    /// slot. Returns `None` if `index` is out of range.
    pub fn replace(&mut self, card: Card, index: usize) -> Option<Card> {
        let previous = self.remove(index)?;
        self.place(index, card);
        Some(previous)
    }

    /// Returns whether any held card equals `card` under the held card's
    /// comparison mode.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards().any(|held| held == card)
    }

    /// Removes and returns the card in the first occupied slot.
    pub fn first_available(&mut self) -> Option<Card> {
        let index = self.slots.iter().position(Slot::is_occupied)?;
        self.remove(index)
    }

    /// Returns the number of cards held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns whether the hand holds no cards.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns whether every slot holds a card.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn max_cards(&self) -> usize {
        self.slots.len()
    }

    /// Returns whether the hand is kept sorted.
    #[must_use]
    pub const fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Returns the comparison mode.
    #[must_use]
    pub const fn comp_mode(&self) -> CompMode {
        self.comp_mode
    }

    /// Sets the comparison mode.
    ///
    /// A sorted hand passes the mode on to every card it holds and re-sorts.
    pub fn set_comp_mode(&mut self, mode: CompMode) {
        self.comp_mode = mode;
        if self.sorted {
            for slot in &mut self.slots {
                if let Slot::Occupied(card) = slot {
                    card.set_comp_mode(mode);
                }
            }
            self.sort();
        }
    }

    /// Returns the slots in order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Iterates over the held cards in slot order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.slots.iter().filter_map(Slot::card)
    }

    /// Puts `card` into the empty slot at `index`.
    fn place(&mut self, index: usize, mut card: Card) {
        if self.sorted {
            card.set_comp_mode(self.comp_mode);
        }
        self.slots[index] = Slot::Occupied(card);
        self.count += 1;
        if self.sorted {
            self.sort();
        }
    }

    /// Stable bubble sort over all slots.
    fn sort(&mut self) {
        let len = self.slots.len();
        for _ in 0..len {
            let mut swapped = false;
            for i in 1..len {
                if out_of_order(&self.slots[i - 1], &self.slots[i]) {
                    self.slots.swap(i - 1, i);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
        trace!("sorted hand of {} cards by {:?}", self.count, self.comp_mode);
    }
}

impl Default for CardHand {
    fn default() -> Self {
        Self::with_options(HandOptions::default())
    }
}

impl fmt::Display for CardHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CardHand: [")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match slot {
                Slot::Occupied(card) => write!(f, "({i}) {card}")?,
                Slot::Empty => write!(f, "({i}) Empty")?,
            }
        }
        f.write_str("]")
    }
}
