//! Error types for card operations.

use thiserror::Error;

use crate::card::CardFamily;
use crate::value::CardValue;

/// Errors that can occur when building or mutating cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The value belongs to a different card family than the card.
    #[error("{found} is not a valid {expected} card value")]
    InvalidFamilyValue {
        /// Family of the card being built or mutated.
        expected: CardFamily,
        /// The rejected value.
        found: CardValue,
    },
    /// No value of the family carries this code.
    #[error("no {family} card value has code {code}")]
    UnknownCode {
        /// Family that was searched.
        family: CardFamily,
        /// The unmapped code.
        code: i32,
    },
    /// The comparison mode code is out of range.
    #[error("unknown comparison mode {0}")]
    UnknownCompMode(i32),
}

/// Errors that can occur when restoring a saved hand or deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RestoreError {
    /// The hand has no slots.
    #[error("a hand needs at least one slot")]
    NoSlots,
    /// The stored card count disagrees with the occupied slots.
    #[error("hand count {count} does not match {occupied} occupied slots")]
    CountMismatch {
        /// Stored count.
        count: usize,
        /// Occupied slots found.
        occupied: usize,
    },
    /// The deal cursor is past the end of the deck.
    #[error("deal cursor {position} is past the end of a {len}-card deck")]
    CursorOutOfRange {
        /// Stored cursor.
        position: usize,
        /// Number of cards in the deck.
        len: usize,
    },
    /// The repetition count is outside the supported range.
    #[error("deck repetition count {0} is out of range")]
    InvalidRepetitions(u8),
}
