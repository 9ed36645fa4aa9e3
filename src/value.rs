//! The family-spanning card value type.

extern crate alloc;

use alloc::string::{String, ToString};
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::card::{CardFamily, CardSuit};
use crate::milestone::MilestoneCardValue;
use crate::playing::{Color, PlayingCardValue};

/// Code of the "no card" value, shared by every family.
pub const NO_CARD_CODE: i32 = -1;

/// Display name of the "no card" value.
pub const NO_CARD_NAME: &str = "Not a valid card/No card";

/// The face of a card.
///
/// Values are immutable constants. A [`Card`](crate::Card) holds one of them
/// at a time and may be reassigned, but the value itself never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CardValue {
    /// No card. Marks blank cards and empty positions.
    #[default]
    NoCard,
    /// A standard playing card.
    Playing(PlayingCardValue),
    /// A Milestones card.
    Milestone(MilestoneCardValue),
}

impl CardValue {
    /// Returns the stable code of the value.
    ///
    /// Codes are unique within a family and key the external image resources.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::NoCard => NO_CARD_CODE,
            Self::Playing(value) => value.code(),
            Self::Milestone(value) => value.code(),
        }
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NoCard => NO_CARD_NAME,
            Self::Playing(value) => value.name(),
            Self::Milestone(value) => value.name(),
        }
    }

    /// Returns the family the value belongs to.
    ///
    /// [`CardValue::NoCard`] belongs to the blank family.
    #[must_use]
    pub const fn family(self) -> CardFamily {
        match self {
            Self::NoCard => CardFamily::Blank,
            Self::Playing(_) => CardFamily::Playing,
            Self::Milestone(_) => CardFamily::Milestone,
        }
    }

    /// Returns whether this is [`CardValue::NoCard`].
    #[must_use]
    pub const fn is_no_card(self) -> bool {
        matches!(self, Self::NoCard)
    }

    /// Returns the key of the image resource for this value.
    ///
    /// # Example
    ///
    /// ```
    /// use deckhand::{CardValue, PlayingCardValue};
    ///
    /// let value = CardValue::from(PlayingCardValue::SevenOfClubs);
    /// assert_eq!(value.resource_key(), "7");
    /// ```
    #[must_use]
    pub fn resource_key(self) -> String {
        self.code().to_string()
    }

    /// Returns the color. Only playing cards have one.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::Playing(value) => value.color(),
            Self::NoCard | Self::Milestone(_) => None,
        }
    }

    /// Returns the suit slot: a suit for playing cards, a card type for
    /// Milestones cards.
    #[must_use]
    pub const fn suit(self) -> Option<CardSuit> {
        match self {
            Self::Playing(value) => match value.suit() {
                Some(suit) => Some(CardSuit::Playing(suit)),
                None => None,
            },
            Self::Milestone(value) => match value.kind() {
                Some(kind) => Some(CardSuit::Milestone(kind)),
                None => None,
            },
            Self::NoCard => None,
        }
    }

    /// Returns the point value.
    #[must_use]
    pub const fn point_value(self) -> Option<u8> {
        match self {
            Self::Playing(value) => value.point_value(),
            Self::Milestone(value) => Some(value.point_value()),
            Self::NoCard => None,
        }
    }

    /// Returns the point value with face cards counted as 10.
    ///
    /// Families without face cards return their plain point value.
    #[must_use]
    pub const fn point_value_face10(self) -> Option<u8> {
        match self {
            Self::Playing(value) => value.point_value_face10(),
            Self::Milestone(value) => Some(value.point_value()),
            Self::NoCard => None,
        }
    }
}

impl From<PlayingCardValue> for CardValue {
    fn from(value: PlayingCardValue) -> Self {
        Self::Playing(value)
    }
}

impl From<MilestoneCardValue> for CardValue {
    fn from(value: MilestoneCardValue) -> Self {
        Self::Milestone(value)
    }
}

impl fmt::Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
