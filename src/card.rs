//! Card types, comparison modes, and card construction.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::CardError;
use crate::milestone::{MilestoneCardValue, MilestoneKind};
use crate::playing::{Color, PlayingCardValue, Suit};
use crate::value::CardValue;

/// Comparison mode, selecting which projection of a card drives ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CompMode {
    /// Compare raw value codes.
    #[default]
    Default,
    /// Compare point values, ignoring suit.
    IgnoreSuit,
    /// Compare point values, ignoring suit and counting face cards as 10.
    IgnoreSuitAndFace,
}

impl CompMode {
    /// Returns the mode code (default = 0, ignore suit = 1, ignore suit and
    /// face = 2).
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for CompMode {
    type Error = CardError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Default),
            1 => Ok(Self::IgnoreSuit),
            2 => Ok(Self::IgnoreSuitAndFace),
            _ => Err(CardError::UnknownCompMode(code)),
        }
    }
}

/// A family of cards: a closed set of values plus the rules that understand
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CardFamily {
    /// The blank, no-card family.
    #[default]
    Blank,
    /// Standard playing cards, including pinochle subsets.
    Playing,
    /// Milestones road-trip cards.
    Milestone,
}

impl CardFamily {
    /// Returns an empty card of this family, holding [`CardValue::NoCard`].
    #[must_use]
    pub const fn empty_card(self) -> Card {
        Card {
            family: self,
            value: CardValue::NoCard,
            comp_mode: CompMode::Default,
        }
    }

    /// Returns whether a card of this family can hold the value.
    ///
    /// The blank family takes any value but never stores it.
    #[must_use]
    pub const fn accepts(self, value: CardValue) -> bool {
        matches!(
            (self, value),
            (Self::Blank, _)
                | (Self::Playing, CardValue::Playing(_))
                | (Self::Milestone, CardValue::Milestone(_))
        )
    }
}

impl fmt::Display for CardFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Blank => "blank",
            Self::Playing => "playing",
            Self::Milestone => "milestone",
        })
    }
}

/// Constructs a card of some family from a dealt value.
///
/// A deck is parameterized by its builder instead of hardcoding a card type.
pub trait CardBuilder {
    /// Builds a card holding `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the builder cannot represent the value.
    fn build(&self, value: CardValue) -> Result<Card, CardError>;
}

impl CardBuilder for CardFamily {
    fn build(&self, value: CardValue) -> Result<Card, CardError> {
        let mut card = self.empty_card();
        card.set_value(value)?;
        Ok(card)
    }
}

/// Occupant of a card's suit slot.
///
/// Playing cards report a suit. Milestones cards report their card type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSuit {
    /// Suit of a playing card.
    Playing(Suit),
    /// Type of a Milestones card.
    Milestone(MilestoneKind),
}

impl CardSuit {
    /// Returns the slot code (0 to 3 within each family).
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Playing(suit) => suit.code(),
            Self::Milestone(kind) => kind.code(),
        }
    }
}

/// A card: a mutable cell holding one [`CardValue`] of its family.
///
/// Equality and ordering follow [`Card::compare`], so two cards are equal
/// when they compare equal under the left card's comparison mode.
///
/// Deserializing rejects a value the family cannot hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    family: CardFamily,
    value: CardValue,
    comp_mode: CompMode,
}

/// Unchecked serialized form of a [`Card`].
#[derive(Deserialize)]
struct RawCard {
    family: CardFamily,
    value: CardValue,
    comp_mode: CompMode,
}

impl TryFrom<RawCard> for Card {
    type Error = CardError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        let mut card = raw.family.empty_card();
        // Blank cards never store a value.
        if raw.family == CardFamily::Blank && !raw.value.is_no_card() {
            return Err(CardError::InvalidFamilyValue {
                expected: raw.family,
                found: raw.value,
            });
        }
        card.set_value(raw.value)?;
        card.set_comp_mode(raw.comp_mode);
        Ok(card)
    }
}

impl Card {
    /// Creates a blank card.
    #[must_use]
    pub const fn blank() -> Self {
        CardFamily::Blank.empty_card()
    }

    /// Creates a playing card.
    #[must_use]
    pub const fn playing(value: PlayingCardValue) -> Self {
        Self {
            family: CardFamily::Playing,
            value: CardValue::Playing(value),
            comp_mode: CompMode::Default,
        }
    }

    /// Creates a Milestones card.
    #[must_use]
    pub const fn milestone(value: MilestoneCardValue) -> Self {
        Self {
            family: CardFamily::Milestone,
            value: CardValue::Milestone(value),
            comp_mode: CompMode::Default,
        }
    }

    /// Returns the family of the card.
    #[must_use]
    pub const fn family(&self) -> CardFamily {
        self.family
    }

    /// Returns the current value.
    #[must_use]
    pub const fn value(&self) -> CardValue {
        self.value
    }

    /// Sets the value of the card.
    ///
    /// Blank cards ignore the call and stay blank.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidFamilyValue`] if the value belongs to
    /// another family. The card keeps its previous value.
    pub fn set_value(&mut self, value: impl Into<CardValue>) -> Result<(), CardError> {
        let value = value.into();
        if !self.family.accepts(value) {
            return Err(CardError::InvalidFamilyValue {
                expected: self.family,
                found: value,
            });
        }
        if self.family != CardFamily::Blank {
            self.value = value;
        }
        Ok(())
    }

    /// Returns whether the card holds [`CardValue::NoCard`].
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.value.is_no_card()
    }

    /// Returns the display name of the current value.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.value.name()
    }

    /// Returns the color.
    #[must_use]
    pub const fn color(&self) -> Option<Color> {
        self.value.color()
    }

    /// Returns the suit slot.
    #[must_use]
    pub const fn suit(&self) -> Option<CardSuit> {
        self.value.suit()
    }

    /// Returns the point value: ace through king as 1 to 13, jokers as 0,
    /// Milestones cards as their code.
    #[must_use]
    pub const fn point_value(&self) -> Option<u8> {
        self.value.point_value()
    }

    /// Returns the point value with jack, queen, and king counted as 10.
    #[must_use]
    pub const fn point_value_face10(&self) -> Option<u8> {
        self.value.point_value_face10()
    }

    /// Returns the comparison mode.
    #[must_use]
    pub const fn comp_mode(&self) -> CompMode {
        self.comp_mode
    }

    /// Sets the comparison mode.
    ///
    /// Only playing cards change mode. Other families always compare in
    /// their fixed mode and ignore the call.
    pub const fn set_comp_mode(&mut self, mode: CompMode) {
        if matches!(self.family, CardFamily::Playing) {
            self.comp_mode = mode;
        }
    }

    /// Compares this card with another under this card's comparison mode.
    ///
    /// Under [`CompMode::Default`], backs, symbols, and jokers order after
    /// every regular playing card. Under the point-value modes jokers count
    /// as 0 and order before them.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match self.family {
            CardFamily::Playing => match self.comp_mode {
                CompMode::Default => self.value.code().cmp(&other.value.code()),
                CompMode::IgnoreSuit => self.point_value().cmp(&other.point_value()),
                CompMode::IgnoreSuitAndFace => self
                    .point_value_face10()
                    .cmp(&other.point_value_face10()),
            },
            CardFamily::Milestone => self.point_value().cmp(&other.point_value()),
            CardFamily::Blank => self.value.code().cmp(&other.value.code()),
        }
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::blank()
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

// Hashes the display name, so cards equal under a suit-ignoring mode may
// hash differently.
impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
