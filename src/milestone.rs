//! Card values for the Milestones road-trip game.

extern crate alloc;

use alloc::borrow::Cow;
use alloc::format;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::card::CardFamily;
use crate::error::CardError;
use crate::value::{NO_CARD_CODE, NO_CARD_NAME};

/// Card type of a Milestones card.
///
/// This occupies the suit slot of a [`Card`](crate::Card).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MilestoneKind {
    /// Stops or slows the opponent.
    Hazard,
    /// Cancels a hazard.
    Remedy,
    /// Permanent protection from a hazard.
    Safety,
    /// Distance travelled.
    Mileage,
}

impl MilestoneKind {
    /// Returns the kind code (hazard = 0 through mileage = 3).
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// The value of a Milestones card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i16)]
pub enum MilestoneCardValue {
    /// Blank placeholder.
    Blank = 0,
    /// Out of Gas.
    OutOfGas = 1,
    /// Flat Tire.
    FlatTire = 2,
    /// Accident.
    Accident = 3,
    /// Speed Limit 50.
    SpeedLimit50 = 4,
    /// Stop.
    Stop = 5,
    /// Gas.
    Gas = 6,
    /// Spare Tire.
    SpareTire = 7,
    /// Repairs.
    Repairs = 8,
    /// End Speed Limit.
    EndSpeedLimit = 9,
    /// Roll.
    Roll = 10,
    /// Extra Tank.
    ExtraTank = 11,
    /// Permanent Tire.
    PermanentTire = 12,
    /// Driving Ace.
    DrivingAce = 13,
    /// Right-of-Way.
    RightOfWay = 14,
    /// 200 miles.
    M200 = 15,
    /// 100 miles.
    M100 = 16,
    /// 75 miles.
    M75 = 17,
    /// 50 miles.
    M50 = 18,
    /// 25 miles.
    M25 = 19,
    /// Placeholder for a player's cards.
    PlayersPlaceholder = 20,
    /// Normal placeholder.
    NormalPlaceholder = 21,
}

impl MilestoneCardValue {
    /// Every Milestones value, in code order.
    pub const ALL: [Self; 22] = [
        Self::Blank,
        Self::OutOfGas,
        Self::FlatTire,
        Self::Accident,
        Self::SpeedLimit50,
        Self::Stop,
        Self::Gas,
        Self::SpareTire,
        Self::Repairs,
        Self::EndSpeedLimit,
        Self::Roll,
        Self::ExtraTank,
        Self::PermanentTire,
        Self::DrivingAce,
        Self::RightOfWay,
        Self::M200,
        Self::M100,
        Self::M75,
        Self::M50,
        Self::M25,
        Self::PlayersPlaceholder,
        Self::NormalPlaceholder,
    ];

    /// Returns the stable code of the value.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Looks up a value by its code.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|value| value.code() == code)
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blank => "Blank (placeholder)",
            Self::OutOfGas => "Out of Gas",
            Self::FlatTire => "Flat Tire",
            Self::Accident => "Accident",
            Self::SpeedLimit50 => "Speed Limit 50",
            Self::Stop => "Stop",
            Self::Gas => "Gas",
            Self::SpareTire => "Spare Tire",
            Self::Repairs => "Repairs",
            Self::EndSpeedLimit => "End Speed Limit",
            Self::Roll => "Roll",
            Self::ExtraTank => "Extra Tank",
            Self::PermanentTire => "Permanent Tire",
            Self::DrivingAce => "Driving Ace",
            Self::RightOfWay => "Right-of-Way",
            Self::M200 => "200",
            Self::M100 => "100",
            Self::M75 => "75",
            Self::M50 => "50",
            Self::M25 => "25",
            Self::PlayersPlaceholder => "Players cards (placeholder)",
            Self::NormalPlaceholder => "Normal (placeholder)",
        }
    }

    /// Returns the card type, derived from the code range.
    ///
    /// Placeholders have no type.
    #[must_use]
    pub const fn kind(self) -> Option<MilestoneKind> {
        match self.code() {
            1..=5 => Some(MilestoneKind::Hazard),
            6..=10 => Some(MilestoneKind::Remedy),
            11..=14 => Some(MilestoneKind::Safety),
            15..=19 => Some(MilestoneKind::Mileage),
            _ => None,
        }
    }

    /// Returns the point value, which is the raw code.
    #[must_use]
    pub const fn point_value(self) -> u8 {
        self.code() as u8
    }

    /// Returns the distance of a mileage card.
    #[must_use]
    pub const fn miles(self) -> Option<u16> {
        match self {
            Self::M200 => Some(200),
            Self::M100 => Some(100),
            Self::M75 => Some(75),
            Self::M50 => Some(50),
            Self::M25 => Some(25),
            _ => None,
        }
    }

    /// Returns the display name for a code, or an error marker holding the
    /// raw code when no value carries it.
    #[must_use]
    pub fn code_name(code: i32) -> Cow<'static, str> {
        match Self::from_code(code) {
            Some(value) => Cow::Borrowed(value.name()),
            None if code == NO_CARD_CODE => Cow::Borrowed(NO_CARD_NAME),
            None => Cow::Owned(format!("?{code}?")),
        }
    }

    /// Returns the codes that have a bundled image resource.
    pub fn resource_codes() -> impl Iterator<Item = i32> {
        Self::ALL.into_iter().map(Self::code)
    }
}

impl TryFrom<i32> for MilestoneCardValue {
    type Error = CardError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(CardError::UnknownCode {
            family: CardFamily::Milestone,
            code,
        })
    }
}

impl fmt::Display for MilestoneCardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const fn build_deck() -> [MilestoneCardValue; 106] {
    use MilestoneCardValue as V;

    const COUNTS: [(MilestoneCardValue, usize); 19] = [
        (V::OutOfGas, 3),
        (V::FlatTire, 3),
        (V::Accident, 3),
        (V::SpeedLimit50, 4),
        (V::Stop, 5),
        (V::Gas, 6),
        (V::SpareTire, 6),
        (V::Repairs, 6),
        (V::EndSpeedLimit, 6),
        (V::Roll, 14),
        (V::ExtraTank, 1),
        (V::PermanentTire, 1),
        (V::DrivingAce, 1),
        (V::RightOfWay, 1),
        (V::M200, 4),
        (V::M100, 12),
        (V::M75, 10),
        (V::M50, 10),
        (V::M25, 10),
    ];

    let mut deck = [V::Blank; 106];
    let mut at = 0;
    let mut i = 0;
    while i < COUNTS.len() {
        let (value, count) = COUNTS[i];
        let mut n = 0;
        while n < count {
            deck[at] = value;
            at += 1;
            n += 1;
        }
        i += 1;
    }
    assert!(at == deck.len(), "milestone deck counts must fill the deck");
    deck
}

/// The 106-card Milestones deck: 18 hazards, 38 remedies, 4 safeties, and
/// 46 mileage cards.
pub const MILESTONE_DECK: [MilestoneCardValue; 106] = build_deck();
