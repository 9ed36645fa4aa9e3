//! Standard playing-card values, including backs, symbols, and jokers.
//!
//! Codes are stable: they double as keys for card image resources, so code
//! `1` always maps to the resource `"1"`.

extern crate alloc;

use alloc::borrow::Cow;
use alloc::format;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::card::CardFamily;
use crate::error::CardError;
use crate::value::{NO_CARD_CODE, NO_CARD_NAME};

/// Card suit, in code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in code order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit code (clubs = 0 through spades = 3).
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Returns the color of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Diamonds | Self::Hearts => Color::Red,
            Self::Clubs | Self::Spades => Color::Black,
        }
    }
}

/// Card color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Diamonds, hearts, and the red joker.
    Red,
    /// Clubs, spades, and the black joker.
    Black,
}

impl Color {
    /// Returns the color code (red = 0, black = 1).
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Rank of the ace.
pub const ACE: u8 = 1;
/// Rank of the ten; face cards collapse to it when faces are ignored.
pub const TEN: u8 = 10;
/// Rank of the jack.
pub const JACK: u8 = 11;
/// Rank of the king.
pub const KING: u8 = 13;

const CARDS_PER_SUIT: i32 = 13;

/// The value of a standard playing card.
///
/// The 52 regular cards are numbered 1 to 52, clubs first and ace through king
/// within each suit. Card backs, symbols, and jokers use codes well above the
/// regular cards, so they order after every real card by code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i16)]
pub enum PlayingCardValue {
    /// Ace of Clubs.
    AceOfClubs = 1,
    /// Two of Clubs.
    TwoOfClubs = 2,
    /// Three of Clubs.
    ThreeOfClubs = 3,
    /// Four of Clubs.
    FourOfClubs = 4,
    /// Five of Clubs.
    FiveOfClubs = 5,
    /// Six of Clubs.
    SixOfClubs = 6,
    /// Seven of Clubs.
    SevenOfClubs = 7,
    /// Eight of Clubs.
    EightOfClubs = 8,
    /// Nine of Clubs.
    NineOfClubs = 9,
    /// Ten of Clubs.
    TenOfClubs = 10,
    /// Jack of Clubs.
    JackOfClubs = 11,
    /// Queen of Clubs.
    QueenOfClubs = 12,
    /// King of Clubs.
    KingOfClubs = 13,
    /// Ace of Diamonds.
    AceOfDiamonds = 14,
    /// Two of Diamonds.
    TwoOfDiamonds = 15,
    /// Three of Diamonds.
    ThreeOfDiamonds = 16,
    /// Four of Diamonds.
    FourOfDiamonds = 17,
    /// Five of Diamonds.
    FiveOfDiamonds = 18,
    /// Six of Diamonds.
    SixOfDiamonds = 19,
    /// Seven of Diamonds.
    SevenOfDiamonds = 20,
    /// Eight of Diamonds.
    EightOfDiamonds = 21,
    /// Nine of Diamonds.
    NineOfDiamonds = 22,
    /// Ten of Diamonds.
    TenOfDiamonds = 23,
    /// Jack of Diamonds.
    JackOfDiamonds = 24,
    /// Queen of Diamonds.
    QueenOfDiamonds = 25,
    /// King of Diamonds.
    KingOfDiamonds = 26,
    /// Ace of Hearts.
    AceOfHearts = 27,
    /// Two of Hearts.
    TwoOfHearts = 28,
    /// Three of Hearts.
    ThreeOfHearts = 29,
    /// Four of Hearts.
    FourOfHearts = 30,
    /// Five of Hearts.
    FiveOfHearts = 31,
    /// Six of Hearts.
    SixOfHearts = 32,
    /// Seven of Hearts.
    SevenOfHearts = 33,
    /// Eight of Hearts.
    EightOfHearts = 34,
    /// Nine of Hearts.
    NineOfHearts = 35,
    /// Ten of Hearts.
    TenOfHearts = 36,
    /// Jack of Hearts.
    JackOfHearts = 37,
    /// Queen of Hearts.
    QueenOfHearts = 38,
    /// King of Hearts.
    KingOfHearts = 39,
    /// Ace of Spades.
    AceOfSpades = 40,
    /// Two of Spades.
    TwoOfSpades = 41,
    /// Three of Spades.
    ThreeOfSpades = 42,
    /// Four of Spades.
    FourOfSpades = 43,
    /// Five of Spades.
    FiveOfSpades = 44,
    /// Six of Spades.
    SixOfSpades = 45,
    /// Seven of Spades.
    SevenOfSpades = 46,
    /// Eight of Spades.
    EightOfSpades = 47,
    /// Nine of Spades.
    NineOfSpades = 48,
    /// Ten of Spades.
    TenOfSpades = 49,
    /// Jack of Spades.
    JackOfSpades = 50,
    /// Queen of Spades.
    QueenOfSpades = 51,
    /// King of Spades.
    KingOfSpades = 52,
    /// Card back (200).
    CardBack1 = 200,
    /// Card back (201).
    CardBack2 = 201,
    /// Card back (202).
    CardBack3 = 202,
    /// Card back (203).
    CardBack4 = 203,
    /// Card back (204).
    CardBack5 = 204,
    /// Card back (205).
    CardBack6 = 205,
    /// Card back (206).
    CardBack7 = 206,
    /// Card back (207).
    CardBack8 = 207,
    /// Card symbol/place holder (300).
    CardSymbol1 = 300,
    /// Card symbol/place holder (301).
    CardSymbol2 = 301,
    /// Card symbol/place holder (302).
    CardSymbol3 = 302,
    /// Card symbol/place holder (303).
    CardSymbol4 = 303,
    /// Red Joker.
    RedJoker = 400,
    /// Black Joker.
    BlackJoker = 401,
}

impl PlayingCardValue {
    /// Every playing-card value, in code order.
    pub const ALL: [Self; 66] = [
        Self::AceOfClubs,
        Self::TwoOfClubs,
        Self::ThreeOfClubs,
        Self::FourOfClubs,
        Self::FiveOfClubs,
        Self::SixOfClubs,
        Self::SevenOfClubs,
        Self::EightOfClubs,
        Self::NineOfClubs,
        Self::TenOfClubs,
        Self::JackOfClubs,
        Self::QueenOfClubs,
        Self::KingOfClubs,
        Self::AceOfDiamonds,
        Self::TwoOfDiamonds,
        Self::ThreeOfDiamonds,
        Self::FourOfDiamonds,
        Self::FiveOfDiamonds,
        Self::SixOfDiamonds,
        Self::SevenOfDiamonds,
        Self::EightOfDiamonds,
        Self::NineOfDiamonds,
        Self::TenOfDiamonds,
        Self::JackOfDiamonds,
        Self::QueenOfDiamonds,
        Self::KingOfDiamonds,
        Self::AceOfHearts,
        Self::TwoOfHearts,
        Self::ThreeOfHearts,
        Self::FourOfHearts,
        Self::FiveOfHearts,
        Self::SixOfHearts,
        Self::SevenOfHearts,
        Self::EightOfHearts,
        Self::NineOfHearts,
        Self::TenOfHearts,
        Self::JackOfHearts,
        Self::QueenOfHearts,
        Self::KingOfHearts,
        Self::AceOfSpades,
        Self::TwoOfSpades,
        Self::ThreeOfSpades,
        Self::FourOfSpades,
        Self::FiveOfSpades,
        Self::SixOfSpades,
        Self::SevenOfSpades,
        Self::EightOfSpades,
        Self::NineOfSpades,
        Self::TenOfSpades,
        Self::JackOfSpades,
        Self::QueenOfSpades,
        Self::KingOfSpades,
        Self::CardBack1,
        Self::CardBack2,
        Self::CardBack3,
        Self::CardBack4,
        Self::CardBack5,
        Self::CardBack6,
        Self::CardBack7,
        Self::CardBack8,
        Self::CardSymbol1,
        Self::CardSymbol2,
        Self::CardSymbol3,
        Self::CardSymbol4,
        Self::RedJoker,
        Self::BlackJoker,
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

    /// Returns the regular card of the given suit and rank (1 = ace, 13 = king).
    #[must_use]
    pub fn from_suit_rank(suit: Suit, rank: u8) -> Option<Self> {
        if !(ACE..=KING).contains(&rank) {
            return None;
        }
        Self::from_code(suit.code() * CARDS_PER_SUIT + i32::from(rank))
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AceOfClubs => "Ace of Clubs",
            Self::TwoOfClubs => "Two of Clubs",
            Self::ThreeOfClubs => "Three of Clubs",
            Self::FourOfClubs => "Four of Clubs",
            Self::FiveOfClubs => "Five of Clubs",
            Self::SixOfClubs => "Six of Clubs",
            Self::SevenOfClubs => "Seven of Clubs",
            Self::EightOfClubs => "Eight of Clubs",
            Self::NineOfClubs => "Nine of Clubs",
            Self::TenOfClubs => "Ten of Clubs",
            Self::JackOfClubs => "Jack of Clubs",
            Self::QueenOfClubs => "Queen of Clubs",
            Self::KingOfClubs => "King of Clubs",
            Self::AceOfDiamonds => "Ace of Diamonds",
            Self::TwoOfDiamonds => "Two of Diamonds",
            Self::ThreeOfDiamonds => "Three of Diamonds",
            Self::FourOfDiamonds => "Four of Diamonds",
            Self::FiveOfDiamonds => "Five of Diamonds",
            Self::SixOfDiamonds => "Six of Diamonds",
            Self::SevenOfDiamonds => "Seven of Diamonds",
            Self::EightOfDiamonds => "Eight of Diamonds",
            Self::NineOfDiamonds => "Nine of Diamonds",
            Self::TenOfDiamonds => "Ten of Diamonds",
            Self::JackOfDiamonds => "Jack of Diamonds",
            Self::QueenOfDiamonds => "Queen of Diamonds",
            Self::KingOfDiamonds => "King of Diamonds",
            Self::AceOfHearts => "Ace of Hearts",
            Self::TwoOfHearts => "Two of Hearts",
            Self::ThreeOfHearts => "Three of Hearts",
            Self::FourOfHearts => "Four of Hearts",
            Self::FiveOfHearts => "Five of Hearts",
            Self::SixOfHearts => "Six of Hearts",
            Self::SevenOfHearts => "Seven of Hearts",
            Self::EightOfHearts => "Eight of Hearts",
            Self::NineOfHearts => "Nine of Hearts",
            Self::TenOfHearts => "Ten of Hearts",
            Self::JackOfHearts => "Jack of Hearts",
            Self::QueenOfHearts => "Queen of Hearts",
            Self::KingOfHearts => "King of Hearts",
            Self::AceOfSpades => "Ace of Spades",
            Self::TwoOfSpades => "Two of Spades",
            Self::ThreeOfSpades => "Three of Spades",
            Self::FourOfSpades => "Four of Spades",
            Self::FiveOfSpades => "Five of Spades",
            Self::SixOfSpades => "Six of Spades",
            Self::SevenOfSpades => "Seven of Spades",
            Self::EightOfSpades => "Eight of Spades",
            Self::NineOfSpades => "Nine of Spades",
            Self::TenOfSpades => "Ten of Spades",
            Self::JackOfSpades => "Jack of Spades",
            Self::QueenOfSpades => "Queen of Spades",
            Self::KingOfSpades => "King of Spades",
            Self::CardBack1 => "Card back (200)",
            Self::CardBack2 => "Card back (201)",
            Self::CardBack3 => "Card back (202)",
            Self::CardBack4 => "Card back (203)",
            Self::CardBack5 => "Card back (204)",
            Self::CardBack6 => "Card back (205)",
            Self::CardBack7 => "Card back (206)",
            Self::CardBack8 => "Card back (207)",
            Self::CardSymbol1 => "Card symbol/place holder (300)",
            Self::CardSymbol2 => "Card symbol/place holder (301)",
            Self::CardSymbol3 => "Card symbol/place holder (302)",
            Self::CardSymbol4 => "Card symbol/place holder (303)",
            Self::RedJoker => "Red Joker",
            Self::BlackJoker => "Black Joker",
        }
    }

    /// Returns whether this is one of the 52 regular cards.
    #[must_use]
    pub const fn is_regular(self) -> bool {
        matches!(self.code(), 1..=52)
    }

    /// Returns whether this is a joker.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Self::RedJoker | Self::BlackJoker)
    }

    /// Returns the suit of a regular card.
    #[must_use]
    pub const fn suit(self) -> Option<Suit> {
        if !self.is_regular() {
            return None;
        }
        Some(Suit::ALL[((self.code() - 1) / CARDS_PER_SUIT) as usize])
    }

    /// Returns the rank of a regular card (1 = ace, 13 = king).
    #[must_use]
    pub const fn rank(self) -> Option<u8> {
        if !self.is_regular() {
            return None;
        }
        Some(((self.code() - 1) % CARDS_PER_SUIT) as u8 + 1)
    }

    /// Returns the color of the card. Backs and symbols have no color.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::RedJoker => Some(Color::Red),
            Self::BlackJoker => Some(Color::Black),
            _ => match self.suit() {
                Some(suit) => Some(suit.color()),
                None => None,
            },
        }
    }

    /// Returns the point value: the rank for regular cards, 0 for jokers.
    #[must_use]
    pub const fn point_value(self) -> Option<u8> {
        if self.is_joker() {
            return Some(0);
        }
        self.rank()
    }

    /// Returns the point value with jack, queen, and king counted as 10.
    #[must_use]
    pub const fn point_value_face10(self) -> Option<u8> {
        match self.point_value() {
            Some(JACK..=KING) => Some(TEN),
            other => other,
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

impl TryFrom<i32> for PlayingCardValue {
    type Error = CardError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(CardError::UnknownCode {
            family: CardFamily::Playing,
            code,
        })
    }
}

impl fmt::Display for PlayingCardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A standard 52-card deck, clubs through spades, ace through king.
pub const STANDARD_DECK: [PlayingCardValue; 52] = [
    PlayingCardValue::AceOfClubs,
    PlayingCardValue::TwoOfClubs,
    PlayingCardValue::ThreeOfClubs,
    PlayingCardValue::FourOfClubs,
    PlayingCardValue::FiveOfClubs,
    PlayingCardValue::SixOfClubs,
    PlayingCardValue::SevenOfClubs,
    PlayingCardValue::EightOfClubs,
    PlayingCardValue::NineOfClubs,
    PlayingCardValue::TenOfClubs,
    PlayingCardValue::JackOfClubs,
    PlayingCardValue::QueenOfClubs,
    PlayingCardValue::KingOfClubs,
    PlayingCardValue::AceOfDiamonds,
    PlayingCardValue::TwoOfDiamonds,
    PlayingCardValue::ThreeOfDiamonds,
    PlayingCardValue::FourOfDiamonds,
    PlayingCardValue::FiveOfDiamonds,
    PlayingCardValue::SixOfDiamonds,
    PlayingCardValue::SevenOfDiamonds,
    PlayingCardValue::EightOfDiamonds,
    PlayingCardValue::NineOfDiamonds,
    PlayingCardValue::TenOfDiamonds,
    PlayingCardValue::JackOfDiamonds,
    PlayingCardValue::QueenOfDiamonds,
    PlayingCardValue::KingOfDiamonds,
    PlayingCardValue::AceOfHearts,
    PlayingCardValue::TwoOfHearts,
    PlayingCardValue::ThreeOfHearts,
    PlayingCardValue::FourOfHearts,
    PlayingCardValue::FiveOfHearts,
    PlayingCardValue::SixOfHearts,
    PlayingCardValue::SevenOfHearts,
    PlayingCardValue::EightOfHearts,
    PlayingCardValue::NineOfHearts,
    PlayingCardValue::TenOfHearts,
    PlayingCardValue::JackOfHearts,
    PlayingCardValue::QueenOfHearts,
    PlayingCardValue::KingOfHearts,
    PlayingCardValue::AceOfSpades,
    PlayingCardValue::TwoOfSpades,
    PlayingCardValue::ThreeOfSpades,
    PlayingCardValue::FourOfSpades,
    PlayingCardValue::FiveOfSpades,
    PlayingCardValue::SixOfSpades,
    PlayingCardValue::SevenOfSpades,
    PlayingCardValue::EightOfSpades,
    PlayingCardValue::NineOfSpades,
    PlayingCardValue::TenOfSpades,
    PlayingCardValue::JackOfSpades,
    PlayingCardValue::QueenOfSpades,
    PlayingCardValue::KingOfSpades,
];

/// The two jokers, usually passed as extra cards to a deck.
pub const JOKERS: [PlayingCardValue; 2] =
    [PlayingCardValue::RedJoker, PlayingCardValue::BlackJoker];

/// A 48-card pinochle deck: two of each nine through ace in every suit.
pub const PINOCHLE_DECK: [PlayingCardValue; 48] = [
    PlayingCardValue::NineOfClubs,
    PlayingCardValue::TenOfClubs,
    PlayingCardValue::JackOfClubs,
    PlayingCardValue::QueenOfClubs,
    PlayingCardValue::KingOfClubs,
    PlayingCardValue::AceOfClubs,
    PlayingCardValue::NineOfClubs,
    PlayingCardValue::TenOfClubs,
    PlayingCardValue::JackOfClubs,
    PlayingCardValue::QueenOfClubs,
    PlayingCardValue::KingOfClubs,
    PlayingCardValue::AceOfClubs,
    PlayingCardValue::NineOfDiamonds,
    PlayingCardValue::TenOfDiamonds,
    PlayingCardValue::JackOfDiamonds,
    PlayingCardValue::QueenOfDiamonds,
    PlayingCardValue::KingOfDiamonds,
    PlayingCardValue::AceOfDiamonds,
    PlayingCardValue::NineOfDiamonds,
    PlayingCardValue::TenOfDiamonds,
    PlayingCardValue::JackOfDiamonds,
    PlayingCardValue::QueenOfDiamonds,
    PlayingCardValue::KingOfDiamonds,
    PlayingCardValue::AceOfDiamonds,
    PlayingCardValue::NineOfHearts,
    PlayingCardValue::TenOfHearts,
    PlayingCardValue::JackOfHearts,
    PlayingCardValue::QueenOfHearts,
    PlayingCardValue::KingOfHearts,
    PlayingCardValue::AceOfHearts,
    PlayingCardValue::NineOfHearts,
    PlayingCardValue::TenOfHearts,
    PlayingCardValue::JackOfHearts,
    PlayingCardValue::QueenOfHearts,
    PlayingCardValue::KingOfHearts,
    PlayingCardValue::AceOfHearts,
    PlayingCardValue::NineOfSpades,
    PlayingCardValue::TenOfSpades,
    PlayingCardValue::JackOfSpades,
    PlayingCardValue::QueenOfSpades,
    PlayingCardValue::KingOfSpades,
    PlayingCardValue::AceOfSpades,
    PlayingCardValue::NineOfSpades,
    PlayingCardValue::TenOfSpades,
    PlayingCardValue::JackOfSpades,
    PlayingCardValue::QueenOfSpades,
    PlayingCardValue::KingOfSpades,
    PlayingCardValue::AceOfSpades,
];
