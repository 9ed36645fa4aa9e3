//! Playing-card, deck, and hand primitives with optional `no_std` support.
//!
//! The crate models card faces as [`CardValue`]s grouped into families
//! (standard playing cards, pinochle subsets, and Milestones road-trip cards),
//! mutable [`Card`]s that hold one value, a [`CardDeck`] that repeats and
//! shuffles a value set, and a fixed-size [`CardHand`] that can keep itself
//! sorted. It defines no game rules.
//!
//! # Example
//!
//! ```
//! use deckhand::{CardDeck, CardHand, CompMode, DeckOptions, HandOptions};
//!
//! let mut deck = CardDeck::standard(DeckOptions::default().with_seed(42), false);
//! deck.shuffle();
//!
//! let mut hand = CardHand::with_options(HandOptions::default().with_comp_mode(CompMode::IgnoreSuit));
//! while !hand.is_full() {
//!     let Some(card) = deck.deal() else { break };
//!     hand.add(card).ok();
//! }
//! assert_eq!(hand.len(), 5);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod milestone;
pub mod options;
pub mod playing;
pub mod value;

// Re-export main types
pub use card::{Card, CardBuilder, CardFamily, CardSuit, CompMode};
pub use deck::{CardDeck, Cards};
pub use error::{CardError, RestoreError};
pub use hand::{CardHand, EMPTY_CARD, Slot};
pub use milestone::{MILESTONE_DECK, MilestoneCardValue, MilestoneKind};
pub use options::{DeckOptions, HandOptions};
pub use playing::{Color, JOKERS, PINOCHLE_DECK, PlayingCardValue, STANDARD_DECK, Suit};
pub use value::{CardValue, NO_CARD_CODE};
