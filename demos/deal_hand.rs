//! Deals a few hands from a shuffled deck and shows how sorting modes change
//! their order.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use deckhand::{CardDeck, CardHand, CompMode, DeckOptions, HandOptions};

fn main() {
    let seed = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    println!("Seed: {seed}");

    let mut deck = CardDeck::standard(DeckOptions::default().with_seed(seed), true);
    deck.shuffle();
    println!("{deck}");

    let mut hands: Vec<CardHand> = (0..4)
        .map(|_| CardHand::with_options(HandOptions::default().with_comp_mode(CompMode::Default)))
        .collect();

    // Deal round-robin like a dealer would.
    'deal: loop {
        for hand in &mut hands {
            if hand.is_full() {
                break 'deal;
            }
            let Some(card) = deck.deal() else {
                break 'deal;
            };
            if let Err(card) = hand.add(card) {
                println!("No room for {card}");
            }
        }
    }

    for (player, hand) in hands.iter_mut().enumerate() {
        println!("Player {}:", player + 1);
        println!("  by code:        {hand}");
        hand.set_comp_mode(CompMode::IgnoreSuit);
        println!("  by rank:        {hand}");
        hand.set_comp_mode(CompMode::IgnoreSuitAndFace);
        println!("  faces count 10: {hand}");
    }

    println!("{deck}");
    println!("{} cards left in the deck", deck.remaining());

    let mut milestones = CardDeck::milestone(DeckOptions::default().with_seed(seed));
    milestones.shuffle();
    let mut hand = CardHand::new(6, true);
    while !hand.is_full() {
        let Some(card) = milestones.deal() else { break };
        hand.add(card).ok();
    }
    println!("Milestones hand: {hand}");
}
