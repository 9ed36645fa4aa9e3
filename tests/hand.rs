//! Hand tests.

use proptest::prelude::*;

use deckhand::{
    Card, CardDeck, CardHand, CardValue, CompMode, DeckOptions, EMPTY_CARD, HandOptions,
    PlayingCardValue, Slot,
};

fn hand(max_cards: usize, sorted: bool, comp_mode: CompMode) -> CardHand {
    CardHand::with_options(
        HandOptions::default()
            .with_max_cards(max_cards)
            .with_sorted(sorted)
            .with_comp_mode(comp_mode),
    )
}

fn values(hand: &CardHand) -> Vec<CardValue> {
    hand.cards().map(Card::value).collect()
}

fn playing(values: &[PlayingCardValue]) -> Vec<CardValue> {
    values.iter().map(|&value| CardValue::from(value)).collect()
}

#[test]
fn sorted_hand_orders_by_code() {
    use PlayingCardValue::{AceOfClubs, KingOfClubs, SevenOfClubs};

    let mut hand = hand(5, true, CompMode::Default);
    for value in [KingOfClubs, AceOfClubs, SevenOfClubs] {
        hand.add(Card::playing(value)).unwrap();
    }

    assert_eq!(hand.len(), 3);
    assert_eq!(values(&hand), playing(&[AceOfClubs, SevenOfClubs, KingOfClubs]));
    assert!(hand.slots()[..3].iter().all(Slot::is_occupied));
    assert!(hand.slots()[3..].iter().all(Slot::is_empty));
    assert!(hand.cards().all(|card| card.comp_mode() == CompMode::Default));
}

#[test]
fn deal_a_sorted_hand_from_a_deck() {
    let mut deck = CardDeck::standard(DeckOptions::default().with_seed(11), false);
    deck.shuffle();

    let mut hand = CardHand::default();
    assert_eq!(hand.comp_mode(), CompMode::IgnoreSuit);
    while !hand.is_full() {
        hand.add(deck.deal().unwrap()).unwrap();
    }

    assert_eq!(hand.len(), 5);
    assert_eq!(deck.remaining(), 47);
    let points: Vec<u8> = hand.cards().filter_map(Card::point_value).collect();
    assert_eq!(points.len(), 5);
    assert!(points.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(hand.cards().all(|card| card.comp_mode() == CompMode::IgnoreSuit));

    let mut dealt = 5;
    while deck.deal().is_some() {
        dealt += 1;
    }
    assert_eq!(dealt, 52);
}

#[test]
fn full_hand_rejects_cards() {
    let mut hand = CardHand::new(2, false);
    hand.add(Card::playing(PlayingCardValue::TwoOfClubs)).unwrap();
    hand.add(Card::playing(PlayingCardValue::ThreeOfClubs)).unwrap();
    assert!(hand.is_full());

    let rejected = hand
        .add(Card::playing(PlayingCardValue::FourOfClubs))
        .unwrap_err();
    assert_eq!(rejected.value(), CardValue::from(PlayingCardValue::FourOfClubs));
    assert_eq!(hand.len(), 2);
}

#[test]
fn zero_capacity_becomes_one_slot() {
    let mut hand = CardHand::new(0, true);
    assert_eq!(hand.max_cards(), 1);
    assert!(hand.is_empty());
    hand.add(Card::playing(PlayingCardValue::AceOfHearts)).unwrap();
    assert!(hand.is_full());
}

#[test]
fn remove_leaves_a_hole() {
    use PlayingCardValue::{AceOfClubs, KingOfClubs, SevenOfClubs};

    let mut hand = hand(4, true, CompMode::Default);
    for value in [AceOfClubs, SevenOfClubs, KingOfClubs] {
        hand.add(Card::playing(value)).unwrap();
    }

    let removed = hand.remove(1).unwrap();
    assert_eq!(removed.value(), CardValue::from(SevenOfClubs));
    assert_eq!(hand.len(), 2);
    assert!(hand.slots()[1].is_empty());
    assert_eq!(hand.card_at(2).unwrap().value(), CardValue::from(KingOfClubs));

    let again = hand.remove(1).unwrap();
    assert!(again.is_blank());
    assert_eq!(hand.len(), 2);

    assert!(hand.remove(4).is_none());
    assert_eq!(hand.len(), 2);
}

#[test]
fn compress_moves_cards_forward() {
    use PlayingCardValue::{FiveOfHearts, NineOfSpades, TwoOfDiamonds};

    let mut hand = hand(5, false, CompMode::Default);
    for value in [NineOfSpades, TwoOfDiamonds, FiveOfHearts] {
        hand.add(Card::playing(value)).unwrap();
    }
    hand.remove(0);
    hand.remove(1);
    hand.add(Card::playing(NineOfSpades)).unwrap();
    assert_eq!(values(&hand), playing(&[NineOfSpades, FiveOfHearts]));
    assert!(hand.slots()[1].is_empty());

    hand.compress();
    assert_eq!(values(&hand), playing(&[NineOfSpades, FiveOfHearts]));
    assert!(hand.slots()[..2].iter().all(Slot::is_occupied));
    assert!(hand.slots()[2..].iter().all(Slot::is_empty));

    hand.compress();
    assert_eq!(values(&hand), playing(&[NineOfSpades, FiveOfHearts]));
    assert_eq!(hand.len(), 2);
}

#[test]
fn contains_follows_the_hand_mode() {
    let mut sorted = CardHand::new(5, true);
    sorted.add(Card::playing(PlayingCardValue::AceOfClubs)).unwrap();
    assert!(sorted.contains(&Card::playing(PlayingCardValue::AceOfClubs)));
    assert!(sorted.contains(&Card::playing(PlayingCardValue::AceOfHearts)));
    assert!(!sorted.contains(&Card::playing(PlayingCardValue::TwoOfClubs)));

    let mut unsorted = CardHand::new(5, false);
    unsorted.add(Card::playing(PlayingCardValue::AceOfClubs)).unwrap();
    assert!(unsorted.contains(&Card::playing(PlayingCardValue::AceOfClubs)));
    assert!(!unsorted.contains(&Card::playing(PlayingCardValue::AceOfHearts)));
}

#[test]
fn replace_in_unsorted_hand_keeps_position() {
    use PlayingCardValue::{EightOfClubs, QueenOfDiamonds, ThreeOfSpades};

    let mut hand = CardHand::new(3, false);
    hand.add(Card::playing(EightOfClubs)).unwrap();
    hand.add(Card::playing(ThreeOfSpades)).unwrap();

    let previous = hand.replace(Card::playing(QueenOfDiamonds), 0).unwrap();
    assert_eq!(previous.value(), CardValue::from(EightOfClubs));
    assert_eq!(values(&hand), playing(&[QueenOfDiamonds, ThreeOfSpades]));
    assert_eq!(hand.len(), 2);

    let empty = hand.replace(Card::playing(EightOfClubs), 2).unwrap();
    assert!(empty.is_blank());
    assert_eq!(hand.len(), 3);
    assert!(hand.is_full());

    assert!(hand.replace(Card::playing(EightOfClubs), 3).is_none());
}

#[test]
fn replace_in_sorted_hand_resorts() {
    use PlayingCardValue::{AceOfClubs, KingOfClubs, QueenOfClubs, SevenOfClubs};

    let mut hand = hand(5, true, CompMode::Default);
    for value in [AceOfClubs, SevenOfClubs, KingOfClubs] {
        hand.add(Card::playing(value)).unwrap();
    }

    let previous = hand.replace(Card::playing(QueenOfClubs), 0).unwrap();
    assert_eq!(previous.value(), CardValue::from(AceOfClubs));
    assert_eq!(hand.len(), 3);
    assert_eq!(values(&hand), playing(&[SevenOfClubs, QueenOfClubs, KingOfClubs]));
    assert!(hand.slots()[3..].iter().all(Slot::is_empty));
}

#[test]
fn first_available_takes_the_lowest_slot() {
    use PlayingCardValue::{FourOfHearts, JackOfSpades};

    let mut hand = CardHand::new(4, false);
    assert!(hand.first_available().is_none());

    hand.add(Card::playing(JackOfSpades)).unwrap();
    hand.add(Card::playing(FourOfHearts)).unwrap();
    hand.remove(0);

    let card = hand.first_available().unwrap();
    assert_eq!(card.value(), CardValue::from(FourOfHearts));
    assert!(hand.is_empty());
    assert!(hand.first_available().is_none());
}

#[test]
fn changing_mode_resorts_the_hand() {
    use PlayingCardValue::{AceOfSpades, KingOfClubs, TwoOfHearts};

    let mut hand = hand(5, true, CompMode::Default);
    for value in [AceOfSpades, KingOfClubs, TwoOfHearts] {
        hand.add(Card::playing(value)).unwrap();
    }
    assert_eq!(values(&hand), playing(&[KingOfClubs, TwoOfHearts, AceOfSpades]));

    hand.set_comp_mode(CompMode::IgnoreSuit);
    assert_eq!(hand.comp_mode(), CompMode::IgnoreSuit);
    assert_eq!(values(&hand), playing(&[AceOfSpades, TwoOfHearts, KingOfClubs]));
    assert!(hand.cards().all(|card| card.comp_mode() == CompMode::IgnoreSuit));
}

#[test]
fn changing_mode_of_unsorted_hand_leaves_cards_alone() {
    use PlayingCardValue::{AceOfSpades, KingOfClubs};

    let mut hand = CardHand::new(3, false);
    hand.add(Card::playing(KingOfClubs)).unwrap();
    hand.add(Card::playing(AceOfSpades)).unwrap();

    hand.set_comp_mode(CompMode::IgnoreSuitAndFace);
    assert_eq!(hand.comp_mode(), CompMode::IgnoreSuitAndFace);
    assert_eq!(values(&hand), playing(&[KingOfClubs, AceOfSpades]));
    assert!(hand.cards().all(|card| card.comp_mode() == CompMode::Default));
}

#[test]
fn card_at_reports_empty_slots() {
    let mut hand = CardHand::new(3, true);
    hand.add(Card::playing(PlayingCardValue::SixOfDiamonds)).unwrap();

    assert_eq!(
        hand.card_at(0).unwrap().value(),
        CardValue::from(PlayingCardValue::SixOfDiamonds)
    );
    let empty = hand.card_at(2).unwrap();
    assert!(core::ptr::eq(empty, &EMPTY_CARD));
    assert!(empty.is_blank());
    assert!(hand.card_at(3).is_none());
}

#[test]
fn blank_cards_sort_after_real_cards() {
    use PlayingCardValue::{ThreeOfClubs, TwoOfClubs};

    let mut hand = hand(4, true, CompMode::Default);
    hand.add(Card::playing(ThreeOfClubs)).unwrap();
    hand.add(Card::blank()).unwrap();
    hand.add(Card::playing(TwoOfClubs)).unwrap();

    assert_eq!(hand.len(), 3);
    assert_eq!(
        values(&hand),
        vec![
            CardValue::from(TwoOfClubs),
            CardValue::from(ThreeOfClubs),
            CardValue::NoCard,
        ]
    );
    assert!(hand.slots()[3].is_empty());
}

#[test]
fn remove_all_empties_every_slot() {
    let mut hand = CardHand::new(3, true);
    hand.add(Card::playing(PlayingCardValue::TenOfClubs)).unwrap();
    hand.add(Card::playing(PlayingCardValue::TenOfHearts)).unwrap();
    hand.remove_all();
    assert!(hand.is_empty());
    assert_eq!(hand.max_cards(), 3);
    assert!(hand.slots().iter().all(Slot::is_empty));
}

#[test]
fn display_lists_every_slot() {
    let mut hand = hand(2, true, CompMode::Default);
    hand.add(Card::playing(PlayingCardValue::QueenOfHearts)).unwrap();
    assert_eq!(hand.to_string(), "CardHand: [(0) Queen of Hearts, (1) Empty]");
}

#[test]
fn hand_round_trips_through_serde() {
    let mut hand = hand(4, true, CompMode::IgnoreSuitAndFace);
    hand.add(Card::playing(PlayingCardValue::KingOfSpades)).unwrap();
    hand.add(Card::playing(PlayingCardValue::NineOfHearts)).unwrap();

    let json = serde_json::to_string(&hand).unwrap();
    let restored: CardHand = serde_json::from_str(&json).unwrap();
    assert_eq!(values(&restored), values(&hand));
    assert_eq!(restored.len(), 2);
    assert_eq!(restored.max_cards(), 4);
    assert!(restored.is_sorted());
    assert_eq!(restored.comp_mode(), CompMode::IgnoreSuitAndFace);
}

#[test]
fn restoring_a_hand_checks_slots_and_count() {
    let mut hand = hand(3, true, CompMode::Default);
    hand.add(Card::playing(PlayingCardValue::FiveOfClubs)).unwrap();
    let saved = serde_json::to_value(&hand).unwrap();

    let mut miscounted = saved.clone();
    miscounted["count"] = serde_json::json!(0);
    let err = serde_json::from_value::<CardHand>(miscounted).unwrap_err();
    assert!(err.to_string().contains("hand count 0 does not match 1 occupied slots"));

    let mut no_slots = saved.clone();
    no_slots["slots"] = serde_json::json!([]);
    no_slots["count"] = serde_json::json!(0);
    let err = serde_json::from_value::<CardHand>(no_slots).unwrap_err();
    assert!(err.to_string().contains("at least one slot"));

    let mut foreign = saved.clone();
    foreign["slots"][0]["Occupied"]["value"] = serde_json::json!({"Milestone": "Gas"});
    assert!(serde_json::from_value::<CardHand>(foreign).is_err());

    let mut restored: CardHand = serde_json::from_value(saved).unwrap();
    assert!(restored.remove(0).is_some());
    assert!(restored.is_empty());
}

#[derive(Debug, Clone)]
enum HandOp {
    Add(usize),
    SetMode(CompMode),
    Replace(usize, usize),
}

fn comp_mode() -> impl Strategy<Value = CompMode> {
    prop_oneof![
        Just(CompMode::Default),
        Just(CompMode::IgnoreSuit),
        Just(CompMode::IgnoreSuitAndFace),
    ]
}

fn hand_op() -> impl Strategy<Value = HandOp> {
    let card = 0..PlayingCardValue::ALL.len();
    prop_oneof![
        3 => card.clone().prop_map(HandOp::Add),
        1 => comp_mode().prop_map(HandOp::SetMode),
        2 => (card, 0usize..10).prop_map(|(pick, index)| HandOp::Replace(pick, index)),
    ]
}

proptest! {
    #[test]
    fn sorted_hand_stays_ascending(
        ops in proptest::collection::vec(hand_op(), 0..24),
        capacity in 1usize..10,
        mode in comp_mode(),
    ) {
        let mut hand = hand(capacity, true, mode);
        for op in ops {
            match op {
                HandOp::Add(pick) => {
                    let was_full = hand.is_full();
                    let result = hand.add(Card::playing(PlayingCardValue::ALL[pick]));
                    prop_assert_eq!(result.is_err(), was_full);
                }
                HandOp::SetMode(mode) => hand.set_comp_mode(mode),
                HandOp::Replace(pick, index) => {
                    let before = hand.len();
                    let index = index % capacity;
                    let was_empty = hand.slots()[index].is_empty();
                    prop_assert!(hand.replace(Card::playing(PlayingCardValue::ALL[pick]), index).is_some());
                    prop_assert_eq!(hand.len(), before + usize::from(was_empty));
                }
            }

            let held = hand.len();
            prop_assert!(hand.slots()[..held].iter().all(Slot::is_occupied));
            prop_assert!(hand.slots()[held..].iter().all(Slot::is_empty));
            prop_assert!(hand.cards().all(|card| card.comp_mode() == hand.comp_mode()));

            let cards: Vec<&Card> = hand.cards().collect();
            for pair in cards.windows(2) {
                prop_assert_ne!(pair[0].compare(pair[1]), core::cmp::Ordering::Greater);
            }
        }
    }
}
