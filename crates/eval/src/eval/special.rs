// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Special hands detection.
use niuniu_cards::{Card, Game, Rank, Suit};

use super::{
    HAND_SIZE,
    hand::{HandClass, NiuHand, Split},
};

/// Checks the special hands in priority order and returns the first match.
///
/// The hand must be sorted.
pub(super) fn classify(hand: &[Card; HAND_SIZE]) -> Option<NiuHand> {
    supreme_spade_ace(hand)
        .or_else(|| five_face_cards(hand))
        .or_else(|| five_small_cards(hand))
}

fn supreme_spade_ace(hand: &[Card; HAND_SIZE]) -> Option<NiuHand> {
    let spade_ace = Card::new(Rank::Ace, Suit::Spades);
    if !hand.contains(&spade_ace) {
        return None;
    }

    let tens = hand
        .iter()
        .copied()
        .filter(|c| c.value(Game::NiuNiu) == 10)
        .collect::<Vec<_>>();

    let [t1, t2, t3, t4] = tens[..] else {
        return None;
    };

    if !tens.iter().any(Card::is_face) {
        return None;
    }

    let split = Split::with_card_values([t1, t2, t3], [spade_ace, t4]);
    Some(NiuHand::new(HandClass::SupremeSpadeAce, Some(split)))
}

fn five_face_cards(hand: &[Card; HAND_SIZE]) -> Option<NiuHand> {
    if !hand.iter().all(Card::is_face) {
        return None;
    }

    Some(NiuHand::new(HandClass::FiveFaceCards, Some(first_three(hand))))
}

fn five_small_cards(hand: &[Card; HAND_SIZE]) -> Option<NiuHand> {
    let values = hand.map(|c| c.value(Game::NiuNiu));
    if values.iter().any(|&v| v >= 5) || values.iter().sum::<u8>() > 10 {
        return None;
    }

    Some(NiuHand::new(HandClass::FiveSmallCards, Some(first_three(hand))))
}

fn first_three(hand: &[Card; HAND_SIZE]) -> Split {
    let [c1, c2, c3, c4, c5] = *hand;
    Split::with_card_values([c1, c2, c3], [c4, c5])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> [Card; HAND_SIZE] {
        let mut cards = s
            .split_whitespace()
            .map(|c| c.parse::<Card>().unwrap())
            .collect::<Vec<_>>();
        cards.sort();
        cards.try_into().unwrap()
    }

    fn class(s: &str) -> Option<HandClass> {
        classify(&hand(s)).map(|h| h.class())
    }

    #[test]
    fn special_hands() {
        assert_eq!(class("AS JD TC TH TS"), Some(HandClass::SupremeSpadeAce));
        assert_eq!(class("JS QD KC KH JC"), Some(HandClass::FiveFaceCards));
        assert_eq!(class("AS AD 2C 3H 3S"), Some(HandClass::FiveSmallCards));
        assert_eq!(class("AS JD TC TH 9S"), None);
        assert_eq!(class("JS QD KC KH TC"), None);
        assert_eq!(class("AS AD 2C 3H 4S"), None);
    }

    #[test]
    fn supreme_needs_four_tens() {
        // Five ten valued cards cannot hold the spade ace, four tens plus a
        // non ten card is not a supreme hand.
        assert_eq!(class("AS AH JD TC TH"), None);
        assert_eq!(class("AS 2H JD TC TH"), None);
        assert_eq!(class("AS QH JD KC TH"), Some(HandClass::SupremeSpadeAce));
    }

    #[test]
    fn special_splits_use_printed_values() {
        let result = classify(&hand("AS AD 2C 3H 3S")).unwrap();
        let split = result.split().unwrap();
        assert_eq!(split.base_values, [1, 1, 2]);
        assert_eq!(split.pair_values, [3, 3]);
    }
}
