// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Search for the best base and pair split.
use ahash::AHashSet;
use std::{cmp::Reverse, iter};

use niuniu_cards::{Card, Game};

use super::{
    HAND_SIZE,
    hand::{HandClass, NiuHand, Split},
};

/// Values a card can take, a trey can count as a six and a six as a trey.
///
/// The printed value comes first.
fn card_values(card: Card) -> impl Iterator<Item = u8> + Clone {
    let value = card.value(Game::NiuNiu);
    let swap = match value {
        3 => Some(6),
        6 => Some(3),
        _ => None,
    };

    iter::once(value).chain(swap)
}

/// Returns the first values assignment that makes the base a multiple of ten.
fn base_values(base: [Card; 3]) -> Option<[u8; 3]> {
    let [c1, c2, c3] = base;
    card_values(c1)
        .flat_map(|v1| card_values(c2).map(move |v2| (v1, v2)))
        .flat_map(|(v1, v2)| card_values(c3).map(move |v3| [v1, v2, v3]))
        .find(|values| values.iter().sum::<u8>() % 10 == 0)
}

/// All values assignments for the pair.
fn pair_values(pair: [Card; 2]) -> impl Iterator<Item = [u8; 2]> {
    let [c1, c2] = pair;
    card_values(c1).flat_map(move |v1| card_values(c2).map(move |v2| [v1, v2]))
}

/// Calls `f` for each of the ten base and pair splits of the hand.
fn for_each_split<F>(hand: &[Card; HAND_SIZE], mut f: F)
where
    F: FnMut([Card; 3], [Card; 2]),
{
    for i in 0..HAND_SIZE {
        for j in (i + 1)..HAND_SIZE {
            for k in (j + 1)..HAND_SIZE {
                let mut pair = hand
                    .iter()
                    .enumerate()
                    .filter(|&(p, _)| p != i && p != j && p != k)
                    .map(|(_, c)| *c);

                if let (Some(p1), Some(p2)) = (pair.next(), pair.next()) {
                    f([hand[i], hand[j], hand[k]], [p1, p2]);
                }
            }
        }
    }
}

/// Finds all valid splits and returns the best one with the others as
/// alternatives, or a [HandClass::NoNiu] result if no base is valid.
///
/// The hand must be sorted.
pub(super) fn best_split(hand: &[Card; HAND_SIZE]) -> NiuHand {
    let mut candidates = Vec::new();

    for_each_split(hand, |base, pair| {
        let Some(base_values) = base_values(base) else {
            return;
        };

        for pair_values in pair_values(pair) {
            let split = Split {
                base,
                base_values,
                pair,
                pair_values,
            };

            let class = HandClass::Niu {
                rank: split.pair_sum() % 10,
                strict_pair: split.is_strict_pair(),
            };

            candidates.push(NiuHand::new(class, Some(split)));
        }
    });

    rank_candidates(candidates)
}

/// Orders the candidates from best to worst, keeps the best result for each
/// set of values, and returns the first with the others as alternatives.
fn rank_candidates(mut candidates: Vec<NiuHand>) -> NiuHand {
    // Stable sort, equal results keep the splits order.
    candidates.sort_by_key(|c| Reverse(c.comparison_score()));

    let mut seen = AHashSet::with_capacity(candidates.len());
    let mut results = candidates
        .into_iter()
        .filter(|c| c.split().is_some_and(|s| seen.insert(s.key())));

    match results.next() {
        Some(best) => best.with_alternatives(results.collect()),
        None => NiuHand::no_niu(),
    }
}
