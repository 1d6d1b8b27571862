// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand classification types.
use log::debug;
use serde::Serialize;
use std::fmt;

use super::{EvalError, HAND_SIZE, search, special};
use niuniu_cards::{Card, Game};

/// The class of a Niu Niu hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HandClass {
    /// The Spade Ace with four ten valued cards, at least one a face card.
    SupremeSpadeAce,
    /// Five cards all below five that sum to ten or less.
    FiveSmallCards,
    /// Five Jacks, Queens, or Kings.
    FiveFaceCards,
    /// A qualifying hand ranked by the ones digit of the pair sum.
    ///
    /// Rank 0 is Niu Niu, both groups are multiples of ten.
    Niu {
        /// Ones digit of the pair sum in 0..=9.
        rank: u8,
        /// The two pair cards have the same rank.
        strict_pair: bool,
    },
    /// No three cards sum to a multiple of ten.
    NoNiu,
}

impl HandClass {
    /// The score used to compare hands of different classes.
    ///
    /// A strict pair outranks every non-strict result, so a Niu 1 double
    /// beats a plain Niu 9 or Niu Niu.
    pub fn score(&self) -> u32 {
        match *self {
            HandClass::SupremeSpadeAce => 5000,
            HandClass::FiveSmallCards => 4800,
            HandClass::FiveFaceCards => 4500,
            HandClass::Niu { rank, strict_pair } => {
                let tier: u32 = if strict_pair {
                    3000
                } else if rank == 0 {
                    2000
                } else {
                    1000
                };

                tier + 100 * u32::from(Self::niu_points(rank))
            }
            HandClass::NoNiu => 0,
        }
    }

    /// Checks if this hand has a valid base.
    pub fn has_niu(&self) -> bool {
        !matches!(self, HandClass::NoNiu)
    }

    /// Checks if this is one of the special hands.
    pub fn is_special(&self) -> bool {
        matches!(
            self,
            HandClass::SupremeSpadeAce | HandClass::FiveSmallCards | HandClass::FiveFaceCards
        )
    }

    /// The rank shown to players, Niu Niu is shown as 10.
    pub fn display_rank(&self) -> Option<u8> {
        match *self {
            HandClass::Niu { rank, .. } => Some(Self::niu_points(rank)),
            _ => None,
        }
    }

    /// The English name of this class.
    pub fn name(&self) -> String {
        match *self {
            HandClass::SupremeSpadeAce => "Supreme Spade Ace".to_string(),
            HandClass::FiveSmallCards => "Five Small Cards".to_string(),
            HandClass::FiveFaceCards => "Five Face Cards".to_string(),
            HandClass::Niu { rank, strict_pair } => {
                let name = match rank {
                    0 => "Niu Niu".to_string(),
                    n => format!("Niu {n}"),
                };

                if strict_pair {
                    format!("{name} (Double)")
                } else {
                    name
                }
            }
            HandClass::NoNiu => "No Niu".to_string(),
        }
    }

    /// The Chinese name of this class.
    pub fn name_zh(&self) -> String {
        match *self {
            HandClass::SupremeSpadeAce => "至尊黑桃A".to_string(),
            HandClass::FiveSmallCards => "五小牛".to_string(),
            HandClass::FiveFaceCards => "五花牛".to_string(),
            HandClass::Niu { rank, strict_pair } => {
                let name = match rank {
                    0 => "牛牛".to_string(),
                    n => format!("牛{n}"),
                };

                if strict_pair {
                    format!("{name} (对子)")
                } else {
                    name
                }
            }
            HandClass::NoNiu => "没牛".to_string(),
        }
    }

    fn niu_points(rank: u8) -> u8 {
        if rank == 0 { 10 } else { rank }
    }
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A hand split into a three cards base and a two cards pair.
///
/// The values are the effective Niu Niu values after any trey/six swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Split {
    /// The three base cards.
    pub base: [Card; 3],
    /// The base cards effective values.
    pub base_values: [u8; 3],
    /// The two pair cards.
    pub pair: [Card; 2],
    /// The pair cards effective values.
    pub pair_values: [u8; 2],
}

impl Split {
    /// Creates a split that uses the cards printed values.
    pub(super) fn with_card_values(base: [Card; 3], pair: [Card; 2]) -> Self {
        Self {
            base,
            base_values: base.map(|c| c.value(Game::NiuNiu)),
            pair,
            pair_values: pair.map(|c| c.value(Game::NiuNiu)),
        }
    }

    /// The sum of the base effective values.
    pub fn base_sum(&self) -> u8 {
        self.base_values.iter().sum()
    }

    /// The sum of the pair effective values.
    pub fn pair_sum(&self) -> u8 {
        self.pair_values.iter().sum()
    }

    /// Checks if the pair cards have the same rank.
    pub fn is_strict_pair(&self) -> bool {
        self.pair[0].rank() == self.pair[1].rank()
    }

    /// The groups values sorted, splits with the same key are duplicates.
    pub(super) fn key(&self) -> ([u8; 3], [u8; 2]) {
        let mut base = self.base_values;
        let mut pair = self.pair_values;
        base.sort_unstable();
        pair.sort_unstable();
        (base, pair)
    }
}

/// An evaluated Niu Niu hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NiuHand {
    class: HandClass,
    split: Option<Split>,
    score: u32,
    comparison_score: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    alternatives: Vec<NiuHand>,
}

impl NiuHand {
    /// Evaluates a five cards hand.
    ///
    /// The result does not depend on the cards order.
    pub fn eval(cards: &[Card]) -> Result<NiuHand, EvalError> {
        let mut hand: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| EvalError::InvalidHandSize(cards.len()))?;
        hand.sort_unstable();

        let result = special::classify(&hand).unwrap_or_else(|| search::best_split(&hand));

        debug!(
            "Hand {} is {} with {} alternatives",
            hand.map(|c| c.to_string()).join(" "),
            result.class,
            result.alternatives.len()
        );

        Ok(result)
    }

    /// Creates a hand result with no alternatives.
    pub(super) fn new(class: HandClass, split: Option<Split>) -> Self {
        let score = class.score();
        let pair_sum = match class {
            HandClass::Niu { .. } => split.map(|s| s.pair_sum() as u32).unwrap_or_default(),
            _ => 0,
        };

        Self {
            class,
            split,
            score,
            comparison_score: score * 100 + pair_sum,
            alternatives: Vec::new(),
        }
    }

    /// Creates the result for a hand with no valid base.
    pub(super) fn no_niu() -> Self {
        Self::new(HandClass::NoNiu, None)
    }

    /// Sets the alternative results.
    pub(super) fn with_alternatives(mut self, alternatives: Vec<NiuHand>) -> Self {
        self.alternatives = alternatives;
        self
    }

    /// The hand class.
    pub fn class(&self) -> HandClass {
        self.class
    }

    /// The hand split, None for a hand with no valid base.
    pub fn split(&self) -> Option<&Split> {
        self.split.as_ref()
    }

    /// The hand score, see [HandClass::score].
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total ordering key, the score with the pair sum as tie breaker.
    pub fn comparison_score(&self) -> u32 {
        self.comparison_score
    }

    /// The other valid splits sorted from best to worst.
    pub fn alternatives(&self) -> &[NiuHand] {
        &self.alternatives
    }

    /// A short explanation of the result.
    pub fn description(&self) -> String {
        let split = self.split.as_ref();
        match (self.class, split) {
            (HandClass::SupremeSpadeAce, _) => "Spade Ace with a face card and tens".to_string(),
            (HandClass::FiveSmallCards, _) => "All cards under 5 with sum 10 or less".to_string(),
            (HandClass::FiveFaceCards, _) => "All five cards are face cards".to_string(),
            (HandClass::Niu { rank, strict_pair }, Some(split)) => {
                let sum = split.pair_sum();
                let double = split.pair[0].rank();
                match (rank, strict_pair) {
                    (0, true) => format!("Niu Niu with a double {double}"),
                    (0, false) => "Both groups sum to multiples of 10".to_string(),
                    (_, true) => format!("Double {double} with sum {sum}"),
                    (_, false) => format!("Base sums to a multiple of 10, pair sums to {sum}"),
                }
            }
            _ => "No three cards sum to a multiple of 10".to_string(),
        }
    }

    /// A short explanation of the result in Chinese.
    pub fn description_zh(&self) -> String {
        match (self.class, self.split.as_ref()) {
            (HandClass::SupremeSpadeAce, _) => "黑桃A配公仔牌和十".to_string(),
            (HandClass::FiveSmallCards, _) => "五张牌都小于5且总和不超过10".to_string(),
            (HandClass::FiveFaceCards, _) => "五张牌都是公仔牌".to_string(),
            (HandClass::Niu { rank, strict_pair }, Some(split)) => {
                let sum = split.pair_sum();
                let double = split.pair[0].rank();
                match (rank, strict_pair) {
                    (0, true) => format!("牛牛，{double}对"),
                    (0, false) => "两组都是10的倍数".to_string(),
                    (_, true) => format!("{double}对，总和{sum}"),
                    (_, false) => format!("三张牌总和为10的倍数，两张总和为{sum}"),
                }
            }
            _ => "没有三张牌总和为10的倍数".to_string(),
        }
    }
}
