// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Niu Niu hand evaluator.
//!
//! A Niu Niu hand has five cards, the hand qualifies if three of them (the
//! base) add up to a multiple of ten and is then ranked by the ones digit of
//! the remaining two cards (the pair). A trey may count as a six and a six as
//! a trey, a pair of cards with the same rank (a double) beats any other pair,
//! and three special hands beat everything else.
//!
//! To use the evaluator create a hand and use [NiuHand::eval] to get its
//! classification together with the alternative ways to split the hand:
//!
//! ```
//! # use niuniu_eval::*;
//! let cards = ["9H", "6D", "5C", "7S", "4H"]
//!     .iter()
//!     .map(|c| c.parse::<Card>().unwrap())
//!     .collect::<Vec<_>>();
//!
//! let hand = NiuHand::eval(&cards).unwrap();
//! assert_eq!(hand.class(), HandClass::Niu { rank: 8, strict_pair: false });
//! assert_eq!(hand.alternatives().len(), 2);
//!
//! assert!(NiuHand::eval(&cards[..4]).is_err());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HandClass, NiuHand, Split};

// Reexport cards types.
pub use niuniu_cards::{Card, Deck, Game, Rank, Suit};
