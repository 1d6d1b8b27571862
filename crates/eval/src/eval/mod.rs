// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Niu Niu hand evaluator.
//!
//! The evaluator first checks the special hands in priority order (Supreme
//! Spade Ace, Five Face Cards, Five Small Cards) and if none matches it tries
//! all ten ways to split the five cards into a three cards base and a two cards
//! pair, applying the trey/six substitution to both groups, and keeps the best
//! split with the others reported as alternatives.
use thiserror::Error;

mod hand;
mod search;
mod special;

pub use hand::{HandClass, NiuHand, Split};

/// The number of cards in a Niu Niu hand.
pub const HAND_SIZE: usize = 5;

/// Evaluator errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The hand does not have exactly five cards.
    #[error("invalid hand size {0}, a Niu Niu hand has 5 cards")]
    InvalidHandSize(usize),
}
