// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Niuniu playing cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use niuniu_cards::{Card, Game, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert_eq!(kd.value(Game::NiuNiu), 10);
//! assert_eq!(kd.value(Game::NumberSolver), 13);
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to deal a 5-cards hand from a seeded deck:
//!
//! ```
//! # use niuniu_cards::Deck;
//! let mut deck = Deck::with_seed(101);
//! let hand = deck.deal_hand(5).unwrap();
//! assert_eq!(hand.len(), 5);
//! assert_eq!(deck.count(), 47);
//! ```
//!
//! to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use niuniu_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! The **`parallel`** feature enables parallel iteration with a given number
//! of tasks, the closure `task_id` can be used to store per task data to
//! reduce contention:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_for_each() {
//! # use std::sync::atomic;
//! # use niuniu_cards::Deck;
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default().par_for_each(4, 5, |task_id, hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 2_598_960);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Game, ParseCardError, Rank, Suit};
