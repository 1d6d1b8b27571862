// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Target number puzzle solver.
//!
//! Finds every fully parenthesized expression that uses each operand exactly
//! once with the four arithmetic operators and evaluates to a target number:
//!
//! ```
//! # use niuniu_solver::solve;
//! let solutions = solve(&[3.0, 3.0, 8.0, 8.0], 24.0);
//! assert!(solutions.iter().any(|s| s == "(8 / (3 - (8 / 3)))"));
//!
//! assert!(solve(&[1.0, 1.0, 1.0, 1.0], 5.0).is_empty());
//! ```
//!
//! The search is exhaustive and does not remove expressions that only differ
//! by operands order or by associativity, it is meant for at most five
//! operands.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod expr;
pub use expr::{Expr, Op};

mod solve;
pub use solve::{TOLERANCE, solve, solve_exprs};
