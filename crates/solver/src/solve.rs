// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Exhaustive expressions search.
use log::{debug, warn};
use std::sync::Arc;

use crate::expr::{Expr, Op};

/// Maximum distance from the target for an expression to be a solution.
pub const TOLERANCE: f64 = 1e-6;

/// Operands count the search is meant for.
const MAX_OPERANDS: usize = 5;

/// A working item, an expression with its value.
#[derive(Debug, Clone)]
struct Item {
    value: f64,
    expr: Arc<Expr>,
}

impl Item {
    fn combine(op: Op, lhs: &Item, rhs: &Item) -> Item {
        Item {
            value: op.apply(lhs.value, rhs.value),
            expr: Arc::new(Expr::binary(op, lhs.expr.clone(), rhs.expr.clone())),
        }
    }
}

/// Returns all the expressions that use every operand once and evaluate to
/// the target within [TOLERANCE].
///
/// No operands give no expressions, a single operand is a solution if it is
/// equal to the target.
pub fn solve_exprs(operands: &[f64], target: f64) -> Vec<Expr> {
    if operands.len() > MAX_OPERANDS {
        warn!(
            "Solving with {} operands, the search is meant for at most {MAX_OPERANDS}",
            operands.len()
        );
    }

    let items = operands
        .iter()
        .map(|&value| Item {
            value,
            expr: Arc::new(Expr::Num(value)),
        })
        .collect::<Vec<_>>();

    let mut solutions = Vec::new();
    if !items.is_empty() {
        search(&items, target, &mut solutions);
    }

    debug!(
        "Found {} solutions for {operands:?} with target {target}",
        solutions.len()
    );

    solutions
}

/// Returns the solutions of [solve_exprs] as strings.
pub fn solve(operands: &[f64], target: f64) -> Vec<String> {
    solve_exprs(operands, target)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Replaces every pair of items with each of their combinations and recurses
/// until a single item is left.
fn search(items: &[Item], target: f64, solutions: &mut Vec<Expr>) {
    if let [item] = items {
        if (item.value - target).abs() < TOLERANCE {
            solutions.push(Expr::clone(&item.expr));
        }

        return;
    }

    let n = items.len();
    let mut next = Vec::with_capacity(n - 1);

    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = (&items[i], &items[j]);

            let mut combined = vec![
                Item::combine(Op::Add, a, b),
                Item::combine(Op::Sub, a, b),
                Item::combine(Op::Sub, b, a),
                Item::combine(Op::Mul, a, b),
            ];

            if b.value != 0.0 {
                combined.push(Item::combine(Op::Div, a, b));
            }

            if a.value != 0.0 {
                combined.push(Item::combine(Op::Div, b, a));
            }

            for item in combined {
                next.clear();
                next.extend(
                    items
                        .iter()
                        .enumerate()
                        .filter(|&(k, _)| k != i && k != j)
                        .map(|(_, item)| item.clone()),
                );
                next.push(item);

                search(&next, target, solutions);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use niuniu_cards::{Card, Game};

    fn sorted(mut values: Vec<f64>) -> Vec<f64> {
        values.sort_by(f64::total_cmp);
        values
    }

    #[test]
    fn solve_24() {
        let operands = [3.0, 3.0, 8.0, 8.0];
        let exprs = solve_exprs(&operands, 24.0);
        assert!(!exprs.is_empty());

        for expr in &exprs {
            assert!((expr.eval() - 24.0).abs() < TOLERANCE, "{expr}");
            assert_eq!(sorted(expr.leaves()), sorted(operands.to_vec()));
        }

        let solutions = solve(&operands, 24.0);
        assert_eq!(solutions.len(), exprs.len());
        assert!(solutions.iter().any(|s| s == "(8 / (3 - (8 / 3)))"));
    }

    #[test]
    fn unreachable_target() {
        assert!(solve(&[1.0, 1.0, 1.0, 1.0], 5.0).is_empty());
        assert!(!solve(&[1.0, 1.0, 1.0, 1.0], 4.0).is_empty());
    }

    #[test]
    fn single_operand() {
        assert_eq!(solve(&[5.0], 5.0), ["5"]);
        assert_eq!(solve(&[2.5], 2.5), ["2.5"]);
        assert!(solve(&[5.0], 6.0).is_empty());
        assert_eq!(solve(&[5.0], 5.0 + TOLERANCE / 2.0), ["5"]);
    }

    #[test]
    fn no_operands() {
        assert!(solve(&[], 0.0).is_empty());
        assert!(solve(&[], 24.0).is_empty());
    }

    #[test]
    fn two_operands() {
        assert_eq!(solve(&[1.0, 2.0], 3.0), ["(1 + 2)"]);
        assert_eq!(solve(&[1.0, 2.0], 0.5), ["(1 / 2)"]);
        assert_eq!(solve(&[1.0, 2.0], 1.0), ["(2 - 1)"]);

        // Equivalent expressions are all reported.
        assert_eq!(solve(&[2.0, 2.0], 4.0), ["(2 + 2)", "(2 * 2)"]);
    }

    #[test]
    fn no_division_by_zero() {
        assert_eq!(solve(&[0.0, 5.0], 0.0), ["(0 * 5)", "(0 / 5)"]);

        for expr in solve_exprs(&[0.0, 0.0, 3.0], 0.0) {
            assert!(expr.eval().is_finite(), "{expr}");
        }
    }

    #[test]
    fn non_integer_target() {
        let solutions = solve(&[1.0, 3.0, 4.0], 0.75);
        assert!(solutions.iter().any(|s| s == "(1 * (3 / 4))"));

        for expr in solve_exprs(&[1.0, 3.0, 4.0], 0.75) {
            assert!((expr.eval() - 0.75).abs() < TOLERANCE);
        }
    }

    #[test]
    fn card_operands() {
        // Jack, Queen, King, and Ace as 11, 12, 13, and 1.
        let operands = ["JH", "QD", "KC", "AS"]
            .map(|c| c.parse::<Card>().unwrap().value(Game::NumberSolver) as f64);
        assert_eq!(operands, [11.0, 12.0, 13.0, 1.0]);

        let solutions = solve(&operands, 24.0);
        assert!(!solutions.is_empty());
    }

    #[test]
    fn five_operands() {
        let exprs = solve_exprs(&[1.0, 2.0, 3.0, 4.0, 5.0], 24.0);
        assert!(!exprs.is_empty());

        for expr in &exprs {
            assert!((expr.eval() - 24.0).abs() < TOLERANCE, "{expr}");
            assert_eq!(expr.leaves().len(), 5);
        }
    }
}
