// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Arithmetic expression trees.
use serde::Serialize;
use std::{fmt, sync::Arc};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Op {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division.
    Div,
}

impl Op {
    /// Applies this operator to two values.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Op::Add => lhs + rhs,
            Op::Sub => lhs - rhs,
            Op::Mul => lhs * rhs,
            Op::Div => lhs / rhs,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        };

        write!(f, "{op}")
    }
}

/// An expression tree, subtrees are shared between the search branches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    /// An operand.
    Num(f64),
    /// A binary operation.
    Binary {
        /// The operator.
        op: Op,
        /// Left operand.
        lhs: Arc<Expr>,
        /// Right operand.
        rhs: Arc<Expr>,
    },
}

impl Expr {
    /// Creates a binary operation node.
    pub fn binary(op: Op, lhs: Arc<Expr>, rhs: Arc<Expr>) -> Self {
        Self::Binary { op, lhs, rhs }
    }

    /// Evaluates the expression.
    pub fn eval(&self) -> f64 {
        match self {
            Expr::Num(v) => *v,
            Expr::Binary { op, lhs, rhs } => op.apply(lhs.eval(), rhs.eval()),
        }
    }

    /// The operands from left to right.
    pub fn leaves(&self) -> Vec<f64> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves(&self, out: &mut Vec<f64>) {
        match self {
            Expr::Num(v) => out.push(*v),
            Expr::Binary { lhs, rhs, .. } => {
                lhs.collect_leaves(out);
                rhs.collect_leaves(out);
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(v) => write!(f, "{v}"),
            Expr::Binary { op, lhs, rhs } => write!(f, "({lhs} {op} {rhs})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(v: f64) -> Arc<Expr> {
        Arc::new(Expr::Num(v))
    }

    #[test]
    fn expr_to_string() {
        assert_eq!(Expr::Num(5.0).to_string(), "5");
        assert_eq!(Expr::Num(2.5).to_string(), "2.5");
        assert_eq!(Expr::Num(-3.0).to_string(), "-3");

        let inner = Arc::new(Expr::binary(Op::Div, num(8.0), num(3.0)));
        let sub = Arc::new(Expr::binary(Op::Sub, num(3.0), inner));
        let expr = Expr::binary(Op::Div, num(8.0), sub);
        assert_eq!(expr.to_string(), "(8 / (3 - (8 / 3)))");
    }

    #[test]
    fn expr_eval() {
        let inner = Arc::new(Expr::binary(Op::Div, num(8.0), num(3.0)));
        let sub = Arc::new(Expr::binary(Op::Sub, num(3.0), inner));
        let expr = Expr::binary(Op::Div, num(8.0), sub);
        assert!((expr.eval() - 24.0).abs() < 1e-9);
        assert_eq!(expr.leaves(), [8.0, 3.0, 8.0, 3.0]);

        let expr = Expr::binary(Op::Mul, num(4.0), num(6.0));
        assert_eq!(expr.eval(), 24.0);
        assert_eq!(Expr::binary(Op::Add, num(1.0), num(2.0)).eval(), 3.0);
        assert_eq!(Expr::binary(Op::Sub, num(1.0), num(2.0)).eval(), -1.0);
    }
}
