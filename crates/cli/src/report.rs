// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Results formatting for the terminal.
use crossterm::style::Stylize;
use serde::Serialize;
use std::fmt;

use niuniu_eval::{Card, HandClass, NiuHand, Split};

/// Formats cards separated by spaces.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats values as a sum, e.g. `5 + 3 = 8`.
fn format_sum(values: &[u8]) -> String {
    let terms = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" + ");
    let sum = values.iter().map(|&v| v as u32).sum::<u32>();
    format!("{terms} = {sum}")
}

fn format_split(split: &Split) -> String {
    format!(
        "base {} ({}), pair {} ({})",
        format_cards(&split.base),
        format_sum(&split.base_values),
        format_cards(&split.pair),
        format_sum(&split.pair_values)
    )
}

fn format_class(class: HandClass, styled: bool) -> String {
    let name = format!("{} ({})", class.name(), class.name_zh());
    if !styled {
        return name;
    }

    match class {
        HandClass::NoNiu => name.dark_grey().to_string(),
        HandClass::Niu { rank, .. } if rank != 0 => name.bold().to_string(),
        _ => name.bold().yellow().to_string(),
    }
}

/// An evaluated hand with its alternatives.
#[derive(Debug)]
pub struct HandReport<'a> {
    cards: &'a [Card],
    hand: &'a NiuHand,
    styled: bool,
}

impl<'a> HandReport<'a> {
    /// Creates a plain text report for the hand evaluated from the given cards.
    pub fn new(cards: &'a [Card], hand: &'a NiuHand) -> Self {
        Self {
            cards,
            hand,
            styled: false,
        }
    }

    /// Enables terminal colors for the result.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }
}

impl fmt::Display for HandReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hand = self.hand;

        writeln!(f, "Hand:   {}", format_cards(self.cards))?;
        writeln!(f, "Result: {}", format_class(hand.class(), self.styled))?;
        if let Some(points) = hand.class().display_rank() {
            let niu_niu = if points == 10 { " (Niu Niu)" } else { "" };
            writeln!(f, "Rank:   {points}{niu_niu}")?;
        }
        writeln!(f, "Score:  {}", hand.score())?;
        writeln!(f, "        {}", hand.description())?;
        writeln!(f, "        {}", hand.description_zh())?;

        if let Some(split) = hand.split() {
            writeln!(f, "Split:  {}", format_split(split))?;
        }

        if !hand.alternatives().is_empty() {
            writeln!(f, "Alternatives:")?;
            for alt in hand.alternatives() {
                if let Some(split) = alt.split() {
                    writeln!(f, "  {:<18} {}", alt.class().name(), format_split(split))?;
                }
            }
        }

        Ok(())
    }
}

/// The solutions found for a target number.
#[derive(Debug, Serialize)]
pub struct SolveReport<'a> {
    operands: &'a [f64],
    target: f64,
    total: usize,
    solutions: &'a [String],
}

impl<'a> SolveReport<'a> {
    /// Creates a report that shows at most `limit` solutions.
    pub fn new(operands: &'a [f64], target: f64, solutions: &'a [String], limit: usize) -> Self {
        Self {
            operands,
            target,
            total: solutions.len(),
            solutions: &solutions[..limit.min(solutions.len())],
        }
    }
}

impl fmt::Display for SolveReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operands = self
            .operands
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        if self.total == 0 {
            return writeln!(f, "No solutions for [{operands}] with target {}", self.target);
        }

        writeln!(
            f,
            "Solutions found for [{operands}] with target {}: {}",
            self.target, self.total
        )?;

        for solution in self.solutions {
            writeln!(f, "  {solution}")?;
        }

        if self.solutions.len() < self.total {
            writeln!(
                f,
                "Showing first {} of {} solutions",
                self.solutions.len(),
                self.total
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn hand_report() {
        let cards = cards("9H 6D 5C 7S 4H");
        let hand = NiuHand::eval(&cards).unwrap();
        let out = HandReport::new(&cards, &hand).to_string();

        assert!(out.starts_with("Hand:   9H 6D 5C 7S 4H\n"));
        assert!(out.contains("Rank:   8\n"));
        assert!(out.contains("Score:  1800\n"));
        assert!(out.contains("        三张牌总和为10的倍数，两张总和为8\n"));
        assert!(out.contains("Split:  base 4H 7S 9H (4 + 7 + 9 = 20), pair 5C 6D (5 + 3 = 8)\n"));
        assert!(out.contains("Alternatives:\n"));
        assert!(out.contains("base 5C 6D 9H (5 + 6 + 9 = 20), pair 4H 7S (4 + 7 = 11)"));
    }

    #[test]
    fn styled_result() {
        let cards = cards("5H 5D KC QS TH");
        let hand = NiuHand::eval(&cards).unwrap();

        let plain = HandReport::new(&cards, &hand).to_string();
        assert!(!plain.contains('\x1b'));
        assert!(plain.contains("Result: Niu Niu (Double) (牛牛 (对子))\n"));

        let styled = HandReport::new(&cards, &hand).styled(true).to_string();
        assert!(styled.contains("\x1b["));
        assert!(styled.contains("Niu Niu (Double)"));
    }

    #[test]
    fn niu_niu_rank_shown_as_ten() {
        let cards = cards("5H 5D KC QS TH");
        let hand = NiuHand::eval(&cards).unwrap();
        assert!(HandReport::new(&cards, &hand).to_string().contains("Rank:   10 (Niu Niu)\n"));
    }

    #[test]
    fn no_niu_report() {
        let cards = cards("KD QC 9S 8H 4D");
        let hand = NiuHand::eval(&cards).unwrap();
        let out = HandReport::new(&cards, &hand).to_string();
        assert!(out.contains("Score:  0\n"));
        assert!(!out.contains("Split:"));
        assert!(!out.contains("Rank:"));
    }

    #[test]
    fn solve_report() {
        let operands = [3.0, 3.0, 8.0, 8.0];
        let solutions = vec!["(a)".to_string(), "(b)".to_string(), "(c)".to_string()];

        let report = SolveReport::new(&operands, 24.0, &solutions, 2);
        let out = report.to_string();
        assert!(out.starts_with("Solutions found for [3, 3, 8, 8] with target 24: 3\n"));
        assert!(out.contains("  (a)\n  (b)\n"));
        assert!(!out.contains("(c)"));
        assert!(out.ends_with("Showing first 2 of 3 solutions\n"));

        let report = SolveReport::new(&operands, 24.0, &solutions, 50);
        assert!(!report.to_string().contains("Showing"));

        let report = SolveReport::new(&[1.0], 5.0, &[], 50);
        assert_eq!(report.to_string(), "No solutions for [1] with target 5\n");
    }
}
