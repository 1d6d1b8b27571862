// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Niu Niu hand evaluator and target number solver CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use std::io::{self, IsTerminal};

use niuniu_eval::{Card, Deck, Game, NiuHand};

pub mod report;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    /// Print results as JSON.
    #[clap(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate a Niu Niu hand.
    Eval {
        /// The five cards, rank A23456789TJQK and suit HDCS (e.g. AS KD TH 3C 6S).
        #[clap(required = true)]
        cards: Vec<Card>,
    },
    /// Find the expressions that reach a target number.
    Solve {
        /// The operands, numbers or cards (Ace 1, Jack 11, Queen 12, King 13).
        #[clap(required = true, allow_negative_numbers = true, value_parser = parse_operand)]
        operands: Vec<f64>,
        #[command(flatten)]
        solve: SolveArgs,
    },
    /// Deal five cards and evaluate or solve them.
    Deal {
        /// Seed for a reproducible deal.
        #[clap(long, short)]
        seed: Option<u64>,
        /// The game to play with the dealt cards.
        #[clap(long, short, value_enum, default_value_t = GameArg::Niuniu)]
        game: GameArg,
        #[command(flatten)]
        solve: SolveArgs,
    },
}

#[derive(Debug, clap::Args)]
struct SolveArgs {
    /// The target number.
    #[clap(long, short, default_value_t = 24.0, allow_negative_numbers = true)]
    target: f64,
    /// Maximum number of solutions to print.
    #[clap(long, short, default_value_t = 50)]
    limit: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GameArg {
    /// Evaluate the cards as a Niu Niu hand.
    Niuniu,
    /// Solve the cards values for the target number.
    Solver,
}

/// Parses an operand given as a number or as a card.
fn parse_operand(s: &str) -> Result<f64, String> {
    if let Ok(value) = s.parse::<f64>() {
        if value.is_finite() {
            return Ok(value);
        }
    }

    s.parse::<Card>()
        .map(|card| card.value(Game::NumberSolver) as f64)
        .map_err(|e| format!("not a number, {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    match cli.command {
        Command::Eval { cards } => eval(&cards, cli.json),
        Command::Solve { operands, solve } => self::solve(&operands, &solve, cli.json),
        Command::Deal { seed, game, solve } => {
            let mut deck = match seed {
                Some(seed) => Deck::with_seed(seed),
                None => Deck::new_and_shuffled(&mut rand::rng()),
            };

            let cards = deck.deal_hand(5).context("Not enough cards in the deck")?;
            info!("Dealt {}", report::format_cards(&cards));

            match game {
                GameArg::Niuniu => eval(&cards, cli.json),
                GameArg::Solver => {
                    let operands = cards
                        .iter()
                        .map(|c| c.value(Game::NumberSolver) as f64)
                        .collect::<Vec<_>>();
                    self::solve(&operands, &solve, cli.json)
                }
            }
        }
    }
}

fn eval(cards: &[Card], json: bool) -> Result<()> {
    let hand = NiuHand::eval(cards)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&hand)?);
    } else {
        let styled = io::stdout().is_terminal();
        print!("{}", report::HandReport::new(cards, &hand).styled(styled));
    }

    Ok(())
}

fn solve(operands: &[f64], args: &SolveArgs, json: bool) -> Result<()> {
    let solutions = niuniu_solver::solve(operands, args.target);
    let report = report::SolveReport::new(operands, args.target, &solutions, args.limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operands_parsing() {
        assert_eq!(parse_operand("8"), Ok(8.0));
        assert_eq!(parse_operand("-2.5"), Ok(-2.5));
        assert_eq!(parse_operand("QH"), Ok(12.0));
        assert_eq!(parse_operand("as"), Ok(1.0));
        assert_eq!(parse_operand("10d"), Ok(10.0));
        assert!(parse_operand("inf").is_err());
        assert!(parse_operand("ZZ").is_err());
    }

    #[test]
    fn cli_parsing() {
        let cli = Cli::try_parse_from(["niuniu", "eval", "AS", "KD", "TH", "3C", "6S"]).unwrap();
        assert!(matches!(cli.command, Command::Eval { cards } if cards.len() == 5));

        let cli = Cli::try_parse_from(["niuniu", "solve", "3", "3", "8", "8", "-t", "24"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Solve { operands, solve } if operands == [3.0, 3.0, 8.0, 8.0] && solve.limit == 50
        ));

        let cli = Cli::try_parse_from(["niuniu", "--json", "deal", "--seed", "7", "-g", "solver"]).unwrap();
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Command::Deal { seed: Some(7), game: GameArg::Solver, .. }
        ));

        assert!(Cli::try_parse_from(["niuniu", "eval", "XX"]).is_err());
        assert!(Cli::try_parse_from(["niuniu", "solve"]).is_err());
    }
}
