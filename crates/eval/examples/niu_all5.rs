// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example niu_all5
// ```

use std::time::Instant;

use niuniu_eval::*;

/// Counters index for a hand class, doubles are counted separately.
fn class_index(class: HandClass) -> usize {
    match class {
        HandClass::NoNiu => 0,
        HandClass::Niu { rank, strict_pair } => {
            let points = class.display_rank().unwrap_or(rank) as usize;
            if strict_pair { 10 + points } else { points }
        }
        HandClass::FiveFaceCards => 21,
        HandClass::FiveSmallCards => 22,
        HandClass::SupremeSpadeAce => 23,
    }
}

fn main() {
    // Evaluate all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; 24];

    Deck::default().for_each(5, |hand| {
        if let Ok(result) = NiuHand::eval(hand) {
            counts[class_index(result.class())] += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands        {total}");
    println!("Elapsed:           {:.3}s", elapsed);
    println!("Hands/sec:         {:.0}\n", total as f64 / elapsed);

    println!("No Niu:            {}", counts[0]);
    for rank in 1..=10 {
        let name = if rank == 10 { "Niu Niu".to_string() } else { format!("Niu {rank}") };
        println!("{:<19}{}", format!("{name}:"), counts[rank]);
        println!("{:<19}{}", format!("{name} (Double):"), counts[10 + rank]);
    }
    println!("Five Face Cards:   {}", counts[21]);
    println!("Five Small Cards:  {}", counts[22]);
    println!("Supreme Spade Ace: {}", counts[23]);
}
