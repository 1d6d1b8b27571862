// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --features=parallel --example par_niu_all5
// ```

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use niuniu_eval::*;

fn main() {
    // Evaluate all 2.6M hands with 4 parallel tasks.
    const NUM_TASKS: usize = 4;

    // Create per task counters to avoid contention.
    let task_counters = (0..NUM_TASKS)
        .map(|_| (0..=10).map(|_| AtomicU64::new(0)).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let now = Instant::now();

    Deck::default().par_for_each(NUM_TASKS, 5, |task_id, hand| {
        let Ok(result) = NiuHand::eval(hand) else {
            return;
        };

        // Special hands are counted with Niu Niu.
        let points = match result.class() {
            HandClass::NoNiu => 0,
            class => class.display_rank().unwrap_or(10),
        };

        task_counters[task_id][points as usize].fetch_add(1, Ordering::Relaxed);
    });

    let elapsed = now.elapsed().as_secs_f64();

    // Aggregate counters.
    let agg = (0..=10)
        .map(|r| {
            task_counters
                .iter()
                .map(|counts| counts[r].load(Ordering::Relaxed))
                .sum()
        })
        .collect::<Vec<u64>>();

    let total = agg.iter().sum::<u64>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("No Niu:          {}", agg[0]);
    for points in 1..=9 {
        println!("Niu {points}:           {}", agg[points]);
    }
    println!("Niu Niu or more: {}", agg[10]);
}
