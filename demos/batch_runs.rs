//! Batch Benchmark
//!
//! Runs the genetic search across a fixed list of board sizes with a
//! seeded random stream and prints a per-run line plus a summary table.

use std::time::Instant;

use queens_evo::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Batch Runs: N-Queens with blocked cells ===\n");

    let sizes = [1usize, 2, 5, 8, 9, 10, 12, 16, 20];
    let mut results = Vec::with_capacity(sizes.len());

    for &n in &sizes {
        let mut rng = StdRng::seed_from_u64(42);
        let board = Board::generate_default(n, &mut rng)?;

        let search = GeneticSearch::builder()
            .population_size(200)
            .max_generations(2000)
            .build(board)?;

        let start = Instant::now();
        let result = search.run(&mut rng)?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        println!(
            "n={n} | solved: {} | generations: {} | time: {elapsed_ms:.2} ms",
            result.solved(),
            result.generations
        );
        results.push((n, result.solved(), result.generations, elapsed_ms));
    }

    println!("\n  n | solved | generations |       time");
    for (n, solved, generations, elapsed_ms) in results {
        println!("{n:>3} | {solved:>6} | {generations:>11} | {elapsed_ms:>7.2} ms");
    }

    Ok(())
}
