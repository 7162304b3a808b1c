//! Success-Rate Sweep
//!
//! Repeats the search many times per board size with incrementing seeds
//! and reports how often a conflict-free placement was found. The run
//! count can be passed as the first argument (default 100).

use queens_evo::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let runs: u64 = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()?
        .unwrap_or(100);

    println!("=== Success Rate: {runs} runs per board size ===\n");

    for n in [8usize, 12, 16, 20] {
        let mut successes = 0u64;
        for run in 0..runs {
            let mut rng = StdRng::seed_from_u64(42 + run);
            let board = Board::generate_default(n, &mut rng)?;

            let result = GeneticSearch::builder()
                .population_size(200)
                .max_generations(2000)
                .build(board)?
                .run(&mut rng)?;

            if result.solved() {
                successes += 1;
            }
        }
        println!("n={n} | solved {successes}/{runs} runs");
    }

    Ok(())
}
