//! Generation throughput: fresh allocation per step vs. double buffering

use std::time::Instant;
use game_of_life::{Grid, SeedParams};

fn seeded(size: usize) -> Grid {
    match Grid::seed(&SeedParams::new(size, size, 30).with_rng_seed(0xBEEF)) {
        Ok(grid) => grid,
        Err(e) => panic!("benchmark grid {size}x{size}: {e}"),
    }
}

fn benchmark_advance(size: usize, iterations: u32) -> f64 {
    let mut grid = seeded(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.advance();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_double_buffer(size: usize, iterations: u32) -> f64 {
    let mut grid = seeded(size);
    let mut back = grid.clone();

    let start = Instant::now();
    for _ in 0..iterations {
        grid.advance_into(&mut back);
        std::mem::swap(&mut grid, &mut back);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Generation Benchmark ===\n");

    let sizes = [60, 120, 250, 500, 1000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>14}", "Size", "Advance", "DoubleBuf", "Cells/sec");
    println!("{:-<52}", "");

    for size in sizes {
        let advance_ms = benchmark_advance(size, iterations);
        let buffered_ms = benchmark_double_buffer(size, iterations);
        let cells_per_sec = (size * size) as f64 / (buffered_ms.max(f64::EPSILON) / 1000.0);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>13.1}M",
            format!("{}x{}", size, size),
            advance_ms,
            buffered_ms,
            cells_per_sec / 1_000_000.0
        );
    }
}
