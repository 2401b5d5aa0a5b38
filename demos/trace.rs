//! Generate a maze, run a search through it and print the final frame.
//!
//! Run: cargo run --bin trace -- [algorithm] [width] [height] [seed]
//!
//! Set `RUST_LOG=debug` to see maze attempts and search summaries.

use std::collections::HashSet;
use std::error::Error;

use gridtrace_core::{CellKey, Point, Range, WallSet};
use gridtrace_maze::MazeGen;
use gridtrace_paths::{Algorithm, AlgorithmStep};
use rand::SeedableRng;
use rand::rngs::StdRng;

struct Args {
    algorithm: Algorithm,
    width: i32,
    height: i32,
    seed: Option<u64>,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut it = std::env::args().skip(1);
    let algorithm = match it.next() {
        Some(s) => s.parse()?,
        None => Algorithm::AStarManhattan,
    };
    let width: i32 = it.next().map(|s| s.parse()).transpose()?.unwrap_or(31);
    let height: i32 = it.next().map(|s| s.parse()).transpose()?.unwrap_or(15);
    let seed: Option<u64> = it.next().map(|s| s.parse()).transpose()?;
    Ok(Args {
        algorithm,
        width,
        height,
        seed,
    })
}

fn render(width: i32, height: i32, walls: &WallSet, step: &AlgorithmStep) -> String {
    let path: HashSet<Point> = step.path.iter().copied().collect();
    let (start, end) = (Point::new(0, 0), Point::new(width - 1, height - 1));
    let mut out = String::with_capacity(((width + 1) * height) as usize);
    for p in Range::grid(width, height) {
        let key = CellKey::new(p);
        let c = if p == start {
            'S'
        } else if p == end {
            'E'
        } else if walls.contains(&key) {
            '#'
        } else if path.contains(&p) {
            '*'
        } else if step.frontier.contains(&key) {
            '+'
        } else if step.visited.contains(&key) {
            '.'
        } else {
            ' '
        };
        out.push(c);
        if p.x == width - 1 {
            out.push('\n');
        }
    }
    out
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!(
        "{} on a {}x{} maze, seed {seed}",
        args.algorithm,
        args.width,
        args.height
    );

    let (start, end) = (Point::new(0, 0), Point::new(args.width - 1, args.height - 1));
    let mut mg = MazeGen::new(StdRng::seed_from_u64(seed));
    let walls = mg.generate(args.width, args.height, start, end)?;
    log::info!("maze ready after {} attempt(s)", mg.attempts());

    let mut count = 0usize;
    let mut last = None;
    for step in args.algorithm.search(start, end, args.width, args.height, &walls)? {
        count += 1;
        last = Some(step);
    }
    let Some(last) = last else {
        return Err("search produced no steps".into());
    };

    print!("{}", render(args.width, args.height, &walls, &last));
    println!(
        "{}: {:?} in {count} steps, {} moves, {} cells visited",
        args.algorithm,
        last.status,
        last.path_moves(),
        last.visited.len()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = parse_args().and_then(run);
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
