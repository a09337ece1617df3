#![doc = include_str!("../README.md")]

use cpu_time::ProcessTime;
use eight_puzzle::board::heuristic::Heuristic;
use eight_puzzle::board::neighbors::{neighbors_of, NEIGHBORS};
use eight_puzzle::board::state::Board;
use eight_puzzle::solver::{BestFirstSolver, SearchReport, Strategy, MAX_MOVES};
use fsum::FSum;
use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::io::Write;

/// Start configurations used by the `examples` case.
const EXAMPLE_STATES: [[u8; 9]; 2] = [
    [3, 6, 5, 2, 1, 4, 7, 8, 0],
    [1, 3, 2, 6, 7, 5, 4, 8, 0],
];

const STRATEGIES: [Strategy; 2] = [Strategy::GreedyBestFirst, Strategy::AStar];

enum Args {
    Run(HashMap<String, bool>),
    Help(Vec<String>),
}

impl Args {
    fn new() -> Self {
        let args: HashMap<String, bool> = env::args().skip(1).map(|s| (s, false)).collect();
        if args.is_empty() { Self::Help(Vec::new()) } else { Self::Run(args) }
    }

    fn case(&mut self, s: &str) -> bool {
        match self {
            &mut Self::Run(ref mut set) => {
                if let Some(used) = set.get_mut(s) {
                    *used = true;
                    println!("---=== run {} ===---", s);
                    true
                } else { false }
            }
            &mut Self::Help(ref mut v) => { v.push(s.to_string()); false }
        }
    }
}

impl Drop for Args {
    fn drop(&mut self) {
        match self {
            Self::Run(ref set) => {
                for (k, used) in set {
                    if !used { eprintln!("Unrecognized argument: {}", k); }
                }
            }
            Self::Help(ref v) => {
                println!("Acceptable arguments:");
                for a in v { println!(" {}", a); }
            }
        }
    }
}

/// Returns a random reachable puzzle state, generated by a random walk of the
/// blank starting from the goal. The walk never steps straight back, which
/// also randomizes the number of effective moves made.
fn rand_state(rng: &mut ChaCha8Rng) -> Board {
    let mut board = Board::goal();
    let mut blank = board.blank_position();
    let mut prev_blank = u8::MAX;
    for _ in 0..1000 {
        let new_blank = *neighbors_of(&NEIGHBORS, blank).choose(rng).unwrap();
        if new_blank == prev_blank { continue; }
        prev_blank = blank;
        board.move_blank(new_blank);
        blank = new_blank;
    }
    board
}

/// Runs one search and measures the CPU time it took.
fn run_search(strategy: Strategy, heuristic: Heuristic, start: Board) -> (SearchReport, f64) {
    let solver = BestFirstSolver::new(strategy, heuristic);
    let start_moment = ProcessTime::try_now().expect("Getting process time failed");
    let report = solver.solve(start);
    let seconds = start_moment.try_elapsed().expect("Getting process time failed").as_secs_f64();
    (report, seconds)
}

fn mean(values: &[usize]) -> f64 {
    FSum::with_all(values.iter().map(|&v| v as f64)).value() / values.len() as f64
}

/// Solves the two example configurations with every strategy and heuristic,
/// printing each solution path and per-heuristic step averages.
fn run_examples() {
    for heuristic in Heuristic::ALL {
        let mut steps_per_strategy: [Vec<usize>; 2] = [Vec::new(), Vec::new()];
        for tiles in EXAMPLE_STATES {
            let start = Board::from_tiles(&tiles).unwrap();
            for (strategy_idx, &strategy) in STRATEGIES.iter().enumerate() {
                println!("{:=^68}", format!(" {} with {} ", strategy.name(), heuristic.name()));
                println!("{}", start);
                let (report, seconds) = run_search(strategy, heuristic, start);
                match report.solution {
                    Some(path) => {
                        for board in &path { println!("{}", board); }
                        println!("Solved in {} steps", path.len());
                        println!("Explored {} states", report.states_explored);
                        steps_per_strategy[strategy_idx].push(path.len());
                    }
                    None => println!("Reached maximum number of moves of {}", MAX_MOVES),
                }
                println!("  {:.4} cpu seconds", seconds);
                println!();
            }
        }
        println!("{:=^68}", format!(" {} summary ", heuristic.name()));
        for (strategy_idx, &strategy) in STRATEGIES.iter().enumerate() {
            println!("Average number of steps with {}: {}",
                     strategy.name(), mean(&steps_per_strategy[strategy_idx]));
        }
        println!();
    }
}

/// Solves `how_many` random reachable states with every strategy and
/// heuristic, printing aggregates and writing per-case rows to a CSV file.
fn run_random(how_many: usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(123);
    let states: Vec<Board> = (0..how_many).map(|_| rand_state(&mut rng)).collect();

    let file_name = format!("random_{}.csv", how_many);
    println!("{}", file_name);
    let mut file = File::create(&file_name).unwrap();
    writeln!(file, "strategy,heuristic,state_index,solved,steps,explored,time").unwrap();

    for &strategy in &STRATEGIES {
        for heuristic in Heuristic::ALL {
            let mut steps = Vec::new();
            let mut explored_total = 0u64;
            let mut total_seconds = 0f64;
            for (state_idx, &start) in states.iter().enumerate() {
                let (report, seconds) = run_search(strategy, heuristic, start);
                explored_total += report.states_explored as u64;
                total_seconds += seconds;
                let step_count = report.solution.as_ref().map_or(0, |path| path.len());
                if report.solution.is_some() { steps.push(step_count); }
                writeln!(file, "{},{},{},{},{},{},{}",
                         strategy.name(), heuristic.name(), state_idx,
                         report.solution.is_some(), step_count,
                         report.states_explored, seconds).unwrap();
            }
            println!("{} with {}: {}/{} solved, {:.2} steps/solution, {:.0} states and {:.4} sec per case",
                     strategy.name(), heuristic.name(), steps.len(), states.len(),
                     mean(&steps), explored_total as f64 / states.len() as f64,
                     total_seconds / states.len() as f64);
        }
    }
}

fn main() {
    let mut args = Args::new();

    if args.case("examples") {
        run_examples();
    }
    if args.case("random") {
        run_random(100);
    }
}
