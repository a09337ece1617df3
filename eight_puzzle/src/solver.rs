use crate::board::heuristic::Heuristic;
use crate::board::state::{Board, InvalidStartState};
use std::collections::HashSet;

/// Hard cap on the number of states popped from the frontier per search run.
pub const MAX_MOVES: u32 = 5000;

/// Search strategy: what the frontier is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Orders the frontier by the heuristic value alone.
    GreedyBestFirst,
    /// Orders the frontier by heuristic value plus path cost.
    AStar,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::GreedyBestFirst => "greedy",
            Strategy::AStar => "A*",
        }
    }
}

/// Node of the search tree. The parent is an index into the solver's node
/// arena; the chain of parents forms a tree with the start board at its root.
struct SearchNode {
    board: Board,
    parent: Option<usize>,
}

/// Frontier entry: arena index of a node plus its score under the active
/// strategy. The score is computed once, when the entry is created.
#[derive(Clone, Copy)]
struct Scored {
    node: usize,
    score: f64,
}

/// Outcome of a single search run.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Number of states popped from the frontier, the goal included.
    pub states_explored: u32,
    /// Boards from the first move up to the goal (the start board excluded),
    /// or `None` if the search ended without reaching the goal.
    pub solution: Option<Vec<Board>>,
}

impl SearchReport {
    /// `true` when the search gave up by exceeding [`MAX_MOVES`] rather than
    /// by draining the frontier.
    pub fn budget_exhausted(&self) -> bool {
        self.solution.is_none() && self.states_explored > MAX_MOVES
    }
}

/// Best-first searcher over 8-puzzle states.
///
/// One loop serves both strategies: they differ only in whether the path
/// cost is added to the heuristic when the frontier is ordered.
pub struct BestFirstSolver {
    strategy: Strategy,
    heuristic: Heuristic,
}

impl BestFirstSolver {
    pub fn new(strategy: Strategy, heuristic: Heuristic) -> Self {
        Self { strategy, heuristic }
    }

    #[inline]
    fn score(&self, board: &Board) -> f64 {
        let h = self.heuristic.evaluate(board);
        match self.strategy {
            Strategy::GreedyBestFirst => h,
            Strategy::AStar => h + board.cost() as f64,
        }
    }

    /// Searches from `start` towards the goal configuration.
    ///
    /// Pops the best-scored state, expands it, and keeps the frontier sorted
    /// ascending by score; the sort is stable, so states with equal scores
    /// are expanded in insertion order. States already expanded are never
    /// put back on the frontier, even if a cheaper path to them turns up
    /// later. The run stops as soon as more than [`MAX_MOVES`] states have
    /// been popped.
    pub fn solve(&self, start: Board) -> SearchReport {
        let mut nodes = vec![SearchNode { board: start, parent: None }];
        let mut frontier = vec![Scored { node: 0, score: self.score(&start) }];
        let mut explored = HashSet::<Board>::new();
        let mut states_explored = 0;

        while !frontier.is_empty() && states_explored <= MAX_MOVES {
            let current = frontier.remove(0);
            states_explored += 1;

            let board = nodes[current.node].board;
            if board.is_goal() {
                return SearchReport {
                    states_explored,
                    solution: Some(path_from_root(&nodes, current.node)),
                };
            }
            explored.insert(board);

            for successor in board.successors() {
                let score = self.score(&successor);
                if let Some(i) = frontier
                    .iter()
                    .position(|entry| nodes[entry.node].board == successor)
                {
                    // The state is already awaiting expansion: keep whichever
                    // copy scores lower, in place.
                    if frontier[i].score > score {
                        nodes.push(SearchNode { board: successor, parent: Some(current.node) });
                        frontier[i] = Scored { node: nodes.len() - 1, score };
                    }
                } else if !explored.contains(&successor) {
                    nodes.push(SearchNode { board: successor, parent: Some(current.node) });
                    frontier.push(Scored { node: nodes.len() - 1, score });
                }
            }

            frontier.sort_by(|a, b| a.score.total_cmp(&b.score));
        }

        SearchReport { states_explored, solution: None }
    }
}

/// Boards on the path from the root to `last`, in forward order. Walking
/// stops at the node with no parent, so the root board is not included.
fn path_from_root(nodes: &[SearchNode], last: usize) -> Vec<Board> {
    let mut path = Vec::new();
    let mut current = last;
    while let Some(parent) = nodes[current].parent {
        path.push(nodes[current].board);
        current = parent;
    }
    path.reverse();
    path
}

/// Searches for a solution of the puzzle given as a flattened row-major tile
/// sequence (0 denotes the blank). The sequence is validated before the
/// search starts.
pub fn search(
    strategy: Strategy,
    heuristic: Heuristic,
    tiles: &[u8],
) -> Result<SearchReport, InvalidStartState> {
    let start = Board::from_tiles(tiles)?;
    Ok(BestFirstSolver::new(strategy, heuristic).solve(start))
}
