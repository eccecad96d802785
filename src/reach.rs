//! Reachability search over the maze.
//!
//! Two cells are connected when they are adjacent and each tile opens
//! toward the other. The search is a breadth-first flood fill from the
//! pawn's cell that records, for every cell it discovers, the cell it was
//! reached from. It stops as soon as the goal is discovered.
//!
//! When the goal cannot be reached, [`Reachability::best_approach`] walks
//! toward whichever reachable cell lies closest to it.

use std::collections::VecDeque;

use crate::board::{Board, Coordinate};
use crate::constants::CELL_COUNT;
use crate::error::Result;
use crate::tile::Direction;

/// How a cell was first discovered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Visit {
    Start,
    From(Coordinate),
}

/// The cell one step away in `direction`, if a pawn can walk there.
pub fn open_step(
    board: &Board,
    from: Coordinate,
    direction: Direction,
) -> Result<Option<Coordinate>> {
    let Some(to) = from.on_board()?.step(direction) else {
        return Ok(None);
    };
    let open = board.tile(from).has_exit(direction)?
        && board.tile(to).has_exit(direction.opposite())?;
    Ok(open.then_some(to))
}

/// Adjacent cells mutually connected to `c`, in N, E, S, W order.
pub fn neighbors(board: &Board, c: Coordinate) -> Result<Vec<Coordinate>> {
    c.on_board()?;
    let mut out = Vec::with_capacity(4);
    for direction in Direction::ALL {
        if let Some(next) = open_step(board, c, direction)? {
            out.push(next);
        }
    }
    Ok(out)
}

/// Flood fill from `start`, stopping early once `goal` is discovered.
pub fn reachable(board: &Board, start: Coordinate, goal: Coordinate) -> Result<Reachability> {
    start.on_board()?;
    goal.on_board()?;
    let mut came_from = vec![None; CELL_COUNT];
    came_from[start.index()] = Some(Visit::Start);
    let mut queue = VecDeque::from([start]);

    if start != goal {
        'search: while let Some(current) = queue.pop_front() {
            for next in neighbors(board, current)? {
                if came_from[next.index()].is_some() {
                    continue;
                }
                came_from[next.index()] = Some(Visit::From(current));
                if next == goal {
                    break 'search;
                }
                queue.push_back(next);
            }
        }
    }

    Ok(Reachability {
        start,
        goal,
        came_from,
    })
}

/// Any walkable path from `start` to `end`.
pub fn find_path(
    board: &Board,
    start: Coordinate,
    end: Coordinate,
) -> Result<Option<Vec<Coordinate>>> {
    Ok(reachable(board, start, end)?.path_to(end))
}

/// Result of a [`reachable`] search.
#[derive(Clone, Debug)]
pub struct Reachability {
    start: Coordinate,
    goal: Coordinate,
    came_from: Vec<Option<Visit>>,
}

/// A path toward the goal and how far its last cell is from the goal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Approach {
    pub path: Vec<Coordinate>,
    pub distance: usize,
}

impl Approach {
    pub fn reached(&self) -> bool {
        self.distance == 0
    }

    /// Last cell of the path.
    pub fn destination(&self) -> Option<Coordinate> {
        self.path.last().copied()
    }
}

impl Reachability {
    pub fn contains(&self, c: Coordinate) -> bool {
        c.is_on_board() && self.came_from[c.index()].is_some()
    }

    pub fn reached_goal(&self) -> bool {
        self.contains(self.goal)
    }

    /// Discovered cells in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.came_from
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_some())
            .map(|(i, _)| Coordinate::from_index(i))
    }

    /// Path from the start to `target`, both ends included.
    pub fn path_to(&self, target: Coordinate) -> Option<Vec<Coordinate>> {
        self.contains(target).then(|| self.trace(target))
    }

    fn trace(&self, target: Coordinate) -> Vec<Coordinate> {
        let mut path = vec![target];
        let mut current = target;
        while let Some(Visit::From(previous)) = self.came_from[current.index()] {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        path
    }

    /// Smallest Manhattan distance from any discovered cell to the goal.
    pub fn closest_distance(&self) -> usize {
        self.coordinates()
            .map(|c| c.manhattan(self.goal))
            .min()
            .unwrap_or(usize::MAX)
    }

    /// Path to the goal, or else to a discovered cell closest to it.
    ///
    /// Ties between equally close cells are broken uniformly with `rng`.
    pub fn best_approach(&self, rng: &mut fastrand::Rng) -> Approach {
        if self.reached_goal() {
            return Approach {
                path: self.trace(self.goal),
                distance: 0,
            };
        }

        let distance = self.closest_distance();
        let closest: Vec<Coordinate> = self
            .coordinates()
            .filter(|c| c.manhattan(self.goal) == distance)
            .collect();
        let target = match closest.len() {
            0 => self.start,
            1 => closest[0],
            n => closest[rng.usize(..n)],
        };
        Approach {
            path: self.trace(target),
            distance,
        }
    }
}
