//! Move search for one seat at the table.
//!
//! Every turn the controller tries each valid insertion slot with each
//! distinct orientation of the extra tile on a copy of the board, then
//! walks its pawn as close to its goal as the resulting maze allows.
//! Candidates are ranked by:
//!
//! 1. whether the goal is reached,
//! 2. the remaining Manhattan distance to the goal,
//! 3. how far the next opponent is left from its own goal after its best
//!    reply (further is better).
//!
//! Candidates that tie on all three keys are picked between uniformly at
//! random.

use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::fmt;

use log::{debug, info, warn};

use crate::board::{Board, Coordinate, PlayerId};
use crate::error::{Error, Result};
use crate::player::PlayerMove;
use crate::reach::{self, Approach};
use crate::setup::GameSetup;
use crate::tile::{MazePathType, Orientation, Tile};

/// A straight looks the same after a half turn.
const STRAIGHT_ORIENTATIONS: [Orientation; 2] = [Orientation::Deg0, Orientation::Deg90];

/// Orientations worth trying for `shape`.
pub fn orientations_for(shape: MazePathType) -> &'static [Orientation] {
    match shape {
        MazePathType::I => &STRAIGHT_ORIENTATIONS,
        MazePathType::L | MazePathType::T => &Orientation::ALL,
    }
}

/// Where `player` is heading, given the tile that is currently spare.
///
/// That is the next treasure's cell, or home once the list is empty.
/// Returns `None` when the next treasure sits on `extra` or nowhere on the
/// board.
pub fn goal_for(board: &Board, player: PlayerId, extra: &Tile) -> Result<Option<Coordinate>> {
    match board.next_treasure(player)? {
        None => board.home(player).map(Some),
        Some(treasure) if extra.treasure() == Some(treasure) => Ok(None),
        Some(treasure) => Ok(board.treasure_location(treasure)),
    }
}

/// Copy `board`, orient `extra` and push it in at `at`.
///
/// Returns the new board and the tile that fell out.
pub fn simulate_insertion(
    board: &Board,
    extra: &Tile,
    at: Coordinate,
    orientation: Orientation,
) -> Result<(Board, Tile)> {
    let mut next = board.clone();
    let mut tile = extra.clone();
    tile.set_orientation(orientation);
    let ejected = next.insert(tile, at)?;
    Ok((next, ejected))
}

/// Closest `player` can get to its goal on `board` without another
/// insertion. `None` when the goal is undefined.
pub fn closest_distance(board: &Board, player: PlayerId, extra: &Tile) -> Result<Option<usize>> {
    let Some(goal) = goal_for(board, player, extra)? else {
        return Ok(None);
    };
    let location = board.player_location(player)?;
    Ok(Some(reach::reachable(board, location, goal)?.closest_distance()))
}

/// Best distance `opponent` can reach over all of its replies.
///
/// An opponent whose goal is undefined after every reply scores
/// `usize::MAX`.
pub fn opponent_best_distance(board: &Board, extra: &Tile, opponent: PlayerId) -> Result<usize> {
    let mut best = usize::MAX;
    for &at in board.valid_insertions() {
        for &orientation in orientations_for(extra.shape()) {
            let (next, spare) = simulate_insertion(board, extra, at, orientation)?;
            if let Some(distance) = closest_distance(&next, opponent, &spare)? {
                best = best.min(distance);
                if best == 0 {
                    return Ok(0);
                }
            }
        }
    }
    Ok(best)
}

/// Ranking keys of a candidate move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Score {
    /// Manhattan distance from the path's end to the goal. `usize::MAX`
    /// when the goal is undefined after this insertion.
    pub distance: usize,
    pub opponent_distance: usize,
}

impl Score {
    pub fn reached(&self) -> bool {
        self.distance == 0
    }

    /// Lower is better.
    pub fn rank(&self) -> (bool, usize, Reverse<usize>) {
        (!self.reached(), self.distance, Reverse(self.opponent_distance))
    }
}

/// One insertion the controller considered, with its pawn walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub insertion: Coordinate,
    pub orientation: Orientation,
    pub path: Vec<Coordinate>,
    pub score: Score,
}

impl Candidate {
    fn into_move(self, player: PlayerId) -> PlayerMove {
        PlayerMove::new(player, self.path, self.insertion, self.orientation.id())
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "insert {} rot {}: distance {}, opponent {}",
            self.insertion,
            self.orientation.id(),
            self.score.distance,
            self.score.opponent_distance
        )
    }
}

/// The AI for one seat. Owns its own copy of the board and the extra tile
/// and keeps both in sync through [`GameController::apply_move`].
pub struct GameController {
    player_id: PlayerId,
    next_opponent: PlayerId,
    board: Board,
    extra: Tile,
    rng: fastrand::Rng,
    invalidated: BTreeSet<PlayerId>,
}

impl GameController {
    /// # Errors
    /// [`Error::UnknownPlayer`] if `player_id` has no seat on `board`.
    pub fn new(player_id: PlayerId, board: Board, extra: Tile, rng: fastrand::Rng) -> Result<Self> {
        board.home(player_id)?;
        let next_opponent = (player_id as usize % board.player_count()) as PlayerId + 1;
        debug!(
            "player {player_id} seated among {} players, next opponent {next_opponent}",
            board.player_count()
        );
        Ok(Self {
            player_id,
            next_opponent,
            board,
            extra,
            rng,
            invalidated: BTreeSet::new(),
        })
    }

    pub fn from_setup(player_id: PlayerId, setup: &GameSetup, rng: fastrand::Rng) -> Result<Self> {
        let (board, extra) = setup.build()?;
        Self::new(player_id, board, extra, rng)
    }

    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    /// The player after us in turn order, or `None` when we play alone.
    pub fn next_opponent(&self) -> Option<PlayerId> {
        (self.next_opponent != self.player_id).then_some(self.next_opponent)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn extra_tile(&self) -> &Tile {
        &self.extra
    }

    /// Players the referee has removed from the game.
    pub fn invalidated(&self) -> &BTreeSet<PlayerId> {
        &self.invalidated
    }

    /// Score every insertion we could make this turn.
    ///
    /// Only the search RNG is touched; board and extra tile stay as they
    /// are.
    pub fn candidates(&mut self) -> Result<Vec<Candidate>> {
        let me = self.player_id;
        let opponent = self.next_opponent();
        let mut out = Vec::new();

        for &insertion in self.board.valid_insertions() {
            for &orientation in orientations_for(self.extra.shape()) {
                let (board, ejected) =
                    simulate_insertion(&self.board, &self.extra, insertion, orientation)?;
                let location = board.player_location(me)?;

                let approach = match goal_for(&board, me, &ejected)? {
                    Some(goal) => {
                        reach::reachable(&board, location, goal)?.best_approach(&mut self.rng)
                    }
                    None => Approach {
                        path: vec![location],
                        distance: usize::MAX,
                    },
                };
                let opponent_distance = match opponent {
                    Some(opponent) => opponent_best_distance(&board, &ejected, opponent)?,
                    None => 0,
                };

                let candidate = Candidate {
                    insertion,
                    orientation,
                    path: approach.path,
                    score: Score {
                        distance: approach.distance,
                        opponent_distance,
                    },
                };
                debug!("player {me} {candidate}");
                out.push(candidate);
            }
        }
        Ok(out)
    }

    /// The best move for this turn, without applying it.
    pub fn best_move(&mut self) -> Result<PlayerMove> {
        let candidates = self.candidates()?;
        let Some(best) = candidates.iter().map(|c| c.score.rank()).min() else {
            return Err(Error::InvalidMove("no insertion slot is open".into()));
        };
        let mut tied: Vec<Candidate> = candidates
            .into_iter()
            .filter(|c| c.score.rank() == best)
            .collect();
        let pick = self.rng.usize(..tied.len());
        Ok(tied.swap_remove(pick).into_move(self.player_id))
    }

    /// Choose this turn's move. Logs the choice; state is unchanged until
    /// the move comes back through [`GameController::apply_move`].
    pub fn produce_move(&mut self) -> Result<PlayerMove> {
        let mv = self.best_move()?;
        info!("player {} plays {mv}", self.player_id);
        Ok(mv)
    }

    /// Apply any player's move to our copy of the game.
    ///
    /// # Errors
    /// The move is validated first; an invalid move leaves the state
    /// untouched.
    pub fn apply_move(&mut self, mv: &PlayerMove) -> Result<()> {
        mv.validate(&self.board)?;
        let orientation = mv.orientation()?;
        let destination = mv
            .destination()
            .ok_or_else(|| Error::InvalidMove("path is empty".into()))?;

        let mut tile = self.extra.clone();
        tile.set_orientation(orientation);
        self.extra = self.board.insert(tile, mv.tile_insertion)?;
        self.board.move_player(mv.player_id, destination)?;
        debug!("applied {mv}");
        Ok(())
    }

    /// Cells reachable in one step from `c` on the current board.
    pub fn neighbors(&self, c: Coordinate) -> Result<Vec<Coordinate>> {
        reach::neighbors(&self.board, c)
    }

    /// A walkable path between two cells on the current board.
    pub fn path(&self, start: Coordinate, end: Coordinate) -> Result<Option<Vec<Coordinate>>> {
        reach::find_path(&self.board, start, end)
    }

    pub fn notify_player_invalidated(&mut self, player: PlayerId) {
        warn!("player {player} was removed from the game");
        self.invalidated.insert(player);
    }
}
