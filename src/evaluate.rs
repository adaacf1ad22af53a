//! A look-ahead heuristic to rank the moves of the player on turn
//!
//! # Scoring
//! Every game reachable within the look-ahead is generated and the won ones
//! are kept. Starting with the shortest, a won game whose length exceeds the
//! current one by an odd number of moves was won by the player on turn and
//! adds one to the score of the move that started it; an even number means
//! the opponent won and subtracts one. Once some depth produced wins, deeper
//! ones are ignored: the quickest forced result decides.
//!
//! This is not a minimax search, a move scores well if it leads to many
//! quick wins, even if the opponent could avoid all of them.

use log::debug;

use std::collections::HashMap;

use crate::board::{Cell, GameState, Move};
use crate::codec::encode;
use crate::moves::next_moves;
use crate::terminal::{is_final, is_win};
use crate::tree::expand;
use crate::WIDTH;

/// How many moves the evaluator looks ahead unless told otherwise
pub const DEFAULT_LOOKAHEAD: usize = 4;

/// Moves sharing a score
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ScoredMoves {
    pub score: i32,
    /// Ordered left to right
    pub moves: Vec<Move>,
}

/// Returns an array ordering the columns from the middle outwards, as
/// the middle columns are often better moves
pub const fn move_order() -> [usize; WIDTH] {
    let mut move_order = [0; WIDTH];
    let mut i = 0;
    while i < WIDTH {
        move_order[i] = (WIDTH / 2) + (i % 2) * (i / 2 + 1) - (1 - i % 2) * (i / 2);
        i += 1;
    }
    move_order
}

/// Ranks the legal moves of `state` by descending score
///
/// Every move `next_moves` offers is ranked, so only a full board gives an
/// empty ranking. Moves without a forced result inside `depth_limit` moves
/// score 0, which is all a won game can give since nothing follows it.
pub fn best_moves(state: &GameState, depth_limit: usize) -> Vec<ScoredMoves> {
    let candidates = next_moves(state);
    let mut scores: HashMap<Cell, i32> = candidates.iter().map(|m| (m.cell, 0)).collect();

    let futures: Vec<GameState> = expand(state, depth_limit)
        .into_iter()
        .filter(|future| is_win(future))
        .collect();
    debug!(
        "[{}] {} won games within {} moves",
        encode(state),
        futures.len(),
        depth_limit
    );

    for ahead in 1..=depth_limit {
        // the player on turn makes the last move of odd-length continuations
        let delta = if ahead % 2 == 1 { 1 } else { -1 };
        let mut found = false;
        for future in futures.iter().filter(|f| f.len() == state.len() + ahead) {
            let first = future.moves()[state.len()];
            if let Some(score) = scores.get_mut(&first.cell) {
                *score += delta;
                found = true;
            }
        }
        if found {
            debug!("[{}] forced results found {} moves ahead", encode(state), ahead);
            break;
        }
    }

    let mut ranking: Vec<ScoredMoves> = Vec::new();
    for candidate in candidates {
        let score = scores.get(&candidate.cell).copied().unwrap_or(0);
        match ranking.iter_mut().find(|group| group.score == score) {
            Some(group) => group.moves.push(candidate),
            None => ranking.push(ScoredMoves {
                score,
                moves: vec![candidate],
            }),
        }
    }
    ranking.sort_by(|a, b| b.score.cmp(&a.score));
    ranking
}

/// The best scoring move, preferring central columns among equals
///
/// `None` once the game is over, even if the board still has room.
pub fn recommend(state: &GameState, depth_limit: usize) -> Option<Move> {
    if is_final(state) {
        return None;
    }
    let ranking = best_moves(state, depth_limit);
    let top = ranking.first()?;
    move_order()
        .iter()
        .find_map(|&column| top.moves.iter().find(|m| m.cell.column == column))
        .copied()
}
