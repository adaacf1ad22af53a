//! Bounded exploration of the game tree

use log::trace;

use std::convert::Infallible;

use crate::board::GameState;
use crate::codec::encode;
use crate::moves::next_moves;
use crate::terminal::{outcome, Outcome};
use crate::CELLS;

/// Explores every game reachable from `start` within `depth_limit` moves,
/// handing each leaf to `consumer` as it is found
///
/// A branch stops when its game is won or drawn, or when it holds
/// `start.len() + depth_limit` moves (at most a full board). Leaves are
/// passed on together with their outcome. The pending games are kept on a
/// stack, so memory stays proportional to the depth rather than the width
/// of the tree.
///
/// Returns the number of leaves emitted. The first error from `consumer`
/// stops the exploration.
pub fn expand_with<F, E>(start: &GameState, depth_limit: usize, mut consumer: F) -> Result<usize, E>
where
    F: FnMut(GameState, Outcome) -> Result<(), E>,
{
    let move_limit = start.len().saturating_add(depth_limit).min(CELLS);
    let mut pending = vec![start.clone()];
    let mut emitted = 0;

    while let Some(state) = pending.pop() {
        let result = outcome(&state);
        if result.is_final() || state.len() >= move_limit {
            if let Outcome::Win(win) = result {
                trace!(
                    "{} wins! {} [{}]",
                    win.player,
                    win.direction,
                    encode(&state)
                );
            }
            consumer(state, result)?;
            emitted += 1;
            continue;
        }

        for next in next_moves(&state) {
            match state.with_move(next) {
                Ok(child) => pending.push(child),
                Err(err) => debug_assert!(false, "enumerated move {:?} rejected: {}", next, err),
            }
        }
    }

    Ok(emitted)
}

/// Collects every leaf of the tree below `start`, see [`expand_with`]
pub fn expand(start: &GameState, depth_limit: usize) -> Vec<GameState> {
    let mut leaves = Vec::new();
    let collected = expand_with::<_, Infallible>(start, depth_limit, |state, _| {
        leaves.push(state);
        Ok(())
    });
    match collected {
        Ok(_) => leaves,
        Err(never) => match never {},
    }
}
