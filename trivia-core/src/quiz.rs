//! Quiz selection: draw one unseen question at random

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::question::Question;

/// Wire sentinel for "all categories" in the quiz request.
pub const ALL_CATEGORIES: i32 = 0;

/// Draw one question from `pool` that the caller has not seen yet.
///
/// The pool is already filtered by category (or unfiltered for
/// [`ALL_CATEGORIES`]); `previous` is the caller-maintained list of ids
/// shown so far this session. The server never appends to it.
///
/// Returns `None` when the quiz is exhausted: the previous list covers the
/// whole pool, the pool is empty, or a stale previous list leaves nothing
/// unseen to draw from.
pub fn draw<'a, R: Rng>(
    pool: &'a [Question],
    previous: &[i32],
    rng: &mut R,
) -> Option<&'a Question> {
    if previous.len() == pool.len() {
        return None;
    }
    if previous.is_empty() {
        // Nothing seen yet: the whole pool is fair game.
        return pool.choose(rng);
    }
    let seen: HashSet<i32> = previous.iter().copied().collect();
    let unseen: Vec<&Question> = pool.iter().filter(|q| !seen.contains(&q.id)).collect();
    unseen.choose(rng).copied()
}
