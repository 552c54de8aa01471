//! Ten-pin scoring: frame-by-frame totals with strike and spare lookahead.
//!
//! The total is derived from the frame map alone on every call. Bonuses are
//! resolved by looking up later frames, never from values cached on the
//! frame itself, so editing an earlier frame after later ones exist cannot
//! leave a stale bonus behind. Lookahead into a frame that is not in the
//! map resolves to 0: an in-progress game yields a provisional total that
//! grows as frames complete.

use std::collections::BTreeMap;

use crate::constants::*;
use crate::frame_mechanics::{is_spare, is_strike};
use crate::types::Frame;

/// Compute the total score for a (possibly partial) game.
pub fn compute_total_score(frames: &BTreeMap<u8, Frame>) -> i32 {
    let mut total = 0;
    for number in 1..=FRAME_COUNT {
        let Some(frame) = frames.get(&number) else {
            continue;
        };
        total += if number == FRAME_COUNT {
            // The tenth frame's bonus balls are its own second and third.
            frame.first_ball + frame.second_ball + frame.third_ball
        } else if is_strike(frame) {
            PIN_COUNT + strike_bonus(frames, number)
        } else if is_spare(frame) {
            PIN_COUNT + spare_bonus(frames, number)
        } else {
            frame.first_ball + frame.second_ball
        };
    }
    total
}

/// Pins from the two balls bowled after a strike in frame `number` (1-9).
fn strike_bonus(frames: &BTreeMap<u8, Frame>, number: u8) -> i32 {
    let Some(next) = frames.get(&(number + 1)) else {
        return 0;
    };
    if is_strike(next) && number + 1 < FRAME_COUNT {
        // A strike frame before the tenth has no second ball; the second
        // bonus ball is the first ball of the frame after it.
        PIN_COUNT + frames.get(&(number + 2)).map_or(0, |f| f.first_ball)
    } else {
        next.first_ball + next.second_ball
    }
}

/// Pins from the ball bowled after a spare in frame `number` (1-9).
fn spare_bonus(frames: &BTreeMap<u8, Frame>, number: u8) -> i32 {
    frames.get(&(number + 1)).map_or(0, |f| f.first_ball)
}
