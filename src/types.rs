//! Core domain types: frames and players.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::FRAME_COUNT;

/// One of the ten frames a player bowls.
///
/// Ball values are pins knocked down. `third_ball` is only meaningful for
/// the tenth frame, where the bonus balls after a strike or spare are
/// recorded inline. Missing fields in a request default to 0, so a partial
/// update like `{"first_ball": 4}` deserializes cleanly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub first_ball: i32,
    #[serde(default)]
    pub second_ball: i32,
    #[serde(default)]
    pub third_ball: i32,
}

impl Frame {
    pub fn new(first_ball: i32, second_ball: i32, third_ball: i32) -> Self {
        Frame {
            first_ball,
            second_ball,
            third_ball,
        }
    }
}

/// A registered player: their frames keyed by frame number (1-10) and the
/// derived total score.
///
/// The score is recomputed from the full frame map on every update and is
/// never edited independently; reads return it as stored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub id: u64,
    pub name: String,
    pub frames: BTreeMap<u8, Frame>,
    pub score: i32,
}

/// Ten zeroed frames keyed 1 through 10 — the frame map of a freshly
/// registered player.
pub fn empty_frames() -> BTreeMap<u8, Frame> {
    (1..=FRAME_COUNT).map(|n| (n, Frame::default())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_frames() {
        let frames = empty_frames();
        assert_eq!(frames.len(), 10);
        for n in 1..=10u8 {
            assert_eq!(frames.get(&n), Some(&Frame::default()));
        }
    }

    #[test]
    fn test_frame_partial_deserialize() {
        let frame: Frame = serde_json::from_str(r#"{"first_ball": 4}"#).unwrap();
        assert_eq!(frame, Frame::new(4, 0, 0));
    }

    #[test]
    fn test_frame_map_json_keys_round_trip() {
        // serde_json writes integer map keys as strings; make sure they
        // come back as frame numbers.
        let mut frames = BTreeMap::new();
        frames.insert(1u8, Frame::new(10, 0, 0));
        frames.insert(10u8, Frame::new(10, 10, 10));
        let json = serde_json::to_string(&frames).unwrap();
        let back: BTreeMap<u8, Frame> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, frames);
    }
}
