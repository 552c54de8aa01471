//! Frame predicates and the structural pin-count check.

use crate::constants::*;
use crate::types::Frame;

/// A strike clears all ten pins on the first ball.
#[inline(always)]
pub fn is_strike(frame: &Frame) -> bool {
    frame.first_ball == PIN_COUNT
}

/// A spare clears the remaining pins on the second ball.
#[inline(always)]
pub fn is_spare(frame: &Frame) -> bool {
    frame.first_ball < PIN_COUNT && frame.first_ball + frame.second_ball == PIN_COUNT
}

/// Structural pin-count check applied by the API layer before frames reach
/// the scoring engine: every ball in 0..=10, and a frame before the tenth
/// may not total more than ten pins over its first two balls unless the
/// first ball was a strike.
pub fn frame_pin_counts_valid(number: u8, frame: &Frame) -> bool {
    let balls = [frame.first_ball, frame.second_ball, frame.third_ball];
    if balls.iter().any(|&b| b < 0 || b > PIN_COUNT) {
        return false;
    }
    number == FRAME_COUNT || is_strike(frame) || frame.first_ball + frame.second_ball <= PIN_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_strike() {
        assert!(is_strike(&Frame::new(10, 0, 0)));
        assert!(!is_strike(&Frame::new(9, 1, 0)));
        assert!(!is_strike(&Frame::new(0, 0, 0)));
    }

    #[test]
    fn test_is_spare() {
        assert!(is_spare(&Frame::new(9, 1, 0)));
        assert!(is_spare(&Frame::new(0, 10, 0)));
        assert!(is_spare(&Frame::new(5, 5, 6)));
        assert!(!is_spare(&Frame::new(10, 0, 0)));
        assert!(!is_spare(&Frame::new(4, 4, 0)));
    }

    #[test]
    fn test_pin_counts_valid() {
        assert!(frame_pin_counts_valid(1, &Frame::new(4, 5, 0)));
        assert!(frame_pin_counts_valid(1, &Frame::new(10, 0, 0)));
        // Synthetic strike frames carry junk in later balls; the strike
        // escape keeps them acceptable.
        assert!(frame_pin_counts_valid(1, &Frame::new(10, 10, 10)));
        assert!(frame_pin_counts_valid(10, &Frame::new(10, 10, 10)));
        assert!(frame_pin_counts_valid(10, &Frame::new(5, 5, 6)));
    }

    #[test]
    fn test_pin_counts_invalid() {
        assert!(!frame_pin_counts_valid(1, &Frame::new(-1, 0, 0)));
        assert!(!frame_pin_counts_valid(1, &Frame::new(11, 0, 0)));
        assert!(!frame_pin_counts_valid(1, &Frame::new(0, 0, 11)));
        // Eighteen pins over two balls without a strike is impossible.
        assert!(!frame_pin_counts_valid(1, &Frame::new(9, 9, 0)));
        assert!(!frame_pin_counts_valid(10, &Frame::new(11, 0, 0)));
    }
}
