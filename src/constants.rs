//! Game constants shared by every layer.

/// Frames per game. Frame numbers run 1 through [`FRAME_COUNT`]; the last
/// frame carries its bonus balls inline instead of borrowing from a
/// following frame.
pub const FRAME_COUNT: u8 = 10;

/// Pins standing at the start of every frame.
pub const PIN_COUNT: i32 = 10;
