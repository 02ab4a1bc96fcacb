//! C entry point for applying a move to a caller-owned board buffer.

use crate::{Board, Location, Player};
use std::convert::TryFrom;

/// Apply a move by `player` (1 black, 2 white) at 0-based `(x, y)` to the
/// row-major buffer of `width * height` cell codes at `states`, in place.
///
/// Returns the number of flipped discs, or -1 if the buffer, dimensions or
/// player are invalid. The buffer is untouched on error.
///
/// # Safety
///
/// `states` must be null or point to `width * height` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn reversi_apply_move(
    states: *mut u8,
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    player: u8,
) -> i32 {
    if states.is_null() {
        return -1;
    }

    let (width, height) = (width as usize, height as usize);
    let len = match width.checked_mul(height) {
        Some(len) if len > 0 => len,
        _ => return -1,
    };
    let player = match Player::try_from(player) {
        Ok(player) => player,
        Err(_) => return -1,
    };

    let buffer = std::slice::from_raw_parts_mut(states, len);
    let mut board = match Board::from_codes(width, height, buffer) {
        Ok(board) => board,
        Err(_) => return -1,
    };

    let flipped = board.apply_move(Location::new(x as isize, y as isize), player);
    buffer.copy_from_slice(&board.to_codes());
    i32::try_from(flipped).unwrap_or(i32::MAX)
}
