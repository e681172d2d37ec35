#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Collision detection between the player column and the lane.

use platform_jumper_core::{Cell, JumpState, Lane};

/// Reports whether the player collides with an obstacle this tick.
///
/// A collision occurs exactly when the lane cell in the player's column
/// holds a block while the player is grounded. While airborne the player is
/// drawn over the same cell without contact. The check runs after the tick's
/// scroll and jump-state update, so a landing that coincides with a block is
/// caught in the landing tick itself.
#[must_use]
pub fn grounded_collision(lane: &Lane, jump_state: JumpState, column: usize) -> bool {
    jump_state == JumpState::Grounded && lane.cell(column) == Cell::Block
}
