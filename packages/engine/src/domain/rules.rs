//! Life rule (B3/S23)
//!
//! The only rule the engine runs. Kept as a pure function of the cell's
//! own state and its live-neighbor count so the step loop stays trivial.

/// Neighbor count that brings a dead cell to life
pub const BIRTH: u8 = 3;

/// Neighbor counts that keep a live cell alive
pub const SURVIVAL: [u8; 2] = [2, 3];

#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Death or stays dead
    }
}
