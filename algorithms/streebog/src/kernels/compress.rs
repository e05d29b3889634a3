//! Compression Function
//!
//! The 12-round `E` transformation with its key schedule, and the
//! compression function `g_N(h, m)` built on top of it.

use crate::kernels::tables::ITERATION_CONSTANTS;
use crate::kernels::transforms::{lps, xor512, State512};

// =============================================================================
// KEY SCHEDULE
// =============================================================================

/// Advances a round key: `K_{i+1} = LPS(K_i ⊕ C_i)`.
#[inline]
fn next_round_key(key: &State512, constant: &State512) -> State512 {
    lps(&xor512(key, constant))
}

// =============================================================================
// E TRANSFORMATION
// =============================================================================

/// `E(K, m)`: 12 rounds of `LPS` keyed by the schedule derived from `key`.
pub fn encrypt(key: &State512, block: &State512) -> State512 {
    let mut key = *key;
    let mut state = xor512(block, &key);
    for constant in &ITERATION_CONSTANTS {
        state = lps(&state);
        key = next_round_key(&key, constant);
        state = xor512(&state, &key);
    }
    state
}

// =============================================================================
// G FUNCTION
// =============================================================================

/// Compression function `g_N(h, m) = E(LPS(h ⊕ N), m) ⊕ h ⊕ m`.
#[inline]
pub fn compress(n: &State512, h: &State512, m: &State512) -> State512 {
    let key = lps(&xor512(n, h));
    xor512(&xor512(&encrypt(&key, m), h), m)
}
