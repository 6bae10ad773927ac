//! Shared utility functions for cyclic index arithmetic.

/// Normalize a signed index into `[0, modulus)`.
///
/// `modulus` must be positive. Negative inputs wrap from the top, so
/// `cyclic_index(-1, 10) == 9`.
pub fn cyclic_index(value: i64, modulus: i64) -> i64 {
    value.rem_euclid(modulus)
}
