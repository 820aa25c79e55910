//! Hints for the compiler that affect code optimization.

/// Marks the enclosing branch as unlikely to be taken.
///
/// Stands in for `std::hint::cold_path` while that is unstable.
#[cold]
#[inline(always)]
pub fn cold_path() {}
