//! Bubble chart layout.
/// Square-root radius scaling and greedy spiral placement.
pub mod pack;
