//! Internal graph accessors and low-level building blocks.
//!
//! This module is `pub(crate)` so the search algorithms can share scratch state
//! (visited flags and the like) without exposing it as public API.

pub(crate) mod visited;
