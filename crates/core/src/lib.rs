//! Deterministic Game of Life simulation logic shared across frontends.
//!
//! `life-core` owns the canonical rules (grid state, neighbor counting, the
//! generation transition) and exposes pure APIs with no terminal or I/O
//! knowledge. All state mutation flows through [`Grid`], and the frontend
//! crates depend on the types re-exported here.
pub mod config;
pub mod grid;
pub mod pattern;

pub use config::{SimConfig, Topology};
pub use grid::Grid;
pub use pattern::{Pattern, PatternError};
