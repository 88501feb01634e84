//! Simulation configuration passed into [`crate::Grid`] at construction.
//!
//! One explicit value instead of process-wide mutable state: dimensions come
//! from the caller, everything else lives here.

/// Edge handling for neighbor lookups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Topology {
    /// Coordinates outside the rectangle count as dead cells.
    #[default]
    Bounded,
    /// Neighbor coordinates wrap modulo width/height (toroidal universe).
    Toroidal,
}

/// Tunable parameters of the simulation.
#[derive(Clone, Copy, Debug)]
pub struct SimConfig {
    pub topology: Topology,
    /// Probability that a cell starts alive when the grid is randomized.
    pub seed_density: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            topology: Topology::Bounded,
            seed_density: 0.1,
        }
    }
}
