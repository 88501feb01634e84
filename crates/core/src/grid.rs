//! Dense cell grid and the generation transition rule.
//!
//! The grid stores one `bool` per coordinate in `[0, width) x [0, height)`,
//! row-major (`y * width + x`). Every coordinate always has an explicit
//! state; `step` replaces the whole generation atomically from the caller's
//! perspective.

use rand::Rng;

use crate::config::{SimConfig, Topology};

/// Offsets of the 8 neighboring positions.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Rectangular universe of live/dead cells.
///
/// Owned exclusively by the controller; the renderer only ever receives a
/// shared reference for the duration of one frame.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    /// Scratch buffer for the next generation, swapped in by `step`.
    scratch: Vec<bool>,
    config: SimConfig,
}

impl Grid {
    /// Creates an all-dead grid of the given dimensions.
    pub fn new(width: usize, height: usize, config: SimConfig) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
            scratch: vec![false; width * height],
            config,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the state at `(x, y)`.
    ///
    /// Out-of-range coordinates are dead under [`Topology::Bounded`] and wrap
    /// modulo the dimensions under [`Topology::Toroidal`]. Never an error:
    /// neighbor lookups probe past the edges on every cell.
    pub fn cell_state(&self, x: i32, y: i32) -> bool {
        let (x, y) = match self.config.topology {
            Topology::Bounded => {
                if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
                    return false;
                }
                (x as usize, y as usize)
            }
            Topology::Toroidal => (
                x.rem_euclid(self.width as i32) as usize,
                y.rem_euclid(self.height as i32) as usize,
            ),
        };
        self.cells[y * self.width + x]
    }

    /// Applies the standard rule to `(x, y)` against the current generation.
    ///
    /// A live cell survives with exactly 2 or 3 live neighbors; a dead cell
    /// is born with exactly 3. Everything else yields dead.
    pub fn next_cell_state(&self, x: i32, y: i32) -> bool {
        let mut neighbors = 0;
        for (dx, dy) in NEIGHBOR_OFFSETS {
            if self.cell_state(x + dx, y + dy) {
                neighbors += 1;
            }
        }
        match (self.cell_state(x, y), neighbors) {
            (true, 2) | (true, 3) => true,
            (false, 3) => true,
            _ => false,
        }
    }

    /// Advances the whole grid one generation.
    ///
    /// Every next state is computed from the frozen current generation; the
    /// swap at the end replaces the grid wholesale, so no partially updated
    /// generation is ever observable.
    pub fn step(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                self.scratch[y * self.width + x] = self.next_cell_state(x as i32, y as i32);
            }
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
    }

    /// Replaces the entire state: dead everywhere except the given cells.
    ///
    /// Coordinates outside the rectangle are ignored so that a pattern larger
    /// than the current terminal cannot violate the grid's bounds.
    pub fn reset<I>(&mut self, live: I)
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        self.cells.fill(false);
        for (x, y) in live {
            if x < self.width && y < self.height {
                self.cells[y * self.width + x] = true;
            }
        }
    }

    /// Reseeds every cell independently with the configured density.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = rng.gen_bool(self.config.seed_density);
        }
    }

    /// Reallocates the grid for new dimensions, all cells dead.
    ///
    /// Callers follow this with a `reset` or `randomize`.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells = vec![false; width * height];
        self.scratch = vec![false; width * height];
    }

    /// Number of live cells in the current generation.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}
