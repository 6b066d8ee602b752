//! Double-buffered Game of Life grid.
//!
//! Holds two generations of cell state and computes one full transition per
//! [`Grid::step`] call. All public coordinate access is bounds checked; the
//! grid has hard edges (no wraparound).

use rand::Rng;

/// Errors surfaced by [`Grid`] construction and coordinate access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    InvalidDimension { width: usize, height: usize },
    #[error("coordinate ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Selector for which of the two cell buffers is current.
/// Flips exactly once per completed [`Grid::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Buffer {
    A,
    B,
}

impl Buffer {
    #[inline]
    fn index(self) -> usize {
        match self {
            Buffer::A => 0,
            Buffer::B => 1,
        }
    }

    #[inline]
    fn flipped(self) -> Buffer {
        match self {
            Buffer::A => Buffer::B,
            Buffer::B => Buffer::A,
        }
    }
}

/// Bounded 2-D Game of Life grid with double-buffered state.
///
/// Cells are stored as two flat boolean buffers in row-major order
/// (`y * width + x`). Exactly one buffer is current at any time; `step`
/// writes the next generation into the scratch buffer and then swaps roles,
/// so a generation is never observable half-updated.
pub struct Grid {
    width: usize,
    height: usize,
    /// `cells[active.index()]` is the current generation, the other entry
    /// is scratch for the next one. Both always have length width * height.
    cells: [Vec<bool>; 2],
    active: Buffer,
    generation: u64,
}

impl Grid {
    /// Create a grid seeding each cell independently alive with
    /// `life_probability`. The caller is responsible for clamping the
    /// probability into [0, 1]; values outside simply saturate (everything
    /// dead or everything alive).
    pub fn new(width: usize, height: usize, life_probability: f64) -> Result<Self, GridError> {
        Self::with_rng(width, height, life_probability, &mut rand::thread_rng())
    }

    /// Like [`Grid::new`] with an explicit RNG, for deterministic seeding.
    pub fn with_rng<R: Rng>(
        width: usize,
        height: usize,
        life_probability: f64,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }

        let mut current = vec![false; width * height];
        for cell in &mut current {
            *cell = rng.r#gen::<f64>() < life_probability;
        }
        // Both buffers start identical; no next generation exists yet.
        let scratch = current.clone();

        Ok(Self {
            width,
            height,
            cells: [current, scratch],
            active: Buffer::A,
            generation: 0,
        })
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total cell count (width * height).
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of completed generation transitions.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Read-only view of the current generation, row-major.
    pub fn cells(&self) -> &[bool] {
        &self.cells[self.active.index()]
    }

    /// Count of live cells in the current generation.
    pub fn population(&self) -> usize {
        self.cells().iter().filter(|&&alive| alive).count()
    }

    #[inline]
    fn index_of(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x < self.width && y < self.height {
            Ok(y * self.width + x)
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Current-buffer value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Result<bool, GridError> {
        let idx = self.index_of(x, y)?;
        Ok(self.cells()[idx])
    }

    /// Write into the current buffer. Intended for cell editors between
    /// steps; never called during a step.
    pub fn set(&mut self, x: usize, y: usize, value: bool) -> Result<(), GridError> {
        let idx = self.index_of(x, y)?;
        self.cells[self.active.index()][idx] = value;
        Ok(())
    }

    /// Flip the cell at (x, y) and return its new value. Repeat events over
    /// an unchanged cell are the caller's job to deduplicate.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool, GridError> {
        let idx = self.index_of(x, y)?;
        let cell = &mut self.cells[self.active.index()][idx];
        *cell = !*cell;
        Ok(*cell)
    }

    /// Count live Moore-neighborhood cells of (x, y) in the current buffer.
    ///
    /// Neighbors outside the grid are skipped, so edge and corner cells see
    /// fewer than 8. The scan short-circuits once the count exceeds 3: the
    /// transition rule only distinguishes 2 and 3, so callers must test
    /// `== 2` / `== 3` and never rely on exact values above 3.
    pub fn live_neighbors(&self, x: usize, y: usize) -> Result<u8, GridError> {
        self.index_of(x, y)?;
        Ok(live_neighbors_in(
            self.cells(),
            self.width,
            self.height,
            x,
            y,
        ))
    }

    /// Advance the grid by one generation.
    ///
    /// Computes the Life rule for every cell of the current buffer into the
    /// scratch buffer (a dead cell is born iff exactly 3 live neighbors; a
    /// live cell survives iff 2 or 3), then flips the buffer selector. The
    /// pass is synchronous and total; callers never observe a partial
    /// generation.
    pub fn step(&mut self) {
        let width = self.width;
        let height = self.height;

        let [a, b] = &mut self.cells;
        let (cur, next): (&[bool], &mut Vec<bool>) = match self.active {
            Buffer::A => (a.as_slice(), b),
            Buffer::B => (b.as_slice(), a),
        };

        for y in 0..height {
            for x in 0..width {
                let idx = y * width + x;
                let neighbors = live_neighbors_in(cur, width, height, x, y);
                next[idx] = if cur[idx] {
                    neighbors == 2 || neighbors == 3
                } else {
                    neighbors == 3
                };
            }
        }

        self.active = self.active.flipped();
        self.generation += 1;
    }
}

/// Moore-neighborhood count over a flat row-major buffer, skipping
/// out-of-grid neighbors. Stops counting past 3; see [`Grid::live_neighbors`].
fn live_neighbors_in(cells: &[bool], width: usize, height: usize, x: usize, y: usize) -> u8 {
    let mut count = 0u8;

    'rows: for dy in -1isize..=1 {
        let ny = y as isize + dy;
        if ny < 0 || ny >= height as isize {
            continue;
        }
        for dx in -1isize..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = x as isize + dx;
            if nx < 0 || nx >= width as isize {
                continue;
            }
            if cells[ny as usize * width + nx as usize] {
                count += 1;
                // 4 through 8 are indistinguishable under the rule.
                if count > 3 {
                    break 'rows;
                }
            }
        }
    }

    count
}
