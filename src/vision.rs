use ndarray::{Array2, ArrayView2};

use crate::error::{PlayerError, PlayerResult};

// Cell values - must match the simulation's vision encoding
pub const CELL_EMPTY: i32 = -1;

/// Agent-relative offsets range over [-VISION_RADIUS, VISION_RADIUS].
pub const VISION_RADIUS: i32 = 2;
pub const VISION_SIZE: usize = 5;
pub const VISION_CELLS: usize = VISION_SIZE * VISION_SIZE;

/// 5x5 snapshot of the cells around an agent, indexed `[row][col]`.
///
/// Row is the agent-relative `y` and column the agent-relative `x`, both
/// shifted by +2 so the agent sits at `[2][2]`. A cell holding
/// [`CELL_EMPTY`] has nothing the agent can move onto.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisionWindow {
    cells: Array2<i32>,
}

impl VisionWindow {
    pub fn new(rows: [[i32; VISION_SIZE]; VISION_SIZE]) -> Self {
        Self {
            cells: Array2::from_shape_fn((VISION_SIZE, VISION_SIZE), |(i, j)| rows[i][j]),
        }
    }

    /// Window with every cell set to `code`
    pub fn filled(code: i32) -> Self {
        Self {
            cells: Array2::from_elem((VISION_SIZE, VISION_SIZE), code),
        }
    }

    /// Wrap an existing array, which must be 5x5
    pub fn from_array(cells: Array2<i32>) -> PlayerResult<Self> {
        let (rows, cols) = cells.dim();
        if rows != VISION_SIZE || cols != VISION_SIZE {
            return Err(PlayerError::InvalidVisionShape { rows, cols });
        }
        Ok(Self { cells })
    }

    /// Value seen at agent-relative offset `(x, y)`.
    ///
    /// Offsets outside [-2, 2] are rejected rather than wrapped or clamped.
    pub fn vision_at(&self, x: i32, y: i32) -> PlayerResult<i32> {
        let (i, j) = Self::cell_index(x, y)?;
        Ok(self.cells[[i, j]])
    }

    /// Overwrite the value at agent-relative offset `(x, y)`
    pub fn set(&mut self, x: i32, y: i32, code: i32) -> PlayerResult<()> {
        let (i, j) = Self::cell_index(x, y)?;
        self.cells[[i, j]] = code;
        Ok(())
    }

    pub fn view(&self) -> ArrayView2<'_, i32> {
        self.cells.view()
    }

    fn cell_index(x: i32, y: i32) -> PlayerResult<(usize, usize)> {
        let in_range = |v: i32| (-VISION_RADIUS..=VISION_RADIUS).contains(&v);
        if !in_range(x) || !in_range(y) {
            return Err(PlayerError::InvalidVisionOffset { x, y });
        }
        Ok(((VISION_RADIUS + y) as usize, (VISION_RADIUS + x) as usize))
    }
}
