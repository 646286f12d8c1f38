use std::fmt;

/// Fixed puzzle dimensions. Width and height never change for the lifetime of
/// one puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// The committed grid: a flat row-major matrix of optional characters.
/// Exclusively owned by the scheduler during placement, read-only afterwards.
pub struct Board {
    dims: Dimensions,
    cells: Vec<Option<char>>,
}

impl Board {
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![None; dims.cell_count()],
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn width(&self) -> usize {
        self.dims.width
    }

    pub fn height(&self) -> usize {
        self.dims.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.dims.width && y < self.dims.height);
        y * self.dims.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, ch: char) {
        let idx = self.index(x, y);
        self.cells[idx] = Some(ch);
    }

    /// Clear every cell. Dimensions are untouched.
    pub fn wipe(&mut self) {
        self.cells.fill(None);
    }

    pub fn committed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Row-major view of one row.
    pub fn row(&self, y: usize) -> &[Option<char>] {
        let start = y * self.dims.width;
        &self.cells[start..start + self.dims.width]
    }
}
