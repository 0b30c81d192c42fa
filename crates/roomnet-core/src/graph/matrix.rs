//! Dense square matrix with growable side length

/// Square row-major matrix whose unused cells hold a fill value
/// meaning "no edge".
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    side: usize,
    fill: T,
    cells: Vec<T>,
}

impl<T: Copy> Matrix<T> {
    /// A `side` x `side` matrix of `fill`.
    ///
    /// A zero side is allowed but addresses nothing: `set_symmetric` and
    /// `clear_line` ignore it until `grow` is called. Graph storage only
    /// builds matrices from a validated config, whose capacity is non-zero.
    pub fn new(side: usize, fill: T) -> Self {
        Self {
            side,
            fill,
            cells: vec![fill; side * side],
        }
    }

    /// Side length (the vertex capacity this matrix can address)
    pub fn side(&self) -> usize {
        self.side
    }

    /// The value representing "no edge"
    pub fn fill(&self) -> T {
        self.fill
    }

    /// Cell `(row, col)`, or the fill value outside the matrix
    pub fn get(&self, row: usize, col: usize) -> T {
        if row < self.side && col < self.side {
            self.cells[row * self.side + col]
        } else {
            self.fill
        }
    }

    fn set(&mut self, row: usize, col: usize, value: T) {
        self.cells[row * self.side + col] = value;
    }

    /// Write `value` into both `(a, b)` and `(b, a)`
    pub fn set_symmetric(&mut self, a: usize, b: usize, value: T) {
        if a >= self.side || b >= self.side {
            return;
        }
        self.set(a, b, value);
        self.set(b, a, value);
    }

    /// Grow to `new_side`, keeping the existing block in the upper-left
    /// corner and filling the exposed region. Never shrinks.
    pub fn grow(&mut self, new_side: usize) {
        if new_side <= self.side {
            return;
        }
        let mut cells = vec![self.fill; new_side * new_side];
        for row in 0..self.side {
            let old = row * self.side;
            let new = row * new_side;
            cells[new..new + self.side].copy_from_slice(&self.cells[old..old + self.side]);
        }
        self.cells = cells;
        self.side = new_side;
    }

    /// Reset row and column `index` to the fill value for columns/rows
    /// `0..=index`.
    pub fn clear_line(&mut self, index: usize) {
        if index >= self.side {
            return;
        }
        for i in 0..=index {
            self.set(index, i, self.fill);
            self.set(i, index, self.fill);
        }
    }

    /// Drop row and column `index` out of the first `count` lines, shifting
    /// later rows and columns down by one and clearing the vacated last line.
    pub fn remove_line(&mut self, index: usize, count: usize) {
        let count = count.min(self.side);
        if index >= count {
            return;
        }
        let last = count - 1;

        for row in index..last {
            for col in 0..count {
                let below = self.get(row + 1, col);
                self.set(row, col, below);
            }
        }
        for col in index..last {
            for row in 0..count {
                let right = self.get(row, col + 1);
                self.set(row, col, right);
            }
        }
        for i in 0..count {
            self.set(last, i, self.fill);
            self.set(i, last, self.fill);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_filled() {
        let m = Matrix::new(3, f64::INFINITY);
        assert_eq!(m.side(), 3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m.get(i, j), f64::INFINITY);
            }
        }
    }

    #[test]
    fn test_get_out_of_range_returns_fill() {
        let m = Matrix::new(2, false);
        assert!(!m.get(5, 0));
        assert!(!m.get(0, 2));
    }

    #[test]
    fn test_set_symmetric() {
        let mut m = Matrix::new(3, false);
        m.set_symmetric(0, 2, true);
        assert!(m.get(0, 2));
        assert!(m.get(2, 0));
        assert!(!m.get(1, 2));

        // out of range writes are ignored
        m.set_symmetric(0, 7, true);
        assert_eq!(m.side(), 3);
    }

    #[test]
    fn test_grow_preserves_block_and_fills_new_region() {
        let mut m = Matrix::new(2, 0u8);
        m.set_symmetric(0, 1, 7);
        m.grow(4);

        assert_eq!(m.side(), 4);
        assert_eq!(m.get(0, 1), 7);
        assert_eq!(m.get(1, 0), 7);
        for i in 0..4 {
            assert_eq!(m.get(i, 3), 0);
            assert_eq!(m.get(2, i), 0);
        }
    }

    #[test]
    fn test_grow_never_shrinks() {
        let mut m = Matrix::new(4, 0u8);
        m.grow(2);
        assert_eq!(m.side(), 4);
    }

    #[test]
    fn test_clear_line() {
        let mut m = Matrix::new(3, 0u8);
        m.set_symmetric(0, 2, 1);
        m.set_symmetric(1, 2, 1);
        m.set_symmetric(0, 1, 1);
        m.clear_line(2);

        assert_eq!(m.get(0, 2), 0);
        assert_eq!(m.get(2, 1), 0);
        assert_eq!(m.get(0, 1), 1);
    }

    #[test]
    fn test_remove_line_shifts_down() {
        // 0-1, 1-2, 2-3
        let mut m = Matrix::new(4, 0u8);
        m.set_symmetric(0, 1, 1);
        m.set_symmetric(1, 2, 2);
        m.set_symmetric(2, 3, 3);

        m.remove_line(1, 4);

        // old 2-3 is now 1-2; edges touching old 1 are gone
        assert_eq!(m.get(1, 2), 3);
        assert_eq!(m.get(2, 1), 3);
        assert_eq!(m.get(0, 1), 0);
        assert_eq!(m.get(0, 2), 0);
        for i in 0..4 {
            assert_eq!(m.get(3, i), 0);
            assert_eq!(m.get(i, 3), 0);
        }
    }

    #[test]
    fn test_zero_side_is_inert_until_grown() {
        let mut m = Matrix::new(0, false);
        m.clear_line(0);
        m.set_symmetric(0, 0, true);
        assert_eq!(m.side(), 0);
        assert!(!m.get(0, 0));

        m.grow(2);
        m.clear_line(1);
        m.set_symmetric(0, 1, true);
        assert!(m.get(1, 0));
    }
}
