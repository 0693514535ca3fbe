/// Dense square matrix of optional edge costs stored in a single row-major
/// vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<W> {
    cells: Vec<Option<W>>,
    size: usize,
}

impl<W: Copy> Matrix<W> {
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            size: 0,
        }
    }

    /// Number of rows, which equals the number of columns.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<W> {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: W) {
        let index = self.index(row, col);
        self.cells[index] = Some(value);
    }

    /// Clears the cell and returns its previous value.
    pub fn take(&mut self, row: usize, col: usize) -> Option<W> {
        let index = self.index(row, col);
        self.cells[index].take()
    }

    /// Adds `additional` empty rows and columns with a single reallocation.
    pub fn grow_by(&mut self, additional: usize) {
        if additional == 0 {
            return;
        }

        let prev = self.size;
        let size = prev + additional;
        let mut next = Vec::with_capacity(size * size);

        for row in self.cells.chunks_exact(prev.max(1)).take(prev) {
            next.extend_from_slice(row);
            // New elements at the end of each existing row.
            next.resize(next.len() + additional, None);
        }

        // The bottom rows.
        next.resize(size * size, None);

        self.cells = next;
        self.size = size;
    }

    /// Deletes the row and the column with the given index. Rows and columns
    /// after it are shifted by one.
    pub fn shrink(&mut self, removed: usize) {
        debug_assert!(removed < self.size);

        let prev = self.size;
        let mut i = 0;

        self.cells.retain(|_| {
            let (row, col) = (i / prev, i % prev);
            i += 1;
            row != removed && col != removed
        });

        self.size = prev - 1;
    }

    /// Non-empty cells of a row as `(column, value)` pairs.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, W)> + '_ {
        let start = self.index(row, 0);
        self.cells[start..start + self.size]
            .iter()
            .enumerate()
            .filter_map(|(col, cell)| cell.map(|value| (col, value)))
    }

    /// Non-empty cells of a column as `(row, value)` pairs.
    pub fn col(&self, col: usize) -> impl Iterator<Item = (usize, W)> + '_ {
        (0..self.size).filter_map(move |row| self.get(row, col).map(|value| (row, value)))
    }

    /// Copy of the matrix as nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<Option<W>>> {
        if self.size == 0 {
            return Vec::new();
        }

        self.cells
            .chunks_exact(self.size)
            .map(|row| row.to_vec())
            .collect()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.size && col < self.size);
        row * self.size + col
    }
}

impl<W: Copy> Default for Matrix<W> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(size: usize) -> Matrix<u32> {
        let mut matrix = Matrix::new();
        matrix.grow_by(size);

        // Cell value encodes its coordinates.
        for row in 0..size {
            for col in 0..size {
                matrix.set(row, col, (row * 10 + col) as u32);
            }
        }

        matrix
    }

    #[test]
    fn grow_preserves_cells() {
        let mut matrix = create(3);
        matrix.grow_by(1);

        assert_eq!(matrix.size(), 4);
        assert_eq!(matrix.get(1, 2), Some(12));
        assert_eq!(matrix.get(2, 1), Some(21));
        assert_eq!(matrix.get(3, 0), None);
        assert_eq!(matrix.get(0, 3), None);
        assert_eq!(matrix.get(3, 3), None);
    }

    #[test]
    fn grow_from_empty() {
        let mut matrix = Matrix::<u32>::new();
        matrix.grow_by(1);

        assert_eq!(matrix.size(), 1);
        assert_eq!(matrix.get(0, 0), None);
    }

    #[test]
    fn grow_by_many_at_once() {
        let mut matrix = create(2);
        matrix.grow_by(3);

        assert_eq!(matrix.size(), 5);
        assert_eq!(
            matrix.to_rows(),
            vec![
                vec![Some(0), Some(1), None, None, None],
                vec![Some(10), Some(11), None, None, None],
                vec![None; 5],
                vec![None; 5],
                vec![None; 5],
            ]
        );

        matrix.grow_by(0);
        assert_eq!(matrix.size(), 5);
    }

    #[test]
    fn shrink_middle() {
        let mut matrix = create(4);
        matrix.shrink(1);

        assert_eq!(matrix.size(), 3);
        assert_eq!(
            matrix.to_rows(),
            vec![
                vec![Some(0), Some(2), Some(3)],
                vec![Some(20), Some(22), Some(23)],
                vec![Some(30), Some(32), Some(33)],
            ]
        );
    }

    #[test]
    fn shrink_to_empty() {
        let mut matrix = create(1);
        matrix.shrink(0);

        assert_eq!(matrix.size(), 0);
        assert!(matrix.to_rows().is_empty());
    }

    #[test]
    fn row_and_col() {
        let mut matrix = Matrix::<u32>::new();
        matrix.grow_by(3);

        matrix.set(0, 1, 5);
        matrix.set(2, 1, 7);
        matrix.set(0, 2, 9);

        assert_eq!(matrix.row(0).collect::<Vec<_>>(), vec![(1, 5), (2, 9)]);
        assert_eq!(matrix.col(1).collect::<Vec<_>>(), vec![(0, 5), (2, 7)]);
        assert_eq!(matrix.take(0, 1), Some(5));
        assert_eq!(matrix.take(0, 1), None);
    }
}
