//! Rectangular 2D grid storage for surface points, normals and colors

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Row-major 2D grid with a fixed shape.
///
/// Every stage of the pipeline produces one of these (points, normals,
/// colors) and all grids belonging to the same surface share a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid by evaluating `f(row, col)` at every cell.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.cols + col]
    }

    /// Iterate cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate `((row, col), value)` in row-major order.
    pub fn enumerate(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| ((i / self.cols, i % self.cols), v))
    }

    /// Apply `f` to every cell, producing a grid of the same shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Combine two grids of identical shape cell by cell.
    ///
    /// Panics if the shapes differ; the pipeline only ever zips grids
    /// derived from the same surface.
    pub fn zip_map<U, V>(&self, other: &Grid<U>, mut f: impl FnMut(&T, &U) -> V) -> Grid<V> {
        assert_eq!(
            self.shape(),
            other.shape(),
            "zip_map requires grids of identical shape"
        );
        Grid {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
        }
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows && col < self.cols, "grid index out of bounds");
        &self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_fills_row_major() {
        let grid = Grid::from_fn(2, 3, |r, c| (r, c));
        assert_eq!(grid.shape(), (2, 3));
        assert_eq!(grid[(0, 0)], (0, 0));
        assert_eq!(grid[(0, 2)], (0, 2));
        assert_eq!(grid[(1, 1)], (1, 1));
    }

    #[test]
    fn map_preserves_shape() {
        let grid = Grid::from_fn(3, 4, |r, c| r + c);
        let doubled = grid.map(|v| v * 2);
        assert_eq!(doubled.shape(), (3, 4));
        assert_eq!(doubled[(2, 3)], 10);
    }

    #[test]
    fn zip_map_combines_cells() {
        let a = Grid::from_fn(2, 2, |r, _| r as i32);
        let b = Grid::from_fn(2, 2, |_, c| c as i32);
        let sum = a.zip_map(&b, |x, y| x + y);
        assert_eq!(sum[(1, 1)], 2);
    }

    #[test]
    #[should_panic(expected = "identical shape")]
    fn zip_map_rejects_shape_mismatch() {
        let a = Grid::from_fn(2, 2, |_, _| 0);
        let b = Grid::from_fn(2, 3, |_, _| 0);
        let _ = a.zip_map(&b, |x, y| x + y);
    }
}
