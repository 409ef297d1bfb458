//! Dense two-axis aggregation grids
//!
//! A [`DensityMatrix`] owns one [`AxisPartition`] per axis and one cell per
//! (row segment, column segment) pair. Every key of the axis type lands in
//! some cell because both partitions carry infinite sentinels, so
//! accumulation never fails for out-of-range keys.

use latmap_core::{AxisPartition, Error, IndexedBoundary, Result};
use num_traits::Zero;
use std::fmt;
use std::ops::Add;

/// Row-major grid of `V` indexed by two independent axis partitions
#[derive(Debug, Clone, PartialEq)]
pub struct DensityMatrix<R, C, V> {
    rows: AxisPartition<R>,
    columns: AxisPartition<C>,
    cells: Vec<V>,
}

impl<R: Ord, C: Ord, V: Clone> DensityMatrix<R, C, V> {
    /// Create a matrix of `(|rows| + 1) x (|columns| + 1)` cells set to `zero`
    pub fn new<I, J>(row_split_points: I, column_split_points: J, zero: V) -> Self
    where
        I: IntoIterator<Item = R>,
        J: IntoIterator<Item = C>,
    {
        Self::from_partitions(
            AxisPartition::new(row_split_points),
            AxisPartition::new(column_split_points),
            zero,
        )
    }

    /// Create a matrix over existing partitions
    pub fn from_partitions(rows: AxisPartition<R>, columns: AxisPartition<C>, zero: V) -> Self {
        let cells = vec![zero; rows.segment_count() * columns.segment_count()];
        Self {
            rows,
            columns,
            cells,
        }
    }
}

impl<R: Ord, C: Ord, V> DensityMatrix<R, C, V> {
    /// Replace the cell holding `(row_key, column_key)` with `combine(cell)`
    ///
    /// Returns the `(row, column)` index of the updated cell.
    pub fn accumulate<F>(&mut self, row_key: &R, column_key: &C, combine: F) -> (usize, usize)
    where
        F: FnOnce(&V) -> V,
    {
        let row = self.rows.segment_of(row_key);
        let column = self.columns.segment_of(column_key);
        let idx = row * self.columns.segment_count() + column;
        self.cells[idx] = combine(&self.cells[idx]);
        (row, column)
    }
}

impl<R, C, V> DensityMatrix<R, C, V> {
    pub fn row_count(&self) -> usize {
        self.rows.segment_count()
    }

    pub fn column_count(&self) -> usize {
        self.columns.segment_count()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&V> {
        if row >= self.row_count() || column >= self.column_count() {
            return None;
        }
        self.cells.get(row * self.column_count() + column)
    }

    /// Cells of one row, in column order
    pub fn row(&self, row: usize) -> Option<&[V]> {
        let width = self.column_count();
        let start = row.checked_mul(width)?;
        self.cells.get(start..start + width)
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[V] {
        &self.cells
    }

    /// Iterate rows as slices
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[V]> + ExactSizeIterator + '_ {
        self.cells.chunks(self.column_count())
    }

    pub fn row_boundaries(&self) -> &[IndexedBoundary<R>] {
        self.rows.boundaries()
    }

    pub fn column_boundaries(&self) -> &[IndexedBoundary<C>] {
        self.columns.boundaries()
    }

    pub fn row_partition(&self) -> &AxisPartition<R> {
        &self.rows
    }

    pub fn column_partition(&self) -> &AxisPartition<C> {
        &self.columns
    }
}

impl<R, C, V: Clone> DensityMatrix<R, C, V> {
    /// Copy the grid out as nested vectors, row-major
    pub fn to_rows(&self) -> Vec<Vec<V>> {
        self.rows().map(<[V]>::to_vec).collect()
    }
}

impl<R: PartialEq, C: PartialEq, V> DensityMatrix<R, C, V> {
    /// Fold another matrix over the same partitions into this one, cell by cell
    pub fn merge<F>(&mut self, other: &Self, mut combine: F) -> Result<()>
    where
        F: FnMut(&V, &V) -> V,
    {
        if self.rows != other.rows || self.columns != other.columns {
            return Err(Error::InvalidInput(
                "cannot merge density matrices over different partitions".to_string(),
            ));
        }
        for (cell, theirs) in self.cells.iter_mut().zip(&other.cells) {
            *cell = combine(cell, theirs);
        }
        Ok(())
    }
}

impl<R, C, V> DensityMatrix<R, C, V>
where
    V: Copy + Zero + Add<Output = V> + PartialOrd,
{
    /// Sum of each row
    pub fn row_totals(&self) -> Vec<V> {
        self.rows()
            .map(|row| row.iter().fold(V::zero(), |acc, &v| acc + v))
            .collect()
    }

    /// Sum of each column
    pub fn column_totals(&self) -> Vec<V> {
        let mut totals = vec![V::zero(); self.column_count()];
        for row in self.rows() {
            for (total, &v) in totals.iter_mut().zip(row) {
                *total = *total + v;
            }
        }
        totals
    }

    /// Sum of all cells
    pub fn total(&self) -> V {
        self.cells.iter().fold(V::zero(), |acc, &v| acc + v)
    }

    /// Largest cell value
    pub fn max_cell(&self) -> Option<V> {
        self.cells
            .iter()
            .copied()
            .fold(None, |best, v| match best {
                Some(b) if b >= v => Some(b),
                _ => Some(v),
            })
    }
}

impl<R, C, V> fmt::Display for DensityMatrix<R, C, V>
where
    R: fmt::Display,
    C: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rows: {}", self.rows)?;
        writeln!(f, "columns: {}", self.columns)?;
        for (bounds, row) in self.row_boundaries().windows(2).zip(self.rows()) {
            write!(f, "[{},{}]:", bounds[0], bounds[1])?;
            for v in row {
                write!(f, " {v}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let m: DensityMatrix<i32, i64, u64> = DensityMatrix::new([10, 20], [100, 200, 300], 0);
        assert_eq!(m.row_count(), 3);
        assert_eq!(m.column_count(), 4);
        assert_eq!(m.cells().len(), 12);
        assert!(m.cells().iter().all(|&c| c == 0));
        assert_eq!(m.row_boundaries().len(), 4);
        assert_eq!(m.column_boundaries().len(), 5);
    }

    #[test]
    fn test_accumulate_counts() {
        let mut m = DensityMatrix::new([10, 20], [100, 200], 0u64);
        assert_eq!(m.accumulate(&15, &150, |c| c + 1), (1, 1));
        m.accumulate(&15, &150, |c| c + 1);
        m.accumulate(&-5, &1_000, |c| c + 1);
        m.accumulate(&25, &50, |c| c + 1);

        assert_eq!(m.get(1, 1), Some(&2));
        assert_eq!(m.get(0, 2), Some(&1));
        assert_eq!(m.get(2, 0), Some(&1));
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.total(), 4);
    }

    #[test]
    fn test_keys_on_split_points_fall_below() {
        let mut m = DensityMatrix::new([10], [10], 0u32);
        m.accumulate(&10, &10, |c| c + 1);
        assert_eq!(m.get(0, 0), Some(&1));
        m.accumulate(&11, &11, |c| c + 1);
        assert_eq!(m.get(1, 1), Some(&1));
    }

    #[test]
    fn test_generic_combine() {
        let mut m: DensityMatrix<u8, u8, Vec<u8>> = DensityMatrix::new([5], [5], Vec::new());
        m.accumulate(&1, &9, |v| {
            let mut v = v.clone();
            v.push(1);
            v
        });
        m.accumulate(&2, &8, |v| {
            let mut v = v.clone();
            v.push(2);
            v
        });
        assert_eq!(m.get(0, 1), Some(&vec![1, 2]));
    }

    #[test]
    fn test_totals_and_rows() {
        let mut m = DensityMatrix::new([10], [100], 0u64);
        m.accumulate(&5, &50, |c| c + 3);
        m.accumulate(&5, &150, |c| c + 1);
        m.accumulate(&15, &150, |c| c + 2);

        assert_eq!(m.to_rows(), vec![vec![3, 1], vec![0, 2]]);
        assert_eq!(m.row(1), Some(&[0, 2][..]));
        assert_eq!(m.row(2), None);
        assert_eq!(m.row_totals(), vec![4, 2]);
        assert_eq!(m.column_totals(), vec![3, 3]);
        assert_eq!(m.max_cell(), Some(3));
    }

    #[test]
    fn test_merge() {
        let mut a = DensityMatrix::new([10], [100], 0u64);
        let mut b = DensityMatrix::new([10], [100], 0u64);
        a.accumulate(&5, &50, |c| c + 1);
        b.accumulate(&5, &50, |c| c + 2);
        b.accumulate(&15, &150, |c| c + 1);
        a.merge(&b, |x, y| x + y).unwrap();
        assert_eq!(a.to_rows(), vec![vec![3, 0], vec![0, 1]]);

        let other = DensityMatrix::new([11], [100], 0u64);
        assert!(matches!(a.merge(&other, |x, y| x + y), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_display() {
        let mut m = DensityMatrix::new([10], [100], 0u64);
        m.accumulate(&15, &50, |c| c + 7);
        let text = m.to_string();
        assert!(text.contains("rows: [<, 10, >]"));
        assert!(text.contains("columns: [<, 100, >]"));
        assert!(text.contains("[<,10]: 0 0"));
        assert!(text.contains("[10,>]: 7 0"));
    }
}
