use std::ops::RangeInclusive;

use ndarray::Array2;

use crate::{
    GridError,
    linear::{bracket, lerp},
};

/// A 2-D table with clamped bilinear interpolation.
///
/// Values are stored as an `Array2` whose shape is (row axis × column
/// axis). Both axes must be strictly increasing; they are validated once
/// at construction and the grid is immutable afterwards.
///
/// Sampling never fails. Coordinates outside either axis clamp to the
/// axis boundary, collapsing the interpolation to an edge (or corner) of
/// the grid, and coordinates that hit a grid point return the stored
/// value exactly.
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use tankgauge_tables::BilinearGrid;
///
/// let grid = BilinearGrid::new(
///     vec![0.0, 1.0],
///     vec![0.0, 1.0],
///     array![[0.0, 1.0], [2.0, 3.0]],
/// )
/// .unwrap();
///
/// assert_eq!(grid.sample(0.5, 0.5), 1.5);
/// assert_eq!(grid.sample(-4.0, 9.0), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BilinearGrid {
    rows: Vec<f64>,
    columns: Vec<f64>,
    values: Array2<f64>,
}

impl BilinearGrid {
    /// Creates a grid from its two axes and the value matrix.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if either axis has fewer than two
    /// coordinates, is not strictly increasing, contains non-finite data,
    /// or if the matrix shape does not match the axis lengths.
    pub fn new(
        rows: Vec<f64>,
        columns: Vec<f64>,
        values: Array2<f64>,
    ) -> Result<Self, GridError> {
        validate_axis("row", &rows)?;
        validate_axis("column", &columns)?;

        let (got_rows, got_columns) = values.dim();
        if got_rows != rows.len() || got_columns != columns.len() {
            return Err(GridError::ShapeMismatch {
                rows: rows.len(),
                columns: columns.len(),
                got_rows,
                got_columns,
            });
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(GridError::NonFiniteData);
        }

        Ok(Self {
            rows,
            columns,
            values,
        })
    }

    /// Bilinearly interpolates the value at `(row, column)` coordinates.
    ///
    /// Exact at grid points; clamped to the grid edges outside either
    /// axis. NaN in, NaN out.
    #[must_use]
    pub fn sample(&self, row: f64, column: f64) -> f64 {
        let r = bracket(&self.rows, row);
        let c = bracket(&self.columns, column);

        let lower = lerp(
            self.values[[r.lower, c.lower]],
            self.values[[r.lower, c.upper]],
            c.ratio,
        );
        let upper = lerp(
            self.values[[r.upper, c.lower]],
            self.values[[r.upper, c.upper]],
            c.ratio,
        );
        lerp(lower, upper, r.ratio)
    }

    /// The closed range covered by the row axis.
    #[must_use]
    pub fn row_domain(&self) -> RangeInclusive<f64> {
        self.rows[0]..=self.rows[self.rows.len() - 1]
    }

    /// The closed range covered by the column axis.
    #[must_use]
    pub fn column_domain(&self) -> RangeInclusive<f64> {
        self.columns[0]..=self.columns[self.columns.len() - 1]
    }

    /// The row axis coordinates.
    #[must_use]
    pub fn rows(&self) -> &[f64] {
        &self.rows
    }

    /// The column axis coordinates.
    #[must_use]
    pub fn columns(&self) -> &[f64] {
        &self.columns
    }

    /// The stored value matrix.
    #[must_use]
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }
}

fn validate_axis(axis: &'static str, coords: &[f64]) -> Result<(), GridError> {
    if coords.len() < 2 {
        return Err(GridError::AxisTooShort {
            axis,
            len: coords.len(),
        });
    }
    if coords.iter().any(|c| !c.is_finite()) {
        return Err(GridError::NonFiniteData);
    }
    if let Some(pair) = coords.windows(2).find(|pair| pair[0] >= pair[1]) {
        return Err(GridError::AxisNotIncreasing {
            axis,
            prev: pair[0],
            next: pair[1],
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;

    fn grid() -> BilinearGrid {
        BilinearGrid::new(
            vec![0.0, 1.0, 2.0],
            vec![0.0, 1.0, 2.0],
            array![[0.0, 0.4, 0.8], [0.2, 0.6, 1.0], [0.4, 0.8, 1.2]],
        )
        .unwrap()
    }

    #[test]
    fn new_rejects_shape_mismatch() {
        let result = BilinearGrid::new(
            vec![0.0, 1.0, 2.0],
            vec![0.0, 1.0],
            array![[0.0, 0.4], [0.2, 0.6]],
        );

        assert_eq!(
            result,
            Err(GridError::ShapeMismatch {
                rows: 3,
                columns: 2,
                got_rows: 2,
                got_columns: 2,
            })
        );
    }

    #[test]
    fn new_rejects_unsorted_axes() {
        let result = BilinearGrid::new(
            vec![0.0, 2.0, 1.0],
            vec![0.0, 1.0],
            array![[0.0, 0.4], [0.2, 0.6], [0.4, 0.8]],
        );

        assert!(matches!(result, Err(GridError::AxisNotIncreasing { .. })));
    }

    #[test]
    fn new_rejects_short_axes() {
        let result = BilinearGrid::new(vec![0.0], vec![0.0, 1.0], array![[0.0, 0.4]]);
        assert_eq!(
            result,
            Err(GridError::AxisTooShort {
                axis: "row",
                len: 1,
            })
        );
    }

    #[test]
    fn sample_is_exact_at_every_grid_point() {
        let grid = grid();
        for (i, &row) in grid.rows().iter().enumerate() {
            for (j, &column) in grid.columns().iter().enumerate() {
                assert_eq!(grid.sample(row, column), grid.values()[[i, j]]);
            }
        }
    }

    #[test]
    fn sample_interpolates_bilinearly() {
        assert_relative_eq!(grid().sample(1.5, 1.5), 0.9);
    }

    #[test]
    fn sample_collapses_to_an_edge_when_one_axis_clamps() {
        let grid = grid();

        // Row clamped high, column interpolated.
        assert_relative_eq!(grid.sample(10.0, 0.5), 0.6);

        // Column clamped low, row interpolated.
        assert_relative_eq!(grid.sample(0.5, -10.0), 0.1);
    }

    #[test]
    fn sample_collapses_to_a_corner_when_both_axes_clamp() {
        let grid = grid();
        assert_eq!(grid.sample(-1.0, -1.0), 0.0);
        assert_eq!(grid.sample(99.0, 99.0), 1.2);
    }

    #[test]
    fn sample_propagates_nan() {
        assert!(grid().sample(f64::NAN, 1.0).is_nan());
        assert!(grid().sample(1.0, f64::NAN).is_nan());
    }
}
