use std::ops::RangeInclusive;

use uom::si::{f64::Pressure, pressure::bar};

use tankgauge_tables::{OrderedTable, TableError};

/// Pressure correction factors as a function of vessel pressure.
///
/// Corrects for the effect of vessel pressure on the contained volume.
/// Like the shell table this is a plain 1-D table, centered at 1.000 at
/// the ambient reference pressure.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureCorrectionTable {
    table: OrderedTable,
}

impl PressureCorrectionTable {
    /// Creates the table from `(pressure bar, factor)` points.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the points do not form a valid table.
    pub fn new<I>(points: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Ok(Self {
            table: OrderedTable::new(points)?,
        })
    }

    /// The pressure correction factor at `pressure`, clamped to the table range.
    #[must_use]
    pub fn factor_at(&self, pressure: Pressure) -> f64 {
        self.table.lookup(pressure.get::<bar>())
    }

    /// The pressure range (bar) covered by the table.
    #[must_use]
    pub fn pressure_domain(&self) -> RangeInclusive<f64> {
        self.table.key_domain()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn bars(value: f64) -> Pressure {
        Pressure::new::<bar>(value)
    }

    fn table() -> PressureCorrectionTable {
        PressureCorrectionTable::new([
            (16.0, 0.99992),
            (17.0, 1.00000),
            (18.0, 1.00008),
        ])
        .unwrap()
    }

    #[test]
    fn factor_is_unity_at_the_reference_pressure() {
        assert_relative_eq!(table().factor_at(bars(17.0)), 1.0);
    }

    #[test]
    fn factor_interpolates_between_whole_bars() {
        assert_relative_eq!(table().factor_at(bars(17.25)), 1.00002);
    }

    #[test]
    fn factor_clamps_outside_the_table() {
        let table = table();
        assert_relative_eq!(table.factor_at(bars(0.0)), 0.99992);
        assert_relative_eq!(table.factor_at(bars(300.0)), 1.00008);
    }
}
