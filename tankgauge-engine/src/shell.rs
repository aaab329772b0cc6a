use std::ops::RangeInclusive;

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

use tankgauge_tables::{OrderedTable, TableError};

/// Shell correction factors as a function of shell temperature.
///
/// Corrects for thermal expansion and contraction of the tank shell itself.
/// The factor is 1.000 at the 20 °C reference temperature and nearly linear
/// on either side, so a plain 1-D table is sufficient.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellCorrectionTable {
    table: OrderedTable,
}

impl ShellCorrectionTable {
    /// Creates the table from `(temperature °C, factor)` points.
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

    /// The shell correction factor at `temperature`, clamped to the table range.
    #[must_use]
    pub fn factor_at(&self, temperature: ThermodynamicTemperature) -> f64 {
        self.table.lookup(temperature.get::<degree_celsius>())
    }

    /// The temperature range (°C) covered by the table.
    #[must_use]
    pub fn temperature_domain(&self) -> RangeInclusive<f64> {
        self.table.key_domain()
    }
}
