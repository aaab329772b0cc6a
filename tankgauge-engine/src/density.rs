use std::ops::RangeInclusive;

use ndarray::Array2;
use uom::si::{
    f64::{MassDensity, ThermodynamicTemperature},
    thermodynamic_temperature::degree_celsius,
};

use tankgauge_tables::{BilinearGrid, GridError};

use crate::units::density_from_kg_per_liter;

/// Volume correction factors over temperature and specific gravity.
///
/// A 2-D reference grid: temperature rows (°C) against specific-gravity
/// columns (at 60 °F), holding the volume correction factor (VCF) that
/// relates observed volume to volume at the reference temperature. The
/// 20 °C row is 1.000 across every column by construction.
///
/// Both query coordinates clamp to the grid ranges, so any finite
/// temperature and gravity yield a defined factor.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityCorrectionGrid {
    grid: BilinearGrid,
}

impl DensityCorrectionGrid {
    /// Creates the grid from temperature rows, gravity columns, and the
    /// factor matrix (one row per temperature).
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if the axes are not strictly increasing or
    /// the matrix shape does not match them.
    pub fn new(
        temperatures: Vec<f64>,
        gravities: Vec<f64>,
        factors: Array2<f64>,
    ) -> Result<Self, GridError> {
        Ok(Self {
            grid: BilinearGrid::new(temperatures, gravities, factors)?,
        })
    }

    /// The volume correction factor at `temperature` and `specific_gravity`.
    ///
    /// Bilinear interpolation between the four surrounding grid points;
    /// exact whenever the query lands on a grid row and column.
    #[must_use]
    pub fn vcf_at(
        &self,
        temperature: ThermodynamicTemperature,
        specific_gravity: f64,
    ) -> f64 {
        self.grid
            .sample(temperature.get::<degree_celsius>(), specific_gravity)
    }

    /// The product density corrected to the observed temperature, in kg/L.
    ///
    /// `specific_gravity` is numerically the density in kg/L at the 60 °F
    /// reference, so the corrected density is `sg · vcf`.
    #[must_use]
    pub fn corrected_density(
        &self,
        specific_gravity: f64,
        temperature: ThermodynamicTemperature,
    ) -> MassDensity {
        let vcf = self.vcf_at(temperature, specific_gravity);
        density_from_kg_per_liter(specific_gravity * vcf)
    }

    /// Samples the grid into a rectangular preview matrix, one row per
    /// requested temperature, for factor-table displays.
    #[must_use]
    pub fn preview(
        &self,
        temperatures: &[ThermodynamicTemperature],
        gravities: &[f64],
    ) -> Vec<Vec<f64>> {
        temperatures
            .iter()
            .map(|&temperature| {
                gravities
                    .iter()
                    .map(|&gravity| self.vcf_at(temperature, gravity))
                    .collect()
            })
            .collect()
    }

    /// The temperature range (°C) covered by the grid rows.
    #[must_use]
    pub fn temperature_domain(&self) -> RangeInclusive<f64> {
        self.grid.row_domain()
    }

    /// The specific-gravity range covered by the grid columns.
    #[must_use]
    pub fn gravity_domain(&self) -> RangeInclusive<f64> {
        self.grid.column_domain()
    }
}
