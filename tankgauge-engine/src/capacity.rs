use uom::si::{
    f64::{Length, Volume},
    length::millimeter,
    volume::liter,
};

use tankgauge_tables::{OrderedTable, TableError};

/// A tank's certified height→volume calibration table.
///
/// Built once from the calibration certificate's `(mm, L)` points and shared
/// read-only for the life of the tank. Volumes outside the calibrated range
/// are not certifiably known, so queries beyond either end clamp to the
/// boundary entry instead of extrapolating.
///
/// Certificate volumes are stated in whole liters and gauge readings in
/// whole millimeters; interpolated results are rounded back to the same
/// resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityTable {
    table: OrderedTable,
}

impl CapacityTable {
    /// Creates a capacity table from certificate `(height mm, volume L)` points.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the points do not form a valid table
    /// (fewer than two, non-finite, or duplicate heights).
    pub fn new<I>(points: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Ok(Self {
            table: OrderedTable::new(points)?,
        })
    }

    /// The volume of product at the gauged `level`.
    #[must_use]
    pub fn volume_at(&self, level: Length) -> Volume {
        let liters = self.table.lookup(level.get::<millimeter>());
        Volume::new::<liter>(liters.round())
    }

    /// The gauge level corresponding to `volume`.
    ///
    /// The inverse of [`volume_at`](Self::volume_at); certificate volumes
    /// increase monotonically with height, so the inverse is well defined.
    #[must_use]
    pub fn level_at(&self, volume: Volume) -> Length {
        let millimeters = self.table.inverse_lookup(volume.get::<liter>());
        Length::new::<millimeter>(millimeters.round())
    }

    /// The lowest calibrated gauge level.
    #[must_use]
    pub fn min_level(&self) -> Length {
        Length::new::<millimeter>(self.table.min_key())
    }

    /// The highest calibrated gauge level.
    #[must_use]
    pub fn max_level(&self) -> Length {
        Length::new::<millimeter>(self.table.max_key())
    }

    /// The volume at the lowest calibrated level (the tank heel).
    #[must_use]
    pub fn min_volume(&self) -> Volume {
        Volume::new::<liter>(self.table.first_value())
    }

    /// The volume at the highest calibrated level.
    #[must_use]
    pub fn max_volume(&self) -> Volume {
        Volume::new::<liter>(self.table.last_value())
    }

    /// The underlying certificate points, for table dialogs and validators.
    #[must_use]
    pub fn points(&self) -> &OrderedTable {
        &self.table
    }
}
