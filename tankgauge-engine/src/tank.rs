use jiff::{Span, civil::Date};
use serde::Serialize;
use uom::si::{
    f64::{Length, Volume},
    volume::liter,
};

use crate::CapacityTable;

/// A physical storage tank and its certified calibration data.
///
/// Created once at configuration time and shared read-only by the
/// correction pipeline and the presentation layer. The embedded
/// [`CapacityTable`] is the certificate's height→volume mapping and is
/// treated as ground truth within its measured range.
#[derive(Debug, Clone, PartialEq)]
pub struct TankProfile {
    /// Stable identifier used by callers to select a tank.
    pub id: String,
    /// Display name, e.g. "Tank 207".
    pub name: String,
    pub owner: String,
    pub location: String,
    /// Vessel description, e.g. "LPG Bullet Tank".
    pub description: String,
    /// Inside diameter of the shell.
    pub inside_diameter: Length,
    /// Overall shell length.
    pub shell_length: Length,
    /// Nameplate capacity of the vessel.
    pub nominal_capacity: Volume,
    /// The highest level the gauge can read, which may exceed the
    /// calibrated range of the capacity table.
    pub max_gauged_level: Length,
    pub certificate: CalibrationCertificate,
    /// Percentage→level milestones stated on the certificate.
    pub capacity_levels: Vec<CapacityLevel>,
    pub capacity: CapacityTable,
}

impl TankProfile {
    /// The fill level of `volume` against nominal capacity, in percent.
    #[must_use]
    pub fn fill_percent(&self, volume: Volume) -> f64 {
        100.0 * volume.get::<liter>() / self.nominal_capacity.get::<liter>()
    }
}

/// Metadata from a tank calibration certificate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalibrationCertificate {
    pub certificate_no: String,
    pub calibration_date: Date,
    /// How long the calibration remains valid, in years.
    pub validity_years: i16,
    /// Stated measurement uncertainty, in percent.
    pub uncertainty_percent: f64,
    /// Calibration method, e.g. "API MPMS CHAPTER 2".
    pub method: String,
    pub calibrated_by: String,
}

impl CalibrationCertificate {
    /// The date the calibration expires.
    #[must_use]
    pub fn valid_until(&self) -> Date {
        self.calibration_date
            .saturating_add(Span::new().years(i64::from(self.validity_years)))
    }
}

/// A percentage→level milestone from the certificate's capacity summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapacityLevel {
    pub percent: f64,
    pub level: Length,
}
