//! Compiled-in calibration data for the certified tanks.
//!
//! Two LPG bullet tanks calibrated under certificates 20257001051EN-207
//! and 20257001051EN-002, plus the correction-factor tables shared by
//! both: shell factors over 10–69 °C, pressure factors over 1–60 bar,
//! and the 15.5–30.0 °C × 0.500–0.590 SG volume-correction grid.
//!
//! Everything here is static configuration, validated once at
//! construction. There is no file or wire format.

mod factors;
mod tank_207;

use jiff::civil::date;
use ndarray::arr2;
use uom::si::{
    f64::{Length, Volume},
    length::millimeter,
    volume::liter,
};

use crate::{
    CalibrationCertificate, CapacityLevel, CapacityTable, CorrectionPipeline, CorrectionPolicy,
    DensityCorrectionGrid, PressureCorrectionTable, ShellCorrectionTable, TankProfile,
};

/// Tank 207, certificate 20257001051EN-207.
#[must_use]
pub fn tank_207() -> TankProfile {
    TankProfile {
        id: "tank-207".into(),
        name: "Tank 207".into(),
        certificate: certificate("20257001051EN-207"),
        nominal_capacity: Volume::new::<liter>(65_000.0),
        capacity_levels: capacity_levels([
            (5.0, 112.0),
            (10.0, 224.0),
            (85.0, 1901.0),
            (90.0, 2013.0),
            (95.0, 2125.0),
            (100.0, 2237.0),
        ]),
        ..bullet_tank()
    }
}

/// Tank 2, certificate 20257001051EN-002.
#[must_use]
pub fn tank_2() -> TankProfile {
    TankProfile {
        id: "tank-2".into(),
        name: "Tank 2".into(),
        certificate: certificate("20257001051EN-002"),
        nominal_capacity: Volume::new::<liter>(64_059.0),
        capacity_levels: capacity_levels([
            (5.0, 112.0),
            (10.0, 224.0),
            (85.0, 1901.0),
            (90.0, 2013.0),
            (95.0, 2125.0),
            (100.0, 2235.0),
        ]),
        ..bullet_tank()
    }
}

/// Every certified tank, in certificate order.
#[must_use]
pub fn all() -> Vec<TankProfile> {
    vec![tank_207(), tank_2()]
}

/// Finds a certified tank by its identifier.
#[must_use]
pub fn find(id: &str) -> Option<TankProfile> {
    all().into_iter().find(|tank| tank.id == id)
}

/// The volume-correction grid shared by both tanks.
#[must_use]
pub fn density_grid() -> DensityCorrectionGrid {
    DensityCorrectionGrid::new(
        factors::GRID_TEMPERATURES.to_vec(),
        factors::GRID_GRAVITIES.to_vec(),
        arr2(&factors::VOLUME_CORRECTION_FACTORS),
    )
    .expect("certified grid axes are increasing and the matrix matches them")
}

/// The shell correction table shared by both tanks.
#[must_use]
pub fn shell_table() -> ShellCorrectionTable {
    ShellCorrectionTable::new(factors::SHELL_FACTORS)
        .expect("certified shell factors form a valid table")
}

/// The pressure correction table shared by both tanks.
#[must_use]
pub fn pressure_table() -> PressureCorrectionTable {
    PressureCorrectionTable::new(factors::PRESSURE_FACTORS)
        .expect("certified pressure factors form a valid table")
}

/// Assembles a [`CorrectionPipeline`] over the certified tables with the
/// default composition policy.
#[must_use]
pub fn pipeline() -> CorrectionPipeline {
    CorrectionPipeline::new(
        density_grid(),
        shell_table(),
        pressure_table(),
        CorrectionPolicy::default(),
    )
}

/// The fields every certified bullet tank shares.
///
/// Both certificates publish the same geometry and the same low-range
/// height→volume excerpt.
fn bullet_tank() -> TankProfile {
    TankProfile {
        id: String::new(),
        name: String::new(),
        owner: "Mabati Rolling Mills".into(),
        location: "Mombasa, Kenya".into(),
        description: "LPG Bullet Tank".into(),
        inside_diameter: Length::new::<millimeter>(2267.0),
        shell_length: Length::new::<millimeter>(16_900.0),
        nominal_capacity: Volume::new::<liter>(0.0),
        max_gauged_level: Length::new::<millimeter>(2235.0),
        certificate: certificate(""),
        capacity_levels: Vec::new(),
        capacity: CapacityTable::new(tank_207::CAPACITY_POINTS)
            .expect("certificate capacity points form a valid table"),
    }
}

fn certificate(number: &str) -> CalibrationCertificate {
    CalibrationCertificate {
        certificate_no: number.into(),
        calibration_date: date(2025, 11, 24),
        validity_years: 10,
        uncertainty_percent: 0.012,
        method: "API MPMS CHAPTER 2".into(),
        calibrated_by: "Murban Engineering Limited".into(),
    }
}

fn capacity_levels<const N: usize>(levels: [(f64, f64); N]) -> Vec<CapacityLevel> {
    levels
        .into_iter()
        .map(|(percent, level)| CapacityLevel {
            percent,
            level: Length::new::<millimeter>(level),
        })
        .collect()
}
