//! Helpers for the kilogram-per-liter density unit used by calibration
//! certificates.
//!
//! `uom` has no kilogram-per-liter unit, so conversions go through the
//! coherent kilogram-per-cubic-meter representation (1 kg/L = 1000 kg/m³).

use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter};

const KILOGRAMS_PER_LITER_IN_SI: f64 = 1000.0;

/// Builds a typed density from a value in kg/L.
#[must_use]
pub fn density_from_kg_per_liter(value: f64) -> MassDensity {
    MassDensity::new::<kilogram_per_cubic_meter>(value * KILOGRAMS_PER_LITER_IN_SI)
}

/// Reads a typed density back out in kg/L.
#[must_use]
pub fn density_in_kg_per_liter(density: MassDensity) -> f64 {
    density.get::<kilogram_per_cubic_meter>() / KILOGRAMS_PER_LITER_IN_SI
}
