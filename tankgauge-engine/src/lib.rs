//! Calibration-table and correction engine for fixed storage tanks.
//!
//! Computes liquid inventory (volume and mass) from a gauged liquid level
//! using certified calibration tables and standard petroleum-measurement
//! correction factors: temperature-based volume correction (VCF), shell
//! thermal expansion (SCF), and vessel pressure correction (PCF).
//!
//! Every lookup is a pure function of immutable table data. Out-of-domain
//! inputs clamp to the nearest table boundary rather than failing; the
//! engine never extrapolates beyond certified data.

mod capacity;
mod density;
mod pipeline;
mod pressure;
mod shell;
mod tank;

pub mod certified;
pub mod units;

pub use capacity::CapacityTable;
pub use density::DensityCorrectionGrid;
pub use pipeline::{
    CorrectionPipeline, CorrectionPolicy, CorrectionResult, MassBasis, Observation,
};
pub use pressure::PressureCorrectionTable;
pub use shell::ShellCorrectionTable;
pub use tank::{CalibrationCertificate, CapacityLevel, TankProfile};

pub use tankgauge_tables::{GridError, TableError};
