use serde::Serialize;
use uom::si::f64::{Length, Mass, MassDensity, Pressure, ThermodynamicTemperature, Volume};

use crate::{
    DensityCorrectionGrid, PressureCorrectionTable, ShellCorrectionTable, TankProfile,
    units::density_from_kg_per_liter,
};

/// A single set of gauge and environmental readings for one tank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Gauged liquid level.
    pub level: Length,
    /// Product temperature.
    pub product_temperature: ThermodynamicTemperature,
    /// Specific gravity of the product at the 60 °F reference.
    pub specific_gravity: f64,
    /// Temperature of the tank shell.
    pub shell_temperature: ThermodynamicTemperature,
    /// Vessel pressure.
    pub pressure: Pressure,
}

/// Which density the mass step multiplies against the corrected volume.
///
/// The corrected volume already includes the VCF, so the two bases differ
/// by exactly one factor of VCF in the final mass. Field measurement
/// practice varies; the choice is configuration, not a computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum MassBasis {
    /// `mass = corrected_volume · specific_gravity`.
    ///
    /// The observed specific gravity is used as-is, treating the VCF as a
    /// volume-only correction.
    #[default]
    ObservedGravity,
    /// `mass = corrected_volume · corrected_density`.
    ///
    /// The temperature-corrected density is used, applying the VCF a
    /// second time on the density side.
    CorrectedDensity,
}

/// How the pipeline composes the individual correction factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CorrectionPolicy {
    /// Whether the pressure correction factor multiplies into the
    /// corrected volume. It is always looked up and reported either way.
    pub apply_pcf: bool,
    pub mass_basis: MassBasis,
}

impl Default for CorrectionPolicy {
    /// Matches gauging practice for the certified tanks: PCF is reported
    /// but not multiplied in, and mass uses the observed gravity.
    fn default() -> Self {
        Self {
            apply_pcf: false,
            mass_basis: MassBasis::ObservedGravity,
        }
    }
}

/// The corrected inventory computed from one [`Observation`].
///
/// A plain value object: every intermediate factor stays separately
/// inspectable so downstream consumers can re-derive either mass formula
/// without re-running the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CorrectionResult {
    /// Volume read from the capacity table at the gauged level.
    pub reference_volume: Volume,
    /// Volume correction factor for product temperature.
    pub vcf: f64,
    /// Shell correction factor for shell temperature.
    pub scf: f64,
    /// Pressure correction factor for vessel pressure.
    pub pcf: f64,
    /// Reference volume with the policy's factors applied.
    pub corrected_volume: Volume,
    /// Product density corrected to the observed temperature.
    pub corrected_density: MassDensity,
    /// Product mass per the policy's mass basis.
    pub mass: Mass,
}

/// Composes the correction tables into a corrected volume and mass.
///
/// Owns the correction tables shared by every tank (the capacity table is
/// per-tank and supplied through the [`TankProfile`]). Evaluation is a
/// pure function of the observation: out-of-domain readings clamp
/// transitively through the underlying tables and no input can fail.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionPipeline {
    density: DensityCorrectionGrid,
    shell: ShellCorrectionTable,
    pressure: PressureCorrectionTable,
    policy: CorrectionPolicy,
}

impl CorrectionPipeline {
    /// Assembles a pipeline from its correction tables and policy.
    #[must_use]
    pub fn new(
        density: DensityCorrectionGrid,
        shell: ShellCorrectionTable,
        pressure: PressureCorrectionTable,
        policy: CorrectionPolicy,
    ) -> Self {
        Self {
            density,
            shell,
            pressure,
            policy,
        }
    }

    /// The volume-correction grid used for VCF lookups.
    #[must_use]
    pub fn density_grid(&self) -> &DensityCorrectionGrid {
        &self.density
    }

    /// The shell correction table.
    #[must_use]
    pub fn shell_table(&self) -> &ShellCorrectionTable {
        &self.shell
    }

    /// The pressure correction table.
    #[must_use]
    pub fn pressure_table(&self) -> &PressureCorrectionTable {
        &self.pressure
    }

    /// The active composition policy.
    #[must_use]
    pub fn policy(&self) -> CorrectionPolicy {
        self.policy
    }

    /// Computes the corrected inventory for one observation on `tank`.
    #[must_use]
    pub fn compute(&self, tank: &TankProfile, observation: &Observation) -> CorrectionResult {
        let reference_volume = tank.capacity.volume_at(observation.level);

        let vcf = self
            .density
            .vcf_at(observation.product_temperature, observation.specific_gravity);
        let scf = self.shell.factor_at(observation.shell_temperature);
        let pcf = self.pressure.factor_at(observation.pressure);

        let mut corrected_volume = reference_volume * vcf * scf;
        if self.policy.apply_pcf {
            corrected_volume *= pcf;
        }

        let corrected_density = self
            .density
            .corrected_density(observation.specific_gravity, observation.product_temperature);

        let mass = match self.policy.mass_basis {
            MassBasis::ObservedGravity => {
                corrected_volume * density_from_kg_per_liter(observation.specific_gravity)
            }
            MassBasis::CorrectedDensity => corrected_volume * corrected_density,
        };

        CorrectionResult {
            reference_volume,
            vcf,
            scf,
            pcf,
            corrected_volume,
            corrected_density,
            mass,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use jiff::civil::date;
    use ndarray::array;
    use uom::si::{
        length::millimeter, mass::kilogram, mass_density::kilogram_per_cubic_meter,
        pressure::bar, thermodynamic_temperature::degree_celsius, volume::liter,
    };

    use crate::{CalibrationCertificate, CapacityTable};

    use super::*;

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    fn tank() -> TankProfile {
        TankProfile {
            id: "tank-demo".into(),
            name: "Demo Tank".into(),
            owner: "Acme".into(),
            location: "Nowhere".into(),
            description: "LPG Bullet Tank".into(),
            inside_diameter: Length::new::<millimeter>(2267.0),
            shell_length: Length::new::<millimeter>(16_900.0),
            nominal_capacity: Volume::new::<liter>(65_000.0),
            max_gauged_level: Length::new::<millimeter>(2235.0),
            certificate: CalibrationCertificate {
                certificate_no: "CERT-001".into(),
                calibration_date: date(2025, 11, 24),
                validity_years: 10,
                uncertainty_percent: 0.012,
                method: "API MPMS CHAPTER 2".into(),
                calibrated_by: "Acme Labs".into(),
            },
            capacity_levels: Vec::new(),
            capacity: CapacityTable::new([(0.0, 66.0), (1.0, 74.0), (2.0, 81.0)]).unwrap(),
        }
    }

    fn pipeline(policy: CorrectionPolicy) -> CorrectionPipeline {
        let density = DensityCorrectionGrid::new(
            vec![20.0, 25.0],
            vec![0.500, 0.540],
            array![[1.000, 1.000], [0.984, 0.987]],
        )
        .unwrap();
        let shell =
            ShellCorrectionTable::new([(19.0, 0.999964), (20.0, 1.0), (21.0, 1.000036)]).unwrap();
        let pressure =
            PressureCorrectionTable::new([(16.0, 0.99992), (17.0, 1.0), (18.0, 1.00008)]).unwrap();

        CorrectionPipeline::new(density, shell, pressure, policy)
    }

    fn reference_observation() -> Observation {
        Observation {
            level: Length::new::<millimeter>(0.0),
            product_temperature: celsius(20.0),
            specific_gravity: 0.540,
            shell_temperature: celsius(20.0),
            pressure: Pressure::new::<bar>(17.0),
        }
    }

    #[test]
    fn reference_conditions_leave_the_volume_uncorrected() {
        let result = pipeline(CorrectionPolicy::default()).compute(&tank(), &reference_observation());

        assert_relative_eq!(result.reference_volume.get::<liter>(), 66.0, epsilon = 1e-9);
        assert_relative_eq!(result.vcf, 1.0);
        assert_relative_eq!(result.scf, 1.0);
        assert_relative_eq!(result.pcf, 1.0);
        assert_relative_eq!(result.corrected_volume.get::<liter>(), 66.0, epsilon = 1e-9);
        assert_relative_eq!(
            result.corrected_density.get::<kilogram_per_cubic_meter>(),
            540.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(result.mass.get::<kilogram>(), 66.0 * 0.540, epsilon = 1e-9);
    }

    #[test]
    fn warm_product_shrinks_the_corrected_volume() {
        let observation = Observation {
            product_temperature: celsius(25.0),
            ..reference_observation()
        };

        let result = pipeline(CorrectionPolicy::default()).compute(&tank(), &observation);

        assert_relative_eq!(result.vcf, 0.987);
        assert_relative_eq!(result.corrected_volume.get::<liter>(), 66.0 * 0.987, epsilon = 1e-9);
        assert_relative_eq!(
            result.corrected_density.get::<kilogram_per_cubic_meter>(),
            540.0 * 0.987,
            epsilon = 1e-9
        );
    }

    #[test]
    fn pcf_is_reported_but_only_applied_on_request() {
        let observation = Observation {
            pressure: Pressure::new::<bar>(16.0),
            ..reference_observation()
        };

        let reported = pipeline(CorrectionPolicy::default()).compute(&tank(), &observation);
        assert_relative_eq!(reported.pcf, 0.99992);
        assert_relative_eq!(reported.corrected_volume.get::<liter>(), 66.0, epsilon = 1e-9);

        let applied = pipeline(CorrectionPolicy {
            apply_pcf: true,
            ..CorrectionPolicy::default()
        })
        .compute(&tank(), &observation);
        assert_relative_eq!(applied.pcf, 0.99992);
        assert_relative_eq!(applied.corrected_volume.get::<liter>(), 66.0 * 0.99992, epsilon = 1e-9);
    }

    #[test]
    fn mass_basis_differs_by_exactly_one_vcf_factor() {
        let observation = Observation {
            product_temperature: celsius(25.0),
            ..reference_observation()
        };

        let observed = pipeline(CorrectionPolicy::default()).compute(&tank(), &observation);
        let corrected = pipeline(CorrectionPolicy {
            mass_basis: MassBasis::CorrectedDensity,
            ..CorrectionPolicy::default()
        })
        .compute(&tank(), &observation);

        assert_relative_eq!(
            corrected.mass.get::<kilogram>(),
            observed.mass.get::<kilogram>() * observed.vcf,
            epsilon = 1e-9
        );
    }

    #[test]
    fn far_out_of_range_readings_still_yield_defined_results() {
        let observation = Observation {
            level: Length::new::<millimeter>(-1e6),
            product_temperature: celsius(500.0),
            specific_gravity: -3.0,
            shell_temperature: celsius(-80.0),
            pressure: Pressure::new::<bar>(1e4),
        };

        let result = pipeline(CorrectionPolicy::default()).compute(&tank(), &observation);

        assert!(result.corrected_volume.get::<liter>().is_finite());
        assert!(result.mass.get::<kilogram>().is_finite());
        assert_relative_eq!(result.reference_volume.get::<liter>(), 66.0, epsilon = 1e-9);
        assert_relative_eq!(result.vcf, 0.984);
        assert_relative_eq!(result.scf, 0.999964);
        assert_relative_eq!(result.pcf, 1.00008);
    }
}
