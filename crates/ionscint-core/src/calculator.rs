// ─────────────────────────────────────────────────────────────────────
// IonScint Core — Yield Calculator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Ionization electrons and scintillation photons per energy deposit.
//!
//! Electrons: N_e = G · 10⁻³ · E_dep · R(dE/dx, E_field), with G the
//! electrons-per-GeV constant and R the recombination survival fraction at
//! the local field. Photons: yield(species) · E_dep.
//!
//! All derived constants are fixed at construction and every computation
//! returns a fresh value, so one calculator can be shared across threads.

use ionscint_types::config::{DetectorConstants, OffsetFormula};
use ionscint_types::constants::MEV_TO_GEV;
use ionscint_types::deposit::{EnergyDepositStep, Point3, YieldResult, YieldTotals};
use ionscint_types::error::{IonScintError, IonScintResult};
use rayon::prelude::*;

use crate::efield::{EfieldOffsetProvider, FieldModel, NoDistortion};
use crate::recombination::RecombinationModel;
use crate::scintillation::ScintillationModel;

/// Calibrated constants in the form used per deposit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    pub recombination: RecombinationModel,
    pub scintillation: ScintillationModel,
    /// Electrons per GeV deposited.
    pub ge_v_to_electrons: f64,
    /// Nominal drift field [kV/cm].
    pub efield: f64,
    pub enable_efield_distortion: bool,
    pub offset_formula: OffsetFormula,
}

impl PhysicalConstants {
    /// One-time normalization of raw detector constants: density lookup,
    /// B/ρ and k/ρ, prescaled yields.
    pub fn derive(detector: &DetectorConstants) -> IonScintResult<Self> {
        detector.validate()?;
        let density = detector.argon.density();
        let recombination = RecombinationModel::from_params(&detector.recombination, density)?;
        let scintillation = ScintillationModel::from_params(&detector.scintillation);
        let constants = PhysicalConstants {
            recombination,
            scintillation,
            ge_v_to_electrons: detector.drift.ge_v_to_electrons,
            efield: detector.drift.efield,
            enable_efield_distortion: detector.drift.enable_efield_distortion,
            offset_formula: detector.drift.offset_formula,
        };
        constants.validate()?;
        tracing::info!(
            model = constants.recombination.name(),
            density,
            efield = constants.efield,
            by_particle_type = constants.scintillation.is_species_dependent(),
            distortion = constants.enable_efield_distortion,
            "derived ionization/scintillation constants"
        );
        Ok(constants)
    }

    /// Reject constants that would give a non-finite or out-of-range yield
    /// for some deposit at the nominal field.
    pub fn validate(&self) -> IonScintResult<()> {
        self.recombination.validate()?;
        self.scintillation.validate()?;
        if !self.efield.is_finite() || self.efield <= 0.0 {
            return Err(IonScintError::ConfigError(format!(
                "drift field must be finite and > 0, got {}",
                self.efield
            )));
        }
        self.recombination.check_field(self.efield)?;
        if !self.ge_v_to_electrons.is_finite() || self.ge_v_to_electrons <= 0.0 {
            return Err(IonScintError::ConfigError(format!(
                "GeV-to-electrons must be finite and > 0, got {}",
                self.ge_v_to_electrons
            )));
        }
        Ok(())
    }
}

/// Per-deposit yield calculator.
#[derive(Debug, Clone)]
pub struct IonScintCalculator<P = NoDistortion> {
    constants: PhysicalConstants,
    field: FieldModel<P>,
}

impl IonScintCalculator<NoDistortion> {
    /// Calculator without a distortion map. If the constants enable
    /// distortion, offsets are zero everywhere.
    pub fn uniform(detector: &DetectorConstants) -> IonScintResult<Self> {
        Self::initialize(detector, NoDistortion)
    }
}

impl<P: EfieldOffsetProvider> IonScintCalculator<P> {
    /// Derive constants from `detector` and attach the offset provider.
    pub fn initialize(detector: &DetectorConstants, provider: P) -> IonScintResult<Self> {
        let constants = PhysicalConstants::derive(detector)?;
        Self::with_constants(constants, provider)
    }

    /// Use already-normalized constants.
    pub fn with_constants(constants: PhysicalConstants, provider: P) -> IonScintResult<Self> {
        constants.validate()?;
        let field = FieldModel::new(
            constants.efield,
            constants.enable_efield_distortion,
            constants.offset_formula,
            provider,
        );
        Ok(IonScintCalculator { constants, field })
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    pub fn field_model(&self) -> &FieldModel<P> {
        &self.field
    }

    /// Field [kV/cm] used for recombination at `position`.
    pub fn effective_field(&self, position: Point3) -> f64 {
        self.field.effective_field(position)
    }

    /// Recombination survival fraction for a step.
    pub fn recombination_fraction(&self, energy: f64, step_length: f64, position: Point3) -> f64 {
        let efield = self.effective_field(position);
        self.constants
            .recombination
            .step_fraction(energy, step_length, efield)
    }

    /// Ionization electrons for `energy` [MeV] over `step_length` [cm] at
    /// `position`. Not corrected for electron lifetime.
    pub fn ionization(&self, energy: f64, step_length: f64, position: Point3) -> f64 {
        let recomb = self.recombination_fraction(energy, step_length, position);
        let electrons = self.constants.ge_v_to_electrons * MEV_TO_GEV * energy * recomb;
        tracing::debug!(
            energy,
            recomb,
            electrons,
            "electrons produced for deposit"
        );
        electrons
    }

    /// Scintillation photons for `energy` [MeV] deposited by `pdg_code`.
    pub fn scintillation(&self, energy: f64, pdg_code: i32) -> f64 {
        self.constants.scintillation.photons(energy, pdg_code)
    }

    /// Electrons and photons for one deposit.
    pub fn compute(&self, step: &EnergyDepositStep) -> YieldResult {
        YieldResult {
            energy_deposit: step.energy,
            num_electrons: self.ionization(step.energy, step.step_length, step.midpoint),
            num_photons: self.scintillation(step.energy, step.pdg_code),
        }
    }

    /// Evaluate deposits in parallel. Output order matches input order and
    /// each entry equals `compute` on the same deposit.
    pub fn compute_batch(&self, steps: &[EnergyDepositStep]) -> Vec<YieldResult> {
        steps.par_iter().map(|s| self.compute(s)).collect()
    }

    /// Sum of `compute` over `steps`, accumulated in input order.
    pub fn totals(&self, steps: &[EnergyDepositStep]) -> YieldTotals {
        YieldTotals::from_results(&self.compute_batch(steps))
    }
}
