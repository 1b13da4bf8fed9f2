// ─────────────────────────────────────────────────────────────────────
// IonScint Core — Recombination
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Electron-ion recombination in liquid argon.
//!
//! Two parameterizations of the fraction of ionization electrons that escape
//! recombination:
//!   modified box:  R = ln(A + ξ) / ξ,      ξ = B·(dE/dx) / E
//!   Birks:         R = A / (1 + k·(dE/dx) / E)
//! with dE/dx in MeV/cm, E in kV/cm, and B, k already divided by the argon
//! density.

use ionscint_types::config::RecombinationParams;
use ionscint_types::constants::DEDX_FLOOR;
use ionscint_types::error::{IonScintError, IonScintResult};

/// Active recombination model with density-normalized coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecombinationModel {
    ModBox { a: f64, b: f64 },
    Birks { a: f64, k: f64 },
}

impl RecombinationModel {
    /// Select the configured model and divide its density-dependent
    /// coefficient by `density` [g/cm³].
    pub fn from_params(params: &RecombinationParams, density: f64) -> IonScintResult<Self> {
        if !density.is_finite() || density <= 0.0 {
            return Err(IonScintError::PhysicsViolation(format!(
                "argon density must be finite and > 0, got {density}"
            )));
        }
        let model = if params.use_mod_box {
            RecombinationModel::ModBox {
                a: params.mod_box_a,
                b: params.mod_box_b / density,
            }
        } else {
            RecombinationModel::Birks {
                a: params.recomb_a,
                k: params.recomb_k / density,
            }
        };
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> IonScintResult<()> {
        match *self {
            RecombinationModel::ModBox { a, b } => {
                if !a.is_finite() || a <= 0.0 || !b.is_finite() || b <= 0.0 {
                    return Err(IonScintError::ConfigError(format!(
                        "modified box needs A > 0 and B > 0, got A = {a}, B = {b}"
                    )));
                }
            }
            RecombinationModel::Birks { a, k } => {
                if !a.is_finite() || a <= 0.0 || a > 1.0 || !k.is_finite() || k <= 0.0 {
                    return Err(IonScintError::ConfigError(format!(
                        "Birks needs 0 < A <= 1 and k > 0, got A = {a}, k = {k}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Check that the surviving fraction stays non-negative at `efield`
    /// [kV/cm] for every dE/dx at or above [`DEDX_FLOOR`].
    ///
    /// The modified box gives ln(A + ξ) < 0 once A + ξ < 1. ξ is smallest at
    /// the floor, so a field is usable only while A + B·floor/E >= 1.
    pub fn check_field(&self, efield: f64) -> IonScintResult<()> {
        if let RecombinationModel::ModBox { a, b } = *self {
            if a + b * DEDX_FLOOR / efield < 1.0 {
                return Err(IonScintError::PhysicsViolation(format!(
                    "modified box goes negative at {efield} kV/cm: \
                     need A + B·{DEDX_FLOOR}/E >= 1, got A = {a}, B = {b}"
                )));
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &'static str {
        match self {
            RecombinationModel::ModBox { .. } => "modified box",
            RecombinationModel::Birks { .. } => "Birks",
        }
    }

    /// Surviving fraction for a step with stopping power `dedx` [MeV/cm]
    /// in field `efield` [kV/cm]. No floor is applied here.
    pub fn fraction(&self, dedx: f64, efield: f64) -> f64 {
        match *self {
            RecombinationModel::ModBox { a, b } => {
                let xi = b * dedx / efield;
                (a + xi).ln() / xi
            }
            RecombinationModel::Birks { a, k } => a / (1.0 + dedx * k / efield),
        }
    }

    /// Surviving fraction for a deposit of `energy` [MeV] over `step_length`
    /// [cm]. Zero-length steps give 0 under both models; dE/dx below
    /// [`DEDX_FLOOR`] is raised to it.
    pub fn step_fraction(&self, energy: f64, step_length: f64, efield: f64) -> f64 {
        if step_length == 0.0 {
            return 0.0;
        }
        self.fraction(floored_dedx(energy, step_length), efield)
    }
}

/// `energy / step_length`, floored at [`DEDX_FLOOR`]. A zero step length
/// returns the floor instead of dividing by zero; so does a NaN ratio.
pub fn floored_dedx(energy: f64, step_length: f64) -> f64 {
    if step_length == 0.0 {
        return DEDX_FLOOR;
    }
    let dedx = energy / step_length;
    if dedx < DEDX_FLOOR || dedx.is_nan() {
        DEDX_FLOOR
    } else {
        dedx
    }
}
