// ─────────────────────────────────────────────────────────────────────
// IonScint Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reference liquid-argon parameters.
//!
//! Values follow the standard LAr simulation parameter set and are used as
//! configuration defaults. Recombination coefficients are the raw
//! (density-multiplied) calibration values; divide by the argon density
//! before use.

/// Ionization electrons produced per GeV of deposited energy (1 / W_ion).
pub const GEV_TO_ELECTRONS: f64 = 4.237e7;

/// MeV → GeV.
pub const MEV_TO_GEV: f64 = 1.0e-3;

/// Lower bound on dE/dx [MeV/cm]. Guards spurious steps; assumes LAr density.
pub const DEDX_FLOOR: f64 = 1.0;

/// Nominal drift field [kV/cm].
pub const DEFAULT_EFIELD_KV_CM: f64 = 0.5;

/// Liquid argon working temperature [K].
pub const DEFAULT_TEMPERATURE_K: f64 = 87.0;

/// Linear density fit ρ(T) = SLOPE·T + INTERCEPT [g/cm³].
pub const DENSITY_SLOPE: f64 = -0.00615;
pub const DENSITY_INTERCEPT: f64 = 1.928;

/// Birks recombination A (dimensionless).
pub const RECOMB_A: f64 = 0.800;

/// Birks recombination k [(g/MeV cm²)(kV/cm)].
pub const RECOMB_K: f64 = 0.0486;

/// Modified box A (dimensionless).
pub const MOD_BOX_A: f64 = 0.930;

/// Modified box B [(g/MeV cm²)(kV/cm)].
pub const MOD_BOX_B: f64 = 0.212;

/// Scintillation photons per MeV for minimum-ionizing particles.
pub const SCINT_YIELD: f64 = 24_000.0;

/// Fraction of produced photons actually tracked.
pub const SCINT_PRE_SCALE: f64 = 0.0287;

/// Per-species scintillation yields [photons/MeV].
pub const PROTON_SCINT_YIELD: f64 = 19_200.0;
pub const MUON_SCINT_YIELD: f64 = 24_000.0;
pub const PION_SCINT_YIELD: f64 = 24_000.0;
pub const KAON_SCINT_YIELD: f64 = 24_000.0;
pub const ALPHA_SCINT_YIELD: f64 = 16_800.0;
pub const ELECTRON_SCINT_YIELD: f64 = 20_000.0;

/// Liquid argon density [g/cm³] at `temperature` [K].
pub fn lar_density(temperature: f64) -> f64 {
    DENSITY_SLOPE * temperature + DENSITY_INTERCEPT
}
