// ─────────────────────────────────────────────────────────────────────
// IonScint Core — Scintillation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Scintillation photon yield per deposit.

use ionscint_types::config::ScintillationParams;
use ionscint_types::error::{IonScintError, IonScintResult};
use ionscint_types::species::ScintBucket;

/// Per-bucket photon yields [photons/MeV], prescale already applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesYieldTable {
    pub proton: f64,
    pub muon: f64,
    pub pion: f64,
    pub kaon: f64,
    pub alpha: f64,
    pub electron: f64,
}

impl SpeciesYieldTable {
    pub fn yield_for(&self, bucket: ScintBucket) -> f64 {
        match bucket {
            ScintBucket::Proton => self.proton,
            ScintBucket::Muon => self.muon,
            ScintBucket::Pion => self.pion,
            ScintBucket::Kaon => self.kaon,
            ScintBucket::Alpha => self.alpha,
            ScintBucket::Electron => self.electron,
        }
    }

    /// Yield for a PDG code; unknown codes get the electron yield.
    pub fn yield_for_pdg(&self, pdg_code: i32) -> f64 {
        self.yield_for(ScintBucket::from_pdg(pdg_code))
    }
}

/// How photon counts are derived from deposited energy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScintillationModel {
    /// `factor · base_yield · E` for every species.
    Uniform { base_yield: f64, factor: f64 },
    /// `table[species] · E`.
    ByParticleType(SpeciesYieldTable),
}

impl ScintillationModel {
    /// Build from raw parameters, applying `scint_pre_scale` to each yield.
    pub fn from_params(params: &ScintillationParams) -> Self {
        let pre = params.scint_pre_scale;
        if params.scint_by_particle_type {
            ScintillationModel::ByParticleType(SpeciesYieldTable {
                proton: params.proton_scint_yield * pre,
                muon: params.muon_scint_yield * pre,
                pion: params.pion_scint_yield * pre,
                kaon: params.kaon_scint_yield * pre,
                alpha: params.alpha_scint_yield * pre,
                electron: params.electron_scint_yield * pre,
            })
        } else {
            ScintillationModel::Uniform {
                base_yield: params.scint_yield * pre,
                factor: params.scint_yield_factor,
            }
        }
    }

    /// Every yield and the global factor must be finite and >= 0.
    pub fn validate(&self) -> IonScintResult<()> {
        let values: Vec<(&str, f64)> = match *self {
            ScintillationModel::Uniform { base_yield, factor } => {
                vec![("base yield", base_yield), ("yield factor", factor)]
            }
            ScintillationModel::ByParticleType(t) => vec![
                ("proton yield", t.proton),
                ("muon yield", t.muon),
                ("pion yield", t.pion),
                ("kaon yield", t.kaon),
                ("alpha yield", t.alpha),
                ("electron yield", t.electron),
            ],
        };
        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(IonScintError::ConfigError(format!(
                    "{name} must be finite and >= 0, got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn is_species_dependent(&self) -> bool {
        matches!(self, ScintillationModel::ByParticleType(_))
    }

    /// Photons for `energy` [MeV] deposited by species `pdg_code`.
    pub fn photons(&self, energy: f64, pdg_code: i32) -> f64 {
        match self {
            ScintillationModel::Uniform { base_yield, factor } => factor * base_yield * energy,
            ScintillationModel::ByParticleType(table) => {
                tracing::debug!(pdg_code, "scintillating by particle type");
                table.yield_for_pdg(pdg_code) * energy
            }
        }
    }
}
