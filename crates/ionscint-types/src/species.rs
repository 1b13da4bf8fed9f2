// ─────────────────────────────────────────────────────────────────────
// IonScint Core — Particle Species
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! PDG code → scintillation yield bucket.
//!
//! Unrecognized codes (neutrons, nuclear fragments, exotic states) fall into
//! the electron bucket. This is never an error.

use serde::{Deserialize, Serialize};

pub const PDG_ELECTRON: i32 = 11;
pub const PDG_MUON: i32 = 13;
pub const PDG_GAMMA: i32 = 22;
pub const PDG_PION: i32 = 211;
pub const PDG_KAON: i32 = 321;
pub const PDG_PROTON: i32 = 2212;
/// Alpha particle in the 10LZZZAAAI ion encoding (Z = 2, A = 4).
pub const PDG_ALPHA: i32 = 1_000_020_040;

/// Scintillation yield class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScintBucket {
    Proton,
    Muon,
    Pion,
    Kaon,
    Alpha,
    /// e±, γ, and every unrecognized species.
    Electron,
}

impl ScintBucket {
    /// Explicit entries. Only the antiparticles of muon, pion, kaon and
    /// electron share a bucket with the particle; antiprotons and anti-alphas
    /// are not listed.
    fn lookup(pdg_code: i32) -> Option<Self> {
        match pdg_code {
            PDG_PROTON => Some(ScintBucket::Proton),
            c if c == PDG_MUON || c == -PDG_MUON => Some(ScintBucket::Muon),
            c if c == PDG_PION || c == -PDG_PION => Some(ScintBucket::Pion),
            c if c == PDG_KAON || c == -PDG_KAON => Some(ScintBucket::Kaon),
            PDG_ALPHA => Some(ScintBucket::Alpha),
            c if c == PDG_ELECTRON || c == -PDG_ELECTRON || c == PDG_GAMMA => {
                Some(ScintBucket::Electron)
            }
            _ => None,
        }
    }

    /// Bucket for a PDG code, defaulting to [`ScintBucket::Electron`].
    pub fn from_pdg(pdg_code: i32) -> Self {
        Self::lookup(pdg_code).unwrap_or(ScintBucket::Electron)
    }

    /// True when `pdg_code` has an explicit entry rather than the default.
    pub fn is_mapped(pdg_code: i32) -> bool {
        Self::lookup(pdg_code).is_some()
    }
}
