// ─────────────────────────────────────────────────────────────────────
// IonScint Core — Yield Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Ionization electron and scintillation photon yields in liquid argon.
//!
//! Field model (nominal field + offset map) feeds the recombination model;
//! the calculator combines both with the scintillation table per deposit.

pub mod calculator;
pub mod distortion_map;
pub mod efield;
pub mod recombination;
pub mod scintillation;

pub use calculator::{IonScintCalculator, PhysicalConstants};
