// ─────────────────────────────────────────────────────────────────────
// IonScint Core — Types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Shared value types for the liquid-argon ionization/scintillation core.
//!
//! Energy deposits, yield results, particle species buckets, detector
//! constants and the error type live here so that upstream producers and
//! downstream consumers can depend on them without pulling in the solver.

pub mod config;
pub mod constants;
pub mod deposit;
pub mod error;
pub mod species;
