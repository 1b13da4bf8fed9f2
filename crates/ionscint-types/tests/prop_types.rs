// ─────────────────────────────────────────────────────────────────────
// IonScint Core — Property-Based Tests (proptest) for ionscint-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for ionscint-types using proptest.
//!
//! Covers: species classification, yield totals, configuration validation.

use ionscint_types::config::DetectorConstants;
use ionscint_types::constants::lar_density;
use ionscint_types::deposit::{YieldResult, YieldTotals};
use ionscint_types::species::ScintBucket;
use proptest::prelude::*;

// ── Species Classification ───────────────────────────────────────────

proptest! {
    /// Any code without an explicit entry lands in the electron bucket.
    #[test]
    fn unmapped_codes_use_electron_bucket(pdg in any::<i32>()) {
        if !ScintBucket::is_mapped(pdg) {
            prop_assert_eq!(ScintBucket::from_pdg(pdg), ScintBucket::Electron);
        }
    }

    /// Classification never depends on anything but the code.
    #[test]
    fn classification_is_stable(pdg in any::<i32>()) {
        prop_assert_eq!(ScintBucket::from_pdg(pdg), ScintBucket::from_pdg(pdg));
    }
}

// ── Totals ───────────────────────────────────────────────────────────

proptest! {
    /// Totals count every result and sum non-negative inputs to non-negative output.
    #[test]
    fn totals_count_and_sum(
        values in prop::collection::vec((0.0f64..100.0, 0.0f64..1e6, 0.0f64..1e6), 0..64),
    ) {
        let results: Vec<YieldResult> = values
            .iter()
            .map(|&(e, ne, np)| YieldResult { energy_deposit: e, num_electrons: ne, num_photons: np })
            .collect();
        let totals = YieldTotals::from_results(&results);

        prop_assert_eq!(totals.n_deposits, results.len());
        let energy: f64 = values.iter().map(|v| v.0).sum();
        prop_assert!((totals.total_energy - energy).abs() < 1e-9 * energy.max(1.0));
        prop_assert!(totals.total_electrons >= 0.0);
        prop_assert!(totals.total_photons >= 0.0);
    }
}

// ── Configuration ────────────────────────────────────────────────────

proptest! {
    /// Liquid-phase temperatures always give a valid configuration.
    #[test]
    fn liquid_temperatures_validate(t in 83.8f64..150.0) {
        let mut cfg = DetectorConstants::default();
        cfg.argon.temperature = t;
        prop_assert!(cfg.validate().is_ok());
        prop_assert!(lar_density(t) > 0.0);
    }

    /// Non-positive drift fields are rejected.
    #[test]
    fn non_positive_field_rejected(efield in -10.0f64..=0.0) {
        let mut cfg = DetectorConstants::default();
        cfg.drift.efield = efield;
        prop_assert!(cfg.validate().is_err());
    }
}
