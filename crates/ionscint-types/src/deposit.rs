// ─────────────────────────────────────────────────────────────────────
// IonScint Core — Deposits
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

/// Position in the detector frame [cm].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { x, y, z }
    }
}

/// Dimensionless field offset (fraction of the nominal field per axis).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// One simulation step of deposited energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyDepositStep {
    /// Deposited energy [MeV].
    pub energy: f64,
    /// Step length [cm]. Zero is allowed and means no recombination survivors.
    pub step_length: f64,
    /// Step midpoint.
    pub midpoint: Point3,
    /// PDG particle code.
    pub pdg_code: i32,
}

impl EnergyDepositStep {
    pub fn new(energy: f64, step_length: f64, midpoint: Point3, pdg_code: i32) -> Self {
        EnergyDepositStep {
            energy,
            step_length,
            midpoint,
            pdg_code,
        }
    }
}

/// Electrons and photons produced by one deposit.
///
/// `num_electrons` is not corrected for attachment during drift; apply the
/// electron lifetime downstream. `Default` is the cleared state with all
/// counts zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct YieldResult {
    /// Energy that produced these counts [MeV].
    pub energy_deposit: f64,
    pub num_electrons: f64,
    pub num_photons: f64,
}

/// Running sums over a set of deposits.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct YieldTotals {
    pub n_deposits: usize,
    pub total_energy: f64,
    pub total_electrons: f64,
    pub total_photons: f64,
}

impl YieldTotals {
    pub fn add(&mut self, result: &YieldResult) {
        self.n_deposits += 1;
        self.total_energy += result.energy_deposit;
        self.total_electrons += result.num_electrons;
        self.total_photons += result.num_photons;
    }

    /// Sum results in slice order.
    pub fn from_results(results: &[YieldResult]) -> Self {
        let mut totals = YieldTotals::default();
        for r in results {
            totals.add(r);
        }
        totals
    }
}
