// ─────────────────────────────────────────────────────────────────────
// IonScint Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{IonScintError, IonScintResult};

/// Raw detector constants, read once at initialization.
/// Every section and field is optional in JSON and falls back to the
/// standard LAr parameter set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectorConstants {
    #[serde(default)]
    pub recombination: RecombinationParams,
    #[serde(default)]
    pub argon: ArgonParams,
    #[serde(default)]
    pub drift: DriftParams,
    #[serde(default)]
    pub scintillation: ScintillationParams,
}

/// Recombination calibration. `mod_box_b` and `recomb_k` are raw values in
/// (g/MeV cm²)(kV/cm) and get divided by the argon density.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecombinationParams {
    /// Selects modified box (true) or Birks (false).
    #[serde(default = "default_use_mod_box")]
    pub use_mod_box: bool,
    #[serde(default = "default_mod_box_a")]
    pub mod_box_a: f64,
    #[serde(default = "default_mod_box_b")]
    pub mod_box_b: f64,
    #[serde(default = "default_recomb_a")]
    pub recomb_a: f64,
    #[serde(default = "default_recomb_k")]
    pub recomb_k: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgonParams {
    /// Temperature [K].
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Density override [g/cm³]. When absent the density comes from the
    /// temperature fit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftParams {
    /// Nominal drift field [kV/cm].
    #[serde(default = "default_efield")]
    pub efield: f64,
    #[serde(default = "default_ge_v_to_electrons")]
    pub ge_v_to_electrons: f64,
    /// Apply position-dependent field offsets from the distortion map.
    #[serde(default)]
    pub enable_efield_distortion: bool,
    #[serde(default)]
    pub offset_formula: OffsetFormula,
}

/// How a field offset combines with the nominal field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetFormula {
    /// `sqrt((E + E·ox)² + (E·oy + E·oy)² + (E·oz + E·oz)²)`.
    /// Reproduces existing simulation output bit for bit.
    #[default]
    Compatible,
    /// `|E·(1 + ox, oy, oz)|`, the magnitude of the perturbed field vector.
    Corrected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScintillationParams {
    /// Photons per MeV used when yields are not species dependent.
    #[serde(default = "default_scint_yield")]
    pub scint_yield: f64,
    /// Applied to every yield before use.
    #[serde(default = "default_scint_pre_scale")]
    pub scint_pre_scale: f64,
    /// Global factor, species-independent mode only.
    #[serde(default = "default_scint_yield_factor")]
    pub scint_yield_factor: f64,
    #[serde(default)]
    pub scint_by_particle_type: bool,
    #[serde(default = "default_proton_yield")]
    pub proton_scint_yield: f64,
    #[serde(default = "default_muon_yield")]
    pub muon_scint_yield: f64,
    #[serde(default = "default_pion_yield")]
    pub pion_scint_yield: f64,
    #[serde(default = "default_kaon_yield")]
    pub kaon_scint_yield: f64,
    #[serde(default = "default_alpha_yield")]
    pub alpha_scint_yield: f64,
    #[serde(default = "default_electron_yield")]
    pub electron_scint_yield: f64,
}

fn default_use_mod_box() -> bool {
    true
}
fn default_mod_box_a() -> f64 {
    MOD_BOX_A
}
fn default_mod_box_b() -> f64 {
    MOD_BOX_B
}
fn default_recomb_a() -> f64 {
    RECOMB_A
}
fn default_recomb_k() -> f64 {
    RECOMB_K
}
fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE_K
}
fn default_efield() -> f64 {
    DEFAULT_EFIELD_KV_CM
}
fn default_ge_v_to_electrons() -> f64 {
    GEV_TO_ELECTRONS
}
fn default_scint_yield() -> f64 {
    SCINT_YIELD
}
fn default_scint_pre_scale() -> f64 {
    SCINT_PRE_SCALE
}
fn default_scint_yield_factor() -> f64 {
    1.0
}
fn default_proton_yield() -> f64 {
    PROTON_SCINT_YIELD
}
fn default_muon_yield() -> f64 {
    MUON_SCINT_YIELD
}
fn default_pion_yield() -> f64 {
    PION_SCINT_YIELD
}
fn default_kaon_yield() -> f64 {
    KAON_SCINT_YIELD
}
fn default_alpha_yield() -> f64 {
    ALPHA_SCINT_YIELD
}
fn default_electron_yield() -> f64 {
    ELECTRON_SCINT_YIELD
}

impl Default for RecombinationParams {
    fn default() -> Self {
        RecombinationParams {
            use_mod_box: default_use_mod_box(),
            mod_box_a: default_mod_box_a(),
            mod_box_b: default_mod_box_b(),
            recomb_a: default_recomb_a(),
            recomb_k: default_recomb_k(),
        }
    }
}

impl Default for ArgonParams {
    fn default() -> Self {
        ArgonParams {
            temperature: default_temperature(),
            density: None,
        }
    }
}

impl Default for DriftParams {
    fn default() -> Self {
        DriftParams {
            efield: default_efield(),
            ge_v_to_electrons: default_ge_v_to_electrons(),
            enable_efield_distortion: false,
            offset_formula: OffsetFormula::default(),
        }
    }
}

impl Default for ScintillationParams {
    fn default() -> Self {
        ScintillationParams {
            scint_yield: default_scint_yield(),
            scint_pre_scale: default_scint_pre_scale(),
            scint_yield_factor: default_scint_yield_factor(),
            scint_by_particle_type: false,
            proton_scint_yield: default_proton_yield(),
            muon_scint_yield: default_muon_yield(),
            pion_scint_yield: default_pion_yield(),
            kaon_scint_yield: default_kaon_yield(),
            alpha_scint_yield: default_alpha_yield(),
            electron_scint_yield: default_electron_yield(),
        }
    }
}

fn require_positive(name: &str, value: f64) -> IonScintResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(IonScintError::ConfigError(format!(
            "{name} must be finite and > 0, got {value}"
        )));
    }
    Ok(())
}

fn require_non_negative(name: &str, value: f64) -> IonScintResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(IonScintError::ConfigError(format!(
            "{name} must be finite and >= 0, got {value}"
        )));
    }
    Ok(())
}

impl ArgonParams {
    /// Argon density [g/cm³]: the override if set, else ρ(T).
    pub fn density(&self) -> f64 {
        self.density.unwrap_or_else(|| lar_density(self.temperature))
    }
}

impl DetectorConstants {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> IonScintResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let constants: Self = serde_json::from_str(&contents)?;
        Ok(constants)
    }

    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> IonScintResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject values the yield model cannot use. Only the coefficients of
    /// the selected recombination model are checked.
    pub fn validate(&self) -> IonScintResult<()> {
        let r = &self.recombination;
        if r.use_mod_box {
            require_positive("mod_box_a", r.mod_box_a)?;
            require_positive("mod_box_b", r.mod_box_b)?;
        } else {
            require_positive("recomb_a", r.recomb_a)?;
            if r.recomb_a > 1.0 {
                return Err(IonScintError::ConfigError(format!(
                    "recomb_a must be <= 1, got {}",
                    r.recomb_a
                )));
            }
            require_positive("recomb_k", r.recomb_k)?;
        }

        require_positive("temperature", self.argon.temperature)?;
        let density = self.argon.density();
        if !density.is_finite() || density <= 0.0 {
            return Err(IonScintError::PhysicsViolation(format!(
                "argon density must be finite and > 0, got {density} at T = {} K",
                self.argon.temperature
            )));
        }

        require_positive("efield", self.drift.efield)?;
        require_positive("ge_v_to_electrons", self.drift.ge_v_to_electrons)?;

        let s = &self.scintillation;
        require_non_negative("scint_yield", s.scint_yield)?;
        require_non_negative("scint_pre_scale", s.scint_pre_scale)?;
        require_non_negative("scint_yield_factor", s.scint_yield_factor)?;
        require_non_negative("proton_scint_yield", s.proton_scint_yield)?;
        require_non_negative("muon_scint_yield", s.muon_scint_yield)?;
        require_non_negative("pion_scint_yield", s.pion_scint_yield)?;
        require_non_negative("kaon_scint_yield", s.kaon_scint_yield)?;
        require_non_negative("alpha_scint_yield", s.alpha_scint_yield)?;
        require_non_negative("electron_scint_yield", s.electron_scint_yield)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let cfg = DetectorConstants::default();
        cfg.validate().unwrap();
        assert!(cfg.recombination.use_mod_box);
        assert!(!cfg.drift.enable_efield_distortion);
        assert_eq!(cfg.drift.offset_formula, OffsetFormula::Compatible);
    }

    #[test]
    fn test_empty_json_gives_defaults() {
        let cfg = DetectorConstants::from_json("{}").unwrap();
        assert_eq!(cfg, DetectorConstants::default());
    }

    #[test]
    fn test_partial_json_overrides() {
        let cfg = DetectorConstants::from_json(
            r#"{
                "recombination": { "use_mod_box": false },
                "argon": { "density": 1.4 },
                "drift": { "efield": 0.273, "offset_formula": "corrected" },
                "scintillation": { "scint_by_particle_type": true }
            }"#,
        )
        .unwrap();
        assert!(!cfg.recombination.use_mod_box);
        assert!((cfg.recombination.recomb_k - RECOMB_K).abs() < 1e-15);
        assert!((cfg.argon.density() - 1.4).abs() < 1e-15);
        assert!((cfg.drift.efield - 0.273).abs() < 1e-15);
        assert_eq!(cfg.drift.offset_formula, OffsetFormula::Corrected);
        assert!(cfg.scintillation.scint_by_particle_type);
        cfg.validate().unwrap();
    }

    #[test]
    fn test_density_from_temperature() {
        let cfg = DetectorConstants::default();
        assert!((cfg.argon.density() - lar_density(87.0)).abs() < 1e-15);
    }

    #[test]
    fn test_rejects_zero_field() {
        let mut cfg = DetectorConstants::default();
        cfg.drift.efield = 0.0;
        assert!(matches!(cfg.validate(), Err(IonScintError::ConfigError(_))));
    }

    #[test]
    fn test_rejects_bad_birks_a_only_when_selected() {
        let mut cfg = DetectorConstants::default();
        cfg.recombination.recomb_a = 1.5;
        cfg.validate().unwrap();
        cfg.recombination.use_mod_box = false;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_rejects_nonphysical_density() {
        let mut cfg = DetectorConstants::default();
        cfg.argon.temperature = 400.0;
        assert!(matches!(
            cfg.validate(),
            Err(IonScintError::PhysicsViolation(_))
        ));
    }

    #[test]
    fn test_rejects_negative_yield() {
        let mut cfg = DetectorConstants::default();
        cfg.scintillation.alpha_scint_yield = -1.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_unknown_offset_formula_is_json_error() {
        let res = DetectorConstants::from_json(r#"{ "drift": { "offset_formula": "exact" } }"#);
        assert!(matches!(res, Err(IonScintError::Json(_))));
    }

    #[test]
    fn test_roundtrip_serialization() {
        let mut cfg = DetectorConstants::default();
        cfg.argon.density = Some(1.383);
        cfg.drift.enable_efield_distortion = true;
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let cfg2 = DetectorConstants::from_json(&json).unwrap();
        assert_eq!(cfg, cfg2);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("detector.json");
        std::fs::write(&path, r#"{ "drift": { "efield": 0.7 } }"#).unwrap();
        let cfg = DetectorConstants::from_file(path.to_str().unwrap()).unwrap();
        assert!((cfg.drift.efield - 0.7).abs() < 1e-15);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let res = DetectorConstants::from_file("/nonexistent/detector.json");
        assert!(matches!(res, Err(IonScintError::Io(_))));
    }
}
