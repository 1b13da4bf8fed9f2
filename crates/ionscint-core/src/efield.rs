// ─────────────────────────────────────────────────────────────────────
// IonScint Core — Drift Field
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Effective drift field at a deposit position.
//!
//! The nominal field is perturbed by a per-position offset vector (space
//! charge, field-cage defects) expressed as a fraction of the nominal field.

use ionscint_types::config::OffsetFormula;
use ionscint_types::deposit::{Point3, Vector3};
use ionscint_types::error::{IonScintError, IonScintResult};

/// Source of position-dependent field offsets.
///
/// Implementations must return offsets that pass [`check_offset`], so the
/// perturbed field stays finite and positive.
pub trait EfieldOffsetProvider: Send + Sync {
    /// Fractional offset (ox, oy, oz) of the field at `position`.
    fn efield_offsets(&self, position: Point3) -> Vector3;
}

/// Offsets must be finite with `ox > -1`. At `ox <= -1` the longitudinal
/// component vanishes or reverses.
pub fn check_offset(o: Vector3) -> IonScintResult<()> {
    if !o.is_finite() {
        return Err(IonScintError::DistortionMap(format!(
            "offset must be finite, got {o:?}"
        )));
    }
    if o.x <= -1.0 {
        return Err(IonScintError::DistortionMap(format!(
            "longitudinal offset must be > -1, got {}",
            o.x
        )));
    }
    Ok(())
}

/// Provider with zero offset everywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDistortion;

impl EfieldOffsetProvider for NoDistortion {
    fn efield_offsets(&self, _position: Point3) -> Vector3 {
        Vector3::ZERO
    }
}

/// Same offset at every position.
#[derive(Debug, Clone, Copy)]
pub struct UniformOffset(Vector3);

impl UniformOffset {
    pub fn new(offset: Vector3) -> IonScintResult<Self> {
        check_offset(offset)?;
        Ok(UniformOffset(offset))
    }
}

impl EfieldOffsetProvider for UniformOffset {
    fn efield_offsets(&self, _position: Point3) -> Vector3 {
        self.0
    }
}

impl<P: EfieldOffsetProvider + ?Sized> EfieldOffsetProvider for Box<P> {
    fn efield_offsets(&self, position: Point3) -> Vector3 {
        (**self).efield_offsets(position)
    }
}

impl<P: EfieldOffsetProvider + ?Sized> EfieldOffsetProvider for std::sync::Arc<P> {
    fn efield_offsets(&self, position: Point3) -> Vector3 {
        (**self).efield_offsets(position)
    }
}

/// Field magnitude from nominal field `efield` and offset `o`.
///
/// `Compatible` keeps the historical arithmetic where the y and z terms are
/// `E·o + E·o` rather than `E·o`; `Corrected` is the true magnitude of
/// `E·(1 + ox, oy, oz)`. Both reduce to `E` for a zero offset.
pub fn perturbed_magnitude(efield: f64, o: Vector3, formula: OffsetFormula) -> f64 {
    match formula {
        OffsetFormula::Compatible => {
            let ex = efield + efield * o.x;
            let ey = efield * o.y + efield * o.y;
            let ez = efield * o.z + efield * o.z;
            (ex * ex + ey * ey + ez * ez).sqrt()
        }
        OffsetFormula::Corrected => {
            let ex = efield * (1.0 + o.x);
            let ey = efield * o.y;
            let ez = efield * o.z;
            (ex * ex + ey * ey + ez * ez).sqrt()
        }
    }
}

/// Nominal drift field plus an optional offset map.
#[derive(Debug, Clone)]
pub struct FieldModel<P> {
    /// Nominal field [kV/cm].
    pub nominal: f64,
    pub distortion_enabled: bool,
    pub formula: OffsetFormula,
    provider: P,
}

impl FieldModel<NoDistortion> {
    /// Uniform field with no distortion lookup.
    pub fn uniform(nominal: f64) -> Self {
        FieldModel {
            nominal,
            distortion_enabled: false,
            formula: OffsetFormula::Compatible,
            provider: NoDistortion,
        }
    }
}

impl<P: EfieldOffsetProvider> FieldModel<P> {
    pub fn new(nominal: f64, distortion_enabled: bool, formula: OffsetFormula, provider: P) -> Self {
        FieldModel {
            nominal,
            distortion_enabled,
            formula,
            provider,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Effective field [kV/cm] at `position`. The provider is not queried
    /// when distortion is disabled.
    pub fn effective_field(&self, position: Point3) -> f64 {
        if !self.distortion_enabled {
            return self.nominal;
        }
        let offsets = self.provider.efield_offsets(position);
        perturbed_magnitude(self.nominal, offsets, self.formula)
    }
}
