// ─────────────────────────────────────────────────────────────────────
// IonScint Core — Field Distortion Map
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Tabulated drift-field offsets on a regular 3D grid.
//!
//! Offsets are stored per node as fractions of the nominal field and are
//! trilinearly interpolated. Positions outside the grid are clamped to the
//! nearest boundary cell.

use ionscint_types::deposit::{Point3, Vector3};
use ionscint_types::error::{IonScintError, IonScintResult};
use ndarray::Array3;
use serde::{Deserialize, Serialize};

use crate::efield::EfieldOffsetProvider;

/// On-disk form of a distortion map. Component arrays are flattened in
/// row-major `[ix, iy, iz]` order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistortionMapFile {
    /// Position of node (0, 0, 0) [cm].
    pub origin: [f64; 3],
    /// Node spacing along x, y, z [cm].
    pub spacing: [f64; 3],
    /// Node counts along x, y, z.
    pub shape: [usize; 3],
    pub offsets_x: Vec<f64>,
    pub offsets_y: Vec<f64>,
    pub offsets_z: Vec<f64>,
}

/// Regular-grid offset map.
#[derive(Debug, Clone)]
pub struct GridDistortionMap {
    origin: [f64; 3],
    spacing: [f64; 3],
    ox: Array3<f64>,
    oy: Array3<f64>,
    oz: Array3<f64>,
}

impl GridDistortionMap {
    /// Build from component arrays of identical shape `[nx, ny, nz]`.
    pub fn new(
        origin: [f64; 3],
        spacing: [f64; 3],
        ox: Array3<f64>,
        oy: Array3<f64>,
        oz: Array3<f64>,
    ) -> IonScintResult<Self> {
        if origin.iter().any(|v| !v.is_finite()) {
            return Err(IonScintError::DistortionMap(format!(
                "origin must be finite, got {origin:?}"
            )));
        }
        if spacing.iter().any(|&d| !d.is_finite() || d <= 0.0) {
            return Err(IonScintError::DistortionMap(format!(
                "spacing must be finite and > 0, got {spacing:?}"
            )));
        }
        let dim = ox.dim();
        if dim.0 < 2 || dim.1 < 2 || dim.2 < 2 {
            return Err(IonScintError::DistortionMap(format!(
                "need at least 2 nodes per axis, got {dim:?}"
            )));
        }
        if oy.dim() != dim || oz.dim() != dim {
            return Err(IonScintError::DistortionMap(format!(
                "component shapes differ: x {dim:?}, y {:?}, z {:?}",
                oy.dim(),
                oz.dim()
            )));
        }
        if [&oy, &oz].iter().any(|a| a.iter().any(|v| !v.is_finite())) {
            return Err(IonScintError::DistortionMap(
                "offsets contain non-finite values".to_string(),
            ));
        }
        // Interpolated ox is a convex combination of node values, so bounding
        // the nodes bounds every lookup.
        let bad_ox = ox
            .indexed_iter()
            .find(|(_, v)| !v.is_finite() || **v <= -1.0);
        if let Some(((ix, iy, iz), &v)) = bad_ox {
            return Err(IonScintError::DistortionMap(format!(
                "ox at node ({ix}, {iy}, {iz}) must be finite and > -1, got {v}"
            )));
        }
        Ok(GridDistortionMap {
            origin,
            spacing,
            ox,
            oy,
            oz,
        })
    }

    /// Uniform offset over the box spanned by `origin` and `spacing` with
    /// `shape` nodes.
    pub fn uniform(
        origin: [f64; 3],
        spacing: [f64; 3],
        shape: [usize; 3],
        offset: Vector3,
    ) -> IonScintResult<Self> {
        let dim = (shape[0], shape[1], shape[2]);
        Self::new(
            origin,
            spacing,
            Array3::from_elem(dim, offset.x),
            Array3::from_elem(dim, offset.y),
            Array3::from_elem(dim, offset.z),
        )
    }

    pub fn from_map_file(file: DistortionMapFile) -> IonScintResult<Self> {
        let dim = (file.shape[0], file.shape[1], file.shape[2]);
        let component = |name: &str, data: Vec<f64>| {
            let len = data.len();
            Array3::from_shape_vec(dim, data).map_err(|_| {
                IonScintError::DistortionMap(format!(
                    "{name}: {len} values do not fill shape {:?}",
                    file.shape
                ))
            })
        };
        let ox = component("offsets_x", file.offsets_x)?;
        let oy = component("offsets_y", file.offsets_y)?;
        let oz = component("offsets_z", file.offsets_z)?;
        Self::new(file.origin, file.spacing, ox, oy, oz)
    }

    /// Load a JSON [`DistortionMapFile`].
    pub fn from_file(path: &str) -> IonScintResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let file: DistortionMapFile = serde_json::from_str(&contents)?;
        Self::from_map_file(file)
    }

    pub fn shape(&self) -> [usize; 3] {
        let (nx, ny, nz) = self.ox.dim();
        [nx, ny, nz]
    }

    /// Offset at node `(ix, iy, iz)`.
    pub fn node(&self, ix: usize, iy: usize, iz: usize) -> Vector3 {
        Vector3::new(
            self.ox[[ix, iy, iz]],
            self.oy[[ix, iy, iz]],
            self.oz[[ix, iy, iz]],
        )
    }

    /// Lower cell index and fractional position along one axis.
    fn locate(&self, axis: usize, coord: f64, n: usize) -> (usize, f64) {
        let f = (coord - self.origin[axis]) / self.spacing[axis];
        let i0 = (f.floor() as isize).clamp(0, n as isize - 2) as usize;
        let t = (f - i0 as f64).clamp(0.0, 1.0);
        (i0, t)
    }

    fn trilinear(field: &Array3<f64>, i: [usize; 3], t: [f64; 3]) -> f64 {
        let [ix, iy, iz] = i;
        let [tx, ty, tz] = t;
        let c00 = (1.0 - tx) * field[[ix, iy, iz]] + tx * field[[ix + 1, iy, iz]];
        let c10 = (1.0 - tx) * field[[ix, iy + 1, iz]] + tx * field[[ix + 1, iy + 1, iz]];
        let c01 = (1.0 - tx) * field[[ix, iy, iz + 1]] + tx * field[[ix + 1, iy, iz + 1]];
        let c11 =
            (1.0 - tx) * field[[ix, iy + 1, iz + 1]] + tx * field[[ix + 1, iy + 1, iz + 1]];
        let c0 = (1.0 - ty) * c00 + ty * c10;
        let c1 = (1.0 - ty) * c01 + ty * c11;
        (1.0 - tz) * c0 + tz * c1
    }

    /// Interpolated offset at `position`.
    pub fn interpolate(&self, position: Point3) -> Vector3 {
        let [nx, ny, nz] = self.shape();
        let (ix, tx) = self.locate(0, position.x, nx);
        let (iy, ty) = self.locate(1, position.y, ny);
        let (iz, tz) = self.locate(2, position.z, nz);
        let i = [ix, iy, iz];
        let t = [tx, ty, tz];
        Vector3::new(
            Self::trilinear(&self.ox, i, t),
            Self::trilinear(&self.oy, i, t),
            Self::trilinear(&self.oz, i, t),
        )
    }
}

impl EfieldOffsetProvider for GridDistortionMap {
    fn efield_offsets(&self, position: Point3) -> Vector3 {
        self.interpolate(position)
    }
}
