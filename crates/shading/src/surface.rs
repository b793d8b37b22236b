//! Parametric surface sampling - produces the point grid the shaders consume

use crate::error::{Error, Result};
use crate::grid::Grid;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

/// The primitive shapes the generator knows how to sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Sphere,
    Cylinder,
    Plane,
}

impl FromStr for ShapeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sphere" => Ok(ShapeKind::Sphere),
            "cylinder" => Ok(ShapeKind::Cylinder),
            "plane" => Ok(ShapeKind::Plane),
            other => Err(Error::InvalidShapeKind(other.to_string())),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Sphere => write!(f, "sphere"),
            ShapeKind::Cylinder => write!(f, "cylinder"),
            ShapeKind::Plane => write!(f, "plane"),
        }
    }
}

/// Parameters for surface generation.
///
/// `height` only applies to the cylinder; `radius` doubles as the half-extent
/// of the plane. `resolution` is the sample count per parameter axis, so a
/// surface always holds `resolution²` points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceParams {
    pub kind: ShapeKind,
    pub radius: f32,
    pub height: f32,
    pub resolution: usize,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Sphere,
            radius: 1.0,
            height: 2.0,
            resolution: 50,
        }
    }
}

impl SurfaceParams {
    /// Check every parameter against its documented domain.
    pub fn validate(&self) -> Result<()> {
        if !(self.radius > 0.0) {
            return Err(Error::invalid_parameter(
                "radius",
                format!("must be positive, got {}", self.radius),
            ));
        }
        if !(self.height > 0.0) {
            return Err(Error::invalid_parameter(
                "height",
                format!("must be positive, got {}", self.height),
            ));
        }
        if self.resolution < 2 {
            return Err(Error::invalid_parameter(
                "resolution",
                format!("must be at least 2, got {}", self.resolution),
            ));
        }
        Ok(())
    }
}

/// A sampled parametric surface: a `resolution × resolution` grid of 3D
/// points plus the shape it was generated from. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Surface {
    kind: ShapeKind,
    points: Grid<Vec3>,
}

impl Surface {
    /// Sample the shape described by `params` into a point grid.
    ///
    /// Sphere rows iterate the polar angle φ ∈ [0, π] and columns the
    /// azimuth θ ∈ [0, 2π). Cylinder rows iterate height and columns the
    /// azimuth. Plane rows iterate y and columns x, both in [-radius,
    /// radius], with z = 0 everywhere.
    pub fn generate(params: &SurfaceParams) -> Result<Self> {
        params.validate()?;
        let n = params.resolution;
        let r = params.radius;

        let points = match params.kind {
            ShapeKind::Sphere => {
                let phi = linspace(0.0, PI, n);
                let theta = ring(n);
                Grid::from_fn(n, n, |row, col| {
                    let (sp, cp) = phi[row].sin_cos();
                    let (st, ct) = theta[col].sin_cos();
                    Vec3::new(r * sp * ct, r * sp * st, r * cp)
                })
            }
            ShapeKind::Cylinder => {
                let half = params.height / 2.0;
                let z = linspace(-half, half, n);
                let theta = ring(n);
                Grid::from_fn(n, n, |row, col| {
                    let (st, ct) = theta[col].sin_cos();
                    Vec3::new(r * ct, r * st, z[row])
                })
            }
            ShapeKind::Plane => {
                let axis = linspace(-r, r, n);
                Grid::from_fn(n, n, |row, col| Vec3::new(axis[col], axis[row], 0.0))
            }
        };

        Ok(Self {
            kind: params.kind,
            points,
        })
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn points(&self) -> &Grid<Vec3> {
        &self.points
    }

    /// (rows, cols) of the point grid.
    pub fn shape(&self) -> (usize, usize) {
        self.points.shape()
    }
}

/// `n` samples over the closed interval [start, end].
fn linspace(start: f32, end: f32, n: usize) -> Vec<f32> {
    debug_assert!(n >= 2);
    let step = (end - start) / (n - 1) as f32;
    (0..n).map(|i| start + step * i as f32).collect()
}

/// `n` samples over the half-open interval [0, 2π), so the seam column
/// is not duplicated.
fn ring(n: usize) -> Vec<f32> {
    let step = TAU / n as f32;
    (0..n).map(|i| step * i as f32).collect()
}
