//! Per-point normal estimation
//!
//! Uses the position-vector approximation: the normal at a point is the
//! point's own position normalized to unit length. This is exact for a
//! sphere centered at the origin, approximate for a cylinder, and collapses
//! to an in-plane direction for the plane (where the true normal would be
//! ±Z). The shaders depend on this exact behavior, so do not swap in a
//! partial-derivative surface normal here.

use crate::grid::Grid;
use crate::surface::Surface;
use glam::Vec3;

/// Estimate a unit normal at every surface point.
///
/// A point at the origin has no direction to normalize; it maps to
/// `Vec3::ZERO` instead of producing NaN, so it shades to black without
/// affecting any neighbor. The origin only appears in a plane sampled with
/// an odd resolution (its center cell).
pub fn normal_field(surface: &Surface) -> Grid<Vec3> {
    surface.points().map(|p| p.normalize_or_zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{ShapeKind, SurfaceParams};

    const EPS: f32 = 1e-5;

    #[test]
    fn sphere_normals_are_unit_radial() {
        let params = SurfaceParams {
            radius: 3.0,
            resolution: 12,
            ..Default::default()
        };
        let surface = Surface::generate(&params).unwrap();
        let normals = normal_field(&surface);
        for ((row, col), n) in normals.enumerate() {
            assert!((n.length() - 1.0).abs() < EPS);
            let p = surface.points()[(row, col)];
            assert!(n.dot(p.normalize()) > 1.0 - EPS);
        }
    }

    #[test]
    fn plane_origin_normal_is_guarded() {
        // Odd resolution puts a sample exactly at the origin.
        let params = SurfaceParams {
            kind: ShapeKind::Plane,
            resolution: 5,
            ..Default::default()
        };
        let surface = Surface::generate(&params).unwrap();
        let normals = normal_field(&surface);
        assert_eq!(normals[(2, 2)], Vec3::ZERO);
        // Every other normal is finite and unit length.
        for ((row, col), n) in normals.enumerate() {
            if (row, col) == (2, 2) {
                continue;
            }
            assert!(n.is_finite());
            assert!((n.length() - 1.0).abs() < EPS);
        }
    }
}
