//! Reflection models - Lambertian diffuse, Phong specular, and their sum

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::light::{Camera, Light};
use crate::normal::normal_field;
use crate::surface::Surface;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default Phong shininess exponent. Larger values give a tighter,
/// sharper highlight.
pub const DEFAULT_SHININESS: f32 = 32.0;

/// Which reflection model to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadingModel {
    Diffuse,
    Specular,
    Combined,
}

impl FromStr for ShadingModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "diffuse" => Ok(ShadingModel::Diffuse),
            "specular" => Ok(ShadingModel::Specular),
            "combined" => Ok(ShadingModel::Combined),
            other => Err(Error::InvalidShadingModel(other.to_string())),
        }
    }
}

impl fmt::Display for ShadingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShadingModel::Diffuse => write!(f, "diffuse"),
            ShadingModel::Specular => write!(f, "specular"),
            ShadingModel::Combined => write!(f, "combined"),
        }
    }
}

/// Full parameter set for one shading call.
///
/// `camera` and `shininess` are ignored by the diffuse model but carried
/// anyway so the host can switch models without rebuilding parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShadingParams {
    pub model: ShadingModel,
    pub light: Light,
    pub camera: Camera,
    pub shininess: f32,
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self {
            model: ShadingModel::Combined,
            light: Light::default(),
            camera: Camera::default(),
            shininess: DEFAULT_SHININESS,
        }
    }
}

/// Evaluate the selected model over the whole surface.
pub fn shade(surface: &Surface, params: &ShadingParams) -> Result<Grid<Vec3>> {
    match params.model {
        ShadingModel::Diffuse => shade_diffuse(surface, &params.light),
        ShadingModel::Specular => {
            shade_specular(surface, &params.light, &params.camera, params.shininess)
        }
        ShadingModel::Combined => {
            shade_combined(surface, &params.light, &params.camera, params.shininess)
        }
    }
}

/// Lambertian diffuse reflection.
///
/// Per point: L = normalize(light - point), output = color · intensity ·
/// clamp(N·L, 0, 1). Points facing away from the light receive exactly
/// zero. A point coincident with the light gets a zero direction vector
/// (and so zero output) instead of NaN.
pub fn shade_diffuse(surface: &Surface, light: &Light) -> Result<Grid<Vec3>> {
    light.validate()?;
    let normals = normal_field(surface);
    Ok(surface.points().zip_map(&normals, |p, n| {
        let l = (light.position - *p).normalize_or_zero();
        let lambert = n.dot(l).clamp(0.0, 1.0);
        light.color * light.intensity * lambert
    }))
}

/// Phong specular reflection.
///
/// Per point: reflect the light direction about the normal, R = 2(N·L)N - L,
/// and raise clamp(R·V, 0, 1) to the shininess exponent. Clamping happens
/// before exponentiation so a negative alignment contributes zero rather
/// than a negative-base power. A degenerate normal or direction vector
/// yields zero output for that point, never NaN.
pub fn shade_specular(
    surface: &Surface,
    light: &Light,
    camera: &Camera,
    shininess: f32,
) -> Result<Grid<Vec3>> {
    light.validate()?;
    if !(shininess > 0.0) {
        return Err(Error::invalid_parameter(
            "shininess",
            format!("must be positive, got {shininess}"),
        ));
    }
    let normals = normal_field(surface);
    Ok(surface.points().zip_map(&normals, |p, n| {
        let l = (light.position - *p).normalize_or_zero();
        let v = (camera.position - *p).normalize_or_zero();
        // A degenerate (zero) normal reflects nothing.
        if n.length_squared() == 0.0 {
            return Vec3::ZERO;
        }
        let d = n.dot(l);
        let r = 2.0 * d * *n - l;
        let spec = r.dot(v).clamp(0.0, 1.0).powf(shininess);
        light.color * light.intensity * spec
    }))
}

/// Diffuse plus specular, each channel clipped to [0, 1].
///
/// Additive clipping is not energy conserving; it matches the classic
/// teaching model, not a physically based one.
pub fn shade_combined(
    surface: &Surface,
    light: &Light,
    camera: &Camera,
    shininess: f32,
) -> Result<Grid<Vec3>> {
    let diffuse = shade_diffuse(surface, light)?;
    let specular = shade_specular(surface, light, camera, shininess)?;
    Ok(diffuse.zip_map(&specular, |d, s| (*d + *s).clamp(Vec3::ZERO, Vec3::ONE)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SurfaceParams;

    #[test]
    fn unknown_model_is_rejected() {
        let err = "flat".parse::<ShadingModel>().unwrap_err();
        assert_eq!(err, Error::InvalidShadingModel("flat".to_string()));
    }

    #[test]
    fn non_positive_shininess_is_rejected() {
        let surface = Surface::generate(&SurfaceParams::default()).unwrap();
        for bad in [0.0, -8.0, f32::NAN] {
            assert!(matches!(
                shade_specular(&surface, &Light::default(), &Camera::default(), bad),
                Err(Error::InvalidParameter {
                    name: "shininess",
                    ..
                })
            ));
        }
    }

    #[test]
    fn invalid_light_is_rejected_by_every_model() {
        let surface = Surface::generate(&SurfaceParams::default()).unwrap();
        let light = Light {
            intensity: 2.0,
            ..Default::default()
        };
        assert!(shade_diffuse(&surface, &light).is_err());
        assert!(shade_specular(&surface, &light, &Camera::default(), 32.0).is_err());
        assert!(shade_combined(&surface, &light, &Camera::default(), 32.0).is_err());
    }

    #[test]
    fn dispatcher_matches_direct_calls() {
        let surface = Surface::generate(&SurfaceParams {
            resolution: 10,
            ..Default::default()
        })
        .unwrap();
        let params = ShadingParams::default();

        let via_dispatch = shade(&surface, &params).unwrap();
        let direct = shade_combined(&surface, &params.light, &params.camera, params.shininess)
            .unwrap();
        assert_eq!(via_dispatch, direct);
    }

    #[test]
    fn intensity_scales_diffuse_linearly() {
        let surface = Surface::generate(&SurfaceParams {
            resolution: 8,
            ..Default::default()
        })
        .unwrap();
        let full = shade_diffuse(&surface, &Light::default()).unwrap();
        let half = shade_diffuse(
            &surface,
            &Light {
                intensity: 0.5,
                ..Default::default()
            },
        )
        .unwrap();
        for (a, b) in full.iter().zip(half.iter()) {
            assert!((*a * 0.5 - *b).length() < 1e-6);
        }
    }
}
