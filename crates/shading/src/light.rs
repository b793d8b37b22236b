//! Light source and viewer parameters

use crate::error::{Error, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A single point light.
///
/// `intensity` is a scalar gain in [0, 1] and each `color` channel is in
/// [0, 1]; values outside those ranges are rejected rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
    pub color: Vec3,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec3::new(2.0, 2.0, 2.0),
            intensity: 1.0,
            color: Vec3::ONE,
        }
    }
}

impl Light {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.intensity) {
            return Err(Error::invalid_parameter(
                "intensity",
                format!("must be in [0, 1], got {}", self.intensity),
            ));
        }
        if self.color.min_element() < 0.0 || self.color.max_element() > 1.0 {
            return Err(Error::invalid_parameter(
                "color",
                format!("every channel must be in [0, 1], got {}", self.color),
            ));
        }
        Ok(())
    }
}

/// Viewer position for the specular and combined models.
///
/// Not a projection camera; only the position enters the shading math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(5.0, 5.0, 5.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_light_is_valid() {
        assert!(Light::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_intensity_is_rejected() {
        let light = Light {
            intensity: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            light.validate(),
            Err(Error::InvalidParameter {
                name: "intensity",
                ..
            })
        ));
    }

    #[test]
    fn out_of_range_color_is_rejected() {
        let light = Light {
            color: Vec3::new(0.5, -0.1, 0.5),
            ..Default::default()
        };
        assert!(matches!(
            light.validate(),
            Err(Error::InvalidParameter { name: "color", .. })
        ));
    }
}
