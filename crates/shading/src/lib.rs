//! Local illumination for parametric surfaces.
//!
//! The pipeline samples one of the primitive shapes into a 2D grid of 3D
//! points, estimates a per-point normal, and evaluates a classic local
//! shading model (Lambertian diffuse, Phong specular, or their clipped sum)
//! against a single point light and a viewer position. Every stage is a pure
//! function of its inputs; nothing here touches global state, does I/O, or
//! caches between calls, so a full recompute costs O(resolution²) per call.
//!
//! Rendering and parameter entry live in the host (see the `shadetool`
//! binary); this crate only produces the point grid and the matching color
//! grid.

mod error;
mod grid;
mod light;
mod normal;
mod shade;
mod surface;

pub use error::{Error, Result};
pub use grid::Grid;
pub use light::{Camera, Light};
pub use normal::normal_field;
pub use shade::{
    shade, shade_combined, shade_diffuse, shade_specular, ShadingModel, ShadingParams,
    DEFAULT_SHININESS,
};
pub use surface::{ShapeKind, Surface, SurfaceParams};

// Re-export glam for convenience
pub use glam;
