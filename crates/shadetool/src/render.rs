//! Offline facet painter for shaded surfaces
//!
//! Projects the point grid orthographically after a view rotation and
//! paints each grid facet with its flat shading color, back to front.
//! This is deliberately minimal: the shading already happened in the core,
//! so all this has to do is put the color grid on screen.

use glam::{Mat3, Vec2, Vec3};
use image::{Rgb, RgbImage};
use shading::{Grid, Surface};

/// Background color for pixels no facet covers (bluish gray).
const BACKGROUND: Vec3 = Vec3::new(0.4, 0.5, 0.6);

/// Fraction of the image left empty around the projected surface.
const MARGIN: f32 = 0.05;

/// View rotation in degrees, applied before projection.
///
/// The core never sees these; rotation only affects where facets land on
/// the image, not their colors.
#[derive(Debug, Clone, Copy)]
pub struct ViewAngles {
    pub elevation: f32,
    pub azimuth: f32,
}

impl Default for ViewAngles {
    fn default() -> Self {
        Self {
            elevation: 30.0,
            azimuth: 45.0,
        }
    }
}

struct Facet {
    corners: [Vec2; 4],
    depth: f32,
    color: Rgb<u8>,
}

/// Paint the shaded surface into a square RGB image of side `size`.
pub fn render_image(
    surface: &Surface,
    colors: &Grid<Vec3>,
    view: ViewAngles,
    size: u32,
) -> RgbImage {
    // Rotate so the viewer looks down the -Z axis of the rotated frame:
    // screen x/y come from the rotated x/y, rotated z is depth toward the
    // viewer.
    let rot = Mat3::from_rotation_x((view.elevation - 90.0).to_radians())
        * Mat3::from_rotation_z(-view.azimuth.to_radians());
    let rotated = surface.points().map(|p| rot * *p);

    // Fit the rotated bounds into the image with a margin, preserving
    // aspect ratio.
    let mut min = Vec2::splat(f32::INFINITY);
    let mut max = Vec2::splat(f32::NEG_INFINITY);
    for p in rotated.iter() {
        min = min.min(Vec2::new(p.x, p.y));
        max = max.max(Vec2::new(p.x, p.y));
    }
    let extent = (max - min).max_element().max(f32::EPSILON);
    let scale = size as f32 * (1.0 - 2.0 * MARGIN) / extent;
    let center = (min + max) / 2.0;
    let half = size as f32 / 2.0;
    let project = |p: &Vec3| {
        let offset = (Vec2::new(p.x, p.y) - center) * scale;
        // Image y grows downward.
        Vec2::new(half + offset.x, half - offset.y)
    };

    // One facet per grid cell, flat-colored with the mean of its corner
    // colors, sorted far-to-near for the painter's algorithm.
    let (rows, cols) = rotated.shape();
    let mut facets = Vec::with_capacity((rows - 1) * (cols - 1));
    for row in 0..rows - 1 {
        for col in 0..cols - 1 {
            let cell = [
                (row, col),
                (row, col + 1),
                (row + 1, col + 1),
                (row + 1, col),
            ];
            let corners = cell.map(|rc| project(&rotated[rc]));
            let depth = cell.iter().map(|&rc| rotated[rc].z).sum::<f32>() / 4.0;
            let mean = cell.iter().map(|&rc| colors[rc]).sum::<Vec3>() / 4.0;
            facets.push(Facet {
                corners,
                depth,
                color: to_rgb8(mean),
            });
        }
    }
    facets.sort_by(|a, b| a.depth.total_cmp(&b.depth));

    let mut img = RgbImage::from_pixel(size, size, to_rgb8(BACKGROUND));
    for facet in &facets {
        let [a, b, c, d] = facet.corners;
        fill_triangle(&mut img, a, b, c, facet.color);
        fill_triangle(&mut img, a, c, d, facet.color);
    }
    img
}

fn to_rgb8(c: Vec3) -> Rgb<u8> {
    let c = c.clamp(Vec3::ZERO, Vec3::ONE) * 255.0;
    Rgb([c.x.round() as u8, c.y.round() as u8, c.z.round() as u8])
}

/// Rasterize one triangle with half-plane tests. Winding does not matter;
/// the barycentric weights are normalized by the signed area.
fn fill_triangle(img: &mut RgbImage, a: Vec2, b: Vec2, c: Vec2, color: Rgb<u8>) {
    let area = (b - a).perp_dot(c - a);
    if area.abs() < f32::EPSILON {
        return;
    }
    let (w, h) = img.dimensions();
    let min_x = a.x.min(b.x).min(c.x).floor().max(0.0) as u32;
    let min_y = a.y.min(b.y).min(c.y).floor().max(0.0) as u32;
    let max_x = (a.x.max(b.x).max(c.x).ceil() as i64).min(w as i64 - 1);
    let max_y = (a.y.max(b.y).max(c.y).ceil() as i64).min(h as i64 - 1);
    if max_x < min_x as i64 || max_y < min_y as i64 {
        return;
    }
    for y in min_y..=max_y as u32 {
        for x in min_x..=max_x as u32 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let w0 = (b - a).perp_dot(p - a) / area;
            let w1 = (c - b).perp_dot(p - b) / area;
            let w2 = (a - c).perp_dot(p - c) / area;
            if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                img.put_pixel(x, y, color);
            }
        }
    }
}
