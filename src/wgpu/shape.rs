//! Flat-colored 2D geometry: the vertex format plus outline builders for
//! the bell glyph, the clapper weight, and the button.

use bytemuck::{Pod, Zeroable};
use glam::{vec2, Mat2, Vec2};

use crate::scene::Rect;

pub const CORNER_SEGMENTS: usize = 6;

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable, Default)]
pub struct ShapeVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl ShapeVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0=>Float32x2, 1=>Float32x4];

    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<ShapeVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Bell silhouette in a unit square (x right, y down), top knob at y=0.06
/// and the lip flaring out near the bottom. Scaled uniformly by height.
const UNIT_BELL: [[f32; 2]; 19] = [
    [0.50, 0.06],
    [0.56, 0.08],
    [0.58, 0.14],
    [0.70, 0.22],
    [0.78, 0.34],
    [0.80, 0.48],
    [0.80, 0.62],
    [0.84, 0.72],
    [0.90, 0.78],
    [0.90, 0.84],
    [0.10, 0.84],
    [0.10, 0.78],
    [0.16, 0.72],
    [0.20, 0.62],
    [0.20, 0.48],
    [0.22, 0.34],
    [0.30, 0.22],
    [0.42, 0.14],
    [0.44, 0.08],
];

/// The bell glyph outline, `height` units tall, top edge at `top_y` and
/// horizontally centered on `center_x`.
pub fn bell_outline(center_x: f32, top_y: f32, height: f32) -> Vec<Vec2> {
    UNIT_BELL
        .iter()
        .map(|&[x, y]| vec2(center_x + (x - 0.5) * height, top_y + y * height))
        .collect()
}

/// Rectangle with all four corners rounded, for the button.
pub fn rounded_rect_outline(rect: Rect, radius: f32) -> Vec<Vec2> {
    let radius = radius.min(rect.width / 2.0).min(rect.height / 2.0);
    let right = rect.x + rect.width - radius;
    let bottom = rect.y + rect.height - radius;
    let mut outline = Vec::new();
    corner_arc(&mut outline, vec2(right, rect.y + radius), radius, -90.0);
    corner_arc(&mut outline, vec2(right, bottom), radius, 0.0);
    corner_arc(&mut outline, vec2(rect.x + radius, bottom), radius, 90.0);
    corner_arc(&mut outline, vec2(rect.x + radius, rect.y + radius), radius, 180.0);
    outline
}

/// Rectangle with square top corners and rounded bottom corners,
/// for the clapper weight.
pub fn rounded_bottom_rect_outline(rect: Rect, radius: f32) -> Vec<Vec2> {
    let radius = radius.min(rect.width / 2.0).min(rect.height);
    let bottom = rect.y + rect.height - radius;
    let mut outline = vec![vec2(rect.x, rect.y), vec2(rect.x + rect.width, rect.y)];
    corner_arc(&mut outline, vec2(rect.x + rect.width - radius, bottom), radius, 0.0);
    corner_arc(&mut outline, vec2(rect.x + radius, bottom), radius, 90.0);
    outline
}

/// Quarter arc around `center` starting at `from_degrees`, clockwise in
/// screen space (y down).
fn corner_arc(outline: &mut Vec<Vec2>, center: Vec2, radius: f32, from_degrees: f32) {
    for step in 0..=CORNER_SEGMENTS {
        let degrees = from_degrees + 90.0 * step as f32 / CORNER_SEGMENTS as f32;
        let radians = degrees.to_radians();
        outline.push(center + radius * vec2(radians.cos(), radians.sin()));
    }
}

/// Rotate all points about a pivot. Positive degrees swing clockwise in
/// screen space, matching the UI convention of the original.
pub fn rotate_about(points: &mut [Vec2], pivot: Vec2, degrees: f32) {
    let rotation = Mat2::from_angle(degrees.to_radians());
    for point in points.iter_mut() {
        *point = pivot + rotation * (*point - pivot);
    }
}

/// Triangulate a star-shaped outline as a fan around its centroid.
pub fn fan(outline: &[Vec2], color: [f32; 4]) -> Vec<ShapeVertex> {
    if outline.len() < 3 {
        return Vec::new();
    }
    let centroid = outline.iter().copied().sum::<Vec2>() / outline.len() as f32;
    let mut vertices = Vec::with_capacity(outline.len() * 3);
    for index in 0..outline.len() {
        let next = (index + 1) % outline.len();
        for position in [centroid, outline[index], outline[next]] {
            vertices.push(ShapeVertex {
                position: position.to_array(),
                color,
            });
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bell_outline_scales_uniformly() {
        let outline = bell_outline(60.0, 10.0, 100.0);
        for point in &outline {
            assert!((10.0..=110.0).contains(&point.y));
            assert!((10.0..=110.0).contains(&point.x));
        }
        let top = outline
            .iter()
            .map(|p| p.y)
            .fold(f32::INFINITY, f32::min);
        assert!((top - 16.0).abs() < 1e-3);
    }

    #[test]
    fn rotation_pivot_stays_fixed() {
        let pivot = vec2(50.0, 20.0);
        let mut points = vec![pivot, vec2(50.0, 120.0)];
        rotate_about(&mut points, pivot, 10.0);
        assert!((points[0] - pivot).length() < 1e-4);
        // the far point keeps its distance from the pivot
        assert!(((points[1] - pivot).length() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn fan_triangulates_every_edge() {
        let outline = rounded_rect_outline(
            Rect::new(0.0, 0.0, 100.0, 40.0),
            8.0,
        );
        let vertices = fan(&outline, [1.0; 4]);
        assert_eq!(vertices.len(), outline.len() * 3);
    }

    #[test]
    fn rounded_bottom_keeps_square_top_corners() {
        let rect = Rect::new(10.0, 10.0, 24.0, 12.0);
        let outline = rounded_bottom_rect_outline(rect, 6.0);
        assert_eq!(outline[0], vec2(10.0, 10.0));
        assert_eq!(outline[1], vec2(34.0, 10.0));
        let bottom = outline.iter().map(|p| p.y).fold(0.0, f32::max);
        assert!((bottom - 22.0).abs() < 1e-3);
    }
}
