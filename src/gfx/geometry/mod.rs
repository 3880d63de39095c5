//! # Procedural Geometry Generation
//!
//! This module provides functions to generate common 3D primitive shapes procedurally,
//! eliminating the need for external model files for basic shapes.
//!
//! ## Supported Primitives
//!
//! - **Cube**: 8 shared corners with position-derived normals, or a flat-shaded
//!   24-vertex variant ([`create_cube_flat`])
//! - **Sphere**: UV sphere with configurable resolution
//! - **Cylinder**: capped cylinder centred on the origin
//! - **Cone**: capped cone standing on the XZ plane
//!
//! Every generator emits a triangle list wound counter-clockwise when seen
//! from outside the solid.
//!
//! ## Usage
//!
//! ```rust
//! use trellis::gfx::geometry::{create_cube, create_sphere, create_cylinder};
//!
//! let cube = create_cube();
//! assert_eq!(cube.vertex_count(), 8);
//!
//! let sphere = create_sphere(16, 32).unwrap();
//! assert_eq!(sphere.index_count(), 16 * 32 * 6);
//!
//! // Segment counts below 3 are rejected rather than clamped
//! assert!(create_cylinder(0.5, 1.0, 2).is_err());
//! ```

pub mod primitives;

pub use primitives::*;

use cgmath::{InnerSpace, Vector3};

/// Unit normal of triangle `(a, b, c)` following its winding, or the zero
/// vector for a degenerate triangle.
pub fn face_normal(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> [f32; 3] {
    let cross = triangle_cross(a, b, c);
    if cross.magnitude2() > 0.0 {
        cross.normalize().into()
    } else {
        [0.0, 0.0, 0.0]
    }
}

/// Unnormalised cross product `(b - a) × (c - a)`; its length is twice the
/// triangle's area.
pub(crate) fn triangle_cross(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Vector3<f32> {
    let a = Vector3::from(a);
    (Vector3::from(b) - a).cross(Vector3::from(c) - a)
}

/// Per-vertex normals for meshes that arrive without them.
///
/// Each triangle adds its area-weighted face normal to its three corners;
/// the sums are then normalised. Vertices referenced by no triangle (or only
/// by degenerate ones) get `[0, 1, 0]`.
pub fn compute_smooth_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut sums = vec![Vector3::new(0.0f32, 0.0, 0.0); positions.len()];

    for triangle in indices.chunks_exact(3) {
        let [i0, i1, i2] = [triangle[0], triangle[1], triangle[2]].map(|i| i as usize);
        let (Some(&a), Some(&b), Some(&c)) = (positions.get(i0), positions.get(i1), positions.get(i2))
        else {
            continue;
        };
        let weighted = triangle_cross(a, b, c);
        for index in [i0, i1, i2] {
            sums[index] += weighted;
        }
    }

    sums.into_iter()
        .map(|sum| {
            if sum.magnitude2() > 0.0 {
                sum.normalize().into()
            } else {
                [0.0, 1.0, 0.0]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn face_normal_follows_winding() {
        let ccw = face_normal([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let cw = face_normal([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]);
        assert_eq!(ccw, [0.0, 0.0, 1.0]);
        assert_eq!(cw, [0.0, 0.0, -1.0]);
    }

    #[test]
    fn degenerate_face_has_zero_normal() {
        let n = face_normal([1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [2.0, 0.0, 0.0]);
        assert_eq!(n, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn smooth_normals_average_adjacent_faces() {
        // Two triangles folded 90 degrees along the X axis
        let positions = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, -1.0],
        ];
        let indices = [0, 1, 2, 0, 1, 3];
        let normals = compute_smooth_normals(&positions, &indices);

        // Shared edge vertices blend +Z and +Y
        let expected = std::f32::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(normals[0][1], expected, epsilon = 1e-6);
        assert_relative_eq!(normals[0][2], expected, epsilon = 1e-6);
        assert_eq!(normals[2], [0.0, 0.0, 1.0]);
        assert_eq!(normals[3], [0.0, 1.0, 0.0]);
    }

    #[test]
    fn unreferenced_vertices_point_up() {
        let normals = compute_smooth_normals(&[[0.0; 3]; 2], &[]);
        assert_eq!(normals, vec![[0.0, 1.0, 0.0]; 2]);
    }
}
