//! # Primitive Shape Generation
//!
//! This module contains functions to generate common 3D primitive shapes.
//! All shapes are wound counter-clockwise as seen from outside.
//!
//! Two normals are approximations kept on purpose:
//! - [`create_cube`] shares its 8 corners between faces and uses the corner
//!   position as the normal, so lighting interpolates across edges. Use
//!   [`create_cube_flat`] for true face normals.
//! - [`create_cone`] rim normals come from the cross product of the two apex
//!   edges to neighbouring rim vertices rather than the analytic cone normal,
//!   and the rim is shared with the base fan.

use std::f32::consts::PI;

use cgmath::InnerSpace;

use crate::error::{GeometryError, GeometryResult};
use crate::gfx::scene::{Mesh, Vertex};

use super::triangle_cross;

/// Corners of the unit cube centred at the origin.
const CUBE_CORNERS: [[f32; 3]; 8] = [
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [0.5, 0.5, -0.5],
    [-0.5, 0.5, -0.5],
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5],
    [-0.5, 0.5, 0.5],
];

#[rustfmt::skip]
const CUBE_INDICES: [u32; 36] = [
    2, 1, 0,  0, 3, 2, // Back (-Z)
    4, 5, 6,  6, 7, 4, // Front (+Z)
    0, 1, 5,  5, 4, 0, // Bottom (-Y)
    2, 3, 7,  7, 6, 2, // Top (+Y)
    7, 3, 0,  0, 4, 7, // Left (-X)
    1, 2, 6,  6, 5, 1, // Right (+X)
];

fn check_segments(
    shape: &'static str,
    parameter: &'static str,
    value: u32,
    min: u32,
) -> GeometryResult<()> {
    if value < min {
        return Err(GeometryError::InvalidSegments {
            shape,
            parameter,
            min,
            value,
        });
    }
    Ok(())
}

/// Vertex counts are computed in `u64` so a large resolution is reported
/// instead of wrapping.
fn check_vertex_count(shape: &'static str, count: u64) -> GeometryResult<u32> {
    u32::try_from(count).map_err(|_| GeometryError::TooManyVertices { shape, count })
}

fn capacity(count: u64) -> usize {
    usize::try_from(count).unwrap_or_default()
}

fn check_dimension(shape: &'static str, parameter: &'static str, value: f32) -> GeometryResult<()> {
    if !(value.is_finite() && value > 0.0) {
        return Err(GeometryError::InvalidDimension {
            shape,
            parameter,
            value,
        });
    }
    Ok(())
}

/// Generate a unit cube centered at the origin
///
/// 8 vertices from -0.5 to 0.5 on all axes, shared by all six faces.
/// Each vertex normal equals its position (not unit length, not a face
/// normal); texture coordinates are the XY position shifted into `[0, 1]`.
pub fn create_cube() -> Mesh {
    let vertices = CUBE_CORNERS
        .iter()
        .map(|&p| Vertex::new(p, p, [p[0] + 0.5, p[1] + 0.5]))
        .collect();

    Mesh::from_generated(vertices, CUBE_INDICES.to_vec())
}

/// Generate a flat-shaded unit cube centered at the origin
///
/// Each face has its own 4 vertices with the outward face normal and UV
/// coordinates from 0 to 1, giving 24 vertices and 36 indices.
pub fn create_cube_flat() -> Mesh {
    // (normal, corners counter-clockwise seen from outside)
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        ([0.0, 0.0, 1.0], [[-0.5, -0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5]]),
        ([0.0, 0.0, -1.0], [[0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5, 0.5, -0.5], [0.5, 0.5, -0.5]]),
        ([1.0, 0.0, 0.0], [[0.5, -0.5, 0.5], [0.5, -0.5, -0.5], [0.5, 0.5, -0.5], [0.5, 0.5, 0.5]]),
        ([-1.0, 0.0, 0.0], [[-0.5, -0.5, -0.5], [-0.5, -0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5]]),
        ([0.0, 1.0, 0.0], [[-0.5, 0.5, 0.5], [0.5, 0.5, 0.5], [0.5, 0.5, -0.5], [-0.5, 0.5, -0.5]]),
        ([0.0, -1.0, 0.0], [[-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5]]),
    ];
    let uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, corners) in faces {
        let base = vertices.len() as u32;
        for (corner, uv) in corners.into_iter().zip(uvs) {
            vertices.push(Vertex::new(corner, normal, uv));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    Mesh::from_generated(vertices, indices)
}

/// Generate a UV sphere of radius 1.0 centered at the origin
///
/// # Arguments
/// * `latitude_segments` - Number of horizontal bands, pole to pole (at least 2)
/// * `longitude_segments` - Number of vertical slices around Y (at least 3)
///
/// Produces `(lat + 1) * (lon + 1)` vertices; the first and last rings
/// collapse onto the poles and the seam column is duplicated so texture
/// coordinates can reach `u = 1`.
pub fn create_sphere(latitude_segments: u32, longitude_segments: u32) -> GeometryResult<Mesh> {
    check_segments("sphere", "latitude_segments", latitude_segments, 2)?;
    check_segments("sphere", "longitude_segments", longitude_segments, 3)?;

    let lat_segs = latitude_segments;
    let long_segs = longitude_segments;
    let vertex_count = check_vertex_count(
        "sphere",
        (lat_segs as u64 + 1).saturating_mul(long_segs as u64 + 1),
    )?;
    let mut vertices = Vec::with_capacity(vertex_count as usize);
    let mut indices = Vec::with_capacity(capacity(lat_segs as u64 * long_segs as u64 * 6));

    for lat in 0..=lat_segs {
        let theta = lat as f32 * PI / lat_segs as f32; // 0 to PI
        let (sin_theta, cos_theta) = theta.sin_cos();

        for long in 0..=long_segs {
            let phi = long as f32 * 2.0 * PI / long_segs as f32; // 0 to 2*PI
            let (sin_phi, cos_phi) = phi.sin_cos();

            let position = [cos_phi * sin_theta, cos_theta, sin_phi * sin_theta];
            let uv = [long as f32 / long_segs as f32, lat as f32 / lat_segs as f32];

            // Normal is same as position for unit sphere
            vertices.push(Vertex::new(position, position, uv));
        }
    }

    for lat in 0..lat_segs {
        for long in 0..long_segs {
            let first = lat * (long_segs + 1) + long;
            let second = first + long_segs + 1;

            indices.extend_from_slice(&[first, first + 1, second]);
            indices.extend_from_slice(&[second, first + 1, second + 1]);
        }
    }

    Ok(Mesh::from_generated(vertices, indices))
}

/// Generate a capped cylinder centered at the origin
///
/// # Arguments
/// * `radius` - Radius of the cylinder
/// * `height` - Height along Y; the cylinder spans `-height/2..height/2`
/// * `segments` - Number of angular segments (at least 3)
///
/// Vertex layout: `segments + 1` interleaved (bottom, top) side pairs with
/// outward radial normals, then the top centre, then the bottom centre.
pub fn create_cylinder(radius: f32, height: f32, segments: u32) -> GeometryResult<Mesh> {
    check_dimension("cylinder", "radius", radius)?;
    check_dimension("cylinder", "height", height)?;
    check_segments("cylinder", "segments", segments, 3)?;

    let segs = segments;
    let half_height = height * 0.5;
    let vertex_count = check_vertex_count("cylinder", 2 * (segs as u64 + 1) + 2)?;
    let mut vertices = Vec::with_capacity(vertex_count as usize);
    let mut indices = Vec::with_capacity(capacity(segs as u64 * 12));

    for i in 0..=segs {
        let u = i as f32 / segs as f32;
        let (sin_a, cos_a) = (u * 2.0 * PI).sin_cos();
        let normal = [cos_a, 0.0, sin_a];

        vertices.push(Vertex::new(
            [radius * cos_a, -half_height, radius * sin_a],
            normal,
            [u, 0.0],
        ));
        vertices.push(Vertex::new(
            [radius * cos_a, half_height, radius * sin_a],
            normal,
            [u, 1.0],
        ));
    }

    let top_center = vertices.len() as u32;
    vertices.push(Vertex::new([0.0, half_height, 0.0], [0.0, 1.0, 0.0], [0.5, 0.5]));
    let bottom_center = vertices.len() as u32;
    vertices.push(Vertex::new([0.0, -half_height, 0.0], [0.0, -1.0, 0.0], [0.5, 0.5]));

    // Side faces
    for i in 0..segs {
        let bottom_current = i * 2;
        let top_current = bottom_current + 1;
        let bottom_next = (i + 1) * 2;
        let top_next = bottom_next + 1;

        indices.extend_from_slice(&[bottom_current, top_current, bottom_next]);
        indices.extend_from_slice(&[bottom_next, top_current, top_next]);
    }

    // Top cap
    for i in 0..segs {
        indices.extend_from_slice(&[top_center, (i + 1) * 2 + 1, i * 2 + 1]);
    }

    // Bottom cap
    for i in 0..segs {
        indices.extend_from_slice(&[bottom_center, i * 2, (i + 1) * 2]);
    }

    Ok(Mesh::from_generated(vertices, indices))
}

/// Generate a capped cone standing on the XZ plane
///
/// # Arguments
/// * `radius` - Radius of the base
/// * `height` - Apex height above the base (apex at `(0, height, 0)`)
/// * `segments` - Number of angular segments (at least 3)
///
/// Vertex layout: base centre, `segments + 1` rim vertices closing the loop,
/// then the apex. Rim normals are recomputed from the apex edges after the
/// fans are built.
pub fn create_cone(radius: f32, height: f32, segments: u32) -> GeometryResult<Mesh> {
    check_dimension("cone", "radius", radius)?;
    check_dimension("cone", "height", height)?;
    check_segments("cone", "segments", segments, 3)?;

    let segs = segments;
    let down = [0.0, -1.0, 0.0];
    let vertex_count = check_vertex_count("cone", segs as u64 + 3)?;
    let mut vertices = Vec::with_capacity(vertex_count as usize);
    let mut indices = Vec::with_capacity(capacity(segs as u64 * 6));

    vertices.push(Vertex::new([0.0, 0.0, 0.0], down, [0.5, 0.5]));
    for i in 0..=segs {
        let (sin_a, cos_a) = (i as f32 / segs as f32 * 2.0 * PI).sin_cos();
        vertices.push(Vertex::new(
            [radius * cos_a, 0.0, radius * sin_a],
            down,
            [0.5 + 0.5 * cos_a, 0.5 + 0.5 * sin_a],
        ));
    }
    let apex = vertices.len() as u32;
    vertices.push(Vertex::new([0.0, height, 0.0], [0.0, 1.0, 0.0], [0.5, 1.0]));

    // Base fan
    for i in 1..=segs {
        indices.extend_from_slice(&[0, i, i + 1]);
    }

    // Side fan
    for i in 1..=segs {
        indices.extend_from_slice(&[apex, i + 1, i]);
    }

    // Rim normals from the two apex edges; the loop wraps so the closing
    // vertex pairs with the second rim vertex.
    let apex_position = vertices[apex as usize].position;
    for i in 1..=segs as usize + 1 {
        let neighbour = i % segs as usize + 1;
        let cross = triangle_cross(
            apex_position,
            vertices[neighbour].position,
            vertices[i].position,
        );
        vertices[i].normal = cross.normalize().into();
    }

    Ok(Mesh::from_generated(vertices, indices))
}
