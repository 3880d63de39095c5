use cgmath::{Deg, Matrix, Matrix3, Matrix4, SquareMatrix, Vector3};

/// Position, Euler rotation (degrees) and scale of a scene object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    /// Rotation in degrees around X, Y and Z, applied in that order.
    pub rotation: Vector3<f32>,
    pub scale: Vector3<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    pub fn from_position(position: Vector3<f32>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Model matrix `T * Rx * Ry * Rz * S`.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        let t = Matrix4::from_translation(self.position);
        let r = Matrix4::from_angle_x(Deg(self.rotation.x))
            * Matrix4::from_angle_y(Deg(self.rotation.y))
            * Matrix4::from_angle_z(Deg(self.rotation.z));
        let s = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        t * r * s // Order matters: T * R * S
    }

    /// Inverse-transpose of the model matrix's upper 3x3, for transforming
    /// normals. Falls back to identity for a singular (zero-scale) transform.
    pub fn normal_matrix(&self) -> Matrix3<f32> {
        let m = self.model_matrix();
        let upper = Matrix3::from_cols(m.x.truncate(), m.y.truncate(), m.z.truncate());
        upper
            .invert()
            .map(|inverse| inverse.transpose())
            .unwrap_or_else(Matrix3::identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cgmath::{InnerSpace, Point3, Transform as _};

    #[test]
    fn identity_by_default() {
        assert_eq!(Transform::default().model_matrix(), Matrix4::identity());
    }

    #[test]
    fn scales_then_rotates_then_translates() {
        let transform = Transform {
            position: Vector3::new(1.0, 2.0, 3.0),
            rotation: Vector3::new(0.0, 90.0, 0.0),
            scale: Vector3::new(2.0, 2.0, 2.0),
        };
        let p = transform.model_matrix().transform_point(Point3::new(1.0, 0.0, 0.0));
        // (1,0,0) -> scaled (2,0,0) -> yaw 90 gives (0,0,-2) -> translated
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn normal_matrix_undoes_non_uniform_scale() {
        let transform = Transform {
            scale: Vector3::new(4.0, 1.0, 1.0),
            ..Default::default()
        };
        // A normal on a 45 degree slope in XY must tilt towards +Y after stretching X
        let n = (transform.normal_matrix() * Vector3::new(1.0, 1.0, 0.0)).normalize();
        assert!(n.y > n.x);
    }

    #[test]
    fn zero_scale_normal_matrix_is_identity() {
        let transform = Transform {
            scale: Vector3::new(0.0, 1.0, 1.0),
            ..Default::default()
        };
        assert_eq!(transform.normal_matrix(), Matrix3::identity());
    }
}
