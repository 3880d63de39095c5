//! Ready-made components.

use cgmath::{Vector3, Vector4};

use crate::gfx::components::{Component, ComponentBase};
use crate::gfx::rendering::RenderTarget;
use crate::gfx::scene::Transform;

/// Spins its owner at a constant angular velocity.
#[derive(Debug, Clone)]
pub struct Rotator {
    base: ComponentBase,
    /// Degrees per second around X, Y and Z
    pub degrees_per_second: Vector3<f32>,
}

impl Default for Rotator {
    fn default() -> Self {
        Self::new(Vector3::new(0.0, 45.0, 0.0))
    }
}

impl Rotator {
    pub fn new(degrees_per_second: Vector3<f32>) -> Self {
        Self {
            base: ComponentBase::default(),
            degrees_per_second,
        }
    }
}

impl Component for Rotator {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn name(&self) -> &str {
        "Rotator"
    }

    fn update(&mut self, delta_time: f32, transform: &mut Transform) {
        transform.rotation += self.degrees_per_second * delta_time;
        // wrap into [0, 360)
        for angle in [&mut transform.rotation.x, &mut transform.rotation.y, &mut transform.rotation.z] {
            *angle = angle.rem_euclid(360.0);
        }
    }
}

/// Draws the owner's local X/Y/Z axes as red/green/blue lines.
#[derive(Debug, Clone)]
pub struct AxisGizmo {
    base: ComponentBase,
    pub length: f32,
}

impl Default for AxisGizmo {
    fn default() -> Self {
        Self {
            base: ComponentBase::default(),
            length: 1.0,
        }
    }
}

impl AxisGizmo {
    pub fn with_length(length: f32) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }
}

impl Component for AxisGizmo {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn name(&self) -> &str {
        "AxisGizmo"
    }

    fn on_draw_gizmos(&self, target: &mut dyn RenderTarget, transform: &Transform) {
        let model = transform.model_matrix();
        let origin = transform.position;
        let axes = [
            (Vector4::new(self.length, 0.0, 0.0, 0.0), [1.0, 0.0, 0.0]),
            (Vector4::new(0.0, self.length, 0.0, 0.0), [0.0, 1.0, 0.0]),
            (Vector4::new(0.0, 0.0, self.length, 0.0), [0.0, 0.0, 1.0]),
        ];
        for (axis, color) in axes {
            let tip = origin + (model * axis).truncate();
            target.draw_line(origin, tip, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::rendering::DrawRecorder;
    use approx::assert_relative_eq;

    #[test]
    fn rotator_accumulates_and_wraps() {
        let mut rotator = Rotator::new(Vector3::new(0.0, 90.0, 0.0));
        let mut transform = Transform::default();
        for _ in 0..5 {
            rotator.update(1.0, &mut transform);
        }
        assert_relative_eq!(transform.rotation.y, 90.0, epsilon = 1e-4);
    }

    #[test]
    fn axis_gizmo_draws_three_lines_from_position() {
        let gizmo = AxisGizmo::with_length(2.0);
        let transform = Transform::from_position(Vector3::new(1.0, 0.0, 0.0));
        let mut recorder = DrawRecorder::new();
        gizmo.on_draw_gizmos(&mut recorder, &transform);

        assert_eq!(recorder.lines.len(), 3);
        assert!(recorder.lines.iter().all(|line| line.from == transform.position));
        assert_relative_eq!(recorder.lines[0].to.x, 3.0, epsilon = 1e-6);
        assert_eq!(recorder.lines[1].color, [0.0, 1.0, 0.0]);
    }
}
