//! Flycam movement systems.
//!
//! Handles WASD movement, mouse look, and speed adjustment for the
//! free-flight camera.

use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

use crate::input::CameraAction;

use super::{CameraSettings, FlightCamera, MAX_SPEED, MIN_SPEED};

// ============================================================================
// Plugin
// ============================================================================

/// Plugin for flycam movement.
pub(super) struct FlycamPlugin;

impl Plugin for FlycamPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (adjust_speed_with_scroll, camera_look, camera_movement).chain(),
        );
    }
}

// ============================================================================
// Systems
// ============================================================================

/// Adjust speed with mouse scroll wheel.
fn adjust_speed_with_scroll(
    action_query: Query<&ActionState<CameraAction>>,
    mut settings: ResMut<CameraSettings>,
) {
    let Ok(action_state) = action_query.single() else {
        return;
    };

    let scroll = action_state.clamped_value(&CameraAction::AdjustSpeed);
    if scroll != 0.0 {
        // Adjust speed logarithmically for smooth scaling.
        let factor = 1.1_f32.powf(scroll);
        settings.base_speed = (settings.base_speed * factor).clamp(MIN_SPEED, MAX_SPEED);
    }
}

/// Handle mouse look rotation.
fn camera_look(
    action_query: Query<&ActionState<CameraAction>>,
    settings: Res<CameraSettings>,
    mut query: Query<(&mut Transform, &mut FlightCamera)>,
) {
    let Ok(action_state) = action_query.single() else {
        return;
    };

    let delta = action_state.axis_pair(&CameraAction::Look);
    if delta == Vec2::ZERO {
        return;
    }

    for (mut transform, mut camera) in &mut query {
        let yaw = -delta.x * settings.mouse_sensitivity;
        let pitch = -delta.y * settings.mouse_sensitivity;

        let up = Vec3::Y;

        // Calculate the right vector (horizontal, perpendicular to view
        // direction and up).
        let right = camera.direction.cross(up);

        // Handle degenerate case when looking straight up or down.
        if right.length_squared() < 1e-6 {
            continue;
        }
        let right = right.normalize();

        // Clamp pitch to prevent flipping over the vertical.
        let pitch = if (camera.direction.y > 0.99 && pitch > 0.0)
            || (camera.direction.y < -0.99 && pitch < 0.0)
        {
            0.0
        } else {
            pitch
        };

        // Yaw rotates around world up, pitch rotates around local right.
        let yaw_rotation = Quat::from_axis_angle(up, yaw);
        let pitch_rotation = Quat::from_axis_angle(right, pitch);

        // Apply yaw first, then pitch.
        camera.direction = (yaw_rotation * pitch_rotation * camera.direction).normalize();

        // Update transform to look in the new direction.
        transform.look_to(camera.direction, up);
    }
}

/// Handle WASD + Space/Ctrl movement with shift boost.
fn camera_movement(
    time: Res<Time>,
    action_query: Query<&ActionState<CameraAction>>,
    settings: Res<CameraSettings>,
    mut query: Query<(&mut Transform, &FlightCamera)>,
) {
    let Ok(action_state) = action_query.single() else {
        return;
    };

    for (mut transform, camera) in &mut query {
        let mut speed = settings.base_speed;
        if action_state.pressed(&CameraAction::Sprint) {
            speed *= settings.boost_multiplier;
        }

        let forward = camera.direction;
        let right = forward.cross(Vec3::Y).normalize();

        // Accumulate movement from the dual axis.
        let move_input = action_state.clamped_axis_pair(&CameraAction::Move);
        let mut movement = Vec3::ZERO;

        // Forward/backward (Y axis of the virtual DPad).
        movement += forward * move_input.y;
        // Strafe left/right (X axis of the virtual DPad).
        movement += right * move_input.x;

        // Ascend/descend along world up.
        if action_state.pressed(&CameraAction::Ascend) {
            movement += Vec3::Y;
        }
        if action_state.pressed(&CameraAction::Descend) {
            movement -= Vec3::Y;
        }

        if movement != Vec3::ZERO {
            transform.translation += movement.normalize() * speed * time.delta_secs();
        }
    }
}
