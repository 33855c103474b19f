//! Free-flight camera for exploring the scene.
//!
//! Provides WASD movement with mouse look, scroll-wheel speed adjustment,
//! and Space/Ctrl vertical movement.

mod flycam;
mod input;

use bevy::prelude::*;

// ============================================================================
// Constants
// ============================================================================

/// Minimum base speed in meters per second.
pub const MIN_SPEED: f32 = 1.0;
/// Maximum base speed in meters per second.
pub const MAX_SPEED: f32 = 200.0;

// ============================================================================
// Settings
// ============================================================================

/// Settings for camera movement.
#[derive(Resource)]
pub struct CameraSettings {
    /// Base movement speed in meters per second.
    pub base_speed: f32,
    /// Speed multiplier when the sprint key is held.
    pub boost_multiplier: f32,
    /// Mouse sensitivity for look rotation.
    pub mouse_sensitivity: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            base_speed: 15.0,
            boost_multiplier: 4.0,
            mouse_sensitivity: 0.001,
        }
    }
}

/// Marker component for the camera entity that should be controlled.
#[derive(Component)]
pub struct FlightCamera {
    /// Current direction the camera is facing (normalized).
    pub direction: Vec3,
}

// ============================================================================
// Plugin
// ============================================================================

/// Plugin for free-flight camera controls.
pub struct CameraControllerPlugin;

impl Plugin for CameraControllerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>()
            .add_plugins((flycam::FlycamPlugin, input::CameraInputPlugin));
    }
}
