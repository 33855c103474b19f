//! Debug UI overlay.
//!
//! Shows FPS, camera position, plank count, camera speed, and the physics
//! debug toggle, plus a controls hint.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::gizmos::config::GizmoConfigStore;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPlugin, EguiPrimaryContextPass, egui};

use crate::camera::{CameraSettings, FlightCamera, MAX_SPEED, MIN_SPEED};
use crate::physics::{is_physics_debug_enabled, toggle_physics_debug};
use crate::tower::{Plank, TowerBlueprint};

/// Plugin for the debug UI overlay.
pub struct DebugUiPlugin;

impl Plugin for DebugUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default())
            .add_plugins(FrameTimeDiagnosticsPlugin::default())
            .add_systems(EguiPrimaryContextPass, debug_ui_system);
    }
}

/// Render the debug UI overlay.
fn debug_ui_system(
    mut contexts: EguiContexts,
    diagnostics: Res<DiagnosticsStore>,
    mut settings: ResMut<CameraSettings>,
    mut config_store: ResMut<GizmoConfigStore>,
    blueprint: Res<TowerBlueprint>,
    camera_query: Query<&Transform, With<FlightCamera>>,
    plank_query: Query<(), With<Plank>>,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    // Get FPS.
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(bevy::diagnostic::Diagnostic::smoothed)
        .unwrap_or(0.0);

    egui::Window::new("kapla")
        .anchor(egui::Align2::LEFT_TOP, [8.0, 8.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!("{fps:.1} FPS"));

            if let Ok(transform) = camera_query.single() {
                let p = transform.translation;
                ui.label(format!("camera ({:.1}, {:.1}, {:.1})", p.x, p.y, p.z));
            }

            ui.label(format!(
                "{} planks / {} levels",
                plank_query.iter().count(),
                blueprint.params.level_count
            ));

            ui.separator();

            ui.add(
                egui::Slider::new(&mut settings.base_speed, MIN_SPEED..=MAX_SPEED)
                    .logarithmic(true)
                    .text("speed"),
            );

            let mut debug_enabled = is_physics_debug_enabled(&config_store);
            if ui.checkbox(&mut debug_enabled, "collider wireframes").changed() {
                toggle_physics_debug(&mut config_store);
            }

            ui.separator();
            ui.label("Left click to look around, WASD to move, R rebuilds the tower");
        });

    Ok(())
}
