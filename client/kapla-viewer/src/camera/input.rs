//! Input handling for camera controls.
//!
//! Handles cursor grab/ungrab. Input focus is managed centrally by
//! [`crate::input`].

use bevy::{
    prelude::*,
    window::{CursorOptions, PrimaryWindow},
};
use bevy_egui::EguiContexts;
use leafwing_input_manager::prelude::*;

use crate::input::{CameraAction, set_cursor_grab};

// ============================================================================
// Plugin
// ============================================================================

/// Plugin for camera input handling.
pub(super) struct CameraInputPlugin;

impl Plugin for CameraInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, cursor_grab_system);
    }
}

// ============================================================================
// Cursor grab
// ============================================================================

/// Handle cursor grab/ungrab with ESC and left-click.
fn cursor_grab_system(
    action_query: Query<&ActionState<CameraAction>>,
    mut cursor: Single<&mut CursorOptions>,
    mut window: Single<&mut Window, With<PrimaryWindow>>,
    mut contexts: EguiContexts,
) {
    let Ok(action_state) = action_query.single() else {
        return;
    };

    // ESC to release cursor.
    if action_state.just_pressed(&CameraAction::ReleaseCursor) {
        set_cursor_grab(&mut cursor, &mut window, false);
        return;
    }

    // Left-click to grab cursor (only enabled when cursor is not grabbed).
    if action_state.just_pressed(&CameraAction::GrabCursor) {
        // Don't grab if clicking on egui UI.
        let egui_wants_pointer = contexts
            .ctx_mut()
            .ok()
            .is_some_and(|ctx| ctx.is_pointer_over_area());

        if !egui_wants_pointer {
            set_cursor_grab(&mut cursor, &mut window, true);
        }
    }
}
