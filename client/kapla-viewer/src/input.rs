//! Centralized input action definitions and management.
//!
//! Defines all actions using `leafwing-input-manager` for declarative,
//! rebindable input mapping, and keeps their availability in sync with
//! cursor grab and egui focus.

use bevy::{
    prelude::*,
    window::{CursorGrabMode, CursorOptions},
};
use bevy_egui::EguiContexts;
use leafwing_input_manager::{plugin::InputManagerSystem, prelude::*};

// ============================================================================
// Action enum
// ============================================================================

/// Actions for camera and scene control.
#[derive(Actionlike, PartialEq, Eq, Hash, Clone, Copy, Debug, Reflect)]
pub enum CameraAction {
    /// WASD movement (forward/back/strafe).
    #[actionlike(DualAxis)]
    Move,
    /// Mouse look (yaw/pitch).
    #[actionlike(DualAxis)]
    Look,
    /// Ascend (Space).
    Ascend,
    /// Descend (Ctrl).
    Descend,
    /// Sprint (Shift).
    Sprint,
    /// Adjust speed with mouse scroll.
    #[actionlike(Axis)]
    AdjustSpeed,
    /// Despawn and respawn the tower (R).
    RebuildTower,
    /// Grab cursor (left click when ungrabbed).
    GrabCursor,
    /// Release cursor (ESC).
    ReleaseCursor,
}

/// Every action, for the focus management sweep.
const ALL_ACTIONS: &[CameraAction] = &[
    CameraAction::Move,
    CameraAction::Look,
    CameraAction::Ascend,
    CameraAction::Descend,
    CameraAction::Sprint,
    CameraAction::AdjustSpeed,
    CameraAction::RebuildTower,
    CameraAction::GrabCursor,
    CameraAction::ReleaseCursor,
];

impl CameraAction {
    /// Whether the action is bound to the keyboard and should yield to egui
    /// while a text field has focus.
    fn uses_keyboard(self) -> bool {
        matches!(
            self,
            Self::Move | Self::Ascend | Self::Descend | Self::Sprint | Self::RebuildTower
        )
    }
}

// ============================================================================
// Input map
// ============================================================================

/// Create the default input map for camera actions.
pub fn default_camera_input_map() -> InputMap<CameraAction> {
    InputMap::default()
        .with_dual_axis(CameraAction::Move, VirtualDPad::wasd())
        .with_dual_axis(CameraAction::Look, MouseMove::default())
        .with(CameraAction::Ascend, KeyCode::Space)
        .with(CameraAction::Descend, KeyCode::ControlLeft)
        .with(CameraAction::Descend, KeyCode::ControlRight)
        .with(CameraAction::Sprint, KeyCode::ShiftLeft)
        .with(CameraAction::Sprint, KeyCode::ShiftRight)
        .with_axis(CameraAction::AdjustSpeed, MouseScrollAxis::Y)
        .with(CameraAction::RebuildTower, KeyCode::KeyR)
        .with(CameraAction::GrabCursor, MouseButton::Left)
        .with(CameraAction::ReleaseCursor, KeyCode::Escape)
}

// ============================================================================
// Plugin
// ============================================================================

/// Plugin that registers input action types and the input focus management
/// system.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(InputManagerPlugin::<CameraAction>::default())
            .add_systems(Startup, spawn_input_entity)
            .add_systems(
                PreUpdate,
                manage_input_focus.after(InputManagerSystem::Update),
            );
    }
}

/// Spawn the entity holding the camera action state.
fn spawn_input_entity(mut commands: Commands) {
    commands.spawn((
        default_camera_input_map(),
        ActionState::<CameraAction>::default(),
    ));
}

// ============================================================================
// Cursor grab helper
// ============================================================================

/// Set cursor grab state.
pub fn set_cursor_grab(cursor: &mut CursorOptions, window: &mut Window, grabbed: bool) {
    if !grabbed {
        cursor.grab_mode = CursorGrabMode::None;
        cursor.visible = true;
        return;
    }

    // Browsers do not support locked grabs, so WASM builds confine instead.
    cursor.grab_mode = if cfg!(target_family = "wasm") {
        CursorGrabMode::Confined
    } else {
        CursorGrabMode::Locked
    };
    cursor.visible = false;

    // Park the cursor mid-window so releasing it later does not leave it at
    // a screen edge.
    let center = Vec2::new(window.width(), window.height()) / 2.0;
    window.set_cursor_position(Some(center));
}

// ============================================================================
// Input focus management
// ============================================================================

/// Keep action availability in sync with cursor grab and egui focus.
///
/// Grab and release mirror the cursor state; everything else is live only
/// while the cursor is grabbed, with keyboard-bound actions additionally
/// yielding to egui text input.
fn manage_input_focus(
    mut action_query: Query<&mut ActionState<CameraAction>>,
    mut contexts: EguiContexts,
    cursor: Single<&CursorOptions>,
) {
    let egui_wants_kb = contexts
        .ctx_mut()
        .ok()
        .is_some_and(|ctx| ctx.wants_keyboard_input());

    let grabbed = matches!(
        cursor.grab_mode,
        CursorGrabMode::Locked | CursorGrabMode::Confined
    );

    for mut action_state in &mut action_query {
        for &action in ALL_ACTIONS {
            let enabled = match action {
                CameraAction::GrabCursor => !grabbed,
                CameraAction::ReleaseCursor => grabbed,
                _ => grabbed && !(egui_wants_kb && action.uses_keyboard()),
            };
            if enabled {
                action_state.enable_action(&action);
            } else {
                action_state.disable_action(&action);
            }
        }
    }
}
