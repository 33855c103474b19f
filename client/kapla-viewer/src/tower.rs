//! Tower construction: turning layout placements into simulated planks.
//!
//! The layout itself is computed by `kapla-layout` before the app starts;
//! this module owns spawning one dynamic cuboid body per placement, and
//! rebuilding the stack on request.

use avian3d::prelude::*;
use bevy::prelude::*;
use kapla_layout::{PlankPlacement, TowerParams};
use leafwing_input_manager::prelude::*;

use crate::input::CameraAction;

/// Mass of a single plank in kilograms.
const PLANK_MASS: f32 = 2.0;

/// The generated tower layout, computed before the app starts.
#[derive(Resource)]
pub struct TowerBlueprint {
    /// Parameters the layout was generated from.
    pub params: TowerParams,
    /// One placement per plank, bottom ring first.
    pub placements: Vec<PlankPlacement>,
}

/// Marker component for spawned planks.
#[derive(Component)]
pub struct Plank;

/// Render assets shared by every plank.
#[derive(Resource)]
struct PlankAssets {
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
}

// ============================================================================
// Plugin
// ============================================================================

/// Plugin that spawns and rebuilds the plank tower.
pub struct TowerPlugin;

impl Plugin for TowerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (prepare_plank_assets, spawn_tower).chain())
            .add_systems(Update, rebuild_tower);
    }
}

// ============================================================================
// Systems
// ============================================================================

/// Create the mesh and material shared by every plank.
#[allow(clippy::cast_possible_truncation)]
fn prepare_plank_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    blueprint: Res<TowerBlueprint>,
) {
    let params = &blueprint.params;
    let mesh = meshes.add(Cuboid::new(
        params.width as f32,
        params.height as f32,
        params.length as f32,
    ));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.82, 0.66, 0.43),
        perceptual_roughness: 0.9,
        ..default()
    });
    commands.insert_resource(PlankAssets { mesh, material });
}

/// Spawn the tower from the blueprint.
fn spawn_tower(mut commands: Commands, blueprint: Res<TowerBlueprint>, assets: Res<PlankAssets>) {
    for placement in &blueprint.placements {
        spawn_plank(&mut commands, &blueprint.params, &assets, placement);
    }
    tracing::info!(planks = blueprint.placements.len(), "tower spawned");
}

/// Despawn every plank and spawn the tower again when the rebuild action
/// fires.
fn rebuild_tower(
    mut commands: Commands,
    action_query: Query<&ActionState<CameraAction>>,
    blueprint: Res<TowerBlueprint>,
    assets: Res<PlankAssets>,
    planks: Query<Entity, With<Plank>>,
) {
    let Ok(action_state) = action_query.single() else {
        return;
    };
    if !action_state.just_pressed(&CameraAction::RebuildTower) {
        return;
    }

    for entity in &planks {
        commands.entity(entity).despawn();
    }
    for placement in &blueprint.placements {
        spawn_plank(&mut commands, &blueprint.params, &assets, placement);
    }
    tracing::info!("tower rebuilt");
}

/// Spawn one plank as a dynamic cuboid body.
#[allow(clippy::cast_possible_truncation)]
fn spawn_plank(
    commands: &mut Commands,
    params: &TowerParams,
    assets: &PlankAssets,
    placement: &PlankPlacement,
) {
    commands.spawn((
        Mesh3d(assets.mesh.clone()),
        MeshMaterial3d(assets.material.clone()),
        Transform::from_translation(placement.position.as_vec3())
            .with_rotation(Quat::from_rotation_y(placement.yaw as f32)),
        RigidBody::Dynamic,
        Collider::cuboid(
            params.width as f32,
            params.height as f32,
            params.length as f32,
        ),
        Mass(PLANK_MASS),
        Plank,
    ));
}
