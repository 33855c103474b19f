//! Kapla tower physics playground.
//!
//! Procedurally lays out a Kapla-style plank tower, hands every plank to the
//! physics engine as a dynamic cuboid, and provides a free-fly camera to
//! explore (and knock down) the result.

mod camera;
mod input;
mod launch_params;
mod physics;
mod tower;
mod ui;

use avian3d::prelude::*;
use bevy::light::light_consts::lux;
use bevy::prelude::*;

use camera::{CameraControllerPlugin, FlightCamera};
use launch_params::LaunchParams;
use tower::{TowerBlueprint, TowerPlugin};
use ui::DebugUiPlugin;

/// Side length of the square ground slab.
const GROUND_SIZE: f32 = 200.0;
/// Thickness of the ground slab; its top face sits at y = 0.
const GROUND_THICKNESS: f32 = 1.0;

/// Plugin for the main application.
pub struct AppPlugin;

impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            input::InputPlugin,
            CameraControllerPlugin,
            physics::PhysicsIntegrationPlugin,
            TowerPlugin,
            DebugUiPlugin,
        ))
        .add_systems(Startup, setup_scene);
    }
}

/// Set up the ground slab, lights, and free-fly camera.
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    params: Res<LaunchParams>,
) {
    // Static ground for the tower to stand on.
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(GROUND_SIZE, GROUND_THICKNESS, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.37, 0.33),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_translation(Vec3::new(0.0, -GROUND_THICKNESS / 2.0, 0.0)),
        RigidBody::Static,
        Collider::cuboid(GROUND_SIZE, GROUND_THICKNESS, GROUND_SIZE),
    ));

    // Key light, angled down onto the tower.
    commands.spawn((
        DirectionalLight {
            illuminance: lux::FULL_DAYLIGHT,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::YXZ, -0.4, -0.6, 0.0)),
    ));

    // Dim cool fill light from the opposite side.
    commands.spawn((
        DirectionalLight {
            color: Color::srgb(0.3, 0.3, 0.4),
            illuminance: 2_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::YXZ,
            std::f32::consts::PI - 0.4,
            -0.6,
            0.0,
        )),
    ));

    // Free-fly camera outside the ring, looking at the tower's midsection.
    let origin = params.origin.as_vec3();
    let position = origin + Vec3::new(0.0, 16.0, -80.0);
    let target = origin + Vec3::new(0.0, 12.0, 0.0);
    let direction = (target - position).normalize();
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(position).looking_to(direction, Vec3::Y),
        Projection::Perspective(PerspectiveProjection {
            fov: std::f32::consts::FRAC_PI_4,
            near: 0.1,
            far: 2_000.0,
            ..Default::default()
        }),
        FlightCamera { direction },
    ));

    tracing::info!("Scene setup complete - left click to grab the cursor, WASD to move");
}

fn main() {
    // Initialize tracing for native platforms.
    #[cfg(not(target_family = "wasm"))]
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    // Initialize tracing for WASM (logs to browser console).
    #[cfg(target_family = "wasm")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    let params = launch_params::parse();

    // Validate and lay out the tower before any engine work: bad parameters
    // produce one clear error instead of a half-built scene.
    let placements = match kapla_layout::generate(&params.tower_params()) {
        Ok(placements) => placements,
        Err(e) => {
            tracing::error!("rejecting tower parameters: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(planks = placements.len(), "tower layout generated");

    let mut app = App::new();

    #[allow(unused_mut)]
    let mut window = Window {
        title: "kapla-viewer".to_string(),
        resolution: (1280, 720).into(),
        position: WindowPosition::Centered(MonitorSelection::Primary),
        ..Default::default()
    };

    // WASM: Fit canvas to parent element and prevent browser event handling.
    #[cfg(target_family = "wasm")]
    {
        window.fit_canvas_to_parent = true;
        window.prevent_default_event_handling = true;
    }

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(window),
        ..Default::default()
    }));

    let blueprint = TowerBlueprint {
        params: params.tower_params(),
        placements,
    };
    app.insert_resource(params);
    app.insert_resource(blueprint);

    app.add_plugins(AppPlugin).run();
}
