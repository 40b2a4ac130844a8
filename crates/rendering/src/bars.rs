//! Spawns the bar grid: one cuboid per grid cell, scaled to the cell's
//! height and colored by its bucket through five shared materials.

use bevy::prelude::*;

use calendar::config::BAR_FOOTPRINT;
use calendar::layout::GridLayout;

/// Marker on a bar entity, pointing back at its layout cell.
#[derive(Component)]
pub struct BarCell {
    pub index: usize,
}

/// Shared handles so all bars of a bucket reuse one material.
#[derive(Resource)]
pub struct BarAssets {
    pub mesh: Handle<Mesh>,
    pub bucket_materials: [Handle<StandardMaterial>; 5],
}

/// GitHub-green severity ramp, zero-activity gray first.
const BUCKET_COLORS: [Color; 5] = [
    Color::srgb(0.922, 0.929, 0.941), // #ebedf0
    Color::srgb(0.776, 0.894, 0.545), // #c6e48b
    Color::srgb(0.482, 0.788, 0.435), // #7bc96f
    Color::srgb(0.137, 0.604, 0.231), // #239a3b
    Color::srgb(0.098, 0.380, 0.153), // #196127
];

pub fn spawn_bars(
    mut commands: Commands,
    layout: Res<GridLayout>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    let bucket_materials = BUCKET_COLORS.map(|color| {
        materials.add(StandardMaterial {
            base_color: color,
            perceptual_roughness: 0.9,
            ..default()
        })
    });

    for (index, cell) in layout.cells.iter().enumerate() {
        commands.spawn((
            BarCell { index },
            Mesh3d(mesh.clone()),
            MeshMaterial3d(bucket_materials[cell.color_bucket.index()].clone()),
            Transform::from_translation(cell.position)
                .with_scale(Vec3::new(BAR_FOOTPRINT, cell.height, BAR_FOOTPRINT)),
        ));
    }
    info!("spawned {} bars across {} months", layout.cells.len(), layout.labels.len());

    commands.insert_resource(BarAssets {
        mesh,
        bucket_materials,
    });
}

pub fn setup_lighting(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.9, 0.9, 1.0),
        brightness: 250.0,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 9000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_4,
            std::f32::consts::FRAC_PI_6,
            0.0,
        )),
    ));
}
