//! Hover highlight: a white wireframe box matching the hovered bar's
//! transform exactly.
//!
//! The outline is a transient entity: spawned on `CreateHighlight`,
//! despawned on `DisposeHighlight`. The reducer guarantees dispose precedes
//! create on a cell-to-cell move, so at most one outline ever exists and
//! nothing accumulates across hover transitions. The edge mesh and material
//! are shared handles created once.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;

use calendar::config::BAR_FOOTPRINT;
use calendar::hover::HoverEffect;
use calendar::layout::GridLayout;

/// Marker on the outline entity.
#[derive(Component)]
pub struct HoverHighlight {
    /// Cell index the outline tracks.
    pub cell: usize,
}

/// Shared edge mesh and material for the outline.
#[derive(Resource)]
pub struct HighlightAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

/// Line-list mesh of the 12 edges of a unit cube centered at the origin.
fn unit_cube_edges() -> Mesh {
    let h = 0.5;
    let corners = [
        [-h, -h, -h],
        [h, -h, -h],
        [h, -h, h],
        [-h, -h, h],
        [-h, h, -h],
        [h, h, -h],
        [h, h, h],
        [-h, h, h],
    ];
    let edges: [(usize, usize); 12] = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];
    let mut positions = Vec::with_capacity(24);
    for (a, b) in edges {
        positions.push(corners[a]);
        positions.push(corners[b]);
    }
    Mesh::new(
        PrimitiveTopology::LineList,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
}

pub fn setup_highlight_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(HighlightAssets {
        mesh: meshes.add(unit_cube_edges()),
        material: materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        }),
    });
}

/// Applies the frame's highlight commands in order.
pub fn apply_hover_effects(
    mut commands: Commands,
    mut effects: EventReader<HoverEffect>,
    existing: Query<Entity, With<HoverHighlight>>,
    assets: Res<HighlightAssets>,
    layout: Res<GridLayout>,
) {
    for effect in effects.read() {
        match *effect {
            HoverEffect::DisposeHighlight => {
                for entity in &existing {
                    commands.entity(entity).despawn();
                }
            }
            HoverEffect::CreateHighlight { cell } => {
                let Some(grid_cell) = layout.cells.get(cell) else {
                    continue;
                };
                commands.spawn((
                    HoverHighlight { cell },
                    Mesh3d(assets.mesh.clone()),
                    MeshMaterial3d(assets.material.clone()),
                    Transform::from_translation(grid_cell.position).with_scale(Vec3::new(
                        BAR_FOOTPRINT,
                        grid_cell.height,
                        BAR_FOOTPRINT,
                    )),
                ));
            }
            HoverEffect::PlayTone { .. } => {}
        }
    }
}
