//! Month labels as screen-space text projected from 3D anchors.
//!
//! Labels are a best-effort overlay: bar placement never waits on them, and
//! an anchor that projects off-screen simply hides its node. Each label's
//! screen position is refreshed every frame from the camera.

use bevy::prelude::*;

use calendar::layout::GridLayout;

/// UI text node tied to a world-space anchor.
#[derive(Component)]
pub struct MonthLabelAnchor {
    pub anchor: Vec3,
}

pub fn spawn_month_labels(mut commands: Commands, layout: Res<GridLayout>) {
    for label in &layout.labels {
        commands.spawn((
            MonthLabelAnchor {
                anchor: label.anchor,
            },
            Text::new(label.text.clone()),
            TextFont {
                font_size: 16.0,
                ..default()
            },
            TextColor(Color::WHITE),
            Node {
                position_type: PositionType::Absolute,
                ..default()
            },
            Visibility::Hidden,
        ));
    }
}

/// Projects each anchor through the camera and moves its text node there.
pub fn project_month_labels(
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut labels: Query<(&MonthLabelAnchor, &mut Node, &mut Visibility)>,
) {
    let Ok((camera, cam_transform)) = camera_q.get_single() else {
        return;
    };
    for (label, mut node, mut visibility) in &mut labels {
        match camera.world_to_viewport(cam_transform, label.anchor) {
            Ok(screen) => {
                node.left = Val::Px(screen.x);
                node.top = Val::Px(screen.y);
                *visibility = Visibility::Visible;
            }
            Err(_) => {
                *visibility = Visibility::Hidden;
            }
        }
    }
}
