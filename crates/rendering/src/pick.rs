//! Per-frame pointer picking and hover resolution.
//!
//! The frame sequence is fixed: the camera systems run first, then the ray
//! is rebuilt from the *current* pointer and camera, the nearest cell is
//! picked, the hover reducer emits its effect commands, and the tooltip is
//! re-derived. Picking runs every frame rather than on pointer events
//! because orbiting moves the ray even while the pointer sits still.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use calendar::hover::{resolve_hover, HoverEffect, InteractionState};
use calendar::layout::GridLayout;
use calendar::picking::pick_cell;
use calendar::tooltip::{present, TooltipState};

/// Returns `true` when egui wants the pointer — the cursor is over a panel
/// or egui is handling a click. World picking skips those frames.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}

/// Casts the pointer ray, resolves the hover transition, and emits the
/// frame's effect commands.
pub fn update_hover(
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    layout: Res<GridLayout>,
    mut state: ResMut<InteractionState>,
    mut effects: EventWriter<HoverEffect>,
    mut contexts: EguiContexts,
) {
    let picked = current_pick(&windows, &camera_q, &layout, &mut contexts);
    let (next, frame_effects) = resolve_hover(state.hovered, picked);
    state.hovered = next;
    for effect in frame_effects {
        effects.send(effect);
    }
}

fn current_pick(
    windows: &Query<&Window>,
    camera_q: &Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    layout: &GridLayout,
    contexts: &mut EguiContexts,
) -> Option<usize> {
    if egui_wants_pointer(contexts) {
        return None;
    }
    let window = windows.get_single().ok()?;
    let screen_pos = window.cursor_position()?;
    let (camera, cam_transform) = camera_q.get_single().ok()?;
    let ray = camera.viewport_to_world(cam_transform, screen_pos).ok()?;
    pick_cell(ray, &layout.cells).map(|hit| hit.index)
}

/// Re-derives the tooltip from the hover state and the live pointer
/// position; runs after `update_hover` so the text matches this frame.
pub fn refresh_tooltip(
    windows: Query<&Window>,
    state: Res<InteractionState>,
    layout: Res<GridLayout>,
    mut tooltip: ResMut<TooltipState>,
) {
    let cursor = windows
        .get_single()
        .ok()
        .and_then(|w| w.cursor_position());
    let hovered = match (state.hovered, cursor) {
        (Some(index), Some(_)) => layout.cells.get(index),
        _ => None,
    };
    *tooltip = present(hovered, cursor.unwrap_or_default());
}
