//! Hover state machine: Idle vs Hovering(cell), advanced once per frame.
//!
//! The transition is a pure reducer over (previous hover, current pick) that
//! returns the next state plus the side-effect commands the frame must
//! apply. Re-deriving from the current pick each frame (rather than from
//! pointer events) matters because orbiting the camera changes which cell
//! sits under a stationary pointer.

use bevy::prelude::*;

/// Which cell, if any, the pointer ray currently rests on.
///
/// Single instance; mutated once per frame by the pick system.
#[derive(Debug, Default, Resource)]
pub struct InteractionState {
    /// Index into [`crate::layout::GridLayout::cells`].
    pub hovered: Option<usize>,
}

/// Side-effect commands emitted by a hover transition.
///
/// `DisposeHighlight` always precedes `CreateHighlight` in a cell-to-cell
/// move so at most one highlight artifact ever exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Event)]
pub enum HoverEffect {
    /// Request a tone for the entered cell. Fires exactly once per distinct
    /// cell entry, including direct cell-to-cell moves.
    PlayTone { cell: usize },
    /// Spawn the outline artifact for the entered cell.
    CreateHighlight { cell: usize },
    /// Despawn the current outline artifact.
    DisposeHighlight,
}

/// Pure transition: previous hover + current pick -> next hover + effects.
///
/// Staying on the same cell emits nothing; the tooltip is re-derived every
/// frame by the presenter regardless, so it keeps tracking the pointer.
pub fn resolve_hover(
    previous: Option<usize>,
    picked: Option<usize>,
) -> (Option<usize>, Vec<HoverEffect>) {
    let effects = match (previous, picked) {
        (prev, cur) if prev == cur => Vec::new(),
        (None, Some(cell)) => vec![
            HoverEffect::PlayTone { cell },
            HoverEffect::CreateHighlight { cell },
        ],
        (Some(_), Some(cell)) => vec![
            HoverEffect::DisposeHighlight,
            HoverEffect::PlayTone { cell },
            HoverEffect::CreateHighlight { cell },
        ],
        (Some(_), None) => vec![HoverEffect::DisposeHighlight],
        (None, None) => Vec::new(),
    };
    (picked, effects)
}
