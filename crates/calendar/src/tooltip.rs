//! Tooltip presenter: a pure function of the current hover state and
//! pointer position, re-derived every frame so the text keeps tracking a
//! moving pointer even while the hovered cell stays the same.

use bevy::prelude::*;

use crate::config::TOOLTIP_OFFSET_PX;
use crate::layout::GridCell;

/// What the tooltip sink should show this frame.
#[derive(Debug, Clone, Default, PartialEq, Resource)]
pub struct TooltipState {
    pub visible: bool,
    pub text: String,
    /// Screen position in pixels.
    pub x: f32,
    pub y: f32,
}

/// Derives the tooltip for the frame: `"{date}: {count}"` anchored a small
/// fixed offset from the pointer while hovering, hidden otherwise.
pub fn present(hovered: Option<&GridCell>, cursor_px: Vec2) -> TooltipState {
    match hovered {
        Some(cell) => TooltipState {
            visible: true,
            text: format!("{}: {}", cell.date, cell.count),
            x: cursor_px.x + TOOLTIP_OFFSET_PX,
            y: cursor_px.y + TOOLTIP_OFFSET_PX,
        },
        None => TooltipState::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ColorBucket;
    use chrono::NaiveDate;

    fn cell() -> GridCell {
        GridCell {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            count: 45,
            column: 5,
            week_index: 0,
            row: 0,
            position: Vec3::new(5.0, 2.25, 0.0),
            height: 4.5,
            color_bucket: ColorBucket::Peak,
        }
    }

    #[test]
    fn test_hover_shows_iso_date_and_count() {
        let state = present(Some(&cell()), Vec2::new(100.0, 200.0));
        assert!(state.visible);
        assert_eq!(state.text, "2024-03-01: 45");
        assert!((state.x - 110.0).abs() < f32::EPSILON);
        assert!((state.y - 210.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_tooltip_tracks_a_moving_pointer_on_the_same_cell() {
        let cell = cell();
        let a = present(Some(&cell), Vec2::new(100.0, 200.0));
        let b = present(Some(&cell), Vec2::new(130.0, 180.0));
        assert_eq!(a.text, b.text);
        assert!((b.x - 140.0).abs() < f32::EPSILON);
        assert!((b.y - 190.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_idle_hides_the_tooltip() {
        let state = present(None, Vec2::new(100.0, 200.0));
        assert!(!state.visible);
        assert!(state.text.is_empty());
    }
}
