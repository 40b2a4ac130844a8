//! Ray picking over the cell grid.
//!
//! Each bar is an axis-aligned box (footprint [`BAR_FOOTPRINT`], full bar
//! height) centered on the cell position. The pick is a slab-method ray/AABB
//! test over every cell, keeping the hit nearest the ray origin. A miss is
//! the normal pointer-over-empty-space case, represented as `None`.

use bevy::prelude::*;

use crate::config::BAR_FOOTPRINT;
use crate::layout::GridCell;

/// Nearest cell under a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Index into the layout's cell collection.
    pub index: usize,
    /// Ray parameter of the entry point (distance from the camera).
    pub t: f32,
}

/// Slab intersection; returns the entry parameter, clamped to 0 when the
/// origin is inside the box.
fn ray_aabb(origin: Vec3, dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let inv = dir.recip();
    let a = (min - origin) * inv;
    let b = (max - origin) * inv;
    let t_min = a.min(b).max_element();
    let t_max = a.max(b).min_element();
    let entry = t_min.max(0.0);
    if t_max >= entry {
        Some(entry)
    } else {
        None
    }
}

/// Tests the ray against every cell's box and returns the nearest hit.
pub fn pick_cell(ray: Ray3d, cells: &[GridCell]) -> Option<PickHit> {
    let dir = *ray.direction;
    let mut best: Option<PickHit> = None;
    for (index, cell) in cells.iter().enumerate() {
        let half = Vec3::new(BAR_FOOTPRINT * 0.5, cell.height * 0.5, BAR_FOOTPRINT * 0.5);
        let Some(t) = ray_aabb(ray.origin, dir, cell.position - half, cell.position + half)
        else {
            continue;
        };
        if best.map_or(true, |b| t < b.t) {
            best = Some(PickHit { index, t });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ColorBucket;
    use chrono::NaiveDate;

    fn cell_at(column: u32, row: u32, height: f32) -> GridCell {
        GridCell {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            count: 1,
            column,
            week_index: 0,
            row,
            position: Vec3::new(column as f32, height * 0.5, row as f32),
            height,
            color_bucket: ColorBucket::Low,
        }
    }

    fn ray(origin: Vec3, toward: Vec3) -> Ray3d {
        Ray3d {
            origin,
            direction: Dir3::new(toward - origin).unwrap(),
        }
    }

    #[test]
    fn test_straight_down_hits_the_cell_below() {
        let cells = vec![cell_at(0, 0, 1.0), cell_at(3, 2, 1.0)];
        let hit = pick_cell(ray(Vec3::new(3.0, 10.0, 2.0), Vec3::new(3.0, 0.0, 2.0)), &cells)
            .unwrap();
        assert_eq!(hit.index, 1);
    }

    #[test]
    fn test_nearest_of_two_intersected_cells_wins() {
        // Ray skims along a row at bar height, crossing both boxes.
        let cells = vec![cell_at(0, 0, 2.0), cell_at(4, 0, 2.0)];
        let hit = pick_cell(
            ray(Vec3::new(-5.0, 0.5, 0.0), Vec3::new(6.0, 0.5, 0.0)),
            &cells,
        )
        .unwrap();
        assert_eq!(hit.index, 0);

        // Same geometry approached from the other side.
        let hit = pick_cell(
            ray(Vec3::new(9.0, 0.5, 0.0), Vec3::new(-2.0, 0.5, 0.0)),
            &cells,
        )
        .unwrap();
        assert_eq!(hit.index, 1);
    }

    #[test]
    fn test_empty_space_is_a_miss_not_an_error() {
        let cells = vec![cell_at(0, 0, 1.0)];
        assert!(pick_cell(
            ray(Vec3::new(3.0, 10.0, 8.0), Vec3::new(3.0, 0.0, 8.0)),
            &cells
        )
        .is_none());
    }

    #[test]
    fn test_gutter_between_bars_misses() {
        // The 0.9 footprint leaves a gap around x = 0.5 between columns 0 and 1.
        let cells = vec![cell_at(0, 0, 1.0), cell_at(1, 0, 1.0)];
        assert!(pick_cell(
            ray(Vec3::new(0.5, 10.0, 0.0), Vec3::new(0.5, 0.0, 0.0)),
            &cells
        )
        .is_none());
    }

    #[test]
    fn test_origin_inside_box_reports_zero_distance() {
        let cells = vec![cell_at(0, 0, 2.0)];
        let hit = pick_cell(
            ray(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 1.0, 5.0)),
            &cells,
        )
        .unwrap();
        assert_eq!(hit.index, 0);
        assert!(hit.t.abs() < f32::EPSILON);
    }

    #[test]
    fn test_behind_the_camera_is_not_hit() {
        let cells = vec![cell_at(0, 0, 1.0)];
        // Ray pointing straight up from above the bar.
        assert!(pick_cell(
            ray(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, 10.0, 0.0)),
            &cells
        )
        .is_none());
    }
}
