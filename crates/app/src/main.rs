//! Contribution skyline: a 3D bar-grid view of daily activity history.
//!
//! The feed is loaded and the grid layout fully built *before* the Bevy app
//! exists — a malformed feed or a layout invariant failure aborts startup
//! with a non-zero exit instead of showing a partial grid.

use std::path::PathBuf;
use std::process::ExitCode;

use bevy::prelude::*;
use bevy::window::PresentMode;

use calendar::feed::parse_feed;
use calendar::layout::{build_layout, GridLayout};
use calendar::months::bucket_by_month;

const DEFAULT_FEED_PATH: &str = "assets/contributions.json";

fn load_layout(path: &PathBuf) -> Result<GridLayout, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read feed {}: {e}", path.display()))?;
    let days = parse_feed(&text).map_err(|e| e.to_string())?;
    let layout = build_layout(&bucket_by_month(&days)).map_err(|e| e.to_string())?;
    Ok(layout)
}

fn main() -> ExitCode {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FEED_PATH));

    let layout = match load_layout(&path) {
        Ok(layout) => layout,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Contribution Skyline".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(layout)
    .add_plugins((
        calendar::CalendarPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    app.run();
    ExitCode::SUCCESS
}
