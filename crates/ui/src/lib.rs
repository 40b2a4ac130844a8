use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod sound_toggle;
pub mod tooltip;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Update, (tooltip::tooltip_ui, sound_toggle::sound_toggle_ui));
    }
}
