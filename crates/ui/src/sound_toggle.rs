//! Sound toggle button.
//!
//! Flipping the toggle on while the audio device is suspended starts the
//! resume; a pending resume is shown on the button so the silence until it
//! completes is not mistaken for a broken toggle.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use calendar::sonify::{AudioReadiness, SoundToggle};

pub fn sound_toggle_ui(mut contexts: EguiContexts, mut toggle: ResMut<SoundToggle>) {
    egui::Window::new("sound-toggle")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .show(contexts.ctx_mut(), |ui| {
            let label = match (toggle.enabled, toggle.readiness) {
                (true, AudioReadiness::Resuming) => "🔔 Sound On (resuming…)",
                (true, _) => "🔔 Sound On",
                (false, _) => "🔇 Enable Sound",
            };
            if ui.button(label).clicked() {
                toggle.flip();
                info!(
                    "sound {} (device {:?})",
                    if toggle.enabled { "enabled" } else { "disabled" },
                    toggle.readiness
                );
            }
        });
}
