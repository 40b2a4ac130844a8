//! Cell tooltip: draws whatever the presenter derived this frame.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use calendar::tooltip::TooltipState;

pub fn tooltip_ui(mut contexts: EguiContexts, tooltip: Res<TooltipState>) {
    if !tooltip.visible {
        return;
    }
    egui::Window::new("cell-tooltip")
        .title_bar(false)
        .resizable(false)
        .interactable(false)
        .fixed_pos(egui::pos2(tooltip.x, tooltip.y))
        .show(contexts.ctx_mut(), |ui| {
            ui.label(&tooltip.text);
        });
}
