//! Core logic for the contribution skyline: feed parsing, calendar
//! normalization, grid layout, picking math, the hover reducer, the
//! sonification gate, and the tooltip presenter.
//!
//! Everything here is deterministic and free of windowing/renderer state so
//! it can be unit-tested without spinning up a Bevy app. The `rendering` and
//! `ui` crates consume these types through resources and events.

use bevy::prelude::*;

pub mod config;
pub mod error;
pub mod feed;
pub mod hover;
pub mod layout;
pub mod months;
pub mod picking;
pub mod sonify;
pub mod tooltip;

pub use error::CalendarError;

/// Registers the interaction resources and events shared across crates.
///
/// The [`layout::GridLayout`] resource is *not* initialized here: it is built
/// from the feed before the app starts and inserted by the binary, so layout
/// failures abort startup instead of producing an empty scene.
pub struct CalendarPlugin;

impl Plugin for CalendarPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<hover::InteractionState>()
            .init_resource::<sonify::SoundToggle>()
            .init_resource::<sonify::SonificationGate>()
            .init_resource::<tooltip::TooltipState>()
            .add_event::<hover::HoverEffect>()
            .add_event::<sonify::PlayToneEvent>();
    }
}
