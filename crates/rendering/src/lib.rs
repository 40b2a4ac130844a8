use bevy::audio::AddAudioSource;
use bevy::prelude::*;

pub mod audio;
pub mod bars;
pub mod camera;
pub mod highlight;
pub mod labels;
pub mod pick;

/// Wires up scene construction and the per-frame interaction loop.
///
/// The `Update` sequence is fixed: camera input and transform first, then
/// pick + hover resolution, then the presenters (highlight, tooltip,
/// labels). Tone playback and the audio resume step run in `PostUpdate`,
/// after the frame's requests have been emitted.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_audio_source::<audio::Tone>()
            .add_systems(
                Startup,
                (
                    bars::setup_lighting,
                    bars::spawn_bars,
                    camera::setup_camera,
                    highlight::setup_highlight_assets,
                    labels::spawn_month_labels,
                ),
            )
            .add_systems(
                Update,
                (
                    (
                        camera::camera_pan_keyboard,
                        camera::camera_orbit_drag,
                        camera::camera_zoom,
                        camera::apply_orbit_camera,
                    )
                        .chain(),
                    (
                        pick::update_hover,
                        highlight::apply_hover_effects,
                        audio::request_tones,
                        pick::refresh_tooltip,
                        labels::project_month_labels,
                    )
                        .chain(),
                )
                    .chain(),
            )
            .add_systems(
                PostUpdate,
                (audio::play_tones, audio::finish_audio_resume).chain(),
            );
    }
}
