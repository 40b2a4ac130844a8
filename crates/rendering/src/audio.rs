//! Tone synthesis and playback.
//!
//! Hover entries become [`PlayToneEvent`] requests; playback consults the
//! [`SonificationGate`] so the toggle, the device readiness, and the 100 ms
//! debounce are all enforced in one place. An admitted tone is a procedural
//! sine [`Tone`] asset played through Bevy's audio pipeline on a one-shot
//! entity that despawns when the envelope runs out. If the platform has no
//! audio output, `bevy_audio` logs the failure and playback is a no-op; the
//! frame never crashes over a tone.

use bevy::audio::{Decodable, Source};
use bevy::prelude::*;
use bevy::utils::Duration;

use calendar::config::TONE_END_GAIN;
use calendar::hover::HoverEffect;
use calendar::layout::GridLayout;
use calendar::sonify::{AudioReadiness, PlayToneEvent, SonificationGate, SoundToggle};

const SAMPLE_RATE: u32 = 44_100;

/// A sine tone with a fixed exponential decay envelope.
#[derive(Asset, TypePath)]
pub struct Tone {
    pub frequency_hz: f32,
    pub start_gain: f32,
    pub decay_secs: f32,
}

pub struct ToneDecoder {
    phase: f32,
    phase_step: f32,
    gain: f32,
    /// Per-sample multiplier taking `start_gain` to `TONE_END_GAIN` over
    /// the envelope length.
    decay_factor: f32,
    remaining: usize,
    total: Duration,
}

impl Iterator for ToneDecoder {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let sample = (self.phase * std::f32::consts::TAU).sin() * self.gain;
        self.phase = (self.phase + self.phase_step).fract();
        self.gain *= self.decay_factor;
        Some(sample)
    }
}

impl Source for ToneDecoder {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(self.total)
    }
}

impl Decodable for Tone {
    type DecoderItem = f32;
    type Decoder = ToneDecoder;

    fn decoder(&self) -> Self::Decoder {
        let samples = (self.decay_secs * SAMPLE_RATE as f32) as usize;
        let decay_factor = if samples > 0 {
            (TONE_END_GAIN / self.start_gain).powf(1.0 / samples as f32)
        } else {
            0.0
        };
        ToneDecoder {
            phase: 0.0,
            phase_step: self.frequency_hz / SAMPLE_RATE as f32,
            gain: self.start_gain,
            decay_factor,
            remaining: samples,
            total: Duration::from_secs_f32(self.decay_secs),
        }
    }
}

/// Turns hover entries into audio-sink requests carrying the cell's
/// magnitude mapped to a frequency.
pub fn request_tones(
    mut effects: EventReader<HoverEffect>,
    layout: Res<GridLayout>,
    mut tones: EventWriter<PlayToneEvent>,
) {
    for effect in effects.read() {
        if let HoverEffect::PlayTone { cell } = *effect {
            if let Some(grid_cell) = layout.cells.get(cell) {
                tones.send(PlayToneEvent::for_count(grid_cell.count));
            }
        }
    }
}

/// Plays admitted tone requests; everything the gate rejects is dropped.
pub fn play_tones(
    mut commands: Commands,
    mut requests: EventReader<PlayToneEvent>,
    mut gate: ResMut<SonificationGate>,
    toggle: Res<SoundToggle>,
    time: Res<Time>,
    mut tones: ResMut<Assets<Tone>>,
) {
    for request in requests.read() {
        if !gate.admit(time.elapsed_secs_f64(), &toggle) {
            continue;
        }
        let handle = tones.add(Tone {
            frequency_hz: request.frequency_hz,
            start_gain: request.start_gain,
            decay_secs: request.decay_secs,
        });
        commands.spawn((AudioPlayer(handle), PlaybackSettings::DESPAWN));
        debug!("tone {:.0} Hz", request.frequency_hz);
    }
}

/// Completes the asynchronous device resume one frame after the toggle
/// started it. Runs after [`play_tones`], so a hover that lands during the
/// pending resume is dropped rather than queued.
pub fn finish_audio_resume(mut toggle: ResMut<SoundToggle>) {
    if toggle.readiness == AudioReadiness::Resuming {
        toggle.readiness = AudioReadiness::Ready;
        info!("audio device resumed");
    }
}
