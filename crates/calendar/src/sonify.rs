//! Sonification gate: maps a hovered cell's magnitude to a tone request and
//! decides whether the request may actually sound.
//!
//! Admission requires the user toggle to be on *and* the audio device to be
//! in the `Ready` state, plus a 100 ms debounce between tone starts.
//! Requests that fail any check are dropped, never queued: a hover that
//! lands while the device is still resuming stays silent.

use bevy::prelude::*;

use crate::config::{
    BASE_FREQ_HZ, FREQ_RAMP_COUNT, MAX_FREQ_HZ, MIN_TONE_INTERVAL_SECS, TONE_DECAY_SECS,
    TONE_START_GAIN,
};

/// Audio device lifecycle, driven by the sound toggle.
///
/// Enabling sound while `Suspended` moves to `Resuming`; the resume step is
/// asynchronous and a separate system completes it to `Ready`. Disabling
/// never touches readiness, so re-enabling a ready device is immediate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioReadiness {
    #[default]
    Suspended,
    Resuming,
    Ready,
}

/// User-facing sound switch plus the device readiness it depends on.
#[derive(Debug, Default, Resource)]
pub struct SoundToggle {
    pub enabled: bool,
    pub readiness: AudioReadiness,
}

impl SoundToggle {
    /// Flip the switch. Turning on starts the device resume when needed;
    /// turning off takes effect immediately.
    pub fn flip(&mut self) {
        self.enabled = !self.enabled;
        if self.enabled && self.readiness == AudioReadiness::Suspended {
            self.readiness = AudioReadiness::Resuming;
        }
    }
}

/// Debounce state for tone admission.
#[derive(Debug, Default, Resource)]
pub struct SonificationGate {
    last_played_at: Option<f64>,
}

impl SonificationGate {
    /// Returns `true` when a tone starting at `now_secs` may sound, and
    /// records the start time. Rejections leave the debounce clock alone.
    pub fn admit(&mut self, now_secs: f64, toggle: &SoundToggle) -> bool {
        if !toggle.enabled || toggle.readiness != AudioReadiness::Ready {
            return false;
        }
        if let Some(last) = self.last_played_at {
            if now_secs - last < MIN_TONE_INTERVAL_SECS {
                return false;
            }
        }
        self.last_played_at = Some(now_secs);
        true
    }
}

/// Linear count-to-frequency ramp, clamped so large counts cannot push the
/// tone above the audible ceiling.
pub fn tone_frequency(count: u32) -> f32 {
    let ramp = BASE_FREQ_HZ + (count as f32 / FREQ_RAMP_COUNT) * (MAX_FREQ_HZ - BASE_FREQ_HZ);
    ramp.clamp(BASE_FREQ_HZ, MAX_FREQ_HZ)
}

/// Tone request sent to the audio sink; the gate is consulted at playback,
/// not at send time.
#[derive(Debug, Clone, Copy, PartialEq, Event)]
pub struct PlayToneEvent {
    pub frequency_hz: f32,
    pub start_gain: f32,
    pub decay_secs: f32,
}

impl PlayToneEvent {
    /// The fixed-envelope tone for a cell magnitude.
    pub fn for_count(count: u32) -> Self {
        Self {
            frequency_hz: tone_frequency(count),
            start_gain: TONE_START_GAIN,
            decay_secs: TONE_DECAY_SECS,
        }
    }
}
