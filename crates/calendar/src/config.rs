//! Fixed layout and sonification constants.
//!
//! The color bucket ladder lives in [`crate::layout::ColorBucket`]; the
//! values here cover bar geometry, month spacing, the tone envelope, and the
//! tooltip offset. They are contracts of the visualization, not tunables.

/// World-units of bar height per unit of count.
pub const HEIGHT_SCALE: f32 = 0.1;

/// Floor on bar height so zero-count days stay a visible, pickable sliver.
pub const MIN_HEIGHT: f32 = 0.1;

/// Side length of a bar's footprint; bars sit on a 1.0 grid pitch, so this
/// leaves a small visual gutter between neighbors.
pub const BAR_FOOTPRINT: f32 = 0.9;

/// Empty rows inserted between consecutive months along the stacking axis.
pub const MONTH_GAP_ROWS: u32 = 1;

/// X coordinate of month label anchors, left of the weekday-0 column.
pub const LABEL_COLUMN_X: f32 = -2.0;

/// Lowest tone frequency, mapped to a count of zero.
pub const BASE_FREQ_HZ: f32 = 200.0;

/// Highest tone frequency; counts at or above [`FREQ_RAMP_COUNT`] clamp here.
pub const MAX_FREQ_HZ: f32 = 1200.0;

/// Count at which the linear frequency ramp reaches [`MAX_FREQ_HZ`].
pub const FREQ_RAMP_COUNT: f32 = 60.0;

/// Minimum interval between two admitted tones. Requests inside the window
/// are dropped, never queued.
pub const MIN_TONE_INTERVAL_SECS: f64 = 0.1;

/// Initial amplitude of a tone.
pub const TONE_START_GAIN: f32 = 0.2;

/// Amplitude the decay envelope reaches at the end of a tone.
pub const TONE_END_GAIN: f32 = 0.001;

/// Length of the fixed decay envelope, independent of magnitude.
pub const TONE_DECAY_SECS: f32 = 0.6;

/// Pixel offset of the tooltip from the pointer position.
pub const TOOLTIP_OFFSET_PX: f32 = 10.0;
