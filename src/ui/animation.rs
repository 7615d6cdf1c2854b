//! Animation helpers
//!
//! Eased fades are `iced_anim` transitions ticked from the frame
//! subscription. Looping motion (pulses, bobbing) is a pure function of
//! elapsed time so it needs no state at all.

mod fade;

use std::f32::consts::TAU;
use std::time::Duration;

pub use fade::FadeIn;

/// Smooth 0..=1 oscillation with the given period
pub fn pulse(elapsed: Duration, period: Duration) -> f32 {
    let period = period.as_secs_f32();
    if period <= 0.0 {
        return 0.0;
    }
    let phase = (elapsed.as_secs_f32() / period).fract();
    0.5 - 0.5 * (phase * TAU).cos()
}
