//! Phase functions for cosmetic effects
//!
//! Shimmer, glow, and pulse are modeled as pure functions of elapsed time:
//! callers sample `f(elapsed)` each frame instead of mutating per-frame
//! state, so the effects are deterministic and testable without a clock.
//! When the context asks for reduced motion every function returns its rest
//! value.

use std::time::Duration;

/// Shimmer sweep phase in `[0, 1)`
///
/// A sawtooth over the period: 0 at the start of each sweep, approaching 1
/// just before the next. Rest value is 0 (highlight parked off-edge) when
/// motion is reduced or the period is zero.
pub fn shimmer_phase(elapsed: Duration, period: Duration, reduce_motion: bool) -> f32 {
    if reduce_motion || period.is_zero() {
        return 0.0;
    }
    (elapsed.as_secs_f32() / period.as_secs_f32()).fract()
}

/// Glow pulse intensity in `[0, 1]`
///
/// A raised cosine over the period: 1 at the start of each cycle, dipping to
/// 0 at the midpoint. Rest value is 1 (steady full glow) when motion is
/// reduced or the period is zero.
pub fn glow_intensity(elapsed: Duration, period: Duration, reduce_motion: bool) -> f32 {
    if reduce_motion || period.is_zero() {
        return 1.0;
    }
    let phase = (elapsed.as_secs_f32() / period.as_secs_f32()).fract();
    (1.0 + (phase * std::f32::consts::TAU).cos()) / 2.0
}

/// Opacity pulse between `min` and `max`
///
/// Follows the glow curve, remapped onto `[min, max]`. Rest value is `max`
/// when motion is reduced.
pub fn pulse_opacity(
    elapsed: Duration,
    period: Duration,
    min: f32,
    max: f32,
    reduce_motion: bool,
) -> f32 {
    min + (max - min) * glow_intensity(elapsed, period, reduce_motion)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(1200);

    #[test]
    fn test_shimmer_phase_range() {
        for ms in (0..5000).step_by(37) {
            let phase = shimmer_phase(Duration::from_millis(ms), PERIOD, false);
            assert!((0.0..1.0).contains(&phase), "phase {} out of range", phase);
        }
    }

    #[test]
    fn test_shimmer_phase_is_periodic() {
        let a = shimmer_phase(Duration::from_millis(300), PERIOD, false);
        let b = shimmer_phase(Duration::from_millis(300 + 1200), PERIOD, false);
        assert!((a - b).abs() < 1e-3);
    }

    #[test]
    fn test_shimmer_phase_deterministic() {
        let elapsed = Duration::from_millis(777);
        assert_eq!(
            shimmer_phase(elapsed, PERIOD, false),
            shimmer_phase(elapsed, PERIOD, false)
        );
    }

    #[test]
    fn test_shimmer_rest_when_motion_reduced() {
        for ms in [0, 100, 900, 5000] {
            assert_eq!(shimmer_phase(Duration::from_millis(ms), PERIOD, true), 0.0);
        }
    }

    #[test]
    fn test_shimmer_zero_period_rests() {
        assert_eq!(shimmer_phase(Duration::from_secs(1), Duration::ZERO, false), 0.0);
    }

    #[test]
    fn test_glow_peaks_and_dips() {
        assert!((glow_intensity(Duration::ZERO, PERIOD, false) - 1.0).abs() < 1e-5);
        let midpoint = glow_intensity(PERIOD / 2, PERIOD, false);
        assert!(midpoint < 1e-5);
    }

    #[test]
    fn test_glow_range() {
        for ms in (0..5000).step_by(41) {
            let glow = glow_intensity(Duration::from_millis(ms), PERIOD, false);
            assert!((0.0..=1.0).contains(&glow));
        }
    }

    #[test]
    fn test_glow_rest_when_motion_reduced() {
        assert_eq!(glow_intensity(Duration::from_millis(600), PERIOD, true), 1.0);
    }

    #[test]
    fn test_pulse_opacity_bounds() {
        for ms in (0..3000).step_by(53) {
            let opacity = pulse_opacity(Duration::from_millis(ms), PERIOD, 0.3, 0.9, false);
            assert!((0.3..=0.9).contains(&opacity));
        }
    }

    #[test]
    fn test_pulse_opacity_rest_is_max() {
        assert_eq!(
            pulse_opacity(Duration::from_millis(450), PERIOD, 0.3, 0.9, true),
            0.9
        );
    }
}
