// SPDX-License-Identifier: MPL-2.0
//! Time-based interpolation of a cell's display size.
//!
//! The value is a pure function of the frame timestamp, so the window's
//! frame clock drives it without any background task. Retargeting mid-flight
//! starts the new leg from the value shown at that instant, which keeps
//! repeated taps continuous.

use std::time::{Duration, Instant};

/// Interpolates between two sizes over a fixed duration with ease-out cubic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeTransition {
    from: f32,
    to: f32,
    started_at: Option<Instant>,
    duration: Duration,
}

impl SizeTransition {
    /// Creates a transition resting at `size`.
    #[must_use]
    pub fn new(size: f32, duration: Duration) -> Self {
        Self {
            from: size,
            to: size,
            started_at: None,
            duration,
        }
    }

    /// Interpolated size at `now`.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let Some(started_at) = self.started_at else {
            return self.to;
        };
        let t = ease_out_cubic(self.progress(started_at, now));
        self.from + (self.to - self.from) * t
    }

    /// Whether the size is still changing at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|started_at| now.saturating_duration_since(started_at) < self.duration)
    }

    /// Heads toward `target`, starting from the size shown at `now`.
    pub fn retarget(&mut self, target: f32, now: Instant) {
        if (target - self.to).abs() < f32::EPSILON {
            return;
        }

        self.from = self.value_at(now);
        self.to = target;
        self.started_at = (!self.duration.is_zero()).then_some(now);
    }

    fn progress(&self, started_at: Instant, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started_at).as_secs_f32();
        (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: f32 = 300.0;
    const LARGE: f32 = 600.0;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn resting_transition_reports_its_size() {
        let transition = SizeTransition::new(SMALL, Duration::from_millis(300));
        let now = Instant::now();
        assert!(approx(transition.value_at(now), SMALL));
        assert!(!transition.is_animating(now));
    }

    #[test]
    fn moves_monotonically_to_target() {
        let start = Instant::now();
        let mut transition = SizeTransition::new(SMALL, Duration::from_millis(300));
        transition.retarget(LARGE, start);

        assert!(approx(transition.value_at(start), SMALL));
        assert!(transition.is_animating(start));

        let mut previous = SMALL;
        for ms in [50, 100, 150, 200, 250] {
            let value = transition.value_at(start + Duration::from_millis(ms));
            assert!(value > previous && value < LARGE);
            previous = value;
        }

        let end = start + Duration::from_millis(300);
        assert!(approx(transition.value_at(end), LARGE));
        assert!(!transition.is_animating(end));
        assert!(approx(transition.value_at(end + Duration::from_secs(5)), LARGE));
    }

    #[test]
    fn retarget_mid_flight_starts_from_current_value() {
        let start = Instant::now();
        let mut transition = SizeTransition::new(SMALL, Duration::from_millis(300));
        transition.retarget(LARGE, start);

        let midway = start + Duration::from_millis(100);
        let shown = transition.value_at(midway);
        transition.retarget(SMALL, midway);

        assert!(approx(transition.value_at(midway), shown));
        assert!(transition.is_animating(midway + Duration::from_millis(299)));
        assert!(approx(
            transition.value_at(midway + Duration::from_millis(300)),
            SMALL
        ));
    }

    #[test]
    fn retarget_to_same_target_keeps_running_leg() {
        let start = Instant::now();
        let mut transition = SizeTransition::new(SMALL, Duration::from_millis(300));
        transition.retarget(LARGE, start);
        let before = transition;

        transition.retarget(LARGE, start + Duration::from_millis(100));

        assert_eq!(transition, before);
    }

    #[test]
    fn zero_duration_snaps() {
        let now = Instant::now();
        let mut transition = SizeTransition::new(SMALL, Duration::ZERO);
        transition.retarget(LARGE, now);
        assert!(approx(transition.value_at(now), LARGE));
        assert!(!transition.is_animating(now));
    }

    #[test]
    fn easing_hits_endpoints() {
        assert!(approx(ease_out_cubic(0.0), 0.0));
        assert!(approx(ease_out_cubic(1.0), 1.0));
        assert!(ease_out_cubic(0.5) > 0.5);
    }
}
