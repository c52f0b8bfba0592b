//! Keyframe rotation timelines.
//!
//! The declarative keyframe construct of the original is expressed here as
//! an explicit interpolation function: given the angle captured at the last
//! retarget, the current target scale, and the elapsed time, locate the
//! active keyframe segment and linearly interpolate. The frame loop advances
//! elapsed time; nothing ever sets an angle directly.

/// One control point on a timeline, in degrees at a moment in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub at_ms: f32,
    pub value: f32,
}

impl Keyframe {
    pub const fn new(at_ms: f32, value: f32) -> Self {
        Self { at_ms, value }
    }
}

/// A fixed sequence of keyframes with linear easing between neighbors.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    duration_ms: f32,
    keyframes: Vec<Keyframe>,
}

impl Timeline {
    pub fn new(duration_ms: f32, keyframes: Vec<Keyframe>) -> Self {
        debug_assert!(
            keyframes.windows(2).all(|pair| pair[0].at_ms < pair[1].at_ms),
            "keyframes must be in time order"
        );
        Self {
            duration_ms,
            keyframes,
        }
    }

    /// The primary sway: the bell icon and the clapper weight.
    pub fn primary_sway(duration_ms: f32) -> Self {
        Self::new(
            duration_ms,
            [-10.0, 10.0, -10.0, 5.0, 0.0]
                .iter()
                .enumerate()
                .map(|(index, &value)| Keyframe::new(duration_ms * index as f32 / 4.0, value))
                .collect(),
        )
    }

    /// The phase-inverted, lower-amplitude sway of the clapper arm.
    pub fn reverse_sway(duration_ms: f32) -> Self {
        Self::new(
            duration_ms,
            [5.0, -5.0, 5.0, -5.0, 0.0]
                .iter()
                .enumerate()
                .map(|(index, &value)| Keyframe::new(duration_ms * index as f32 / 4.0, value))
                .collect(),
        )
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    /// Current angle, `elapsed_ms` after a retarget that captured
    /// `start_value`. Keyframe values are scaled by `target`; before the
    /// first keyframe the curve runs from the captured start value, and past
    /// the last one it holds.
    pub fn sample(&self, start_value: f32, target: f32, elapsed_ms: f32) -> f32 {
        let Some(first) = self.keyframes.first() else {
            return start_value;
        };
        let t = elapsed_ms.clamp(0.0, self.duration_ms);
        if t < first.at_ms {
            return lerp(
                start_value,
                first.value * target,
                t / first.at_ms,
            );
        }
        let mut current = first;
        for next in &self.keyframes[1..] {
            if t < next.at_ms {
                let nuance = (t - current.at_ms) / (next.at_ms - current.at_ms);
                return lerp(current.value * target, next.value * target, nuance);
            }
            current = next;
        }
        current.value * target
    }
}

fn lerp(from: f32, to: f32, nuance: f32) -> f32 {
    from + (to - from) * nuance
}

/// One live rotation track: a timeline plus where it is right now.
/// Retargeting redirects the in-flight interpolation; toggles never queue.
#[derive(Debug, Clone)]
pub struct SwayTrack {
    timeline: Timeline,
    target: f32,
    start_value: f32,
    elapsed_ms: f32,
}

impl SwayTrack {
    /// Starts settled at rest, as if a previous cycle had completed.
    pub fn new(timeline: Timeline) -> Self {
        let elapsed_ms = timeline.duration_ms();
        Self {
            timeline,
            target: 0.0,
            start_value: 0.0,
            elapsed_ms,
        }
    }

    /// Redirect toward a new target from the current instantaneous angle.
    pub fn retarget(&mut self, target: f32) {
        self.start_value = self.angle();
        self.target = target;
        self.elapsed_ms = 0.0;
    }

    pub fn advance(&mut self, dt_ms: f32) {
        self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.timeline.duration_ms());
    }

    pub fn angle(&self) -> f32 {
        self.timeline
            .sample(self.start_value, self.target, self.elapsed_ms)
    }

    pub fn is_busy(&self) -> bool {
        self.elapsed_ms < self.timeline.duration_ms()
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primary() -> Timeline {
        Timeline::primary_sway(1000.0)
    }

    fn reverse() -> Timeline {
        Timeline::reverse_sway(1000.0)
    }

    #[test]
    fn keyframes_are_hit_exactly() {
        let timeline = primary();
        for (at, expected) in [
            (0.0, -10.0),
            (250.0, 10.0),
            (500.0, -10.0),
            (750.0, 5.0),
            (1000.0, 0.0),
        ] {
            assert_eq!(timeline.sample(0.0, 1.0, at), expected);
        }
    }

    #[test]
    fn start_of_transition_is_keyframe_zero_scaled() {
        assert_eq!(primary().sample(3.7, 1.0, 0.0), -10.0);
        assert_eq!(reverse().sample(3.7, 1.0, 0.0), 5.0);
        assert_eq!(primary().sample(3.7, 0.0, 0.0), 0.0);
    }

    #[test]
    fn full_cycle_ends_at_rest_for_any_target() {
        assert_eq!(primary().sample(0.0, 1.0, 1000.0), 0.0);
        assert_eq!(reverse().sample(0.0, 1.0, 1000.0), 0.0);
        assert_eq!(primary().sample(0.0, 0.5, 1000.0), 0.0);
    }

    #[test]
    fn segments_interpolate_linearly() {
        let timeline = primary();
        assert_eq!(timeline.sample(0.0, 1.0, 125.0), 0.0);
        assert_eq!(timeline.sample(0.0, 1.0, 375.0), 0.0);
        assert_eq!(timeline.sample(0.0, 1.0, 625.0), -2.5);
        assert_eq!(timeline.sample(0.0, 1.0, 875.0), 2.5);
        // quarter of the way into the first segment
        assert_eq!(timeline.sample(0.0, 1.0, 62.5), -5.0);
    }

    #[test]
    fn target_scales_every_keyframe() {
        let timeline = reverse();
        assert_eq!(timeline.sample(0.0, 0.5, 0.0), 2.5);
        assert_eq!(timeline.sample(0.0, 0.5, 250.0), -2.5);
    }

    #[test]
    fn elapsed_time_is_clamped() {
        let timeline = primary();
        assert_eq!(timeline.sample(0.0, 1.0, -50.0), -10.0);
        assert_eq!(timeline.sample(0.0, 1.0, 99999.0), 0.0);
    }

    #[test]
    fn late_first_keyframe_blends_from_start_value() {
        let timeline = Timeline::new(100.0, vec![Keyframe::new(50.0, 10.0)]);
        assert_eq!(timeline.sample(0.0, 1.0, 0.0), 0.0);
        assert_eq!(timeline.sample(0.0, 1.0, 25.0), 5.0);
        assert_eq!(timeline.sample(0.0, 1.0, 50.0), 10.0);
    }

    #[test]
    fn fresh_track_is_settled() {
        let track = SwayTrack::new(primary());
        assert!(!track.is_busy());
        assert_eq!(track.angle(), 0.0);
    }

    #[test]
    fn retarget_restarts_the_curve() {
        let mut track = SwayTrack::new(primary());
        track.retarget(1.0);
        assert!(track.is_busy());
        assert_eq!(track.angle(), -10.0);
        track.advance(250.0);
        assert_eq!(track.angle(), 10.0);
        track.advance(750.0);
        assert_eq!(track.angle(), 0.0);
        assert!(!track.is_busy());
    }

    #[test]
    fn rapid_retargeting_stays_in_range() {
        let mut track = SwayTrack::new(primary());
        track.retarget(1.0);
        for step in 0..100 {
            track.advance(37.0);
            if step % 7 == 0 {
                let target = if track.target() > 0.5 { 0.0 } else { 1.0 };
                track.retarget(target);
            }
            let angle = track.angle();
            assert!(
                (-10.0..=10.0).contains(&angle),
                "angle {angle} escaped the keyframe range"
            );
        }
    }

    #[test]
    fn advance_saturates_at_duration() {
        let mut track = SwayTrack::new(reverse());
        track.retarget(1.0);
        track.advance(400.0);
        track.advance(400.0);
        track.advance(400.0);
        assert!(!track.is_busy());
        assert_eq!(track.angle(), 0.0);
    }
}
