//! The bell itself: a two-state toggle driving two sway tracks.

use strum::Display;

use crate::animation::{SwayTrack, Timeline};

/// Which pose the animation is currently targeting. Starts `Idle`; the
/// application flips it once automatically when the screen first comes up,
/// and after that only taps flip it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ToggleState {
    Idle,
    Move,
}

impl ToggleState {
    pub fn flipped(self) -> Self {
        match self {
            ToggleState::Idle => ToggleState::Move,
            ToggleState::Move => ToggleState::Idle,
        }
    }

    pub fn target(self) -> f32 {
        match self {
            ToggleState::Idle => 0.0,
            ToggleState::Move => 1.0,
        }
    }
}

pub struct Bell {
    state: ToggleState,
    primary: SwayTrack,
    reverse: SwayTrack,
}

impl Bell {
    pub fn new(cycle_ms: u32) -> Self {
        // a zero cycle would stack all keyframes on one instant
        let duration_ms = cycle_ms.max(1) as f32;
        Self {
            state: ToggleState::Idle,
            primary: SwayTrack::new(Timeline::primary_sway(duration_ms)),
            reverse: SwayTrack::new(Timeline::reverse_sway(duration_ms)),
        }
    }

    /// Flip the state and redirect both tracks toward the new target.
    /// Re-toggling mid-cycle redirects the live interpolation; nothing queues.
    pub fn toggle(&mut self) {
        self.state = self.state.flipped();
        let target = self.state.target();
        self.primary.retarget(target);
        self.reverse.retarget(target);
    }

    pub fn advance(&mut self, dt_ms: f32) {
        self.primary.advance(dt_ms);
        self.reverse.advance(dt_ms);
    }

    /// Degrees for the icon and the clapper weight.
    pub fn primary_angle(&self) -> f32 {
        self.primary.angle()
    }

    /// Degrees for the clapper assembly, phase-inverted and half amplitude.
    pub fn reverse_angle(&self) -> f32 {
        self.reverse.angle()
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn is_swinging(&self) -> bool {
        self.primary.is_busy() || self.reverse.is_busy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_alternates_strictly_from_idle() {
        let mut bell = Bell::new(1000);
        assert_eq!(bell.state(), ToggleState::Idle);
        let mut expected = ToggleState::Idle;
        for _ in 0..7 {
            bell.toggle();
            expected = expected.flipped();
            assert_eq!(bell.state(), expected);
        }
    }

    #[test]
    fn toggle_starts_both_curves() {
        let mut bell = Bell::new(1000);
        bell.toggle();
        assert_eq!(bell.state(), ToggleState::Move);
        assert_eq!(bell.primary_angle(), -10.0);
        assert_eq!(bell.reverse_angle(), 5.0);
        assert!(bell.is_swinging());
    }

    #[test]
    fn full_cycle_returns_to_neutral() {
        let mut bell = Bell::new(1000);
        bell.toggle();
        bell.advance(1000.0);
        assert_eq!(bell.primary_angle(), 0.0);
        assert_eq!(bell.reverse_angle(), 0.0);
        assert!(!bell.is_swinging());
    }

    #[test]
    fn double_round_trip_matches_single_toggle() {
        let mut once = Bell::new(1000);
        once.toggle();
        once.advance(130.0);

        let mut round_tripped = Bell::new(1000);
        round_tripped.toggle();
        round_tripped.advance(1000.0);
        round_tripped.toggle();
        round_tripped.advance(1000.0);
        round_tripped.toggle();
        round_tripped.advance(130.0);

        assert_eq!(once.state(), round_tripped.state());
        assert_eq!(once.primary_angle(), round_tripped.primary_angle());
        assert_eq!(once.reverse_angle(), round_tripped.reverse_angle());
    }

    #[test]
    fn rapid_taps_never_escape_the_keyframe_range() {
        let mut bell = Bell::new(1000);
        bell.toggle();
        for frame in 0..500 {
            bell.advance(16.0);
            if frame % 13 == 0 {
                bell.toggle();
            }
            let primary = bell.primary_angle();
            let reverse = bell.reverse_angle();
            assert!((-10.0..=10.0).contains(&primary), "primary {primary}");
            assert!((-5.0..=5.0).contains(&reverse), "reverse {reverse}");
        }
    }

    #[test]
    fn zero_cycle_duration_still_settles() {
        let mut bell = Bell::new(0);
        bell.toggle();
        bell.advance(1.0);
        assert!(!bell.is_swinging());
        assert_eq!(bell.primary_angle(), 0.0);
    }

    #[test]
    fn custom_cycle_duration_scales_the_timeline() {
        let mut bell = Bell::new(500);
        bell.toggle();
        bell.advance(125.0);
        assert_eq!(bell.primary_angle(), 10.0);
        bell.advance(375.0);
        assert!(!bell.is_swinging());
    }
}
