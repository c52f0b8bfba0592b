use animate_notification::animation::{SwayTrack, Timeline};
use animate_notification::bell::{Bell, ToggleState};

const FRAME_MS: f32 = 16.0;

fn settle(bell: &mut Bell, cycle_ms: u32) {
    let mut remaining = cycle_ms as f32;
    while remaining > 0.0 {
        bell.advance(FRAME_MS.min(remaining));
        remaining -= FRAME_MS;
    }
}

#[test]
fn first_display_rings_then_taps_alternate() {
    let mut bell = Bell::new(1000);
    assert_eq!(bell.state(), ToggleState::Idle);
    assert!(!bell.is_swinging());

    // the automatic flip when the screen first comes up
    bell.toggle();
    assert_eq!(bell.state(), ToggleState::Move);
    assert!(bell.is_swinging());
    settle(&mut bell, 1000);
    assert!(!bell.is_swinging());
    assert_eq!(bell.primary_angle(), 0.0);
    assert_eq!(bell.reverse_angle(), 0.0);

    // tapping the bell settles it, tapping the button rings it again
    bell.toggle();
    assert_eq!(bell.state(), ToggleState::Idle);
    settle(&mut bell, 1000);
    bell.toggle();
    assert_eq!(bell.state(), ToggleState::Move);
    settle(&mut bell, 1000);
    assert_eq!(bell.primary_angle(), 0.0);
}

#[test]
fn settling_from_rest_causes_no_motion() {
    let mut bell = Bell::new(1000);
    bell.toggle();
    settle(&mut bell, 1000);

    // toggling toward Idle scales every keyframe by zero
    bell.toggle();
    for _ in 0..20 {
        bell.advance(FRAME_MS);
        assert_eq!(bell.primary_angle(), 0.0);
        assert_eq!(bell.reverse_angle(), 0.0);
    }
}

#[test]
fn mid_cycle_retap_redirects_instead_of_queueing() {
    let mut bell = Bell::new(1000);
    bell.toggle();
    bell.advance(250.0);
    assert_eq!(bell.primary_angle(), 10.0);

    // redirect toward Idle mid-swing; the cycle restarts, nothing queues
    bell.toggle();
    assert_eq!(bell.state(), ToggleState::Idle);
    assert_eq!(bell.primary_angle(), 0.0);
    settle(&mut bell, 1000);
    assert_eq!(bell.state(), ToggleState::Idle);
    assert!(!bell.is_swinging());
    assert_eq!(bell.primary_angle(), 0.0);
}

#[test]
fn tracks_stay_phase_opposed_at_the_quarter_points() {
    for (elapsed, primary, reverse) in [
        (0.0, -10.0, 5.0),
        (250.0, 10.0, -5.0),
        (500.0, -10.0, 5.0),
        (750.0, 5.0, -5.0),
        (1000.0, 0.0, 0.0),
    ] {
        let mut fresh = Bell::new(1000);
        fresh.toggle();
        fresh.advance(elapsed);
        assert_eq!(fresh.primary_angle(), primary, "primary at {elapsed}ms");
        assert_eq!(fresh.reverse_angle(), reverse, "reverse at {elapsed}ms");
    }
}

#[test]
fn sway_track_survives_a_frame_storm() {
    let mut track = SwayTrack::new(Timeline::primary_sway(1000.0));
    track.retarget(1.0);
    let mut extreme: f32 = 0.0;
    for _ in 0..2000 {
        track.advance(1.0);
        extreme = extreme.max(track.angle().abs());
        assert!(track.angle().is_finite());
    }
    assert_eq!(extreme, 10.0);
    assert!(!track.is_busy());
    assert_eq!(track.angle(), 0.0);
}
