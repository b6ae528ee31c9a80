use std::time::{Duration, Instant};
use swipedeck::swipe::{
    decide, reveal, ActionBinding, ActionIcon, ActionStyle, Drag, DragSample, GestureOutcome, GestureTracker,
    ResolvedThresholds, SwipeAction, SwipeConfig, Threshold,
};

const STYLE: ActionStyle = ActionStyle {
    label: "Go",
    icon: ActionIcon::Check,
    color: "success",
};

fn binding() -> ActionBinding<&'static str> {
    ActionBinding::new()
        .on_right(SwipeAction::new("right", STYLE))
        .on_left(SwipeAction::new("left", STYLE).destructive())
}

fn tracker() -> GestureTracker {
    let config = SwipeConfig::default();
    GestureTracker::new(config.activation_distance, config.max_reveal())
}

#[test]
fn test_vertical_movement_never_activates() {
    let mut tracker = tracker();
    let t0 = Instant::now();
    tracker.begin(t0);

    for step in 1..=20 {
        let dy = step as f32;
        let dx = dy * 0.9;
        let drag = tracker.track(dx, dy, t0 + Duration::from_millis(step * 10));
        assert_eq!(drag, Drag::Unclaimed);
        assert_eq!(tracker.offset(), 0.0);
    }
    assert!(!tracker.is_active());
    assert_eq!(tracker.release(), None);
}

#[test]
fn test_small_horizontal_movement_stays_below_gate() {
    let mut tracker = tracker();
    let t0 = Instant::now();
    tracker.begin(t0);

    assert_eq!(tracker.track(1.5, 0.0, t0 + Duration::from_millis(10)), Drag::Unclaimed);
    assert!(tracker.is_tracking());
    assert!(!tracker.is_active());
}

#[test]
fn test_activation_reported_once() {
    let mut tracker = tracker();
    let t0 = Instant::now();
    tracker.begin(t0);

    assert_eq!(
        tracker.track(3.0, 0.5, t0 + Duration::from_millis(10)),
        Drag::Claimed {
            offset: 3.0,
            activated: true
        }
    );
    assert_eq!(
        tracker.track(5.0, 0.5, t0 + Duration::from_millis(20)),
        Drag::Claimed {
            offset: 5.0,
            activated: false
        }
    );
}

#[test]
fn test_offset_clamped_to_max_reveal() {
    let config = SwipeConfig::default();
    let mut tracker = tracker();
    let t0 = Instant::now();
    tracker.begin(t0);

    tracker.track(4.0, 0.0, t0 + Duration::from_millis(10));
    tracker.track(100.0, 0.0, t0 + Duration::from_millis(20));
    assert_eq!(tracker.offset(), config.max_reveal());

    tracker.track(-100.0, 0.0, t0 + Duration::from_millis(30));
    assert_eq!(tracker.offset(), -config.max_reveal());
    assert_eq!(tracker.travel(), -100.0);

    // The decision sees the real displacement, not the clamped one.
    let sample = tracker.release().expect("gate passed");
    assert_eq!(sample.dx, -100.0);
}

#[test]
fn test_release_resets_tracker() {
    let mut tracker = tracker();
    let t0 = Instant::now();
    tracker.begin(t0);
    tracker.track(8.0, 0.0, t0 + Duration::from_millis(10));

    assert!(tracker.release().is_some());
    assert!(!tracker.is_tracking());
    assert_eq!(tracker.track(9.0, 0.0, t0 + Duration::from_millis(20)), Drag::Unclaimed);
}

#[test]
fn test_decision_is_independent_of_velocity() {
    let thresholds = ResolvedThresholds {
        positive: 6.0,
        negative: 6.0,
    };
    let binding = binding();
    for velocity_x in [-500.0, 0.0, 500.0] {
        let sample = DragSample { dx: 7.2, velocity_x };
        assert_eq!(decide(&sample, thresholds, &binding), GestureOutcome::CommitRight);

        let sample = DragSample { dx: 2.4, velocity_x };
        assert_eq!(decide(&sample, thresholds, &binding), GestureOutcome::Cancel);
    }
}

#[test]
fn test_thresholds_per_direction() {
    let thresholds = ResolvedThresholds::new(&Threshold::absolute(4.0), &Threshold::screen_fraction(0.25), 80.0);
    let binding = binding();

    assert_eq!(
        decide(&DragSample { dx: 5.0, velocity_x: 0.0 }, thresholds, &binding),
        GestureOutcome::CommitRight
    );
    assert_eq!(
        decide(&DragSample { dx: -5.0, velocity_x: 0.0 }, thresholds, &binding),
        GestureOutcome::Cancel
    );
    assert_eq!(
        decide(&DragSample { dx: -21.0, velocity_x: 0.0 }, thresholds, &binding),
        GestureOutcome::CommitLeft
    );
}

#[test]
fn test_reveal_arms_past_threshold() {
    let binding = binding();
    let thresholds = ResolvedThresholds {
        positive: 6.0,
        negative: 6.0,
    };

    let state = reveal(-7.0, -7.0, 12.0, thresholds, &binding);
    assert!(state.leading.is_none());
    let trailing = state.trailing.expect("trailing affordance");
    assert_eq!(trailing.action.command, "left");
    assert!(trailing.action.destructive);
    assert!(trailing.armed);
    assert_eq!(trailing.width, 7.0);
}
