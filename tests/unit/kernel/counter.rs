use super::*;

#[test]
fn decrement_never_goes_below_zero() {
    let mut counter = CounterState::new();
    assert!(!counter.can_decrement());
    assert!(!counter.decrement());
    assert_eq!(counter.count(), 0);

    counter.increment();
    assert!(counter.decrement());
    assert_eq!(counter.count(), 0);
}

#[test]
fn reset_returns_to_zero() {
    let mut counter = CounterState::new();
    counter.increment();
    counter.increment();
    assert!(counter.reset());
    assert_eq!(counter.count(), 0);
    assert!(!counter.reset());
}

#[test]
fn target_intensity_is_capped() {
    let mut counter = CounterState::new();
    counter.increment();
    assert!((counter.target_intensity() - 0.1).abs() < 1e-6);

    for _ in 0..20 {
        counter.increment();
    }
    assert!((counter.target_intensity() - MAX_INTENSITY).abs() < 1e-6);
}

#[test]
fn background_springs_toward_target_and_settles() {
    let mut counter = CounterState::new();
    for _ in 0..5 {
        counter.increment();
    }
    assert!(counter.is_animating());
    assert_eq!(counter.intensity(), 0.0);

    assert!(counter.tick(Duration::from_millis(16)));
    assert!(counter.intensity() > 0.0);

    for _ in 0..200 {
        counter.tick(Duration::from_millis(16));
    }
    assert!(!counter.is_animating());
    assert!((counter.intensity() - 0.5).abs() < 1e-6);
    assert!(!counter.tick(Duration::from_millis(16)));
}

#[test]
fn long_frames_are_bounded() {
    let mut spring = Spring::at_rest(0.0);
    spring.target = 0.9;
    spring.advance(Duration::from_secs(60));
    assert!(spring.position.is_finite());
    assert!(spring.position > 0.0);
}
