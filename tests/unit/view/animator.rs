use super::*;

#[test]
fn stopped_animator_skips_body() {
    let mut a = Animator::new();
    let mut ran = false;
    assert!(!a.animate(|| {
        ran = true;
        false
    }));
    assert!(!ran);
}

#[test]
fn body_completion_stops_animator() {
    let mut a = Animator::new();
    a.start();
    assert!(a.is_animating());
    assert!(a.animate(|| false));
    assert!(a.is_animating());
    // The completing tick still asks for one trailing frame.
    assert!(a.animate(|| true));
    assert!(!a.is_animating());
    assert!(!a.animate(|| unreachable!()));
}

#[test]
fn explicit_stop() {
    let mut a = Animator::new();
    a.start();
    a.start();
    a.stop();
    assert_eq!(a, Animator::new());
}
