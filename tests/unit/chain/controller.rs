use super::*;

fn settle(c: &mut StepController) -> Settlement {
    for _ in 0..1000 {
        if let Some(s) = c.update() {
            return s;
        }
    }
    panic!("controller never settled");
}

#[test]
fn starts_at_first_node_walking_forward() {
    let c = StepController::new();
    assert_eq!(c.current(), 0);
    assert_eq!(c.direction(), 1);
}

#[test]
fn settlement_advances_current() {
    let mut c = StepController::new();
    assert!(c.start_updating());
    let s = settle(&mut c);
    assert_eq!(
        s,
        Settlement {
            index: 0,
            scale: 1.0,
            boundary: false
        }
    );
    assert_eq!(c.current(), 1);
    assert_eq!(c.chain().node(0).state().scale(), 1.0);
    assert!(!c.chain().node(0).state().is_animating());
}

#[test]
fn update_without_start_never_settles() {
    let mut c = StepController::new();
    for _ in 0..200 {
        assert_eq!(c.update(), None);
    }
    assert_eq!(c.current(), 0);
}

#[test]
fn boundary_keeps_current_and_reverses() {
    let mut c = StepController::new();
    for expected in 0..4 {
        c.start_updating();
        let s = settle(&mut c);
        assert_eq!(s.index, expected);
        assert!(!s.boundary);
    }
    assert_eq!(c.current(), 4);

    c.start_updating();
    let s = settle(&mut c);
    assert_eq!(s.index, 4);
    assert!(s.boundary);
    assert_eq!(c.current(), 4);
    assert_eq!(c.direction(), -1);

    // Walking back: node 4 collapses first, then the pointer moves to node 3.
    assert!(c.start_updating());
    let s = settle(&mut c);
    assert_eq!(s.index, 4);
    assert_eq!(s.scale, 0.0);
    assert_eq!(c.current(), 3);
}
