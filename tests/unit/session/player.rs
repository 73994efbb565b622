use super::*;
use crate::session::sink::InMemorySink;

const CANVAS: Canvas = Canvas {
    width: 90,
    height: 160,
};

#[test]
fn new_player_attaches_a_view() {
    let player = Player::new(CANVAS, Fps::default()).unwrap();
    let view = player.view().unwrap();
    assert_eq!(view.controller().current(), 0);
    assert_eq!(player.fps(), Fps::default());
}

#[test]
fn invalid_host_settings_are_rejected() {
    assert!(Player::new(CANVAS, Fps { num: 0, den: 1 }).is_err());
    assert!(
        Player::new(
            Canvas {
                width: 0,
                height: 1
            },
            Fps::default()
        )
        .is_err()
    );
}

#[test]
fn render_frame_reports_redraw_while_animating() {
    let mut player = Player::new(CANVAS, Fps::default()).unwrap();
    let (frame, redraw) = player.render_frame().unwrap();
    assert_eq!((frame.width, frame.height), (90, 160));
    assert_eq!(frame.data.len(), 90 * 160 * 4);
    assert!(frame.premultiplied);
    assert_eq!(redraw, Redraw::Idle);

    player.dispatch(InputEvent::PointerDown).unwrap();
    let (_, redraw) = player.render_frame().unwrap();
    assert_eq!(redraw, Redraw::Requested);
}

#[test]
fn play_rejects_mismatched_canvas() {
    let mut player = Player::new(CANVAS, Fps::default()).unwrap();
    let cfg = SessionConfig {
        canvas: Canvas {
            width: 91,
            height: 160,
        },
        fps: Fps::default(),
        duration: 2,
        taps: vec![],
    };
    let mut sink = InMemorySink::new();
    assert!(matches!(
        player.play(&cfg, &mut sink),
        Err(SlabStepError::Validation(_))
    ));
    assert!(sink.config().is_none());
}

#[test]
fn frame_at_checks_bounds() {
    let cfg = SessionConfig::back_to_back(CANVAS, Fps::default(), 1);
    let mut player = Player::new(CANVAS, Fps::default()).unwrap();
    assert!(
        player
            .frame_at(&cfg, FrameIndex(cfg.duration))
            .is_err()
    );
    let frame = player.frame_at(&cfg, FrameIndex(cfg.duration - 1)).unwrap();
    assert_eq!(frame.width, 90);
    assert_eq!(player.view().unwrap().controller().current(), 1);
}

#[test]
fn replaying_a_session_starts_from_idle() {
    let cfg = SessionConfig::back_to_back(CANVAS, Fps::default(), 2);
    let mut player = Player::new(CANVAS, Fps::default()).unwrap();

    let mut first = InMemorySink::new();
    let a = player.play(&cfg, &mut first).unwrap();
    let mut second = InMemorySink::new();
    let b = player.play(&cfg, &mut second).unwrap();
    assert_eq!(a, b);
    assert_eq!(player.view().unwrap().controller().current(), 2);
    assert_eq!(player.view().unwrap().settled_steps(), 2);

    let last = FrameIndex(cfg.duration - 1);
    let x = player.frame_at(&cfg, last).unwrap();
    let y = player.frame_at(&cfg, last).unwrap();
    assert_eq!(x.data, y.data);
    assert_eq!(player.view().unwrap().controller().current(), 2);
}
