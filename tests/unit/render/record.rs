use super::*;

fn square() -> BezPath {
    let mut p = BezPath::new();
    p.move_to((0.0, 0.0));
    p.line_to((4.0, 0.0));
    p.line_to((4.0, 4.0));
    p.close_path();
    p
}

#[test]
fn restore_releases_clips_from_its_save() {
    let mut s = RecordingSurface::new(10.0, 10.0);
    s.save();
    s.clip_path(&square());
    s.save();
    s.clip_path(&square());
    s.clip_path(&square());
    assert_eq!(s.clip_depth(), 3);

    s.restore();
    assert_eq!(s.clip_depth(), 1);
    s.restore();
    assert_eq!(s.clip_depth(), 0);

    let released = s
        .ops()
        .iter()
        .filter(|op| **op == DrawOp::ReleaseClip)
        .count();
    assert_eq!(released, 3);
    assert_eq!(s.ops().last(), Some(&DrawOp::ReleaseClip));
}

#[test]
fn unmatched_restore_is_ignored() {
    let mut s = RecordingSurface::new(10.0, 10.0);
    s.translate(3.0, 0.0);
    s.restore();
    s.fill_rect(
        Rect::new(0.0, 0.0, 1.0, 1.0),
        &Style::new(Rgba8Premul::opaque(0, 0, 0)),
    );
    assert_eq!(s.save_depth(), 0);
    let DrawOp::FillRect { transform, .. } = &s.ops()[0] else {
        unreachable!()
    };
    assert_eq!(*transform, Affine::translate((3.0, 0.0)));
}

#[test]
fn save_restore_brackets_transform() {
    let mut s = RecordingSurface::new(10.0, 10.0);
    s.save();
    s.translate(5.0, 5.0);
    s.restore();
    s.stroke_rect(
        Rect::new(0.0, 0.0, 1.0, 1.0),
        &Style::new(Rgba8Premul::opaque(0, 0, 0)),
    );
    let DrawOp::StrokeRect { transform, .. } = &s.ops()[0] else {
        unreachable!()
    };
    assert_eq!(*transform, Affine::IDENTITY);
    s.reset();
    assert!(s.ops().is_empty());
    assert_eq!(s.clip_depth(), 0);
}
