use super::*;
use crate::foundation::core::Rgba8Premul;
use crate::render::record::{DrawOp, RecordingSurface};

#[test]
fn chain_has_five_linked_nodes() {
    let chain = Chain::new();
    assert_eq!(chain.iter().count(), 5);
    for (i, node) in chain.iter().enumerate() {
        assert_eq!(node.index(), i);
        assert_eq!(node.state().scale(), 0.0);
    }
    assert_eq!(chain.node(0).previous(), None);
    assert_eq!(chain.node(4).next(), None);
    for i in 0..4 {
        assert_eq!(chain.node(i).next(), Some(i + 1));
        assert_eq!(chain.node(i + 1).previous(), Some(i));
    }
}

#[test]
fn advance_moves_between_neighbours() {
    let chain = Chain::new();
    assert_eq!(chain.node(2).advance(1), Advance::Moved(3));
    assert_eq!(chain.node(2).advance(-1), Advance::Moved(1));
}

#[test]
fn advance_at_boundary_returns_self() {
    let chain = Chain::new();
    let last = chain.node(4);
    let before = *last.state();
    assert_eq!(last.advance(1), Advance::Boundary(4));
    assert_eq!(last.advance(1).index(), 4);
    assert_eq!(last.state(), &before);
    assert_eq!(chain.node(0).advance(-1), Advance::Boundary(0));
}

#[test]
fn node_update_delegates_to_state() {
    let mut chain = Chain::new();
    let node = chain.node_mut(1);
    assert!(node.start_updating());
    assert!(!node.start_updating());
    assert!(matches!(node.update(), StepUpdate::InProgress(v) if v > 0.0));
}

#[test]
fn draw_walks_back_to_front() {
    let chain = Chain::new();
    let mut surface = RecordingSurface::new(360.0, 640.0);
    let style = Style::new(Rgba8Premul::opaque(0, 0, 0));
    chain.draw(2, &mut surface, &style);

    // One triangle outline per drawn node, current first, ending at node 0.
    let outlines: Vec<f64> = surface
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::StrokePath { transform, .. } => Some(transform.translation().y),
            _ => None,
        })
        .collect();
    assert_eq!(outlines.len(), 3);
    assert!(outlines[0] > outlines[1] && outlines[1] > outlines[2]);
    assert_eq!(surface.save_depth(), 0);
}
