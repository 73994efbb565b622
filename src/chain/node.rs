use crate::animation::scale::NODES;
use crate::animation::state::{AnimationState, StepUpdate};
use crate::render::slab::draw_slab_node;
use crate::render::surface::{DrawSurface, Style};

/// Result of asking a node for its neighbour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// The neighbour exists; carries its index.
    Moved(usize),
    /// The chain ends here; carries the unchanged index.
    Boundary(usize),
}

impl Advance {
    /// Index to continue from, whether or not the move happened.
    pub fn index(self) -> usize {
        match self {
            Self::Moved(i) | Self::Boundary(i) => i,
        }
    }
}

/// One element of the chain.
#[derive(Clone, Debug)]
pub struct Node {
    index: usize,
    state: AnimationState,
    next: Option<usize>,
    previous: Option<usize>,
}

impl Node {
    /// Position in the chain.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Animation state.
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Index of the following node, if any.
    pub fn next(&self) -> Option<usize> {
        self.next
    }

    /// Index of the preceding node, if any.
    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    /// Advance this node's animation by one tick.
    pub fn update(&mut self) -> StepUpdate {
        self.state.update()
    }

    /// Start a step on this node. `false` if one is already running.
    pub fn start_updating(&mut self) -> bool {
        self.state.start_updating()
    }

    /// Neighbour in `direction` (`-1` for previous, anything else for next).
    pub fn advance(&self, direction: i32) -> Advance {
        let neighbour = if direction == -1 {
            self.previous
        } else {
            self.next
        };
        match neighbour {
            Some(i) => Advance::Moved(i),
            None => Advance::Boundary(self.index),
        }
    }
}

/// Fixed-size chain of [`NODES`] nodes linked by index.
#[derive(Clone, Debug)]
pub struct Chain {
    nodes: [Node; NODES],
}

impl Chain {
    /// Build and link all nodes in one pass.
    pub fn new() -> Self {
        let nodes = std::array::from_fn(|i| Node {
            index: i,
            state: AnimationState::new(),
            next: (i + 1 < NODES).then_some(i + 1),
            previous: i.checked_sub(1),
        });
        Self { nodes }
    }

    /// Borrow node `index`.
    ///
    /// Panics if `index >= NODES`.
    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub(crate) fn node_mut(&mut self, index: usize) -> &mut Node {
        &mut self.nodes[index]
    }

    /// Iterate nodes in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Draw node `index` and then each previous node, ending at node 0.
    pub fn draw<S: DrawSurface + ?Sized>(&self, index: usize, surface: &mut S, style: &Style) {
        let mut cursor = Some(index);
        while let Some(i) = cursor {
            let node = &self.nodes[i];
            draw_slab_node(surface, node.index, node.state.scale(), style);
            cursor = node.previous;
        }
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chain/node.rs"]
mod tests;
