use crate::animation::state::StepUpdate;
use crate::chain::node::{Advance, Chain};
use crate::render::surface::{DrawSurface, Style};

/// Reported when the current node finishes a step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settlement {
    /// Node that settled.
    pub index: usize,
    /// Scale it settled at.
    pub scale: f64,
    /// `true` when the node sits at the end of the chain in the controller's direction.
    pub boundary: bool,
}

/// Owns the chain and walks a "current" pointer along it, one node per completed step.
#[derive(Clone, Debug)]
pub struct StepController {
    chain: Chain,
    current: usize,
    direction: i32,
}

impl StepController {
    /// Controller at node 0 walking forward.
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
            current: 0,
            direction: 1,
        }
    }

    /// Borrow the chain.
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Index of the current node.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Walking direction, `1` or `-1`.
    pub fn direction(&self) -> i32 {
        self.direction
    }

    /// Draw the current node and everything before it.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, style: &Style) {
        self.chain.draw(self.current, surface, style);
    }

    /// Tick the current node.
    ///
    /// On settlement the pointer moves to the neighbour in the walking direction. At the end of
    /// the chain the pointer stays put and the direction reverses, so later taps walk back.
    pub fn update(&mut self) -> Option<Settlement> {
        let node = self.chain.node_mut(self.current);
        let StepUpdate::Settled(scale) = node.update() else {
            return None;
        };
        let index = node.index();
        let advance = node.advance(self.direction);
        let boundary = matches!(advance, Advance::Boundary(_));
        if boundary {
            tracing::debug!(index, direction = self.direction, "chain boundary reached");
            self.direction = -self.direction;
        }
        self.current = advance.index();
        tracing::debug!(index, scale, current = self.current, "node settled");
        Some(Settlement {
            index,
            scale,
            boundary,
        })
    }

    /// Start a step on the current node. `false` if one is already running.
    pub fn start_updating(&mut self) -> bool {
        self.chain.node_mut(self.current).start_updating()
    }
}

impl Default for StepController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chain/controller.rs"]
mod tests;
