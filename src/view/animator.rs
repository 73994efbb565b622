/// Frame-tick animator.
///
/// Holds no timer of its own: the host calls [`Animator::animate`] once per frame and the body
/// runs only while the animator is started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Animator {
    animating: bool,
}

impl Animator {
    /// Stopped animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `true` while started.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Start ticking. No-op if already started.
    pub fn start(&mut self) {
        self.animating = true;
    }

    /// Stop ticking.
    pub fn stop(&mut self) {
        self.animating = false;
    }

    /// Run one tick. `body` returns `true` when the animation is complete, which stops the
    /// animator.
    ///
    /// Returns whether another frame is wanted: `true` whenever the body ran, including the
    /// completing tick, so the final state gets painted once more.
    pub fn animate<F: FnOnce() -> bool>(&mut self, body: F) -> bool {
        if !self.animating {
            return false;
        }
        if body() {
            self.stop();
        }
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/animator.rs"]
mod tests;
