use crate::animation::scale::{BACK_COLOR, FORE_COLOR};
use crate::chain::controller::{Settlement, StepController};
use crate::foundation::core::Canvas;
use crate::render::surface::{DrawSurface, Style};
use crate::view::animator::Animator;

/// Pointer input delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer pressed.
    PointerDown,
    /// Pointer released.
    PointerUp,
    /// Pointer moved while pressed.
    PointerMove,
}

/// What the view wants after rendering a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redraw {
    /// An animation is running; schedule another frame.
    Requested,
    /// Nothing is moving.
    Idle,
}

/// Display container that owns a view and provides its drawable size.
pub trait ViewHost {
    /// Size of the drawable area.
    fn canvas(&self) -> Canvas;

    /// Take ownership of `view` as the displayed content.
    fn attach(&mut self, view: TriangleSlabStepView);
}

/// The chain of triangle slabs, stepped forward one node per tap.
#[derive(Clone, Debug)]
pub struct TriangleSlabStepView {
    controller: StepController,
    animator: Animator,
    style: Style,
    last_settlement: Option<Settlement>,
    settled_steps: u64,
}

impl TriangleSlabStepView {
    /// Fresh view: controller at node 0, animator stopped.
    pub fn new() -> Self {
        Self {
            controller: StepController::new(),
            animator: Animator::new(),
            style: Style::new(FORE_COLOR),
            last_settlement: None,
            settled_steps: 0,
        }
    }

    /// Build a view and attach it to `host`.
    pub fn create<H: ViewHost + ?Sized>(host: &mut H) {
        let canvas = host.canvas();
        tracing::debug!(width = canvas.width, height = canvas.height, "attaching view");
        host.attach(Self::new());
    }

    /// Borrow the step controller.
    pub fn controller(&self) -> &StepController {
        &self.controller
    }

    /// Borrow the animator.
    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Most recent settlement, if any step has completed.
    pub fn last_settlement(&self) -> Option<Settlement> {
        self.last_settlement
    }

    /// Number of steps completed since creation.
    pub fn settled_steps(&self) -> u64 {
        self.settled_steps
    }

    /// Draw one frame and advance the running animation by one tick.
    ///
    /// The tick that settles a step still returns [`Redraw::Requested`]; the following frame
    /// paints the settled state and returns [`Redraw::Idle`].
    pub fn render<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> Redraw {
        surface.clear(BACK_COLOR);
        self.controller.draw(surface, &self.style);

        let controller = &mut self.controller;
        let last = &mut self.last_settlement;
        let count = &mut self.settled_steps;
        let more = self.animator.animate(|| match controller.update() {
            Some(s) => {
                *last = Some(s);
                *count += 1;
                true
            }
            None => false,
        });
        if more { Redraw::Requested } else { Redraw::Idle }
    }

    /// Start a step on the current node. Ignored while a step is running.
    pub fn handle_tap(&mut self) {
        if self.controller.start_updating() {
            tracing::debug!(current = self.controller.current(), "tap started step");
            self.animator.start();
        } else {
            tracing::debug!(current = self.controller.current(), "tap ignored mid-step");
        }
    }

    /// Dispatch host input. Only [`InputEvent::PointerDown`] is recognised.
    pub fn on_input(&mut self, event: InputEvent) {
        if event == InputEvent::PointerDown {
            self.handle_tap();
        }
    }
}

impl Default for TriangleSlabStepView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/view.rs"]
mod tests;
