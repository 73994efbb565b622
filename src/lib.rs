//! slabstep renders a tap-driven chain of triangular "slab" shapes.
//!
//! Five nodes sit in a fixed chain. Each tap animates the current node through one step (a
//! quarter turn, then a staggered slab reveal) and, once the step settles, moves the current
//! pointer to the next node. At the end of the chain the walk reverses.
//!
//! # Layers
//!
//! 1. **Animation core**: scale math, [`AnimationState`], [`Chain`], [`StepController`].
//! 2. **View**: [`TriangleSlabStepView`] composes the controller with a frame-tick [`Animator`].
//! 3. **Surfaces**: the view draws through [`DrawSurface`]; [`CpuSurface`] rasterizes with
//!    `vello_cpu`, [`RecordingSurface`] records calls.
//! 4. **Host**: [`Player`] attaches the view, delivers scripted taps from a [`SessionConfig`]
//!    and streams frames into a [`FrameSink`].
//!
//! The animation core is single threaded and infallible. There is no timer: the host's frame
//! loop is the tick.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod chain;
mod foundation;
mod render;
mod session;
mod view;

pub use animation::scale::{
    BACK_COLOR, FORE_COLOR, NODES, SC_DIV, SC_GAP, SIZE_FACTOR, SLABS, STROKE_FACTOR,
    divide_scale, inverse, max_scale, mirror_value, scale_factor, update_value,
};
pub use animation::state::{AnimationState, StepUpdate};
pub use chain::controller::{Settlement, StepController};
pub use chain::node::{Advance, Chain, Node};
pub use foundation::core::{Affine, BezPath, Canvas, Fps, FrameIndex, Point, Rect, Rgba8Premul};
pub use foundation::error::{SlabStepError, SlabStepResult};
pub use render::cpu::{CpuSurface, FrameRGBA};
pub use render::record::{DrawOp, RecordingSurface};
pub use render::slab::{SlabLayout, draw_slab_node, parity_sign};
pub use render::surface::{DrawSurface, Style};
pub use session::config::SessionConfig;
pub use session::player::{PlayStats, Player};
pub use session::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig, write_png};
pub use view::animator::Animator;
pub use view::view::{InputEvent, Redraw, TriangleSlabStepView, ViewHost};
