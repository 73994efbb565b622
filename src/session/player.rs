use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::{SlabStepError, SlabStepResult};
use crate::render::cpu::{CpuSurface, FrameRGBA};
use crate::session::config::SessionConfig;
use crate::session::sink::{FrameSink, SinkConfig};
use crate::view::view::{InputEvent, Redraw, TriangleSlabStepView, ViewHost};

/// Counters gathered during [`Player::play`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayStats {
    /// Frames pushed to the sink.
    pub frames: u64,
    /// Pointer-down events delivered.
    pub taps: u64,
    /// Frames on which a node settled.
    pub settlements: u64,
    /// Frames after which the view asked for another frame.
    pub redraws_requested: u64,
}

/// Offline display host.
///
/// Owns a CPU surface and the attached view, and drives the view one frame per host tick.
pub struct Player {
    canvas: Canvas,
    fps: Fps,
    surface: CpuSurface,
    view: Option<TriangleSlabStepView>,
}

impl ViewHost for Player {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn attach(&mut self, view: TriangleSlabStepView) {
        self.view = Some(view);
    }
}

impl Player {
    /// Create a host for `canvas` ticking at `fps` and attach a fresh view.
    pub fn new(canvas: Canvas, fps: Fps) -> SlabStepResult<Self> {
        let fps = Fps::new(fps.num, fps.den)?;
        let surface = CpuSurface::new(canvas)?;
        let mut player = Self {
            canvas,
            fps,
            surface,
            view: None,
        };
        TriangleSlabStepView::create(&mut player);
        Ok(player)
    }

    /// Host tick rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Borrow the attached view.
    pub fn view(&self) -> SlabStepResult<&TriangleSlabStepView> {
        self.view
            .as_ref()
            .ok_or_else(|| SlabStepError::validation("no view attached"))
    }

    fn view_mut(&mut self) -> SlabStepResult<&mut TriangleSlabStepView> {
        self.view
            .as_mut()
            .ok_or_else(|| SlabStepError::validation("no view attached"))
    }

    /// Deliver an input event to the view.
    pub fn dispatch(&mut self, event: InputEvent) -> SlabStepResult<()> {
        self.view_mut()?.on_input(event);
        Ok(())
    }

    /// Draw one frame (which also ticks a running animation) and read it back.
    pub fn render_frame(&mut self) -> SlabStepResult<(FrameRGBA, Redraw)> {
        let Some(view) = self.view.as_mut() else {
            return Err(SlabStepError::validation("no view attached"));
        };
        let redraw = view.render(&mut self.surface);
        Ok((self.surface.finish_frame(), redraw))
    }

    /// Play a scripted session into `sink`.
    ///
    /// A fresh view is attached first, so the script always starts from idle. For each frame:
    /// taps scheduled on it are delivered first, then the frame is drawn.
    #[tracing::instrument(skip(self, config, sink), fields(duration = config.duration))]
    pub fn play(
        &mut self,
        config: &SessionConfig,
        sink: &mut dyn FrameSink,
    ) -> SlabStepResult<PlayStats> {
        config.validate()?;
        if config.canvas != self.canvas {
            return Err(SlabStepError::validation(format!(
                "session canvas {}x{} does not match host {}x{}",
                config.canvas.width, config.canvas.height, self.canvas.width, self.canvas.height
            )));
        }
        TriangleSlabStepView::create(self);

        sink.begin(SinkConfig {
            width: self.canvas.width,
            height: self.canvas.height,
            fps: self.fps,
        })?;

        let mut stats = PlayStats::default();
        for f in 0..config.duration {
            let (frame, settled, redraw) = self.step(config, f, &mut stats)?;
            if settled {
                stats.settlements += 1;
            }
            if redraw == Redraw::Requested {
                stats.redraws_requested += 1;
            }
            sink.push_frame(FrameIndex(f), &frame)?;
            stats.frames += 1;
        }

        sink.end()?;
        tracing::debug!(?stats, "session played");
        Ok(stats)
    }

    /// Play `config` from idle up to and including `idx` and return that frame.
    ///
    /// Like [`Player::play`], this replaces the attached view with a fresh one.
    pub fn frame_at(
        &mut self,
        config: &SessionConfig,
        idx: FrameIndex,
    ) -> SlabStepResult<FrameRGBA> {
        config.validate()?;
        if idx.0 >= config.duration {
            return Err(SlabStepError::validation(format!(
                "frame {} is outside duration {}",
                idx.0, config.duration
            )));
        }
        TriangleSlabStepView::create(self);
        let mut stats = PlayStats::default();
        let mut last = None;
        for f in 0..=idx.0 {
            let (frame, _, _) = self.step(config, f, &mut stats)?;
            last = Some(frame);
        }
        last.ok_or_else(|| SlabStepError::render("no frame rendered"))
    }

    fn step(
        &mut self,
        config: &SessionConfig,
        f: u64,
        stats: &mut PlayStats,
    ) -> SlabStepResult<(FrameRGBA, bool, Redraw)> {
        for _ in config.taps.iter().filter(|&&t| t == f) {
            self.dispatch(InputEvent::PointerDown)?;
            stats.taps += 1;
        }
        let before = self.view()?.settled_steps();
        let (frame, redraw) = self.render_frame()?;
        let settled = self.view()?.settled_steps() > before;
        Ok((frame, settled, redraw))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/player.rs"]
mod tests;
