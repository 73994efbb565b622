use crate::foundation::core::{Affine, BezPath, Canvas, Rect, Rgba8Premul};
use crate::foundation::error::{SlabStepError, SlabStepResult};
use crate::render::surface::{DrawSurface, Style};

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**. The `premultiplied` flag is included to make this explicit
/// at API boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Read the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

#[derive(Clone, Copy, Debug)]
struct SavedState {
    transform: Affine,
    clip_depth: usize,
}

/// CPU raster [`DrawSurface`] powered by `vello_cpu`.
///
/// Drawing calls are recorded into a `vello_cpu::RenderContext`; [`CpuSurface::finish_frame`]
/// rasterizes them and resets the surface for the next frame.
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    transform: Affine,
    clip_depth: usize,
    saved: Vec<SavedState>,
}

impl CpuSurface {
    /// Create a surface for `canvas`.
    pub fn new(canvas: Canvas) -> SlabStepResult<Self> {
        let canvas = canvas.validate()?;
        let width = u16::try_from(canvas.width)
            .map_err(|_| SlabStepError::render("surface width exceeds u16"))?;
        let height = u16::try_from(canvas.height)
            .map_err(|_| SlabStepError::render("surface height exceeds u16"))?;
        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            transform: Affine::IDENTITY,
            clip_depth: 0,
            saved: Vec::new(),
        })
    }

    /// Surface dimensions.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: u32::from(self.width),
            height: u32::from(self.height),
        }
    }

    /// Rasterize everything drawn since the last call and reset for the next frame.
    ///
    /// Clip layers left open by unbalanced `save`/`restore` are closed first.
    pub fn finish_frame(&mut self) -> FrameRGBA {
        while self.clip_depth > 0 {
            self.ctx.pop_layer();
            self.clip_depth -= 1;
        }
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        self.ctx.reset();
        self.transform = Affine::IDENTITY;
        self.saved.clear();

        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn apply_paint(&mut self, color: Rgba8Premul) {
        self.ctx.set_transform(affine_to_cpu(self.transform));
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
    }

    fn apply_stroke(&mut self, style: &Style) {
        self.apply_paint(style.color);
        self.ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(style.stroke_width)
                .with_caps(vello_cpu::kurbo::Cap::Round),
        );
    }
}

impl DrawSurface for CpuSurface {
    fn width(&self) -> f64 {
        f64::from(self.width)
    }

    fn height(&self) -> f64 {
        f64::from(self.height)
    }

    fn clear(&mut self, color: Rgba8Premul) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform *= Affine::translate((dx, dy));
    }

    fn rotate(&mut self, degrees: f64) {
        self.transform *= Affine::rotate(degrees.to_radians());
    }

    fn save(&mut self) {
        self.saved.push(SavedState {
            transform: self.transform,
            clip_depth: self.clip_depth,
        });
    }

    fn restore(&mut self) {
        let Some(state) = self.saved.pop() else {
            tracing::warn!("restore without matching save ignored");
            return;
        };
        while self.clip_depth > state.clip_depth {
            self.ctx.pop_layer();
            self.clip_depth -= 1;
        }
        self.transform = state.transform;
    }

    fn clip_path(&mut self, path: &BezPath) {
        self.ctx.set_transform(affine_to_cpu(self.transform));
        self.ctx.push_clip_layer(&bezpath_to_cpu(path));
        self.clip_depth += 1;
    }

    fn stroke_path(&mut self, path: &BezPath, style: &Style) {
        self.apply_stroke(style);
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    fn stroke_rect(&mut self, rect: Rect, style: &Style) {
        self.apply_stroke(style);
        self.ctx.stroke_rect(&rect_to_cpu(rect));
    }

    fn fill_rect(&mut self, rect: Rect, style: &Style) {
        self.apply_paint(style.color);
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
