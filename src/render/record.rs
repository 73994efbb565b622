use crate::foundation::core::{Affine, BezPath, Rect, Rgba8Premul};
use crate::render::surface::{DrawSurface, Style};

/// One recorded drawing call, with the transform that was active when it was issued.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Whole-surface clear.
    Clear {
        /// Clear color.
        color: Rgba8Premul,
    },
    /// Clip intersection.
    Clip {
        /// Clip path in local coordinates.
        path: BezPath,
        /// Active transform.
        transform: Affine,
    },
    /// Path outline.
    StrokePath {
        /// Path in local coordinates.
        path: BezPath,
        /// Active transform.
        transform: Affine,
        /// Paint.
        style: Style,
    },
    /// Rectangle outline.
    StrokeRect {
        /// Rectangle in local coordinates.
        rect: Rect,
        /// Active transform.
        transform: Affine,
        /// Paint.
        style: Style,
    },
    /// A `restore` closing a clip pushed since the matching `save`.
    ReleaseClip,
    /// Filled rectangle.
    FillRect {
        /// Rectangle in local coordinates.
        rect: Rect,
        /// Active transform.
        transform: Affine,
        /// Paint.
        style: Style,
    },
}

/// [`DrawSurface`] that records calls instead of rasterizing.
///
/// Useful for inspecting what the view draws without pixel comparisons.
#[derive(Debug)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    transform: Affine,
    clip_depth: usize,
    saved: Vec<(Affine, usize)>,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    /// Create an empty recording for a `width x height` surface.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            transform: Affine::IDENTITY,
            clip_depth: 0,
            saved: Vec::new(),
            ops: Vec::new(),
        }
    }

    /// Borrow the recorded operations in issue order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Current save-stack depth.
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    /// Number of clips currently in effect.
    pub fn clip_depth(&self) -> usize {
        self.clip_depth
    }

    /// Drop recorded operations, keeping size and resetting state.
    pub fn reset(&mut self) {
        self.transform = Affine::IDENTITY;
        self.clip_depth = 0;
        self.saved.clear();
        self.ops.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self, color: Rgba8Premul) {
        self.ops.push(DrawOp::Clear { color });
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform *= Affine::translate((dx, dy));
    }

    fn rotate(&mut self, degrees: f64) {
        self.transform *= Affine::rotate(degrees.to_radians());
    }

    fn save(&mut self) {
        self.saved.push((self.transform, self.clip_depth));
    }

    fn restore(&mut self) {
        let Some((transform, clip_depth)) = self.saved.pop() else {
            tracing::warn!("restore without matching save ignored");
            return;
        };
        while self.clip_depth > clip_depth {
            self.ops.push(DrawOp::ReleaseClip);
            self.clip_depth -= 1;
        }
        self.transform = transform;
    }

    fn clip_path(&mut self, path: &BezPath) {
        self.ops.push(DrawOp::Clip {
            path: path.clone(),
            transform: self.transform,
        });
        self.clip_depth += 1;
    }

    fn stroke_path(&mut self, path: &BezPath, style: &Style) {
        self.ops.push(DrawOp::StrokePath {
            path: path.clone(),
            transform: self.transform,
            style: *style,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, style: &Style) {
        self.ops.push(DrawOp::StrokeRect {
            rect,
            transform: self.transform,
            style: *style,
        });
    }

    fn fill_rect(&mut self, rect: Rect, style: &Style) {
        self.ops.push(DrawOp::FillRect {
            rect,
            transform: self.transform,
            style: *style,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/record.rs"]
mod tests;
