use crate::foundation::core::{BezPath, Rect, Rgba8Premul};

/// Paint parameters for fill and stroke operations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    /// Paint color.
    pub color: Rgba8Premul,
    /// Stroke width in user units (ignored by fills).
    pub stroke_width: f64,
}

impl Style {
    /// Style with the given color and a hairline stroke.
    pub fn new(color: Rgba8Premul) -> Self {
        Self {
            color,
            stroke_width: 1.0,
        }
    }

    /// Return a copy with a different stroke width.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }
}

/// 2D drawing context consumed by the view.
///
/// Transforms compose the way a canvas API does: `translate`/`rotate` post-multiply the current
/// transform, so later calls act in the already-transformed coordinate space. `save`/`restore`
/// bracket both transform and clip state.
pub trait DrawSurface {
    /// Surface width in pixels.
    fn width(&self) -> f64;

    /// Surface height in pixels.
    fn height(&self) -> f64;

    /// Fill the whole surface with `color`, ignoring the current transform.
    fn clear(&mut self, color: Rgba8Premul);

    /// Translate the current transform.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Rotate the current transform by `degrees` (clockwise in y-down space).
    fn rotate(&mut self, degrees: f64);

    /// Push the current transform and clip state.
    fn save(&mut self);

    /// Pop to the last saved transform and clip state.
    ///
    /// An unmatched `restore` is ignored.
    fn restore(&mut self);

    /// Intersect the clip with `path` in current coordinates.
    fn clip_path(&mut self, path: &BezPath);

    /// Stroke the outline of `path`.
    fn stroke_path(&mut self, path: &BezPath, style: &Style);

    /// Stroke the outline of `rect`.
    fn stroke_rect(&mut self, rect: Rect, style: &Style);

    /// Fill `rect`.
    fn fill_rect(&mut self, rect: Rect, style: &Style);
}
