use crate::animation::scale::{NODES, SIZE_FACTOR, SLABS, STROKE_FACTOR, divide_scale};
use crate::foundation::core::{BezPath, Point, Rect};
use crate::render::surface::{DrawSurface, Style};

/// Geometry of one node's triangle, derived from the surface size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlabLayout {
    /// Vertical distance between consecutive node centers.
    pub gap: f64,
    /// Half-width of the triangle base, and its full height.
    pub size: f64,
    /// Stroke width for outlines.
    pub stroke_width: f64,
}

impl SlabLayout {
    /// Compute layout for a `width x height` surface.
    pub fn for_surface(width: f64, height: f64) -> Self {
        let gap = height / (NODES as f64 + 1.0);
        Self {
            gap,
            size: gap / SIZE_FACTOR,
            stroke_width: width.min(height) / STROKE_FACTOR,
        }
    }

    /// Center of node `index` before rotation.
    pub fn center(&self, width: f64, index: usize) -> Point {
        Point::new(width / 2.0, self.gap * (index as f64 + 1.0))
    }

    /// Triangle silhouette centered on the origin; apex up when `flip` is 1, down when -1.
    pub fn triangle(&self, flip: f64) -> BezPath {
        let half = self.size / 2.0;
        let mut path = BezPath::new();
        path.move_to((-self.size, half * flip));
        path.line_to((self.size, half * flip));
        path.line_to((0.0, -half * flip));
        path.close_path();
        path
    }

    /// Horizontal band `j` of the triangle's bounding box, slid left by `1 - progress`.
    pub fn slab_rect(&self, j: usize, progress: f64) -> Rect {
        let band = self.size / SLABS as f64;
        let y0 = -self.size / 2.0 + band * j as f64;
        let x0 = -self.size - 2.0 * self.size * (1.0 - progress);
        Rect::new(x0, y0, x0 + 2.0 * self.size, y0 + band)
    }
}

/// Orientation sign for node `index`: `1.0` for even, `-1.0` for odd.
pub fn parity_sign(index: usize) -> f64 {
    1.0 - 2.0 * (index % 2) as f64
}

/// Draw node `index` at animation `scale`.
///
/// The first half of `scale` rotates the triangle a quarter turn; the second half reveals the
/// slabs one after another.
pub fn draw_slab_node<S: DrawSurface + ?Sized>(
    surface: &mut S,
    index: usize,
    scale: f64,
    style: &Style,
) {
    let w = surface.width();
    let h = surface.height();
    let layout = SlabLayout::for_surface(w, h);
    let sc1 = divide_scale(scale, 0.0, 2.0);
    let sc2 = divide_scale(scale, 1.0, 2.0);
    let flip = parity_sign(index);
    let style = style.with_stroke_width(layout.stroke_width);
    let center = layout.center(w, index);
    let triangle = layout.triangle(flip);

    surface.save();
    surface.translate(center.x, center.y);
    surface.rotate(90.0 * sc1 * flip);
    surface.stroke_path(&triangle, &style);
    surface.save();
    surface.clip_path(&triangle);
    for j in 0..SLABS {
        let progress = divide_scale(sc2, j as f64, SLABS as f64);
        surface.stroke_rect(layout.slab_rect(j, 1.0), &style);
        surface.fill_rect(layout.slab_rect(j, progress), &style);
    }
    surface.restore();
    surface.restore();
}

#[cfg(test)]
#[path = "../../tests/unit/render/slab.rs"]
mod tests;
