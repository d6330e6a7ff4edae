use hanzi_trace_types::{PathBounds, PenPoint};

// Floor applied to degenerate bounding boxes so single points and
// axis-aligned lines never produce a non-finite scale.
const MIN_EXTENT: f32 = 1.0;

/// Uniform-scale affine transform that maps a source box into a destination
/// square, centered, aspect ratio preserved.
#[derive(Debug, Clone, Copy)]
pub struct FitTransform {
    scale: f32,
    dx: f32,
    dy: f32,
}

impl FitTransform {
    /// Fit-to-rect with centering: `src` scales by the smaller axis ratio
    /// and its center lands on the center of `dst_min..dst_max`.
    pub fn rect_to_square(src: &PathBounds, dst_min: f32, dst_max: f32) -> Self {
        let dst_size = (dst_max - dst_min).max(0.0);
        let width = src.width().max(MIN_EXTENT);
        let height = src.height().max(MIN_EXTENT);
        let scale = (dst_size / width).min(dst_size / height);
        let (cx, cy) = src.center();
        let dst_center = (dst_min + dst_max) * 0.5;
        Self {
            scale,
            dx: dst_center - cx * scale,
            dy: dst_center - cy * scale,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn apply(&self, point: PenPoint) -> PenPoint {
        PenPoint::new(point.x * self.scale + self.dx, point.y * self.scale + self.dy)
    }
}
