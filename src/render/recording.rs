use crate::foundation::core::{BezPath, Point, Viewport};
use crate::foundation::error::{WavelengthError, WavelengthResult};
use crate::render::backend::{
    BACKGROUND_SURFACE_ID, DrawSurface, StrokeStyle, SurfaceHost, SurfaceLayer,
};
use kurbo::PathEl;

/// One recorded stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeOp {
    /// Poly-line vertices in draw order.
    pub points: Vec<Point>,
    pub style: StrokeStyle,
}

/// Surface that records draw calls instead of rasterizing them.
///
/// Strokes recorded since the last [`DrawSurface::clear`] are available through
/// [`RecordingSurface::strokes`].
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    viewport: Viewport,
    layer: Option<SurfaceLayer>,
    strokes: Vec<StrokeOp>,
    clears: u64,
    presents: u64,
    total_strokes: u64,
}

impl RecordingSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layer: None,
            strokes: Vec::new(),
            clears: 0,
            presents: 0,
            total_strokes: 0,
        }
    }

    /// Strokes of the current frame.
    pub fn strokes(&self) -> &[StrokeOp] {
        &self.strokes
    }

    pub fn clears(&self) -> u64 {
        self.clears
    }

    pub fn presents(&self) -> u64 {
        self.presents
    }

    /// Strokes issued over the surface's whole lifetime.
    pub fn total_strokes(&self) -> u64 {
        self.total_strokes
    }

    pub fn layer(&self) -> Option<SurfaceLayer> {
        self.layer
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) -> WavelengthResult<()> {
        self.viewport = viewport;
        self.strokes.clear();
        Ok(())
    }

    fn apply_layer(&mut self, layer: &SurfaceLayer) {
        self.layer = Some(*layer);
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.strokes.clear();
    }

    fn stroke(&mut self, path: &BezPath, style: &StrokeStyle) {
        let points = path
            .elements()
            .iter()
            .filter_map(|el| match *el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(p),
                _ => None,
            })
            .collect();
        self.total_strokes += 1;
        self.strokes.push(StrokeOp {
            points,
            style: *style,
        });
    }

    fn present(&mut self) -> WavelengthResult<()> {
        self.presents += 1;
        Ok(())
    }
}

/// Host for [`RecordingSurface`]s. `available = false` simulates a missing surface element.
#[derive(Clone, Copy, Debug)]
pub struct RecordingHost {
    pub available: bool,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self { available: true }
    }
}

impl SurfaceHost for RecordingHost {
    type Surface = RecordingSurface;

    fn acquire(
        &mut self,
        element_id: &str,
        viewport: Viewport,
    ) -> WavelengthResult<RecordingSurface> {
        if !self.available || element_id != BACKGROUND_SURFACE_ID {
            return Err(WavelengthError::surface(format!(
                "no drawing surface with id '{element_id}'"
            )));
        }
        Ok(RecordingSurface::new(viewport))
    }
}
