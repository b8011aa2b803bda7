use crate::foundation::core::{BezPath, Rgb8, Viewport};
use crate::foundation::error::WavelengthResult;

/// Element id of the background drawing surface.
pub const BACKGROUND_SURFACE_ID: &str = "background-canvas";

/// A rendered frame as RGBA8 pixels.
///
/// Frames read back from [`crate::render::cpu::CpuSurface`] are **premultiplied alpha**. The
/// `premultiplied` flag makes this explicit at API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
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

/// Stroke appearance of one wave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgb8,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Line width in pixels.
    pub width: f64,
    /// Round line caps and joins.
    pub round_caps: bool,
}

/// Placement of a surface relative to page content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceLayer {
    /// Pinned to the viewport rather than scrolling with the page.
    pub fixed: bool,
    /// Stretched over the whole viewport.
    pub fill_viewport: bool,
    pub z_index: i32,
    /// Whether the surface receives pointer events.
    pub interactive: bool,
}

impl SurfaceLayer {
    /// Full-viewport, non-interactive layer behind all content.
    pub const BACKGROUND: Self = Self {
        fixed: true,
        fill_viewport: true,
        z_index: -10,
        interactive: false,
    };
}

/// A 2D surface that waves are stroked onto.
pub trait DrawSurface {
    /// Current surface size in pixels.
    fn size(&self) -> Viewport;

    /// Resize the backing store. Prior contents are discarded.
    fn resize(&mut self, viewport: Viewport) -> WavelengthResult<()>;

    /// Apply layering/placement. Surfaces without a notion of layering ignore it.
    fn apply_layer(&mut self, _layer: &SurfaceLayer) {}

    /// Clear the whole surface to its background.
    fn clear(&mut self);

    /// Stroke `path` with `style`.
    fn stroke(&mut self, path: &BezPath, style: &StrokeStyle);

    /// Finish the frame (rasterize pending work).
    fn present(&mut self) -> WavelengthResult<()> {
        Ok(())
    }
}

/// Source of drawing surfaces, looked up by element id.
pub trait SurfaceHost {
    type Surface: DrawSurface;

    /// Acquire the surface named `element_id`, sized to `viewport`.
    fn acquire(&mut self, element_id: &str, viewport: Viewport)
    -> WavelengthResult<Self::Surface>;
}
