use crate::foundation::core::{BezPath, Viewport};
use crate::foundation::error::{WavelengthError, WavelengthResult};
use crate::foundation::math::mul_div255_u16;
use crate::render::backend::{
    BACKGROUND_SURFACE_ID, DrawSurface, FrameRGBA, StrokeStyle, SurfaceHost, SurfaceLayer,
};
use vello_cpu::kurbo::{Cap, Join, Stroke};

/// Options for the CPU surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuSurfaceOpts {
    pub(crate) clear_rgba: Option<[u8; 4]>,
}

impl CpuSurfaceOpts {
    /// Return options with a straight-alpha RGBA8 clear colour. `None` clears to transparent.
    pub fn with_clear_rgba(mut self, clear: Option<[u8; 4]>) -> Self {
        self.clear_rgba = clear;
        self
    }
}

/// Raster surface powered by `vello_cpu`.
///
/// Strokes are recorded into a `RenderContext` and rasterized over transparent on
/// [`DrawSurface::present`], then composited source-over onto the configured clear colour. An
/// opaque clear colour therefore always yields an opaque frame.
pub struct CpuSurface {
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    viewport: Viewport,
    opts: CpuSurfaceOpts,
    layer: Option<SurfaceLayer>,
}

impl CpuSurface {
    /// Create a surface of `viewport` size. Both dimensions must fit in `u16`.
    pub fn new(viewport: Viewport, opts: CpuSurfaceOpts) -> WavelengthResult<Self> {
        let (w, h) = surface_dims(viewport)?;
        let mut surface = Self {
            ctx: vello_cpu::RenderContext::new(w, h),
            pixmap: vello_cpu::Pixmap::new(w, h),
            viewport,
            opts,
            layer: None,
        };
        surface.clear_pixmap();
        Ok(surface)
    }

    /// Read back the last presented frame.
    pub fn frame(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.viewport.width,
            height: self.viewport.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    /// Layer applied by the renderer, if any.
    pub fn layer(&self) -> Option<SurfaceLayer> {
        self.layer
    }

    fn clear_pixmap(&mut self) {
        let bytes = self.pixmap.data_as_u8_slice_mut();
        match self.opts.clear_rgba {
            Some(rgba) => {
                let premul = premul_rgba8(rgba);
                for px in bytes.chunks_exact_mut(4) {
                    px.copy_from_slice(&premul);
                }
            }
            None => bytes.fill(0),
        }
    }
}

impl DrawSurface for CpuSurface {
    fn size(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) -> WavelengthResult<()> {
        let (w, h) = surface_dims(viewport)?;
        self.ctx = vello_cpu::RenderContext::new(w, h);
        self.pixmap = vello_cpu::Pixmap::new(w, h);
        self.viewport = viewport;
        self.clear_pixmap();
        Ok(())
    }

    fn apply_layer(&mut self, layer: &SurfaceLayer) {
        self.layer = Some(*layer);
    }

    fn clear(&mut self) {
        self.ctx.reset();
    }

    fn stroke(&mut self, path: &BezPath, style: &StrokeStyle) {
        if style.width <= 0.0 || path.elements().is_empty() {
            return;
        }
        let [r, g, b, a] = style.color.with_opacity(style.opacity);
        let cap = if style.round_caps { Cap::Round } else { Cap::Butt };
        let join = if style.round_caps {
            Join::Round
        } else {
            Join::Miter
        };

        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        self.ctx
            .set_stroke(Stroke::new(style.width).with_caps(cap).with_join(join));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    fn present(&mut self) -> WavelengthResult<()> {
        // `vello_cpu` rasterizes into a fresh buffer; the clear colour goes underneath afterwards.
        self.pixmap.data_as_u8_slice_mut().fill(0);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        if let Some(clear) = self.opts.clear_rgba {
            composite_over(self.pixmap.data_as_u8_slice_mut(), premul_rgba8(clear));
        }
        Ok(())
    }
}

/// Host that hands out CPU surfaces for the background element.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuSurfaceHost {
    opts: CpuSurfaceOpts,
}

impl CpuSurfaceHost {
    pub fn new(opts: CpuSurfaceOpts) -> Self {
        Self { opts }
    }
}

impl SurfaceHost for CpuSurfaceHost {
    type Surface = CpuSurface;

    fn acquire(&mut self, element_id: &str, viewport: Viewport) -> WavelengthResult<CpuSurface> {
        if element_id != BACKGROUND_SURFACE_ID {
            return Err(WavelengthError::surface(format!(
                "no drawing surface with id '{element_id}'"
            )));
        }
        CpuSurface::new(viewport, self.opts)
    }
}

fn surface_dims(viewport: Viewport) -> WavelengthResult<(u16, u16)> {
    if viewport.width == 0 || viewport.height == 0 {
        return Err(WavelengthError::surface("surface width/height must be non-zero"));
    }
    let w: u16 = viewport
        .width
        .try_into()
        .map_err(|_| WavelengthError::surface("surface width exceeds u16"))?;
    let h: u16 = viewport
        .height
        .try_into()
        .map_err(|_| WavelengthError::surface("surface height exceeds u16"))?;
    Ok((w, h))
}

fn premul_rgba8(rgba: [u8; 4]) -> [u8; 4] {
    let [r, g, b, a] = rgba;
    let a16 = u16::from(a);
    let premul = |c: u8| -> u8 { (((u16::from(c) * a16) + 127) / 255) as u8 };
    [premul(r), premul(g), premul(b), a]
}

/// Source-over of premultiplied `src` pixels onto a uniform premultiplied `bg`, in place.
fn composite_over(src: &mut [u8], bg: [u8; 4]) {
    for px in src.chunks_exact_mut(4) {
        let inv = 255 - u16::from(px[3]);
        for (c, b) in px.iter_mut().zip(bg) {
            *c = (u16::from(*c) + mul_div255_u16(u16::from(b), inv)).min(255) as u8;
        }
    }
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in path.elements() {
        match *el {
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

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
