use crate::core::{Rgba, Surface};
use crate::dom::js_err;
use crate::error::SiteError;
use glam::DVec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// `Surface` backed by a canvas 2D context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> Result<Self, SiteError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or(SiteError::ContextUnavailable)?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| SiteError::ContextUnavailable)?;
        Ok(Self { ctx })
    }
}

// String styles go through the JsValue setters for compatibility with older web-sys.
#[allow(deprecated)]
impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU);
        self.ctx.set_fill_style(&JsValue::from_str(&color.css()));
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.set_stroke_style(&JsValue::from_str(&color.css()));
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }

    fn fill_radial_glow(
        &mut self,
        center: DVec2,
        radius: f64,
        inner: Rgba,
        outer: Rgba,
        width: f64,
        height: f64,
    ) {
        let gradient = match self
            .ctx
            .create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)
        {
            Ok(g) => g,
            Err(e) => {
                log::warn!("[hero] radial gradient failed: {:?}", e);
                return;
            }
        };
        _ = gradient.add_color_stop(0.0, &inner.css());
        _ = gradient.add_color_stop(1.0, &outer.css());
        let style: JsValue = gradient.into();
        self.ctx.set_fill_style(&style);
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }
}
