use crate::constants::{rgba, PARTICLE_FILL_ALPHA, PARTICLE_RGB};
use folio_core::{Error, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D implementation of the particle field's drawing surface.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    fill: String,
}

impl CanvasSurface {
    /// Acquire the 2D context of `canvas`.
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| Error::Dom(format!("{:?}", e)))?
            .ok_or(Error::SurfaceUnavailable)?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| Error::SurfaceUnavailable)?;
        Ok(Self {
            ctx,
            fill: rgba(PARTICLE_RGB, PARTICLE_FILL_ALPHA),
        })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
        self.ctx.set_fill_style_str(&self.fill);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, opacity: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&rgba(PARTICLE_RGB, opacity));
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }
}
