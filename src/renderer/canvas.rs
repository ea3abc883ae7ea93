//! Canvas 2D backend

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::DrawCmd;

/// Executes draw lists on a `<canvas>` 2D context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    /// Draw a full frame
    pub fn draw(&self, cmds: &[DrawCmd]) -> Result<(), JsValue> {
        for cmd in cmds {
            self.draw_one(cmd)?;
        }
        Ok(())
    }

    fn draw_one(&self, cmd: &DrawCmd) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match cmd {
            DrawCmd::Clear { color } => {
                ctx.clear_rect(0.0, 0.0, self.width, self.height);
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill_rect(0.0, 0.0, self.width, self.height);
            }
            DrawCmd::FillRect { rect, color } => {
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
            }
            DrawCmd::StrokeRect {
                rect,
                color,
                line_width,
            } => {
                ctx.set_stroke_style_str(&color.to_css());
                ctx.set_line_width(*line_width as f64);
                ctx.stroke_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
            }
            DrawCmd::GradientRect { rect, top, bottom } => {
                let gradient = ctx.create_linear_gradient(
                    rect.x as f64,
                    rect.y as f64,
                    rect.x as f64,
                    (rect.y + rect.h) as f64,
                );
                gradient.add_color_stop(0.0, &top.to_css())?;
                gradient.add_color_stop(1.0, &bottom.to_css())?;
                ctx.set_fill_style_canvas_gradient(&gradient);
                ctx.fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
            }
            DrawCmd::Circle {
                center,
                radius,
                fill,
                stroke,
                line_width,
            } => {
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                ctx.set_fill_style_str(&fill.to_css());
                ctx.fill();
                ctx.set_stroke_style_str(&stroke.to_css());
                ctx.set_line_width(*line_width as f64);
                ctx.stroke();
            }
            DrawCmd::Text {
                pos,
                text,
                size_px,
                color,
            } => {
                ctx.set_fill_style_str(&color.to_css());
                ctx.set_font(&format!("{}px Arial", size_px));
                ctx.set_text_align("center");
                ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
            }
        }
        Ok(())
    }
}
