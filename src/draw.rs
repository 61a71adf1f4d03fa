use snowfield::Surface;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// Draws the field onto a 2D canvas context.
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d) -> CanvasSurface {
        CanvasSurface { context }
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.context.clear_rect(0.0, 0.0, width, height);

        Ok(())
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, opacity: f64) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0)?;
        self.context.set_fill_style_str(&format!(
            "rgba(255, 255, 255, {})",
            opacity.clamp(0.0, 1.0)
        ));
        self.context.fill();

        Ok(())
    }
}
