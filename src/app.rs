use snowfield::{Field, FieldSettings, SettingsError, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, MouseEvent};

use crate::{document, draw::CanvasSurface, window};

pub const CANVAS_ID: &str = "snowCanvas";
/// The snow stops where this element begins.
pub const BOUNDARY_SELECTOR: &str = ".order";
/// Name of the `data-*` attribute on the canvas that carries JSON [`FieldSettings`].
pub const SETTINGS_KEY: &str = "snowfall";

pub struct App {
    field: Field,
    canvas: HtmlCanvasElement,
    surface: CanvasSurface,
}

impl App {
    pub fn new(
        canvas: HtmlCanvasElement,
        context: CanvasRenderingContext2d,
        settings: FieldSettings,
        seed: u64,
    ) -> Result<App, JsValue> {
        let viewport = measure_viewport()?;
        fit_canvas(&canvas, viewport);

        Ok(App {
            field: Field::new(viewport, settings, seed),
            canvas,
            surface: CanvasSurface::new(context),
        })
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Advances the snow by one step and repaints it.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        self.field.tick();
        self.field.draw(&mut self.surface)
    }

    pub fn on_resize(&mut self) -> Result<(), JsValue> {
        let viewport = measure_viewport()?;

        if viewport != self.field.viewport() {
            console::log_1(
                &format!(
                    "[snowfall] resized to {}x{} at frame {}",
                    viewport.width,
                    viewport.height,
                    self.field.frame()
                )
                .into(),
            );
        }

        fit_canvas(&self.canvas, viewport);
        self.field.resize(viewport);

        Ok(())
    }

    pub fn on_mouse_move(&mut self, event: MouseEvent) {
        let scroll_y = window().scroll_y().unwrap_or_default();

        self.field
            .pointer_moved(event.client_x() as f64, event.client_y() as f64, scroll_y);
    }

    pub fn on_mouse_leave(&mut self) {
        self.field.pointer_left();
    }
}

/// Finds the snow canvas, or creates one over the top of the page when the markup lacks it.
pub fn bind_canvas() -> Result<HtmlCanvasElement, JsValue> {
    if let Some(element) = document().get_element_by_id(CANVAS_ID) {
        return Ok(element.dyn_into::<HtmlCanvasElement>()?);
    }

    let canvas = document()
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    canvas.set_id(CANVAS_ID);

    let style = canvas.style();
    style.set_property("position", "absolute")?;
    style.set_property("top", "0")?;
    style.set_property("left", "0")?;
    style.set_property("pointer-events", "none")?;

    let body = document().body().ok_or("document has no body")?;
    body.insert_before(&canvas, body.first_child().as_ref())?;

    Ok(canvas)
}

/// Reads settings from the canvas `data-snowfall` attribute. Malformed settings are reported
/// and replaced by the defaults.
pub fn read_settings(canvas: &HtmlCanvasElement) -> FieldSettings {
    let raw = canvas.dataset().get(SETTINGS_KEY);

    parse_settings(raw.as_deref()).unwrap_or_else(|err| {
        console::warn_1(&format!("[snowfall] {err}, falling back to defaults").into());
        FieldSettings::default()
    })
}

fn parse_settings(raw: Option<&str>) -> Result<FieldSettings, SettingsError> {
    let Some(raw) = raw else {
        return Ok(FieldSettings::default());
    };

    let settings: FieldSettings =
        serde_json::from_str(raw).map_err(|err| SettingsError(err.to_string()))?;
    settings.validate()?;

    Ok(settings)
}

/// Measures the drawable surface: the full window width, down to the boundary element if
/// the page has one and the window height otherwise.
pub fn measure_viewport() -> Result<Viewport, JsValue> {
    let window = window();
    let inner_width = window.inner_width()?.as_f64().unwrap_or_default();
    let inner_height = window.inner_height()?.as_f64().unwrap_or_default();

    let boundary_top = document()
        .query_selector(BOUNDARY_SELECTOR)?
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .map(|element| element.offset_top() as f64);

    Ok(Viewport::measure(inner_width, inner_height, boundary_top))
}

fn fit_canvas(canvas: &HtmlCanvasElement, viewport: Viewport) {
    canvas.set_width(viewport.width);
    canvas.set_height(viewport.height);
}
