mod app;
mod callbacks;
mod draw;

use std::{cell::RefCell, rc::Rc};

use app::{bind_canvas, read_settings, App};
use snowfield::FieldSettings;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::console;

fn window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

fn request_animation_frame(f: &Closure<dyn FnMut()>) {
    window()
        .request_animation_frame(f.as_ref().unchecked_ref())
        .expect("should register `requestAnimationFrame` OK");
}

fn document() -> web_sys::Document {
    window()
        .document()
        .expect("should have a document on window")
}

/// Mixes the page clock with wall time so each visit gets different snow.
fn seed() -> u64 {
    let now = window()
        .performance()
        .map(|performance| performance.now())
        .unwrap_or_default();

    now.to_bits() ^ js_sys::Date::now().to_bits().rotate_left(32)
}

/// Returns the default [`FieldSettings`] as a plain JS object, the shape `data-snowfall`
/// accepts.
#[wasm_bindgen]
pub fn default_settings() -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&FieldSettings::default())?)
}

#[wasm_bindgen(start)]
fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let canvas = bind_canvas()?;

    let context = canvas
        .get_context("2d")?
        .ok_or("canvas has no 2d context")?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()?;

    let settings = read_settings(&canvas);
    let app = App::new(canvas, context, settings, seed())?;

    {
        let field = app.field();
        let viewport = field.viewport();
        console::log_1(
            &format!(
                "[snowfall] {} flakes over {}x{}",
                field.len(),
                viewport.width,
                viewport.height
            )
            .into(),
        );
    }

    let app = Rc::new(RefCell::new(app));

    let f = Rc::new(RefCell::new(None));
    let g = f.clone();

    {
        let app = app.clone();

        *g.borrow_mut() = Some(Closure::new(move || {
            callbacks::on_animation_frame(&app);

            if let Some(closure) = f.borrow().as_ref() {
                request_animation_frame(closure);
            }
        }));
    }

    if let Some(closure) = g.borrow().as_ref() {
        request_animation_frame(closure);
    }

    for event in ["resize", "load"] {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |value: JsValue| {
            callbacks::on_resize(&app, value);
        });
        window().add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
            callbacks::on_mouse_move(&app, event);
        });
        document()
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
            callbacks::on_mouse_leave(&app, event);
        });
        document()
            .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}
