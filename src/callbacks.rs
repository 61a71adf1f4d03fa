use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::JsValue;
use web_sys::{console, MouseEvent};

use crate::app::App;

pub fn on_animation_frame(app: &Rc<RefCell<App>>) {
    let mut app = app.borrow_mut();

    if let Err(err) = app.frame() {
        console::warn_2(&"[snowfall] frame failed:".into(), &err);
    }
}

pub fn on_resize(app: &Rc<RefCell<App>>, _: JsValue) {
    let mut app = app.borrow_mut();

    if let Err(err) = app.on_resize() {
        console::warn_2(&"[snowfall] resize failed:".into(), &err);
    }
}

pub fn on_mouse_move(app: &Rc<RefCell<App>>, event: MouseEvent) {
    let mut app = app.borrow_mut();

    app.on_mouse_move(event);
}

pub fn on_mouse_leave(app: &Rc<RefCell<App>>, _: MouseEvent) {
    let mut app = app.borrow_mut();

    app.on_mouse_leave();
}
