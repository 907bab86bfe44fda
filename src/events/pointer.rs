use crate::dom;
use crate::scene::DomScene;
use instant::Instant;
use parallax_core::ScrollController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub container: web::HtmlElement,
    pub document: web::Document,
    pub scroller: Rc<RefCell<ScrollController>>,
    pub scene: Rc<RefCell<DomScene>>,
    /// Origin for drag timestamps.
    pub clock: Instant,
}

impl InputWiring {
    #[inline]
    fn now_ms(&self) -> f64 {
        self.clock.elapsed().as_secs_f64() * 1000.0
    }
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_mouse(&w);
    wire_touch(&w);
    wire_wheel(&w);
    wire_resize(&w);

    // native image/text dragging would steal the gesture
    dom::add_listener(w.container.as_ref(), "dragstart", |ev| ev.prevent_default());
}

fn wire_mouse(w: &InputWiring) {
    let down = w.clone();
    dom::add_listener(w.container.as_ref(), "mousedown", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            let now = down.now_ms();
            down.scroller
                .borrow_mut()
                .drag_start(ev.client_x() as f64, now);
        }
    });

    let moving = w.clone();
    dom::add_listener(w.document.as_ref(), "mousemove", move |ev| {
        if !moving.scroller.borrow().is_dragging() {
            return;
        }
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            let now = moving.now_ms();
            moving
                .scroller
                .borrow_mut()
                .drag_move(ev.client_x() as f64, now);
        }
    });

    let up = w.clone();
    dom::add_listener(w.document.as_ref(), "mouseup", move |_ev| {
        up.scroller.borrow_mut().drag_end();
    });
}

#[inline]
fn first_touch_x(ev: &web::TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|t| t.client_x() as f64)
}

fn wire_touch(w: &InputWiring) {
    let start = w.clone();
    dom::add_listener(w.container.as_ref(), "touchstart", move |ev| {
        let Some(x) = ev.dyn_ref::<web::TouchEvent>().and_then(first_touch_x) else {
            return;
        };
        let now = start.now_ms();
        start.scroller.borrow_mut().drag_start(x, now);
    });

    let moving = w.clone();
    dom::add_active_listener(w.document.as_ref(), "touchmove", move |ev| {
        if !moving.scroller.borrow().is_dragging() {
            return;
        }
        ev.prevent_default();
        if let Some(x) = ev.dyn_ref::<web::TouchEvent>().and_then(first_touch_x) {
            let now = moving.now_ms();
            moving.scroller.borrow_mut().drag_move(x, now);
        }
    });

    let end = w.clone();
    dom::add_listener(w.document.as_ref(), "touchend", move |_ev| {
        end.scroller.borrow_mut().drag_end();
    });
}

fn wire_wheel(w: &InputWiring) {
    let wheel = w.clone();
    dom::add_active_listener(w.container.as_ref(), "wheel", move |ev| {
        ev.prevent_default();
        if let Some(ev) = ev.dyn_ref::<web::WheelEvent>() {
            wheel
                .scroller
                .borrow_mut()
                .wheel(ev.delta_x(), ev.delta_y());
        }
    });
}

fn wire_resize(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let resize = w.clone();
    dom::add_listener(window.as_ref(), "resize", move |_ev| {
        let widths = resize.scene.borrow().widths();
        resize
            .scroller
            .borrow_mut()
            .resize(dom::viewport_width(), widths);
    });
}
