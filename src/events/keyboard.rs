use crate::dom;
use parallax_core::{nav_key_for, ScrollController, SectionCursor};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Arrow keys, space, Home and End step through sections. The cursor is
/// separate from the scroll position, so it can drift after a drag.
pub fn wire_keyboard_navigation(document: &web::Document, scroller: Rc<RefCell<ScrollController>>) {
    let mut cursor = SectionCursor::new(scroller.borrow().section_count());
    dom::add_listener(document.as_ref(), "keydown", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        let Some(key) = nav_key_for(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        if let Some(index) = cursor.apply(key) {
            log::debug!("[keys] {:?} -> section {}", key, index);
            scroller.borrow_mut().scroll_to_section(index);
        }
    });
}
