use crate::dom;
use parallax_core::stagger::{self, LoadInStyle, HIDDEN, SETTLED, SETTLE_TRANSITION};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn apply(el: &web::HtmlElement, style: &LoadInStyle) {
    dom::set_style(el, "opacity", &style.opacity.to_string());
    dom::set_style(el, "transform", &style.transform.to_string());
}

/// Hide every section, then bring them in one after another.
pub fn run_load_in(sections: &[web::HtmlElement]) {
    let Some(window) = web::window() else {
        return;
    };
    for (index, delay) in stagger::schedule(sections.len()) {
        let el = sections[index].clone();
        apply(&el, &HIDDEN);
        let settle = Closure::once_into_js(move || {
            dom::set_style(&el, "transition", SETTLE_TRANSITION);
            apply(&el, &SETTLED);
        });
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            settle.unchecked_ref(),
            i32::try_from(delay).unwrap_or(i32::MAX),
        );
    }
    log::info!("[load-in] staggering {} sections", sections.len());
}
