use crate::constants::*;
use parallax_core::{ScrollConfig, Section, SectionKind, SectionMedia};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn viewport_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{id} is not an HTML element: {:?}", e))
}

/// All `HtmlElement` matches of `selector` under `root`, in document order.
pub fn select_all(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn select_first(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn document_sections(document: &web::Document) -> Vec<web::HtmlElement> {
    document
        .document_element()
        .map(|root| select_all(&root, SECTION_SELECTOR))
        .unwrap_or_default()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn clear_style(el: &web::HtmlElement, property: &str) {
    _ = el.style().remove_property(property);
}

/// Handles to one `.section` and the children the frame pass restyles.
pub struct SectionNodes {
    pub root: web::HtmlElement,
    pub hero_image: Option<web::HtmlElement>,
    pub background_image: Option<web::HtmlElement>,
    pub text: Vec<web::HtmlElement>,
    pub reset_text: Vec<web::HtmlElement>,
}

impl SectionNodes {
    pub fn scan(root: web::HtmlElement) -> Self {
        let el: &web::Element = root.as_ref();
        Self {
            hero_image: select_first(el, HERO_IMAGE_SELECTOR),
            background_image: select_first(el, BG_IMAGE_SELECTOR),
            text: select_all(el, TEXT_SELECTOR),
            reset_text: select_all(el, RESET_TEXT_SELECTOR),
            root,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.root.offset_width() as f64
    }

    pub fn model(&self) -> Section {
        Section::new(SectionKind::from_class_list(&self.root.class_name()), self.width())
            .with_media(SectionMedia {
                hero_image: self.hero_image.is_some(),
                background_image: self.background_image.is_some(),
            })
            .with_text_count(self.text.len())
    }
}

/// Read `data-ease` / `data-momentum` / `data-wheel` from `el`; falls back to defaults.
pub fn scroll_config_from(el: &web::Element) -> ScrollConfig {
    let overrides: Vec<(&str, String)> = ScrollConfig::KEYS
        .iter()
        .filter_map(|key| {
            el.get_attribute(&format!("{CONFIG_ATTR_PREFIX}{key}"))
                .map(|value| (*key, value))
        })
        .collect();
    match ScrollConfig::with_overrides(overrides.iter().map(|(k, v)| (*k, v.as_str()))) {
        Ok(cfg) => {
            if !overrides.is_empty() {
                log::info!("[config] {:?}", cfg);
            }
            cfg
        }
        Err(e) => {
            log::warn!("[config] ignoring overrides: {e}");
            ScrollConfig::default()
        }
    }
}

pub fn add_listener<F>(target: &web::EventTarget, event: &str, handler: F)
where
    F: FnMut(web::Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Same as [`add_listener`] but non-passive, so the handler may call `prevent_default`.
pub fn add_active_listener<F>(target: &web::EventTarget, event: &str, handler: F)
where
    F: FnMut(web::Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        match web::window() {
            Some(w) => {
                _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
            }
            None => {
                _ = resolve.call0(&JsValue::NULL);
            }
        }
    });
    _ = JsFuture::from(promise).await;
}

/// Resolves once `DOMContentLoaded` has fired (immediately if it already has).
pub async fn dom_ready(document: &web::Document) {
    if document.ready_state() != "loading" {
        return;
    }
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = document.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        );
    });
    _ = JsFuture::from(promise).await;
}
