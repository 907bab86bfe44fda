#![cfg(target_arch = "wasm32")]
use crate::constants::{CONTAINER_ID, INIT_DELAY_MS, INTENSITY_PROPERTY, WRAPPER_ID};
use crate::dom::SectionNodes;
use crate::scene::DomScene;
use instant::Instant;
use parallax_core::{parallax_intensity, LoopToken, ScrollController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod scene;
mod stagger;

thread_local! {
    static SCROLLER: RefCell<Option<Rc<RefCell<ScrollController>>>> = const { RefCell::new(None) };
    static LOOP: RefCell<Option<LoopToken>> = const { RefCell::new(None) };
}

/// Navigate to section `index`. Anything but a whole number in
/// `[0, sectionCount)` is ignored, as are calls made before the scroller has started.
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(index: f64) {
    let Some(index) = parallax_core::section_index(index) else {
        log::debug!("[nav] ignoring scrollToSection({index})");
        return;
    };
    SCROLLER.with(|s| {
        if let Some(scroller) = s.borrow().as_ref() {
            match scroller.try_borrow_mut() {
                Ok(mut ctrl) => ctrl.scroll_to_section(index),
                Err(_) => log::warn!("[nav] scroller busy, dropping scrollToSection({index})"),
            }
        }
    });
}

/// Stop the animation loop. The page keeps its last rendered state.
#[wasm_bindgen(js_name = stopAnimation)]
pub fn stop_animation() {
    LOOP.with(|l| {
        if let Some(token) = l.borrow().as_ref() {
            token.cancel();
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("parallax-web starting");

    spawn_local(async move {
        if let Err(e) = boot().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn boot() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    set_intensity_hint(&window, &document);
    dom::dom_ready(&document).await;

    stagger::run_load_in(&dom::document_sections(&document));
    dom::sleep_ms(INIT_DELAY_MS).await;

    init_scroller(&document)?;
    wire_unload(&window, &document);
    Ok(())
}

fn init_scroller(document: &web::Document) -> anyhow::Result<()> {
    let container = dom::html_element_by_id(document, CONTAINER_ID)?;
    let wrapper = dom::html_element_by_id(document, WRAPPER_ID)?;

    let nodes: Vec<SectionNodes> = dom::document_sections(document)
        .into_iter()
        .map(SectionNodes::scan)
        .collect();
    if nodes.is_empty() {
        log::warn!("[init] no sections found; strip will not scroll");
    }
    let sections = nodes.iter().map(SectionNodes::model).collect();
    let config = dom::scroll_config_from(container.as_ref());
    let scroller = Rc::new(RefCell::new(ScrollController::new(
        sections,
        dom::viewport_width(),
        config,
    )));
    {
        let s = scroller.borrow();
        log::info!(
            "[init] sections={} total_width={:.0} max_scroll={:.0}",
            s.section_count(),
            s.total_width(),
            s.max_scroll()
        );
    }

    let scene = Rc::new(RefCell::new(DomScene::new(
        document.body(),
        wrapper,
        nodes,
    )));
    parallax_core::update_visibility(&scroller.borrow(), &mut *scene.borrow_mut());

    events::wire_input_handlers(events::InputWiring {
        container,
        document: document.clone(),
        scroller: scroller.clone(),
        scene: scene.clone(),
        clock: Instant::now(),
    });
    events::wire_keyboard_navigation(document, scroller.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scroller: scroller.clone(),
        scene,
        frames: 0,
    }));
    let token = frame::start_loop(frame_ctx);

    SCROLLER.with(|s| *s.borrow_mut() = Some(scroller));
    LOOP.with(|l| *l.borrow_mut() = Some(token));
    Ok(())
}

fn set_intensity_hint(window: &web::Window, document: &web::Document) {
    let cores = window.navigator().hardware_concurrency() as u32;
    let intensity = parallax_intensity(cores);
    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        dom::set_style(&root, INTENSITY_PROPERTY, &intensity.to_string());
    }
    log::info!("[init] cores={} parallax intensity={}", cores, intensity);
}

fn wire_unload(window: &web::Window, document: &web::Document) {
    let body = document.body();
    dom::add_listener(window.as_ref(), "beforeunload", move |_ev| {
        if let Some(body) = &body {
            dom::set_style(body, "pointer-events", "none");
        }
    });
}
