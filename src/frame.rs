use crate::scene::DomScene;
use parallax_core::{render_frame, LoopToken, ScrollController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scroller: Rc<RefCell<ScrollController>>,
    pub scene: Rc<RefCell<DomScene>>,
    pub frames: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut scroller = self.scroller.borrow_mut();
        let mut scene = self.scene.borrow_mut();
        render_frame(&mut scroller, &mut *scene);
        self.frames += 1;
    }
}

/// Drive `frame_ctx` from `requestAnimationFrame` until the returned token is cancelled.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopToken {
    let token = LoopToken::new();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    let token_tick = token.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if token_tick.is_cancelled() {
            log::info!(
                "[frame] loop stopped after {} frames",
                frame_ctx_tick.borrow().frames
            );
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
    token
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
