//! The per-frame pass and its start/stop lifecycle.
//!
//! [`render_frame`] is the body of one animation frame. It is written against
//! the [`Scene`] trait so the browser can drive it from `requestAnimationFrame`
//! while tests drive it for a fixed number of frames with [`run_frames`].

use crate::effects::{is_in_view, section_effect, SectionEffect};
use crate::scroll::{ScrollController, Transition};
use crate::section::SectionRect;
use std::cell::Cell;
use std::rc::Rc;

/// Mutable view of whatever displays the strip.
pub trait Scene {
    fn set_transition(&mut self, transition: Transition);
    fn set_dragging(&mut self, dragging: bool);
    /// Shift the content strip left by `offset` pixels.
    fn translate_strip(&mut self, offset: f64);
    /// Current on-screen rect of every section, in strip order.
    fn section_rects(&self) -> Vec<SectionRect>;
    fn apply_effect(&mut self, index: usize, effect: &SectionEffect);
    fn set_in_view(&mut self, index: usize, in_view: bool);
}

/// Run one frame: pending styling, ease, translate, effects, then visibility.
pub fn render_frame<S: Scene + ?Sized>(ctrl: &mut ScrollController, scene: &mut S) {
    if let Some(transition) = ctrl.take_transition() {
        scene.set_transition(transition);
    }
    scene.set_dragging(ctrl.is_dragging());

    let offset = ctrl.step();
    scene.translate_strip(offset);
    apply_effects(ctrl, scene);
    update_visibility(ctrl, scene);
}

pub fn apply_effects<S: Scene + ?Sized>(ctrl: &ScrollController, scene: &mut S) {
    let viewport_width = ctrl.viewport_width();
    let rects = scene.section_rects();
    for (i, (section, rect)) in ctrl.sections().iter().zip(&rects).enumerate() {
        let effect = section_effect(section, rect, viewport_width);
        scene.apply_effect(i, &effect);
    }
}

pub fn update_visibility<S: Scene + ?Sized>(ctrl: &ScrollController, scene: &mut S) {
    let viewport_width = ctrl.viewport_width();
    let rects = scene.section_rects();
    for (i, rect) in rects.iter().enumerate() {
        scene.set_in_view(i, is_in_view(rect, viewport_width));
    }
}

/// Cancellation handle for the animation loop. Clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct LoopToken(Rc<Cell<bool>>);

impl LoopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        if !self.0.replace(true) {
            log::debug!("[loop] cancelled");
        }
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Run up to `max_frames` frames, checking `token` before each one.
/// Returns how many frames ran.
pub fn run_frames<S: Scene + ?Sized>(
    ctrl: &mut ScrollController,
    scene: &mut S,
    token: &LoopToken,
    max_frames: usize,
) -> usize {
    let mut frames = 0;
    while frames < max_frames && !token.is_cancelled() {
        render_frame(ctrl, scene);
        frames += 1;
    }
    frames
}
