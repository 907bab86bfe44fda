//! Scroll controller: owns the eased/target offsets and turns pointer, touch,
//! wheel and resize input into target updates.
//!
//! Handlers only touch plain numeric state. Styling changes they imply (the
//! wrapper transition, the `dragging` marker) are recorded here and applied
//! by the frame pass in [`crate::frame`].

use crate::config::ScrollConfig;
use crate::section::{sanitize_width, Section};

/// Wrapper transition requested by the last input that changed the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// No CSS easing; per-frame interpolation only. Used while dragging.
    Direct,
    /// After a drag is released.
    Release,
    Wheel,
    /// Programmatic navigation via [`ScrollController::scroll_to_section`].
    Section,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct ScrollState {
    current: f64,
    target: f64,
    max_scroll: f64,
}

/// Lives only while a pointer or finger is down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub start_x: f64,
    pub start_offset: f64,
    pub last_x: f64,
    pub last_ms: f64,
    /// px per ms, positive when the pointer moves right.
    pub velocity: f64,
}

/// Section index from a script-supplied number. Fractions, negatives,
/// non-finite values and anything past `usize` are rejected.
pub fn section_index(value: f64) -> Option<usize> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value >= usize::MAX as f64 {
        return None;
    }
    Some(value as usize)
}

pub struct ScrollController {
    config: ScrollConfig,
    sections: Vec<Section>,
    viewport_width: f64,
    state: ScrollState,
    drag: Option<DragSession>,
    // velocity survives the session so drag_end can read it after teardown
    last_velocity: f64,
    pending_transition: Option<Transition>,
}

impl ScrollController {
    pub fn new(sections: Vec<Section>, viewport_width: f64, config: ScrollConfig) -> Self {
        let mut ctrl = Self {
            config,
            sections,
            viewport_width: sanitize_width(viewport_width),
            state: ScrollState::default(),
            drag: None,
            last_velocity: 0.0,
            pending_transition: None,
        };
        ctrl.state.max_scroll = ctrl.compute_max_scroll();
        ctrl
    }

    #[inline]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[inline]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    #[inline]
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    #[inline]
    pub fn current_offset(&self) -> f64 {
        self.state.current
    }

    #[inline]
    pub fn target_offset(&self) -> f64 {
        self.state.target
    }

    #[inline]
    pub fn max_scroll(&self) -> f64 {
        self.state.max_scroll
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    #[inline]
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Latest velocity estimate in px/ms (kept after release).
    #[inline]
    pub fn velocity(&self) -> f64 {
        self.drag.map(|d| d.velocity).unwrap_or(self.last_velocity)
    }

    /// Transition requested since the last call, if any.
    pub fn take_transition(&mut self) -> Option<Transition> {
        self.pending_transition.take()
    }

    /// Absolute offset of section `index`: the summed widths of all sections before it.
    pub fn section_offset(&self, index: usize) -> Option<f64> {
        if index >= self.sections.len() {
            return None;
        }
        Some(self.sections[..index].iter().map(|s| s.width).sum())
    }

    pub fn total_width(&self) -> f64 {
        self.sections.iter().map(|s| s.width).sum()
    }

    // ---------------- Input ----------------

    pub fn drag_start(&mut self, x: f64, now_ms: f64) {
        self.drag = Some(DragSession {
            start_x: x,
            start_offset: self.state.target,
            last_x: x,
            last_ms: now_ms,
            velocity: 0.0,
        });
        self.last_velocity = 0.0;
        self.pending_transition = Some(Transition::Direct);
        log::debug!("[drag] begin x={x:.1} offset={:.1}", self.state.target);
    }

    pub fn drag_move(&mut self, x: f64, now_ms: f64) {
        let Some(mut drag) = self.drag else {
            return;
        };
        let candidate = drag.start_offset - (x - drag.start_x);

        let elapsed = now_ms - drag.last_ms;
        if elapsed > 0.0 {
            drag.velocity = (x - drag.last_x) / elapsed;
        }
        drag.last_x = x;
        drag.last_ms = now_ms;
        self.drag = Some(drag);

        self.state.target = self.clamp_target(candidate);
    }

    pub fn drag_end(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        self.last_velocity = drag.velocity;
        self.pending_transition = Some(Transition::Release);

        let momentum = drag.velocity * self.config.momentum_scale;
        self.state.target = self.clamp_target(self.state.target + momentum);
        log::debug!(
            "[drag] end velocity={:.3} target={:.1}",
            drag.velocity,
            self.state.target
        );
    }

    /// Vertical delta is used when non-zero, otherwise the horizontal one.
    pub fn wheel(&mut self, delta_x: f64, delta_y: f64) {
        let delta = if delta_y != 0.0 { delta_y } else { delta_x };
        self.state.target =
            self.clamp_target(self.state.target + delta * self.config.wheel_multiplier);
        self.pending_transition = Some(Transition::Wheel);
    }

    /// Re-measure after a viewport change. `current` is left alone so the
    /// frame pass eases into the new range.
    pub fn resize<I>(&mut self, viewport_width: f64, widths: I)
    where
        I: IntoIterator<Item = f64>,
    {
        for (section, width) in self.sections.iter_mut().zip(widths) {
            section.width = sanitize_width(width);
        }
        self.viewport_width = sanitize_width(viewport_width);
        self.state.max_scroll = self.compute_max_scroll();
        self.state.target = self.clamp_target(self.state.target);
        log::debug!(
            "[resize] viewport={:.0} max_scroll={:.1}",
            self.viewport_width,
            self.state.max_scroll
        );
    }

    /// Out-of-range indices are ignored.
    pub fn scroll_to_section(&mut self, index: usize) {
        let Some(offset) = self.section_offset(index) else {
            return;
        };
        self.state.target = self.clamp_target(offset);
        self.pending_transition = Some(Transition::Section);
        log::debug!("[nav] section {index} -> {:.1}", self.state.target);
    }

    // ---------------- Animation ----------------

    /// One easing step toward the target; returns the new current offset.
    pub fn step(&mut self) -> f64 {
        self.state.current += (self.state.target - self.state.current) * self.config.easing;
        self.state.current
    }

    fn compute_max_scroll(&self) -> f64 {
        (self.total_width() - self.viewport_width).max(0.0)
    }

    /// NaN keeps the current target; infinities land on the range ends.
    fn clamp_target(&self, candidate: f64) -> f64 {
        if candidate.is_nan() {
            return self.state.target;
        }
        candidate.clamp(0.0, self.state.max_scroll)
    }
}
