use crate::constants::{transition_css, DRAGGING_CLASS, IN_VIEW_CLASS};
use crate::dom::{self, SectionNodes};
use parallax_core::{Scene, SectionEffect, SectionRect, TextEffect, Transform, Transition};
use web_sys as web;

/// The live page as seen by the frame pass.
pub struct DomScene {
    pub body: Option<web::HtmlElement>,
    pub wrapper: web::HtmlElement,
    pub sections: Vec<SectionNodes>,
    dragging: bool,
}

impl DomScene {
    pub fn new(
        body: Option<web::HtmlElement>,
        wrapper: web::HtmlElement,
        sections: Vec<SectionNodes>,
    ) -> Self {
        Self {
            body,
            wrapper,
            sections,
            dragging: false,
        }
    }

    pub fn widths(&self) -> Vec<f64> {
        self.sections.iter().map(SectionNodes::width).collect()
    }
}

impl Scene for DomScene {
    fn set_transition(&mut self, transition: Transition) {
        dom::set_style(&self.wrapper, "transition", transition_css(transition));
    }

    fn set_dragging(&mut self, dragging: bool) {
        if dragging == self.dragging {
            return;
        }
        self.dragging = dragging;
        if let Some(body) = &self.body {
            _ = body.class_list().toggle_with_force(DRAGGING_CLASS, dragging);
        }
    }

    fn translate_strip(&mut self, offset: f64) {
        dom::set_style(
            &self.wrapper,
            "transform",
            &Transform::TranslateX(-offset).to_string(),
        );
    }

    fn section_rects(&self) -> Vec<SectionRect> {
        self.sections
            .iter()
            .map(|s| {
                let r = s.root.get_bounding_client_rect();
                SectionRect::new(r.left(), r.width())
            })
            .collect()
    }

    fn apply_effect(&mut self, index: usize, effect: &SectionEffect) {
        let Some(nodes) = self.sections.get(index) else {
            return;
        };
        if let (Some(el), Some(t)) = (&nodes.hero_image, effect.hero_image) {
            dom::set_style(el, "transform", &t.to_string());
        }
        if let (Some(el), Some(t)) = (&nodes.background_image, effect.background_image) {
            dom::set_style(el, "transform", &t.to_string());
        }
        if let Some(t) = effect.section {
            dom::set_style(&nodes.root, "transform", &t.to_string());
        }
        if effect.clear_shadow {
            dom::set_style(&nodes.root, "box-shadow", "none");
        }
        match &effect.text {
            TextEffect::Untouched => {}
            TextEffect::Parallax(styles) => {
                for (el, style) in nodes.text.iter().zip(styles) {
                    dom::set_style(
                        el,
                        "transform",
                        &Transform::TranslateY(style.translate_y).to_string(),
                    );
                    dom::set_style(el, "opacity", &style.opacity.to_string());
                }
            }
            TextEffect::Reset => {
                for el in &nodes.reset_text {
                    dom::set_style(el, "transform", "none");
                    dom::clear_style(el, "opacity");
                }
            }
        }
    }

    fn set_in_view(&mut self, index: usize, in_view: bool) {
        if let Some(nodes) = self.sections.get(index) {
            _ = nodes
                .root
                .class_list()
                .toggle_with_force(IN_VIEW_CLASS, in_view);
        }
    }
}
