// Page hooks and CSS values used by the web front-end.
// Kept free of `web_sys` so host-side tests can `include!` this file.
use parallax_core::Transition;

// Elements
pub const CONTAINER_ID: &str = "scrollContainer";
pub const WRAPPER_ID: &str = "contentWrapper";
pub const SECTION_SELECTOR: &str = ".section";
pub const HERO_IMAGE_SELECTOR: &str = ".hero-image";
pub const BG_IMAGE_SELECTOR: &str = ".image-bg img, .new-bg img";
pub const TEXT_SELECTOR: &str = "h1, h2, h3, p";
pub const RESET_TEXT_SELECTOR: &str = "h1, h2, h3, h4, p"; // reset reaches h4 too

// State classes
pub const IN_VIEW_CLASS: &str = "in-view";
pub const DRAGGING_CLASS: &str = "dragging";

// Config attributes on the container: data-ease, data-momentum, data-wheel
pub const CONFIG_ATTR_PREFIX: &str = "data-";

pub const INTENSITY_PROPERTY: &str = "--parallax-intensity";

// Delay between the load-in stagger starting and the scroller taking over
pub const INIT_DELAY_MS: i32 = 500;

#[inline]
pub fn transition_css(transition: Transition) -> &'static str {
    match transition {
        Transition::Direct => "none",
        Transition::Release => "transform 0.8s cubic-bezier(0.25, 0.46, 0.45, 0.94)",
        Transition::Wheel => "transform 0.3s ease-out",
        Transition::Section => "transform 1s cubic-bezier(0.25, 0.46, 0.45, 0.94)",
    }
}
