//! Per-section visual effects derived from distance to the viewport centre.

use crate::constants::*;
use crate::section::{Section, SectionKind, SectionRect};
use std::fmt;

/// A CSS transform value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    /// `none`
    Identity,
    TranslateX(f64),
    TranslateXScale { x: f64, scale: f64 },
    TranslateY(f64),
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Identity => f.write_str("none"),
            Transform::TranslateX(x) => write!(f, "translateX({x}px)"),
            Transform::TranslateXScale { x, scale } => {
                write!(f, "translateX({x}px) scale({scale})")
            }
            Transform::TranslateY(y) => write!(f, "translateY({y}px)"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub translate_y: f64,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TextEffect {
    /// Leave headings and paragraphs as they are.
    Untouched,
    /// One entry per `h1, h2, h3, p` element, in document order.
    Parallax(Vec<TextStyle>),
    /// Clear transform and opacity on `h1, h2, h3, h4, p`.
    Reset,
}

/// Everything the frame pass writes to one section. `None` fields are left untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionEffect {
    pub hero_image: Option<Transform>,
    pub background_image: Option<Transform>,
    pub section: Option<Transform>,
    pub clear_shadow: bool,
    pub text: TextEffect,
}

/// Signed distance of the section centre from the viewport centre, in viewport widths.
#[inline]
pub fn center_distance(rect: &SectionRect, viewport_width: f64) -> f64 {
    if viewport_width <= 0.0 {
        return 0.0;
    }
    (rect.center() - viewport_width / 2.0) / viewport_width
}

pub fn section_effect(section: &Section, rect: &SectionRect, viewport_width: f64) -> SectionEffect {
    let distance = center_distance(rect, viewport_width);
    let abs_distance = distance.abs();

    let hero_image = section.media.hero_image.then(|| Transform::TranslateXScale {
        x: distance * HERO_IMAGE_SHIFT,
        scale: 1.0 + abs_distance * HERO_IMAGE_SCALE,
    });
    let background_image = section
        .media
        .background_image
        .then(|| Transform::TranslateXScale {
            x: distance * BG_IMAGE_SHIFT,
            scale: 1.0 + abs_distance * BG_IMAGE_SCALE,
        });

    let (transform, clear_shadow) = match section.kind {
        SectionKind::Text | SectionKind::White | SectionKind::Final => (
            Some(Transform::TranslateXScale {
                x: distance * OVERLAY_SECTION_SHIFT,
                scale: 1.0 + abs_distance * OVERLAY_SECTION_SCALE,
            }),
            true,
        ),
        SectionKind::ImageBackground => {
            (Some(Transform::TranslateX(distance * IMAGE_SECTION_SHIFT)), true)
        }
        SectionKind::Hero => (Some(Transform::Identity), true),
        SectionKind::Plain => (None, false),
    };

    let text = match section.kind {
        SectionKind::White | SectionKind::Final => TextEffect::Reset,
        kind if kind.has_text_parallax() => {
            TextEffect::Parallax(text_styles(distance, section.text_count))
        }
        _ => TextEffect::Untouched,
    };

    SectionEffect {
        hero_image,
        background_image,
        section: transform,
        clear_shadow,
        text,
    }
}

fn text_styles(distance: f64, count: usize) -> Vec<TextStyle> {
    let opacity = (1.0 - distance.abs() * TEXT_FADE).max(TEXT_MIN_OPACITY);
    (0..count)
        .map(|i| TextStyle {
            translate_y: distance * (TEXT_SHIFT_BASE + i as f64 * TEXT_SHIFT_STEP),
            opacity,
        })
        .collect()
}

/// A section is in view when any part of it overlaps `[0, viewport_width)`.
#[inline]
pub fn is_in_view(rect: &SectionRect, viewport_width: f64) -> bool {
    rect.right() > 0.0 && rect.left < viewport_width
}
