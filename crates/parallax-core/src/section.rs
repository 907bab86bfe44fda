//! Section model: what kind of panel each strip entry is and where it sits.

/// Which visual-effect rule applies to a section.
///
/// A page marks sections with CSS classes; [`SectionKind::from_class_list`]
/// resolves them to exactly one kind. When several marker classes are present
/// the first match in declaration order below wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    White,
    Final,
    Text,
    ImageBackground,
    Plain,
}

impl SectionKind {
    pub fn from_class_list(classes: &str) -> Self {
        let has = |name: &str| classes.split_whitespace().any(|c| c == name);
        if has("hero-section") {
            SectionKind::Hero
        } else if has("white-section") {
            SectionKind::White
        } else if has("final-section") {
            SectionKind::Final
        } else if has("text-section") {
            SectionKind::Text
        } else if has("image-bg-section") || has("new-bg-section") {
            SectionKind::ImageBackground
        } else {
            SectionKind::Plain
        }
    }

    /// Sections whose headings and paragraphs drift and fade.
    #[inline]
    pub fn has_text_parallax(self) -> bool {
        !matches!(self, SectionKind::Hero | SectionKind::White | SectionKind::Final)
    }
}

/// Optional media elements found inside a section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionMedia {
    pub hero_image: bool,
    pub background_image: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub width: f64,
    pub media: SectionMedia,
    /// Number of `h1, h2, h3, p` elements, in document order.
    pub text_count: usize,
}

impl Section {
    pub fn new(kind: SectionKind, width: f64) -> Self {
        Self {
            kind,
            width: sanitize_width(width),
            media: SectionMedia::default(),
            text_count: 0,
        }
    }

    pub fn with_media(mut self, media: SectionMedia) -> Self {
        self.media = media;
        self
    }

    pub fn with_text_count(mut self, text_count: usize) -> Self {
        self.text_count = text_count;
        self
    }
}

/// Horizontal extent of a section in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionRect {
    pub left: f64,
    pub width: f64,
}

impl SectionRect {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Rects of `sections` laid end to end, with the strip shifted left by `offset`.
///
/// This ignores each section's own parallax transform; the browser measures
/// real bounding boxes instead.
pub fn layout_rects(sections: &[Section], offset: f64) -> Vec<SectionRect> {
    let mut left = -offset;
    sections
        .iter()
        .map(|s| {
            let rect = SectionRect::new(left, s.width);
            left += s.width;
            rect
        })
        .collect()
}

/// Layout widths are never negative and never NaN.
#[inline]
pub fn sanitize_width(width: f64) -> f64 {
    if width.is_finite() && width > 0.0 {
        width
    } else {
        0.0
    }
}
