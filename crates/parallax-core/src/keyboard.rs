//! Keyboard section navigation.
//!
//! The cursor keeps its own index and does not follow drag or wheel
//! scrolling, so after a drag the next key press continues from wherever the
//! keyboard last left off.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Previous,
    First,
    Last,
}

#[inline]
pub fn nav_key_for(key: &str) -> Option<NavKey> {
    match key {
        "ArrowRight" | " " => Some(NavKey::Next),
        "ArrowLeft" => Some(NavKey::Previous),
        "Home" => Some(NavKey::First),
        "End" => Some(NavKey::Last),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionCursor {
    index: usize,
    count: usize,
}

impl SectionCursor {
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move the cursor and return the section to navigate to, or `None` when
    /// the key does not move it (already at an end, or no sections).
    pub fn apply(&mut self, key: NavKey) -> Option<usize> {
        let next = match key {
            NavKey::Next if self.index + 1 < self.count => self.index + 1,
            NavKey::Previous if self.index > 0 => self.index - 1,
            NavKey::First => 0,
            NavKey::Last if self.count > 0 => self.count - 1,
            _ => return None,
        };
        self.index = next;
        Some(next)
    }
}
