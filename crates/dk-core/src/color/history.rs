use std::collections::VecDeque;

use super::model::Rgb;

pub const COLOR_HISTORY_CAPACITY: usize = 12;

/// Recently selected colors, newest first, without repeats.
#[derive(Debug, Clone, Default)]
pub struct ColorHistory {
    colors: VecDeque<Rgb>,
}

impl ColorHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a selection. Returns `false` if the color was already present,
    /// in which case the order is left untouched.
    pub fn select(&mut self, color: Rgb) -> bool {
        if self.colors.contains(&color) {
            return false;
        }
        self.colors.push_front(color);
        self.colors.truncate(COLOR_HISTORY_CAPACITY);
        true
    }

    pub fn clear(&mut self) {
        self.colors.clear();
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rgb> {
        self.colors.iter()
    }
}
