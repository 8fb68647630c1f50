//! Vertical layout of the menu lists in viewport coordinates.
//!
//! Scenes hit-test pointer clicks against these rows and the renderer places
//! text on them, so both agree on where each item is.

/// A vertical list of evenly spaced rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListLayout {
    /// Viewport y of the title line.
    pub title_y: f64,
    /// Viewport y of the first row's center.
    pub top: f64,
    pub spacing: f64,
}

pub const MAIN_MENU: ListLayout = ListLayout {
    title_y: 50.0,
    top: 150.0,
    spacing: 30.0,
};

pub const UPGRADES_MENU: ListLayout = ListLayout {
    title_y: 40.0,
    top: 120.0,
    spacing: 40.0,
};

impl ListLayout {
    /// Viewport y of row `index`.
    pub fn row_y(&self, index: usize) -> f64 {
        self.top + index as f64 * self.spacing
    }

    /// Row whose band (half a spacing either side of its center) holds `y`.
    pub fn row_at(&self, y: f64, len: usize) -> Option<usize> {
        let offset = (y - self.top) / self.spacing + 0.5;
        if offset < 0.0 {
            return None;
        }
        let index = offset.floor() as usize;
        (index < len).then_some(index)
    }
}
