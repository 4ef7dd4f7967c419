//! Box color assignment for the schema panel.

use std::collections::{HashMap, VecDeque};

/// Default box palette.
///
/// Kept at well over three entries; `ColorPicker::new` requires at least
/// three so the rotation in `color_for` terminates within one pass.
pub const PALETTE: &[&str] = &[
    "#e81123", "#ec008c", "#00188f", "#00bcf2", "#00b294", "#009e49", "#ff8c00", "#fff100",
    "#68217a",
];

/// Picks the colors of the boxes representing elements of the page.
///
/// Assignment is sticky per tag: the first box created for a tag fixes that
/// tag's color for the life of this picker. A tag seen for the first time
/// gets the front of a rotating queue, skipped forward past any color equal
/// to the parent box's color or to the previously assigned color, so
/// adjacent boxes never blur together.
///
/// The palette itself is immutable input; the queue and the tag map are
/// fresh per instance and never shared.
pub struct ColorPicker {
    queue: VecDeque<String>,
    assigned: HashMap<String, String>,
}

impl ColorPicker {
    /// Panics if the palette has fewer than three colors: with two exclusion
    /// values in play, anything shorter could rotate forever.
    pub fn new(palette: &[&str]) -> Self {
        assert!(palette.len() >= 3, "palette needs at least 3 colors");
        Self {
            queue: palette.iter().map(|c| (*c).to_string()).collect(),
            assigned: HashMap::new(),
        }
    }

    /// Color for `tag`, avoiding `parent_color` and `preceding_color` on
    /// first assignment. Always returns a color.
    pub fn color_for(&mut self, tag: &str, parent_color: &str, preceding_color: &str) -> String {
        if let Some(color) = self.assigned.get(tag) {
            return color.clone();
        }

        while self.queue[0] == parent_color || self.queue[0] == preceding_color {
            self.queue.rotate_left(1);
        }

        let color = self.queue[0].clone();
        self.assigned.insert(tag.to_string(), color.clone());
        color
    }
}
