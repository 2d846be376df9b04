//! User palette: an ordered list of colors with one selected entry

use crate::skin::Rgb;

/// Ordered user colors plus the active slot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
    /// Active slot, `None` only while the palette is empty
    selected: Option<usize>,
}

impl Palette {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Palette pre-filled with colors; the first one is selected
    pub fn with_colors(colors: Vec<Rgb>) -> Self {
        let selected = if colors.is_empty() { None } else { Some(0) };
        Self { colors, selected }
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_color(&self) -> Option<Rgb> {
        self.selected.and_then(|i| self.colors.get(i).copied())
    }

    /// Append a color. The first color added becomes the selection
    pub fn add(&mut self, color: Rgb) -> usize {
        self.colors.push(color);
        if self.selected.is_none() {
            self.selected = Some(0);
        }
        self.colors.len() - 1
    }

    /// Remove an entry, keeping the selection on a sensible neighbour:
    /// - removed before the selection: selection moves down with its color
    /// - removed the selection itself: the previous entry is selected, index 0 stays 0
    pub fn remove(&mut self, index: usize) -> Option<Rgb> {
        if index >= self.colors.len() {
            return None;
        }
        let removed = self.colors.remove(index);

        self.selected = match self.selected {
            _ if self.colors.is_empty() => None,
            Some(sel) if index < sel => Some(sel - 1),
            Some(sel) if index == sel && sel != 0 => Some(sel - 1),
            other => other,
        };
        Some(removed)
    }

    /// Select an entry; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.colors.len() {
            self.selected = Some(index);
        }
    }

    /// Move the selection by `steps`, wrapping around both ends
    pub fn cycle(&mut self, steps: i32) {
        let Some(sel) = self.selected else {
            return;
        };
        let len = self.colors.len() as i32;
        self.selected = Some((sel as i32 + steps).rem_euclid(len) as usize);
    }

    /// Overwrite the selected color (color picker and sliders)
    pub fn set_selected_color(&mut self, color: Rgb) -> bool {
        match self.selected.and_then(|i| self.colors.get_mut(i)) {
            Some(slot) => {
                *slot = color;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(n: u8) -> Palette {
        Palette::with_colors((0..n).map(|i| Rgb::new(i, i, i)).collect())
    }

    #[test]
    fn test_first_add_selects() {
        let mut p = Palette::new();
        assert_eq!(p.selected(), None);
        assert_eq!(p.selected_color(), None);
        p.add(Rgb::WHITE);
        p.add(Rgb::BLACK);
        assert_eq!(p.selected(), Some(0));
        assert_eq!(p.selected_color(), Some(Rgb::WHITE));
    }

    #[test]
    fn test_remove_first_while_selected_keeps_zero() {
        let mut p = palette(3);
        p.remove(0);
        assert_eq!(p.selected(), Some(0));
        assert_eq!(p.selected_color(), Some(Rgb::new(1, 1, 1)));
    }

    #[test]
    fn test_remove_selected_last_decrements() {
        let mut p = palette(3);
        p.select(2);
        p.remove(2);
        assert_eq!(p.selected(), Some(1));
    }

    #[test]
    fn test_remove_before_selection_follows_color() {
        let mut p = palette(4);
        p.select(2);
        p.remove(0);
        assert_eq!(p.selected(), Some(1));
        assert_eq!(p.selected_color(), Some(Rgb::new(2, 2, 2)));
    }

    #[test]
    fn test_remove_after_selection_keeps_index() {
        let mut p = palette(4);
        p.select(1);
        p.remove(3);
        assert_eq!(p.selected(), Some(1));
    }

    #[test]
    fn test_remove_last_entry_clears_selection() {
        let mut p = palette(1);
        assert_eq!(p.remove(0), Some(Rgb::BLACK));
        assert_eq!(p.selected(), None);
        assert!(p.is_empty());
        assert_eq!(p.remove(0), None);
    }

    #[test]
    fn test_cycle_wraps() {
        let mut p = palette(3);
        p.cycle(-1);
        assert_eq!(p.selected(), Some(2));
        p.cycle(1);
        assert_eq!(p.selected(), Some(0));
        p.cycle(4);
        assert_eq!(p.selected(), Some(1));

        let mut empty = Palette::new();
        empty.cycle(1);
        assert_eq!(empty.selected(), None);
    }

    #[test]
    fn test_set_selected_color() {
        let mut p = palette(2);
        p.select(1);
        assert!(p.set_selected_color(Rgb::new(9, 8, 7)));
        assert_eq!(p.colors()[1], Rgb::new(9, 8, 7));
        assert!(!Palette::new().set_selected_color(Rgb::WHITE));
    }
}
