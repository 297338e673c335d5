//! Detection overlays
//!
//! Headless stand-in for the rendering layer: keeps a pool of rectangles with
//! their text, colour, detection metadata and selection state. Slots freed by
//! `clear_all` are recycled in index order, so an id alone does not identify
//! an object across frames; every draw also gets a fresh serial.

use crate::core::{Color, ScreenPosition, ScreenRect};
use std::collections::VecDeque;

/// Slot index of an overlay in the pool
pub type OverlayId = usize;

/// Visual selection state of an overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Normal,
    Focused,
    /// Word is in the saved vocabulary
    Saved,
}

/// Detection metadata attached to a rendered overlay
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayMetadata {
    pub category: String,
    pub translation: String,
    pub confidence: f32,
    pub screen_position: ScreenPosition,
}

/// What the focus state machine needs to know about a tapped overlay
#[derive(Debug, Clone, PartialEq)]
pub struct FocusCandidate {
    pub overlay: OverlayId,
    pub serial: u64,
    pub metadata: OverlayMetadata,
}

/// One rectangle on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub id: OverlayId,
    /// Unique per draw, never reused by a recycled slot
    pub serial: u64,
    pub rect: ScreenRect,
    pub color: Color,
    pub primary_text: String,
    pub secondary_text: Option<String>,
    pub metadata: OverlayMetadata,
    pub state: SelectionState,
    pub visible: bool,
    active: bool,
}

impl Overlay {
    /// Text as displayed: primary line plus translation line when present
    pub fn display_text(&self) -> String {
        match self.secondary_text.as_deref() {
            Some(secondary) if !secondary.is_empty() => format!("{}\n{}", self.primary_text, secondary),
            _ => self.primary_text.clone(),
        }
    }
}

/// Rendering collaborator used by detection and focus handling
pub trait OverlayRenderer {
    /// Draw a rectangle and attach the detection metadata to it
    fn render_overlay(
        &mut self,
        rect: ScreenRect,
        color: Color,
        primary_text: &str,
        secondary_text: Option<&str>,
        metadata: OverlayMetadata,
    ) -> OverlayId;

    /// Hide every visible overlay except `id`
    fn hide_all_except(&mut self, id: OverlayId);

    /// Remove all overlays
    fn clear_all(&mut self);

    fn set_selection_state(&mut self, id: OverlayId, state: SelectionState);

    /// Replace the primary text, dropping the secondary line
    fn set_text(&mut self, id: OverlayId, text: &str);

    /// Fill in a translation that arrived after the overlay was drawn
    fn set_translation(&mut self, id: OverlayId, translation: &str);

    /// Metadata for a live, visible overlay. `None` for unknown, cleared or
    /// hidden ids.
    fn candidate(&self, id: OverlayId) -> Option<FocusCandidate>;

    /// Serial of the live overlay in slot `id`, hidden or not
    fn serial(&self, id: OverlayId) -> Option<u64>;
}

/// In-memory overlay pool
#[derive(Debug, Default)]
pub struct OverlayBoard {
    slots: Vec<Overlay>,
    free: VecDeque<OverlayId>,
    next_serial: u64,
}

impl OverlayBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live overlays in slot order
    pub fn active(&self) -> impl Iterator<Item = &Overlay> {
        self.slots.iter().filter(|o| o.active)
    }

    /// Live overlays currently shown
    pub fn visible(&self) -> impl Iterator<Item = &Overlay> {
        self.active().filter(|o| o.visible)
    }

    pub fn get(&self, id: OverlayId) -> Option<&Overlay> {
        self.slots.get(id).filter(|o| o.active)
    }

    /// Total pooled slots, live or free
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn get_mut(&mut self, id: OverlayId) -> Option<&mut Overlay> {
        self.slots.get_mut(id).filter(|o| o.active)
    }
}

impl OverlayRenderer for OverlayBoard {
    fn render_overlay(
        &mut self,
        rect: ScreenRect,
        color: Color,
        primary_text: &str,
        secondary_text: Option<&str>,
        metadata: OverlayMetadata,
    ) -> OverlayId {
        self.next_serial += 1;
        let overlay = Overlay {
            id: 0,
            serial: self.next_serial,
            rect,
            color,
            primary_text: primary_text.to_string(),
            secondary_text: secondary_text.map(str::to_string),
            metadata,
            state: SelectionState::Normal,
            visible: true,
            active: true,
        };

        let id = match self.free.pop_front() {
            Some(id) => id,
            None => {
                self.slots.push(overlay.clone());
                self.slots.len() - 1
            }
        };

        self.slots[id] = Overlay { id, ..overlay };
        log::debug!("[OverlayBoard] Rendered #{}: {}", id, self.slots[id].display_text().replace('\n', " / "));
        id
    }

    fn hide_all_except(&mut self, id: OverlayId) {
        for overlay in self.slots.iter_mut().filter(|o| o.active) {
            overlay.visible = overlay.id == id;
        }
    }

    fn clear_all(&mut self) {
        for overlay in self.slots.iter_mut() {
            overlay.active = false;
            overlay.visible = false;
            overlay.state = SelectionState::Normal;
        }
        self.free = (0..self.slots.len()).collect();
    }

    fn set_selection_state(&mut self, id: OverlayId, state: SelectionState) {
        if let Some(overlay) = self.get_mut(id) {
            overlay.state = state;
        }
    }

    fn set_text(&mut self, id: OverlayId, text: &str) {
        if let Some(overlay) = self.get_mut(id) {
            overlay.primary_text = text.to_string();
            overlay.secondary_text = None;
        }
    }

    fn set_translation(&mut self, id: OverlayId, translation: &str) {
        if let Some(overlay) = self.get_mut(id) {
            overlay.secondary_text = Some(translation.to_string());
            overlay.metadata.translation = translation.to_string();
        }
    }

    fn candidate(&self, id: OverlayId) -> Option<FocusCandidate> {
        self.get(id).filter(|o| o.visible).map(|o| FocusCandidate {
            overlay: o.id,
            serial: o.serial,
            metadata: o.metadata.clone(),
        })
    }

    fn serial(&self, id: OverlayId) -> Option<u64> {
        self.get(id).map(|o| o.serial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(category: &str) -> OverlayMetadata {
        OverlayMetadata {
            category: category.to_string(),
            translation: String::new(),
            confidence: 0.9,
            screen_position: ScreenPosition::new(10.0, 20.0),
        }
    }

    fn draw(board: &mut OverlayBoard, category: &str) -> OverlayId {
        board.render_overlay(
            ScreenRect::new(10.0, 20.0, 100.0, 50.0),
            Color::rgb(1.0, 1.0, 1.0),
            &format!("{}: 0.90", category),
            Some("Sedia"),
            metadata(category),
        )
    }

    #[test]
    fn test_slots_are_recycled_in_order() {
        let mut board = OverlayBoard::new();
        assert_eq!(draw(&mut board, "chair"), 0);
        assert_eq!(draw(&mut board, "table"), 1);

        board.clear_all();
        assert_eq!(board.active().count(), 0);
        assert!(board.candidate(0).is_none());

        assert_eq!(draw(&mut board, "cup"), 0);
        assert_eq!(board.capacity(), 2);
        assert_eq!(board.get(0).unwrap().metadata.category, "cup");
    }

    #[test]
    fn test_recycled_slot_gets_new_serial() {
        let mut board = OverlayBoard::new();
        let id = draw(&mut board, "cat");
        let first = board.serial(id).unwrap();

        board.clear_all();
        assert_eq!(board.serial(id), None);

        assert_eq!(draw(&mut board, "chair"), id);
        let second = board.serial(id).unwrap();
        assert_ne!(first, second);
        assert_eq!(board.candidate(id).unwrap().serial, second);
    }

    #[test]
    fn test_hide_all_except() {
        let mut board = OverlayBoard::new();
        let a = draw(&mut board, "chair");
        let b = draw(&mut board, "table");

        board.hide_all_except(b);
        let visible: Vec<OverlayId> = board.visible().map(|o| o.id).collect();
        assert_eq!(visible, vec![b]);
        assert!(!board.get(a).unwrap().visible);

        // Hidden overlays cannot be tapped but are still live
        assert!(board.candidate(a).is_none());
        assert!(board.serial(a).is_some());
        assert!(board.candidate(b).is_some());
    }

    #[test]
    fn test_display_text_and_late_translation() {
        let mut board = OverlayBoard::new();
        let id = board.render_overlay(
            ScreenRect::default(),
            Color::rgb(0.0, 1.0, 0.0),
            "cat: 0.80",
            None,
            metadata("cat"),
        );
        assert_eq!(board.get(id).unwrap().display_text(), "cat: 0.80");

        board.set_translation(id, "Gatto");
        assert_eq!(board.get(id).unwrap().display_text(), "cat: 0.80\nGatto");
        assert_eq!(board.candidate(id).unwrap().metadata.translation, "Gatto");
    }
}
