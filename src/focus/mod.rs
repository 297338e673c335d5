//! Object focus state machine
//!
//! At most one detected object is focused at a time. Focusing pauses the
//! detection pipeline (when configured), hides every other overlay and
//! broadcasts a snapshot of the object; unfocusing undoes all of that.
//! Taps, cancel gestures and the action menu's close button all go through
//! [`FocusStateMachine::focus`] and [`FocusStateMachine::unfocus`].
//!
//! Overlay slots are recycled between frames, so the focused object is
//! remembered by slot and serial. When a new frame replaces it,
//! [`FocusStateMachine::refresh`] releases the focus.

use crate::core::{DetectedObjectData, ListenerId, Observers};
use crate::detection::DetectionControl;
use crate::overlay::{FocusCandidate, OverlayId, OverlayRenderer, SelectionState};
use std::cell::RefCell;
use std::rc::Rc;

/// Broadcast on every focus change
#[derive(Debug, Clone, PartialEq)]
pub enum FocusEvent {
    Focused(DetectedObjectData),
    Unfocused,
}

/// Result of a focus/unfocus call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTransition {
    Focused,
    Unfocused,
    /// Invalid target; nothing changed
    Rejected,
    /// Already unfocused; nothing changed
    Unchanged,
}

struct FocusState {
    overlay: OverlayId,
    serial: u64,
    data: DetectedObjectData,
}

pub struct FocusStateMachine {
    focused: Option<FocusState>,
    renderer: Rc<RefCell<dyn OverlayRenderer>>,
    detection: Option<Rc<RefCell<dyn DetectionControl>>>,
    pause_detection_on_focus: bool,
    paused_for_focus: bool,
    observers: Observers<FocusEvent>,
}

impl FocusStateMachine {
    pub fn new(renderer: Rc<RefCell<dyn OverlayRenderer>>) -> Self {
        Self {
            focused: None,
            renderer,
            detection: None,
            pause_detection_on_focus: false,
            paused_for_focus: false,
            observers: Observers::new(),
        }
    }

    /// Pause `detection` while an object is focused
    pub fn with_detection(mut self, detection: Rc<RefCell<dyn DetectionControl>>, pause_on_focus: bool) -> Self {
        self.detection = Some(detection);
        self.pause_detection_on_focus = pause_on_focus;
        self
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&FocusEvent) + 'static,
    {
        self.observers.add(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.observers.remove(id)
    }

    pub fn focused(&self) -> Option<&DetectedObjectData> {
        self.focused.as_ref().map(|f| &f.data)
    }

    pub fn focused_overlay(&self) -> Option<OverlayId> {
        self.focused.as_ref().map(|f| f.overlay)
    }

    pub fn has_focus(&self) -> bool {
        self.focused.is_some()
    }

    /// Tap on an overlay. Unknown or hidden ids are rejected.
    pub fn handle_tap(&mut self, overlay: OverlayId) -> FocusTransition {
        self.refresh();
        let candidate = self.renderer.borrow().candidate(overlay);
        self.focus(candidate)
    }

    /// Unfocus if the focused overlay was cleared or its slot redrawn with
    /// another object. Call after every frame that may have touched the board.
    pub fn refresh(&mut self) -> FocusTransition {
        match &self.focused {
            Some(state) if !self.is_live(state) => {
                log::info!("[FocusStateMachine] {} left the screen", state.data.category);
                self.release(false)
            }
            _ => FocusTransition::Unchanged,
        }
    }

    fn is_live(&self, state: &FocusState) -> bool {
        self.renderer.borrow().serial(state.overlay) == Some(state.serial)
    }

    /// Focus `candidate`; focusing the already focused object unfocuses it
    pub fn focus(&mut self, candidate: Option<FocusCandidate>) -> FocusTransition {
        let Some(candidate) = candidate else {
            log::warn!("[FocusStateMachine] Attempted to focus null object");
            return FocusTransition::Rejected;
        };

        self.refresh();

        if let Some(current) = &self.focused {
            if current.overlay == candidate.overlay && current.serial == candidate.serial {
                return self.unfocus();
            }
        }

        if let Some(previous) = self.focused.take() {
            self.renderer
                .borrow_mut()
                .set_selection_state(previous.overlay, SelectionState::Normal);
        }

        let metadata = candidate.metadata;
        let data = DetectedObjectData {
            category: metadata.category,
            translation: metadata.translation,
            confidence: metadata.confidence,
            screen_position: metadata.screen_position,
            detection_time: chrono::Local::now(),
        };

        {
            let mut renderer = self.renderer.borrow_mut();
            renderer.set_selection_state(candidate.overlay, SelectionState::Focused);
            renderer.set_text(candidate.overlay, &focus_display_text(&data));
            renderer.hide_all_except(candidate.overlay);
        }

        if self.pause_detection_on_focus {
            if let Some(detection) = &self.detection {
                let mut detection = detection.borrow_mut();
                if !detection.is_paused() {
                    detection.pause_only();
                    self.paused_for_focus = true;
                }
            }
        }

        log::info!("[FocusStateMachine] Focused on: {} ({})", data.category, data.translation);

        self.focused = Some(FocusState {
            overlay: candidate.overlay,
            serial: candidate.serial,
            data: data.clone(),
        });
        self.observers.notify(&FocusEvent::Focused(data));
        FocusTransition::Focused
    }

    /// Clear the focus and resume detection if focusing paused it
    pub fn unfocus(&mut self) -> FocusTransition {
        let live = self.focused.as_ref().is_some_and(|state| self.is_live(state));
        self.release(live)
    }

    /// Leave the focused state. A recycled slot belongs to another object
    /// and keeps its selection state.
    fn release(&mut self, reset_overlay: bool) -> FocusTransition {
        let Some(previous) = self.focused.take() else {
            return FocusTransition::Unchanged;
        };

        if reset_overlay {
            self.renderer
                .borrow_mut()
                .set_selection_state(previous.overlay, SelectionState::Normal);
        }

        if self.paused_for_focus {
            self.paused_for_focus = false;
            if let Some(detection) = &self.detection {
                detection.borrow_mut().enable();
            }
        }

        log::info!("[FocusStateMachine] Unfocused {}", previous.data.category);
        self.observers.notify(&FocusEvent::Unfocused);
        FocusTransition::Unfocused
    }
}

/// Overlay text while focused: `"{category}: {confidence}"` plus the translation line
pub fn focus_display_text(data: &DetectedObjectData) -> String {
    let mut text = format!("{}: {:.2}", data.category, data.confidence);
    if !data.translation.is_empty() {
        text.push('\n');
        text.push_str(&data.translation);
    }
    text
}
