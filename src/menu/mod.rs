//! Action menu shown next to the focused object
//!
//! Offers pronunciation, example sentences and close. The menu only listens
//! to focus events; closing goes back through
//! [`FocusStateMachine::unfocus`].

use crate::core::{DetectedObjectData, ListenerId, MenuConfig, ScreenPosition};
use crate::focus::{FocusEvent, FocusStateMachine, FocusTransition};
use crate::i18n::{SentenceDatabase, SentenceExample};
use crate::tts::TtsManager;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// What the panel currently displays
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuView {
    pub visible: bool,
    pub title: String,
    pub info: String,
    pub position: ScreenPosition,
    pub current: Option<DetectedObjectData>,
}

pub struct ActionMenu {
    view: Rc<RefCell<MenuView>>,
    listener: ListenerId,
}

impl ActionMenu {
    /// Create the menu and subscribe it to `machine`
    pub fn attach(config: &MenuConfig, machine: &mut FocusStateMachine) -> Self {
        let view = Rc::new(RefCell::new(MenuView::default()));
        let config = config.clone();

        let sink = Rc::clone(&view);
        let listener = machine.subscribe(move |event| {
            let mut view = sink.borrow_mut();
            match event {
                FocusEvent::Focused(data) => {
                    view.title = menu_title(data);
                    view.info = format!("Confidence: {:.2}", data.confidence);
                    view.position = position_menu(data.screen_position, &config);
                    view.current = Some(data.clone());
                    view.visible = true;
                    log::debug!("[ActionMenu] Showing '{}' at ({}, {})", view.title, view.position.x, view.position.y);
                }
                FocusEvent::Unfocused => {
                    view.visible = false;
                    view.current = None;
                }
            }
        });

        Self { view, listener }
    }

    pub fn view(&self) -> Ref<'_, MenuView> {
        self.view.borrow()
    }

    pub fn is_visible(&self) -> bool {
        self.view.borrow().visible
    }

    /// Speak the focused object's translation. Returns false when there is
    /// nothing to pronounce or speech failed.
    pub fn play_pronunciation(&self, tts: &mut TtsManager) -> bool {
        let view = self.view.borrow();
        let Some(translation) = view
            .current
            .as_ref()
            .map(|c| c.translation.as_str())
            .filter(|t| !t.is_empty())
        else {
            log::warn!("[ActionMenu] No translation available for pronunciation");
            return false;
        };

        match tts.speak(translation) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[ActionMenu] Pronunciation failed: {}", e);
                false
            }
        }
    }

    /// Example sentences for the focused category
    pub fn show_examples<'a>(&self, sentences: &'a SentenceDatabase) -> &'a [SentenceExample] {
        match self.view.borrow().current.as_ref() {
            Some(current) => {
                let examples = sentences.examples(&current.category);
                if examples.is_empty() {
                    log::warn!("[ActionMenu] No examples found for '{}'", current.category);
                }
                examples
            }
            None => &[],
        }
    }

    pub fn close(&self, machine: &mut FocusStateMachine) -> FocusTransition {
        machine.unfocus()
    }

    /// Stop listening to `machine`
    pub fn detach(self, machine: &mut FocusStateMachine) {
        machine.unsubscribe(self.listener);
    }
}

/// `"{category} → {translation}"`, or the category alone
fn menu_title(data: &DetectedObjectData) -> String {
    if data.translation.is_empty() {
        data.category.clone()
    } else {
        format!("{} \u{2192} {}", data.category, data.translation)
    }
}

/// Offset from the object, kept fully inside the canvas
fn position_menu(anchor: ScreenPosition, config: &MenuConfig) -> ScreenPosition {
    let half_width = config.panel_width / 2.0;
    let half_height = config.panel_height / 2.0;

    ScreenPosition::new(
        clamp_axis(anchor.x + config.offset_x, half_width, config.canvas_width - half_width),
        clamp_axis(anchor.y + config.offset_y, half_height, config.canvas_height - half_height),
    )
}

fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    if min > max {
        // Panel larger than the canvas
        (min + max) / 2.0
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, ScreenRect, SpeechConfig};
    use crate::overlay::{OverlayBoard, OverlayId, OverlayMetadata, OverlayRenderer};
    use crate::tts::tests::recording_manager;

    fn setup(translation: &str, at: ScreenPosition) -> (FocusStateMachine, ActionMenu, OverlayId) {
        let board = Rc::new(RefCell::new(OverlayBoard::new()));
        let id = board.borrow_mut().render_overlay(
            ScreenRect::new(at.x, at.y, 100.0, 100.0),
            Color::rgb(1.0, 1.0, 1.0),
            "cat: 0.87",
            Some(translation),
            OverlayMetadata {
                category: "cat".into(),
                translation: translation.into(),
                confidence: 0.87,
                screen_position: at,
            },
        );
        let mut machine = FocusStateMachine::new(board);
        let menu = ActionMenu::attach(&MenuConfig::default(), &mut machine);
        (machine, menu, id)
    }

    #[test]
    fn test_shows_and_hides_with_focus() {
        let (mut machine, menu, id) = setup("Gatto", ScreenPosition::new(500.0, 900.0));
        assert!(!menu.is_visible());

        machine.handle_tap(id);
        {
            let view = menu.view();
            assert!(view.visible);
            assert_eq!(view.title, "cat \u{2192} Gatto");
            assert_eq!(view.info, "Confidence: 0.87");
            assert_eq!(view.position, ScreenPosition::new(500.0, 780.0));
        }

        assert_eq!(menu.close(&mut machine), FocusTransition::Unfocused);
        assert!(!menu.is_visible());
        assert!(!machine.has_focus());
    }

    #[test]
    fn test_position_clamped_to_canvas() {
        let (mut machine, menu, id) = setup("Gatto", ScreenPosition::new(5.0, 20.0));
        machine.handle_tap(id);
        assert_eq!(menu.view().position, ScreenPosition::new(300.0, 150.0));
    }

    #[test]
    fn test_pronunciation_reads_translation() {
        let (mut machine, menu, id) = setup("Gatto", ScreenPosition::new(500.0, 900.0));
        let (mut tts, spoken) = recording_manager(&SpeechConfig::default());

        assert!(!menu.play_pronunciation(&mut tts));
        machine.handle_tap(id);
        assert!(menu.play_pronunciation(&mut tts));

        assert_eq!(spoken.borrow().len(), 1);
        assert_eq!(spoken.borrow()[0].0, "Gatto");
        assert!(machine.has_focus());
    }

    #[test]
    fn test_pronunciation_without_translation() {
        let (mut machine, menu, id) = setup("", ScreenPosition::new(500.0, 900.0));
        let (mut tts, spoken) = recording_manager(&SpeechConfig::default());
        machine.handle_tap(id);

        assert_eq!(menu.view().title, "cat");
        assert!(!menu.play_pronunciation(&mut tts));
        assert!(spoken.borrow().is_empty());
    }

    #[test]
    fn test_examples_for_focused_category() {
        let (mut machine, menu, id) = setup("Gatto", ScreenPosition::new(500.0, 900.0));
        let sentences = SentenceDatabase::bundled().unwrap();

        assert!(menu.show_examples(&sentences).is_empty());
        machine.handle_tap(id);
        assert_eq!(menu.show_examples(&sentences).len(), 2);

        menu.detach(&mut machine);
    }
}
