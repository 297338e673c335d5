//! Text-to-speech
//!
//! Speech goes through a [`TtsProvider`] chosen at startup:
//! - a system speech command (`espeak-ng`, `espeak`, `say`) found on `PATH`
//! - otherwise a provider that only logs what would be spoken
//!
//! Providers release their resources on drop.

mod command;

pub use command::CommandTtsProvider;

use crate::core::{Error, ListenerId, Result, SpeechConfig, TargetLanguage};
use crate::focus::{FocusEvent, FocusStateMachine};
use std::cell::RefCell;
use std::rc::Rc;

/// Platform speech capability
pub trait TtsProvider {
    /// Start speaking without waiting for playback to finish.
    /// `rate` ranges from 0.0 (slow) to 1.0 (fast).
    fn speak(&mut self, text: &str, language_code: &str, rate: f32) -> Result<()>;

    fn stop(&mut self);

    fn is_speaking(&mut self) -> bool;

    /// Name of this provider
    fn name(&self) -> &str;
}

/// Fallback provider that logs instead of speaking
#[derive(Debug, Default)]
pub struct LogTtsProvider;

impl TtsProvider for LogTtsProvider {
    fn speak(&mut self, text: &str, language_code: &str, rate: f32) -> Result<()> {
        log::info!("[LogTts] Speaking: '{}' (Language: {}, Rate: {})", text, language_code, rate);
        Ok(())
    }

    fn stop(&mut self) {
        log::info!("[LogTts] Stopped");
    }

    fn is_speaking(&mut self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "Log only (no speech backend)"
    }
}

/// Speaks translations in the current target language
pub struct TtsManager {
    provider: Box<dyn TtsProvider>,
    language: TargetLanguage,
    config: SpeechConfig,
}

impl TtsManager {
    /// Use the best provider available on this machine
    pub fn detect(config: &SpeechConfig, language: TargetLanguage) -> Self {
        match CommandTtsProvider::detect() {
            Some(provider) => {
                log::info!("[TtsManager] Using {} for speech", provider.name());
                Self::with_provider(Box::new(provider), config, language)
            }
            None => {
                log::warn!("[TtsManager] No speech command available, logging only");
                Self::with_provider(Box::new(LogTtsProvider), config, language)
            }
        }
    }

    pub fn with_provider(provider: Box<dyn TtsProvider>, config: &SpeechConfig, language: TargetLanguage) -> Self {
        Self {
            provider,
            language,
            config: config.clone(),
        }
    }

    pub fn set_language(&mut self, language: TargetLanguage) {
        self.language = language;
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Speak `text` in the current language
    pub fn speak(&mut self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            log::warn!("[TtsManager] Cannot speak empty text");
            return Err(Error::Speech("Cannot speak empty text".to_string()));
        }

        let locale = self.language.tts_locale();
        log::info!("[TtsManager] Speaking '{}' in {}", text, locale);
        self.provider.speak(text, locale, self.config.speech_rate)
    }

    pub fn stop(&mut self) {
        self.provider.stop();
    }

    pub fn is_speaking(&mut self) -> bool {
        self.provider.is_speaking()
    }

    /// Speak each newly focused object's translation when auto-play is on.
    /// Returns the listener id, or `None` when auto-play is disabled.
    pub fn attach_auto_play(tts: &Rc<RefCell<TtsManager>>, machine: &mut FocusStateMachine) -> Option<ListenerId> {
        if !tts.borrow().config.auto_play_on_focus {
            return None;
        }

        let tts = Rc::clone(tts);
        Some(machine.subscribe(move |event| {
            if let FocusEvent::Focused(data) = event {
                if data.translation.is_empty() {
                    return;
                }
                if let Err(e) = tts.borrow_mut().speak(&data.translation) {
                    log::warn!("[TtsManager] Auto-play failed: {}", e);
                }
            }
        }))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::{Color, ScreenPosition, ScreenRect};
    use crate::overlay::{OverlayBoard, OverlayMetadata, OverlayRenderer};

    /// Provider that records calls into a shared log
    pub(crate) struct RecordingProvider {
        pub spoken: Rc<RefCell<Vec<(String, String, f32)>>>,
    }

    impl TtsProvider for RecordingProvider {
        fn speak(&mut self, text: &str, language_code: &str, rate: f32) -> Result<()> {
            self.spoken
                .borrow_mut()
                .push((text.to_string(), language_code.to_string(), rate));
            Ok(())
        }

        fn stop(&mut self) {}

        fn is_speaking(&mut self) -> bool {
            false
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    pub(crate) fn recording_manager(config: &SpeechConfig) -> (TtsManager, Rc<RefCell<Vec<(String, String, f32)>>>) {
        let spoken = Rc::new(RefCell::new(Vec::new()));
        let provider = RecordingProvider { spoken: spoken.clone() };
        let manager = TtsManager::with_provider(Box::new(provider), config, TargetLanguage::Italian);
        (manager, spoken)
    }

    #[test]
    fn test_speak_uses_language_locale() {
        let (mut tts, spoken) = recording_manager(&SpeechConfig::default());
        tts.speak("Gatto").unwrap();
        tts.set_language(TargetLanguage::French);
        tts.speak("Chat").unwrap();

        assert_eq!(
            *spoken.borrow(),
            vec![
                ("Gatto".to_string(), "it-IT".to_string(), 0.5),
                ("Chat".to_string(), "fr-FR".to_string(), 0.5),
            ]
        );
    }

    #[test]
    fn test_empty_text_rejected() {
        let (mut tts, spoken) = recording_manager(&SpeechConfig::default());
        assert!(matches!(tts.speak("  "), Err(Error::Speech(_))));
        assert!(spoken.borrow().is_empty());
    }

    #[test]
    fn test_auto_play_on_focus() {
        let board = Rc::new(RefCell::new(OverlayBoard::new()));
        let id = board.borrow_mut().render_overlay(
            ScreenRect::default(),
            Color::rgb(1.0, 1.0, 1.0),
            "chair: 0.80",
            Some("Sedia"),
            OverlayMetadata {
                category: "chair".into(),
                translation: "Sedia".into(),
                confidence: 0.8,
                screen_position: ScreenPosition::default(),
            },
        );
        let mut machine = FocusStateMachine::new(board);

        let config = SpeechConfig { auto_play_on_focus: true, ..Default::default() };
        let (tts, spoken) = recording_manager(&config);
        let tts = Rc::new(RefCell::new(tts));
        assert!(TtsManager::attach_auto_play(&tts, &mut machine).is_some());

        machine.handle_tap(id);
        machine.handle_tap(id);

        assert_eq!(spoken.borrow().len(), 1);
        assert_eq!(spoken.borrow()[0].0, "Sedia");
    }

    #[test]
    fn test_auto_play_disabled() {
        let board = Rc::new(RefCell::new(OverlayBoard::new()));
        let mut machine = FocusStateMachine::new(board);
        let (tts, _) = recording_manager(&SpeechConfig::default());
        assert!(TtsManager::attach_auto_play(&Rc::new(RefCell::new(tts)), &mut machine).is_none());
    }
}
